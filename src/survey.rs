//! Survey aggregate: versions, units, code lists, schema, and the UI tree.
//!
//! DESIGN
//! ======
//! A survey hydrates in one pass from [`crate::wire::SurveyJson`] and never
//! fails on dangling ids; bad references degrade at lookup time with a
//! warning so one stale link cannot reject a whole payload. Version
//! applicability is ordinal: versions are declared oldest to newest, and a
//! definition is applicable when its since bound (inclusive) sits at or
//! before the queried version and its deprecated bound (exclusive) after it.

#[cfg(test)]
#[path = "survey_test.rs"]
mod survey_test;

use crate::schema::{CodeList, CodeListId, DefinitionId, Schema, UnitId, VersionId};
use crate::ui::configuration::UiConfiguration;
use crate::wire::{SurveyJson, UnitJson, VersionJson};

/// Unique identifier for a survey.
pub type SurveyId = i64;

/// A declared survey form version.
#[derive(Clone, Debug, PartialEq)]
pub struct SurveyVersion {
    /// Unique version identifier.
    pub id: VersionId,
    /// Internal version name.
    pub name: String,
    /// Human-readable label, if any.
    pub label: Option<String>,
}

impl SurveyVersion {
    fn from_json(json: &VersionJson) -> Self {
        Self {
            id: json.id,
            name: json.name.clone(),
            label: json.label.clone(),
        }
    }
}

/// A measurement unit usable by numeric attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    /// Unique unit identifier.
    pub id: UnitId,
    /// Internal unit name.
    pub name: String,
    /// Human-readable label, if any.
    pub label: Option<String>,
    /// Short display form, if any.
    pub abbreviation: Option<String>,
}

impl Unit {
    fn from_json(json: &UnitJson) -> Self {
        Self {
            id: json.id,
            name: json.name.clone(),
            label: json.label.clone(),
            abbreviation: json.abbreviation.clone(),
        }
    }
}

/// A fully hydrated survey: the context UI nodes and records resolve against.
#[derive(Clone, Debug, PartialEq)]
pub struct Survey {
    /// Unique survey identifier.
    pub id: SurveyId,
    /// Internal survey name.
    pub name: String,
    /// Entity/attribute definitions, indexed by id.
    pub schema: Schema,
    /// Form versions in declared oldest-to-newest order.
    pub versions: Vec<SurveyVersion>,
    /// Measurement units referenced by numeric attributes.
    pub units: Vec<Unit>,
    /// Code lists referenced by code attributes.
    pub code_lists: Vec<CodeList>,
    /// Designed form layouts.
    pub ui: UiConfiguration,
}

impl Survey {
    /// Hydrate a survey from its designer payload.
    #[must_use]
    pub fn from_json(json: &SurveyJson) -> Self {
        Self {
            id: json.id,
            name: json.name.clone(),
            schema: Schema::from_json(&json.schema),
            versions: json.versions.iter().map(SurveyVersion::from_json).collect(),
            units: json.units.iter().map(Unit::from_json).collect(),
            code_lists: json.code_lists.iter().map(CodeList::from_json).collect(),
            ui: match &json.ui_configuration {
                Some(ui) => UiConfiguration::from_json(ui),
                None => UiConfiguration::default(),
            },
        }
    }

    /// Ordinal position of a version in the declared oldest-to-newest order.
    #[must_use]
    pub fn version_ordinal(&self, id: VersionId) -> Option<usize> {
        self.versions.iter().position(|version| version.id == id)
    }

    /// Look up a version by id.
    #[must_use]
    pub fn version_by_id(&self, id: VersionId) -> Option<&SurveyVersion> {
        self.versions.iter().find(|version| version.id == id)
    }

    /// Look up a measurement unit by id.
    #[must_use]
    pub fn unit_by_id(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Look up a code list by id.
    #[must_use]
    pub fn code_list_by_id(&self, id: CodeListId) -> Option<&CodeList> {
        self.code_lists.iter().find(|list| list.id == id)
    }

    /// Whether a schema definition is applicable in the given version.
    ///
    /// A definition without version bounds is applicable everywhere. An
    /// unknown definition or version id logs a warning and reports not
    /// applicable; a bound referencing an unknown version drops that bound
    /// instead of failing the whole check.
    #[must_use]
    pub fn definition_in_version(&self, definition_id: DefinitionId, version: VersionId) -> bool {
        let Some(definition) = self.schema.definition_by_id(definition_id) else {
            tracing::warn!(definition_id, "version check against a definition missing from the schema");
            return false;
        };
        let Some(ordinal) = self.version_ordinal(version) else {
            tracing::warn!(version_id = version, "version check against a version missing from the survey");
            return false;
        };

        if let Some(since) = definition.since_version_id() {
            match self.version_ordinal(since) {
                Some(since_ordinal) if ordinal < since_ordinal => return false,
                Some(_) => {}
                None => {
                    tracing::warn!(definition_id, since_version_id = since, "definition references an unknown since version");
                }
            }
        }
        if let Some(deprecated) = definition.deprecated_version_id() {
            match self.version_ordinal(deprecated) {
                Some(deprecated_ordinal) if ordinal >= deprecated_ordinal => return false,
                Some(_) => {}
                None => {
                    tracing::warn!(definition_id, deprecated_version_id = deprecated, "definition references an unknown deprecated version");
                }
            }
        }
        true
    }
}
