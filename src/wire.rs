//! Wire DTOs for the survey-designer JSON boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the designer-service payloads so serde
//! round-trips stay lossless and hydration code can remain schema-driven.
//! Nested `tabs`/`children` arrive as optional arrays; hydration treats
//! absent and empty identically, so both stay `Option<Vec<_>>` here and
//! collapse to empty collections in the model layer.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::schema::{CodeListId, DefinitionId, UnitId, VersionId};
use crate::survey::SurveyId;

/// Full survey payload as returned by the designer service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyJson {
    /// Unique survey identifier.
    pub id: SurveyId,
    /// Internal survey name (machine-readable).
    pub name: String,
    /// Form versions, declared oldest to newest.
    #[serde(default)]
    pub versions: Vec<VersionJson>,
    /// Measurement units referenced by numeric attribute definitions.
    #[serde(default)]
    pub units: Vec<UnitJson>,
    /// Code lists referenced by code attribute definitions.
    #[serde(default)]
    pub code_lists: Vec<CodeListJson>,
    /// Entity/attribute definition tree.
    #[serde(default)]
    pub schema: SchemaJson,
    /// Form layout configuration, absent for surveys without a designed UI.
    #[serde(default)]
    pub ui_configuration: Option<UiJson>,
}

/// A declared survey form version.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionJson {
    /// Unique version identifier.
    pub id: VersionId,
    /// Internal version name (e.g. `"2024.1"`).
    pub name: String,
    /// Human-readable version label, if any.
    pub label: Option<String>,
}

/// A measurement unit usable by numeric attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitJson {
    /// Unique unit identifier.
    pub id: UnitId,
    /// Internal unit name (e.g. `"metre"`).
    pub name: String,
    /// Human-readable label, if any.
    pub label: Option<String>,
    /// Short display form (e.g. `"m"`), if any.
    pub abbreviation: Option<String>,
}

/// A code list: a named tree of selectable codes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeListJson {
    /// Unique code list identifier.
    pub id: CodeListId,
    /// Internal list name.
    pub name: String,
    /// Top-level items; nested items form hierarchical lists.
    #[serde(default)]
    pub items: Vec<CodeListItemJson>,
}

/// One selectable item inside a code list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeListItemJson {
    /// Unique item identifier within the survey.
    pub id: i64,
    /// The code value stored in records.
    pub code: String,
    /// Human-readable label, if any.
    pub label: Option<String>,
    /// Display color (hex), if assigned in the designer.
    pub color: Option<String>,
    /// Whether selecting this item prompts for a free-text qualifier.
    #[serde(default)]
    pub qualifiable: bool,
    /// Child items for hierarchical lists.
    #[serde(default)]
    pub items: Vec<CodeListItemJson>,
}

/// The schema payload: nested entity/attribute definition trees.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaJson {
    /// Root entity definitions, one per record type.
    #[serde(default)]
    pub root_entities: Vec<NodeDefinitionJson>,
}

/// A schema node, discriminated by the `type` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum NodeDefinitionJson {
    /// A record-type node owning child definitions.
    Entity(EntityDefinitionJson),
    /// A leaf node describing one collected value.
    Attribute(AttributeDefinitionJson),
}

/// An entity definition with its nested children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDefinitionJson {
    /// Unique definition identifier within the survey.
    pub id: DefinitionId,
    /// Internal node name.
    pub name: String,
    /// Human-readable label, if any.
    pub label: Option<String>,
    /// Whether multiple instances may exist per parent.
    #[serde(default)]
    pub multiple: bool,
    /// First version this node appears in, if restricted.
    pub since_version_id: Option<VersionId>,
    /// Version this node was retired in, if retired.
    pub deprecated_version_id: Option<VersionId>,
    /// Child definitions in declaration order.
    #[serde(default)]
    pub children: Vec<NodeDefinitionJson>,
}

/// An attribute definition; its kind-specific fields ride alongside the
/// common ones and are discriminated by `attributeType`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinitionJson {
    /// Unique definition identifier within the survey.
    pub id: DefinitionId,
    /// Internal node name.
    pub name: String,
    /// Human-readable label, if any.
    pub label: Option<String>,
    /// Whether multiple values may exist per parent entity.
    #[serde(default)]
    pub multiple: bool,
    /// First version this node appears in, if restricted.
    pub since_version_id: Option<VersionId>,
    /// Version this node was retired in, if retired.
    pub deprecated_version_id: Option<VersionId>,
    /// Kind-specific payload (unit links, code list link).
    #[serde(flatten)]
    pub kind: AttributeKindJson,
}

/// Kind-specific attribute payload, discriminated by `attributeType`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "attributeType", rename_all = "UPPERCASE")]
pub enum AttributeKindJson {
    /// Single numeric value with optional measurement units.
    #[serde(rename_all = "camelCase")]
    Number {
        /// Units selectable for this attribute, in designer order.
        #[serde(default)]
        unit_ids: Vec<UnitId>,
    },
    /// Numeric from/to range with optional measurement units.
    #[serde(rename_all = "camelCase")]
    Range {
        /// Units selectable for this attribute, in designer order.
        #[serde(default)]
        unit_ids: Vec<UnitId>,
    },
    /// Code selected from a code list.
    #[serde(rename_all = "camelCase")]
    Code {
        /// The list codes are drawn from, if linked.
        code_list_id: Option<CodeListId>,
    },
    /// Free text value.
    Text,
    /// Calendar date value.
    Date,
    /// Attribute types this crate does not model; hydrated without kind data
    /// so one exotic attribute never fails the whole survey payload.
    #[serde(other)]
    Other,
}

/// UI configuration payload: the set of designed form layouts for a survey.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiJson {
    /// One tab set per root entity, in designer order.
    #[serde(default)]
    pub tab_sets: Vec<TabSetJson>,
}

/// A root form layout bound to a root entity definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSetJson {
    /// Unique UI node identifier within the configuration.
    pub id: DefinitionId,
    /// The root entity this layout renders.
    pub root_entity_definition_id: DefinitionId,
    /// Grid column count, if the designer fixed one.
    pub total_columns: Option<i32>,
    /// Grid row count, if the designer fixed one.
    pub total_rows: Option<i32>,
    /// Nested tab containers; absent and empty are equivalent.
    pub tabs: Option<Vec<TabJson>>,
    /// Direct child items; absent and empty are equivalent.
    pub children: Option<Vec<ItemJson>>,
}

/// A tab container grouping items within a tab set or fieldset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabJson {
    /// Unique UI node identifier within the configuration.
    pub id: DefinitionId,
    /// Tab caption, if any.
    pub label: Option<String>,
    /// Nested tab containers; absent and empty are equivalent.
    pub tabs: Option<Vec<TabJson>>,
    /// Child items; absent and empty are equivalent.
    pub children: Option<Vec<ItemJson>>,
}

/// A form item, discriminated by the `type` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum ItemJson {
    /// Composite group bound to an entity definition.
    Fieldset(FieldsetJson),
    /// Input bound to an attribute definition.
    Field(FieldJson),
    /// Static caption with no schema binding.
    Text(TextJson),
}

/// A fieldset item with its own nested layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldsetJson {
    /// Unique UI node identifier within the configuration.
    pub id: DefinitionId,
    /// The entity definition this group renders.
    pub entity_definition_id: DefinitionId,
    /// Group caption, if any.
    pub label: Option<String>,
    /// Grid column this group starts at, if fixed.
    pub column: Option<i32>,
    /// Number of grid columns this group spans, if fixed.
    pub column_span: Option<i32>,
    /// Grid row this group starts at, if fixed.
    pub row: Option<i32>,
    /// Inner grid column count, if fixed.
    pub total_columns: Option<i32>,
    /// Inner grid row count, if fixed.
    pub total_rows: Option<i32>,
    /// Nested tab containers; absent and empty are equivalent.
    pub tabs: Option<Vec<TabJson>>,
    /// Child items; absent and empty are equivalent.
    pub children: Option<Vec<ItemJson>>,
}

/// A field item referencing one attribute definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldJson {
    /// Unique UI node identifier within the configuration.
    pub id: DefinitionId,
    /// The attribute definition this input collects.
    pub attribute_definition_id: DefinitionId,
    /// Input caption override, if any.
    pub label: Option<String>,
    /// Grid column this input sits in, if fixed.
    pub column: Option<i32>,
    /// Number of grid columns this input spans, if fixed.
    pub column_span: Option<i32>,
    /// Grid row this input sits in, if fixed.
    pub row: Option<i32>,
}

/// A static text item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextJson {
    /// Unique UI node identifier within the configuration.
    pub id: DefinitionId,
    /// The caption to display.
    pub label: Option<String>,
}
