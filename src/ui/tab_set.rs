//! Tab set: the root form layout for one root entity.

#[cfg(test)]
#[path = "tab_set_test.rs"]
mod tab_set_test;

use crate::schema::{DefinitionId, EntityDefinition, Schema, SchemaError, VersionId};
use crate::survey::Survey;
use crate::ui::containers::{self, TabDefinition};
use crate::ui::item::ItemDefinition;
use crate::ui::node::UiNodeDefinition;
use crate::wire::TabSetJson;

/// The root UI container of one designed form, bound to a root entity.
#[derive(Clone, Debug, PartialEq)]
pub struct TabSetDefinition {
    id: DefinitionId,
    root_entity_definition_id: DefinitionId,
    total_columns: Option<i32>,
    total_rows: Option<i32>,
    tabs: Vec<TabDefinition>,
    items: Vec<ItemDefinition>,
}

impl TabSetDefinition {
    /// Build a tab set from its wire payload.
    #[must_use]
    pub fn from_json(json: &TabSetJson) -> Self {
        Self {
            id: json.id,
            root_entity_definition_id: json.root_entity_definition_id,
            total_columns: json.total_columns,
            total_rows: json.total_rows,
            tabs: containers::tabs_from_json(json.tabs.as_deref(), json.id),
            items: containers::items_from_json(json.children.as_deref(), json.id),
        }
    }

    /// Re-hydrate this tab set in place, fully overwriting base fields and
    /// replacing tabs and items together. Safe to call on every re-fetch.
    pub fn fill_from_json(&mut self, json: &TabSetJson) {
        *self = Self::from_json(json);
    }

    /// Id of the root entity definition this layout renders.
    #[must_use]
    pub fn root_entity_definition_id(&self) -> DefinitionId {
        self.root_entity_definition_id
    }

    /// Grid column count, if the designer fixed one.
    #[must_use]
    pub fn total_columns(&self) -> Option<i32> {
        self.total_columns
    }

    /// Grid row count, if the designer fixed one.
    #[must_use]
    pub fn total_rows(&self) -> Option<i32> {
        self.total_rows
    }

    /// Owned tab containers in designer order.
    #[must_use]
    pub fn tabs(&self) -> &[TabDefinition] {
        &self.tabs
    }

    /// Owned items in designer order.
    #[must_use]
    pub fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    /// Resolve the root entity definition in the owning survey's schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DefinitionNotFound`] when the referenced id is
    /// missing from the schema and [`SchemaError::NotAnEntity`] when it names
    /// an attribute; both signal a designer/schema mismatch upstream.
    pub fn root_entity_definition<'a>(&self, schema: &'a Schema) -> Result<&'a EntityDefinition, SchemaError> {
        schema.entity_by_id(self.root_entity_definition_id)
    }

    /// Whether this layout is visible in the given version: true when at
    /// least one owned tab or item is. An empty tab set is in no version.
    #[must_use]
    pub fn is_in_version(&self, survey: &Survey, version: VersionId) -> bool {
        containers::any_in_version(&self.tabs, &self.items, survey, version)
    }
}

impl UiNodeDefinition for TabSetDefinition {
    fn id(&self) -> DefinitionId {
        self.id
    }

    fn parent_id(&self) -> Option<DefinitionId> {
        None
    }
}
