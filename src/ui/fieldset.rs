//! Fieldset: a composite form group bound to an entity definition.

#[cfg(test)]
#[path = "fieldset_test.rs"]
mod fieldset_test;

use crate::schema::{DefinitionId, EntityDefinition, Schema, SchemaError, VersionId};
use crate::survey::Survey;
use crate::ui::containers::{self, TabDefinition};
use crate::ui::item::ItemDefinition;
use crate::ui::node::UiNodeDefinition;
use crate::wire::FieldsetJson;

/// A grouped region of a form rendering one entity definition, with its own
/// nested tabs and items.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldsetDefinition {
    id: DefinitionId,
    parent: DefinitionId,
    entity_definition_id: DefinitionId,
    label: Option<String>,
    column: Option<i32>,
    column_span: Option<i32>,
    row: Option<i32>,
    total_columns: Option<i32>,
    total_rows: Option<i32>,
    tabs: Vec<TabDefinition>,
    items: Vec<ItemDefinition>,
}

impl FieldsetDefinition {
    /// Build a fieldset from its wire payload, owned by `parent`.
    #[must_use]
    pub fn from_json(json: &FieldsetJson, parent: DefinitionId) -> Self {
        Self {
            id: json.id,
            parent,
            entity_definition_id: json.entity_definition_id,
            label: json.label.clone(),
            column: json.column,
            column_span: json.column_span,
            row: json.row,
            total_columns: json.total_columns,
            total_rows: json.total_rows,
            tabs: containers::tabs_from_json(json.tabs.as_deref(), json.id),
            items: containers::items_from_json(json.children.as_deref(), json.id),
        }
    }

    /// Re-hydrate this fieldset in place, fully overwriting base fields and
    /// replacing tabs and items together. The parent link is preserved.
    pub fn fill_from_json(&mut self, json: &FieldsetJson) {
        *self = Self::from_json(json, self.parent);
    }

    /// Id of the entity definition this group renders.
    #[must_use]
    pub fn entity_definition_id(&self) -> DefinitionId {
        self.entity_definition_id
    }

    /// Id of the schema definition this node is bound to. Alias kept so all
    /// schema-bound UI nodes read uniformly.
    #[must_use]
    pub fn node_definition_id(&self) -> DefinitionId {
        self.entity_definition_id
    }

    /// Group caption, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Grid column this group starts at, if fixed.
    #[must_use]
    pub fn column(&self) -> Option<i32> {
        self.column
    }

    /// Number of grid columns this group spans, if fixed.
    #[must_use]
    pub fn column_span(&self) -> Option<i32> {
        self.column_span
    }

    /// Grid row this group starts at, if fixed.
    #[must_use]
    pub fn row(&self) -> Option<i32> {
        self.row
    }

    /// Inner grid column count, if fixed.
    #[must_use]
    pub fn total_columns(&self) -> Option<i32> {
        self.total_columns
    }

    /// Inner grid row count, if fixed.
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

    /// Resolve the entity definition this fieldset renders.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DefinitionNotFound`] when the referenced id is
    /// missing from the schema and [`SchemaError::NotAnEntity`] when it names
    /// an attribute; both signal a designer/schema mismatch upstream.
    pub fn entity_definition<'a>(&self, schema: &'a Schema) -> Result<&'a EntityDefinition, SchemaError> {
        schema.entity_by_id(self.entity_definition_id)
    }

    /// Whether this group is visible in the given version: true when at
    /// least one owned tab or item is.
    #[must_use]
    pub fn is_in_version(&self, survey: &Survey, version: VersionId) -> bool {
        containers::any_in_version(&self.tabs, &self.items, survey, version)
    }
}

impl UiNodeDefinition for FieldsetDefinition {
    fn id(&self) -> DefinitionId {
        self.id
    }

    fn parent_id(&self) -> Option<DefinitionId> {
        Some(self.parent)
    }
}
