//! Form items: the polymorphic children of tabs, tab sets, and fieldsets.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use crate::schema::{DefinitionId, VersionId};
use crate::survey::Survey;
use crate::ui::fieldset::FieldsetDefinition;
use crate::ui::node::{UiNodeDefinition, UiNodeRef};
use crate::wire::{FieldJson, ItemJson, TextJson};

/// One form item, dispatched on the payload's type discriminator.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemDefinition {
    /// Composite group bound to an entity definition.
    Fieldset(FieldsetDefinition),
    /// Input bound to an attribute definition.
    Field(FieldDefinition),
    /// Static caption with no schema binding.
    Text(TextDefinition),
}

impl ItemDefinition {
    /// Build an item from its wire payload, owned by `parent`.
    #[must_use]
    pub fn from_json(json: &ItemJson, parent: DefinitionId) -> Self {
        match json {
            ItemJson::Fieldset(fieldset) => Self::Fieldset(FieldsetDefinition::from_json(fieldset, parent)),
            ItemJson::Field(field) => Self::Field(FieldDefinition::from_json(field, parent)),
            ItemJson::Text(text) => Self::Text(TextDefinition::from_json(text, parent)),
        }
    }

    /// Id of the schema definition this item is bound to, if it has one:
    /// the entity for fieldsets, the attribute for fields, none for text.
    #[must_use]
    pub fn node_definition_id(&self) -> Option<DefinitionId> {
        match self {
            Self::Fieldset(fieldset) => Some(fieldset.entity_definition_id()),
            Self::Field(field) => Some(field.attribute_definition_id()),
            Self::Text(_) => None,
        }
    }

    /// Whether this item is visible in the given version. Fieldsets answer
    /// existentially over their children, fields by schema applicability of
    /// the bound attribute, and text items follow their container.
    #[must_use]
    pub fn is_in_version(&self, survey: &Survey, version: VersionId) -> bool {
        match self {
            Self::Fieldset(fieldset) => fieldset.is_in_version(survey, version),
            Self::Field(field) => field.is_in_version(survey, version),
            Self::Text(_) => true,
        }
    }

    /// View this item as a generic UI node.
    #[must_use]
    pub fn as_node_ref(&self) -> UiNodeRef<'_> {
        match self {
            Self::Fieldset(fieldset) => UiNodeRef::Fieldset(fieldset),
            Self::Field(field) => UiNodeRef::Field(field),
            Self::Text(text) => UiNodeRef::Text(text),
        }
    }
}

impl UiNodeDefinition for ItemDefinition {
    fn id(&self) -> DefinitionId {
        self.as_node_ref().id()
    }

    fn parent_id(&self) -> Option<DefinitionId> {
        self.as_node_ref().parent_id()
    }
}

/// An input item referencing one attribute definition.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    id: DefinitionId,
    parent: DefinitionId,
    attribute_definition_id: DefinitionId,
    label: Option<String>,
    column: Option<i32>,
    column_span: Option<i32>,
    row: Option<i32>,
}

impl FieldDefinition {
    /// Build a field from its wire payload, owned by `parent`.
    #[must_use]
    pub fn from_json(json: &FieldJson, parent: DefinitionId) -> Self {
        Self {
            id: json.id,
            parent,
            attribute_definition_id: json.attribute_definition_id,
            label: json.label.clone(),
            column: json.column,
            column_span: json.column_span,
            row: json.row,
        }
    }

    /// Re-hydrate this field in place. The parent link is preserved.
    pub fn fill_from_json(&mut self, json: &FieldJson) {
        *self = Self::from_json(json, self.parent);
    }

    /// Id of the attribute definition this input collects.
    #[must_use]
    pub fn attribute_definition_id(&self) -> DefinitionId {
        self.attribute_definition_id
    }

    /// Input caption override, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Grid column this input sits in, if fixed.
    #[must_use]
    pub fn column(&self) -> Option<i32> {
        self.column
    }

    /// Number of grid columns this input spans, if fixed.
    #[must_use]
    pub fn column_span(&self) -> Option<i32> {
        self.column_span
    }

    /// Grid row this input sits in, if fixed.
    #[must_use]
    pub fn row(&self) -> Option<i32> {
        self.row
    }

    /// Whether the bound attribute definition is applicable in the version.
    /// A field whose attribute id dangles reports not visible (the survey
    /// logs the dangling reference).
    #[must_use]
    pub fn is_in_version(&self, survey: &Survey, version: VersionId) -> bool {
        survey.definition_in_version(self.attribute_definition_id, version)
    }
}

impl UiNodeDefinition for FieldDefinition {
    fn id(&self) -> DefinitionId {
        self.id
    }

    fn parent_id(&self) -> Option<DefinitionId> {
        Some(self.parent)
    }
}

/// A static caption item.
#[derive(Clone, Debug, PartialEq)]
pub struct TextDefinition {
    id: DefinitionId,
    parent: DefinitionId,
    label: Option<String>,
}

impl TextDefinition {
    /// Build a text item from its wire payload, owned by `parent`.
    #[must_use]
    pub fn from_json(json: &TextJson, parent: DefinitionId) -> Self {
        Self {
            id: json.id,
            parent,
            label: json.label.clone(),
        }
    }

    /// The caption to display, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl UiNodeDefinition for TextDefinition {
    fn id(&self) -> DefinitionId {
        self.id
    }

    fn parent_id(&self) -> Option<DefinitionId> {
        Some(self.parent)
    }
}
