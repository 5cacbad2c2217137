//! Schema model: entity/attribute definitions and the flat lookup index.
//!
//! The designer service delivers the schema as a nested tree
//! ([`crate::wire::SchemaJson`]); records and UI nodes reference definitions
//! by id. This module flattens that tree into an id-keyed index so foreign
//! keys resolve in constant time. Parent/child linkage is kept as ids, which
//! keeps the index cloneable and free of reference cycles.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::collections::HashMap;

use crate::wire::{AttributeKindJson, CodeListItemJson, CodeListJson, NodeDefinitionJson, SchemaJson};

/// Unique identifier for a schema or UI definition node.
pub type DefinitionId = i64;

/// Unique identifier for a survey form version.
pub type VersionId = i64;

/// Unique identifier for a measurement unit.
pub type UnitId = i64;

/// Unique identifier for a code list.
pub type CodeListId = i64;

/// Error returned by strict schema lookups.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// No definition with the given id exists in the schema.
    #[error("definition {0} not found in schema")]
    DefinitionNotFound(DefinitionId),
    /// The definition exists but is an attribute, not an entity.
    #[error("definition {0} is not an entity definition")]
    NotAnEntity(DefinitionId),
    /// The definition exists but is an entity, not an attribute.
    #[error("definition {0} is not an attribute definition")]
    NotAnAttribute(DefinitionId),
}

/// A schema node: either a record-type entity or a value-bearing attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeDefinition {
    /// A record-type node owning child definitions.
    Entity(EntityDefinition),
    /// A leaf node describing one collected value.
    Attribute(AttributeDefinition),
}

impl NodeDefinition {
    /// Unique definition identifier.
    #[must_use]
    pub fn id(&self) -> DefinitionId {
        match self {
            Self::Entity(entity) => entity.id,
            Self::Attribute(attribute) => attribute.id,
        }
    }

    /// Internal node name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Entity(entity) => &entity.name,
            Self::Attribute(attribute) => &attribute.name,
        }
    }

    /// Human-readable label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Entity(entity) => entity.label.as_deref(),
            Self::Attribute(attribute) => attribute.label.as_deref(),
        }
    }

    /// Whether multiple instances may exist per parent.
    #[must_use]
    pub fn multiple(&self) -> bool {
        match self {
            Self::Entity(entity) => entity.multiple,
            Self::Attribute(attribute) => attribute.multiple,
        }
    }

    /// Id of the owning entity definition; `None` for root entities.
    #[must_use]
    pub fn parent_id(&self) -> Option<DefinitionId> {
        match self {
            Self::Entity(entity) => entity.parent_id,
            Self::Attribute(attribute) => attribute.parent_id,
        }
    }

    /// First version this node appears in, if restricted.
    #[must_use]
    pub fn since_version_id(&self) -> Option<VersionId> {
        match self {
            Self::Entity(entity) => entity.since_version_id,
            Self::Attribute(attribute) => attribute.since_version_id,
        }
    }

    /// Version this node was retired in, if retired.
    #[must_use]
    pub fn deprecated_version_id(&self) -> Option<VersionId> {
        match self {
            Self::Entity(entity) => entity.deprecated_version_id,
            Self::Attribute(attribute) => attribute.deprecated_version_id,
        }
    }
}

/// A record-type definition with ordered child definition ids.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityDefinition {
    /// Unique definition identifier within the survey.
    pub id: DefinitionId,
    /// Internal node name.
    pub name: String,
    /// Human-readable label, if any.
    pub label: Option<String>,
    /// Whether multiple instances may exist per parent.
    pub multiple: bool,
    /// First version this node appears in, if restricted.
    pub since_version_id: Option<VersionId>,
    /// Version this node was retired in, if retired.
    pub deprecated_version_id: Option<VersionId>,
    /// Id of the owning entity definition; `None` for root entities.
    pub parent_id: Option<DefinitionId>,
    /// Child definition ids in declaration order.
    pub child_ids: Vec<DefinitionId>,
}

/// A value-bearing definition with its kind-specific linkage.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeDefinition {
    /// Unique definition identifier within the survey.
    pub id: DefinitionId,
    /// Internal node name.
    pub name: String,
    /// Human-readable label, if any.
    pub label: Option<String>,
    /// Whether multiple values may exist per parent entity.
    pub multiple: bool,
    /// First version this node appears in, if restricted.
    pub since_version_id: Option<VersionId>,
    /// Version this node was retired in, if retired.
    pub deprecated_version_id: Option<VersionId>,
    /// Id of the owning entity definition.
    pub parent_id: Option<DefinitionId>,
    /// Kind-specific data (unit links, code list link).
    pub kind: AttributeKind,
}

/// Kind-specific attribute data.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeKind {
    /// Single numeric value with optional measurement units.
    Number {
        /// Units selectable for this attribute, in designer order.
        unit_ids: Vec<UnitId>,
    },
    /// Numeric from/to range with optional measurement units.
    Range {
        /// Units selectable for this attribute, in designer order.
        unit_ids: Vec<UnitId>,
    },
    /// Code selected from a code list.
    Code {
        /// The list codes are drawn from, if linked.
        code_list_id: Option<CodeListId>,
    },
    /// Free text value.
    Text,
    /// Calendar date value.
    Date,
    /// Attribute types this crate does not model.
    Other,
}

impl AttributeKind {
    fn from_json(json: &AttributeKindJson) -> Self {
        match json {
            AttributeKindJson::Number { unit_ids } => Self::Number { unit_ids: unit_ids.clone() },
            AttributeKindJson::Range { unit_ids } => Self::Range { unit_ids: unit_ids.clone() },
            AttributeKindJson::Code { code_list_id } => Self::Code { code_list_id: *code_list_id },
            AttributeKindJson::Text => Self::Text,
            AttributeKindJson::Date => Self::Date,
            AttributeKindJson::Other => Self::Other,
        }
    }

    /// Units selectable for this attribute; empty for unitless kinds.
    #[must_use]
    pub fn unit_ids(&self) -> &[UnitId] {
        match self {
            Self::Number { unit_ids } | Self::Range { unit_ids } => unit_ids,
            Self::Code { .. } | Self::Text | Self::Date | Self::Other => &[],
        }
    }
}

/// Flat, id-indexed view of a survey schema.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    definitions: HashMap<DefinitionId, NodeDefinition>,
    root_entity_ids: Vec<DefinitionId>,
}

impl Schema {
    /// Flatten a nested schema payload into an id-indexed schema.
    ///
    /// Never fails: a duplicate id keeps the definition that appears last in
    /// document order and logs a warning instead of rejecting the payload.
    #[must_use]
    pub fn from_json(json: &SchemaJson) -> Self {
        let mut definitions = HashMap::new();
        let root_entity_ids: Vec<DefinitionId> = json.root_entities.iter().map(node_json_id).collect();

        // Nodes are pushed reversed so pops visit the tree in document order;
        // the index insert is last-writer-wins, so the last duplicate survives.
        let mut stack: Vec<(&NodeDefinitionJson, Option<DefinitionId>)> =
            json.root_entities.iter().rev().map(|root| (root, None)).collect();

        while let Some((node, parent_id)) = stack.pop() {
            match node {
                NodeDefinitionJson::Entity(entity) => {
                    let definition = NodeDefinition::Entity(EntityDefinition {
                        id: entity.id,
                        name: entity.name.clone(),
                        label: entity.label.clone(),
                        multiple: entity.multiple,
                        since_version_id: entity.since_version_id,
                        deprecated_version_id: entity.deprecated_version_id,
                        parent_id,
                        child_ids: entity.children.iter().map(node_json_id).collect(),
                    });
                    insert_definition(&mut definitions, definition);
                    for child in entity.children.iter().rev() {
                        stack.push((child, Some(entity.id)));
                    }
                }
                NodeDefinitionJson::Attribute(attribute) => {
                    let definition = NodeDefinition::Attribute(AttributeDefinition {
                        id: attribute.id,
                        name: attribute.name.clone(),
                        label: attribute.label.clone(),
                        multiple: attribute.multiple,
                        since_version_id: attribute.since_version_id,
                        deprecated_version_id: attribute.deprecated_version_id,
                        parent_id,
                        kind: AttributeKind::from_json(&attribute.kind),
                    });
                    insert_definition(&mut definitions, definition);
                }
            }
        }

        Self { definitions, root_entity_ids }
    }

    /// Look up any definition by id.
    #[must_use]
    pub fn definition_by_id(&self, id: DefinitionId) -> Option<&NodeDefinition> {
        self.definitions.get(&id)
    }

    /// Look up an entity definition by id.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DefinitionNotFound`] for unknown ids and
    /// [`SchemaError::NotAnEntity`] when the id belongs to an attribute.
    pub fn entity_by_id(&self, id: DefinitionId) -> Result<&EntityDefinition, SchemaError> {
        match self.definitions.get(&id) {
            Some(NodeDefinition::Entity(entity)) => Ok(entity),
            Some(NodeDefinition::Attribute(_)) => Err(SchemaError::NotAnEntity(id)),
            None => Err(SchemaError::DefinitionNotFound(id)),
        }
    }

    /// Look up an attribute definition by id.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DefinitionNotFound`] for unknown ids and
    /// [`SchemaError::NotAnAttribute`] when the id belongs to an entity.
    pub fn attribute_by_id(&self, id: DefinitionId) -> Result<&AttributeDefinition, SchemaError> {
        match self.definitions.get(&id) {
            Some(NodeDefinition::Attribute(attribute)) => Ok(attribute),
            Some(NodeDefinition::Entity(_)) => Err(SchemaError::NotAnAttribute(id)),
            None => Err(SchemaError::DefinitionNotFound(id)),
        }
    }

    /// Nearest ancestor entity of a definition, walking parent links upward.
    /// Returns `None` for root entities and unknown ids.
    #[must_use]
    pub fn nearest_parent_entity(&self, id: DefinitionId) -> Option<&EntityDefinition> {
        let mut current = self.definitions.get(&id)?.parent_id();
        while let Some(parent_id) = current {
            match self.definitions.get(&parent_id) {
                Some(NodeDefinition::Entity(entity)) => return Some(entity),
                Some(definition) => current = definition.parent_id(),
                None => return None,
            }
        }
        None
    }

    /// Ordered ids of the root entity definitions.
    #[must_use]
    pub fn root_entity_ids(&self) -> &[DefinitionId] {
        &self.root_entity_ids
    }

    /// Number of definitions in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if the schema holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn node_json_id(node: &NodeDefinitionJson) -> DefinitionId {
    match node {
        NodeDefinitionJson::Entity(entity) => entity.id,
        NodeDefinitionJson::Attribute(attribute) => attribute.id,
    }
}

fn insert_definition(definitions: &mut HashMap<DefinitionId, NodeDefinition>, definition: NodeDefinition) {
    if let Some(previous) = definitions.insert(definition.id(), definition) {
        tracing::warn!(definition_id = previous.id(), "duplicate definition id in schema payload, keeping the last one");
    }
}

/// A code list: a named tree of selectable codes.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeList {
    /// Unique code list identifier.
    pub id: CodeListId,
    /// Internal list name.
    pub name: String,
    /// Top-level items; nested items form hierarchical lists.
    pub items: Vec<CodeListItem>,
}

/// One selectable item inside a code list.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeListItem {
    /// Unique item identifier within the survey.
    pub id: i64,
    /// The code value stored in records.
    pub code: String,
    /// Human-readable label, if any.
    pub label: Option<String>,
    /// Display color (hex), if assigned in the designer.
    pub color: Option<String>,
    /// Whether selecting this item prompts for a free-text qualifier.
    pub qualifiable: bool,
    /// Child items for hierarchical lists.
    pub items: Vec<CodeListItem>,
}

impl CodeList {
    /// Hydrate a code list from its wire payload.
    #[must_use]
    pub fn from_json(json: &CodeListJson) -> Self {
        Self {
            id: json.id,
            name: json.name.clone(),
            items: json.items.iter().map(CodeListItem::from_json).collect(),
        }
    }

    /// Find an item by code anywhere in the list, including nested levels.
    #[must_use]
    pub fn item_by_code(&self, code: &str) -> Option<&CodeListItem> {
        let mut stack: Vec<&CodeListItem> = self.items.iter().collect();
        while let Some(item) = stack.pop() {
            if item.code == code {
                return Some(item);
            }
            stack.extend(item.items.iter());
        }
        None
    }
}

impl CodeListItem {
    fn from_json(json: &CodeListItemJson) -> Self {
        Self {
            id: json.id,
            code: json.code.clone(),
            label: json.label.clone(),
            color: json.color.clone(),
            qualifiable: json.qualifiable,
            items: json.items.iter().map(Self::from_json).collect(),
        }
    }
}
