//! Base contract shared by every node in the UI-definition tree.

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

use crate::schema::DefinitionId;
use crate::ui::containers::TabDefinition;
use crate::ui::fieldset::FieldsetDefinition;
use crate::ui::item::{FieldDefinition, ItemDefinition, TextDefinition};
use crate::ui::tab_set::TabSetDefinition;

/// Identity and ownership contract for UI-definition nodes.
///
/// Identity is the node id, unique within one UI configuration. The parent
/// back-reference is stored as the owning node's id, wired at construction
/// and immutable afterwards; tab sets are roots and report no parent.
pub trait UiNodeDefinition {
    /// Unique id of this node within its UI configuration.
    fn id(&self) -> DefinitionId;

    /// Id of the owning node; `None` for roots.
    fn parent_id(&self) -> Option<DefinitionId>;
}

/// Borrowed view over any node kind in the UI-definition tree.
#[derive(Clone, Copy, Debug)]
pub enum UiNodeRef<'a> {
    /// A root tab set.
    TabSet(&'a TabSetDefinition),
    /// A tab container.
    Tab(&'a TabDefinition),
    /// A fieldset item.
    Fieldset(&'a FieldsetDefinition),
    /// A field item.
    Field(&'a FieldDefinition),
    /// A static text item.
    Text(&'a TextDefinition),
}

impl<'a> UiNodeRef<'a> {
    /// Unique id of the viewed node.
    #[must_use]
    pub fn id(&self) -> DefinitionId {
        match self {
            Self::TabSet(tab_set) => tab_set.id(),
            Self::Tab(tab) => tab.id(),
            Self::Fieldset(fieldset) => fieldset.id(),
            Self::Field(field) => field.id(),
            Self::Text(text) => text.id(),
        }
    }

    /// Id of the owning node; `None` for tab sets.
    #[must_use]
    pub fn parent_id(&self) -> Option<DefinitionId> {
        match self {
            Self::TabSet(tab_set) => tab_set.parent_id(),
            Self::Tab(tab) => tab.parent_id(),
            Self::Fieldset(fieldset) => fieldset.parent_id(),
            Self::Field(field) => field.parent_id(),
            Self::Text(text) => text.parent_id(),
        }
    }

    /// Push this node's direct children onto a traversal stack.
    pub(crate) fn push_children(self, stack: &mut Vec<UiNodeRef<'a>>) {
        match self {
            Self::TabSet(tab_set) => {
                stack.extend(tab_set.tabs().iter().map(UiNodeRef::Tab));
                stack.extend(tab_set.items().iter().map(ItemDefinition::as_node_ref));
            }
            Self::Tab(tab) => {
                stack.extend(tab.tabs().iter().map(UiNodeRef::Tab));
                stack.extend(tab.items().iter().map(ItemDefinition::as_node_ref));
            }
            Self::Fieldset(fieldset) => {
                stack.extend(fieldset.tabs().iter().map(UiNodeRef::Tab));
                stack.extend(fieldset.items().iter().map(ItemDefinition::as_node_ref));
            }
            Self::Field(_) | Self::Text(_) => {}
        }
    }
}
