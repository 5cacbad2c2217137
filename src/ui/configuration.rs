//! UI configuration root: owns every tab set and answers node lookups.

#[cfg(test)]
#[path = "configuration_test.rs"]
mod configuration_test;

use crate::schema::DefinitionId;
use crate::ui::node::UiNodeRef;
use crate::ui::tab_set::TabSetDefinition;
use crate::wire::UiJson;

/// All designed form layouts of a survey, one tab set per root entity.
///
/// Re-fetching a survey replaces the whole configuration (or re-fills the
/// individual tab sets); nodes inside it are never rewired piecemeal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiConfiguration {
    tab_sets: Vec<TabSetDefinition>,
}

impl UiConfiguration {
    /// Hydrate the configuration from its wire payload.
    #[must_use]
    pub fn from_json(json: &UiJson) -> Self {
        Self {
            tab_sets: json.tab_sets.iter().map(TabSetDefinition::from_json).collect(),
        }
    }

    /// Root tab sets in designer order.
    #[must_use]
    pub fn tab_sets(&self) -> &[TabSetDefinition] {
        &self.tab_sets
    }

    /// Find a node by id anywhere in the configuration.
    ///
    /// Walks all tab-set trees with an explicit stack; containers push their
    /// tabs and items, leaves push nothing.
    #[must_use]
    pub fn find_node(&self, id: DefinitionId) -> Option<UiNodeRef<'_>> {
        let mut stack: Vec<UiNodeRef<'_>> = self.tab_sets.iter().map(UiNodeRef::TabSet).collect();
        while let Some(node) = stack.pop() {
            if node.id() == id {
                return Some(node);
            }
            node.push_children(&mut stack);
        }
        None
    }

    /// Ids of a node's ancestors, nearest first, ending at its tab set.
    /// Unknown ids yield an empty chain.
    #[must_use]
    pub fn ancestor_ids(&self, id: DefinitionId) -> Vec<DefinitionId> {
        let mut ancestors = Vec::new();
        let mut current = self.find_node(id).and_then(|node| node.parent_id());
        while let Some(parent_id) = current {
            ancestors.push(parent_id);
            current = self.find_node(parent_id).and_then(|node| node.parent_id());
        }
        ancestors
    }
}
