//! Tab containers and the tab/item composition shared by composite nodes.
//!
//! DESIGN
//! ======
//! Tab sets, tabs, and fieldsets all own their children through the two
//! factories here. Hydration always rebuilds `tabs` and `items` together from
//! one payload, so a partial payload can never leave one collection stale.
//! Absent and empty child arrays both produce empty collections.

#[cfg(test)]
#[path = "containers_test.rs"]
mod containers_test;

use crate::schema::{DefinitionId, VersionId};
use crate::survey::Survey;
use crate::ui::item::ItemDefinition;
use crate::ui::node::UiNodeDefinition;
use crate::wire::{ItemJson, TabJson};

/// An ordered grouping of items within a tab set or fieldset.
#[derive(Clone, Debug, PartialEq)]
pub struct TabDefinition {
    id: DefinitionId,
    parent: DefinitionId,
    label: Option<String>,
    tabs: Vec<TabDefinition>,
    items: Vec<ItemDefinition>,
}

impl TabDefinition {
    /// Build a tab from its wire payload, owned by `parent`.
    #[must_use]
    pub fn from_json(json: &TabJson, parent: DefinitionId) -> Self {
        Self {
            id: json.id,
            parent,
            label: json.label.clone(),
            tabs: tabs_from_json(json.tabs.as_deref(), json.id),
            items: items_from_json(json.children.as_deref(), json.id),
        }
    }

    /// Re-hydrate this tab in place. Nested tabs and items are replaced
    /// together; the parent link is preserved.
    pub fn fill_from_json(&mut self, json: &TabJson) {
        *self = Self::from_json(json, self.parent);
    }

    /// Tab caption, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Nested tab containers in designer order.
    #[must_use]
    pub fn tabs(&self) -> &[TabDefinition] {
        &self.tabs
    }

    /// Child items in designer order.
    #[must_use]
    pub fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    /// Whether this tab is visible in the given version: true when at least
    /// one nested tab or item is.
    #[must_use]
    pub fn is_in_version(&self, survey: &Survey, version: VersionId) -> bool {
        any_in_version(&self.tabs, &self.items, survey, version)
    }
}

impl UiNodeDefinition for TabDefinition {
    fn id(&self) -> DefinitionId {
        self.id
    }

    fn parent_id(&self) -> Option<DefinitionId> {
        Some(self.parent)
    }
}

/// Build tab containers from an optional payload array, wiring each to
/// `parent`. Preserves source order; absent input yields an empty collection.
#[must_use]
pub fn tabs_from_json(json: Option<&[TabJson]>, parent: DefinitionId) -> Vec<TabDefinition> {
    json.unwrap_or_default()
        .iter()
        .map(|tab| TabDefinition::from_json(tab, parent))
        .collect()
}

/// Build items from an optional payload array, wiring each to `parent`.
/// Preserves source order; absent input yields an empty collection.
#[must_use]
pub fn items_from_json(json: Option<&[ItemJson]>, parent: DefinitionId) -> Vec<ItemDefinition> {
    json.unwrap_or_default()
        .iter()
        .map(|item| ItemDefinition::from_json(item, parent))
        .collect()
}

/// Existential visibility over one container level: true when any of the
/// given tabs or items reports visible. Empty containers are never visible.
pub(crate) fn any_in_version(
    tabs: &[TabDefinition],
    items: &[ItemDefinition],
    survey: &Survey,
    version: VersionId,
) -> bool {
    tabs.iter().any(|tab| tab.is_in_version(survey, version))
        || items.iter().any(|item| item.is_in_version(survey, version))
}
