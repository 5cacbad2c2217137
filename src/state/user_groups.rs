//! User-group hierarchy state: a parent/children-linked forest kept
//! consistent as backend deltas arrive.
//!
//! DESIGN
//! ======
//! The backend sends groups flat: each carries its authoritative `parentId`
//! and `childrenGroupIds`. This module derives the navigable `parent` and
//! `children` caches from that relational shape and keeps both layers
//! aligned through every transition. Deleting groups leaves dangling ids
//! behind in the survivors' lists, matching the backend's delete semantics;
//! the `group-link-pruning` feature compiles in a stricter cleanup for
//! callers that cannot tolerate that.

#[cfg(test)]
#[path = "user_groups_test.rs"]
mod user_groups_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Unique identifier for a user group.
pub type GroupId = i64;

/// An organizational node in the hierarchical grouping of users.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    /// Unique group identifier.
    pub id: GroupId,
    /// Authoritative parent reference from the backend; `None` for roots.
    pub parent_id: Option<GroupId>,
    /// Authoritative child references in backend order.
    #[serde(default)]
    pub children_group_ids: Vec<GroupId>,
    /// Internal group name.
    pub name: String,
    /// Human-readable label, if any.
    pub label: Option<String>,
    /// Derived cache of the parent link: `Some` only while the parent group
    /// is present in the same set. Rebuilt by [`relink`]; never serialized.
    #[serde(skip)]
    pub parent: Option<GroupId>,
    /// Derived cache of the child links, filtered to groups present in the
    /// same set. Rebuilt by [`relink`]; never serialized.
    #[serde(skip)]
    pub children: Vec<GroupId>,
}

/// The user-groups slice of session state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserGroupsState {
    /// Whether a full set has been received at least once.
    pub initialized: bool,
    /// Whether a fetch is currently in flight.
    pub is_fetching: bool,
    /// Whether the slice was invalidated after the last fetch.
    pub did_invalidate: bool,
    /// All known groups; linkage maintained by [`reduce`].
    pub items: Vec<UserGroup>,
    /// When the items last changed, in milliseconds since the Unix epoch.
    pub last_updated: Option<i64>,
}

/// A backend action on the user-groups slice, tagged with the wire type
/// names the service dispatches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UserGroupsAction {
    /// Mark the slice stale without touching its contents.
    #[serde(rename = "INVALIDATE_USER_GROUPS")]
    Invalidate,
    /// A full fetch has started.
    #[serde(rename = "REQUEST_USER_GROUPS")]
    Request,
    /// A full set arrived; replaces the items wholesale.
    #[serde(rename = "RECEIVE_USER_GROUPS")]
    #[serde(rename_all = "camelCase")]
    ReceiveAll {
        /// The complete flat group set.
        user_groups: Vec<UserGroup>,
        /// Server receipt time in milliseconds since the Unix epoch.
        received_at: i64,
    },
    /// A single created or updated group arrived.
    #[serde(rename = "RECEIVE_USER_GROUP")]
    #[serde(rename_all = "camelCase")]
    ReceiveOne {
        /// The created or updated group.
        user_group: UserGroup,
        /// Server receipt time in milliseconds since the Unix epoch.
        received_at: i64,
    },
    /// Groups were deleted on the backend.
    #[serde(rename = "USER_GROUPS_DELETED")]
    #[serde(rename_all = "camelCase")]
    Deleted {
        /// Ids of the deleted groups.
        item_ids: Vec<GroupId>,
        /// Server receipt time in milliseconds since the Unix epoch.
        received_at: i64,
    },
    /// Any action type this slice does not handle; leaves state untouched.
    #[serde(other)]
    Other,
}

/// Apply one action to the user-groups slice in place.
///
/// `ReceiveOne` mirrors the backend's group-move semantics: the group is
/// detached from its previous parent before it is attached to the new one,
/// updating both parents' authoritative `children_group_ids` and derived
/// `children` in the same pass. The incoming group's own `children` cache is
/// kept exactly as received; only a whole-set `ReceiveAll` rebuilds it.
pub fn reduce(state: &mut UserGroupsState, action: UserGroupsAction) {
    match action {
        UserGroupsAction::Invalidate => {
            state.did_invalidate = true;
        }
        UserGroupsAction::Request => {
            state.is_fetching = true;
            state.did_invalidate = false;
        }
        UserGroupsAction::ReceiveAll { mut user_groups, received_at } => {
            relink(&mut user_groups);
            state.initialized = true;
            state.is_fetching = false;
            state.did_invalidate = false;
            state.items = user_groups;
            state.last_updated = Some(received_at);
        }
        UserGroupsAction::ReceiveOne { user_group, received_at } => {
            receive_one(&mut state.items, user_group);
            state.last_updated = Some(received_at);
        }
        UserGroupsAction::Deleted { item_ids, received_at } => {
            state.items.retain(|group| !item_ids.contains(&group.id));
            #[cfg(feature = "group-link-pruning")]
            prune_dangling_links(&mut state.items, &item_ids);
            state.last_updated = Some(received_at);
        }
        UserGroupsAction::Other => {}
    }
}

/// Rebuild every group's derived `parent`/`children` caches from the
/// authoritative `parent_id`/`children_group_ids` within one set.
///
/// A parent id with no matching group resolves to `None`; child ids with no
/// matching group are dropped from the cache (the authoritative list keeps
/// them). Source order is preserved.
pub fn relink(groups: &mut [UserGroup]) {
    let present: HashSet<GroupId> = groups.iter().map(|group| group.id).collect();
    for group in &mut *groups {
        group.parent = group.parent_id.filter(|parent_id| present.contains(parent_id));
        group.children = group
            .children_group_ids
            .iter()
            .copied()
            .filter(|child_id| present.contains(child_id))
            .collect();
    }
}

/// Upsert one group, keeping sibling links consistent. The detach from the
/// old parent happens before the attach to the new one so the group never
/// sits under two parents mid-transition; the attach is membership-checked,
/// which makes re-dispatching the same action idempotent.
fn receive_one(items: &mut Vec<UserGroup>, mut incoming: UserGroup) {
    let existing_idx = items.iter().position(|group| group.id == incoming.id);

    if let Some(idx) = existing_idx
        && let Some(old_parent_id) = items[idx].parent_id
        && let Some(old_parent) = items.iter_mut().find(|group| group.id == old_parent_id)
    {
        old_parent.children_group_ids.retain(|child_id| *child_id != incoming.id);
        old_parent.children.retain(|child_id| *child_id != incoming.id);
    }

    match incoming.parent_id {
        None => incoming.parent = None,
        Some(parent_id) => match items.iter_mut().find(|group| group.id == parent_id) {
            Some(parent) => {
                incoming.parent = Some(parent.id);
                if !parent.children_group_ids.contains(&incoming.id) {
                    parent.children_group_ids.push(incoming.id);
                    parent.children.push(incoming.id);
                }
            }
            None => {
                tracing::warn!(group_id = incoming.id, parent_id, "received group references a parent missing from state");
                incoming.parent = None;
            }
        },
    }

    match existing_idx {
        Some(idx) => items[idx] = incoming,
        None => items.push(incoming),
    }
}

/// Strip links to the deleted ids from the surviving groups. Compiled in only
/// with the `group-link-pruning` feature; the default build preserves the
/// backend's dangling references untouched.
#[cfg(feature = "group-link-pruning")]
fn prune_dangling_links(items: &mut [UserGroup], deleted_ids: &[GroupId]) {
    for group in &mut *items {
        group.children_group_ids.retain(|child_id| !deleted_ids.contains(child_id));
        group.children.retain(|child_id| !deleted_ids.contains(child_id));
        if group.parent_id.is_some_and(|parent_id| deleted_ids.contains(&parent_id)) {
            group.parent_id = None;
            group.parent = None;
        }
    }
}
