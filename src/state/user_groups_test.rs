use serde_json::json;

use super::*;

fn make_group(id: GroupId, parent_id: Option<GroupId>, children_group_ids: Vec<GroupId>) -> UserGroup {
    UserGroup {
        id,
        parent_id,
        children_group_ids,
        name: format!("group-{id}"),
        label: None,
        parent: None,
        children: Vec::new(),
    }
}

/// Group 1 owns 2 and 3; group 4 is a second root.
fn forest_state() -> UserGroupsState {
    let mut state = UserGroupsState::default();
    reduce(
        &mut state,
        UserGroupsAction::ReceiveAll {
            user_groups: vec![
                make_group(1, None, vec![2, 3]),
                make_group(2, Some(1), vec![]),
                make_group(3, Some(1), vec![]),
                make_group(4, None, vec![]),
            ],
            received_at: 1_000,
        },
    );
    state
}

fn group(state: &UserGroupsState, id: GroupId) -> &UserGroup {
    state.items.iter().find(|group| group.id == id).unwrap()
}

// =============================================================
// Flag transitions
// =============================================================

#[test]
fn default_state_is_empty() {
    let state = UserGroupsState::default();
    assert!(!state.initialized);
    assert!(!state.is_fetching);
    assert!(!state.did_invalidate);
    assert!(state.items.is_empty());
    assert_eq!(state.last_updated, None);
}

#[test]
fn invalidate_marks_stale_only() {
    let mut state = forest_state();
    reduce(&mut state, UserGroupsAction::Invalidate);
    assert!(state.did_invalidate);
    assert!(state.initialized); // untouched
    assert_eq!(state.items.len(), 4); // untouched
    assert_eq!(state.last_updated, Some(1_000)); // untouched
}

#[test]
fn request_sets_fetching_and_clears_invalidate() {
    let mut state = forest_state();
    reduce(&mut state, UserGroupsAction::Invalidate);
    reduce(&mut state, UserGroupsAction::Request);
    assert!(state.is_fetching);
    assert!(!state.did_invalidate);
    assert_eq!(state.items.len(), 4); // untouched
}

#[test]
fn receive_all_marks_initialized_and_clears_fetch_flags() {
    let mut state = UserGroupsState::default();
    reduce(&mut state, UserGroupsAction::Invalidate);
    reduce(&mut state, UserGroupsAction::Request);
    reduce(
        &mut state,
        UserGroupsAction::ReceiveAll { user_groups: vec![make_group(1, None, vec![])], received_at: 2_000 },
    );
    assert!(state.initialized);
    assert!(!state.is_fetching);
    assert!(!state.did_invalidate);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.last_updated, Some(2_000));
}

#[test]
fn receive_all_replaces_previous_items() {
    let mut state = forest_state();
    reduce(
        &mut state,
        UserGroupsAction::ReceiveAll { user_groups: vec![make_group(9, None, vec![])], received_at: 3_000 },
    );
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 9);
    assert_eq!(state.last_updated, Some(3_000));
}

// =============================================================
// ReceiveAll linking
// =============================================================

#[test]
fn receive_all_links_parents_and_children() {
    let state = forest_state();
    assert_eq!(group(&state, 1).parent, None);
    assert_eq!(group(&state, 1).children, vec![2, 3]);
    assert_eq!(group(&state, 2).parent, Some(1));
    assert_eq!(group(&state, 3).parent, Some(1));
    assert_eq!(group(&state, 4).parent, None);
    assert!(group(&state, 4).children.is_empty());
}

#[test]
fn receive_all_drops_dangling_cache_links() {
    let mut state = UserGroupsState::default();
    reduce(
        &mut state,
        UserGroupsAction::ReceiveAll {
            user_groups: vec![
                make_group(1, None, vec![2, 99]),
                make_group(2, Some(1), vec![]),
                make_group(5, Some(88), vec![]),
            ],
            received_at: 1_000,
        },
    );
    // Caches resolve only within the set; authoritative ids stay as sent.
    assert_eq!(group(&state, 1).children, vec![2]);
    assert_eq!(group(&state, 1).children_group_ids, vec![2, 99]);
    assert_eq!(group(&state, 5).parent, None);
    assert_eq!(group(&state, 5).parent_id, Some(88));
}

#[test]
fn relink_resolves_present_parents_only() {
    let mut groups = vec![make_group(1, None, vec![]), make_group(2, Some(1), vec![]), make_group(3, Some(77), vec![])];
    relink(&mut groups);
    assert_eq!(groups[1].parent, Some(1));
    assert_eq!(groups[2].parent, None);
}

#[test]
fn relink_preserves_child_order() {
    let mut groups = vec![make_group(1, None, vec![3, 2]), make_group(2, Some(1), vec![]), make_group(3, Some(1), vec![])];
    relink(&mut groups);
    assert_eq!(groups[0].children, vec![3, 2]);
}

// =============================================================
// ReceiveOne
// =============================================================

#[test]
fn receive_one_appends_unknown_group() {
    let mut state = forest_state();
    reduce(
        &mut state,
        UserGroupsAction::ReceiveOne { user_group: make_group(5, Some(1), vec![]), received_at: 2_000 },
    );
    assert_eq!(state.items.len(), 5);
    assert_eq!(state.items[4].id, 5); // appended at the end
    assert_eq!(group(&state, 5).parent, Some(1));
    assert_eq!(group(&state, 1).children_group_ids, vec![2, 3, 5]);
    assert_eq!(group(&state, 1).children, vec![2, 3, 5]);
    assert_eq!(state.last_updated, Some(2_000));
}

#[test]
fn receive_one_replaces_existing_in_place() {
    let mut state = forest_state();
    let mut updated = make_group(2, Some(1), vec![]);
    updated.name = "renamed".to_owned();
    reduce(&mut state, UserGroupsAction::ReceiveOne { user_group: updated, received_at: 2_000 });
    assert_eq!(state.items.len(), 4);
    assert_eq!(state.items[1].id, 2); // same position
    assert_eq!(group(&state, 2).name, "renamed");
}

#[test]
fn receive_one_moves_group_between_parents() {
    let mut state = forest_state();
    reduce(
        &mut state,
        UserGroupsAction::ReceiveOne { user_group: make_group(2, Some(4), vec![]), received_at: 2_000 },
    );
    assert_eq!(group(&state, 1).children_group_ids, vec![3]);
    assert_eq!(group(&state, 1).children, vec![3]);
    assert_eq!(group(&state, 4).children_group_ids, vec![2]);
    assert_eq!(group(&state, 4).children, vec![2]);
    assert_eq!(group(&state, 2).parent, Some(4));
}

#[test]
fn receive_one_moves_group_to_root() {
    let mut state = forest_state();
    reduce(
        &mut state,
        UserGroupsAction::ReceiveOne { user_group: make_group(3, None, vec![]), received_at: 2_000 },
    );
    assert_eq!(group(&state, 1).children_group_ids, vec![2]);
    assert_eq!(group(&state, 1).children, vec![2]);
    assert_eq!(group(&state, 3).parent, None);
}

#[test]
fn receive_one_same_parent_moves_child_to_sibling_end() {
    // The detach runs before the membership-checked attach, so re-receiving
    // a child under the same parent rotates it to the end of the list.
    let mut state = forest_state();
    reduce(
        &mut state,
        UserGroupsAction::ReceiveOne { user_group: make_group(2, Some(1), vec![]), received_at: 2_000 },
    );
    assert_eq!(group(&state, 1).children_group_ids, vec![3, 2]);
    assert_eq!(group(&state, 1).children, vec![3, 2]);
}

#[test]
fn receive_one_redispatch_is_stable() {
    let mut state = forest_state();
    let action = UserGroupsAction::ReceiveOne { user_group: make_group(2, Some(4), vec![]), received_at: 2_000 };
    reduce(&mut state, action.clone());
    let after_first = state.clone();
    reduce(&mut state, action);
    assert_eq!(state, after_first);
}

#[test]
fn receive_one_unresolved_parent_keeps_group_detached() {
    let mut state = forest_state();
    reduce(
        &mut state,
        UserGroupsAction::ReceiveOne { user_group: make_group(7, Some(99), vec![]), received_at: 2_000 },
    );
    assert_eq!(group(&state, 7).parent, None);
    assert_eq!(group(&state, 7).parent_id, Some(99)); // authoritative id kept
    assert_eq!(state.items.len(), 5);
}

#[test]
fn receive_one_keeps_received_children_cache() {
    let mut state = forest_state();
    let mut incoming = make_group(5, None, vec![8]);
    incoming.children = vec![8];
    reduce(&mut state, UserGroupsAction::ReceiveOne { user_group: incoming, received_at: 2_000 });
    assert_eq!(group(&state, 5).children, vec![8]);
}

#[test]
fn receive_one_leaves_fetch_flags_alone() {
    let mut state = UserGroupsState::default();
    reduce(&mut state, UserGroupsAction::Request);
    reduce(
        &mut state,
        UserGroupsAction::ReceiveOne { user_group: make_group(1, None, vec![]), received_at: 2_000 },
    );
    assert!(state.is_fetching); // only a full receive clears it
    assert!(!state.initialized);
    assert_eq!(state.last_updated, Some(2_000));
}

// =============================================================
// Deleted
// =============================================================

#[test]
fn deleted_removes_matching_groups() {
    let mut state = forest_state();
    reduce(&mut state, UserGroupsAction::Deleted { item_ids: vec![2, 4], received_at: 4_000 });
    let ids: Vec<GroupId> = state.items.iter().map(|group| group.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(state.last_updated, Some(4_000));
}

#[test]
fn deleted_ignores_unknown_ids() {
    let mut state = forest_state();
    reduce(&mut state, UserGroupsAction::Deleted { item_ids: vec![99], received_at: 4_000 });
    assert_eq!(state.items.len(), 4);
}

#[cfg(not(feature = "group-link-pruning"))]
#[test]
fn deleted_leaves_sibling_links_dangling() {
    let mut state = forest_state();
    reduce(&mut state, UserGroupsAction::Deleted { item_ids: vec![2], received_at: 4_000 });
    // Survivors keep their references to the deleted group untouched.
    assert_eq!(group(&state, 1).children_group_ids, vec![2, 3]);
    assert_eq!(group(&state, 1).children, vec![2, 3]);
}

#[cfg(feature = "group-link-pruning")]
#[test]
fn deleted_prunes_links_from_survivors() {
    let mut state = forest_state();
    reduce(&mut state, UserGroupsAction::Deleted { item_ids: vec![2], received_at: 4_000 });
    assert_eq!(group(&state, 1).children_group_ids, vec![3]);
    assert_eq!(group(&state, 1).children, vec![3]);
}

#[cfg(feature = "group-link-pruning")]
#[test]
fn deleted_parent_clears_orphan_links() {
    let mut state = forest_state();
    reduce(&mut state, UserGroupsAction::Deleted { item_ids: vec![1], received_at: 4_000 });
    assert_eq!(group(&state, 2).parent_id, None);
    assert_eq!(group(&state, 2).parent, None);
    assert_eq!(group(&state, 3).parent_id, None);
}

// =============================================================
// Foreign actions
// =============================================================

#[test]
fn unknown_action_type_is_identity() {
    let mut state = forest_state();
    let before = state.clone();
    let action: UserGroupsAction = serde_json::from_value(json!({"type": "RECEIVE_SURVEYS", "surveys": []})).unwrap();
    assert_eq!(action, UserGroupsAction::Other);
    reduce(&mut state, action);
    assert_eq!(state, before);
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn action_tags_follow_wire_names() {
    let invalidate = serde_json::to_value(&UserGroupsAction::Invalidate).unwrap();
    assert_eq!(invalidate, json!({"type": "INVALIDATE_USER_GROUPS"}));
    let request = serde_json::to_value(&UserGroupsAction::Request).unwrap();
    assert_eq!(request, json!({"type": "REQUEST_USER_GROUPS"}));
}

#[test]
fn receive_all_deserializes_from_wire_payload() {
    let action: UserGroupsAction = serde_json::from_value(json!({
        "type": "RECEIVE_USER_GROUPS",
        "userGroups": [
            {"id": 1, "parentId": null, "childrenGroupIds": [2], "name": "all", "label": "All"},
            {"id": 2, "parentId": 1, "name": "north", "label": null},
        ],
        "receivedAt": 1_724_000_000_000_i64,
    }))
    .unwrap();
    let UserGroupsAction::ReceiveAll { user_groups, received_at } = &action else {
        panic!("wrong variant: {action:?}");
    };
    assert_eq!(*received_at, 1_724_000_000_000);
    assert_eq!(user_groups.len(), 2);
    assert_eq!(user_groups[0].children_group_ids, vec![2]);
    assert!(user_groups[1].children_group_ids.is_empty()); // absent on the wire
    assert_eq!(user_groups[1].parent_id, Some(1));
}

#[test]
fn deleted_deserializes_from_wire_payload() {
    let action: UserGroupsAction = serde_json::from_value(json!({
        "type": "USER_GROUPS_DELETED",
        "itemIds": [4, 5],
        "receivedAt": 9_000,
    }))
    .unwrap();
    assert_eq!(action, UserGroupsAction::Deleted { item_ids: vec![4, 5], received_at: 9_000 });
}

#[test]
fn group_serialization_omits_derived_caches() {
    let mut groups = vec![make_group(1, None, vec![2]), make_group(2, Some(1), vec![])];
    relink(&mut groups);
    let value = serde_json::to_value(&groups[0]).unwrap();
    assert_eq!(value["childrenGroupIds"], json!([2]));
    assert!(value.get("children").is_none());
    assert!(value.get("parent").is_none());
}
