use serde_json::json;

use super::*;

fn configuration() -> UiConfiguration {
    let json: UiJson = serde_json::from_value(json!({
        "tabSets": [
            {"id": 5000, "rootEntityDefinitionId": 1, "tabs": [
                {"id": 5001, "label": "Main", "children": [
                    {"type": "FIELDSET", "id": 5002, "entityDefinitionId": 3, "children": [
                        {"type": "FIELD", "id": 5003, "attributeDefinitionId": 2},
                    ]},
                ]},
            ]},
            {"id": 6000, "rootEntityDefinitionId": 6},
        ],
    }))
    .unwrap();
    UiConfiguration::from_json(&json)
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn from_json_hydrates_tab_sets_in_order() {
    let configuration = configuration();
    assert_eq!(configuration.tab_sets().len(), 2);
    assert_eq!(configuration.tab_sets()[0].root_entity_definition_id(), 1);
    assert_eq!(configuration.tab_sets()[1].root_entity_definition_id(), 6);
}

#[test]
fn default_configuration_is_empty() {
    let configuration = UiConfiguration::default();
    assert!(configuration.tab_sets().is_empty());
    assert!(configuration.find_node(5000).is_none());
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_node_locates_roots() {
    let configuration = configuration();
    let node = configuration.find_node(6000).unwrap();
    assert!(matches!(node, UiNodeRef::TabSet(_)));
    assert_eq!(node.id(), 6000);
}

#[test]
fn find_node_reaches_deeply_nested_nodes() {
    let configuration = configuration();
    let field = configuration.find_node(5003).unwrap();
    assert!(matches!(field, UiNodeRef::Field(_)));
    assert_eq!(field.parent_id(), Some(5002));
}

#[test]
fn find_node_misses_unknown_ids() {
    assert!(configuration().find_node(99).is_none());
}

// =============================================================
// Ancestors
// =============================================================

#[test]
fn ancestor_ids_walk_nearest_first_to_the_tab_set() {
    assert_eq!(configuration().ancestor_ids(5003), vec![5002, 5001, 5000]);
}

#[test]
fn roots_and_unknown_ids_have_no_ancestors() {
    let configuration = configuration();
    assert!(configuration.ancestor_ids(5000).is_empty());
    assert!(configuration.ancestor_ids(99).is_empty());
}
