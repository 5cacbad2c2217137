//! UI-definition tree: tab sets, tabs, fieldsets, and form items.
//!
//! SYSTEM CONTEXT
//! ==============
//! The survey designer stores each form layout as a tree of UI nodes bound to
//! schema definitions by id. `node` defines the base contract every node
//! honors, `containers` the shared tab/item composition, `tab_set` and
//! `fieldset` the composite nodes, `item` the polymorphic leaf items, and
//! `configuration` the root that owns all tab sets and answers lookups.

pub mod configuration;
pub mod containers;
pub mod fieldset;
pub mod item;
pub mod node;
pub mod tab_set;
