//! Survey metadata and client-session state models for the FieldDesk survey manager.
//!
//! This crate is UI-framework agnostic so client crates can consume it directly
//! for rendering survey forms and admin views. It owns the survey-designer
//! JSON shapes, the hydrated schema and UI-definition trees, the record-model
//! numeric-attribute contract, and the reducers that keep session state for
//! users and user groups consistent as backend deltas arrive.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`wire`] | Serde DTOs for the survey-designer JSON boundary |
//! | [`schema`] | Entity/attribute definitions and the flat schema index |
//! | [`survey`] | Survey aggregate: versions, units, code lists, applicability |
//! | [`ui`] | Tab-set/fieldset UI-definition tree and version visibility |
//! | [`record`] | Record-model fields and the numeric-attribute unit contract |
//! | [`state`] | Session-state reducers for users and user groups |

pub mod record;
pub mod schema;
pub mod state;
pub mod survey;
pub mod ui;
pub mod wire;
