//! Session-state models and reducers for the admin views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one slice of client session state plus a pure transition
//! function that applies backend actions to it in place. Dispatch is
//! single-threaded; a transition runs to completion before the next one is
//! observed.

pub mod user_groups;
pub mod users;
