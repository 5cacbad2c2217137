//! User account state for the admin views.
//!
//! Same transition shape as the user-groups slice, minus linkage: user
//! records are flat, so upserts and deletes never touch sibling entries.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use serde::{Deserialize, Serialize};

/// Unique identifier for a user account.
pub type UserId = i64;

/// Access role of a user account, in ascending order of capability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Read-only access to published records.
    View,
    /// Data entry restricted to own records.
    EntryLimited,
    /// Standard data entry.
    #[default]
    Entry,
    /// Data entry plus cleansing-phase edits.
    Cleansing,
    /// Analysis-phase access.
    Analysis,
    /// Survey design access.
    Design,
    /// Full administrative access.
    Admin,
}

/// A user account as managed in the admin views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Assigned access role; new accounts default to data entry.
    #[serde(default)]
    pub role: UserRole,
    /// Whether the account can log in.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// The users slice of session state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersState {
    /// Whether a full set has been received at least once.
    pub initialized: bool,
    /// Whether a fetch is currently in flight.
    pub is_fetching: bool,
    /// Whether the slice was invalidated after the last fetch.
    pub did_invalidate: bool,
    /// All known user accounts.
    pub items: Vec<User>,
    /// When the items last changed, in milliseconds since the Unix epoch.
    pub last_updated: Option<i64>,
}

/// A backend action on the users slice, tagged with the wire type names the
/// service dispatches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UsersAction {
    /// Mark the slice stale without touching its contents.
    #[serde(rename = "INVALIDATE_USERS")]
    Invalidate,
    /// A full fetch has started.
    #[serde(rename = "REQUEST_USERS")]
    Request,
    /// A full set arrived; replaces the items wholesale.
    #[serde(rename = "RECEIVE_USERS")]
    #[serde(rename_all = "camelCase")]
    ReceiveAll {
        /// The complete user list.
        users: Vec<User>,
        /// Server receipt time in milliseconds since the Unix epoch.
        received_at: i64,
    },
    /// A single created or updated user arrived.
    #[serde(rename = "RECEIVE_USER")]
    #[serde(rename_all = "camelCase")]
    ReceiveOne {
        /// The created or updated user.
        user: User,
        /// Server receipt time in milliseconds since the Unix epoch.
        received_at: i64,
    },
    /// Users were deleted on the backend.
    #[serde(rename = "USERS_DELETED")]
    #[serde(rename_all = "camelCase")]
    Deleted {
        /// Ids of the deleted users.
        item_ids: Vec<UserId>,
        /// Server receipt time in milliseconds since the Unix epoch.
        received_at: i64,
    },
    /// Any action type this slice does not handle; leaves state untouched.
    #[serde(other)]
    Other,
}

/// Apply one action to the users slice in place.
pub fn reduce(state: &mut UsersState, action: UsersAction) {
    match action {
        UsersAction::Invalidate => {
            state.did_invalidate = true;
        }
        UsersAction::Request => {
            state.is_fetching = true;
            state.did_invalidate = false;
        }
        UsersAction::ReceiveAll { users, received_at } => {
            state.initialized = true;
            state.is_fetching = false;
            state.did_invalidate = false;
            state.items = users;
            state.last_updated = Some(received_at);
        }
        UsersAction::ReceiveOne { user, received_at } => {
            match state.items.iter().position(|item| item.id == user.id) {
                Some(idx) => state.items[idx] = user,
                None => state.items.push(user),
            }
            state.last_updated = Some(received_at);
        }
        UsersAction::Deleted { item_ids, received_at } => {
            state.items.retain(|user| !item_ids.contains(&user.id));
            state.last_updated = Some(received_at);
        }
        UsersAction::Other => {}
    }
}
