//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and builders for the JSON documents embedded in
//! several tables.

use serde_json::{json, Value};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds an admin group snapshot document.
///
/// Matches the shape the application embeds into the `privileged_role` and
/// `list_endpoint` tables, so factory-created rows deserialize through the
/// same repository code paths as production data.
///
/// # Arguments
/// - `group_name` - Name of the snapshotted group
/// - `permissions` - Permission identifiers from the catalog
/// - `is_whitelist_group` - Whether the group is the whitelist group
///
/// # Returns
/// - `Value` - JSON snapshot document
pub fn group_snapshot(group_name: &str, permissions: &[&str], is_whitelist_group: bool) -> Value {
    json!({
        "group_name": group_name,
        "permissions": permissions,
        "enabled": true,
        "is_whitelist_group": is_whitelist_group,
    })
}

/// Builds a whitelist row document.
///
/// # Arguments
/// - `steam_id` - Steam64 ID for the row
/// - `name` - Optional display label for the row
///
/// # Returns
/// - `Value` - JSON whitelist row document
pub fn whitelist_row(steam_id: &str, name: Option<&str>) -> Value {
    json!({
        "steam_id": steam_id,
        "name": name,
    })
}
