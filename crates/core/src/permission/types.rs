//! Types for the permission module.

use serde::{Deserialize, Serialize};

/// Gallery-write permission state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    /// Not yet determined.
    #[default]
    Unknown,
    /// The user granted access.
    Granted,
    /// The user declined access.
    Denied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(PermissionState::default(), PermissionState::Unknown);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PermissionState::Granted).unwrap();
        assert_eq!(json, "\"granted\"");
    }
}
