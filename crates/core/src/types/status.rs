//! Status enums for persisted entities.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// Every order is created as `Created`. The terminal states exist for the
/// payment webhook handlers, which currently acknowledge without
/// transitioning any order (see `findeasy-server`'s webhook port).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Created,
    Paid,
    Failed,
}

impl OrderStatus {
    /// The wire name of this status (matches the serde representation).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Paid => "PAID",
            Self::Failed => "FAILED",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Created).unwrap(),
            "\"CREATED\""
        );
        let status: OrderStatus = serde_json::from_str("\"PAID\"").unwrap();
        assert_eq!(status, OrderStatus::Paid);
    }

    #[test]
    fn test_default_is_created() {
        assert_eq!(OrderStatus::default(), OrderStatus::Created);
    }
}
