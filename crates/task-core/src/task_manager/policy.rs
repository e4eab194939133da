//! Status transition policy
//!
//! Decides whether a task may move from one status to another.

use serde::{Deserialize, Serialize};

use crate::task::TaskStatus;

/// How strictly status changes are checked
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any status may be set at any time
    #[default]
    Permissive,

    /// PENDING <-> IN_PROGRESS -> COMPLETED, COMPLETED is terminal
    Strict,
}

impl TransitionPolicy {
    pub fn allows(&self, from: TaskStatus, to: TaskStatus) -> bool {
        match self {
            Self::Permissive => true,
            Self::Strict => Self::strict_allows(from, to),
        }
    }

    fn strict_allows(from: TaskStatus, to: TaskStatus) -> bool {
        use TaskStatus::*;

        match (from, to) {
            (Completed, _) => false,
            (Pending, Pending) | (InProgress, InProgress) => true,
            (Pending, InProgress) | (Pending, Completed) => true,
            (InProgress, Pending) | (InProgress, Completed) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TaskStatus::*;

    #[test]
    fn permissive_allows_everything() {
        let policy = TransitionPolicy::Permissive;
        for from in TaskStatus::ALL {
            for to in TaskStatus::ALL {
                assert!(policy.allows(from, to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn strict_table() {
        let policy = TransitionPolicy::Strict;
        assert!(policy.allows(Pending, InProgress));
        assert!(policy.allows(Pending, Completed));
        assert!(policy.allows(InProgress, Pending));
        assert!(policy.allows(InProgress, Completed));
        assert!(policy.allows(Pending, Pending));

        assert!(!policy.allows(Completed, Pending));
        assert!(!policy.allows(Completed, InProgress));
        assert!(!policy.allows(Completed, Completed));
    }

    #[test]
    fn deserializes_from_snake_case() {
        let policy: TransitionPolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(policy, TransitionPolicy::Strict);
    }
}
