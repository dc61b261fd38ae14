//! Typed identifiers for board entities
//!
//! Ids are opaque strings, unique for the entity's lifetime. Fresh ids are
//! ULIDs; ids read back from storage keep whatever string they were saved
//! with, so boards created by older builds (or by hand) stay loadable.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh unique id
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing id string
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

id_type!(
    /// Identifies a task, unique across the entire board
    TaskId
);
id_type!(
    /// Identifies a column, unique across the board
    ColumnId
);
id_type!(
    /// Identifies a subtask within its parent task
    SubtaskId
);
id_type!(
    /// Identifies a comment within its parent task
    CommentId
);
