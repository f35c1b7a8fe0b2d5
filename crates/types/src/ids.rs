//! Identifiers for layout items and size table entries.
//!
//! Item identifiers are either chosen by the caller (`"sidebar"`) or generated from a
//! prefix and the engine's counter (`"item-3"`, `"spacer-4"`). Size identifiers name
//! entries in the size table and are what linked items point at. The two live in
//! separate maps, so the same text may name an item and a size entry at once; the
//! distinct types keep a lookup from ever crossing over.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(id: impl Into<Arc<str>>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s.into())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.into())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Names one item (box) in the layout tree. Unique across the whole tree, not
    /// just within its container.
    ItemId
);

string_id!(
    /// Names an entry in the size table. Several items share one entry when they
    /// link to it.
    SizeId
);
