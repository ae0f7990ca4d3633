//! Reserved Keys Module
//!
//! Names belonging to the cache's own control surface. They are never stored
//! as data, never counted toward size and never tracked for eviction.

use std::fmt;

/// A control name that cannot be used as an ordinary data key.
///
/// `size` plus the name of every operation a cache instance exposes
/// (constructors aside).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedKey {
    Capacity,
    Size,
    Len,
    IsEmpty,
    Get,
    GetMut,
    Peek,
    Contains,
    Set,
    Delete,
    Resize,
    Keys,
    Clear,
    Stats,
    ResetStats,
    Read,
    Write,
    Remove,
}

impl ReservedKey {
    /// Every reserved name, in declaration order.
    pub const ALL: [ReservedKey; 18] = [
        ReservedKey::Capacity,
        ReservedKey::Size,
        ReservedKey::Len,
        ReservedKey::IsEmpty,
        ReservedKey::Get,
        ReservedKey::GetMut,
        ReservedKey::Peek,
        ReservedKey::Contains,
        ReservedKey::Set,
        ReservedKey::Delete,
        ReservedKey::Resize,
        ReservedKey::Keys,
        ReservedKey::Clear,
        ReservedKey::Stats,
        ReservedKey::ResetStats,
        ReservedKey::Read,
        ReservedKey::Write,
        ReservedKey::Remove,
    ];

    /// Matches a key against the reserved names (exact, case-sensitive).
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reserved| reserved.as_str() == key)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReservedKey::Capacity => "capacity",
            ReservedKey::Size => "size",
            ReservedKey::Len => "len",
            ReservedKey::IsEmpty => "is_empty",
            ReservedKey::Get => "get",
            ReservedKey::GetMut => "get_mut",
            ReservedKey::Peek => "peek",
            ReservedKey::Contains => "contains",
            ReservedKey::Set => "set",
            ReservedKey::Delete => "delete",
            ReservedKey::Resize => "resize",
            ReservedKey::Keys => "keys",
            ReservedKey::Clear => "clear",
            ReservedKey::Stats => "stats",
            ReservedKey::ResetStats => "reset_stats",
            ReservedKey::Read => "read",
            ReservedKey::Write => "write",
            ReservedKey::Remove => "remove",
        }
    }
}

/// Returns true if `key` names part of the control surface.
pub fn is_reserved(key: &str) -> bool {
    ReservedKey::parse(key).is_some()
}

impl fmt::Display for ReservedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
