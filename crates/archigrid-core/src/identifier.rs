//! Identifier management using string interning for efficient string storage and comparison
//!
//! This module provides the [`Id`] type used to key every diagram object.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Efficient identifier type using string interning
///
/// Diagram objects are identified by the identifier the host model gives
/// them. Interning keeps the identifier `Copy` so it can be used freely as a
/// map key throughout the layout passes.
///
/// # Examples
///
/// ```
/// use archigrid_core::identifier::Id;
///
/// let actor = Id::new("customer");
/// let same = Id::new("customer");
///
/// assert_eq!(actor, same);
/// assert_eq!(actor, "customer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        let symbol = interner().get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{str_value}")
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner();
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("BusinessActor");
        let id2 = Id::new("BusinessActor");
        let id3 = Id::new("BusinessRole");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "BusinessActor");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("display_test");
        assert_eq!(format!("{id}"), "display_test");
    }

    #[test]
    fn test_from_trait() {
        let id1: Id = "test_string".into();
        let id2 = Id::new("test_string");

        assert_eq!(id1, id2);
        assert_eq!(id1, "test_string");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("ApplicationComponent");

        assert!(id == "ApplicationComponent");
        assert!(id != "ApplicationService");

        let nested = Id::new("group::child");
        assert!(nested == "group::child");
        assert!(nested != "group");
    }

    #[test]
    fn test_serde_round_trip_through_string() {
        #[derive(Debug, Serialize, Deserialize)]
        struct Holder {
            id: Id,
        }

        let holder: Holder = toml::from_str(r#"id = "crm-system""#).unwrap();
        assert_eq!(holder.id, "crm-system");

        let text = toml::to_string(&holder).unwrap();
        assert_eq!(text.trim(), r#"id = "crm-system""#);
    }
}
