//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! The Shopcart API is not consistent about how it encodes identifiers: a
//! shopcart created from a form post may echo `customer_id` back as a string,
//! while listings carry plain numbers. Server-assigned IDs deserialize from
//! either. [`CustomerId`] is opaque and keeps whatever text the server sent.

use std::fmt;

use serde::de::{self, Visitor};
use thiserror::Error;

/// Error returned when text cannot be parsed into an ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value:?}")]
pub struct IdParseError {
    /// Name of the ID type that failed to parse.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize` as a plain number, `Deserialize` from a number or numeric string
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>`, `Into<i64>`, `FromStr` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use shopcart_core::define_id;
/// define_id!(ShelfId);
/// define_id!(BinId);
///
/// let shelf_id = ShelfId::new(1);
/// let bin_id: BinId = "1".parse().unwrap();
///
/// assert_eq!(shelf_id.as_i64(), bin_id.as_i64());
/// // These are different types, so this won't compile:
/// // let _: ShelfId = bin_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::IdParseError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| $crate::types::id::IdParseError {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                deserializer
                    .deserialize_any($crate::types::id::IdVisitor::new(stringify!($name)))
                    .map(Self)
            }
        }
    };
}

/// Visitor shared by every `define_id!` type.
///
/// Accepts JSON integers and strings holding an integer.
#[doc(hidden)]
#[derive(Debug, Clone, Copy)]
pub struct IdVisitor {
    kind: &'static str,
}

impl IdVisitor {
    #[doc(hidden)]
    #[must_use]
    pub const fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

impl Visitor<'_> for IdVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} as an integer or numeric string", self.kind)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

// Define shopcart entity IDs
define_id!(ShopcartId);
define_id!(ProductId);

/// Owner of a shopcart.
///
/// The API hands out customer ids as strings or numbers and never does
/// arithmetic on them, so this keeps the text exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Create a customer ID from its text.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as received.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(CustomerIdVisitor)
    }
}

struct CustomerIdVisitor;

impl Visitor<'_> for CustomerIdVisitor {
    type Value = CustomerId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a customer id as a string or number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<CustomerId, E> {
        Ok(CustomerId::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<CustomerId, E> {
        Ok(CustomerId(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<CustomerId, E> {
        Ok(CustomerId(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<CustomerId, E> {
        Ok(CustomerId::new(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_deserializes_from_number_and_string() {
        let from_number: ShopcartId = serde_json::from_str("42").expect("number");
        let from_string: ShopcartId = serde_json::from_str("\"42\"").expect("string");
        assert_eq!(from_number, ShopcartId::new(42));
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn test_id_accepts_values_past_i32() {
        let id: ShopcartId = serde_json::from_str("3000000000").expect("wide id");
        assert_eq!(id.as_i64(), 3_000_000_000);
    }

    #[test]
    fn test_id_rejects_non_numeric() {
        assert!(serde_json::from_str::<ProductId>("\"abc\"").is_err());
        assert!(serde_json::from_str::<ProductId>("1.5").is_err());
        assert!(serde_json::from_str::<ProductId>("18446744073709551615").is_err());
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(7)).expect("serialize");
        assert_eq!(json, "7");
    }

    #[test]
    fn test_id_from_str() {
        assert_eq!(" 12 ".parse::<ShopcartId>(), Ok(ShopcartId::new(12)));

        let err = "twelve".parse::<ShopcartId>().expect_err("should fail");
        assert_eq!(err.kind, "ShopcartId");
        assert_eq!(err.to_string(), "invalid ShopcartId: \"twelve\"");
    }

    #[test]
    fn test_customer_id_keeps_text_as_received() {
        let text: CustomerId = serde_json::from_str("\"cust-abc\"").expect("string");
        let padded: CustomerId = serde_json::from_str("\"007\"").expect("string");
        let number: CustomerId = serde_json::from_str("3000000000").expect("number");

        assert_eq!(text.to_string(), "cust-abc");
        assert_eq!(padded.as_str(), "007");
        assert_eq!(number, CustomerId::from(3_000_000_000));
        assert!(serde_json::from_str::<CustomerId>("null").is_err());
    }

    #[test]
    fn test_customer_id_serializes_as_string() {
        let json = serde_json::to_string(&CustomerId::from(1001)).expect("serialize");
        assert_eq!(json, "\"1001\"");
    }
}
