//! Strongly-typed identifiers used across the domain.
//!
//! Upstream payloads stamp identifiers inconsistently: the same field may
//! arrive as a JSON number, a numeric string, an email, or a display name.
//! Identifiers are therefore opaque strings, with JSON numbers normalized to
//! their decimal rendering so `7` and `"7"` compare equal.

use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Identifier of a principal (the authenticated actor).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrincipalId(String);

/// Identifier of an event resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(String);

/// Identifier of a role.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleId(String);

macro_rules! impl_string_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, ": empty")));
                }
                Ok(Self(s.to_string()))
            }
        }

        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct IdVisitor;

                impl<'de> Visitor<'de> for IdVisitor {
                    type Value = String;

                    fn expecting(
                        &self,
                        f: &mut core::fmt::Formatter<'_>,
                    ) -> core::fmt::Result {
                        f.write_str(concat!($name, " as a string or number"))
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        Ok(v.to_string())
                    }

                    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                        Ok(v)
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                        Ok(v.to_string())
                    }

                    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                        Ok(v.to_string())
                    }
                }

                deserializer.deserialize_any(IdVisitor).map(Self)
            }
        }
    };
}

impl_string_id!(PrincipalId, "PrincipalId");
impl_string_id!(EventId, "EventId");
impl_string_id!(RoleId, "RoleId");
