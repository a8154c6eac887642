use std::borrow::Cow;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Permission identifier.
///
/// Permissions are modeled as opaque dot-namespaced strings (e.g.
/// `"user.manage.own"`, `"role.manage.all"`). The engine never interprets
/// them; policy semantics live entirely in how call sites combine names.
///
/// On the wire a permission may appear either as a bare string or as an
/// object carrying a `name` field (`[{"name": "event.approve"}]` and
/// `["event.approve"]` are both accepted).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First dot segment of the name (e.g. `"event"` for `"event.approve"`).
    ///
    /// Display/audit grouping only; decisions never consult this.
    pub fn namespace(&self) -> &str {
        self.as_str().split('.').next().unwrap_or_default()
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Permission {
    fn from(value: &str) -> Self {
        Self(Cow::Owned(value.to_string()))
    }
}

impl From<String> for Permission {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PermissionVisitor;

        impl<'de> Visitor<'de> for PermissionVisitor {
            type Value = Permission;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a permission name or an object with a `name` field")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Permission::from(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(Permission::from(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut name: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "name" {
                        name = Some(map.next_value()?);
                    } else {
                        let _ = map.next_value::<de::IgnoredAny>()?;
                    }
                }
                name.map(Permission::from)
                    .ok_or_else(|| de::Error::missing_field("name"))
            }
        }

        deserializer.deserialize_any(PermissionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_string_and_object_shapes() {
        let bare: Permission = serde_json::from_str("\"event.approve\"").unwrap();
        let object: Permission =
            serde_json::from_str(r#"{"name": "event.approve", "id": 12}"#).unwrap();
        assert_eq!(bare, object);
        assert_eq!(bare.as_str(), "event.approve");
    }

    #[test]
    fn object_without_name_is_rejected() {
        let result: Result<Permission, _> = serde_json::from_str(r#"{"id": 12}"#);
        assert!(result.is_err());
    }

    #[test]
    fn namespace_is_first_dot_segment() {
        assert_eq!(Permission::new("user.manage.own").namespace(), "user");
        assert_eq!(Permission::new("flat").namespace(), "flat");
    }

    #[test]
    fn serializes_as_plain_string() {
        let p = Permission::new("role.manage.all");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"role.manage.all\"");
    }
}
