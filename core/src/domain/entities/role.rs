//! Role hierarchy and permission rule.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed, totally ordered set of account roles
///
/// Ranks run `Unknown < Customer < Worker < Admin`. The wire and storage form
/// is the lowercase name; anything unrecognised decodes to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Unknown,
    Customer,
    Worker,
    Admin,
}

impl Role {
    /// Position of the role in the hierarchy
    pub fn rank(&self) -> u8 {
        match self {
            Role::Unknown => 0,
            Role::Customer => 1,
            Role::Worker => 2,
            Role::Admin => 3,
        }
    }

    /// Whether this role may access a resource requiring `required`
    pub fn has_permission(&self, required: Role) -> bool {
        self.rank() >= required.rank()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Unknown => "unknown",
            Role::Customer => "customer",
            Role::Worker => "worker",
            Role::Admin => "admin",
        }
    }

    /// Decode a role name, coercing anything unrecognised to `Unknown`
    pub fn from_name(name: &str) -> Self {
        match name {
            "customer" => Role::Customer,
            "worker" => Role::Worker,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::from_name(s))
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RoleVisitor)
    }
}

/// Accepts `"admin"` as well as the legacy `{"role": "admin"}` object form
struct RoleVisitor;

impl<'de> Visitor<'de> for RoleVisitor {
    type Value = Role;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a role name or an object with a `role` field")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Role, E> {
        Ok(Role::from_name(value))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Role, A::Error> {
        let mut role = Role::Unknown;
        while let Some(key) = map.next_key::<String>()? {
            if key == "role" {
                let name: String = map.next_value()?;
                role = Role::from_name(&name);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(role)
    }
}
