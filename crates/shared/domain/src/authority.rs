use crate::constants::{ROLE_ADMIN, ROLE_USER};
use bitflags::bitflags;
use serde::de::{Error as _, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Roles a route requires before it may be activated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Authorities: u32 {
        const USER = 1 << 0;
        const ADMIN = 1 << 1;

        const ALL = Self::USER.bits() | Self::ADMIN.bits();
    }
}

impl Authorities {
    /// Role names in declaration order.
    pub fn roles(self) -> impl Iterator<Item = &'static str> {
        [(Self::USER, ROLE_USER), (Self::ADMIN, ROLE_ADMIN)]
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, role)| role)
    }

    /// The flag for a single role name, or `None` if the role is unknown.
    #[must_use]
    pub fn from_role(role: &str) -> Option<Self> {
        match role {
            ROLE_USER => Some(Self::USER),
            ROLE_ADMIN => Some(Self::ADMIN),
            _ => None,
        }
    }
}

impl Serialize for Authorities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let roles: Vec<&str> = self.roles().collect();
        let mut seq = serializer.serialize_seq(Some(roles.len()))?;
        for role in roles {
            seq.serialize_element(role)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Authorities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RolesVisitor;

        impl<'de> Visitor<'de> for RolesVisitor {
            type Value = Authorities;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of role names")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut flags = Authorities::empty();
                while let Some(role) = seq.next_element::<String>()? {
                    flags |= Authorities::from_role(&role).ok_or_else(|| {
                        A::Error::custom(format!("unknown role '{role}'"))
                    })?;
                }
                Ok(flags)
            }
        }

        deserializer.deserialize_seq(RolesVisitor)
    }
}
