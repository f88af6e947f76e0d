//! String identifiers for catalog entries.
//!
//! Identifiers are normalized to lowercase on construction so lookups are
//! insensitive to how content authors capitalized them.

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl AsRef<str>) -> Self {
                Self(id.as_ref().trim().to_lowercase())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self::new(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

catalog_id!(
    /// Identifier of a [`crate::CardDefinition`].
    CardId
);
catalog_id!(
    /// Identifier of a [`crate::BuffDefinition`].
    BuffId
);
catalog_id!(
    /// Identifier of a [`crate::EnemyDefinition`].
    EnemyId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_normalized() {
        assert_eq!(CardId::from("Strike"), CardId::from("strike"));
        assert_eq!(BuffId::new(" Vulnerable ").as_str(), "vulnerable");
    }
}
