//! Managed objects and the factory that builds them.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::dn::{self, DistinguishedName};
use crate::error::{Error, Result};
use crate::kind::MoKind;

/// Ordered map of property name to value.
///
/// Used for required fields, free-form optional properties, key fields, expected values and
/// changes alike. Values are kept as strings, the way the appliance reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(BTreeMap<String, String>);

impl PropertyMap {
    /// Creates an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds a property, consuming and returning the map.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a property only when a value is present.
    #[must_use]
    pub fn with_opt(
        mut self,
        name: impl Into<String>,
        value: Option<impl Into<String>>,
    ) -> Self {
        if let Some(value) = value {
            self.insert(name, value);
        }
        self
    }

    /// Inserts a property, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Returns the value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns true if the property is present.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over property names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Copies every property of `other` over this map.
    pub fn merge(&mut self, other: &PropertyMap) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for PropertyMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A configuration entity in the appliance's management tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObject {
    class_id: String,
    dn: DistinguishedName,
    #[serde(default)]
    properties: PropertyMap,
}

impl ManagedObject {
    /// Creates an object with no properties.
    #[must_use]
    pub fn new(class_id: impl Into<String>, dn: DistinguishedName) -> Self {
        Self {
            class_id: class_id.into(),
            dn,
            properties: PropertyMap::new(),
        }
    }

    /// Builds an object of `kind` below `parent`.
    ///
    /// Every required property of the kind must be present and non-empty in `required`. Schema
    /// defaults are applied first, then `optional`, then `required`, so a required value wins
    /// over the same property given as optional. Unknown optional properties are kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaViolation`] if a required property is absent, and
    /// [`Error::InvalidArgument`] if one is blank, if an optional property redefines a naming
    /// property, or if the DN cannot be resolved.
    pub fn build(
        kind: &MoKind,
        parent: &DistinguishedName,
        required: &PropertyMap,
        optional: &PropertyMap,
    ) -> Result<Self> {
        for field in kind.required_props {
            match required.get(field) {
                None => {
                    return Err(Error::SchemaViolation {
                        kind: kind.class_id.to_string(),
                        field: (*field).to_string(),
                    })
                }
                Some(value) if value.trim().is_empty() => {
                    return Err(Error::InvalidArgument(format!(
                        "{} property `{field}` cannot be empty",
                        kind.class_id
                    )))
                }
                Some(_) => {}
            }
        }

        if let Some(naming) = optional.keys().find(|name| kind.is_naming(name)) {
            return Err(Error::InvalidArgument(format!(
                "{} naming property `{naming}` cannot be given as optional",
                kind.class_id
            )));
        }

        let dn = dn::resolve(parent, kind, required)?;

        let mut properties = kind.default_props();
        properties.merge(optional);
        properties.merge(required);

        Ok(Self {
            class_id: kind.class_id.to_string(),
            dn,
            properties,
        })
    }

    /// Class id of the object.
    #[must_use]
    pub fn class_id(&self) -> &str {
        &self.class_id
    }

    /// Distinguished name of the object.
    #[must_use]
    pub const fn dn(&self) -> &DistinguishedName {
        &self.dn
    }

    /// Relative name of the object.
    #[must_use]
    pub fn rn(&self) -> &str {
        self.dn.rn()
    }

    /// Returns the value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name)
    }

    /// All properties of the object.
    #[must_use]
    pub const fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Sets a single property.
    pub fn set_prop(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name, value);
    }

    /// Sets every property in `props`, overwriting existing values.
    pub fn set_prop_multiple(&mut self, props: &PropertyMap) {
        self.properties.merge(props);
    }

    /// Adds a property, consuming and returning the object.
    #[must_use]
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_prop(name, value);
        self
    }

    /// Returns true if every property in `expected` has exactly the given value.
    ///
    /// An empty `expected` map always matches.
    #[must_use]
    pub fn check_prop_match(&self, expected: &PropertyMap) -> bool {
        expected
            .iter()
            .all(|(name, value)| self.get(name) == Some(value))
    }
}

impl fmt::Display for ManagedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.class_id, self.dn)
    }
}
