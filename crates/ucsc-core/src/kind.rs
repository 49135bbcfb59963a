//! Static metadata describing managed-object kinds.
//!
//! A [`MoKind`] carries everything the DN resolver and the object factory need to know about a
//! kind: its class id, RN prefix, naming properties, required properties and schema defaults.
//! Adding support for a new kind means adding one constant here.

use crate::error::{Error, Result};
use crate::mo::PropertyMap;

/// Metadata for a managed-object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoKind {
    /// Class id reported by the appliance (e.g. `AaaRole`).
    pub class_id: &'static str,
    /// Prefix of the object's relative name (e.g. `role` for `role-admin`).
    pub rn_prefix: &'static str,
    /// Properties that form the naming value, in RN order.
    pub naming_props: &'static [&'static str],
    /// Properties that must be supplied when building the object. Always includes the naming
    /// properties.
    pub required_props: &'static [&'static str],
    /// Schema defaults applied before caller-supplied optional properties.
    pub defaults: &'static [(&'static str, &'static str)],
}

impl MoKind {
    /// Returns true if `property` is one of the kind's naming properties.
    #[must_use]
    pub fn is_naming(&self, property: &str) -> bool {
        self.naming_props.contains(&property)
    }

    /// Fails if `changes` would rewrite a naming property and so the object's identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the first offending property.
    pub fn ensure_mutable(&self, changes: &PropertyMap) -> Result<()> {
        match changes.keys().find(|name| self.is_naming(name)) {
            Some(name) => Err(Error::InvalidArgument(format!(
                "{} naming property `{name}` cannot be modified",
                self.class_id
            ))),
            None => Ok(()),
        }
    }

    /// Schema defaults as a property map.
    #[must_use]
    pub fn default_props(&self) -> PropertyMap {
        self.defaults.iter().copied().collect()
    }
}

/// Administrative role (`org-root/deviceprofile-<profile>/role-<name>`).
pub const AAA_ROLE: MoKind = MoKind {
    class_id: "AaaRole",
    rn_prefix: "role",
    naming_props: &["name"],
    required_props: &["name", "priv"],
    defaults: &[],
};

/// Organization (`org-root/org-<name>`).
pub const ORG_ORG: MoKind = MoKind {
    class_id: "OrgOrg",
    rn_prefix: "org",
    naming_props: &["name"],
    required_props: &["name"],
    defaults: &[],
};

/// Dynamic vNIC connection policy (`<org>/dynamic-con-<name>`).
pub const VNIC_DYNAMIC_CON_POLICY: MoKind = MoKind {
    class_id: "VnicDynamicConPolicy",
    rn_prefix: "dynamic-con",
    naming_props: &["name"],
    required_props: &["name"],
    defaults: &[("dynamic_eth", "54"), ("protection", "protected")],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naming_props_are_required() {
        for kind in [&AAA_ROLE, &ORG_ORG, &VNIC_DYNAMIC_CON_POLICY] {
            for name in kind.naming_props {
                assert!(
                    kind.required_props.contains(name),
                    "{} must require {name}",
                    kind.class_id
                );
            }
        }
    }

    #[test]
    fn default_props() {
        let defaults = VNIC_DYNAMIC_CON_POLICY.default_props();
        assert_eq!(defaults.get("dynamic_eth"), Some("54"));
        assert_eq!(defaults.get("protection"), Some("protected"));
        assert!(AAA_ROLE.default_props().is_empty());
    }

    #[test]
    fn ensure_mutable_rejects_naming_props() {
        assert!(AAA_ROLE
            .ensure_mutable(&PropertyMap::new().with("priv", "read-only"))
            .is_ok());
        assert!(matches!(
            AAA_ROLE.ensure_mutable(&PropertyMap::new().with("name", "renamed")),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn is_naming() {
        assert!(AAA_ROLE.is_naming("name"));
        assert!(!AAA_ROLE.is_naming("priv"));
    }
}
