//! Dynamic vNIC connection policies (`VnicDynamicConPolicy`).

use crate::{MoCrud, Result};
use ucsc_core::dn::DistinguishedName;
use ucsc_core::kind::VNIC_DYNAMIC_CON_POLICY;
use ucsc_core::{ManagedObject, PropertyMap, Session};

/// Optional settings for [`dynamic_vnic_conn_policy_create`].
///
/// Unset fields fall back to the appliance defaults (`dynamic_eth = 54`,
/// `protection = protected`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicVnicConnPolicyOptions {
    /// Number of dynamic vNICs.
    pub dynamic_eth: Option<String>,
    /// Adapter policy name.
    pub adaptor_profile_name: Option<String>,
    /// Fabric protection (`protected`, `protected-pref-a`, `protected-pref-b`).
    pub protection: Option<String>,
    /// Description.
    pub descr: Option<String>,
    /// Any further properties of the object.
    pub extra: PropertyMap,
}

impl DynamicVnicConnPolicyOptions {
    fn to_props(&self) -> PropertyMap {
        let mut props = PropertyMap::new()
            .with_opt("dynamic_eth", self.dynamic_eth.as_deref())
            .with_opt("adaptor_profile_name", self.adaptor_profile_name.as_deref())
            .with_opt("protection", self.protection.as_deref())
            .with_opt("descr", self.descr.as_deref());
        props.merge(&self.extra);
        props
    }
}

fn policies(parent_org: &DistinguishedName) -> MoCrud {
    MoCrud::new(&VNIC_DYNAMIC_CON_POLICY, parent_org.clone())
}

fn keys(name: &str) -> PropertyMap {
    PropertyMap::new().with("name", name)
}

/// Creates a dynamic vNIC connection policy in `parent_org`, or updates it if it already
/// exists.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::InvalidArgument`] for an empty name, or the session's error.
pub fn dynamic_vnic_conn_policy_create(
    session: &mut dyn Session,
    name: &str,
    parent_org: &DistinguishedName,
    options: &DynamicVnicConnPolicyOptions,
) -> Result<ManagedObject> {
    policies(parent_org).create(session, &keys(name), &options.to_props())
}

/// Gets a dynamic vNIC connection policy.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::InvalidArgument`] for an empty name, or the session's error.
pub fn dynamic_vnic_conn_policy_get(
    session: &mut dyn Session,
    name: &str,
    parent_org: &DistinguishedName,
) -> Result<Option<ManagedObject>> {
    policies(parent_org).get(session, &keys(name))
}

/// Checks whether a dynamic vNIC connection policy exists with the `expected` values.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::InvalidArgument`] for an empty name, or the session's error.
pub fn dynamic_vnic_conn_policy_exists(
    session: &mut dyn Session,
    name: &str,
    parent_org: &DistinguishedName,
    expected: &PropertyMap,
) -> Result<(bool, Option<ManagedObject>)> {
    policies(parent_org).exists(session, &keys(name), expected)
}

/// Modifies properties of an existing dynamic vNIC connection policy.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::NotFound`] if the policy does not exist, or the session's error.
pub fn dynamic_vnic_conn_policy_modify(
    session: &mut dyn Session,
    name: &str,
    parent_org: &DistinguishedName,
    changes: &PropertyMap,
) -> Result<ManagedObject> {
    policies(parent_org).modify(session, &keys(name), changes)
}

/// Deletes a dynamic vNIC connection policy.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::NotFound`] if the policy does not exist, or the session's error.
pub fn dynamic_vnic_conn_policy_delete(
    session: &mut dyn Session,
    name: &str,
    parent_org: &DistinguishedName,
) -> Result<()> {
    policies(parent_org).delete(session, &keys(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_to_props() {
        let options = DynamicVnicConnPolicyOptions {
            dynamic_eth: Some("32".to_string()),
            descr: Some("lab".to_string()),
            extra: PropertyMap::new().with("policy_owner", "local"),
            ..DynamicVnicConnPolicyOptions::default()
        };

        let props = options.to_props();
        assert_eq!(props.get("dynamic_eth"), Some("32"));
        assert_eq!(props.get("descr"), Some("lab"));
        assert_eq!(props.get("policy_owner"), Some("local"));
        assert!(!props.contains_key("protection"));
    }

    #[test]
    fn default_options_are_empty() {
        assert!(DynamicVnicConnPolicyOptions::default().to_props().is_empty());
    }
}
