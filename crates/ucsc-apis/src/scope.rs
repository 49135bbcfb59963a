//! Parent scopes objects are created under.

use crate::Result;
use ucsc_core::dn::{self, DistinguishedName};
use ucsc_core::kind::ORG_ORG;
use ucsc_core::{Error, PropertyMap};

/// Distinguished name of the device profile `name` (`org-root/deviceprofile-<name>`).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `name` is blank or its brackets do not balance.
pub fn device_profile_dn(name: &str) -> Result<DistinguishedName> {
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "device profile name cannot be empty".to_string(),
        ));
    }
    Ok(DistinguishedName::org_root().child(&dn::format_rn("deviceprofile", &[name]))?)
}

/// Distinguished name of a nested organization.
///
/// `org_dn(&["east", "lab"])` is `org-root/org-east/org-lab`; an empty path is `org-root`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a path element is empty.
pub fn org_dn(path: &[&str]) -> Result<DistinguishedName> {
    path.iter().try_fold(DistinguishedName::org_root(), |parent, name| {
        dn::resolve(&parent, &ORG_ORG, &PropertyMap::new().with("name", *name))
    })
}
