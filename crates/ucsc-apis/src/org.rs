//! Organizations (`OrgOrg`).
//!
//! Organizations nest: `parent` is `org-root` for top-level organizations and another
//! organization's DN (see [`crate::org_dn`]) for sub-organizations.

use crate::{MoCrud, Result};
use ucsc_core::dn::DistinguishedName;
use ucsc_core::kind::ORG_ORG;
use ucsc_core::{ManagedObject, PropertyMap, Session};

fn orgs(parent: &DistinguishedName) -> MoCrud {
    MoCrud::new(&ORG_ORG, parent.clone())
}

fn keys(name: &str) -> PropertyMap {
    PropertyMap::new().with("name", name)
}

/// Creates an organization below `parent`, or updates it if it already exists.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::InvalidArgument`] for an empty name, or the session's error
/// (a missing parent is rejected at commit).
pub fn org_create(
    session: &mut dyn Session,
    name: &str,
    parent: &DistinguishedName,
    descr: Option<&str>,
    extra: &PropertyMap,
) -> Result<ManagedObject> {
    let mut optional = PropertyMap::new().with_opt("descr", descr);
    optional.merge(extra);
    orgs(parent).create(session, &keys(name), &optional)
}

/// Gets an organization.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::InvalidArgument`] for an empty name, or the session's error.
pub fn org_get(
    session: &mut dyn Session,
    name: &str,
    parent: &DistinguishedName,
) -> Result<Option<ManagedObject>> {
    orgs(parent).get(session, &keys(name))
}

/// Checks whether an organization exists with the `expected` property values.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::InvalidArgument`] for an empty name, or the session's error.
pub fn org_exists(
    session: &mut dyn Session,
    name: &str,
    parent: &DistinguishedName,
    expected: &PropertyMap,
) -> Result<(bool, Option<ManagedObject>)> {
    orgs(parent).exists(session, &keys(name), expected)
}

/// Modifies properties of an existing organization.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::NotFound`] if the organization does not exist, or the
/// session's error.
pub fn org_modify(
    session: &mut dyn Session,
    name: &str,
    parent: &DistinguishedName,
    changes: &PropertyMap,
) -> Result<ManagedObject> {
    orgs(parent).modify(session, &keys(name), changes)
}

/// Deletes an organization together with everything below it.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::NotFound`] if the organization does not exist, or the
/// session's error.
pub fn org_delete(
    session: &mut dyn Session,
    name: &str,
    parent: &DistinguishedName,
) -> Result<()> {
    orgs(parent).delete(session, &keys(name))
}
