//! Administrative roles (`AaaRole`) in the default device profile.

use crate::{device_profile_dn, MoCrud, Result};
use ucsc_core::kind::AAA_ROLE;
use ucsc_core::{ManagedObject, PropertyMap, Session};

/// Device profile roles are created in.
pub const ROLE_DEVICE_PROFILE: &str = "default";

fn roles() -> Result<MoCrud> {
    Ok(MoCrud::new(&AAA_ROLE, device_profile_dn(ROLE_DEVICE_PROFILE)?))
}

fn keys(name: &str) -> PropertyMap {
    PropertyMap::new().with("name", name)
}

/// Creates a role, or updates it if it already exists.
///
/// `privileges` is a comma separated list such as `"admin"` or `"ls-config,ls-network"`.
/// `extra` carries any further properties of the object.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::InvalidArgument`] for an empty name or privilege list, or the
/// session's error.
pub fn role_create(
    session: &mut dyn Session,
    name: &str,
    privileges: &str,
    descr: Option<&str>,
    extra: &PropertyMap,
) -> Result<ManagedObject> {
    let required = keys(name).with("priv", privileges);
    let mut optional = PropertyMap::new().with_opt("descr", descr);
    optional.merge(extra);
    roles()?.create(session, &required, &optional)
}

/// Gets a role by name.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::InvalidArgument`] for an empty name, or the session's error.
pub fn role_get(session: &mut dyn Session, name: &str) -> Result<Option<ManagedObject>> {
    roles()?.get(session, &keys(name))
}

/// Checks whether a role exists with the `expected` property values.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::InvalidArgument`] for an empty name, or the session's error.
pub fn role_exists(
    session: &mut dyn Session,
    name: &str,
    expected: &PropertyMap,
) -> Result<(bool, Option<ManagedObject>)> {
    roles()?.exists(session, &keys(name), expected)
}

/// Modifies properties of an existing role.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::NotFound`] if the role does not exist, or the session's error.
pub fn role_modify(
    session: &mut dyn Session,
    name: &str,
    changes: &PropertyMap,
) -> Result<ManagedObject> {
    roles()?.modify(session, &keys(name), changes)
}

/// Deletes a role.
///
/// # Errors
///
/// Returns [`ucsc_core::Error::NotFound`] if the role does not exist, or the session's error.
pub fn role_delete(session: &mut dyn Session, name: &str) -> Result<()> {
    roles()?.delete(session, &keys(name))
}
