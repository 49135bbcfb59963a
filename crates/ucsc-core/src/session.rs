//! Session abstractions for talking to the appliance.
//!
//! A [`Connector`] logs in and hands out a [`Session`]. Helpers borrow the session for the
//! duration of a single call and never keep it. Mutations queued with `add_mo`, `set_mo` and
//! `remove_mo` take effect only when [`Session::commit`] succeeds.

use crate::dn::DistinguishedName;
use crate::mo::ManagedObject;
use crate::Result;

/// Authenticated connection used to query and mutate managed objects.
///
/// Calls are synchronous and block until the appliance answers. A session is not required to
/// serialize concurrent use; `&mut self` receivers keep a single session on one caller at a
/// time.
#[cfg_attr(test, mockall::automock)]
pub trait Session: Send {
    /// Ends the session. Further calls fail with [`crate::Error::SessionError`].
    fn logout(&mut self) -> Result<()>;

    /// Looks up the object at `dn`, returning `None` when nothing lives there.
    fn query_dn(&mut self, dn: &DistinguishedName) -> Result<Option<ManagedObject>>;

    /// Queues creation of `mo`. When `modify_present` is set, an existing object at the same DN
    /// is overwritten instead of rejected at commit.
    fn add_mo(&mut self, mo: &ManagedObject, modify_present: bool) -> Result<()>;

    /// Queues an update of the properties of an existing object.
    fn set_mo(&mut self, mo: &ManagedObject) -> Result<()>;

    /// Queues removal of an existing object.
    fn remove_mo(&mut self, mo: &ManagedObject) -> Result<()>;

    /// Applies every queued mutation as one batch.
    ///
    /// Returns the objects as confirmed by the appliance. On failure the batch is discarded
    /// and [`crate::Error::CommitError`] is returned.
    fn commit(&mut self) -> Result<Vec<ManagedObject>>;
}

/// Opens sessions against an appliance.
#[cfg_attr(test, mockall::automock)]
pub trait Connector: Send + Sync {
    /// Authenticates and returns a new session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AuthError`] when the appliance rejects the credentials.
    fn login(&self) -> Result<Box<dyn Session>>;
}

/// Logs in, runs `f` with the session, and logs out again.
///
/// Logout runs even when `f` fails; the error from `f` takes precedence over a logout error.
///
/// # Errors
///
/// Returns the login error, the error returned by `f`, or the logout error, in that order.
pub fn with_session<T, F>(connector: &dyn Connector, f: F) -> Result<T>
where
    F: FnOnce(&mut dyn Session) -> Result<T>,
{
    let mut session = connector.login()?;
    let result = f(&mut *session);
    let logout = session.logout();
    let value = result?;
    logout?;
    Ok(value)
}
