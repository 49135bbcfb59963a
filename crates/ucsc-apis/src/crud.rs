//! Generic create/get/exists/modify/delete helper.

use crate::Result;
use tracing::{debug, warn};
use ucsc_core::dn::{self, DistinguishedName};
use ucsc_core::{Error, ManagedObject, MoKind, PropertyMap, Session};

/// Stateless CRUD helper for one managed-object kind under one parent scope.
///
/// Every operation resolves the target DN from the kind metadata and the caller's key fields,
/// performs its remote calls on the borrowed session, and returns. Nothing is retried; session
/// errors reach the caller unchanged.
#[derive(Debug, Clone)]
pub struct MoCrud {
    kind: &'static MoKind,
    parent: DistinguishedName,
}

impl MoCrud {
    /// Creates a helper for `kind` objects living directly below `parent`.
    #[must_use]
    pub fn new(kind: &'static MoKind, parent: DistinguishedName) -> Self {
        Self { kind, parent }
    }

    /// Distinguished name of the object addressed by `keys`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a key field is missing or empty.
    pub fn dn(&self, keys: &PropertyMap) -> Result<DistinguishedName> {
        dn::resolve(&self.parent, self.kind, keys)
    }

    /// Builds an object and adds it, merging into an existing object at the same DN.
    ///
    /// Returns the object as confirmed by the commit.
    ///
    /// # Errors
    ///
    /// Returns the factory's validation errors, or the session's error for the add or commit.
    pub fn create(
        &self,
        session: &mut dyn Session,
        required: &PropertyMap,
        optional: &PropertyMap,
    ) -> Result<ManagedObject> {
        let mo = ManagedObject::build(self.kind, &self.parent, required, optional)?;
        debug!(class = self.kind.class_id, dn = %mo.dn(), "creating managed object");

        session.add_mo(&mo, true)?;
        let confirmed = session.commit()?;
        Ok(confirmed_or(confirmed, mo))
    }

    /// Looks up the object addressed by `keys`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for unusable keys, or the session's query error.
    pub fn get(
        &self,
        session: &mut dyn Session,
        keys: &PropertyMap,
    ) -> Result<Option<ManagedObject>> {
        let dn = self.dn(keys)?;
        debug!(class = self.kind.class_id, %dn, "querying managed object");
        session.query_dn(&dn)
    }

    /// Checks that the object exists and that every property in `expected` matches exactly.
    ///
    /// Returns `(false, None)` when the object is absent, `(true, Some(mo))` on a full match
    /// and `(false, Some(mo))` when the object exists with different values.
    ///
    /// # Errors
    ///
    /// Same conditions as [`MoCrud::get`]. Absence is never an error.
    pub fn exists(
        &self,
        session: &mut dyn Session,
        keys: &PropertyMap,
        expected: &PropertyMap,
    ) -> Result<(bool, Option<ManagedObject>)> {
        Ok(match self.get(session, keys)? {
            None => (false, None),
            Some(mo) => (mo.check_prop_match(expected), Some(mo)),
        })
    }

    /// Applies `changes` to the existing object and commits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `changes` touches a naming property,
    /// [`Error::NotFound`] if the object does not exist, or the session's error.
    pub fn modify(
        &self,
        session: &mut dyn Session,
        keys: &PropertyMap,
        changes: &PropertyMap,
    ) -> Result<ManagedObject> {
        self.kind.ensure_mutable(changes)?;
        let mut mo = self.require(session, keys)?;
        debug!(
            class = self.kind.class_id,
            dn = %mo.dn(),
            ?changes,
            "modifying managed object"
        );

        mo.set_prop_multiple(changes);
        session.set_mo(&mo)?;
        let confirmed = session.commit()?;
        Ok(confirmed_or(confirmed, mo))
    }

    /// Removes the existing object and commits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the object does not exist, or the session's error.
    pub fn delete(&self, session: &mut dyn Session, keys: &PropertyMap) -> Result<()> {
        let mo = self.require(session, keys)?;
        debug!(class = self.kind.class_id, dn = %mo.dn(), "deleting managed object");

        session.remove_mo(&mo)?;
        session.commit()?;
        Ok(())
    }

    fn require(&self, session: &mut dyn Session, keys: &PropertyMap) -> Result<ManagedObject> {
        let dn = self.dn(keys)?;
        session.query_dn(&dn)?.ok_or_else(|| {
            Error::NotFound(format!("{} {dn} does not exist", self.kind.class_id))
        })
    }
}

fn confirmed_or(confirmed: Vec<ManagedObject>, submitted: ManagedObject) -> ManagedObject {
    match confirmed.into_iter().find(|mo| mo.dn() == submitted.dn()) {
        Some(mo) => mo,
        None => {
            warn!(dn = %submitted.dn(), "commit did not echo the submitted object");
            submitted
        }
    }
}
