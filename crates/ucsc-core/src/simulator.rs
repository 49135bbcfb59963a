//! In-memory stand-in for a UCS Central appliance.
//!
//! [`SimulatedAppliance`] keeps a management tree in memory and hands out sessions through
//! [`SimulatedConnector`]. It follows the appliance's commit rules closely enough to run the
//! object helpers end to end without a live system: mutations are queued per session and
//! applied atomically on commit, objects need an existing parent, adding over an existing DN
//! fails unless `modify_present` is set, and removing an object removes its subtree.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use crate::config::ConnectionConfig;
use crate::dn::{DistinguishedName, ORG_ROOT};
use crate::mo::ManagedObject;
use crate::session::{Connector, Session};
use crate::{Error, Result};

/// Device profile every appliance ships with.
pub const DEFAULT_DEVICE_PROFILE: &str = "org-root/deviceprofile-default";

#[derive(Debug, Default)]
struct ApplianceState {
    users: HashMap<String, String>,
    objects: BTreeMap<DistinguishedName, ManagedObject>,
    rejections: VecDeque<String>,
}

/// Shared in-memory management tree.
///
/// Cloning the appliance yields another handle to the same tree.
#[derive(Debug, Clone)]
pub struct SimulatedAppliance {
    state: Arc<Mutex<ApplianceState>>,
}

impl SimulatedAppliance {
    /// Creates an appliance holding `org-root` and the default device profile.
    #[must_use]
    pub fn new() -> Self {
        let mut state = ApplianceState::default();
        for (class_id, dn) in [
            ("OrgOrg", ORG_ROOT),
            ("PolicyDeviceProfile", DEFAULT_DEVICE_PROFILE),
        ] {
            if let Ok(dn) = DistinguishedName::parse(dn) {
                let mo = ManagedObject::new(class_id, dn.clone());
                state.objects.insert(dn, mo);
            }
        }
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Accepts logins for `username` with `password`.
    #[must_use]
    pub fn with_user(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.users.insert(username.into(), password.into());
        }
        self
    }

    /// Creates an appliance that accepts the credentials in `config`.
    #[must_use]
    pub fn for_config(config: &ConnectionConfig) -> Self {
        Self::new().with_user(config.username(), config.password())
    }

    /// Returns a connector that logs in with the credentials in `config`.
    #[must_use]
    pub fn connector(&self, config: ConnectionConfig) -> SimulatedConnector {
        SimulatedConnector {
            appliance: self.clone(),
            config,
        }
    }

    /// Makes the next commit from any session fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionError`] if the appliance state is unusable.
    pub fn reject_next_commit(&self, reason: impl Into<String>) -> Result<()> {
        self.lock()?.rejections.push_back(reason.into());
        Ok(())
    }

    /// Returns the object stored at `dn`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionError`] if the appliance state is unusable.
    pub fn object(&self, dn: &DistinguishedName) -> Result<Option<ManagedObject>> {
        Ok(self.lock()?.objects.get(dn).cloned())
    }

    /// Number of objects in the tree, including the seeded roots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionError`] if the appliance state is unusable.
    pub fn object_count(&self) -> Result<usize> {
        Ok(self.lock()?.objects.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, ApplianceState>> {
        self.state
            .lock()
            .map_err(|_| Error::SessionError("simulated appliance state poisoned".to_string()))
    }
}

impl Default for SimulatedAppliance {
    fn default() -> Self {
        Self::new()
    }
}

/// Connector that opens sessions on a [`SimulatedAppliance`].
#[derive(Debug, Clone)]
pub struct SimulatedConnector {
    appliance: SimulatedAppliance,
    config: ConnectionConfig,
}

impl Connector for SimulatedConnector {
    fn login(&self) -> Result<Box<dyn Session>> {
        let state = self.appliance.lock()?;
        let accepted = state
            .users
            .get(self.config.username())
            .is_some_and(|password| password == self.config.password());
        drop(state);

        if !accepted {
            return Err(Error::AuthError(format!(
                "login rejected for user `{}` on {}",
                self.config.username(),
                self.config.hostname()
            )));
        }

        info!(
            host = self.config.hostname(),
            user = self.config.username(),
            "logged in to simulated appliance"
        );
        Ok(Box::new(SimulatedSession {
            appliance: self.appliance.clone(),
            pending: Vec::new(),
            logged_in: true,
        }))
    }
}

#[derive(Debug, Clone)]
enum PendingOp {
    Add {
        mo: ManagedObject,
        modify_present: bool,
    },
    Set(ManagedObject),
    Remove(DistinguishedName),
}

/// Session opened by [`SimulatedConnector`].
#[derive(Debug)]
pub struct SimulatedSession {
    appliance: SimulatedAppliance,
    pending: Vec<PendingOp>,
    logged_in: bool,
}

impl SimulatedSession {
    fn ensure_logged_in(&self) -> Result<()> {
        if self.logged_in {
            Ok(())
        } else {
            Err(Error::SessionError("session is logged out".to_string()))
        }
    }

    fn queue(&mut self, op: PendingOp) -> Result<()> {
        self.ensure_logged_in()?;
        debug!(?op, "queued mutation");
        self.pending.push(op);
        Ok(())
    }
}

impl Session for SimulatedSession {
    fn logout(&mut self) -> Result<()> {
        self.ensure_logged_in()?;
        self.logged_in = false;
        self.pending.clear();
        info!("logged out of simulated appliance");
        Ok(())
    }

    fn query_dn(&mut self, dn: &DistinguishedName) -> Result<Option<ManagedObject>> {
        self.ensure_logged_in()?;
        debug!(%dn, "query_dn");
        self.appliance.object(dn)
    }

    fn add_mo(&mut self, mo: &ManagedObject, modify_present: bool) -> Result<()> {
        self.queue(PendingOp::Add {
            mo: mo.clone(),
            modify_present,
        })
    }

    fn set_mo(&mut self, mo: &ManagedObject) -> Result<()> {
        self.queue(PendingOp::Set(mo.clone()))
    }

    fn remove_mo(&mut self, mo: &ManagedObject) -> Result<()> {
        self.queue(PendingOp::Remove(mo.dn().clone()))
    }

    fn commit(&mut self) -> Result<Vec<ManagedObject>> {
        self.ensure_logged_in()?;
        let ops = std::mem::take(&mut self.pending);
        let mut state = self.appliance.lock()?;

        if let Some(reason) = state.rejections.pop_front() {
            return Err(Error::CommitError(reason));
        }

        let mut objects = state.objects.clone();
        let mut confirmed = Vec::new();
        for op in ops {
            if let Some(mo) = apply(&mut objects, op)? {
                confirmed.push(mo);
            }
        }

        state.objects = objects;
        debug!(confirmed = confirmed.len(), "commit applied");
        Ok(confirmed)
    }
}

fn apply(
    objects: &mut BTreeMap<DistinguishedName, ManagedObject>,
    op: PendingOp,
) -> Result<Option<ManagedObject>> {
    match op {
        PendingOp::Add { mo, modify_present } => {
            if let Some(parent) = mo.dn().parent() {
                if !objects.contains_key(&parent) {
                    return Err(Error::CommitError(format!(
                        "parent {parent} of {} does not exist",
                        mo.dn()
                    )));
                }
            }

            let stored = match objects.get_mut(mo.dn()) {
                Some(_) if !modify_present => {
                    return Err(Error::CommitError(format!("{} already exists", mo.dn())));
                }
                Some(existing) if existing.class_id() != mo.class_id() => {
                    return Err(Error::CommitError(format!(
                        "{} is a {}, not a {}",
                        mo.dn(),
                        existing.class_id(),
                        mo.class_id()
                    )));
                }
                Some(existing) => {
                    existing.set_prop_multiple(mo.properties());
                    existing.clone()
                }
                None => {
                    objects.insert(mo.dn().clone(), mo.clone());
                    mo
                }
            };
            Ok(Some(stored))
        }
        PendingOp::Set(mo) => {
            let existing = objects.get_mut(mo.dn()).ok_or_else(|| {
                Error::CommitError(format!("cannot modify {}: object does not exist", mo.dn()))
            })?;
            existing.set_prop_multiple(mo.properties());
            Ok(Some(existing.clone()))
        }
        PendingOp::Remove(dn) => {
            if objects.remove(&dn).is_none() {
                return Err(Error::CommitError(format!(
                    "cannot remove {dn}: object does not exist"
                )));
            }
            objects.retain(|candidate, _| !dn.is_ancestor_of(candidate));
            Ok(None)
        }
    }
}
