//! Managed-object helpers for UCS Central.
//!
//! Every supported object kind gets the same five operations (create, get, exists, modify,
//! delete), all built on the generic [`MoCrud`] helper. Helpers borrow a
//! [`Session`](ucsc_core::Session) for the duration of one call and keep no state.
//!
//! ```no_run
//! use ucsc_apis::role::{role_create, role_exists};
//! use ucsc_core::simulator::SimulatedAppliance;
//! use ucsc_core::{ConnectionConfig, Connector, PropertyMap};
//!
//! # fn main() -> ucsc_core::Result<()> {
//! let config = ConnectionConfig::new("central.example.com", "admin", "password")?;
//! let appliance = SimulatedAppliance::for_config(&config);
//! let mut session = appliance.connector(config).login()?;
//!
//! role_create(&mut *session, "test_role", "admin", None, &PropertyMap::new())?;
//! let (found, _) = role_exists(&mut *session, "test_role", &PropertyMap::new())?;
//! assert!(found);
//! session.logout()?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

mod crud;
pub mod dynamic_vnic_conn_policy;
pub mod org;
pub mod role;
mod scope;

pub use crud::MoCrud;
pub use scope::{device_profile_dn, org_dn};

/// Convenient result alias that reuses the core error type.
pub type Result<T> = ucsc_core::Result<T>;
