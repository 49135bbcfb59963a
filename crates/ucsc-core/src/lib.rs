//! # ucsc-core
//!
//! Core types for working with the managed-object tree of a UCS Central appliance.
//!
//! This crate provides the building blocks shared by every object-kind helper:
//! distinguished names, managed objects and their kind metadata, the session
//! abstraction used to talk to the appliance, and connection configuration.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and error codes
//! - [`dn`] - Distinguished names and the DN resolver
//! - [`mo`] - Managed objects, property maps, and the object factory
//! - [`kind`] - Static metadata describing each managed-object kind
//! - [`session`] - Session and connector traits
//! - [`config`] - Connection configuration loaded from INI files
//! - [`simulator`] - In-memory appliance used for tests and offline work

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dn;
pub mod error;
pub mod kind;
pub mod mo;
pub mod session;
pub mod simulator;

// Re-export commonly used types
pub use crate::config::ConnectionConfig;
pub use dn::DistinguishedName;
pub use error::{Error, Result};
pub use kind::MoKind;
pub use mo::{ManagedObject, PropertyMap};
pub use session::{Connector, Session};
