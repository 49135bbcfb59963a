//! Shared setup for the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use ucsc_core::simulator::SimulatedAppliance;
use ucsc_core::{ConnectionConfig, Connector, Session};

/// Host alias the tests connect to.
pub const HOST_ALIAS: &str = "ucscentral";

/// Get the path to the test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load the connection settings for `alias` from the fixture file.
pub fn load_config(alias: &str) -> ConnectionConfig {
    let path = fixtures_dir().join("connection.cfg");
    ConnectionConfig::from_file(&path, alias).unwrap_or_else(|e| {
        panic!(
            "Failed to load connection fixture {} [{}]: {}",
            path.display(),
            alias,
            e
        )
    })
}

/// A logged-in session on a fresh appliance.
pub struct Harness {
    pub appliance: SimulatedAppliance,
    pub session: Box<dyn Session>,
}

/// Log in to a fresh appliance with the default fixture credentials.
pub fn custom_setup() -> Harness {
    let config = load_config(HOST_ALIAS);
    let appliance = SimulatedAppliance::for_config(&config);
    let session = appliance
        .connector(config)
        .login()
        .unwrap_or_else(|e| panic!("Failed to log in: {}", e));
    Harness { appliance, session }
}

/// Log out of the harness session.
pub fn custom_teardown(mut harness: Harness) {
    harness
        .session
        .logout()
        .unwrap_or_else(|e| panic!("Failed to log out: {}", e));
}
