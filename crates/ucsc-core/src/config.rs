//! Connection configuration for UCS Central appliances.
//!
//! Connection details are kept in an INI file with one section per host alias:
//!
//! ```ini
//! [ucscentral]
//! hostname = 192.0.2.10
//! username = admin
//! password = secret
//! port = 443
//! ```
//!
//! `port` is optional and defaults to [`DEFAULT_PORT`].

use crate::{Error, Result};
use config::{Config, File, FileFormat};
use secrecy::{ExposeSecret, SecretString};
use std::path::Path;
use url::Url;
use validator::Validate;

/// Host alias used when none is given.
pub const DEFAULT_HOST_ALIAS: &str = "ucscentral";
/// HTTPS port used when the configuration does not name one.
pub const DEFAULT_PORT: u16 = 443;

/// Connection details for one appliance.
#[derive(Debug, Clone, Validate)]
pub struct ConnectionConfig {
    /// Alias the details were loaded under
    #[validate(length(min = 1))]
    alias: String,

    /// Appliance hostname or address
    #[validate(length(min = 1))]
    hostname: String,

    /// Login user
    #[validate(length(min = 1))]
    username: String,

    password: SecretString,

    /// HTTPS port
    #[validate(range(min = 1))]
    port: u16,
}

impl ConnectionConfig {
    /// Creates a configuration for the default alias and port.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a field is empty or the hostname does not form a
    /// valid URL.
    pub fn new(
        hostname: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            alias: DEFAULT_HOST_ALIAS.to_string(),
            hostname: hostname.into(),
            username: username.into(),
            password: SecretString::from(password.into()),
            port: DEFAULT_PORT,
        };
        config.check()?;
        Ok(config)
    }

    /// Loads the section named `alias` from an INI file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read, a required key is missing,
    /// or the port is not a number.
    pub fn from_file(path: impl AsRef<Path>, alias: &str) -> Result<Self> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini))
            .build()
            .map_err(|err| {
                Error::ConfigError(format!(
                    "failed to read connection file {}: {err}",
                    path.display()
                ))
            })?;
        Self::from_settings(&settings, alias)
    }

    /// Loads the section named `alias` from INI text.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ConnectionConfig::from_file`].
    pub fn from_ini_str(contents: &str, alias: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Ini))
            .build()?;
        Self::from_settings(&settings, alias)
    }

    fn from_settings(settings: &Config, alias: &str) -> Result<Self> {
        let hostname = settings.get_string(&format!("{alias}.hostname"))?;
        let username = settings.get_string(&format!("{alias}.username"))?;
        let password = settings.get_string(&format!("{alias}.password"))?;

        let port = match settings.get_string(&format!("{alias}.port")) {
            Ok(value) => value.trim().parse::<u16>().map_err(|err| {
                Error::ConfigError(format!("invalid port `{value}` for {alias}: {err}"))
            })?,
            Err(config::ConfigError::NotFound(_)) => DEFAULT_PORT,
            Err(err) => return Err(err.into()),
        };

        let config = Self::new(hostname, username, password)?
            .with_alias(alias)
            .with_port(port);
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        self.validate()?;
        self.base_url()?;
        Ok(())
    }

    /// Alias the configuration was loaded under.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Appliance hostname.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Login user.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Login password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// HTTPS port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Base URL of the appliance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the hostname does not form a valid URL.
    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&format!("https://{}:{}/", self.hostname, self.port))?)
    }

    /// Overrides the alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Overrides the port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
[ucscentral]
hostname = central.example.com
username = admin
password = secret

[lab]
hostname = 192.0.2.10
username = operator
password = hunter2
port = 8443
";

    #[test]
    fn load_default_port() {
        let config = ConnectionConfig::from_ini_str(SAMPLE, DEFAULT_HOST_ALIAS).unwrap();
        assert_eq!(config.alias(), "ucscentral");
        assert_eq!(config.hostname(), "central.example.com");
        assert_eq!(config.username(), "admin");
        assert_eq!(config.password(), "secret");
        assert_eq!(config.port(), DEFAULT_PORT);
    }

    #[test]
    fn load_explicit_port() {
        let config = ConnectionConfig::from_ini_str(SAMPLE, "lab").unwrap();
        assert_eq!(config.port(), 8443);
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "https://192.0.2.10:8443/"
        );
    }

    #[test]
    fn missing_alias_is_config_error() {
        let err = ConnectionConfig::from_ini_str(SAMPLE, "nope").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn invalid_port_is_config_error() {
        let ini = "[ucscentral]\nhostname = h\nusername = u\npassword = p\nport = https\n";
        let err = ConnectionConfig::from_ini_str(ini, DEFAULT_HOST_ALIAS).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn zero_port_rejected() {
        let ini = "[ucscentral]\nhostname = h\nusername = u\npassword = p\nport = 0\n";
        let err = ConnectionConfig::from_ini_str(ini, DEFAULT_HOST_ALIAS).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn empty_fields_rejected() {
        assert!(ConnectionConfig::new("", "admin", "secret").is_err());
        assert!(ConnectionConfig::new("central", "", "secret").is_err());
    }

    #[test]
    fn builder_overrides() {
        let config = ConnectionConfig::new("central", "admin", "secret")
            .unwrap()
            .with_alias("staging")
            .with_port(9443);
        assert_eq!(config.alias(), "staging");
        assert_eq!(config.port(), 9443);
    }

    #[test]
    fn debug_redacts_password() {
        let config = ConnectionConfig::new("central", "admin", "s3cr3t").unwrap();
        assert!(!format!("{config:?}").contains("s3cr3t"));
    }
}
