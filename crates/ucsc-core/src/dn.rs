//! Distinguished names for the UCS Central management tree.
//!
//! A distinguished name (DN) is a `/`-separated path of relative names (RNs), for example
//! `org-root/deviceprofile-default/role-admin`. Each RN is a kind prefix followed by `-` and the
//! object's naming value. Naming values that contain `/` are wrapped in brackets
//! (`org-root/ls-[rack/1]`) so the path still splits into the right segments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::{Error, Result};
use crate::kind::MoKind;
use crate::mo::PropertyMap;

/// RN of the root organization every scope hangs from.
pub const ORG_ROOT: &str = "org-root";

/// Errors that can occur when parsing or extending distinguished names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistinguishedNameError {
    /// The distinguished name was empty.
    #[error("distinguished name cannot be empty")]
    Empty,
    /// A segment of the distinguished name was empty.
    #[error("distinguished name contains an empty segment: {0}")]
    EmptySegment(String),
    /// A bracketed naming value was not closed, or a bracket was closed without being opened.
    #[error("distinguished name has unbalanced brackets: {0}")]
    UnbalancedBracket(String),
    /// A relative name spanned more than one segment.
    #[error("relative name must be a single segment: {0}")]
    InvalidSegment(String),
}

impl From<DistinguishedNameError> for Error {
    fn from(err: DistinguishedNameError) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}

/// Strongly-typed distinguished name.
///
/// Keeps the canonical string alongside the parsed segments so navigation does not need to
/// re-split the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DistinguishedName {
    raw: String,
    segments: Vec<String>,
}

impl DistinguishedName {
    /// Parses a distinguished name from a string.
    ///
    /// # Errors
    ///
    /// Returns [`DistinguishedNameError`] if the input is blank, contains a blank segment, or
    /// has unbalanced brackets.
    pub fn parse(input: impl AsRef<str>) -> std::result::Result<Self, DistinguishedNameError> {
        let raw = input.as_ref();
        if raw.trim().is_empty() {
            return Err(DistinguishedNameError::Empty);
        }

        let segments = split_segments(raw)?;
        Ok(Self {
            raw: segments.join("/"),
            segments,
        })
    }

    /// The `org-root` distinguished name.
    #[must_use]
    pub fn org_root() -> Self {
        Self {
            raw: ORG_ROOT.to_string(),
            segments: vec![ORG_ROOT.to_string()],
        }
    }

    /// Borrows the canonical distinguished name string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the relative names in order, root first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments in the path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The last relative name of the path.
    #[must_use]
    pub fn rn(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Returns the parent distinguished name, or `None` for a single-segment DN.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() < 2 {
            return None;
        }

        let segments = self.segments[..self.segments.len() - 1].to_vec();
        Some(Self {
            raw: segments.join("/"),
            segments,
        })
    }

    /// Creates the distinguished name of a child addressed by `rn`.
    ///
    /// # Errors
    ///
    /// Returns [`DistinguishedNameError`] if `rn` is empty or is not a single segment.
    pub fn child(&self, rn: &str) -> std::result::Result<Self, DistinguishedNameError> {
        let parsed = split_segments(rn)?;
        if parsed.len() != 1 {
            return Err(DistinguishedNameError::InvalidSegment(rn.to_string()));
        }

        let mut segments = self.segments.clone();
        segments.extend(parsed);
        Ok(Self {
            raw: segments.join("/"),
            segments,
        })
    }

    /// Returns true if `self` is a strict ancestor of `other`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &DistinguishedName) -> bool {
        other.segments.len() > self.segments.len()
            && other.segments[..self.segments.len()] == self.segments[..]
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for DistinguishedName {
    type Err = DistinguishedNameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<DistinguishedName> for String {
    fn from(value: DistinguishedName) -> Self {
        value.raw
    }
}

impl TryFrom<String> for DistinguishedName {
    type Error = DistinguishedNameError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for DistinguishedName {
    type Error = DistinguishedNameError;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Computes the distinguished name of an object of `kind` below `parent`.
///
/// The naming properties of `kind` are read from `keys` in declaration order and joined with
/// `-`, exactly as given; properties in `keys` that are not naming properties are ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a naming property is missing or blank, or if its
/// brackets would not balance within the relative name.
pub fn resolve(
    parent: &DistinguishedName,
    kind: &MoKind,
    keys: &PropertyMap,
) -> Result<DistinguishedName> {
    let mut values = Vec::with_capacity(kind.naming_props.len());
    for name in kind.naming_props {
        let value = keys.get(name).ok_or_else(|| {
            Error::InvalidArgument(format!("{} key `{name}` is missing", kind.class_id))
        })?;
        if value.trim().is_empty() {
            return Err(Error::InvalidArgument(format!(
                "{} key `{name}` cannot be empty",
                kind.class_id
            )));
        }
        values.push(value);
    }

    let rn = format_rn(kind.rn_prefix, &values);
    parent.child(&rn).map_err(|err| {
        Error::InvalidArgument(format!(
            "{} key does not form a valid relative name: {err}",
            kind.class_id
        ))
    })
}

/// Formats a relative name from a prefix and naming values.
#[must_use]
pub fn format_rn(prefix: &str, values: &[&str]) -> String {
    let key = values.join("-");
    if key.contains('/') {
        format!("{prefix}-[{key}]")
    } else {
        format!("{prefix}-{key}")
    }
}

fn split_segments(input: &str) -> std::result::Result<Vec<String>, DistinguishedNameError> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in input.chars() {
        match ch {
            '[' => {
                depth += 1;
                current.push(ch);
            }
            ']' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    DistinguishedNameError::UnbalancedBracket(input.to_string())
                })?;
                current.push(ch);
            }
            '/' if depth == 0 => segments.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    if depth != 0 {
        return Err(DistinguishedNameError::UnbalancedBracket(input.to_string()));
    }

    segments.push(current);
    if segments.iter().any(|segment| segment.trim().is_empty()) {
        return Err(DistinguishedNameError::EmptySegment(input.to_string()));
    }
    Ok(segments)
}
