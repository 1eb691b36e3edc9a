//! Parsing of `source@version` package references into dependency
//! descriptors, and rendering of resolved descriptors as image tags.

use tracing::debug;
use ucp_models::{Dependency, PackageType};

/// Constraint used when a reference carries no version. It passes semver
/// constraint checks and resolves to the latest release.
pub const DEFAULT_VERSION: &str = ">=v0.0.0";

const VERSION_DELIMITER: char = '@';

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DepError {
    #[error("Invalid package reference: {0}")]
    InvalidReference(String),
}

/// Builds a [`Dependency`] from a reference of the form `source@version`.
///
/// `@version` may be left out to mean "latest". The package type is
/// `Provider` unless `type_hint` names a configuration, compared
/// case-insensitively; any other hint falls back to `Provider`.
pub fn new(reference: &str, type_hint: &str) -> Result<Dependency, DepError> {
    let mut parts = reference.split(VERSION_DELIMITER);
    let source = parts.next().unwrap_or_default();
    let version = parts.next();

    if parts.next().is_some() {
        return Err(DepError::InvalidReference(format!(
            "{reference}: expected at most one '{VERSION_DELIMITER}'"
        )));
    }
    if source.is_empty() {
        return Err(DepError::InvalidReference(format!(
            "{reference}: missing package source"
        )));
    }

    let constraints = match version {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_VERSION,
    };

    let package_type =
        if title_case(type_hint) == PackageType::Configuration.as_str() {
            PackageType::Configuration
        } else {
            PackageType::Provider
        };

    debug!(source, constraints, %package_type, "parsed package reference");

    Ok(Dependency {
        package: source.to_string(),
        package_type,
        constraints: constraints.to_string(),
    })
}

/// Full image tag `source:version` of a dependency.
///
/// Only meaningful once `constraints` has been resolved to an exact version:
/// a semver range is not a valid tag and lookups against it will fail.
pub fn img_tag(dep: &Dependency) -> String {
    format!("{}:{}", dep.identifier(), dep.constraints)
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars().flat_map(char::to_lowercase) {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}
