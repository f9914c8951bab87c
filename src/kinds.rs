//! Kind catalogue: which tag kinds exist and what their ids look like
//!
//! The parsing core only talks to a catalogue through the [`Catalogue`]
//! trait, so callers can plug in their own kind inventory. The
//! [`StandardCatalogue`] shipped here covers the common entity kinds.

use regex::Regex;
use std::sync::OnceLock;

/// Kind prefix for machines (e.g. `machine-0`, `machine-0/lxd/1`)
pub const MACHINE: &str = "machine";

/// Kind prefix for units of an application (e.g. `unit-wordpress-0`)
pub const UNIT: &str = "unit";

/// Kind prefix for applications (e.g. `application-rabbitmq-server`)
pub const APPLICATION: &str = "application";

/// Machine ids are a number, optionally followed by container segments
fn machine_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[0-9]+(?:/[a-z]+/[0-9]+)*$").unwrap())
}

/// Application names: lowercase alphanumeric words joined by dashes, each
/// word containing at least one letter (so a name is never all digits)
fn application_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9]*(?:-[a-z0-9]*[a-z][a-z0-9]*)*$").unwrap()
    })
}

/// Unit ids are an application name plus a numeric suffix
fn unit_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9]*(?:-[a-z0-9]*[a-z][a-z0-9]*)*-[0-9]+$").unwrap()
    })
}

/// A catalogue of recognized tag kinds and their id validation rules.
///
/// [`Tag::parse`](crate::Tag::parse) consults a catalogue twice: once to
/// decide whether a kind prefix is recognized at all, and once to check the
/// id shape for that kind.
pub trait Catalogue {
    /// Whether `kind` is a recognized kind prefix
    fn recognizes(&self, kind: &str) -> bool;

    /// Whether `id` is a well-formed id for `kind`.
    ///
    /// Unrecognized kinds validate nothing.
    fn validate(&self, kind: &str, id: &str) -> bool;
}

/// The catalogue of kinds shipped with this crate: machines, units, and
/// applications. The kind list is fixed at build time; systems with their
/// own entity kinds implement [`Catalogue`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCatalogue;

impl Catalogue for StandardCatalogue {
    fn recognizes(&self, kind: &str) -> bool {
        matches!(kind, MACHINE | UNIT | APPLICATION)
    }

    fn validate(&self, kind: &str, id: &str) -> bool {
        match kind {
            MACHINE => machine_regex().is_match(id),
            UNIT => unit_regex().is_match(id),
            APPLICATION => application_regex().is_match(id),
            _ => false,
        }
    }
}
