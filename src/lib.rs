//! tagset - typed entity tags and tag sets
//!
//! A library for naming entities in a distributed system. A [`Tag`] is a
//! validated "kind plus id" identifier with a canonical `<kind>-<id>` string
//! form; a [`Set`] is a unique collection of tags supporting membership
//! queries and set algebra with deterministic enumeration order.

pub mod error;
pub mod kinds;
pub mod set;
pub mod tag;

pub use error::TagSetError;
pub use kinds::{Catalogue, StandardCatalogue};
pub use set::Set;
pub use tag::Tag;
