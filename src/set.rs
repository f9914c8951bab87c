//! Unique collections of tags with set algebra
//!
//! A [`Set`] stores tags keyed by their canonical string, so uniqueness and
//! membership never depend on anything but the `<kind>-<id>` form. Storage
//! is unordered; [`Set::sorted_values`] is the one place enumeration order
//! is observable and it is always ascending by canonical string.

use crate::error::Result;
use crate::tag::Tag;
use std::collections::HashMap;

/// Panic message for mutation of a never-constructed set
const UNINITIALISED: &str = "uninitialised set";

/// A mutable set of unique tags.
///
/// Every constructor returns a *live* set. `Set::default()` is the
/// *uninitialized* value: it has no backing storage, and [`Set::add`] and
/// [`Set::remove`] on it panic with `"uninitialised set"` rather than
/// silently allocating or dropping the write. That panic signals a
/// programming mistake, not bad input; there is no promotion from
/// uninitialized to live. Read-only operations treat an uninitialized set
/// as empty.
#[derive(Debug, Clone, Default)]
pub struct Set {
    items: Option<HashMap<String, Tag>>,
}

impl Set {
    /// Build a live set from the given tags, de-duplicated by canonical
    /// string. An empty iterator yields an empty, still-live set.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagset::{Set, Tag};
    ///
    /// let foo: Tag = "unit-wordpress-0".parse().unwrap();
    /// let set = Set::new([foo.clone()]);
    /// assert!(set.contains(&foo));
    /// ```
    pub fn new<I>(tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        let items = tags.into_iter().map(|tag| (tag.to_string(), tag)).collect();
        Self { items: Some(items) }
    }

    /// Build a live set by parsing each string with the standard catalogue.
    ///
    /// Fails on the first invalid string with its
    /// [`InvalidTag`](crate::TagSetError::InvalidTag) error; no set is
    /// produced on failure.
    pub fn from_strings<I, S>(strings: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = HashMap::new();
        for s in strings {
            let tag: Tag = s.as_ref().parse()?;
            items.insert(tag.to_string(), tag);
        }
        Ok(Self { items: Some(items) })
    }

    /// Number of unique tags in the set
    pub fn size(&self) -> usize {
        self.items.as_ref().map_or(0, HashMap::len)
    }

    /// Whether the set has no elements
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Membership test by canonical string
    pub fn contains(&self, tag: &Tag) -> bool {
        self.contains_key(tag.to_string().as_str())
    }

    /// All tags, ascending by canonical string (lexicographic byte order).
    /// Stable across calls and identical for equal sets.
    pub fn sorted_values(&self) -> Vec<Tag> {
        let mut pairs: Vec<(&String, &Tag)> = self.iter_items().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs.into_iter().map(|(_, tag)| tag.clone()).collect()
    }

    /// Insert a tag; a no-op if it is already present.
    ///
    /// # Panics
    ///
    /// Panics with `"uninitialised set"` if this set was never constructed.
    pub fn add(&mut self, tag: Tag) {
        self.items
            .as_mut()
            .expect(UNINITIALISED)
            .insert(tag.to_string(), tag);
    }

    /// Remove a tag; a no-op if it is absent.
    ///
    /// # Panics
    ///
    /// Panics with `"uninitialised set"` if this set was never constructed.
    pub fn remove(&mut self, tag: &Tag) {
        self.items
            .as_mut()
            .expect(UNINITIALISED)
            .remove(tag.to_string().as_str());
    }

    /// Tags present in either operand. Commutative. The result is a fresh
    /// live set, independent of both operands.
    pub fn union(&self, other: &Set) -> Set {
        let items = self
            .iter_items()
            .chain(other.iter_items())
            .map(|(key, tag)| (key.clone(), tag.clone()))
            .collect();
        Set { items: Some(items) }
    }

    /// Tags present in both operands. Commutative.
    pub fn intersection(&self, other: &Set) -> Set {
        let items = self
            .iter_items()
            .filter(|(key, _)| other.contains_key(key.as_str()))
            .map(|(key, tag)| (key.clone(), tag.clone()))
            .collect();
        Set { items: Some(items) }
    }

    /// Tags present in `self` but not in `other`. Not commutative.
    pub fn difference(&self, other: &Set) -> Set {
        let items = self
            .iter_items()
            .filter(|(key, _)| !other.contains_key(key.as_str()))
            .map(|(key, tag)| (key.clone(), tag.clone()))
            .collect();
        Set { items: Some(items) }
    }

    fn contains_key(&self, key: &str) -> bool {
        self.items.as_ref().map_or(false, |map| map.contains_key(key))
    }

    fn iter_items(&self) -> impl Iterator<Item = (&String, &Tag)> {
        self.items.iter().flat_map(HashMap::iter)
    }
}

/// Sets are equal iff their element sets are equal, regardless of internal
/// storage; an uninitialized set compares equal to an empty live one.
impl PartialEq for Set {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter_items().all(|(key, _)| other.contains_key(key))
    }
}

impl Eq for Set {}
