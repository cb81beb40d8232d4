//! Drag targets.
//!
//! A target is a data type, not a location: it names a format the source can
//! produce or the destination can consume. A drag only connects a source and
//! a destination that share at least one target.
use std::borrow::Cow;

/// The target names used for plain text, in order of preference.
pub const TEXT_TARGETS: &[&str] = &[
    "UTF8_STRING",
    "TEXT",
    "STRING",
    "text/plain;charset=utf-8",
    "text/plain",
];

/// Returns `true` if the given target name carries plain text.
pub fn is_text_target(target: &str) -> bool {
    TEXT_TARGETS.contains(&target)
}

/// A single entry of a [`TargetList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEntry {
    /// The name of the target (e.g. `"UTF8_STRING"`, `"text/plain"`).
    pub target: Cow<'static, str>,
    /// An application-chosen number handed back to the data handlers.
    pub info: u32,
}

impl TargetEntry {
    /// Creates a new [`TargetEntry`].
    pub fn new(target: impl Into<Cow<'static, str>>, info: u32) -> Self {
        Self {
            target: target.into(),
            info,
        }
    }
}

/// An ordered list of targets offered by a source or accepted by a
/// destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetList {
    entries: Vec<TargetEntry>,
}

impl TargetList {
    /// Creates an empty [`TargetList`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a target, unless one with the same name is already present.
    pub fn add(&mut self, target: impl Into<Cow<'static, str>>, info: u32) {
        let target = target.into();

        if !self.contains(&target) {
            self.entries.push(TargetEntry::new(target, info));
        }
    }

    /// Appends all the plain text targets with the given `info`.
    pub fn add_text_targets(&mut self, info: u32) {
        for target in TEXT_TARGETS {
            self.add(*target, info);
        }
    }

    /// Builder flavor of [`add_text_targets`](Self::add_text_targets).
    #[must_use]
    pub fn with_text_targets(mut self, info: u32) -> Self {
        self.add_text_targets(info);
        self
    }

    /// Returns `true` if a target with the given name is present.
    pub fn contains(&self, target: &str) -> bool {
        self.find(target).is_some()
    }

    /// Returns the entry with the given name, if any.
    pub fn find(&self, target: &str) -> Option<&TargetEntry> {
        self.entries.iter().find(|entry| entry.target == target)
    }

    /// Returns the first of our targets that `other` also lists.
    pub fn first_shared(&self, other: &TargetList) -> Option<&TargetEntry> {
        self.entries
            .iter()
            .find(|entry| other.contains(&entry.target))
    }

    /// Returns `true` if both lists have a target in common.
    pub fn intersects(&self, other: &TargetList) -> bool {
        self.first_shared(other).is_some()
    }

    /// Returns `true` if the list has no targets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of targets in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &TargetEntry> {
        self.entries.iter()
    }

    /// Returns the target names in order.
    pub fn names(&self) -> Vec<Cow<'static, str>> {
        self.entries.iter().map(|entry| entry.target.clone()).collect()
    }
}

impl FromIterator<TargetEntry> for TargetList {
    fn from_iter<I: IntoIterator<Item = TargetEntry>>(iter: I) -> Self {
        let mut list = TargetList::new();

        for entry in iter {
            list.add(entry.target, entry.info);
        }

        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_targets_are_not_duplicated() {
        let mut list = TargetList::new();
        list.add_text_targets(0);
        list.add_text_targets(7);

        assert_eq!(list.len(), TEXT_TARGETS.len());
        assert!(list.iter().all(|entry| entry.info == 0));
    }

    #[test]
    fn first_shared_follows_our_order() {
        let source = TargetList::new().with_text_targets(1);
        let dest: TargetList = [
            TargetEntry::new("text/plain", 2),
            TargetEntry::new("STRING", 3),
        ]
        .into_iter()
        .collect();

        let shared = source.first_shared(&dest).map(|entry| &*entry.target);
        assert_eq!(shared, Some("STRING"));
        assert_eq!(dest.find("STRING").map(|entry| entry.info), Some(3));
    }

    #[test]
    fn empty_lists_never_intersect() {
        let text = TargetList::new().with_text_targets(0);

        assert!(!TargetList::new().intersects(&text));
        assert!(!text.intersects(&TargetList::new()));

        let uris: TargetList = [TargetEntry::new("text/uri-list", 0)].into_iter().collect();
        assert!(!text.intersects(&uris));
    }

    #[test]
    fn text_target_names() {
        assert!(is_text_target("UTF8_STRING"));
        assert!(is_text_target("text/plain;charset=utf-8"));
        assert!(!is_text_target("image/png"));
    }
}
