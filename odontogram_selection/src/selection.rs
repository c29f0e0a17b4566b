// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable selection snapshots and their form-field encoding.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use odontogram_notation::{ToothCode, ToothDetail};

/// Error returned by [`Selection::from_form_value`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormValueError {
    /// The value is not a JSON array of strings.
    #[error("form value is not a JSON array of tooth codes: {0}")]
    Malformed(String),
}

/// A set of selected teeth, in the order they were selected.
///
/// Snapshots are values: a later toggle produces a new `Selection` and never mutates one a
/// caller already holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    codes: Vec<ToothCode>,
}

impl Selection {
    /// The empty selection.
    pub const fn new() -> Self {
        Self { codes: Vec::new() }
    }

    /// Number of selected teeth.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &ToothCode) -> bool {
        self.codes.contains(id)
    }

    /// Selected codes in insertion order.
    pub fn codes(&self) -> &[ToothCode] {
        &self.codes
    }

    /// Iterate selected codes in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, ToothCode> {
        self.codes.iter()
    }

    /// Append `id` unless already present. Returns whether it was added.
    pub(crate) fn insert(&mut self, id: ToothCode) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.codes.push(id);
        true
    }

    /// Remove `id`, keeping the order of the rest. Returns whether it was present.
    pub(crate) fn remove(&mut self, id: &ToothCode) -> bool {
        let before = self.codes.len();
        self.codes.retain(|c| c != id);
        self.codes.len() != before
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.codes.truncate(len);
    }

    /// Derived payload for every selected tooth, in selection order.
    pub fn details(&self) -> Vec<ToothDetail> {
        self.codes.iter().map(ToothDetail::of).collect()
    }

    /// The JSON array used as the value of a native form field, e.g. `["teeth-11","teeth-12"]`.
    pub fn to_form_value(&self) -> String {
        // A Vec of strings always serializes.
        serde_json::to_string(&self.codes).unwrap_or_else(|_| String::from("[]"))
    }

    /// Parse a form value produced by [`to_form_value`](Self::to_form_value).
    ///
    /// Duplicates collapse onto their first occurrence.
    pub fn from_form_value(value: &str) -> Result<Self, FormValueError> {
        let codes: Vec<ToothCode> =
            serde_json::from_str(value).map_err(|e| FormValueError::Malformed(e.to_string()))?;
        Ok(codes.into_iter().collect())
    }
}

impl FromIterator<ToothCode> for Selection {
    fn from_iter<I: IntoIterator<Item = ToothCode>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a ToothCode;
    type IntoIter = core::slice::Iter<'a, ToothCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(ids: &[&str]) -> Selection {
        ids.iter().map(|s| ToothCode::from(*s)).collect()
    }

    #[test]
    fn collect_keeps_first_occurrence_order() {
        let s = sel(&["teeth-12", "teeth-11", "teeth-12"]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.codes()[0].as_str(), "teeth-12");
        assert_eq!(s.codes()[1].as_str(), "teeth-11");
    }

    #[test]
    fn form_value_is_insertion_ordered_json() {
        let s = sel(&["teeth-21", "teeth-11"]);
        assert_eq!(s.to_form_value(), r#"["teeth-21","teeth-11"]"#);
        assert_eq!(Selection::new().to_form_value(), "[]");
    }

    #[test]
    fn form_value_round_trips() {
        let s = sel(&["teeth-48", "teeth-16", "teeth-31"]);
        assert_eq!(Selection::from_form_value(&s.to_form_value()), Ok(s));
    }

    #[test]
    fn malformed_form_value_is_an_error() {
        assert!(matches!(
            Selection::from_form_value("{\"a\":1}"),
            Err(FormValueError::Malformed(_))
        ));
        assert!(Selection::from_form_value("[1, 2]").is_err());
    }

    #[test]
    fn remove_preserves_order() {
        let mut s = sel(&["teeth-11", "teeth-12", "teeth-13"]);
        assert!(s.remove(&"teeth-12".into()));
        assert!(!s.remove(&"teeth-12".into()));
        assert_eq!(s, sel(&["teeth-11", "teeth-13"]));
    }

    #[test]
    fn details_follow_selection_order() {
        let s = sel(&["teeth-48", "teeth-11"]);
        let d = s.details();
        assert_eq!(d.len(), 2);
        assert_eq!(d[0].notations.universal, "32");
        assert_eq!(d[1].tooth_type, "Central Incisor");
    }
}
