// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Condition groups and the tooth → condition index.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use odontogram_notation::ToothCode;
use serde::{Deserialize, Serialize};

/// A labelled set of teeth drawn with one colour, e.g. "caries" in red.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionGroup {
    /// Legend label.
    pub label: String,
    /// Affected teeth.
    pub teeth: Vec<ToothCode>,
    /// Fill colour, any CSS colour string.
    pub fill_color: String,
    /// Outline colour; the fill colour is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,
}

impl ConditionGroup {
    /// The outline colour, falling back to the fill.
    pub fn outline(&self) -> &str {
        self.outline_color.as_deref().unwrap_or(&self.fill_color)
    }
}

/// Maps each tooth to the condition group that colours it.
///
/// Groups are applied in order and a later group overwrites an earlier one for a shared tooth.
#[derive(Clone, Debug, Default)]
pub struct ConditionIndex {
    groups: Vec<ConditionGroup>,
    by_tooth: BTreeMap<ToothCode, usize>,
}

impl ConditionIndex {
    /// Build the index from `groups` in caller order (last write wins).
    pub fn build(groups: impl IntoIterator<Item = ConditionGroup>) -> Self {
        let groups: Vec<ConditionGroup> = groups.into_iter().collect();
        let mut by_tooth = BTreeMap::new();
        for (i, group) in groups.iter().enumerate() {
            for tooth in &group.teeth {
                if let Some(prev) = by_tooth.insert(tooth.clone(), i) {
                    log::trace!(
                        "{tooth}: condition `{}` overrides `{}`",
                        group.label,
                        groups[prev].label
                    );
                }
            }
        }
        Self { groups, by_tooth }
    }

    /// The group colouring `tooth`, if any.
    pub fn get(&self, tooth: &ToothCode) -> Option<&ConditionGroup> {
        self.by_tooth.get(tooth).map(|&i| &self.groups[i])
    }

    /// All groups in caller order; this is also legend order.
    pub fn groups(&self) -> &[ConditionGroup] {
        &self.groups
    }

    /// Number of teeth with a condition.
    pub fn len(&self) -> usize {
        self.by_tooth.len()
    }

    /// Whether no tooth has a condition.
    pub fn is_empty(&self) -> bool {
        self.by_tooth.is_empty()
    }

    /// Teeth and their groups, ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = (&ToothCode, &ConditionGroup)> + '_ {
        self.by_tooth.iter().map(|(k, &i)| (k, &self.groups[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn group(label: &str, teeth: &[&str], fill: &str) -> ConditionGroup {
        ConditionGroup {
            label: label.into(),
            teeth: teeth.iter().map(|t| ToothCode::from(*t)).collect(),
            fill_color: fill.into(),
            outline_color: None,
        }
    }

    #[test]
    fn later_group_wins_shared_tooth() {
        let idx = ConditionIndex::build(vec![
            group("yellowing", &["teeth-11", "teeth-16"], "#fde047"),
            group("caries", &["teeth-16", "teeth-26"], "#ef4444"),
        ]);
        assert_eq!(idx.get(&"teeth-16".into()).unwrap().fill_color, "#ef4444");
        assert_eq!(idx.get(&"teeth-11".into()).unwrap().label, "yellowing");
        assert_eq!(idx.len(), 3);
    }

    #[test]
    fn reordering_groups_changes_the_winner() {
        let a = group("a", &["teeth-16"], "#aaa");
        let b = group("b", &["teeth-16"], "#bbb");
        let ab = ConditionIndex::build(vec![a.clone(), b.clone()]);
        let ba = ConditionIndex::build(vec![b, a]);
        assert_eq!(ab.get(&"teeth-16".into()).unwrap().label, "b");
        assert_eq!(ba.get(&"teeth-16".into()).unwrap().label, "a");
    }

    #[test]
    fn outline_falls_back_to_fill() {
        let mut g = group("x", &[], "#123");
        assert_eq!(g.outline(), "#123");
        g.outline_color = Some("#456".into());
        assert_eq!(g.outline(), "#456");
    }

    #[test]
    fn deserializes_camel_case() {
        let g: ConditionGroup = serde_json::from_str(
            r##"{"label":"caries","teeth":["teeth-16"],"fillColor":"#ef4444","outlineColor":"#b91c1c"}"##,
        )
        .unwrap();
        assert_eq!(g.outline(), "#b91c1c");
        assert_eq!(g.teeth, vec![ToothCode::from("teeth-16")]);
    }

    #[test]
    fn empty_index() {
        let idx = ConditionIndex::build(Vec::new());
        assert!(idx.is_empty());
        assert!(idx.get(&"teeth-11".into()).is_none());
        assert!(idx.groups().is_empty());
    }
}
