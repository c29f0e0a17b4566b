// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static catalog of anatomical positions and their clinical types.

use crate::types::{Quadrant, ToothCode};

/// Type reported for a position the catalog does not know.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// One anatomical position within a quadrant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ToothKind {
    /// Position name as it appears after the quadrant digit, `"1"` (midline) .. `"8"`.
    pub name: &'static str,
    /// Clinical type, e.g. `"Canine"`.
    pub tooth_type: &'static str,
}

const KINDS: [ToothKind; 8] = [
    ToothKind {
        name: "1",
        tooth_type: "Central Incisor",
    },
    ToothKind {
        name: "2",
        tooth_type: "Lateral Incisor",
    },
    ToothKind {
        name: "3",
        tooth_type: "Canine",
    },
    ToothKind {
        name: "4",
        tooth_type: "First Premolar",
    },
    ToothKind {
        name: "5",
        tooth_type: "Second Premolar",
    },
    ToothKind {
        name: "6",
        tooth_type: "First Molar",
    },
    ToothKind {
        name: "7",
        tooth_type: "Second Molar",
    },
    ToothKind {
        name: "8",
        tooth_type: "Third Molar",
    },
];

/// The permanent dentition: eight positions in each of four quadrants.
///
/// A zero-sized handle over immutable tables.
#[derive(Copy, Clone, Debug, Default)]
pub struct ToothRegistry;

impl ToothRegistry {
    /// Number of anatomical positions per quadrant.
    pub const SIZE: usize = KINDS.len();

    /// Total number of teeth across all quadrants.
    pub const TOTAL: usize = Self::SIZE * Quadrant::ALL.len();

    /// Positions in rendering order, midline outward.
    pub fn kinds(self) -> &'static [ToothKind] {
        &KINDS
    }

    /// Look up a position by its name.
    pub fn kind(self, name: &str) -> Option<&'static ToothKind> {
        KINDS.iter().find(|k| k.name == name)
    }

    /// Clinical type of `code`, or [`UNKNOWN_TYPE`].
    ///
    /// Only the position part is consulted, so the type does not depend on the quadrant digit.
    pub fn tooth_type(self, code: &ToothCode) -> &'static str {
        self.kind(code.position_name())
            .map_or(UNKNOWN_TYPE, |k| k.tooth_type)
    }

    /// Codes for the first `limit` positions of `quadrant`.
    pub fn codes_in(self, quadrant: Quadrant, limit: usize) -> impl Iterator<Item = ToothCode> {
        KINDS
            .iter()
            .take(limit)
            .map(move |k| ToothCode::new(quadrant, k.name))
    }

    /// All 32 codes, quadrant by quadrant.
    pub fn codes(self) -> impl Iterator<Item = ToothCode> {
        Quadrant::ALL
            .into_iter()
            .flat_map(move |q| self.codes_in(q, Self::SIZE))
    }

    /// Whether `code` names one of the 32 catalog teeth.
    pub fn contains(self, code: &ToothCode) -> bool {
        code.quadrant().is_some() && self.kind(code.position_name()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn catalog_has_thirty_two_unique_codes() {
        let mut codes: Vec<_> = ToothRegistry.codes().collect();
        assert_eq!(codes.len(), ToothRegistry::TOTAL);
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 32);
        assert!(codes.iter().all(|c| ToothRegistry.contains(c)));
    }

    #[test]
    fn tooth_type_ignores_quadrant() {
        assert_eq!(ToothRegistry.tooth_type(&"teeth-11".into()), "Central Incisor");
        assert_eq!(ToothRegistry.tooth_type(&"teeth-33".into()), "Canine");
        assert_eq!(ToothRegistry.tooth_type(&"teeth-48".into()), "Third Molar");
    }

    #[test]
    fn unknown_positions_are_unknown() {
        assert_eq!(ToothRegistry.tooth_type(&"teeth-19".into()), UNKNOWN_TYPE);
        assert_eq!(ToothRegistry.tooth_type(&"".into()), UNKNOWN_TYPE);
        assert!(!ToothRegistry.contains(&"teeth-59".into()));
    }

    #[test]
    fn codes_in_respects_limit() {
        let codes: Vec<_> = ToothRegistry.codes_in(Quadrant::UpperLeft, 3).collect();
        assert_eq!(codes, ["teeth-21", "teeth-22", "teeth-23"].map(ToothCode::from));
        assert_eq!(ToothRegistry.codes_in(Quadrant::UpperLeft, 100).count(), 8);
    }
}
