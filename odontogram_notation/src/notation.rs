// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between FDI, Universal, and Palmer notation.
//!
//! FDI is canonical: the numeric part of a [`ToothCode`] *is* the FDI number. The other two
//! notations are total functions of it. A code the tables do not cover converts to its own
//! numeric string rather than an error.
//!
//! ```
//! use odontogram_notation::notation::{Notation, convert};
//! use odontogram_notation::types::ToothCode;
//!
//! let code = ToothCode::from("teeth-11");
//! assert_eq!(convert(&code, Notation::Fdi), "11");
//! assert_eq!(convert(&code, Notation::Universal), "8");
//! assert_eq!(convert(&code, Notation::Palmer), "1UR");
//!
//! // Unmapped codes are echoed.
//! assert_eq!(convert(&ToothCode::from("teeth-55"), Notation::Universal), "55");
//! ```

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::ToothCode;

/// A dental numbering system.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notation {
    /// Two-digit quadrant + position numbering (ISO 3950).
    #[default]
    #[serde(rename = "FDI", alias = "fdi")]
    Fdi,
    /// Sequential 1-32 numbering.
    #[serde(alias = "universal")]
    Universal,
    /// Position number + quadrant symbol.
    #[serde(alias = "palmer")]
    Palmer,
}

impl Notation {
    /// Canonical display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fdi => "FDI",
            Self::Universal => "Universal",
            Self::Palmer => "Palmer",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized notation name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown notation `{0}` (expected FDI, Universal, or Palmer)")]
pub struct UnknownNotation(pub String);

impl FromStr for Notation {
    type Err = UnknownNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FDI" | "fdi" => Ok(Self::Fdi),
            "Universal" | "universal" => Ok(Self::Universal),
            "Palmer" | "palmer" => Ok(Self::Palmer),
            other => Err(UnknownNotation(other.to_string())),
        }
    }
}

// Quadrant 1 and 3 count down toward the midline, 2 and 4 count up away from it.
const FDI_TO_UNIVERSAL: [(&str, u8); 32] = [
    ("11", 8),
    ("12", 7),
    ("13", 6),
    ("14", 5),
    ("15", 4),
    ("16", 3),
    ("17", 2),
    ("18", 1),
    ("21", 9),
    ("22", 10),
    ("23", 11),
    ("24", 12),
    ("25", 13),
    ("26", 14),
    ("27", 15),
    ("28", 16),
    ("31", 24),
    ("32", 23),
    ("33", 22),
    ("34", 21),
    ("35", 20),
    ("36", 19),
    ("37", 18),
    ("38", 17),
    ("41", 25),
    ("42", 26),
    ("43", 27),
    ("44", 28),
    ("45", 29),
    ("46", 30),
    ("47", 31),
    ("48", 32),
];

/// Universal number for an FDI number, if the table covers it.
pub fn universal_number(fdi: &str) -> Option<u8> {
    FDI_TO_UNIVERSAL
        .iter()
        .find(|(k, _)| *k == fdi)
        .map(|&(_, u)| u)
}

/// Palmer quadrant symbol for a clinical FDI quadrant digit.
///
/// Clinically, quadrant 3 is lower-left and 4 is lower-right.
pub const fn palmer_symbol(quadrant: char) -> Option<&'static str> {
    match quadrant {
        '1' => Some("UR"),
        '2' => Some("UL"),
        '3' => Some("LL"),
        '4' => Some("LR"),
        _ => None,
    }
}

fn to_universal(fdi: &str) -> String {
    match universal_number(fdi) {
        Some(n) => n.to_string(),
        None => fdi.to_string(),
    }
}

fn to_palmer(fdi: &str) -> String {
    let mut chars = fdi.chars();
    let (Some(quadrant), Some(tooth)) = (chars.next(), chars.next()) else {
        return fdi.to_string();
    };
    let mut out = String::with_capacity(3);
    out.push(tooth);
    out.push_str(palmer_symbol(quadrant).unwrap_or(""));
    out
}

/// Spell `code` in `target` notation.
pub fn convert(code: &ToothCode, target: Notation) -> String {
    let fdi = code.numeric();
    match target {
        Notation::Fdi => fdi.to_string(),
        Notation::Universal => to_universal(fdi),
        Notation::Palmer => to_palmer(fdi),
    }
}

/// A tooth spelled in every supported notation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToothNotations {
    /// FDI number, e.g. `"48"`.
    pub fdi: String,
    /// Universal number, e.g. `"32"`.
    pub universal: String,
    /// Palmer spelling, e.g. `"8LR"`.
    pub palmer: String,
}

impl ToothNotations {
    /// The spelling for one notation.
    pub fn get(&self, notation: Notation) -> &str {
        match notation {
            Notation::Fdi => &self.fdi,
            Notation::Universal => &self.universal,
            Notation::Palmer => &self.palmer,
        }
    }
}

/// All three spellings of `code`; each field equals [`convert`] for that notation.
pub fn notations(code: &ToothCode) -> ToothNotations {
    ToothNotations {
        fdi: convert(code, Notation::Fdi),
        universal: convert(code, Notation::Universal),
        palmer: convert(code, Notation::Palmer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ToothRegistry;

    fn code(s: &str) -> ToothCode {
        ToothCode::from(s)
    }

    #[test]
    fn known_conversions() {
        let cases = [
            ("teeth-21", "9", "1UL"),
            ("teeth-48", "32", "8LR"),
            ("teeth-11", "8", "1UR"),
            ("teeth-18", "1", "8UR"),
            ("teeth-38", "17", "8LL"),
            ("teeth-31", "24", "1LL"),
            ("teeth-41", "25", "1LR"),
        ];
        for (id, universal, palmer) in cases {
            assert_eq!(convert(&code(id), Notation::Universal), universal, "{id}");
            assert_eq!(convert(&code(id), Notation::Palmer), palmer, "{id}");
        }
    }

    #[test]
    fn universal_is_a_bijection_over_the_catalog() {
        let mut seen = [false; 33];
        for c in ToothRegistry.codes() {
            let n = universal_number(c.numeric()).expect("catalog tooth has a Universal number");
            assert!(!seen[n as usize], "duplicate Universal number {n}");
            seen[n as usize] = true;
        }
        assert!(seen[1..].iter().all(|s| *s));
    }

    #[test]
    fn unmapped_codes_echo() {
        assert_eq!(convert(&code("teeth-55"), Notation::Universal), "55");
        assert_eq!(convert(&code("teeth-99"), Notation::Fdi), "99");
        assert_eq!(convert(&code("abc"), Notation::Universal), "abc");
    }

    #[test]
    fn palmer_short_codes_echo() {
        assert_eq!(convert(&code("teeth-3"), Notation::Palmer), "3");
        assert_eq!(convert(&code("teeth-"), Notation::Palmer), "");
    }

    #[test]
    fn palmer_unknown_quadrant_drops_symbol() {
        assert_eq!(convert(&code("teeth-52"), Notation::Palmer), "2");
    }

    #[test]
    fn notations_match_individual_conversions() {
        for c in ToothRegistry.codes() {
            let all = notations(&c);
            for n in [Notation::Fdi, Notation::Universal, Notation::Palmer] {
                assert_eq!(all.get(n), convert(&c, n));
            }
        }
        assert_eq!(
            notations(&code("teeth-48")),
            ToothNotations {
                fdi: "48".into(),
                universal: "32".into(),
                palmer: "8LR".into(),
            }
        );
    }

    #[test]
    fn serde_accepts_the_same_names_as_from_str() {
        for name in ["FDI", "fdi", "Universal", "universal", "Palmer", "palmer"] {
            let parsed: Notation = name.parse().unwrap();
            let json = alloc::format!("\"{name}\"");
            let decoded: Notation = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, parsed, "{name}");
        }
        assert!(serde_json::from_str::<Notation>("\"PALMER\"").is_err());
        assert_eq!(serde_json::to_string(&Notation::Fdi).unwrap(), "\"FDI\"");
    }

    #[test]
    fn parse_notation_names() {
        assert_eq!("FDI".parse(), Ok(Notation::Fdi));
        assert_eq!("Palmer".parse(), Ok(Notation::Palmer));
        assert_eq!(
            "Haderup".parse::<Notation>(),
            Err(UnknownNotation("Haderup".into()))
        );
    }
}
