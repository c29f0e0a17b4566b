// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-tooth payload reported to the host.

use alloc::string::{String, ToString};

use serde::{Deserialize, Serialize};

use crate::notation::{ToothNotations, notations};
use crate::registry::ToothRegistry;
use crate::types::ToothCode;

/// Everything a caller learns about a tooth.
///
/// A pure function of the [`ToothCode`]. Details are rebuilt on every query rather than cached
/// next to the selection, so they cannot drift from the code they describe.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToothDetail {
    /// The tooth's identifier.
    pub id: ToothCode,
    /// The identifier spelled in every notation.
    pub notations: ToothNotations,
    /// Clinical type, or `"Unknown"`.
    #[serde(rename = "type")]
    pub tooth_type: String,
}

impl ToothDetail {
    /// Derive the detail for `id`.
    pub fn of(id: &ToothCode) -> Self {
        Self {
            id: id.clone(),
            notations: notations(id),
            tooth_type: ToothRegistry.tooth_type(id).to_string(),
        }
    }
}

impl From<&ToothCode> for ToothDetail {
    fn from(id: &ToothCode) -> Self {
        Self::of(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_for_central_incisor() {
        let d = ToothDetail::of(&ToothCode::from("teeth-11"));
        assert_eq!(d.id.as_str(), "teeth-11");
        assert_eq!(d.notations.fdi, "11");
        assert_eq!(d.notations.universal, "8");
        assert_eq!(d.notations.palmer, "1UR");
        assert_eq!(d.tooth_type, "Central Incisor");
    }

    #[test]
    fn detail_serializes_with_type_key() {
        let d = ToothDetail::of(&ToothCode::from("teeth-48"));
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "teeth-48",
                "notations": { "fdi": "48", "universal": "32", "palmer": "8LR" },
                "type": "Third Molar",
            })
        );
    }

    #[test]
    fn detail_of_unknown_code_degrades() {
        let d = ToothDetail::of(&ToothCode::from("teeth-9"));
        assert_eq!(d.tooth_type, "Unknown");
        assert_eq!(d.notations.palmer, "9");
        assert_eq!(d.notations.universal, "9");
    }
}
