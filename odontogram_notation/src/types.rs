// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooth identifiers and rendering quadrants.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix every rendered tooth identifier carries.
pub const CODE_PREFIX: &str = "teeth-";

/// One of the four rendering quadrants of the chart.
///
/// The quadrant number is the first digit of a [`ToothCode`]. Rendering order is
/// upper-right, upper-left, lower-right, lower-left. Note that Palmer notation reads the same
/// digit clinically (3 is lower-left there); see [`notation`](crate::notation).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    /// Quadrant 1.
    UpperRight,
    /// Quadrant 2.
    UpperLeft,
    /// Quadrant 3.
    LowerRight,
    /// Quadrant 4.
    LowerLeft,
}

impl Quadrant {
    /// All quadrants in rendering order.
    pub const ALL: [Self; 4] = [
        Self::UpperRight,
        Self::UpperLeft,
        Self::LowerRight,
        Self::LowerLeft,
    ];

    /// The quadrant digit, `1..=4`.
    pub const fn number(self) -> u8 {
        match self {
            Self::UpperRight => 1,
            Self::UpperLeft => 2,
            Self::LowerRight => 3,
            Self::LowerLeft => 4,
        }
    }

    /// Quadrant for a digit, if it names one.
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::UpperRight),
            2 => Some(Self::UpperLeft),
            3 => Some(Self::LowerRight),
            4 => Some(Self::LowerLeft),
            _ => None,
        }
    }

    /// Human readable label, e.g. `"Upper Right"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpperRight => "Upper Right",
            Self::UpperLeft => "Upper Left",
            Self::LowerRight => "Lower Right",
            Self::LowerLeft => "Lower Left",
        }
    }

    /// Whether this quadrant is in the upper arch.
    pub const fn is_upper(self) -> bool {
        matches!(self, Self::UpperRight | Self::UpperLeft)
    }
}

/// Identifier of a tooth as seen by the host application.
///
/// Well-formed codes look like `"teeth-11"` .. `"teeth-48"`: the [`CODE_PREFIX`], a quadrant digit,
/// and an anatomical position name. Any string is accepted so that foreign input can flow
/// through lookups and degrade to defaults instead of failing.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToothCode(String);

impl ToothCode {
    /// Build the code for `position` (an anatomical name such as `"1"`) in `quadrant`.
    pub fn new(quadrant: Quadrant, position: &str) -> Self {
        Self(format!("{CODE_PREFIX}{}{position}", quadrant.number()))
    }

    /// The full identifier, prefix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric FDI part with the rendering prefix stripped, e.g. `"21"`.
    ///
    /// A code without the prefix is returned as is.
    pub fn numeric(&self) -> &str {
        self.0.strip_prefix(CODE_PREFIX).unwrap_or(&self.0)
    }

    /// The anatomical position name: everything after the quadrant digit.
    pub fn position_name(&self) -> &str {
        let numeric = self.numeric();
        let mut chars = numeric.chars();
        match chars.next() {
            Some(_) => chars.as_str(),
            None => numeric,
        }
    }

    /// The rendering quadrant named by the first digit, if any.
    pub fn quadrant(&self) -> Option<Quadrant> {
        let digit = self.numeric().chars().next()?.to_digit(10)?;
        Quadrant::from_number(u8::try_from(digit).ok()?)
    }

    /// Consume the code and return the owned identifier.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for ToothCode {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for ToothCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for ToothCode {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl AsRef<str> for ToothCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToothCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
