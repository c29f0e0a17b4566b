// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The configuration surface a host passes to a chart.
//!
//! Build a [`ChartConfig`] in code with the `with_*` methods, or load one from the JSON a web
//! host would pass as props (camelCase keys). Every field has a default, and values that make
//! no sense are absorbed rather than rejected: an unknown placement becomes `right`, a
//! non-numeric `maxTeeth` shows every tooth.
//!
//! ```
//! use odontogram::config::{ChartConfig, ShowHalf};
//! use odontogram_placement::Placement;
//!
//! let config = ChartConfig::from_json(
//!     r#"{ "showHalf": "upper", "maxTeeth": "lots", "tooltip": { "placement": "sideways" } }"#,
//! )
//! .unwrap();
//! assert_eq!(config.show_half, ShowHalf::Upper);
//! assert_eq!(config.max_teeth, None);
//! assert_eq!(config.tooltip.placement, Placement::Right);
//! ```

use odontogram_notation::{Notation, ToothCode};
use odontogram_placement::Placement;
use odontogram_selection::{ConditionGroup, SelectionMode};
use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// Margin used when none (or zero) is configured.
pub const DEFAULT_MARGIN: f64 = 10.0;

/// Name of the hidden form field when none is configured.
pub const DEFAULT_FIELD_NAME: &str = "teeth";

/// Colour scheme.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark strokes on a light background.
    #[default]
    Light,
    /// Light strokes on a dark background.
    Dark,
}

/// Which arches are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowHalf {
    /// Quadrants 1 and 2.
    Upper,
    /// Quadrants 3 and 4.
    Lower,
    /// All four quadrants.
    #[default]
    Full,
}

/// Per-variable colour overrides layered on top of the theme palette.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorOverrides {
    /// Overrides `--dark-blue`.
    pub dark_blue: Option<String>,
    /// Overrides `--base-blue`.
    pub base_blue: Option<String>,
    /// Overrides `--light-blue`.
    pub light_blue: Option<String>,
}

/// Tooltip placement options.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Requested placement relative to the hovered tooth.
    #[serde(deserialize_with = "placement_or_default")]
    pub placement: Placement,
    /// Distance between tooth and tooltip.
    pub margin: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            margin: DEFAULT_MARGIN,
        }
    }
}

impl TooltipConfig {
    /// The margin to use: zero and NaN fall back to [`DEFAULT_MARGIN`].
    pub fn effective_margin(&self) -> f64 {
        if self.margin == 0.0 || self.margin.is_nan() {
            DEFAULT_MARGIN
        } else {
            self.margin
        }
    }
}

bitflags::bitflags! {
    /// Boolean switches controlling what the chart shows and accepts.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DisplayFlags: u8 {
        /// Show a tooltip on hover and focus.
        const SHOW_TOOLTIP  = 0b0000_0001;
        /// Show the condition legend.
        const SHOW_LABELS   = 0b0000_0010;
        /// Ignore all toggles.
        const READ_ONLY     = 0b0000_0100;
        /// Allow at most one selected tooth.
        const SINGLE_SELECT = 0b0000_1000;
    }
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self::SHOW_TOOLTIP
    }
}

/// Everything a host can configure on a chart.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Name of the hidden form field carrying the selection.
    pub name: String,
    /// Teeth selected on creation.
    pub default_selected: Vec<ToothCode>,
    /// Colour scheme.
    pub theme: Theme,
    /// Colour overrides applied on top of the theme.
    pub colors: ColorOverrides,
    /// Notation used for tooth titles.
    pub notation: Notation,
    /// Tooltip placement.
    pub tooltip: TooltipConfig,
    /// Show a tooltip on hover and focus.
    pub show_tooltip: bool,
    /// Show the condition legend.
    pub show_labels: bool,
    /// Which arches are drawn.
    pub show_half: ShowHalf,
    /// How many teeth per quadrant to draw, midline outward. `None` draws all.
    #[serde(deserialize_with = "lenient_number")]
    pub max_teeth: Option<f64>,
    /// Ignore all toggles.
    pub read_only: bool,
    /// Allow at most one selected tooth.
    pub single_select: bool,
    /// Condition groups; later groups win for shared teeth.
    pub teeth_conditions: Vec<ConditionGroup>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_FIELD_NAME.into(),
            default_selected: Vec::new(),
            theme: Theme::default(),
            colors: ColorOverrides::default(),
            notation: Notation::default(),
            tooltip: TooltipConfig::default(),
            show_tooltip: true,
            show_labels: false,
            show_half: ShowHalf::default(),
            max_teeth: None,
            read_only: false,
            single_select: false,
            teeth_conditions: Vec::new(),
        }
    }
}

impl ChartConfig {
    /// Parse a JSON configuration document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Boolean switches as flags.
    pub fn flags(&self) -> DisplayFlags {
        let mut flags = DisplayFlags::empty();
        flags.set(DisplayFlags::SHOW_TOOLTIP, self.show_tooltip);
        flags.set(DisplayFlags::SHOW_LABELS, self.show_labels);
        flags.set(DisplayFlags::READ_ONLY, self.read_only);
        flags.set(DisplayFlags::SINGLE_SELECT, self.single_select);
        flags
    }

    /// Selection mode implied by `single_select`.
    pub fn selection_mode(&self) -> SelectionMode {
        if self.single_select {
            SelectionMode::Single
        } else {
            SelectionMode::Multi
        }
    }

    /// Set the teeth selected on creation.
    pub fn with_default_selected<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ToothCode>,
    {
        self.default_selected = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set colour overrides.
    pub fn with_colors(mut self, colors: ColorOverrides) -> Self {
        self.colors = colors;
        self
    }

    /// Set the title notation.
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Set tooltip placement and margin.
    pub fn with_tooltip(mut self, placement: Placement, margin: f64) -> Self {
        self.tooltip = TooltipConfig { placement, margin };
        self
    }

    /// Show or hide the tooltip.
    pub fn with_show_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }

    /// Show or hide the condition legend.
    pub fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Choose which arches are drawn.
    pub fn with_show_half(mut self, half: ShowHalf) -> Self {
        self.show_half = half;
        self
    }

    /// Limit teeth drawn per quadrant. Out of range values are clamped when the chart is built.
    pub fn with_max_teeth(mut self, max: f64) -> Self {
        self.max_teeth = Some(max);
        self
    }

    /// Make the chart read-only.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Allow at most one selected tooth.
    pub fn with_single_select(mut self, single: bool) -> Self {
        self.single_select = single;
        self
    }

    /// Set the condition groups.
    pub fn with_conditions(mut self, groups: Vec<ConditionGroup>) -> Self {
        self.teeth_conditions = groups;
        self
    }

    /// Set the hidden form field name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

fn placement_or_default<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Placement, D::Error> {
    let name = Option::<String>::deserialize(d)?;
    Ok(name.map_or_else(Placement::default, |n| Placement::parse_or_default(&n)))
}

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<f64>, D::Error> {
    let value = serde_json::Value::deserialize(d)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::Null => None,
        other => {
            log::warn!("ignoring non-numeric maxTeeth {other}");
            None
        }
    })
}
