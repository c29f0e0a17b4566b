// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Odontogram: a headless interactive chart of the 32 permanent teeth.
//!
//! ## Overview
//!
//! [`Odontogram`](crate::chart::Odontogram) ties the lower-level crates together:
//!
//! - tooth identity and notation from `odontogram_notation`,
//! - selection and condition groups from `odontogram_selection`,
//! - tooltip placement from `odontogram_placement`.
//!
//! A host builds a chart from a [`ChartConfig`](crate::config::ChartConfig), draws what
//! [`Odontogram::teeth`](crate::chart::Odontogram::teeth) and
//! [`Odontogram::tooltip`](crate::chart::Odontogram::tooltip) describe, and forwards the input
//! events its tooth elements receive.
//!
//! ## Tooltips
//!
//! Placement is two-phase. Entering a tooth returns a
//! [`MeasureTicket`](crate::tooltip::MeasureTicket); once the host's layout has settled it
//! calls [`Odontogram::layout_settled`](crate::chart::Odontogram::layout_settled) with a
//! [`RectProvider`](odontogram_placement::RectProvider). Tickets issued before a later enter
//! or leave are ignored, so a slow measurement never positions the wrong tooltip.
//!
//! ## Example
//!
//! ```
//! use odontogram::{ChartConfig, Odontogram};
//! use odontogram_notation::ToothCode;
//!
//! let mut chart = Odontogram::new(ChartConfig::default().with_max_teeth(5.0));
//! assert_eq!(chart.teeth().len(), 20);
//!
//! chart.click(&ToothCode::from("teeth-11"));
//! assert_eq!(chart.form_field().value, r#"["teeth-11"]"#);
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod hover;
pub mod layout;
pub mod theme;
pub mod tooltip;

pub use chart::{FormField, Odontogram, RenderedQuadrant, RenderedTooth, ToothPaint, TooltipView};
pub use config::{ChartConfig, ColorOverrides, DisplayFlags, ShowHalf, Theme, TooltipConfig};
pub use error::{Error, Result};
pub use tooltip::{MeasureTicket, TooltipContent, TooltipController, TooltipState};

pub use odontogram_notation as notation;
pub use odontogram_placement as placement;
pub use odontogram_selection as selection;
