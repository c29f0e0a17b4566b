// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Odontogram Placement: anchor-relative tooltip positioning.
//!
//! ## Overview
//!
//! Given an anchor rectangle, a requested [`Placement`], a margin, and the container and
//! viewport bounds, [`PlacementEngine::place`] returns the tooltip's top-left corner and the
//! placement it settled on. It is a pure function: no state survives a call.
//!
//! - Twelve placements: `top`, `bottom`, `left`, `right`, each with `-start` / `-end` variants.
//!   Unknown names parse to `right` via [`Placement::parse_or_default`].
//! - Vertical flip: a tooltip whose anchor point lies above the container, or whose body would
//!   cross the viewport's top edge, moves below the anchor. Nothing else flips. Left/right overflow and bottom overflow are clamped.
//! - Clamp: the result always lies inside the viewport inset by [`VIEWPORT_PADDING`], as long as
//!   the tooltip fits at all.
//!
//! ## Measurement
//!
//! Anchor and tooltip geometry exist only after layout. Hosts implement
//! [`RectProvider`] and call the engine again after every layout-affecting change
//! (open, content change, resize).
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use odontogram_placement::{Measured, Placement, PlacementEngine, Side};
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let m = Measured {
//!     anchor: Rect::new(100.0, 10.0, 140.0, 50.0),
//!     tooltip: Size::new(120.0, 48.0),
//!     container: viewport,
//!     viewport,
//! };
//!
//! // No room above: the tooltip flips below the anchor.
//! let placed = PlacementEngine::new().place(&m, Placement::Top, 10.0);
//! assert_eq!(placed.side, Side::Below);
//! assert_eq!(placed.placement, Placement::Bottom);
//! assert_eq!(placed.origin.x, 60.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod engine;
pub mod provider;
pub mod types;

pub use engine::PlacementEngine;
pub use provider::RectProvider;
pub use types::{ARROW_OFFSET, Measured, Placed, Placement, Side, UnknownPlacement, VIEWPORT_PADDING};
