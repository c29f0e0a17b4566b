// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement computation.
//!
//! ## Algorithm
//!
//! 1) Horizontal: center the tooltip on the placement's anchor point x, then clamp into the
//!    viewport minus padding.
//! 2) Vertical: start on the placement's preferred side (below for the `bottom` family,
//!    above otherwise). Above means `anchor.top - height - margin - arrow`; below means
//!    `anchor.bottom + margin + arrow`.
//! 3) Flip: an above-side placement moves below and mirrors when its anchor point lies above
//!    the container's top edge, or when the tooltip body would cross the viewport's top edge
//!    plus padding.
//! 4) Clamp the vertical position into the viewport minus padding. A position that overflows
//!    at the bottom is clamped, never flipped back.
//!
//! Horizontal overflow is only clamped; there is no left/right flip.

use kurbo::Point;

use crate::types::{ARROW_OFFSET, Measured, Placed, Placement, Side, VIEWPORT_PADDING};

/// Computes tooltip positions. Holds only tuning constants; every call is independent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementEngine {
    /// Gap kept between the tooltip and the viewport edges.
    pub viewport_padding: f64,
    /// Vertical space reserved for the arrow between anchor and tooltip.
    pub arrow_offset: f64,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self {
            viewport_padding: VIEWPORT_PADDING,
            arrow_offset: ARROW_OFFSET,
        }
    }
}

/// `value` clamped into `[min, max]`, where an inverted range collapses to `min`.
///
/// NaN input also lands on `min`.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    let max = max.max(min);
    value.max(min).min(max)
}

impl PlacementEngine {
    /// Create an engine with the default padding and arrow offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position a tooltip of `m.tooltip` size next to `m.anchor`.
    pub fn place(&self, m: &Measured, placement: Placement, margin: f64) -> Placed {
        let pad = self.viewport_padding;
        let size = m.tooltip;
        let point = placement.anchor_point(m.anchor, margin);

        let min_x = m.viewport.x0 + pad;
        let max_x = m.viewport.x1 - size.width - pad;
        let x = clamp_axis(point.x - size.width / 2.0, min_x, max_x);

        let top_above = m.anchor.y0 - size.height - margin - self.arrow_offset;
        let top_below = m.anchor.y1 + margin + self.arrow_offset;

        let mut side = placement.preferred_side();
        let mut resolved = placement;
        let mut y = match side {
            Side::Above => top_above,
            Side::Below => top_below,
        };

        let above_container = point.y < m.container.y0;
        let above_viewport = top_above < m.viewport.y0 + pad;
        let flipped = side == Side::Above && (above_container || above_viewport);
        if flipped {
            side = Side::Below;
            resolved = placement.flip_vertical();
            y = top_below;
            log::debug!("tooltip `{placement}` overflows the top edge, flipped to `{resolved}`");
        }

        let min_y = m.viewport.y0 + pad;
        let max_y = m.viewport.y1 - size.height - pad;
        let y = clamp_axis(y, min_y, max_y);

        let placed = Placed {
            origin: Point::new(x, y),
            placement: resolved,
            side,
            flipped,
        };
        log::trace!("placed tooltip: {placed:?}");
        placed
    }
}
