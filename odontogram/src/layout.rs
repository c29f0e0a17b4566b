// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which quadrants and teeth are drawn, and where.
//!
//! The chart artwork is a single quadrant drawn four times; each rendering quadrant mirrors it
//! with a fixed transform inside a `409 × 694` view box.

use kurbo::{Point, Rect, Size};
use odontogram_notation::{Quadrant, ToothCode, ToothRegistry};

use crate::config::ShowHalf;

/// Size of the full chart's view box.
pub const VIEW_SIZE: Size = Size::new(409.0, 694.0);

/// A rendering quadrant and the transform that mirrors the artwork into it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadrantLayout {
    /// The quadrant.
    pub quadrant: Quadrant,
    /// SVG transform applied to the quadrant's group.
    pub transform: &'static str,
}

impl QuadrantLayout {
    /// Human readable label.
    pub fn label(&self) -> &'static str {
        self.quadrant.label()
    }
}

/// All quadrants in rendering order.
pub const QUADRANTS: [QuadrantLayout; 4] = [
    QuadrantLayout {
        quadrant: Quadrant::UpperRight,
        transform: "",
    },
    QuadrantLayout {
        quadrant: Quadrant::UpperLeft,
        transform: "scale(-1, 1) translate(-409, 0)",
    },
    QuadrantLayout {
        quadrant: Quadrant::LowerRight,
        transform: "scale(1, -1) translate(0, -694)",
    },
    QuadrantLayout {
        quadrant: Quadrant::LowerLeft,
        transform: "scale(-1, -1) translate(-409, -694)",
    },
];

/// The quadrants drawn for `half`.
pub fn visible_quadrants(half: ShowHalf) -> &'static [QuadrantLayout] {
    match half {
        ShowHalf::Upper => &QUADRANTS[..2],
        ShowHalf::Lower => &QUADRANTS[2..],
        ShowHalf::Full => &QUADRANTS,
    }
}

/// The view box for `half`.
pub fn view_box(half: ShowHalf) -> Rect {
    match half {
        ShowHalf::Full => Rect::from_origin_size(Point::ORIGIN, VIEW_SIZE),
        ShowHalf::Upper => Rect::from_origin_size(
            Point::ORIGIN,
            Size::new(VIEW_SIZE.width, VIEW_SIZE.height / 2.0),
        ),
        ShowHalf::Lower => Rect::from_origin_size(Point::new(0.0, 200.0), VIEW_SIZE),
    }
}

/// The view box formatted as an SVG `viewBox` attribute, e.g. `"0 0 409 694"`.
pub fn view_box_attr(half: ShowHalf) -> String {
    let r = view_box(half);
    format!("{} {} {} {}", r.x0, r.y0, r.width(), r.height())
}

/// Teeth drawn per quadrant for a requested `max_teeth`.
///
/// Absent or NaN shows every position. Anything else is truncated and clamped into
/// `0..=ToothRegistry::SIZE`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the clamped value is a whole number in 0..=8"
)]
pub fn clamp_max_teeth(max_teeth: Option<f64>) -> usize {
    let Some(max) = max_teeth else {
        return ToothRegistry::SIZE;
    };
    if max.is_nan() {
        log::warn!("maxTeeth is NaN, showing all teeth");
        return ToothRegistry::SIZE;
    }
    let clamped = max.trunc().clamp(0.0, ToothRegistry::SIZE as f64);
    if clamped != max {
        log::warn!("maxTeeth {max} clamped to {clamped}");
    }
    clamped as usize
}

/// Codes of every drawn tooth, quadrant by quadrant, midline outward.
pub fn visible_codes(half: ShowHalf, per_quadrant: usize) -> Vec<ToothCode> {
    visible_quadrants(half)
        .iter()
        .flat_map(|q| ToothRegistry.codes_in(q.quadrant, per_quadrant))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_slice_quadrants() {
        assert_eq!(visible_quadrants(ShowHalf::Full).len(), 4);
        let upper: Vec<_> = visible_quadrants(ShowHalf::Upper)
            .iter()
            .map(QuadrantLayout::label)
            .collect();
        assert_eq!(upper, ["Upper Right", "Upper Left"]);
        let lower: Vec<_> = visible_quadrants(ShowHalf::Lower)
            .iter()
            .map(|q| q.quadrant)
            .collect();
        assert_eq!(lower, [Quadrant::LowerRight, Quadrant::LowerLeft]);
    }

    #[test]
    fn view_boxes() {
        assert_eq!(view_box_attr(ShowHalf::Full), "0 0 409 694");
        assert_eq!(view_box_attr(ShowHalf::Upper), "0 0 409 347");
        assert_eq!(view_box_attr(ShowHalf::Lower), "0 200 409 694");
    }

    #[test]
    fn max_teeth_clamps() {
        assert_eq!(clamp_max_teeth(None), 8);
        assert_eq!(clamp_max_teeth(Some(f64::NAN)), 8);
        assert_eq!(clamp_max_teeth(Some(5.0)), 5);
        assert_eq!(clamp_max_teeth(Some(5.9)), 5);
        assert_eq!(clamp_max_teeth(Some(-3.0)), 0);
        assert_eq!(clamp_max_teeth(Some(40.0)), 8);
        assert_eq!(clamp_max_teeth(Some(f64::INFINITY)), 8);
        assert_eq!(clamp_max_teeth(Some(f64::NEG_INFINITY)), 0);
    }

    #[test]
    fn visible_code_counts() {
        assert_eq!(visible_codes(ShowHalf::Full, 8).len(), 32);
        assert_eq!(visible_codes(ShowHalf::Full, 5).len(), 20);
        assert_eq!(visible_codes(ShowHalf::Upper, 8).len(), 16);
        assert_eq!(visible_codes(ShowHalf::Lower, 0).len(), 0);
        let lower = visible_codes(ShowHalf::Lower, 1);
        assert_eq!(lower, [ToothCode::from("teeth-31"), ToothCode::from("teeth-41")]);
    }
}
