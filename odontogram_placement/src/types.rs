// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement names, anchor offsets, and placement results.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size};

/// Gap kept between a placed tooltip and the viewport edges.
pub const VIEWPORT_PADDING: f64 = 8.0;

/// Extra vertical distance reserved for the tooltip's arrow.
pub const ARROW_OFFSET: f64 = 12.0;

/// Where a tooltip is requested relative to its anchor.
///
/// The family (`Top`, `Bottom`, `Left`, `Right`) names the anchor edge, and the `Start` / `End`
/// variants pin the anchor point to that edge's first or last corner instead of its middle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Middle of the top edge.
    Top,
    /// Top-left corner.
    TopStart,
    /// Top-right corner.
    TopEnd,
    /// Middle of the bottom edge.
    Bottom,
    /// Bottom-left corner.
    BottomStart,
    /// Bottom-right corner.
    BottomEnd,
    /// Middle of the left edge.
    Left,
    /// Top-left corner, offset leftward.
    LeftStart,
    /// Bottom-left corner, offset leftward.
    LeftEnd,
    /// Middle of the right edge.
    #[default]
    Right,
    /// Top-right corner, offset rightward.
    RightStart,
    /// Bottom-right corner, offset rightward.
    RightEnd,
}

impl Placement {
    /// All twelve placements.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
        Self::Left,
        Self::LeftStart,
        Self::LeftEnd,
        Self::Right,
        Self::RightStart,
        Self::RightEnd,
    ];

    /// The kebab-case name, e.g. `"top-start"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
        }
    }

    /// Parse a placement name, falling back to [`Placement::Right`] for anything unknown.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: UnknownPlacement| {
            log::warn!("{err}; using `right`");
            Self::Right
        })
    }

    /// Anchor point for this placement: a point on `anchor`'s edge or corner, pushed outward
    /// by `margin`.
    pub fn anchor_point(self, anchor: Rect, margin: f64) -> Point {
        let mid_x = anchor.x0 + anchor.width() / 2.0;
        let mid_y = anchor.y0 + anchor.height() / 2.0;
        let (x, y) = match self {
            Self::Top => (mid_x, anchor.y0 - margin),
            Self::TopStart => (anchor.x0, anchor.y0 - margin),
            Self::TopEnd => (anchor.x1, anchor.y0 - margin),
            Self::Bottom => (mid_x, anchor.y1 + margin),
            Self::BottomStart => (anchor.x0, anchor.y1 + margin),
            Self::BottomEnd => (anchor.x1, anchor.y1 + margin),
            Self::Left => (anchor.x0 - margin, mid_y),
            Self::LeftStart => (anchor.x0 - margin, anchor.y0),
            Self::LeftEnd => (anchor.x0 - margin, anchor.y1),
            Self::Right => (anchor.x1 + margin, mid_y),
            Self::RightStart => (anchor.x1 + margin, anchor.y0),
            Self::RightEnd => (anchor.x1 + margin, anchor.y1),
        };
        Point::new(x, y)
    }

    /// The side a tooltip with this placement starts on. Only the `bottom` family starts below.
    pub const fn preferred_side(self) -> Side {
        match self {
            Self::Bottom | Self::BottomStart | Self::BottomEnd => Side::Below,
            _ => Side::Above,
        }
    }

    /// The vertically mirrored placement: `top*` and `bottom*` swap, sideways placements are
    /// their own mirror.
    pub const fn flip_vertical(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::TopStart => Self::BottomStart,
            Self::TopEnd => Self::BottomEnd,
            Self::Bottom => Self::Top,
            Self::BottomStart => Self::TopStart,
            Self::BottomEnd => Self::TopEnd,
            other => other,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized placement name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported tooltip placement")]
pub struct UnknownPlacement;

impl FromStr for Placement {
    type Err = UnknownPlacement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(UnknownPlacement)
    }
}

/// Which side of the anchor the tooltip body ended up on; the arrow points the other way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Tooltip above the anchor, arrow at its bottom edge.
    Above,
    /// Tooltip below the anchor, arrow at its top edge.
    Below,
}

/// The rectangles a placement needs, all in the same (viewport) coordinate space.
///
/// `anchor` and `tooltip` are only known after layout; see
/// [`RectProvider`](crate::provider::RectProvider).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measured {
    /// Bounding box of the element the tooltip points at.
    pub anchor: Rect,
    /// Rendered size of the tooltip itself.
    pub tooltip: Size,
    /// Bounds of the chart hosting the anchor.
    pub container: Rect,
    /// Visible viewport.
    pub viewport: Rect,
}

/// Result of [`PlacementEngine::place`](crate::engine::PlacementEngine::place).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placed {
    /// Top-left corner of the tooltip.
    pub origin: Point,
    /// The placement actually used, after any flip.
    pub placement: Placement,
    /// Side of the anchor the tooltip sits on.
    pub side: Side,
    /// True if the requested placement was flipped to avoid the top edge.
    pub flipped: bool,
}

impl Placed {
    /// The tooltip's rectangle given its size.
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for p in Placement::ALL {
            assert_eq!(p.as_str().parse::<Placement>(), Ok(p));
        }
    }

    #[test]
    fn unknown_name_falls_back_to_right() {
        assert_eq!("diagonal".parse::<Placement>(), Err(UnknownPlacement));
        assert_eq!(Placement::parse_or_default("diagonal"), Placement::Right);
        assert_eq!(Placement::parse_or_default(""), Placement::Right);
        assert_eq!(Placement::parse_or_default("left-end"), Placement::LeftEnd);
    }

    #[test]
    fn anchor_points_sit_on_offset_edges() {
        let r = Rect::new(100.0, 50.0, 140.0, 70.0);
        let m = 10.0;
        assert_eq!(Placement::Top.anchor_point(r, m), Point::new(120.0, 40.0));
        assert_eq!(Placement::TopStart.anchor_point(r, m), Point::new(100.0, 40.0));
        assert_eq!(Placement::TopEnd.anchor_point(r, m), Point::new(140.0, 40.0));
        assert_eq!(Placement::Bottom.anchor_point(r, m), Point::new(120.0, 80.0));
        assert_eq!(Placement::BottomStart.anchor_point(r, m), Point::new(100.0, 80.0));
        assert_eq!(Placement::BottomEnd.anchor_point(r, m), Point::new(140.0, 80.0));
        assert_eq!(Placement::Left.anchor_point(r, m), Point::new(90.0, 60.0));
        assert_eq!(Placement::LeftStart.anchor_point(r, m), Point::new(90.0, 50.0));
        assert_eq!(Placement::LeftEnd.anchor_point(r, m), Point::new(90.0, 70.0));
        assert_eq!(Placement::Right.anchor_point(r, m), Point::new(150.0, 60.0));
        assert_eq!(Placement::RightStart.anchor_point(r, m), Point::new(150.0, 50.0));
        assert_eq!(Placement::RightEnd.anchor_point(r, m), Point::new(150.0, 70.0));
    }

    #[test]
    fn vertical_flip_is_an_involution() {
        for p in Placement::ALL {
            assert_eq!(p.flip_vertical().flip_vertical(), p);
        }
        assert_eq!(Placement::TopEnd.flip_vertical(), Placement::BottomEnd);
        assert_eq!(Placement::Left.flip_vertical(), Placement::Left);
    }
}
