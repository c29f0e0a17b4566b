// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout measurement as an external capability.
//!
//! The engine never measures anything. A host (DOM, a native toolkit, a test double) implements
//! [`RectProvider`] and the controller asks it for rectangles once layout has settled.

use kurbo::{Rect, Size};

use crate::types::Measured;

/// Supplies the rectangles a placement needs, keyed by anchor target `K`.
///
/// Anchor and tooltip geometry exist only after layout, so both may be absent (the target was
/// unmounted, or the tooltip has not rendered yet). Container and viewport are always known.
pub trait RectProvider<K> {
    /// Bounding box of the anchor element for `target`, in viewport coordinates.
    fn anchor_rect(&self, target: &K) -> Option<Rect>;
    /// Rendered size of the tooltip element.
    fn tooltip_size(&self) -> Option<Size>;
    /// Bounds of the chart hosting the anchors.
    fn container_rect(&self) -> Rect;
    /// Visible viewport.
    fn viewport_rect(&self) -> Rect;

    /// Collect a full [`Measured`] snapshot for `target`, if its geometry is available.
    fn measure(&self, target: &K) -> Option<Measured> {
        Some(Measured {
            anchor: self.anchor_rect(target)?,
            tooltip: self.tooltip_size()?,
            container: self.container_rect(),
            viewport: self.viewport_rect(),
        })
    }
}

impl<K, P: RectProvider<K> + ?Sized> RectProvider<K> for &P {
    fn anchor_rect(&self, target: &K) -> Option<Rect> {
        (**self).anchor_rect(target)
    }

    fn tooltip_size(&self) -> Option<Size> {
        (**self).tooltip_size()
    }

    fn container_rect(&self) -> Rect {
        (**self).container_rect()
    }

    fn viewport_rect(&self) -> Rect {
        (**self).viewport_rect()
    }
}
