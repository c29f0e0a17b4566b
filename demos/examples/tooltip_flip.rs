// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover two teeth and show where the tooltip lands, including a flip near the top edge.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p odontogram_demos --example tooltip_flip`

use kurbo::{Rect, Size};
use odontogram::{ChartConfig, Odontogram};
use odontogram_notation::ToothCode;
use odontogram_placement::{Placement, RectProvider};

/// A fixed page: the chart at the top-left of a 1024 × 768 window.
struct FixedPage;

impl RectProvider<ToothCode> for FixedPage {
    fn anchor_rect(&self, target: &ToothCode) -> Option<Rect> {
        let n: f64 = target.numeric().parse().ok()?;
        // One row of 40 px wide teeth; quadrant 1 sits on the top edge.
        let y = if n < 20.0 { 4.0 } else { 200.0 };
        let x = (n % 10.0) * 40.0;
        Some(Rect::new(x, y, x + 30.0, y + 40.0))
    }

    fn tooltip_size(&self) -> Option<Size> {
        Some(Size::new(160.0, 56.0))
    }

    fn container_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 409.0, 694.0)
    }

    fn viewport_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 1024.0, 768.0)
    }
}

fn main() {
    env_logger::init();

    let mut chart = Odontogram::new(ChartConfig::default().with_tooltip(Placement::Top, 10.0));

    for id in ["teeth-11", "teeth-23"] {
        let code = ToothCode::from(id);
        let Some(ticket) = chart.pointer_enter(&code) else {
            continue;
        };
        // The host measures once its layout has settled.
        chart.layout_settled(ticket, &FixedPage);
        if let Some(view) = chart.tooltip() {
            println!("{id}:\n{}", view.text);
            match view.placed {
                Some(p) => println!(
                    "  at ({}, {}) as `{}`{}",
                    p.origin.x,
                    p.origin.y,
                    p.placement,
                    if p.flipped { ", flipped" } else { "" }
                ),
                None => log::warn!("{id}: tooltip not measured"),
            }
        }
        chart.pointer_leave();
    }
}
