// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a chart, toggle a few teeth, and print what a host would render.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p odontogram_demos --example chart_basics`

use odontogram::{ChartConfig, Odontogram, ShowHalf};
use odontogram_notation::{Notation, ToothCode};

fn main() {
    env_logger::init();

    let config = ChartConfig::default()
        .with_show_half(ShowHalf::Upper)
        .with_notation(Notation::Universal)
        .with_default_selected(["teeth-16"]);
    let mut chart = Odontogram::new(config).with_on_change(|details| {
        let ids: Vec<&str> = details.iter().map(|d| d.id.as_str()).collect();
        println!("selection changed: {ids:?}");
    });

    chart.click(&ToothCode::from("teeth-11"));
    chart.key_down(&ToothCode::from("teeth-21"), "Enter");
    chart.click(&ToothCode::from("teeth-16"));

    for quadrant in chart.quadrants() {
        println!("{} [{}]", quadrant.layout.label(), quadrant.layout.transform);
        for tooth in &quadrant.teeth {
            let mark = if tooth.selected { "x" } else { " " };
            println!("  [{mark}] {:>3}  {}", tooth.title, tooth.aria_label);
        }
    }

    let field = chart.form_field();
    println!("<input type=hidden name={:?} value={:?}>", field.name, field.value);
}
