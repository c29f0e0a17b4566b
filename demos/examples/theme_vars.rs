// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print the style variables for a themed chart loaded from JSON.
//!
//! Run:
//! - `cargo run -p odontogram_demos --example theme_vars`

use odontogram::{ChartConfig, Odontogram};

const CONFIG: &str = r##"{
    "theme": "dark",
    "colors": { "lightBlue": "#222244" },
    "showLabels": true,
    "teethConditions": [
        { "label": "caries", "teeth": ["teeth-36", "teeth-46"], "fillColor": "#ef4444" }
    ]
}"##;

fn main() -> Result<(), odontogram::Error> {
    env_logger::init();

    let chart = Odontogram::new(ChartConfig::from_json(CONFIG)?);
    for (name, value) in chart.style_vars() {
        println!("{name}: {value};");
    }
    for group in chart.legend() {
        println!("legend: {} ({})", group.label, group.fill_color);
    }
    Ok(())
}
