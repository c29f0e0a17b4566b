// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme resolution: palette plus overrides, as a finished map of style variables.

use std::collections::BTreeMap;

use crate::config::{ColorOverrides, Theme};

/// Variable holding the stroke/selection colour.
pub const DARK_BLUE: &str = "--dark-blue";
/// Variable holding the base tooth colour.
pub const BASE_BLUE: &str = "--base-blue";
/// Variable holding the hover/highlight colour.
pub const LIGHT_BLUE: &str = "--light-blue";

/// Resolved style variables, name → CSS colour.
pub type StyleVars = BTreeMap<&'static str, String>;

const fn palette(theme: Theme) -> [(&'static str, &'static str); 3] {
    match theme {
        Theme::Light => [
            (DARK_BLUE, "#3e5edc"),
            (BASE_BLUE, "#8a98be"),
            (LIGHT_BLUE, "#c6ccf8"),
        ],
        Theme::Dark => [
            (DARK_BLUE, "#aab6ff"),
            (BASE_BLUE, "#d0d5f6"),
            (LIGHT_BLUE, "#5361e6"),
        ],
    }
}

/// Only the overrides that are set and non-empty, as style variables.
pub fn override_vars(colors: &ColorOverrides) -> StyleVars {
    [
        (DARK_BLUE, &colors.dark_blue),
        (BASE_BLUE, &colors.base_blue),
        (LIGHT_BLUE, &colors.light_blue),
    ]
    .into_iter()
    .filter_map(|(name, value)| {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(|v| (name, v.to_owned()))
    })
    .collect()
}

/// The theme's palette with `colors` layered on top.
pub fn resolve_theme(theme: Theme, colors: &ColorOverrides) -> StyleVars {
    let mut vars: StyleVars = palette(theme)
        .into_iter()
        .map(|(name, value)| (name, value.to_owned()))
        .collect();
    vars.extend(override_vars(colors));
    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_palette() {
        let vars = resolve_theme(Theme::Light, &ColorOverrides::default());
        assert_eq!(vars[DARK_BLUE], "#3e5edc");
        assert_eq!(vars[BASE_BLUE], "#8a98be");
        assert_eq!(vars[LIGHT_BLUE], "#c6ccf8");
    }

    #[test]
    fn overrides_win_over_dark_palette() {
        let colors = ColorOverrides {
            base_blue: Some("#000".into()),
            ..ColorOverrides::default()
        };
        let vars = resolve_theme(Theme::Dark, &colors);
        assert_eq!(vars[DARK_BLUE], "#aab6ff");
        assert_eq!(vars[BASE_BLUE], "#000");
        assert_eq!(vars.len(), 3);
    }

    #[test]
    fn override_vars_skip_unset_and_empty() {
        let colors = ColorOverrides {
            dark_blue: Some("#1".into()),
            base_blue: Some("#2".into()),
            light_blue: Some(String::new()),
        };
        let vars = override_vars(&colors);
        assert_eq!(
            vars.into_iter().collect::<Vec<_>>(),
            [(BASE_BLUE, "#2".to_owned()), (DARK_BLUE, "#1".to_owned())]
        );
    }
}
