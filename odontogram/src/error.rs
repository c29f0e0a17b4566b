// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors at the host boundary.
//!
//! Chart operations themselves never fail; these cover parsing input a host hands over whole.

use odontogram_selection::FormValueError;

/// Errors returned by [`ChartConfig::from_json`](crate::config::ChartConfig::from_json) and
/// [`Odontogram::restore_form_value`](crate::chart::Odontogram::restore_form_value).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration document is not valid JSON or has the wrong shape.
    #[error("invalid odontogram configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// A submitted form value could not be decoded.
    #[error(transparent)]
    FormValue(#[from] FormValueError),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
