// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Odontogram Selection: which teeth are selected, and which are marked.
//!
//! ## Overview
//!
//! - [`SelectionEngine`](crate::engine::SelectionEngine) owns the set of selected
//!   [`ToothCode`](odontogram_notation::ToothCode)s and applies toggles under multi-select,
//!   single-select, or read-only rules. Each accepted toggle yields a
//!   [`SelectionChange`](crate::engine::SelectionChange) carrying the new snapshot and the
//!   derived [`ToothDetail`](odontogram_notation::ToothDetail) payload.
//! - [`Selection`](crate::selection::Selection) is an insertion-ordered snapshot with a JSON
//!   form-value encoding that round-trips exactly.
//! - [`ConditionIndex`](crate::condition::ConditionIndex) maps teeth to caller-supplied
//!   [`ConditionGroup`](crate::condition::ConditionGroup)s. When groups overlap, the later
//!   group wins.
//!
//! Everything here is synchronous and deterministic; there is nothing to lock or cancel.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod condition;
pub mod engine;
pub mod selection;

pub use condition::{ConditionGroup, ConditionIndex};
pub use engine::{SelectionChange, SelectionEngine, SelectionMode, toggled};
pub use selection::{FormValueError, Selection};
