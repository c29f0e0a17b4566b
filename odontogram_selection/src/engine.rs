// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection state machine.
//!
//! ## Semantics
//!
//! - `Multi`: toggling a selected tooth removes it, toggling any other adds it at the end.
//! - `Single`: toggling the sole selected tooth empties the selection; toggling anything else
//!   replaces the selection with just that tooth.
//! - Read-only: toggles are ignored. No change is reported.
//!
//! Every accepted toggle yields exactly one [`SelectionChange`].
//!
//! ```
//! use odontogram_selection::engine::{SelectionEngine, SelectionMode};
//! use odontogram_notation::ToothCode;
//!
//! let mut engine = SelectionEngine::new([ToothCode::from("teeth-11")], SelectionMode::Single);
//! let change = engine.toggle(&ToothCode::from("teeth-12")).unwrap();
//! assert_eq!(change.selection.to_form_value(), r#"["teeth-12"]"#);
//! assert_eq!(change.details[0].notations.palmer, "2UR");
//! ```

use alloc::vec::Vec;

use odontogram_notation::{ToothCode, ToothDetail};

use crate::selection::Selection;

/// How many teeth may be selected at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Any number of teeth.
    #[default]
    Multi,
    /// At most one tooth.
    Single,
}

/// The result of an accepted toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    /// The selection after the toggle.
    pub selection: Selection,
    /// Derived details for `selection`, in selection order.
    pub details: Vec<ToothDetail>,
}

/// Apply one toggle of `id` to `state` under `mode`, returning the new state.
pub fn toggled(state: &Selection, id: &ToothCode, mode: SelectionMode) -> Selection {
    match mode {
        SelectionMode::Multi => {
            let mut next = state.clone();
            if !next.remove(id) {
                next.insert(id.clone());
            }
            next
        }
        SelectionMode::Single => {
            if state.len() == 1 && state.contains(id) {
                Selection::new()
            } else {
                core::iter::once(id.clone()).collect()
            }
        }
    }
}

/// Owns the current [`Selection`] and applies toggles to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionEngine {
    selection: Selection,
    mode: SelectionMode,
    read_only: bool,
}

impl SelectionEngine {
    /// Seed the engine from `defaults`.
    ///
    /// Duplicates collapse. In [`SelectionMode::Single`] only the first default is kept; the
    /// rest are dropped without complaint.
    pub fn new(defaults: impl IntoIterator<Item = ToothCode>, mode: SelectionMode) -> Self {
        let mut selection: Selection = defaults.into_iter().collect();
        if mode == SelectionMode::Single && selection.len() > 1 {
            log::debug!(
                "single-select keeps the first of {} default teeth",
                selection.len()
            );
            selection.truncate(1);
        }
        Self {
            selection,
            mode,
            read_only: false,
        }
    }

    /// Builder-style read-only switch.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Enable or disable read-only mode.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Whether toggles are currently ignored.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Current selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Switch modes. Entering single mode keeps only the first selected tooth.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::Single {
            self.selection.truncate(1);
        }
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: &ToothCode) -> bool {
        self.selection.contains(id)
    }

    /// Derived details for the current selection.
    pub fn details(&self) -> Vec<ToothDetail> {
        self.selection.details()
    }

    /// Toggle `id`.
    ///
    /// Returns `None` when read-only; the state is left untouched.
    pub fn toggle(&mut self, id: &ToothCode) -> Option<SelectionChange> {
        if self.read_only {
            log::trace!("ignoring toggle of {id}: read-only");
            return None;
        }
        self.selection = toggled(&self.selection, id, self.mode);
        log::debug!(
            "toggled {id}: {} selected ({:?})",
            self.selection.len(),
            self.mode
        );
        Some(SelectionChange {
            selection: self.selection.clone(),
            details: self.selection.details(),
        })
    }
}
