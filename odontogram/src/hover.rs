// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions as the active tooth changes.
//!
//! Pointer hover and keyboard focus feed the same state. The last enter wins, and any
//! leave or blur clears it.
//!
//! ```
//! use odontogram::hover::{HoverEvent, HoverState};
//!
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.enter(1), vec![HoverEvent::Enter(1)]);
//! assert_eq!(h.enter(2), vec![HoverEvent::Leave(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.clear(), vec![HoverEvent::Leave(2)]);
//! ```

/// A hover transition event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The target became active.
    Enter(K),
    /// The target stopped being active.
    Leave(K),
}

/// Tracks the single active hover/focus target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: Clone + PartialEq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active target, if any.
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Make `target` active and return the transitions from the previous target.
    ///
    /// Re-entering the active target yields no events.
    pub fn enter(&mut self, target: K) -> Vec<HoverEvent<K>> {
        let mut out = Vec::new();
        match self.current.replace(target.clone()) {
            Some(prev) if prev == target => {}
            Some(prev) => {
                out.push(HoverEvent::Leave(prev));
                out.push(HoverEvent::Enter(target));
            }
            None => out.push(HoverEvent::Enter(target)),
        }
        out
    }

    /// Clear the active target, returning its leave event if there was one.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.current.take().map(HoverEvent::Leave).into_iter().collect()
    }
}
