// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip state and its two-phase update.
//!
//! ## Phases
//!
//! 1) Intent: [`TooltipController::enter`] records the hovered or focused tooth, marks the
//!    tooltip active, and hands back a [`MeasureTicket`].
//! 2) Measurement: once the host has laid out and painted, it calls
//!    [`TooltipController::measure`] with the ticket and a
//!    [`RectProvider`]. The controller runs the
//!    [`PlacementEngine`] on the live rectangles.
//!
//! Every enter and leave bumps a generation counter. A ticket from an earlier generation is
//! stale: its measurement is dropped, so a quick hover → leave → hover never shows the first
//! target's position. Placement is cheap and idempotent, so hosts may also call
//! [`TooltipController::remeasure`] after resizes or content changes.

use std::fmt;

use kurbo::Rect;
use odontogram_notation::{ToothCode, ToothDetail};
use odontogram_placement::{Placed, Placement, PlacementEngine, RectProvider};

use crate::hover::{HoverEvent, HoverState};

/// What a tooltip shows.
pub enum TooltipContent {
    /// Fixed text, the same for every tooth.
    Static(String),
    /// Text computed from the hovered tooth's detail.
    Dynamic(Box<dyn Fn(Option<&ToothDetail>) -> String>),
}

impl TooltipContent {
    /// Wrap a content function.
    pub fn dynamic(f: impl Fn(Option<&ToothDetail>) -> String + 'static) -> Self {
        Self::Dynamic(Box::new(f))
    }

    /// Produce the text for `payload`.
    pub fn render(&self, payload: Option<&ToothDetail>) -> String {
        match self {
            Self::Static(text) => text.clone(),
            Self::Dynamic(f) => f(payload),
        }
    }
}

impl fmt::Debug for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Dynamic(_) => f.debug_tuple("Dynamic").finish_non_exhaustive(),
        }
    }
}

impl From<String> for TooltipContent {
    fn from(text: String) -> Self {
        Self::Static(text)
    }
}

impl From<&str> for TooltipContent {
    fn from(text: &str) -> Self {
        Self::Static(text.to_owned())
    }
}

/// The built-in tooltip text: FDI number, type, and the other two notations.
pub fn default_content(detail: &ToothDetail) -> String {
    format!(
        "Tooth: {}\nType: {}\nUniversal: {}, Palmer: {}",
        detail.notations.fdi, detail.tooth_type, detail.notations.universal, detail.notations.palmer
    )
}

/// Snapshot of the tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    /// Whether the tooltip should be shown.
    pub active: bool,
    /// Detail of the last hovered or focused tooth.
    pub payload: Option<ToothDetail>,
    /// Requested placement.
    pub placement: Placement,
    /// Distance between tooth and tooltip.
    pub margin: f64,
    /// Last measured anchor rectangle.
    pub anchor: Option<Rect>,
    /// Last computed position; `None` until measured.
    pub placed: Option<Placed>,
}

/// Token tying a deferred measurement to the enter that requested it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MeasureTicket {
    generation: u64,
}

/// Owns [`TooltipState`] and runs placement against host-provided rectangles.
#[derive(Clone, Debug)]
pub struct TooltipController {
    state: TooltipState,
    hover: HoverState<ToothCode>,
    generation: u64,
    engine: PlacementEngine,
}

impl TooltipController {
    /// An inactive tooltip using `placement` and `margin`.
    pub fn new(placement: Placement, margin: f64) -> Self {
        Self {
            state: TooltipState {
                active: false,
                payload: None,
                placement,
                margin,
                anchor: None,
                placed: None,
            },
            hover: HoverState::new(),
            generation: 0,
            engine: PlacementEngine::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// The hovered or focused tooth, if any.
    pub fn target(&self) -> Option<&ToothCode> {
        self.hover.current()
    }

    /// Hover or focus entered `target`.
    pub fn enter(&mut self, target: ToothCode) -> MeasureTicket {
        let events = self.hover.enter(target.clone());
        if events.iter().any(|e| matches!(e, HoverEvent::Enter(_))) {
            self.state.payload = Some(ToothDetail::of(&target));
            self.state.anchor = None;
            self.state.placed = None;
        }
        self.state.active = true;
        self.generation += 1;
        log::trace!("tooltip enter {target} (generation {})", self.generation);
        MeasureTicket {
            generation: self.generation,
        }
    }

    /// Hover left or focus blurred. The last payload is kept but hidden.
    pub fn leave(&mut self) {
        let _ = self.hover.clear();
        self.state.active = false;
        self.state.placed = None;
        self.generation += 1;
    }

    /// Whether `ticket` still refers to the live hover.
    pub fn is_current(&self, ticket: MeasureTicket) -> bool {
        self.state.active && ticket.generation == self.generation
    }

    /// Complete the deferred phase for `ticket`.
    ///
    /// Returns `None` if the ticket is stale or the host cannot measure the target yet.
    pub fn measure<P: RectProvider<ToothCode>>(
        &mut self,
        ticket: MeasureTicket,
        rects: &P,
    ) -> Option<Placed> {
        if !self.is_current(ticket) {
            log::trace!(
                "dropping stale tooltip measurement (generation {} vs {})",
                ticket.generation,
                self.generation
            );
            return None;
        }
        self.remeasure(rects)
    }

    /// Recompute placement for the active target from fresh rectangles.
    pub fn remeasure<P: RectProvider<ToothCode>>(&mut self, rects: &P) -> Option<Placed> {
        if !self.state.active {
            return None;
        }
        let target = self.hover.current()?;
        let measured = rects.measure(target)?;
        let placed = self
            .engine
            .place(&measured, self.state.placement, self.state.margin);
        self.state.anchor = Some(measured.anchor);
        self.state.placed = Some(placed);
        Some(placed)
    }
}
