// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The headless chart: configuration, selection, conditions, and tooltip wired together.
//!
//! [`Odontogram`] is what a rendering layer drives. It answers "what should be drawn"
//! ([`Odontogram::teeth`], [`Odontogram::legend`], [`Odontogram::style_vars`],
//! [`Odontogram::tooltip`]) and accepts the input events a tooth element produces (click,
//! key down, pointer enter/leave, focus/blur). It draws nothing itself.

use std::fmt;

use kurbo::Rect;
use odontogram_notation::{Quadrant, ToothCode, ToothDetail, ToothRegistry, convert};
use odontogram_placement::{Placed, RectProvider, Side};
use odontogram_selection::{
    ConditionGroup, ConditionIndex, Selection, SelectionChange, SelectionEngine,
};

use crate::config::{ChartConfig, DisplayFlags};
use crate::error::Result;
use crate::layout::{self, QuadrantLayout};
use crate::theme::{self, StyleVars};
use crate::tooltip::{MeasureTicket, TooltipContent, TooltipController, default_content};

/// Whether a keyboard key activates (toggles) a focused tooth.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Colours for a tooth with a condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToothPaint {
    /// Fill colour.
    pub fill: String,
    /// Outline colour.
    pub outline: String,
    /// The condition's label.
    pub label: String,
}

impl From<&ConditionGroup> for ToothPaint {
    fn from(group: &ConditionGroup) -> Self {
        Self {
            fill: group.fill_color.clone(),
            outline: group.outline().to_owned(),
            label: group.label.clone(),
        }
    }
}

/// One tooth element to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedTooth {
    /// Identifier passed back with events.
    pub code: ToothCode,
    /// Rendering quadrant.
    pub quadrant: Quadrant,
    /// Title in the configured notation.
    pub title: String,
    /// Accessible label, `"Tooth <fdi>"`.
    pub aria_label: String,
    /// Whether the tooth is selected.
    pub selected: bool,
    /// Condition colours, if any group marks this tooth.
    pub paint: Option<ToothPaint>,
}

/// A quadrant group and the teeth drawn inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedQuadrant {
    /// Quadrant and transform.
    pub layout: QuadrantLayout,
    /// Teeth, midline outward.
    pub teeth: Vec<RenderedTooth>,
}

/// The hidden form field carrying the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    /// Field name.
    pub name: String,
    /// JSON array of selected codes, in selection order.
    pub value: String,
}

/// What to draw for the tooltip right now.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView {
    /// Text content.
    pub text: String,
    /// Position, if measured. Hosts keep the tooltip invisible until it is.
    pub placed: Option<Placed>,
}

impl TooltipView {
    /// Side of the tooltip the arrow is drawn on, if placed.
    pub fn arrow_edge(&self) -> Option<Side> {
        // Arrow sits on the edge facing the anchor.
        self.placed.map(|p| match p.side {
            Side::Above => Side::Below,
            Side::Below => Side::Above,
        })
    }
}

type ChangeListener = Box<dyn FnMut(&[ToothDetail])>;

/// A headless interactive odontogram.
pub struct Odontogram {
    config: ChartConfig,
    flags: DisplayFlags,
    per_quadrant: usize,
    selection: SelectionEngine,
    conditions: ConditionIndex,
    tooltip: TooltipController,
    content: Option<TooltipContent>,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for Odontogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Odontogram")
            .field("flags", &self.flags)
            .field("per_quadrant", &self.per_quadrant)
            .field("selection", self.selection.selection())
            .field("conditions", &self.conditions.len())
            .field("tooltip", self.tooltip.state())
            .field("content", &self.content)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Odontogram {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl Odontogram {
    /// Build a chart from `config`.
    pub fn new(config: ChartConfig) -> Self {
        let flags = config.flags();
        let selection = SelectionEngine::new(
            config.default_selected.iter().cloned(),
            config.selection_mode(),
        )
        .with_read_only(flags.contains(DisplayFlags::READ_ONLY));
        let conditions = ConditionIndex::build(config.teeth_conditions.iter().cloned());
        let tooltip = TooltipController::new(
            config.tooltip.placement,
            config.tooltip.effective_margin(),
        );
        let per_quadrant = layout::clamp_max_teeth(config.max_teeth);
        log::debug!(
            "odontogram: {:?}, {per_quadrant} teeth per quadrant, {} conditions",
            config.show_half,
            config.teeth_conditions.len()
        );
        Self {
            config,
            flags,
            per_quadrant,
            selection,
            conditions,
            tooltip,
            content: None,
            on_change: None,
        }
    }

    /// Call `f` with the full selection detail after every accepted toggle.
    pub fn with_on_change(mut self, f: impl FnMut(&[ToothDetail]) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Replace the built-in tooltip text.
    pub fn with_tooltip_content(mut self, content: impl Into<TooltipContent>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The configuration the chart was built from.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Active display flags.
    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// Whether more than one tooth may be selected (`aria-multiselectable`).
    pub fn is_multiselectable(&self) -> bool {
        !self.flags.contains(DisplayFlags::SINGLE_SELECT)
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        self.selection.selection()
    }

    /// Details for the current selection.
    pub fn selected_details(&self) -> Vec<ToothDetail> {
        self.selection.details()
    }

    /// The condition index.
    pub fn conditions(&self) -> &ConditionIndex {
        &self.conditions
    }

    /// The SVG view box for the configured half.
    pub fn view_box(&self) -> Rect {
        layout::view_box(self.config.show_half)
    }

    /// Resolved theme variables.
    pub fn style_vars(&self) -> StyleVars {
        theme::resolve_theme(self.config.theme, &self.config.colors)
    }

    fn render_tooth(&self, quadrant: Quadrant, code: ToothCode) -> RenderedTooth {
        RenderedTooth {
            title: convert(&code, self.config.notation),
            aria_label: format!("Tooth {}", code.numeric()),
            selected: self.selection.is_selected(&code),
            paint: self.conditions.get(&code).map(ToothPaint::from),
            quadrant,
            code,
        }
    }

    /// Quadrant groups to draw, each with its teeth.
    pub fn quadrants(&self) -> Vec<RenderedQuadrant> {
        layout::visible_quadrants(self.config.show_half)
            .iter()
            .map(|&q| RenderedQuadrant {
                layout: q,
                teeth: ToothRegistry
                    .codes_in(q.quadrant, self.per_quadrant)
                    .map(|code| self.render_tooth(q.quadrant, code))
                    .collect(),
            })
            .collect()
    }

    /// Every tooth to draw, quadrant by quadrant.
    pub fn teeth(&self) -> Vec<RenderedTooth> {
        self.quadrants()
            .into_iter()
            .flat_map(|q| q.teeth)
            .collect()
    }

    /// Legend entries, when labels are enabled.
    pub fn legend(&self) -> &[ConditionGroup] {
        if self.flags.contains(DisplayFlags::SHOW_LABELS) {
            self.conditions.groups()
        } else {
            &[]
        }
    }

    /// The hidden form field.
    pub fn form_field(&self) -> FormField {
        FormField {
            name: self.config.name.clone(),
            value: self.selection().to_form_value(),
        }
    }

    /// Restore the selection from a submitted form value without notifying the listener.
    ///
    /// Single-select charts keep only the first restored tooth.
    pub fn restore_form_value(&mut self, value: &str) -> Result<()> {
        let restored = Selection::from_form_value(value)?;
        self.selection = SelectionEngine::new(restored.iter().cloned(), self.config.selection_mode())
            .with_read_only(self.flags.contains(DisplayFlags::READ_ONLY));
        Ok(())
    }

    /// A tooth was clicked.
    pub fn click(&mut self, code: &ToothCode) -> Option<SelectionChange> {
        let change = self.selection.toggle(code)?;
        if let Some(listener) = self.on_change.as_mut() {
            listener(&change.details);
        }
        Some(change)
    }

    /// A key was pressed on a focused tooth. Enter and Space toggle it.
    pub fn key_down(&mut self, code: &ToothCode, key: &str) -> Option<SelectionChange> {
        if is_activation_key(key) {
            self.click(code)
        } else {
            None
        }
    }

    /// The pointer entered a tooth. Returns a ticket to measure with once layout settles.
    pub fn pointer_enter(&mut self, code: &ToothCode) -> Option<MeasureTicket> {
        self.flags
            .contains(DisplayFlags::SHOW_TOOLTIP)
            .then(|| self.tooltip.enter(code.clone()))
    }

    /// A tooth received keyboard focus. Same as [`pointer_enter`](Self::pointer_enter).
    pub fn focus(&mut self, code: &ToothCode) -> Option<MeasureTicket> {
        self.pointer_enter(code)
    }

    /// The pointer left a tooth.
    pub fn pointer_leave(&mut self) {
        self.tooltip.leave();
    }

    /// A tooth lost keyboard focus.
    pub fn blur(&mut self) {
        self.tooltip.leave();
    }

    /// Layout settled after `ticket` was issued: place the tooltip.
    pub fn layout_settled<P: RectProvider<ToothCode>>(
        &mut self,
        ticket: MeasureTicket,
        rects: &P,
    ) -> Option<Placed> {
        self.tooltip.measure(ticket, rects)
    }

    /// Layout changed under an open tooltip (resize, content change): place it again.
    pub fn relayout<P: RectProvider<ToothCode>>(&mut self, rects: &P) -> Option<Placed> {
        self.tooltip.remeasure(rects)
    }

    /// The tooltip to draw, if one is showing.
    pub fn tooltip(&self) -> Option<TooltipView> {
        if !self.flags.contains(DisplayFlags::SHOW_TOOLTIP) {
            return None;
        }
        let state = self.tooltip.state();
        if !state.active {
            return None;
        }
        let payload = state.payload.as_ref()?;
        let text = match &self.content {
            Some(content) => content.render(Some(payload)),
            None => default_content(payload),
        };
        Some(TooltipView {
            text,
            placed: state.placed,
        })
    }

    /// The tooltip controller, for hosts that need the raw state.
    pub fn tooltip_controller(&self) -> &TooltipController {
        &self.tooltip
    }
}
