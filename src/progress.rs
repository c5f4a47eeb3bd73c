//! The step progress container.
//!
//! [`StepProgress`] owns the configuration and the index-aligned list of
//! [`StepNode`]s. Mutations go through [`StepProgress::apply`] (or one of the
//! setters wrapping it), which only arms a pass; the host runs armed passes on
//! its next event-loop turn with [`StepProgress::run_pending`].
//!
//! ```
//! use stepkit::{StepProgress, StepClass};
//!
//! let mut progress = StepProgress::new();
//! progress.set_steps(["Cart", "Shipping", "Payment"]);
//! progress.set_current_step(1);
//! // the rebuild recolors on its way out, so one pass covers both changes
//! assert_eq!(progress.run_pending(), 1);
//!
//! assert_eq!(progress.classes(), [StepClass::Past, StepClass::Current, StepClass::Future]);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::classify::{StepClass, classify, is_valid_current};
use crate::color::Color;
use crate::config::{Change, StepLayout};
use crate::defaults;
use crate::errors::ConfigError;
use crate::log::{debug, warn};
use crate::node::{NodeStyle, StepNode};
use crate::palette::StepPalette;
use crate::scheduler::{Pass, PassScheduler, PassStats};
use crate::shape::ShapeKind;
use crate::text::{ProportionalMetrics, TextMetrics};
use crate::types::{Length, Point, Rect, Size};

/// Host hook receiving the label of the active step (or `None`)
pub type AnnounceFn = Box<dyn FnMut(Option<&str>)>;

pub struct StepProgress {
    steps: Vec<String>,
    details: BTreeMap<i64, String>,
    current_step: i64,
    layout: StepLayout,
    palette: StepPalette,
    tint: Option<Color>,

    /// Index-aligned with `steps` once settled; replaced wholesale on rebuild
    nodes: Vec<StepNode>,
    classes: Vec<StepClass>,
    scheduler: PassScheduler,
    stats: PassStats,
    metrics: Box<dyn TextMetrics>,
    announce: Option<AnnounceFn>,
    announced: Option<String>,
}

impl Default for StepProgress {
    fn default() -> Self {
        Self::with_metrics(ProportionalMetrics)
    }
}

impl fmt::Debug for StepProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepProgress")
            .field("steps", &self.steps)
            .field("details", &self.details)
            .field("current_step", &self.current_step)
            .field("layout", &self.layout)
            .field("palette", &self.palette)
            .field("tint", &self.tint)
            .field("nodes", &self.nodes.len())
            .field("scheduler", &self.scheduler)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl StepProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container measuring text through the host's metrics.
    pub fn with_metrics(metrics: impl TextMetrics + 'static) -> Self {
        StepProgress {
            steps: Vec::new(),
            details: BTreeMap::new(),
            current_step: defaults::NOT_STARTED,
            layout: StepLayout::default(),
            palette: StepPalette::default(),
            tint: None,
            nodes: Vec::new(),
            classes: Vec::new(),
            scheduler: PassScheduler::new(),
            stats: PassStats::default(),
            metrics: Box::new(metrics),
            announce: None,
            announced: None,
        }
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    /// Apply one configuration change and arm the pass it invalidates.
    pub fn apply(&mut self, change: Change) {
        let pass = change.invalidates();
        let layout = &mut self.layout;
        match change {
            Change::Steps(steps) => self.steps = steps,
            Change::Details(details) => self.details = details,
            Change::Detail(index, Some(text)) => {
                self.details.insert(index, text);
            }
            Change::Detail(index, None) => {
                self.details.remove(&index);
            }
            Change::Layout(new) => *layout = new,
            Change::StepShape(kind) => layout.step_shape = kind,
            Change::FirstStepShape(kind) => layout.first_step_shape = kind,
            Change::LastStepShape(kind) => layout.last_step_shape = kind,
            Change::LineWidth(width) => layout.line_width = width,
            Change::ShapeScale(scale) => layout.shape_scale = scale,
            Change::Paddings { horizontal, vertical } => {
                layout.horizontal_padding = horizontal;
                layout.vertical_padding = vertical;
            }
            Change::LabelFont(font) => layout.label_font = font,
            Change::DetailFont(font) => layout.detail_font = font,
            Change::NumberFont(font) => layout.number_font = font,
            Change::ShowNumbers(show) => layout.show_numbers = show,
            Change::CurrentStep(step) => self.current_step = step,
            Change::Palette(palette) => self.palette = palette,
            Change::TintColor(tint) => self.tint = tint,
        }
        self.scheduler.request(pass);
    }

    pub fn set_steps<I, S>(&mut self, steps: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.apply(Change::Steps(steps.into_iter().map(Into::into).collect()));
    }

    /// Replace all details. Indices without a matching step, negative ones
    /// included, are ignored by rebuild.
    pub fn set_details<I, S>(&mut self, details: I)
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        self.apply(Change::Details(
            details.into_iter().map(|(i, s)| (i, s.into())).collect(),
        ));
    }

    pub fn set_detail(&mut self, index: i64, detail: Option<impl Into<String>>) {
        self.apply(Change::Detail(index, detail.map(Into::into)));
    }

    /// `-1` means nothing started, `steps.len()` means everything done.
    pub fn set_current_step(&mut self, step: i64) {
        self.apply(Change::CurrentStep(step));
    }

    pub fn set_step_shape(&mut self, kind: ShapeKind) {
        self.apply(Change::StepShape(kind));
    }

    pub fn set_first_step_shape(&mut self, kind: ShapeKind) {
        self.apply(Change::FirstStepShape(kind));
    }

    pub fn set_last_step_shape(&mut self, kind: ShapeKind) {
        self.apply(Change::LastStepShape(kind));
    }

    pub fn set_show_numbers(&mut self, show: bool) {
        self.apply(Change::ShowNumbers(show));
    }

    /// Ambient theme color used for unset current-step colors.
    pub fn set_tint_color(&mut self, tint: Option<Color>) {
        self.apply(Change::TintColor(tint));
    }

    /// Edit the layout in place; always arms a rebuild.
    pub fn update_layout(&mut self, edit: impl FnOnce(&mut StepLayout)) {
        let mut layout = self.layout;
        edit(&mut layout);
        self.apply(Change::Layout(layout));
    }

    /// Edit the palette in place; always arms a recolor.
    pub fn update_palette(&mut self, edit: impl FnOnce(&mut StepPalette)) {
        let mut palette = self.palette;
        edit(&mut palette);
        self.apply(Change::Palette(palette));
    }

    pub fn try_set_line_width(&mut self, width: f64) -> Result<(), ConfigError> {
        let width = checked_length("line width", width)?;
        self.apply(Change::LineWidth(width));
        Ok(())
    }

    pub fn try_set_paddings(&mut self, horizontal: f64, vertical: f64) -> Result<(), ConfigError> {
        let horizontal = checked_length("horizontal padding", horizontal)?;
        let vertical = checked_length("vertical padding", vertical)?;
        self.apply(Change::Paddings { horizontal, vertical });
        Ok(())
    }

    pub fn try_set_shape_scale(&mut self, scale: f64) -> Result<(), ConfigError> {
        Length::try_non_negative(scale).map_err(|source| ConfigError::InvalidScale { value: scale, source })?;
        self.apply(Change::ShapeScale(scale));
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Host hooks
    // ------------------------------------------------------------------------

    /// Called once for every newly armed pass; hosts use it to schedule a
    /// call to [`run_pending`](Self::run_pending) on their next turn.
    pub fn set_wake(&mut self, wake: impl FnMut(Pass) + 'static) {
        self.scheduler.set_wake(wake);
    }

    /// Called by recolor passes whenever the active step's label changes.
    pub fn on_current_step_changed(&mut self, announce: impl FnMut(Option<&str>) + 'static) {
        self.announce = Some(Box::new(announce));
    }

    // ------------------------------------------------------------------------
    // Passes
    // ------------------------------------------------------------------------

    /// Run the passes queued before this call. Passes armed while these run
    /// wait for the next call. Returns the number of passes executed.
    pub fn run_pending(&mut self) -> usize {
        let due = self.scheduler.queued();
        let mut ran = 0;
        while ran < due {
            let Some(pass) = self.scheduler.take_next() else {
                break;
            };
            match pass {
                Pass::Rebuild => {
                    self.stats.rebuilds += 1;
                    self.rebuild();
                }
                Pass::Recolor => {
                    self.stats.recolors += 1;
                    self.recolor();
                }
            }
            ran += 1;
        }
        ran
    }

    /// Run turns until nothing is queued.
    pub fn settle(&mut self) -> usize {
        let mut total = 0;
        while !self.scheduler.is_idle() {
            total += self.run_pending();
        }
        total
    }

    fn rebuild(&mut self) {
        let count = self.steps.len();
        debug!(steps = count, current_step = self.current_step, "rebuild pass");

        let shape_size = self.layout.shape_size();
        // Literal zero means "unset": default it once and keep the result.
        if self.layout.horizontal_padding.is_zero() {
            self.layout.horizontal_padding = shape_size / 2.0;
            debug!(padding = self.layout.horizontal_padding.raw(), "defaulted horizontal padding");
        }
        if self.layout.vertical_padding.is_zero() {
            self.layout.vertical_padding = shape_size;
            debug!(padding = self.layout.vertical_padding.raw(), "defaulted vertical padding");
        }

        let shown = 0..count as i64;
        let orphaned = self.details.keys().filter(|&&k| !shown.contains(&k)).count();
        if orphaned > 0 {
            warn!(orphaned, steps = count, "ignoring details outside the step range");
        }

        let layout = &self.layout;
        let style = NodeStyle {
            shape_size,
            line_width: layout.line_width,
            horizontal_padding: layout.horizontal_padding,
            vertical_padding: layout.vertical_padding,
            label_font: layout.label_font,
            detail_font: layout.detail_font,
            number_font: layout.number_font,
            show_number: layout.show_numbers,
        };

        let mut nodes = Vec::with_capacity(count);
        let mut top = Length::ZERO;
        for (index, label) in self.steps.iter().enumerate() {
            let mut node = StepNode::new(
                index,
                layout.shape_for(index, count),
                label.clone(),
                self.details.get(&(index as i64)).cloned(),
                style,
                self.metrics.as_ref(),
            );
            node.place(Point::new(Length::ZERO, top));
            top += node.preferred_size().h;
            nodes.push(node);
        }
        if let Some(last) = nodes.last_mut() {
            last.hide_connector();
        }
        self.nodes = nodes;

        self.recolor();
    }

    fn recolor(&mut self) {
        let count = self.nodes.len();
        debug!(steps = count, current_step = self.current_step, "recolor pass");
        if self.current_step < defaults::NOT_STARTED || self.current_step > count as i64 {
            warn!(current_step = self.current_step, steps = count, "current step out of range");
        }

        let resolved = self.palette.resolve(self.tint);
        self.classes = classify(self.current_step, count);
        for (node, class) in self.nodes.iter_mut().zip(&self.classes) {
            node.apply_colors(resolved.bundle(*class));
        }
        self.announce_current_step();
    }

    fn announce_current_step(&mut self) {
        let value = self.accessibility_value().map(str::to_owned);
        if value == self.announced {
            return;
        }
        if let Some(announce) = self.announce.as_mut() {
            announce(value.as_deref());
        }
        self.announced = value;
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn details(&self) -> &BTreeMap<i64, String> {
        &self.details
    }

    pub fn detail(&self, index: i64) -> Option<&str> {
        self.details.get(&index).map(String::as_str)
    }

    pub fn current_step(&self) -> i64 {
        self.current_step
    }

    pub fn layout(&self) -> &StepLayout {
        &self.layout
    }

    pub fn palette(&self) -> &StepPalette {
        &self.palette
    }

    pub fn tint_color(&self) -> Option<Color> {
        self.tint
    }

    /// Nodes from the last rebuild pass
    pub fn nodes(&self) -> &[StepNode] {
        &self.nodes
    }

    /// Class of each node, as of the last recolor
    pub fn classes(&self) -> &[StepClass] {
        &self.classes
    }

    /// Node frames in container coordinates, top to bottom
    pub fn frames(&self) -> Vec<Rect> {
        self.nodes.iter().map(StepNode::frame).collect()
    }

    /// `None` when there is nothing to show (no intrinsic size)
    pub fn preferred_size(&self) -> Option<Size<Length>> {
        if self.nodes.is_empty() {
            return None;
        }
        Some(self.nodes.iter().map(StepNode::preferred_size).fold(Size::ZERO, |acc, s| {
            Size::new(acc.w.max(s.w), acc.h + s.h)
        }))
    }

    /// Label of the active step, if `current_step` designates one
    pub fn accessibility_value(&self) -> Option<&str> {
        if !is_valid_current(self.current_step, self.steps.len()) {
            return None;
        }
        self.steps.get(self.current_step as usize).map(String::as_str)
    }

    pub fn needs_rebuild(&self) -> bool {
        self.scheduler.is_pending(Pass::Rebuild)
    }

    pub fn needs_recolor(&self) -> bool {
        self.scheduler.is_pending(Pass::Recolor)
    }

    pub fn stats(&self) -> PassStats {
        self.stats
    }
}

fn checked_length(field: &'static str, value: f64) -> Result<Length, ConfigError> {
    Length::try_non_negative(value).map_err(|source| ConfigError::InvalidLength { field, value, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_container_is_empty_and_idle() {
        let mut progress = StepProgress::new();
        assert_eq!(progress.current_step(), -1);
        assert_eq!(progress.preferred_size(), None);
        assert_eq!(progress.run_pending(), 0);
        assert!(progress.nodes().is_empty());
    }

    #[test]
    fn mutations_are_deferred() {
        let mut progress = StepProgress::new();
        progress.set_steps(["a", "b"]);
        assert!(progress.needs_rebuild());
        assert!(progress.nodes().is_empty());

        progress.run_pending();
        assert!(!progress.needs_rebuild());
        assert_eq!(progress.nodes().len(), 2);
    }

    #[test]
    fn zero_paddings_default_from_shape_size() {
        let mut progress = StepProgress::new();
        progress.update_layout(|l| l.label_font.size = Length(10.0));
        progress.set_steps(["a"]);
        progress.run_pending();
        assert_eq!(progress.layout().horizontal_padding, Length(6.0));
        assert_eq!(progress.layout().vertical_padding, Length(12.0));
    }

    #[test]
    fn explicit_paddings_survive_rebuild() {
        let mut progress = StepProgress::new();
        progress.try_set_paddings(3.0, 4.0).unwrap();
        progress.set_steps(["a"]);
        progress.run_pending();
        assert_eq!(progress.layout().horizontal_padding, Length(3.0));
        assert_eq!(progress.layout().vertical_padding, Length(4.0));
    }

    #[test]
    fn checked_setters_reject_bad_numbers() {
        let mut progress = StepProgress::new();
        assert!(matches!(
            progress.try_set_line_width(f64::NAN),
            Err(ConfigError::InvalidLength { field: "line width", .. })
        ));
        assert!(matches!(progress.try_set_shape_scale(-1.0), Err(ConfigError::InvalidScale { .. })));
        assert!(progress.scheduler.is_idle());

        progress.try_set_line_width(3.0).unwrap();
        assert_eq!(progress.layout().line_width, Length(3.0));
        assert!(progress.needs_rebuild());
    }

    #[test]
    fn recolor_armed_before_rebuild_does_not_run_on_stale_nodes() {
        let heard = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = std::rc::Rc::clone(&heard);
        let mut progress = StepProgress::new();
        progress.on_current_step_changed(move |label| sink.borrow_mut().push(label.map(str::to_string)));

        progress.set_current_step(0);
        progress.set_steps(["A", "B"]);
        assert_eq!(progress.run_pending(), 1);
        assert_eq!(progress.stats(), PassStats { rebuilds: 1, recolors: 0 });
        assert!(progress.scheduler.is_idle());
        assert_eq!(progress.classes(), [StepClass::Current, StepClass::Future]);
        assert_eq!(*heard.borrow(), [Some("A".to_string())]);
    }

    #[test]
    fn details_outside_the_step_range_are_ignored() {
        let mut progress = StepProgress::new();
        progress.set_steps(["a", "b"]);
        progress.set_details([(-1, "before"), (1, "second"), (2, "after"), (7, "nowhere")]);
        progress.settle();
        assert_eq!(progress.nodes().len(), 2);
        assert_eq!(progress.nodes()[0].detail(), None);
        assert_eq!(progress.nodes()[1].detail(), Some("second"));
        assert_eq!(progress.detail(-1), Some("before"));
        assert_eq!(progress.detail(7), Some("nowhere"));
    }

    #[test]
    fn clearing_a_detail_rebuilds_without_it() {
        let mut progress = StepProgress::new();
        progress.set_steps(["a"]);
        progress.set_detail(0, Some("x"));
        progress.settle();
        assert_eq!(progress.nodes()[0].detail(), Some("x"));

        progress.set_detail(0, None::<String>);
        progress.settle();
        assert_eq!(progress.nodes()[0].detail(), None);
    }
}
