// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press tracking: turn raw pointer events into cell clicks.
//!
//! ## Usage
//!
//! 1) Feed every pointer event for a surface to [`PressTracker::handle`] together with the
//!    current layout.
//! 2) Start a press effect on [`PointerOutcome::FeedbackStarted`] and stop it on
//!    [`PointerOutcome::FeedbackEnded`] or [`PointerOutcome::Clicked`].
//! 3) Deliver [`PointerOutcome::Clicked`] to whatever interprets cell indices.
//!
//! ## Minimal example
//!
//! ```
//! use circlet_grid::{GridLayout, GridShape, GridStyle, PointerEvent, PointerOutcome, PressTracker};
//! use kurbo::Point;
//!
//! let layout = GridLayout::natural(&GridStyle::default(), GridShape::new(7, 7, false));
//! let mut tracker = PressTracker::new();
//! let p = Point::new(50.0, 10.0);
//! assert!(matches!(tracker.handle(PointerEvent::Down(p), Some(&layout), true), PointerOutcome::FeedbackStarted(_)));
//! assert_eq!(tracker.handle(PointerEvent::Up(p), Some(&layout), true), PointerOutcome::Clicked(1));
//! ```

use kurbo::{Point, Rect};

use crate::layout::GridLayout;

/// A pointer event in device coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer went down.
    Down(Point),
    /// The pointer moved while down.
    Move(Point),
    /// The pointer was released.
    Up(Point),
    /// The gesture was taken away (for example by a scrolling parent).
    Cancel,
}

/// Where and how large a press effect should be.
///
/// Geometry is in logical units; draw it under the layout's transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PressFeedback {
    /// Pressed cell.
    pub index: usize,
    /// Bounds of the pressed cell.
    pub bounds: Rect,
    /// Point where the press landed.
    pub hotspot: Point,
    /// Suggested effect radius: half the cell pitch.
    pub radius: f64,
}

/// What a pointer event amounted to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerOutcome {
    /// Nothing to do.
    Ignored,
    /// A clickable cell was pressed; show feedback.
    FeedbackStarted(PressFeedback),
    /// The press left its cell or was canceled; hide feedback.
    FeedbackEnded,
    /// A press on this cell completed; any feedback is over.
    Clicked(usize),
}

/// Press state machine for one pointer.
///
/// A press remembers the cell it started on. Moving onto a different cell abandons it, and
/// only a release over that same cell clicks it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PressTracker {
    current: Option<usize>,
    feedback: Option<PressFeedback>,
}

impl PressTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell the live press started on, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Feedback for the live press, if any.
    pub fn feedback(&self) -> Option<&PressFeedback> {
        self.feedback.as_ref()
    }

    /// Drop any live press without reporting it.
    pub fn reset(&mut self) {
        self.current = None;
        self.feedback = None;
    }

    /// Advance the state machine.
    ///
    /// Header cells can be pressed and clicked but never start feedback, and feedback only
    /// starts when `interactive` is set. Without a layout every event is ignored.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        layout: Option<&GridLayout>,
        interactive: bool,
    ) -> PointerOutcome {
        match event {
            PointerEvent::Down(pt) => {
                let ended = self.end_feedback();
                let Some(layout) = layout else {
                    self.current = None;
                    return ended;
                };
                self.current = layout.hit_test(pt);
                let Some(index) = self.current else {
                    return ended;
                };
                if !interactive || layout.shape().is_header(index) {
                    return ended;
                }
                let Some(bounds) = layout.logical_cell_bounds(index) else {
                    return ended;
                };
                let feedback = PressFeedback {
                    index,
                    bounds,
                    hotspot: layout.to_logical(pt),
                    radius: layout.style().full_cell_size() / 2.0,
                };
                self.feedback = Some(feedback);
                PointerOutcome::FeedbackStarted(feedback)
            }
            PointerEvent::Move(pt) => {
                let touched = layout.and_then(|l| l.hit_test(pt));
                if touched != self.current {
                    self.current = None;
                    self.end_feedback()
                } else {
                    PointerOutcome::Ignored
                }
            }
            PointerEvent::Up(pt) => {
                let pressed = self.current.take();
                let ended = self.end_feedback();
                let released = layout.and_then(|l| l.hit_test(pt));
                match pressed {
                    Some(index) if released == Some(index) => PointerOutcome::Clicked(index),
                    _ => ended,
                }
            }
            PointerEvent::Cancel => {
                self.current = None;
                self.end_feedback()
            }
        }
    }

    fn end_feedback(&mut self) -> PointerOutcome {
        match self.feedback.take() {
            Some(_) => PointerOutcome::FeedbackEnded,
            None => PointerOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridShape;
    use crate::style::GridStyle;

    fn month_layout() -> GridLayout {
        GridLayout::natural(&GridStyle::default(), GridShape::new(42, 7, true))
    }

    // Body cell index 8: column 1, first body row.
    const BODY: Point = Point::new(50.0, 30.0);
    const OTHER_BODY: Point = Point::new(100.0, 30.0);
    const HEADER: Point = Point::new(50.0, 5.0);

    #[test]
    fn press_and_release_clicks() {
        let l = month_layout();
        let mut t = PressTracker::new();
        let PointerOutcome::FeedbackStarted(fb) = t.handle(PointerEvent::Down(BODY), Some(&l), true)
        else {
            panic!("expected feedback");
        };
        assert_eq!(fb.index, 8);
        assert_eq!(fb.bounds, Rect::new(44.0, 24.0, 88.0, 68.0));
        assert_eq!(fb.hotspot, BODY);
        assert_eq!(fb.radius, 22.0);
        assert_eq!(t.handle(PointerEvent::Move(BODY), Some(&l), true), PointerOutcome::Ignored);
        assert_eq!(t.handle(PointerEvent::Up(BODY), Some(&l), true), PointerOutcome::Clicked(8));
        assert_eq!(t, PressTracker::new());
    }

    #[test]
    fn moving_off_cell_cancels() {
        let l = month_layout();
        let mut t = PressTracker::new();
        let _ = t.handle(PointerEvent::Down(BODY), Some(&l), true);
        assert_eq!(
            t.handle(PointerEvent::Move(OTHER_BODY), Some(&l), true),
            PointerOutcome::FeedbackEnded
        );
        // Coming back does not revive the press.
        let _ = t.handle(PointerEvent::Move(BODY), Some(&l), true);
        assert_eq!(t.handle(PointerEvent::Up(BODY), Some(&l), true), PointerOutcome::Ignored);
    }

    #[test]
    fn release_off_grid_does_not_click() {
        let l = month_layout();
        let mut t = PressTracker::new();
        let _ = t.handle(PointerEvent::Down(BODY), Some(&l), true);
        assert_eq!(
            t.handle(PointerEvent::Up(Point::new(-500.0, -500.0)), Some(&l), true),
            PointerOutcome::FeedbackEnded
        );
        assert_eq!(t, PressTracker::new());
    }

    #[test]
    fn release_on_other_cell_does_not_click() {
        let l = month_layout();
        let mut t = PressTracker::new();
        let _ = t.handle(PointerEvent::Down(BODY), Some(&l), true);
        // No move in between: the release alone decides.
        assert_eq!(
            t.handle(PointerEvent::Up(Point::new(200.0, 150.0)), Some(&l), true),
            PointerOutcome::FeedbackEnded
        );

        // Without feedback there is nothing to end.
        let _ = t.handle(PointerEvent::Down(BODY), Some(&l), false);
        assert_eq!(t.handle(PointerEvent::Up(OTHER_BODY), Some(&l), false), PointerOutcome::Ignored);
    }

    #[test]
    fn cancel_never_clicks() {
        let l = month_layout();
        let mut t = PressTracker::new();
        let _ = t.handle(PointerEvent::Down(BODY), Some(&l), true);
        assert_eq!(t.handle(PointerEvent::Cancel, Some(&l), true), PointerOutcome::FeedbackEnded);
        assert_eq!(t.handle(PointerEvent::Up(BODY), Some(&l), true), PointerOutcome::Ignored);
    }

    #[test]
    fn header_press_has_no_feedback_but_clicks() {
        let l = month_layout();
        let mut t = PressTracker::new();
        assert_eq!(t.handle(PointerEvent::Down(HEADER), Some(&l), true), PointerOutcome::Ignored);
        assert_eq!(t.current(), Some(1));
        assert_eq!(t.handle(PointerEvent::Up(HEADER), Some(&l), true), PointerOutcome::Clicked(1));
    }

    #[test]
    fn non_interactive_clicks_without_feedback() {
        let l = month_layout();
        let mut t = PressTracker::new();
        assert_eq!(t.handle(PointerEvent::Down(BODY), Some(&l), false), PointerOutcome::Ignored);
        assert!(t.feedback().is_none());
        assert_eq!(t.handle(PointerEvent::Up(BODY), Some(&l), false), PointerOutcome::Clicked(8));
    }

    #[test]
    fn misses_and_missing_layout_are_ignored() {
        let l = month_layout();
        let mut t = PressTracker::new();
        let outside = Point::new(-5.0, -5.0);
        assert_eq!(t.handle(PointerEvent::Down(outside), Some(&l), true), PointerOutcome::Ignored);
        assert_eq!(t.handle(PointerEvent::Up(outside), Some(&l), true), PointerOutcome::Ignored);
        assert_eq!(t.handle(PointerEvent::Down(BODY), None, true), PointerOutcome::Ignored);
        assert_eq!(t.handle(PointerEvent::Up(BODY), None, true), PointerOutcome::Ignored);
    }
}
