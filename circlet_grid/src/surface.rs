// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface: adapter binding, measurement, painting and pointer routing.

use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};

use bitflags::bitflags;
use kurbo::{Point, Rect, Size};

use crate::adapter::{ChangeObserver, GridAdapter};
use crate::color::{Rgba, resolve_background};
use crate::gesture::{PointerEvent, PointerOutcome, PressFeedback, PressTracker};
use crate::layout::{Constraint, GridLayout, GridShape};
use crate::paint::{Painter, paint_cells};
use crate::style::{GridStyle, StyleError};

/// Adapter handle a [`Surface`] can bind to.
pub type SharedAdapter = Rc<RefCell<dyn GridAdapter>>;

bitflags! {
    /// Work a host has to schedule for a surface.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        /// Measure again.
        const LAYOUT = 0b0000_0001;
        /// Draw again.
        const PAINT  = 0b0000_0010;
    }
}

/// The surface end of the notifier link: records requests for the host to pick up.
#[derive(Debug, Default)]
struct RedrawSignal {
    pending: Cell<Invalidation>,
    redraws: Cell<u64>,
}

impl RedrawSignal {
    fn request(&self, what: Invalidation) {
        self.pending.set(self.pending.get() | what);
        if what.contains(Invalidation::PAINT) {
            self.redraws.set(self.redraws.get() + 1);
        }
    }
}

impl ChangeObserver for RedrawSignal {
    fn data_changed(&self) {
        tracing::trace!("adapter data changed; redraw requested");
        self.request(Invalidation::PAINT);
    }
}

/// A grid of ring-decorated cells driven by a [`GridAdapter`].
///
/// ## Host loop
///
/// - [`Surface::measure`] with the host's constraints whenever
///   [`Surface::take_invalidation`] reports [`Invalidation::LAYOUT`].
/// - [`Surface::paint`] whenever it reports [`Invalidation::PAINT`].
/// - Route pointer events through [`Surface::pointer_event`].
pub struct Surface {
    style: GridStyle,
    adapter: Option<SharedAdapter>,
    signal: Rc<RedrawSignal>,
    layout: Option<GridLayout>,
    tracker: PressTracker,
    interactive: bool,
}

impl core::fmt::Debug for Surface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Surface")
            .field("style", &self.style)
            .field("bound", &self.adapter.is_some())
            .field("layout", &self.layout)
            .field("tracker", &self.tracker)
            .field("interactive", &self.interactive)
            .finish_non_exhaustive()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::with_valid_style(GridStyle::default())
    }
}

impl Surface {
    /// Create an unbound surface.
    pub fn new(style: GridStyle) -> Result<Self, StyleError> {
        style.validate()?;
        Ok(Self::with_valid_style(style))
    }

    fn with_valid_style(style: GridStyle) -> Self {
        Self {
            style,
            adapter: None,
            signal: Rc::new(RedrawSignal::default()),
            layout: None,
            tracker: PressTracker::new(),
            interactive: false,
        }
    }

    /// Current style.
    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    /// Replace the style; requests layout and paint.
    pub fn set_style(&mut self, style: GridStyle) -> Result<(), StyleError> {
        style.validate()?;
        self.style = style;
        self.layout = None;
        self.signal
            .request(Invalidation::LAYOUT | Invalidation::PAINT);
        Ok(())
    }

    /// Currently bound adapter.
    pub fn adapter(&self) -> Option<&SharedAdapter> {
        self.adapter.as_ref()
    }

    /// Bind `adapter`, or unbind with `None`.
    ///
    /// The previous adapter's link is cleared before the new one is attached. Any press in
    /// progress is dropped, and layout and paint are requested.
    ///
    /// # Panics
    ///
    /// Panics if either adapter is mutably borrowed at the time of the call.
    pub fn set_adapter(&mut self, adapter: Option<SharedAdapter>) {
        let observer = self.observer();
        if let Some(old) = self.adapter.take() {
            old.borrow().notifier().detach(&observer);
        }
        if let Some(new) = &adapter {
            new.borrow().notifier().attach(observer);
        }
        tracing::debug!(bound = adapter.is_some(), "surface adapter changed");
        self.adapter = adapter;
        self.layout = None;
        self.tracker.reset();
        self.signal
            .request(Invalidation::LAYOUT | Invalidation::PAINT);
    }

    fn observer(&self) -> Weak<dyn ChangeObserver> {
        let signal: Rc<dyn ChangeObserver> = self.signal.clone();
        Rc::downgrade(&signal)
    }

    /// True if `adapter` currently reports to this surface.
    pub fn is_observed_by(&self, adapter: &dyn GridAdapter) -> bool {
        adapter.notifier().is_bound_to(&self.observer())
    }

    /// Whether pressing a cell starts feedback.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Enable or disable press feedback. Clicks are reported either way.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    fn adapter_shape(&self) -> Option<GridShape> {
        self.adapter.as_ref().map(|a| a.borrow().shape())
    }

    /// Measure against the host's constraints and return the final size.
    ///
    /// Without an adapter this is the host default size for the constraints.
    pub fn measure(&mut self, width: Constraint, height: Constraint) -> Size {
        let Some(shape) = self.adapter_shape() else {
            self.layout = None;
            return Size::new(width.default_extent(), height.default_extent());
        };
        let layout = GridLayout::measure(&self.style, shape, width, height);
        self.layout = Some(layout);
        let pending = self.signal.pending.get();
        self.signal.pending.set(pending - Invalidation::LAYOUT);
        layout.size
    }

    /// Last measured layout, if it still matches the adapter.
    pub fn layout(&self) -> Option<GridLayout> {
        let shape = self.adapter_shape()?;
        match self.layout {
            Some(layout) if layout.shape == shape => Some(layout),
            _ => None,
        }
    }

    /// Layout used for painting and hit testing: the measured one, or the natural layout
    /// when the surface has not been measured for the adapter's current shape.
    pub fn effective_layout(&self) -> Option<GridLayout> {
        let shape = self.adapter_shape()?;
        Some(match self.layout {
            Some(layout) if layout.shape == shape => layout,
            _ => GridLayout::natural(&self.style, shape),
        })
    }

    /// Take and clear the pending work.
    ///
    /// [`Invalidation::LAYOUT`] is added when the adapter's shape no longer matches the
    /// last measurement.
    pub fn take_invalidation(&mut self) -> Invalidation {
        let mut pending = self.signal.pending.replace(Invalidation::empty());
        let stale = match (self.adapter_shape(), &self.layout) {
            (Some(shape), Some(layout)) => layout.shape != shape,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if stale {
            pending |= Invalidation::LAYOUT;
        }
        pending
    }

    /// Total redraws requested since creation.
    pub fn redraw_requests(&self) -> u64 {
        self.signal.redraws.get()
    }

    /// Paint every cell.
    ///
    /// `backgrounds` is the ambient container chain, innermost first; the first
    /// non-transparent entry is the background, white if there is none.
    pub fn paint<P>(&self, painter: &mut P, backgrounds: &[Rgba])
    where
        P: Painter + ?Sized,
    {
        let Some(adapter) = &self.adapter else {
            return;
        };
        let Some(layout) = self.effective_layout() else {
            return;
        };
        let background = resolve_background(backgrounds.iter().copied());
        paint_cells(&layout, &*adapter.borrow(), background, painter);
    }

    /// Cell under a device-space point.
    pub fn hit_test(&self, pt: Point) -> Option<usize> {
        self.effective_layout()?.hit_test(pt)
    }

    /// Device-space bounds of a cell.
    pub fn cell_bounds(&self, index: usize) -> Option<Rect> {
        self.effective_layout()?.cell_bounds(index)
    }

    /// Feedback for the press in progress, if any.
    pub fn press_feedback(&self) -> Option<&PressFeedback> {
        self.tracker.feedback()
    }

    /// Route a pointer event. Feedback changes request a redraw.
    pub fn pointer_event(&mut self, event: PointerEvent) -> PointerOutcome {
        let layout = self.effective_layout();
        let outcome = self
            .tracker
            .handle(event, layout.as_ref(), self.interactive);
        match outcome {
            PointerOutcome::Ignored => {}
            PointerOutcome::FeedbackStarted(_) | PointerOutcome::FeedbackEnded => {
                self.signal.request(Invalidation::PAINT);
            }
            PointerOutcome::Clicked(index) => {
                tracing::debug!(index, "cell clicked");
                self.signal.request(Invalidation::PAINT);
            }
        }
        outcome
    }
}
