// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Week bar: seven weekday cells in one row, no header.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use chrono::{Datelike, Weekday};
use circlet_grid::{
    Border, ChangeNotifier, GridAdapter, GridStyle, PointerEvent, PointerOutcome, StyleError,
    Surface,
};

use crate::clock::Clock;
use crate::link::Relay;
use crate::palette::{BorderPresets, CalendarPalette, CellFlags};
use crate::weekday::{ShortWeekdayNames, WeekdayFormatter, week_labels, weekday_at};

const DAYS: usize = 7;

/// Decides which weekdays of a week bar are highlighted.
pub trait WeekdayHighlighter {
    /// Whether `weekday` is highlighted.
    fn is_weekday_highlighted(&self, weekday: Weekday) -> bool {
        let _ = weekday;
        false
    }

    /// Whether clicks change this highlighter's state. A view makes itself interactive
    /// when such a highlighter is installed.
    fn changes_state_by_clicks(&self) -> bool {
        false
    }

    /// A cell for `weekday` was clicked, before the view's listener runs.
    fn weekday_clicked(&self, weekday: Weekday) {
        let _ = weekday;
    }

    /// Link to the grid consuming this highlighter.
    fn notifier(&self) -> &ChangeNotifier;

    /// Ask the bound grid to redraw.
    fn notify_data_set_changed(&self) {
        self.notifier().notify();
    }
}

/// Seven on/off flags, one per weekday, optionally toggled by clicks.
#[derive(Debug, Default)]
pub struct SimpleWeekdayHighlighter {
    states: Cell<[bool; DAYS]>,
    change_state_by_clicks: Cell<bool>,
    notifier: ChangeNotifier,
}

impl SimpleWeekdayHighlighter {
    /// Create a highlighter with every weekday off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Let clicks flip the clicked weekday.
    pub fn with_change_state_by_clicks(self, enabled: bool) -> Self {
        self.change_state_by_clicks.set(enabled);
        self
    }

    /// Whether clicks flip state.
    pub fn change_state_by_clicks(&self) -> bool {
        self.change_state_by_clicks.get()
    }

    /// Set one weekday. Call [`WeekdayHighlighter::notify_data_set_changed`] to redraw.
    pub fn set(&self, weekday: Weekday, on: bool) {
        let mut states = self.states.get();
        states[weekday.num_days_from_monday() as usize] = on;
        self.states.set(states);
    }

    /// Flip one weekday, returning its new state.
    pub fn toggle(&self, weekday: Weekday) -> bool {
        let on = !self.is_set(weekday);
        self.set(weekday, on);
        on
    }

    /// Whether `weekday` is on.
    pub fn is_set(&self, weekday: Weekday) -> bool {
        self.states.get()[weekday.num_days_from_monday() as usize]
    }
}

impl WeekdayHighlighter for SimpleWeekdayHighlighter {
    fn is_weekday_highlighted(&self, weekday: Weekday) -> bool {
        self.is_set(weekday)
    }

    fn changes_state_by_clicks(&self) -> bool {
        self.change_state_by_clicks.get()
    }

    fn weekday_clicked(&self, weekday: Weekday) {
        if self.change_state_by_clicks.get() {
            let on = self.toggle(weekday);
            tracing::debug!(%weekday, on, "weekday toggled by click");
            self.notify_data_set_changed();
        }
    }

    fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }
}

/// Adapter producing a week of weekday labels for a [`Surface`].
pub struct WeekGrid {
    first_day: Weekday,
    labels: Vec<String>,
    clock: Rc<dyn Clock>,
    highlight_today: bool,
    presets: BorderPresets,
    highlighter: Option<Rc<dyn WeekdayHighlighter>>,
    relay: Rc<Relay>,
    notifier: Rc<ChangeNotifier>,
}

impl core::fmt::Debug for WeekGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WeekGrid")
            .field("first_day", &self.first_day)
            .field("labels", &self.labels)
            .field("highlight_today", &self.highlight_today)
            .field("highlighter", &self.highlighter.is_some())
            .finish_non_exhaustive()
    }
}

impl WeekGrid {
    /// Create a week bar starting on `first_day`.
    pub fn new(first_day: Weekday, clock: Rc<dyn Clock>) -> Self {
        let notifier = Rc::new(ChangeNotifier::new());
        Self {
            first_day,
            labels: week_labels(first_day, &ShortWeekdayNames),
            clock,
            highlight_today: true,
            presets: BorderPresets::default(),
            highlighter: None,
            relay: Relay::new(notifier.clone()),
            notifier,
        }
    }

    /// Create a week bar that reads today from the system clock.
    #[cfg(feature = "std")]
    pub fn with_system_clock(first_day: Weekday) -> Self {
        Self::new(first_day, Rc::new(crate::clock::SystemClock))
    }

    /// Whether today's weekday gets the today ring. Defaults to true.
    pub fn with_highlight_today(mut self, enabled: bool) -> Self {
        self.highlight_today = enabled;
        self
    }

    /// Use `palette` for the border stacks.
    pub fn with_palette(mut self, palette: &CalendarPalette) -> Self {
        self.presets = BorderPresets::from_palette(palette);
        self
    }

    /// Use `formatter` for the labels.
    pub fn with_formatter(mut self, formatter: &dyn WeekdayFormatter) -> Self {
        self.labels = week_labels(self.first_day, formatter);
        self
    }

    /// First day of the week.
    pub fn first_day(&self) -> Weekday {
        self.first_day
    }

    /// Weekday shown at `index`, if it is a valid cell.
    pub fn weekday_at(&self, index: usize) -> Option<Weekday> {
        (index < DAYS).then(|| weekday_at(self.first_day, index))
    }

    /// Current highlight source.
    pub fn highlighter(&self) -> Option<&Rc<dyn WeekdayHighlighter>> {
        self.highlighter.as_ref()
    }

    /// Replace the highlight source and notify the bound surface.
    pub fn set_highlighter(&mut self, highlighter: Option<Rc<dyn WeekdayHighlighter>>) {
        let observer = self.relay.observer();
        if let Some(old) = self.highlighter.take() {
            old.notifier().detach(&observer);
        }
        if let Some(new) = &highlighter {
            new.notifier().attach(observer);
        }
        self.highlighter = highlighter;
        self.notify_data_set_changed();
    }

    /// State of the cell at `index`.
    pub fn cell_flags(&self, index: usize) -> CellFlags {
        let Some(weekday) = self.weekday_at(index) else {
            return CellFlags::empty();
        };
        let mut flags = CellFlags::IN_SPAN;
        flags.set(
            CellFlags::TODAY,
            self.highlight_today && self.clock.today().weekday() == weekday,
        );
        flags.set(
            CellFlags::HIGHLIGHTED,
            self.highlighter
                .as_ref()
                .is_some_and(|h| h.is_weekday_highlighted(weekday)),
        );
        flags
    }
}

impl GridAdapter for WeekGrid {
    fn count(&self) -> usize {
        DAYS
    }

    fn column_count(&self) -> usize {
        DAYS
    }

    fn text(&self, index: usize) -> &str {
        self.labels.get(index).map_or("", String::as_str)
    }

    fn borders(&self, index: usize) -> &[Border] {
        self.presets.select(self.cell_flags(index))
    }

    fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }
}

/// Listener for completed clicks on a weekday.
pub type WeekdayListener = Box<dyn FnMut(Weekday)>;

/// A [`Surface`] bound to a [`WeekGrid`], resolving clicks to weekdays.
pub struct WeekView {
    surface: Surface,
    grid: Rc<RefCell<WeekGrid>>,
    on_weekday_clicked: Option<WeekdayListener>,
    interactive_if_listening: bool,
}

impl core::fmt::Debug for WeekView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WeekView")
            .field("surface", &self.surface)
            .field("grid", &self.grid)
            .field("listening", &self.on_weekday_clicked.is_some())
            .field("interactive_if_listening", &self.interactive_if_listening)
            .finish()
    }
}

impl WeekView {
    /// Bind `grid` to a new surface with `style`.
    pub fn new(grid: WeekGrid, style: GridStyle) -> Result<Self, StyleError> {
        let mut surface = Surface::new(style)?;
        let grid = Rc::new(RefCell::new(grid));
        surface.set_adapter(Some(grid.clone()));
        Ok(Self {
            surface,
            grid,
            on_weekday_clicked: None,
            interactive_if_listening: true,
        })
    }

    /// The bound grid.
    pub fn grid(&self) -> &Rc<RefCell<WeekGrid>> {
        &self.grid
    }

    /// The drawing surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The drawing surface, for measuring and style changes.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Whether installing a listener or a click-toggling highlighter turns on press
    /// feedback. Defaults to true.
    pub fn set_interactive_if_listening(&mut self, enabled: bool) {
        self.interactive_if_listening = enabled;
    }

    /// Install or remove the weekday click listener.
    pub fn set_on_weekday_clicked(&mut self, listener: Option<WeekdayListener>) {
        if self.interactive_if_listening && listener.is_some() {
            self.surface.set_interactive(true);
        }
        self.on_weekday_clicked = listener;
    }

    /// Replace the grid's highlight source.
    pub fn set_highlighter(&mut self, highlighter: Option<Rc<dyn WeekdayHighlighter>>) {
        let clicky = highlighter
            .as_ref()
            .is_some_and(|h| h.changes_state_by_clicks());
        if self.interactive_if_listening && clicky {
            self.surface.set_interactive(true);
        }
        self.grid.borrow_mut().set_highlighter(highlighter);
    }

    /// Route a pointer event. A completed click first reaches the highlighter, then the
    /// listener.
    pub fn pointer_event(&mut self, event: PointerEvent) -> PointerOutcome {
        let outcome = self.surface.pointer_event(event);
        if let PointerOutcome::Clicked(index) = outcome {
            let (weekday, highlighter) = {
                let grid = self.grid.borrow();
                (grid.weekday_at(index), grid.highlighter().cloned())
            };
            let Some(weekday) = weekday else {
                return outcome;
            };
            if let Some(highlighter) = highlighter {
                highlighter.weekday_clicked(weekday);
            }
            if let Some(listener) = self.on_weekday_clicked.as_mut() {
                tracing::debug!(%weekday, "weekday clicked");
                listener(weekday);
            }
        }
        outcome
    }
}
