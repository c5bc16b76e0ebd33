// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month grid: a weekday header row followed by the whole weeks that cover one month.
//!
//! ## Layout
//!
//! - Indices `0..7` are the header, weekday labels rotated to the first day of the week.
//! - Index `7` is the first occurrence of the first day of the week on or before the 1st.
//! - Days run consecutively up to, but not including, the first occurrence of the first day
//!   of the week on or after the 1st of the following month.
//!
//! The in-month days occupy the half-open range `month_start_index()..month_stop_index()`;
//! every other cell, header included, takes the inactive border stack.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use chrono::{Datelike, Months, NaiveDate, Weekday};
use circlet_grid::{
    Border, ChangeNotifier, GridAdapter, GridStyle, PointerEvent, PointerOutcome, StyleError,
    Surface,
};
use kurbo::Rect;

use crate::clock::Clock;
use crate::link::HighlightLink;
use crate::palette::{BorderPresets, CalendarPalette, CellFlags};
use crate::weekday::{ShortWeekdayNames, WeekdayFormatter, week_labels};

const HEADER_CELLS: usize = 7;

/// Decides which dates of a month grid are highlighted.
pub trait DateHighlighter {
    /// Whether `date` is highlighted.
    fn is_date_highlighted(&self, date: NaiveDate) -> bool;

    /// Link to the grid consuming this highlighter.
    fn notifier(&self) -> &ChangeNotifier;

    /// Ask the bound grid to recompute highlights and redraw.
    fn notify_data_set_changed(&self) {
        self.notifier().notify();
    }
}

/// A highlighter backed by a set of dates.
///
/// Edits do not redraw on their own; call [`DateHighlighter::notify_data_set_changed`] after
/// a batch of changes.
#[derive(Debug, Default)]
pub struct SimpleDateHighlighter {
    dates: RefCell<alloc::collections::BTreeSet<NaiveDate>>,
    notifier: ChangeNotifier,
}

impl SimpleDateHighlighter {
    /// Create an empty highlighter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight `date`. Returns false if it already was.
    pub fn insert(&self, date: NaiveDate) -> bool {
        self.dates.borrow_mut().insert(date)
    }

    /// Stop highlighting `date`. Returns false if it was not highlighted.
    pub fn remove(&self, date: NaiveDate) -> bool {
        self.dates.borrow_mut().remove(&date)
    }

    /// Flip `date`, returning its new state.
    pub fn toggle(&self, date: NaiveDate) -> bool {
        let mut dates = self.dates.borrow_mut();
        if dates.remove(&date) {
            false
        } else {
            dates.insert(date)
        }
    }

    /// Drop every highlight.
    pub fn clear(&self) {
        self.dates.borrow_mut().clear();
    }

    /// Highlighted dates in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.dates.borrow().iter().copied().collect()
    }
}

impl DateHighlighter for SimpleDateHighlighter {
    fn is_date_highlighted(&self, date: NaiveDate) -> bool {
        self.dates.borrow().contains(&date)
    }

    fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }
}

/// Padded span of one month, whole weeks on both ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct MonthSpan {
    /// First displayed day.
    first: NaiveDate,
    /// The 1st of the month.
    month_start: NaiveDate,
    /// The 1st of the following month.
    month_stop: NaiveDate,
    /// Day after the last displayed day.
    end: NaiveDate,
}

impl MonthSpan {
    fn around(date: NaiveDate, first_day: Weekday) -> Option<Self> {
        let month_start = date.with_day(1)?;
        let month_stop = month_start.checked_add_months(Months::new(1))?;
        let mut first = month_start;
        while first.weekday() != first_day {
            first = first.pred_opt()?;
        }
        let mut end = month_stop;
        while end.weekday() != first_day {
            end = end.succ_opt()?;
        }
        Some(Self {
            first,
            month_start,
            month_stop,
            end,
        })
    }
}

/// Adapter producing a month of dates for a [`Surface`].
pub struct MonthGrid {
    first_day: Weekday,
    date: NaiveDate,
    clock: Rc<dyn Clock>,
    labels: Vec<String>,
    texts: Vec<String>,
    dates: Vec<NaiveDate>,
    month_start: usize,
    month_stop: usize,
    today: Option<usize>,
    presets: BorderPresets,
    highlighter: Option<Rc<dyn DateHighlighter>>,
    link: Rc<HighlightLink>,
    states: RefCell<Vec<bool>>,
    notifier: Rc<ChangeNotifier>,
}

impl core::fmt::Debug for MonthGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MonthGrid")
            .field("first_day", &self.first_day)
            .field("date", &self.date)
            .field("count", &self.texts.len())
            .field("month_start", &self.month_start)
            .field("month_stop", &self.month_stop)
            .field("today", &self.today)
            .field("highlighter", &self.highlighter.is_some())
            .finish_non_exhaustive()
    }
}

impl MonthGrid {
    /// Create a grid for the month containing `date`, weeks starting on `first_day`.
    pub fn new(first_day: Weekday, date: NaiveDate, clock: Rc<dyn Clock>) -> Self {
        let notifier = Rc::new(ChangeNotifier::new());
        let mut grid = Self {
            first_day,
            date,
            clock,
            labels: week_labels(first_day, &ShortWeekdayNames),
            texts: Vec::new(),
            dates: Vec::new(),
            month_start: HEADER_CELLS,
            month_stop: HEADER_CELLS,
            today: None,
            presets: BorderPresets::default(),
            highlighter: None,
            link: HighlightLink::new(notifier.clone()),
            states: RefCell::new(Vec::new()),
            notifier,
        };
        grid.rebuild();
        grid
    }

    /// Create a grid for the current month according to the system clock.
    #[cfg(feature = "std")]
    pub fn current(first_day: Weekday) -> Self {
        let clock = Rc::new(crate::clock::SystemClock);
        let today = clock.today();
        Self::new(first_day, today, clock)
    }

    /// Use `palette` for the border stacks.
    pub fn with_palette(mut self, palette: &CalendarPalette) -> Self {
        self.presets = BorderPresets::from_palette(palette);
        self
    }

    /// Use `formatter` for the header labels.
    pub fn with_formatter(mut self, formatter: &dyn WeekdayFormatter) -> Self {
        self.labels = week_labels(self.first_day, formatter);
        self.rebuild();
        self
    }

    /// First day of the week.
    pub fn first_day(&self) -> Weekday {
        self.first_day
    }

    /// Reference date; the grid shows its month.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Show the month containing `date` and notify the bound surface.
    ///
    /// Today is re-read from the clock.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.rebuild();
        self.notify_data_set_changed();
    }

    /// Re-read today from the clock and notify the bound surface.
    pub fn refresh(&mut self) {
        self.rebuild();
        self.notify_data_set_changed();
    }

    fn rebuild(&mut self) {
        self.texts.clear();
        self.texts.extend(self.labels.iter().cloned());
        self.dates.clear();
        self.month_start = HEADER_CELLS;
        self.month_stop = HEADER_CELLS;
        self.today = None;
        self.link.mark_stale();

        let Some(span) = MonthSpan::around(self.date, self.first_day) else {
            tracing::warn!(date = %self.date, "month span out of range; showing header only");
            return;
        };
        let today = self.clock.today();
        let mut day = span.first;
        let mut stop = None;
        while day != span.end {
            let index = self.texts.len();
            if day == span.month_start {
                self.month_start = index;
            }
            if day == span.month_stop {
                stop = Some(index);
            }
            if day == today {
                self.today = Some(index);
            }
            self.texts.push(day.day().to_string());
            self.dates.push(day);
            let Some(next) = day.succ_opt() else {
                break;
            };
            day = next;
        }
        // The next month may begin exactly on the first day of a week.
        self.month_stop = stop.unwrap_or(self.texts.len());
        tracing::debug!(
            first = %span.first,
            cells = self.texts.len(),
            month_start = self.month_start,
            month_stop = self.month_stop,
            today = ?self.today,
            "month grid rebuilt"
        );
    }

    /// Index of the 1st of the month.
    pub fn month_start_index(&self) -> usize {
        self.month_start
    }

    /// Index one past the last day of the month.
    pub fn month_stop_index(&self) -> usize {
        self.month_stop
    }

    /// Index of today, if it is displayed.
    pub fn today_index(&self) -> Option<usize> {
        self.today
    }

    /// Date shown at `index`; `None` for header cells and out-of-range indices.
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        index
            .checked_sub(HEADER_CELLS)
            .and_then(|i| self.dates.get(i))
            .copied()
    }

    /// Index showing `date`, if it is displayed.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let first = *self.dates.first()?;
        let offset = usize::try_from((date - first).num_days()).ok()?;
        (offset < self.dates.len()).then_some(offset + HEADER_CELLS)
    }

    /// Current highlight source.
    pub fn highlighter(&self) -> Option<&Rc<dyn DateHighlighter>> {
        self.highlighter.as_ref()
    }

    /// Replace the highlight source and notify the bound surface.
    pub fn set_highlighter(&mut self, highlighter: Option<Rc<dyn DateHighlighter>>) {
        let observer = self.link.observer();
        if let Some(old) = self.highlighter.take() {
            old.notifier().detach(&observer);
        }
        if let Some(new) = &highlighter {
            new.notifier().attach(observer);
        }
        self.highlighter = highlighter;
        self.link.mark_stale();
        self.notify_data_set_changed();
    }

    fn refresh_states(&self) {
        if !self.link.take_stale() {
            return;
        }
        let states: Vec<bool> = match &self.highlighter {
            Some(h) => self
                .dates
                .iter()
                .skip(self.month_start - HEADER_CELLS)
                .take(self.month_stop - self.month_start)
                .map(|d| h.is_date_highlighted(*d))
                .collect(),
            None => Vec::new(),
        };
        tracing::trace!(days = states.len(), "month highlights recomputed");
        *self.states.borrow_mut() = states;
    }

    /// Whether the cell at `index` is a highlighted in-month day.
    pub fn is_highlighted(&self, index: usize) -> bool {
        if !(self.month_start..self.month_stop).contains(&index) {
            return false;
        }
        self.refresh_states();
        self.states
            .borrow()
            .get(index - self.month_start)
            .copied()
            .unwrap_or(false)
    }

    /// State of the cell at `index`.
    pub fn cell_flags(&self, index: usize) -> CellFlags {
        if !(self.month_start..self.month_stop).contains(&index) {
            return CellFlags::empty();
        }
        let mut flags = CellFlags::IN_SPAN;
        flags.set(CellFlags::TODAY, self.today == Some(index));
        flags.set(CellFlags::HIGHLIGHTED, self.is_highlighted(index));
        flags
    }
}

impl GridAdapter for MonthGrid {
    fn count(&self) -> usize {
        self.texts.len()
    }

    fn column_count(&self) -> usize {
        HEADER_CELLS
    }

    fn first_row_is_header(&self) -> bool {
        true
    }

    fn text(&self, index: usize) -> &str {
        self.texts.get(index).map_or("", String::as_str)
    }

    fn borders(&self, index: usize) -> &[Border] {
        self.presets.select(self.cell_flags(index))
    }

    fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }
}

/// Listener for completed clicks on a date.
pub type DateListener = Box<dyn FnMut(NaiveDate)>;

/// A [`Surface`] bound to a [`MonthGrid`], resolving clicks to dates.
pub struct MonthView {
    surface: Surface,
    grid: Rc<RefCell<MonthGrid>>,
    on_date_clicked: Option<DateListener>,
    interactive_if_listening: bool,
}

impl core::fmt::Debug for MonthView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MonthView")
            .field("surface", &self.surface)
            .field("grid", &self.grid)
            .field("listening", &self.on_date_clicked.is_some())
            .field("interactive_if_listening", &self.interactive_if_listening)
            .finish()
    }
}

impl MonthView {
    /// Bind `grid` to a new surface with `style`.
    pub fn new(grid: MonthGrid, style: GridStyle) -> Result<Self, StyleError> {
        let mut surface = Surface::new(style)?;
        let grid = Rc::new(RefCell::new(grid));
        surface.set_adapter(Some(grid.clone()));
        Ok(Self {
            surface,
            grid,
            on_date_clicked: None,
            interactive_if_listening: true,
        })
    }

    /// The bound grid. Mutate it through the handle; the surface hears about it.
    pub fn grid(&self) -> &Rc<RefCell<MonthGrid>> {
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

    /// Whether installing a listener turns on press feedback. Defaults to true.
    pub fn set_interactive_if_listening(&mut self, enabled: bool) {
        self.interactive_if_listening = enabled;
    }

    /// Install or remove the date click listener.
    pub fn set_on_date_clicked(&mut self, listener: Option<DateListener>) {
        if self.interactive_if_listening && listener.is_some() {
            self.surface.set_interactive(true);
        }
        self.on_date_clicked = listener;
    }

    /// Device-space bounds of the cell showing `date`.
    pub fn date_bounds(&self, date: NaiveDate) -> Option<Rect> {
        let index = self.grid.borrow().index_of(date)?;
        self.surface.cell_bounds(index)
    }

    /// Route a pointer event; a completed click on a date reaches the listener.
    ///
    /// The grid is not borrowed while the listener runs, so it may change the date or
    /// highlights through [`MonthView::grid`].
    pub fn pointer_event(&mut self, event: PointerEvent) -> PointerOutcome {
        let outcome = self.surface.pointer_event(event);
        if let PointerOutcome::Clicked(index) = outcome {
            let date = self.grid.borrow().date_at(index);
            if let (Some(date), Some(listener)) = (date, self.on_date_clicked.as_mut()) {
                tracing::debug!(%date, "date clicked");
                listener(date);
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use circlet_grid::{Constraint, Invalidation};
    use core::cell::Cell;
    use kurbo::Point;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn grid_on(date: NaiveDate, today: NaiveDate) -> MonthGrid {
        MonthGrid::new(Weekday::Mon, date, Rc::new(FixedClock::new(today)))
    }

    #[test]
    fn february_2024_monday_first() {
        let g = grid_on(ymd(2024, 2, 1), ymd(2024, 2, 14));
        assert_eq!(g.count(), 42);
        assert_eq!(g.date_at(7), Some(ymd(2024, 1, 29)));
        assert_eq!(g.date_at(41), Some(ymd(2024, 3, 3)));
        assert_eq!(g.date_at(42), None);
        assert_eq!(g.month_start_index(), 10);
        assert_eq!(g.date_at(10), Some(ymd(2024, 2, 1)));
        assert_eq!(g.month_stop_index(), 39);
        assert_eq!(g.date_at(39), Some(ymd(2024, 3, 1)));
        assert_eq!(g.today_index(), g.index_of(ymd(2024, 2, 14)));
        assert_eq!(g.text(0), "Mon");
        assert_eq!(g.text(6), "Sun");
        assert_eq!(g.text(7), "29");
        assert_eq!(g.text(10), "1");
    }

    #[test]
    fn every_month_is_whole_weeks() {
        let firsts = [Weekday::Mon, Weekday::Sun, Weekday::Sat, Weekday::Wed];
        for first_day in firsts {
            for year in [2023, 2024, 2026] {
                for month in 1..=12 {
                    let date = ymd(year, month, 15);
                    let g = MonthGrid::new(first_day, date, Rc::new(FixedClock::new(date)));
                    let count = g.count();
                    assert_eq!(count % 7, 0, "{first_day} {year}-{month}");
                    assert!(count / 7 >= 5, "{first_day} {year}-{month}");
                    assert!(g.month_start_index() < g.month_stop_index());
                    assert_eq!(g.date_at(7).map(|d| d.weekday()), Some(first_day));
                    assert_eq!(g.date_at(g.month_start_index()).map(|d| d.day()), Some(1));
                    let last = g.date_at(g.month_stop_index() - 1).unwrap();
                    assert_eq!(last.month(), month);
                    assert_eq!(last.succ_opt().unwrap().day(), 1);
                }
            }
        }
    }

    #[test]
    fn month_ending_on_week_boundary() {
        // July 2024 starts on a Monday, so June's grid ends with June 30.
        let g = grid_on(ymd(2024, 6, 10), ymd(2000, 1, 1));
        assert_eq!(g.date_at(7), Some(ymd(2024, 5, 27)));
        assert_eq!(g.month_start_index(), 12);
        assert_eq!(g.month_stop_index(), g.count());
        assert_eq!(g.count(), 7 + 35);
        assert_eq!(g.today_index(), None);

        // February 2021 is exactly four weeks.
        let g = grid_on(ymd(2021, 2, 1), ymd(2000, 1, 1));
        assert_eq!((g.month_start_index(), g.month_stop_index(), g.count()), (7, 35, 35));
    }

    #[test]
    fn out_of_span_cells_are_inactive() {
        let mut g = grid_on(ymd(2024, 2, 1), ymd(2024, 1, 30));
        let highlighter = Rc::new(SimpleDateHighlighter::new());
        highlighter.insert(ymd(2024, 1, 30));
        g.set_highlighter(Some(highlighter));
        // Today is displayed but outside the month.
        let today = g.today_index().unwrap();
        assert!(today < g.month_start_index());
        for i in (0..g.month_start_index()).chain(g.month_stop_index()..g.count()) {
            assert_eq!(g.cell_flags(i), CellFlags::empty());
            assert_eq!(g.borders(i), &BorderPresets::default().empty[..]);
        }
    }

    #[test]
    fn today_and_highlight_pick_presets() {
        let mut g = grid_on(ymd(2024, 2, 1), ymd(2024, 2, 14));
        let presets = BorderPresets::default();
        let h = Rc::new(SimpleDateHighlighter::new());
        h.insert(ymd(2024, 2, 14));
        h.insert(ymd(2024, 2, 20));
        let today = g.index_of(ymd(2024, 2, 14)).unwrap();
        let other = g.index_of(ymd(2024, 2, 20)).unwrap();
        let plain = g.index_of(ymd(2024, 2, 21)).unwrap();
        assert_eq!(g.borders(today), &presets.today[..]);

        g.set_highlighter(Some(h.clone()));
        assert_eq!(g.borders(today), &presets.active_today[..]);
        assert_eq!(g.borders(other), &presets.active[..]);
        assert_eq!(g.borders(plain), &presets.regular[..]);

        h.remove(ymd(2024, 2, 20));
        // Not visible until the highlighter says so.
        assert!(g.is_highlighted(other));
        h.notify_data_set_changed();
        assert!(!g.is_highlighted(other));
    }

    #[test]
    fn highlight_notify_redraws_bound_surface_once() {
        let clock = Rc::new(FixedClock::new(ymd(2024, 2, 14)));
        let mut view = MonthView::new(
            MonthGrid::new(Weekday::Mon, ymd(2024, 2, 1), clock),
            GridStyle::default(),
        )
        .unwrap();
        let h = Rc::new(SimpleDateHighlighter::new());
        view.grid().borrow_mut().set_highlighter(Some(h.clone()));
        let _ = view.surface_mut().take_invalidation();

        let before = view.surface().redraw_requests();
        h.insert(ymd(2024, 2, 2));
        h.notify_data_set_changed();
        assert_eq!(view.surface().redraw_requests(), before + 1);
        assert!(view.surface_mut().take_invalidation().contains(Invalidation::PAINT));

        // A replaced highlighter no longer reaches the grid.
        let replacement: Rc<dyn DateHighlighter> = Rc::new(SimpleDateHighlighter::new());
        view.grid().borrow_mut().set_highlighter(Some(replacement));
        assert!(!h.notifier().is_bound());
        let before = view.surface().redraw_requests();
        h.notify_data_set_changed();
        assert_eq!(view.surface().redraw_requests(), before);
    }

    #[test]
    fn set_date_rebuilds_and_notifies() {
        let mut view = MonthView::new(
            grid_on(ymd(2024, 2, 1), ymd(2024, 2, 14)),
            GridStyle::default(),
        )
        .unwrap();
        let _ = view.surface_mut().measure(Constraint::Unspecified, Constraint::Unspecified);
        let _ = view.surface_mut().take_invalidation();
        view.grid().borrow_mut().set_date(ymd(2024, 9, 5));
        let g = view.grid().borrow();
        assert_eq!(g.date_at(g.month_start_index()), Some(ymd(2024, 9, 1)));
        assert_eq!(g.count(), 49);
        assert_eq!(g.today_index(), None);
        drop(g);
        // September 2024 needs six weeks with Monday first, February five.
        assert_eq!(
            view.surface_mut().take_invalidation(),
            Invalidation::LAYOUT | Invalidation::PAINT
        );
    }

    #[test]
    fn click_resolves_to_date() {
        let mut view = MonthView::new(
            grid_on(ymd(2024, 2, 1), ymd(2024, 2, 14)),
            GridStyle::default(),
        )
        .unwrap();
        let _ = view
            .surface_mut()
            .measure(Constraint::Exact(616.0), Constraint::AtMost(1000.0));
        let clicked = Rc::new(Cell::new(None));
        let sink = clicked.clone();
        view.set_on_date_clicked(Some(Box::new(move |d: NaiveDate| sink.set(Some(d)))));
        assert!(view.surface().is_interactive());

        let p = view.date_bounds(ymd(2024, 2, 29)).unwrap().center();
        assert!(matches!(
            view.pointer_event(PointerEvent::Down(p)),
            PointerOutcome::FeedbackStarted(_)
        ));
        let _ = view.pointer_event(PointerEvent::Up(p));
        assert_eq!(clicked.get(), Some(ymd(2024, 2, 29)));

        // Header cells never resolve to a date.
        clicked.set(None);
        let header = view.surface().cell_bounds(3).unwrap().center();
        let _ = view.pointer_event(PointerEvent::Down(header));
        assert_eq!(
            view.pointer_event(PointerEvent::Up(header)),
            PointerOutcome::Clicked(3)
        );
        assert_eq!(clicked.get(), None);
    }

    #[test]
    fn release_elsewhere_reports_no_date() {
        let mut view = MonthView::new(
            grid_on(ymd(2024, 2, 1), ymd(2024, 2, 14)),
            GridStyle::default(),
        )
        .unwrap();
        let clicked = Rc::new(Cell::new(None));
        let sink = clicked.clone();
        view.set_on_date_clicked(Some(Box::new(move |d: NaiveDate| sink.set(Some(d)))));

        let p = view.date_bounds(ymd(2024, 2, 20)).unwrap().center();
        let _ = view.pointer_event(PointerEvent::Down(p));
        assert_eq!(
            view.pointer_event(PointerEvent::Up(Point::new(-500.0, -500.0))),
            PointerOutcome::FeedbackEnded
        );
        assert_eq!(clicked.get(), None);

        let q = view.date_bounds(ymd(2024, 2, 21)).unwrap().center();
        let _ = view.pointer_event(PointerEvent::Down(p));
        assert_eq!(
            view.pointer_event(PointerEvent::Up(q)),
            PointerOutcome::FeedbackEnded
        );
        assert_eq!(clicked.get(), None);
    }

    #[test]
    fn dates_at_range_limits_show_header_only() {
        for date in [NaiveDate::MAX, NaiveDate::MIN] {
            let g = grid_on(date, ymd(2024, 2, 14));
            assert_eq!(g.count(), 7);
            assert_eq!(g.month_start_index(), 7);
            assert_eq!(g.month_stop_index(), 7);
            assert_eq!(g.today_index(), None);
            assert_eq!(g.date_at(7), None);
            assert_eq!(g.text(0), "Mon");
        }
    }

    #[test]
    fn listener_may_change_month() {
        let mut view = MonthView::new(
            grid_on(ymd(2024, 2, 1), ymd(2024, 2, 14)),
            GridStyle::default(),
        )
        .unwrap();
        let grid = view.grid().clone();
        view.set_on_date_clicked(Some(Box::new(move |d: NaiveDate| {
            grid.borrow_mut().set_date(d);
        })));
        let p = view.date_bounds(ymd(2024, 3, 2)).unwrap().center();
        let _ = view.pointer_event(PointerEvent::Down(p));
        let _ = view.pointer_event(PointerEvent::Up(p));
        assert_eq!(view.grid().borrow().date(), ymd(2024, 3, 2));
    }

    #[test]
    fn custom_formatter_and_palette() {
        let palette = CalendarPalette {
            regular: circlet_grid::Rgba::rgb(10, 20, 30),
            ..CalendarPalette::default()
        };
        let initials = |d: Weekday| -> String { d.to_string()[..1].to_string() };
        let g = grid_on(ymd(2024, 2, 1), ymd(2024, 2, 14))
            .with_palette(&palette)
            .with_formatter(&initials);
        assert_eq!(g.text(0), "M");
        assert_eq!(g.borders(20)[0].color, palette.regular);
    }
}
