// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circlet Calendar: month and week date grids for the [`circlet_grid`] surface.
//!
//! - [`MonthGrid`]: a weekday header row plus the whole weeks covering one month. Days of
//!   neighboring months are shown with the inactive style; today and highlighted days get
//!   their own border stacks.
//! - [`WeekGrid`]: seven weekday cells in a single row, with today's weekday ringed.
//! - [`MonthView`] / [`WeekView`]: a [`Surface`](circlet_grid::Surface) bound to a grid that
//!   resolves clicks to a [`NaiveDate`](chrono::NaiveDate) or a [`Weekday`](chrono::Weekday).
//!
//! Highlights come from [`DateHighlighter`] and [`WeekdayHighlighter`] implementations. A
//! highlighter's `notify_data_set_changed` makes the grid recompute and its surface redraw.
//!
//! "Today" is read from a [`Clock`]. [`FixedClock`] makes grids deterministic; with the `std`
//! feature, [`SystemClock`] reads the local date.
//!
//! ## Minimal usage
//!
//! ```
//! use std::rc::Rc;
//! use chrono::{NaiveDate, Weekday};
//! use circlet_calendar::{DateHighlighter, FixedClock, MonthGrid, MonthView, SimpleDateHighlighter};
//! use circlet_grid::{GridAdapter, GridStyle, PointerEvent};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 2, d).unwrap();
//! let clock = Rc::new(FixedClock::new(day(14)));
//! let mut view = MonthView::new(MonthGrid::new(Weekday::Mon, day(1), clock), GridStyle::default())?;
//!
//! {
//!     let grid = view.grid().borrow();
//!     assert_eq!(grid.count(), 42);
//!     assert_eq!(grid.date_at(grid.month_start_index()), Some(day(1)));
//! }
//!
//! let highlights = Rc::new(SimpleDateHighlighter::new());
//! view.grid().borrow_mut().set_highlighter(Some(highlights.clone()));
//! let sink = highlights.clone();
//! view.set_on_date_clicked(Some(Box::new(move |date: NaiveDate| {
//!     sink.toggle(date);
//!     sink.notify_data_set_changed();
//! })));
//!
//! let p = view.date_bounds(day(20)).unwrap().center();
//! let _ = view.pointer_event(PointerEvent::Down(p));
//! let _ = view.pointer_event(PointerEvent::Up(p));
//! assert_eq!(highlights.dates(), [day(20)]);
//! # Ok::<(), circlet_grid::StyleError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod clock;
mod link;
mod month;
mod palette;
mod week;
mod weekday;

#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, FixedClock};
pub use month::{DateHighlighter, DateListener, MonthGrid, MonthView, SimpleDateHighlighter};
pub use palette::{BorderPresets, CalendarPalette, CellFlags, TODAY_HALO_ALPHA};
pub use week::{
    SimpleWeekdayHighlighter, WeekGrid, WeekView, WeekdayHighlighter, WeekdayListener,
};
pub use weekday::{
    DEFAULT_FIRST_DAY, ShortWeekdayNames, WeekdayFormatter, from_monday_number,
    from_sunday_number, position_of, week_labels, weekday_at,
};
