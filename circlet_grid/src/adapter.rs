// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The adapter side of the adapter/surface protocol.
//!
//! ## Ownership
//!
//! A [`Surface`](crate::Surface) owns its binding to an adapter and reads data through it.
//! The reverse direction is a [`ChangeNotifier`] embedded in the adapter: a non-owning,
//! single-slot registration that the observing side fills in when it binds and clears when
//! it unbinds. Notifying through it never extends the observer's lifetime, and notifying an
//! unbound or orphaned notifier does nothing.
//!
//! The same notifier type links highlight sources to the calendar grids that consume them.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::border::Border;
use crate::layout::GridShape;

/// Something that wants to hear about data changes.
pub trait ChangeObserver {
    /// The observed data changed.
    fn data_changed(&self);
}

/// Single-slot, non-owning link from a data source to its current observer.
#[derive(Default)]
pub struct ChangeNotifier {
    observer: RefCell<Option<Weak<dyn ChangeObserver>>>,
}

impl core::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl ChangeNotifier {
    /// Create an unbound notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point this notifier at `observer`, replacing any previous observer.
    ///
    /// Called by the observing side when it binds.
    pub fn attach(&self, observer: Weak<dyn ChangeObserver>) {
        *self.observer.borrow_mut() = Some(observer);
    }

    /// Clear the link, but only if it still points at `observer`.
    ///
    /// A source that has since been adopted by another observer stays bound to it.
    pub fn detach(&self, observer: &Weak<dyn ChangeObserver>) {
        let mut slot = self.observer.borrow_mut();
        if slot.as_ref().is_some_and(|cur| Weak::ptr_eq(cur, observer)) {
            *slot = None;
        }
    }

    /// True if a live observer is attached.
    pub fn is_bound(&self) -> bool {
        self.observer
            .borrow()
            .as_ref()
            .is_some_and(|w| w.strong_count() > 0)
    }

    /// True if this notifier currently reports to `observer`.
    pub fn is_bound_to(&self, observer: &Weak<dyn ChangeObserver>) -> bool {
        self.observer
            .borrow()
            .as_ref()
            .is_some_and(|cur| Weak::ptr_eq(cur, observer))
    }

    /// Tell the attached observer, if any, that the data changed.
    ///
    /// The slot is released before the observer runs, so the observer may rebind or notify
    /// again from inside its callback.
    pub fn notify(&self) {
        let observer: Option<Rc<dyn ChangeObserver>> =
            self.observer.borrow().as_ref().and_then(Weak::upgrade);
        match observer {
            Some(observer) => observer.data_changed(),
            None => tracing::trace!("change notification with no observer"),
        }
    }
}

/// Data provider for a [`Surface`](crate::Surface).
///
/// Cells are addressed row-major from `0` to `count() - 1`.
pub trait GridAdapter {
    /// Number of cells.
    fn count(&self) -> usize;

    /// Cells per row. Must be at least one.
    fn column_count(&self) -> usize;

    /// Whether the first `column_count()` cells form a header band.
    fn first_row_is_header(&self) -> bool {
        false
    }

    /// Text shown in the cell at `index`.
    fn text(&self, index: usize) -> &str;

    /// Border stack of the cell at `index`; the first border hugs the text.
    fn borders(&self, index: usize) -> &[Border];

    /// Link back to the bound surface.
    fn notifier(&self) -> &ChangeNotifier;

    /// Ask the bound surface, if any, to redraw.
    fn notify_data_set_changed(&self) {
        self.notifier().notify();
    }

    /// Current shape of the grid.
    fn shape(&self) -> GridShape {
        GridShape::new(self.count(), self.column_count(), self.first_row_is_header())
    }
}

/// A vector-backed adapter for arbitrary text grids.
#[derive(Debug)]
pub struct StaticGrid {
    column_count: usize,
    header: bool,
    texts: Vec<String>,
    borders: Vec<Vec<Border>>,
    notifier: ChangeNotifier,
}

impl StaticGrid {
    /// Create a grid; the cell count is `texts.len()`.
    ///
    /// Cells without a matching entry in `borders` are drawn bare.
    pub fn new(column_count: usize, texts: Vec<String>, borders: Vec<Vec<Border>>) -> Self {
        assert!(column_count > 0, "a grid needs at least one column");
        Self {
            column_count,
            header: false,
            texts,
            borders,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Set whether the first row is a header.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Replace one cell's text. Call [`GridAdapter::notify_data_set_changed`] to redraw.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.texts.get_mut(index) {
            *slot = text.into();
        }
    }

    /// Replace one cell's borders. Call [`GridAdapter::notify_data_set_changed`] to redraw.
    pub fn set_borders(&mut self, index: usize, borders: Vec<Border>) {
        if index >= self.borders.len() {
            self.borders.resize_with(index + 1, Vec::new);
        }
        self.borders[index] = borders;
    }

    /// Append a cell.
    pub fn push(&mut self, text: impl Into<String>, borders: Vec<Border>) {
        let index = self.texts.len();
        self.texts.push(text.into());
        self.set_borders(index, borders);
    }
}

impl GridAdapter for StaticGrid {
    fn count(&self) -> usize {
        self.texts.len()
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn first_row_is_header(&self) -> bool {
        self.header
    }

    fn text(&self, index: usize) -> &str {
        self.texts.get(index).map_or("", String::as_str)
    }

    fn borders(&self, index: usize) -> &[Border] {
        self.borders.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }
}
