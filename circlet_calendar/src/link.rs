// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relays from a highlighter's notifier to the grid that consumes it.

use alloc::rc::{Rc, Weak};
use core::cell::Cell;

use circlet_grid::{ChangeNotifier, ChangeObserver};

/// Observer a grid registers with its highlighter when it keeps no derived state.
///
/// A notification is forwarded to the grid's own notifier, so the bound surface redraws
/// exactly once.
#[derive(Debug)]
pub(crate) struct Relay {
    target: Rc<ChangeNotifier>,
}

impl Relay {
    pub(crate) fn new(target: Rc<ChangeNotifier>) -> Rc<Self> {
        Rc::new(Self { target })
    }

    pub(crate) fn observer(self: &Rc<Self>) -> Weak<dyn ChangeObserver> {
        let observer: Rc<dyn ChangeObserver> = self.clone();
        Rc::downgrade(&observer)
    }
}

impl ChangeObserver for Relay {
    fn data_changed(&self) {
        tracing::trace!("highlight source changed");
        self.target.notify();
    }
}

/// A [`Relay`] that also marks the grid's cached highlight states stale.
#[derive(Debug)]
pub(crate) struct HighlightLink {
    stale: Cell<bool>,
    relay: Relay,
}

impl HighlightLink {
    pub(crate) fn new(target: Rc<ChangeNotifier>) -> Rc<Self> {
        Rc::new(Self {
            stale: Cell::new(true),
            relay: Relay { target },
        })
    }

    pub(crate) fn observer(self: &Rc<Self>) -> Weak<dyn ChangeObserver> {
        let observer: Rc<dyn ChangeObserver> = self.clone();
        Rc::downgrade(&observer)
    }

    pub(crate) fn mark_stale(&self) {
        self.stale.set(true);
    }

    /// Clear the stale mark, returning whether it was set.
    pub(crate) fn take_stale(&self) -> bool {
        self.stale.replace(false)
    }
}

impl ChangeObserver for HighlightLink {
    fn data_changed(&self) {
        self.stale.set(true);
        self.relay.data_changed();
    }
}
