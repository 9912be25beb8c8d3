// This file is part of Drawpile.
// Copyright (C) 2020 Calle Laakkonen
//
// Drawpile is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// As additional permission under section 7, you are allowed to distribute
// the software through an app store, even if that store has restrictive
// terms and conditions that are incompatible with the GPL, provided that
// the source is also available under the GPL with or without this permission
// through a channel without those restrictive terms and conditions.
//
// Drawpile is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Drawpile.  If not, see <https://www.gnu.org/licenses/>.

use super::snapshot::Snapshot;
use crate::paint::PixelSurface;

use std::collections::VecDeque;
use tracing::debug;

/// A stack of canvas snapshots with an optional size limit.
///
/// When a bounded stack is full, pushing a new snapshot drops the oldest.
pub struct HistoryStack {
    entries: VecDeque<Snapshot>,
    capacity: Option<usize>,
}

impl HistoryStack {
    pub fn bounded(capacity: usize) -> HistoryStack {
        HistoryStack {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity: Some(capacity),
        }
    }

    pub fn unbounded() -> HistoryStack {
        HistoryStack {
            entries: VecDeque::new(),
            capacity: None,
        }
    }

    /// Push a snapshot on top of the stack.
    /// Returns true if the oldest entry had to be dropped to make room.
    pub fn push(&mut self, snapshot: Snapshot) -> bool {
        self.entries.push_back(snapshot);
        match self.capacity {
            Some(cap) if self.entries.len() > cap => {
                self.entries.pop_front();
                true
            }
            _ => false,
        }
    }

    /// Take the most recent snapshot.
    /// Popping an empty stack does nothing and returns None.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Undo and redo stacks of a canvas
pub struct History {
    undo: HistoryStack,
    redo: HistoryStack,
}

impl History {
    pub fn new(depth: usize) -> History {
        History {
            undo: HistoryStack::bounded(depth),
            redo: HistoryStack::unbounded(),
        }
    }

    /// Record the state before a new edit.
    ///
    /// A new edit makes the redo history unreachable, so it is dropped.
    pub fn record(&mut self, snapshot: Snapshot) {
        if self.undo.push(snapshot) {
            debug!("Undo history full: dropped the oldest snapshot");
        }
        self.redo.clear();
    }

    /// Return the surface to the state of the latest undo snapshot.
    /// The current state goes to the redo stack.
    ///
    /// Returns false if there was nothing to undo.
    pub fn undo<S>(&mut self, surface: &mut S) -> bool
    where
        S: PixelSurface + ?Sized,
    {
        swap_top(&mut self.undo, &mut self.redo, surface)
    }

    /// The mirror image of undo
    pub fn redo<S>(&mut self, surface: &mut S) -> bool
    where
        S: PixelSurface + ?Sized,
    {
        swap_top(&mut self.redo, &mut self.undo, surface)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_stack(&self) -> &HistoryStack {
        &self.undo
    }

    pub fn redo_stack(&self) -> &HistoryStack {
        &self.redo
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

fn swap_top<S>(from: &mut HistoryStack, to: &mut HistoryStack, surface: &mut S) -> bool
where
    S: PixelSurface + ?Sized,
{
    let snapshot = match from.pop() {
        Some(s) => s,
        None => return false,
    };

    to.push(Snapshot::capture(surface, snapshot.rect()));
    snapshot.restore(surface);
    true
}
