// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element reveal state and the events it emits.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Rect;
use sightline_observer::{IntersectionRecord, ScrollDirection};

/// Which viewport edge an element left through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveEdge {
    /// The element's box sits at least partly above the viewport.
    Above,
    /// The element's box sits at least partly below the viewport.
    Below,
}

/// A state change worth styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent<E> {
    /// The element came into view.
    Enter {
        /// The element that entered.
        element: E,
        /// Scroll direction at delivery time.
        direction: ScrollDirection,
        /// True when this was a once-only reveal; the host should release
        /// the element's sensor registration now.
        done: bool,
    },
    /// The element went out of view, including the initial sighting of an
    /// element that starts outside the viewport.
    Leave {
        /// The element that left.
        element: E,
        /// Scroll direction at delivery time.
        direction: ScrollDirection,
        /// The edge it left through, when the geometry says.
        edge: Option<LeaveEdge>,
    },
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    once: bool,
    // None until the first record arrives, so that first record always
    // produces an event in either direction.
    in_view: Option<bool>,
    settled: bool,
    done: bool,
}

/// Tracks visibility per element and turns sensor records into
/// [`RevealEvent`]s.
///
/// The state is headless: it owns no sensors and applies no styles. The
/// host registers elements with [`RevealState::track`], routes delivered
/// records through [`RevealState::on_record`], and acts on the returned
/// events. Records for unknown elements are dropped, so a release that
/// raced a late notification stays silent.
///
/// Entering elements are additionally parked in a pending list; the host
/// calls [`RevealState::settle_pending`] on its next paint to flip the
/// visual state one frame after the attribute changes, keeping the two out
/// of the same style recalculation.
#[derive(Debug)]
pub struct RevealState<E> {
    elements: HashMap<E, Entry>,
    pending: Vec<E>,
}

impl<E> Default for RevealState<E> {
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            pending: Vec::new(),
        }
    }
}

impl<E: Copy + Eq + Hash> RevealState<E> {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `element`, resetting any previous state it had.
    ///
    /// With `once` set, the first enter is also the last event: the entry
    /// latches done and further records are ignored.
    pub fn track(&mut self, element: E, once: bool) {
        self.elements.insert(
            element,
            Entry {
                once,
                in_view: None,
                settled: false,
                done: false,
            },
        );
    }

    /// Applies one delivered record, returning the event it amounts to.
    ///
    /// Returns `None` for untracked or finished elements and for records
    /// that repeat the current visibility. `viewport_height` is the height
    /// of the viewport the record's bounds are relative to, used to name
    /// the leave edge.
    pub fn on_record(
        &mut self,
        record: &IntersectionRecord<E>,
        direction: ScrollDirection,
        viewport_height: f64,
    ) -> Option<RevealEvent<E>> {
        let entry = self.elements.get_mut(&record.target)?;
        if entry.done {
            return None;
        }
        if record.is_intersecting {
            if entry.in_view == Some(true) {
                return None;
            }
            entry.in_view = Some(true);
            entry.settled = false;
            if entry.once {
                entry.done = true;
            }
            let done = entry.done;
            self.pending.push(record.target);
            Some(RevealEvent::Enter {
                element: record.target,
                direction,
                done,
            })
        } else {
            if entry.in_view == Some(false) {
                return None;
            }
            entry.in_view = Some(false);
            entry.settled = false;
            Some(RevealEvent::Leave {
                element: record.target,
                direction,
                edge: leave_edge(record.bounds, viewport_height),
            })
        }
    }

    /// Flips the visual state of every element that entered since the last
    /// call, returning them.
    ///
    /// Meant to run on the host's next paint. Elements that left or were
    /// forgotten in the meantime are skipped.
    pub fn settle_pending(&mut self) -> Vec<E> {
        let mut settled = Vec::new();
        for element in self.pending.drain(..) {
            if let Some(entry) = self.elements.get_mut(&element)
                && entry.in_view == Some(true)
                && !entry.settled
            {
                entry.settled = true;
                settled.push(element);
            }
        }
        settled
    }

    /// Whether the element is currently in view.
    #[must_use]
    pub fn is_in_view(&self, element: E) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|entry| entry.in_view == Some(true))
    }

    /// Whether a once-only element has had its enter.
    #[must_use]
    pub fn is_done(&self, element: E) -> bool {
        self.elements.get(&element).is_some_and(|entry| entry.done)
    }

    /// Stops tracking `element`. Returns whether it was tracked.
    pub fn forget(&mut self, element: E) -> bool {
        self.elements.remove(&element).is_some()
    }

    /// Number of tracked elements.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.elements.len()
    }
}

/// Names the edge a non-intersecting box hangs past, if either.
fn leave_edge(bounds: Rect, viewport_height: f64) -> Option<LeaveEdge> {
    if bounds.y0 < 0.0 {
        Some(LeaveEdge::Above)
    } else if bounds.y1 > viewport_height {
        Some(LeaveEdge::Below)
    } else {
        None
    }
}
