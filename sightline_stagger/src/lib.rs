// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_stagger --heading-base-level=0

//! Sightline Stagger: debounced, document-ordered delays for grouped
//! reveals.
//!
//! When a scroll exposes a row of cards at once, revealing them all in the
//! same instant reads as a jump cut. The [`StaggerScheduler`] groups
//! near-simultaneous entries by their parent element, waits out a short
//! debounce window so stragglers from adjacent platform callbacks join the
//! same batch, then flushes the batch in document order with delays
//! `0, d, 2d, ...`.
//!
//! The scheduler owns no timer. Hosts drive it with their own clock:
//! [`StaggerScheduler::next_deadline`] says when to wake and
//! [`StaggerScheduler::flush_due`] runs every batch whose window has
//! closed. Sibling structure comes in through the [`SiblingOrder`] trait.
//!
//! [`StaggerSpec`] covers how authors spell the per-item delay (a number, a
//! CSS time, or "read it from a custom property").
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use sightline_stagger::{Millis, SiblingOrder, StaggerScheduler, StaggerTask};
//!
//! // Three siblings of one parent, in document order.
//! struct Row;
//!
//! impl SiblingOrder<u32> for Row {
//!     fn parent_of(&self, element: u32) -> Option<u32> {
//!         (element != 0).then_some(0)
//!     }
//!
//!     fn index_in_parent(&self, element: u32) -> usize {
//!         element as usize - 1
//!     }
//! }
//!
//! let scheduler = StaggerScheduler::new(Row);
//! let delays = Rc::new(RefCell::new(Vec::new()));
//!
//! // Notifications arrive in reverse document order.
//! for element in [3, 2, 1] {
//!     let delays = Rc::clone(&delays);
//!     scheduler.schedule(
//!         StaggerTask { element, payload: () },
//!         Millis(50.0),
//!         Millis(0.0),
//!         move |task, delay| delays.borrow_mut().push((task.element, delay.0)),
//!     );
//! }
//!
//! // The debounce window closes 50 ms after the last enqueue.
//! assert_eq!(scheduler.next_deadline(), Some(Millis(50.0)));
//! assert_eq!(scheduler.flush_due(Millis(50.0)), 3);
//! assert_eq!(*delays.borrow(), [(1, 0.0), (2, 50.0), (3, 100.0)]);
//! ```
//!
//! Everything is single threaded: the scheduler is a cloneable handle over
//! `Rc`-shared state and flush handlers may re-enter it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod scheduler;
pub mod value;

pub use scheduler::{DEBOUNCE_WINDOW, SiblingOrder, StaggerScheduler, StaggerTask};
pub use value::{DEFAULT_STAGGER, Millis, STAGGER_PROPERTY, StaggerSpec, parse_css_time};
