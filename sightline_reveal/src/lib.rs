// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_reveal --heading-base-level=0

//! Sightline Reveal: headless reveal-on-scroll state.
//!
//! Sensors say "this box now intersects the viewport"; reveal styling needs
//! more than that. Did the element enter or leave, from above or below,
//! while scrolling up or down, and was it a once-only reveal whose sensor
//! can be dropped? [`RevealState`] answers those questions one delivered
//! record at a time, and [`ScrollWatcher`] supplies the scroll direction
//! from the host's offsets.
//!
//! The crate is headless on purpose: it owns no sensors, timers, or styles.
//! A host wires [`sightline_observer`]'s pool into
//! [`RevealState::on_record`], applies classes according to the returned
//! [`RevealEvent`]s, and calls [`RevealState::settle_pending`] on its next
//! paint so the visual flip lands one frame after the bookkeeping.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use sightline_observer::{IntersectionRecord, ScrollDirection};
//! use sightline_reveal::{LeaveEdge, RevealEvent, RevealState, ScrollWatcher};
//!
//! let mut state = RevealState::new();
//! let mut watcher = ScrollWatcher::new();
//! state.track("hero", false);
//!
//! // First sighting: below the fold, so the element gets hidden styling.
//! let direction = watcher.classify(0.0);
//! let event = state.on_record(
//!     &IntersectionRecord {
//!         target: "hero",
//!         is_intersecting: false,
//!         bounds: Rect::new(0.0, 900.0, 400.0, 1020.0),
//!         ratio: 0.0,
//!     },
//!     direction,
//!     800.0,
//! );
//! assert_eq!(
//!     event,
//!     Some(RevealEvent::Leave {
//!         element: "hero",
//!         direction: ScrollDirection::Down,
//!         edge: Some(LeaveEdge::Below),
//!     })
//! );
//!
//! // Scrolling down brings it in; the enter settles on the next paint.
//! let direction = watcher.classify(600.0);
//! let event = state.on_record(
//!     &IntersectionRecord {
//!         target: "hero",
//!         is_intersecting: true,
//!         bounds: Rect::new(0.0, 420.0, 400.0, 540.0),
//!         ratio: 0.8,
//!     },
//!     direction,
//!     800.0,
//! );
//! assert!(matches!(event, Some(RevealEvent::Enter { done: false, .. })));
//! assert_eq!(state.settle_pending(), ["hero"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod state;
pub mod watcher;

pub use sightline_observer::ScrollDirection;
pub use state::{LeaveEdge, RevealEvent, RevealState};
pub use watcher::ScrollWatcher;
