// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_observer --heading-base-level=0

//! Sightline Observer: a shared pool of platform visibility sensors.
//!
//! Watching many elements for viewport entry does not need one platform
//! sensor per element. Registrations that agree on a root and on a
//! [canonical options key](SensorOptions::canonical_key) (margin plus sorted
//! thresholds) share a single sensor; the pool routes each delivered record
//! to the callback registered for its target element.
//!
//! - [`ObserverPool::acquire`] registers an element and returns a
//!   generational [`SensorId`] naming the shared instance.
//! - [`ObserverPool::release`] drops one registration; the last one out
//!   disconnects the backend sensor and cleans up its root group.
//! - [`ObserverPool::deliver`] is called by the platform glue with record
//!   batches. Targets are looked up per record at delivery time, so a
//!   registration released moments earlier (even by an earlier callback in
//!   the same batch) is silently skipped.
//!
//! The pool itself never talks to a real platform: the [`SensorBackend`]
//! trait is the seam. [`RecordingBackend`] is an in-memory implementation
//! for tests and headless runs.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use sightline_observer::{
//!     IntersectionRecord, ObserverPool, RecordingBackend, SensorOptions,
//! };
//!
//! let backend = RecordingBackend::new();
//! let pool = ObserverPool::new(backend.clone());
//!
//! // Two registrations with identical options share one platform sensor.
//! let a = pool.acquire(1_u32, &SensorOptions::default(), |record| {
//!     assert!(record.is_intersecting);
//! });
//! let b = pool.acquire(2_u32, &SensorOptions::default(), |_| {});
//! assert_eq!(a, b);
//! assert_eq!(pool.sensor_count(), 1);
//!
//! pool.deliver(
//!     a,
//!     &[IntersectionRecord {
//!         target: 1,
//!         is_intersecting: true,
//!         bounds: Rect::new(0.0, 620.0, 400.0, 700.0),
//!         ratio: 1.0,
//!     }],
//! );
//!
//! pool.release(a, 1);
//! pool.release(b, 2);
//! assert_eq!(pool.sensor_count(), 0);
//! assert_eq!(backend.disconnected(), 1);
//! ```
//!
//! ## Threading
//!
//! Everything here assumes one cooperative thread, matching the platforms it
//! abstracts over. The pool is a cloneable handle over `Rc`-shared state and
//! callbacks may re-enter it; nothing is `Send` or `Sync`.
//!
//! Element keys are `Copy + Eq + Hash`. Hosts whose element references are
//! heavyweight should intern them and use the interned ids as keys.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod pool;
pub mod record;

pub use backend::{BackendOp, RecordingBackend, SensorBackend};
pub use config::{SensorOptions, Threshold};
pub use pool::{ObserverPool, SensorId};
pub use record::{IntersectionRecord, ScrollDirection};
