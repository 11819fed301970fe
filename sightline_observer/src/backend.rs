// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract between the pool and the platform sensor facility.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::config::SensorOptions;
use crate::pool::SensorId;

/// Platform sensor facility driven by the pool.
///
/// Implementations wrap whatever the host platform offers (a DOM
/// `IntersectionObserver`, a compositor visibility query, a test double) and
/// are expected to deliver observation batches back through
/// [`ObserverPool::deliver`](crate::ObserverPool::deliver), tagged with the
/// [`SensorId`] the sensor was created under.
///
/// ## Contract
///
/// - Calls arrive while the pool holds its own state borrowed. An
///   implementation must not call back into the pool from inside these
///   methods; deliveries happen later, from the platform's own dispatch.
/// - `create` is called exactly once per id before any `observe` for it, and
///   `disconnect` exactly once after the last `unobserve`.
/// - `observe`/`unobserve` arrive at most once per (sensor, element) pair
///   while that pair is registered.
pub trait SensorBackend<E> {
    /// Creates a platform sensor for `id` with the given options.
    fn create(&mut self, id: SensorId, options: &SensorOptions<E>);
    /// Starts watching `element` on the sensor.
    fn observe(&mut self, id: SensorId, element: E);
    /// Stops watching `element` on the sensor.
    fn unobserve(&mut self, id: SensorId, element: E);
    /// Tears the sensor down. No further calls arrive for `id`.
    fn disconnect(&mut self, id: SensorId);
}

/// One call recorded by a [`RecordingBackend`], in arrival order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BackendOp<E> {
    /// `create` was called.
    Create(SensorId),
    /// `observe` was called.
    Observe(SensorId, E),
    /// `unobserve` was called.
    Unobserve(SensorId, E),
    /// `disconnect` was called.
    Disconnect(SensorId),
}

/// In-memory backend that records every call it receives.
///
/// Clones share the same log, so a test can keep one clone and hand another
/// to the pool. Useful for tests, benches, and headless demos.
#[derive(Debug)]
pub struct RecordingBackend<E> {
    ops: Rc<RefCell<Vec<BackendOp<E>>>>,
}

impl<E> Clone for RecordingBackend<E> {
    fn clone(&self) -> Self {
        Self {
            ops: Rc::clone(&self.ops),
        }
    }
}

impl<E> Default for RecordingBackend<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> RecordingBackend<E> {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ops: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<E: Copy> RecordingBackend<E> {
    /// Every call seen so far, in order.
    #[must_use]
    pub fn ops(&self) -> Vec<BackendOp<E>> {
        self.ops.borrow().clone()
    }

    /// Number of sensors created.
    #[must_use]
    pub fn created(&self) -> usize {
        self.count(|op| matches!(op, BackendOp::Create(_)))
    }

    /// Number of sensors torn down.
    #[must_use]
    pub fn disconnected(&self) -> usize {
        self.count(|op| matches!(op, BackendOp::Disconnect(_)))
    }

    /// Number of `observe` calls.
    #[must_use]
    pub fn observed(&self) -> usize {
        self.count(|op| matches!(op, BackendOp::Observe(..)))
    }

    /// Number of `unobserve` calls.
    #[must_use]
    pub fn unobserved(&self) -> usize {
        self.count(|op| matches!(op, BackendOp::Unobserve(..)))
    }

    fn count(&self, pred: impl Fn(&BackendOp<E>) -> bool) -> usize {
        self.ops.borrow().iter().filter(|op| pred(op)).count()
    }
}

impl<E: Copy> SensorBackend<E> for RecordingBackend<E> {
    fn create(&mut self, id: SensorId, _options: &SensorOptions<E>) {
        self.ops.borrow_mut().push(BackendOp::Create(id));
    }

    fn observe(&mut self, id: SensorId, element: E) {
        self.ops.borrow_mut().push(BackendOp::Observe(id, element));
    }

    fn unobserve(&mut self, id: SensorId, element: E) {
        self.ops.borrow_mut().push(BackendOp::Unobserve(id, element));
    }

    fn disconnect(&mut self, id: SensorId) {
        self.ops.borrow_mut().push(BackendOp::Disconnect(id));
    }
}
