// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation vocabulary shared across the workspace.

use kurbo::Rect;

/// One visibility observation produced by a platform sensor.
///
/// The platform glue converts whatever its sensor reports into this form and
/// hands batches of them to [`ObserverPool::deliver`](crate::ObserverPool::deliver).
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionRecord<E> {
    /// The observed element.
    pub target: E,
    /// True when the target overlaps the root's detection box.
    pub is_intersecting: bool,
    /// Bounding rectangle of the target, in root viewport coordinates.
    pub bounds: Rect,
    /// Fraction of the target currently inside the detection box, in `0.0..=1.0`.
    pub ratio: f64,
}

/// Direction the root was scrolling when a batch of records was produced.
///
/// Equal offsets classify as [`Down`](Self::Down), so the initial batch of a
/// freshly observed page reads as downward entry.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ScrollDirection {
    /// Scrolling toward the end of the content.
    #[default]
    Down,
    /// Scrolling back toward the start.
    Up,
}
