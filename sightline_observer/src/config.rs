// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sensor configuration and the canonical sharing key.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

/// Intersection ratio(s) at which a sensor reports.
///
/// Ratios are assumed finite (no NaNs), matching the rest of the workspace's
/// float conventions.
#[derive(Clone, Debug, PartialEq)]
pub enum Threshold {
    /// Report when visibility crosses a single ratio.
    One(f64),
    /// Report at each ratio in the list.
    Many(Vec<f64>),
}

impl Default for Threshold {
    fn default() -> Self {
        Self::One(0.0)
    }
}

impl Threshold {
    /// Canonical key fragment. Lists are sorted ascending so that
    /// `[0.0, 0.5]` and `[0.5, 0.0]` share a sensor.
    fn canonical(&self) -> String {
        match self {
            Self::One(ratio) => format!("{ratio}"),
            Self::Many(ratios) => {
                let mut sorted = ratios.clone();
                sorted.sort_by(f64::total_cmp);
                let mut out = String::new();
                for (i, ratio) in sorted.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    // Writing to a String cannot fail.
                    let _ = write!(out, "{ratio}");
                }
                out
            }
        }
    }
}

/// Configuration for one pooled sensor.
///
/// Two registrations share a platform sensor exactly when their `root` and
/// [`canonical_key`](Self::canonical_key) agree.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorOptions<E> {
    /// Scrolling container the sensor is bound to. `None` means the implicit
    /// viewport.
    pub root: Option<E>,
    /// Root margin string widening (or narrowing) the detection box, e.g.
    /// `"34px 0px 34px 0px"`. An empty string reads as `"0px"`.
    pub margin: String,
    /// Ratio(s) at which the platform reports visibility changes.
    pub thresholds: Threshold,
}

impl<E> Default for SensorOptions<E> {
    fn default() -> Self {
        Self {
            root: None,
            margin: String::from("0px"),
            thresholds: Threshold::default(),
        }
    }
}

impl<E> SensorOptions<E> {
    /// The sharing key for these options: `"{margin}|{thresholds}"`.
    ///
    /// ```
    /// use sightline_observer::{SensorOptions, Threshold};
    ///
    /// let options: SensorOptions<u32> = SensorOptions {
    ///     thresholds: Threshold::Many(vec![0.5, 0.0]),
    ///     ..SensorOptions::default()
    /// };
    /// assert_eq!(options.canonical_key(), "0px|0,0.5");
    /// ```
    #[must_use]
    pub fn canonical_key(&self) -> String {
        let margin = if self.margin.is_empty() {
            "0px"
        } else {
            self.margin.as_str()
        };
        format!("{margin}|{}", self.thresholds.canonical())
    }
}
