// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagger durations and how authors spell them.

use alloc::string::String;
use core::ops::Add;

/// Custom property consulted when a stagger is requested without a value.
pub const STAGGER_PROPERTY: &str = "--viewport-stagger";

/// Per-item delay used when [`STAGGER_PROPERTY`] is unset or empty.
pub const DEFAULT_STAGGER: Millis = Millis(100.0);

/// A duration in milliseconds.
///
/// Durations come from author CSS and host clocks, both of which speak
/// fractional milliseconds, so this stays an `f64` rather than an integer
/// tick count.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Millis(pub f64);

impl Millis {
    /// No time at all.
    pub const ZERO: Self = Self(0.0);
}

impl Add for Millis {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// An author-facing stagger value.
///
/// Hosts accept a number, a CSS time string, or a boolean; the `From` impls
/// mirror that union. [`StaggerSpec::resolve`] turns any of them into a
/// concrete per-item [`Millis`] delay.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StaggerSpec {
    /// No stagger; entries run immediately.
    #[default]
    Off,
    /// A fixed per-item delay in milliseconds.
    Delay(f64),
    /// A CSS time string such as `"300ms"` or `"0.5s"`.
    Css(String),
    /// Read [`STAGGER_PROPERTY`] from the element's style, falling back to
    /// [`DEFAULT_STAGGER`] when unset or empty.
    FromProperty,
}

impl StaggerSpec {
    /// Resolves to a per-item delay, reading the custom property through
    /// `read_property` only when this is [`StaggerSpec::FromProperty`].
    ///
    /// Unparsable author values degrade to [`Millis::ZERO`] rather than
    /// failing, so a typo disables staggering instead of breaking reveals.
    pub fn resolve(&self, read_property: impl FnOnce(&str) -> Option<String>) -> Millis {
        match self {
            Self::Off => Millis::ZERO,
            Self::Delay(ms) => Millis(*ms),
            Self::Css(text) => parse_css_time(text).unwrap_or(Millis::ZERO),
            Self::FromProperty => match read_property(STAGGER_PROPERTY) {
                None => DEFAULT_STAGGER,
                Some(value) => {
                    let value = value.trim();
                    if value.is_empty() {
                        DEFAULT_STAGGER
                    } else {
                        parse_css_time(value).unwrap_or(Millis::ZERO)
                    }
                }
            },
        }
    }
}

impl From<f64> for StaggerSpec {
    fn from(ms: f64) -> Self {
        Self::Delay(ms)
    }
}

impl From<&str> for StaggerSpec {
    fn from(text: &str) -> Self {
        Self::Css(String::from(text))
    }
}

impl From<bool> for StaggerSpec {
    fn from(enabled: bool) -> Self {
        if enabled { Self::FromProperty } else { Self::Off }
    }
}

/// Parses a CSS time (`"300ms"`, `"0.5s"`, or a bare number of
/// milliseconds) into [`Millis`].
///
/// The `ms` suffix is tried before `s`, since every `ms` value also ends in
/// `s`.
#[must_use]
pub fn parse_css_time(value: &str) -> Option<Millis> {
    let value = value.trim();
    if let Some(number) = value.strip_suffix("ms") {
        number.trim().parse().ok().map(Millis)
    } else if let Some(number) = value.strip_suffix('s') {
        number.trim().parse::<f64>().ok().map(|s| Millis(s * 1000.0))
    } else {
        value.parse().ok().map(Millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn css_times_parse_in_milliseconds() {
        assert_eq!(parse_css_time("300ms"), Some(Millis(300.0)));
        assert_eq!(parse_css_time("0.5s"), Some(Millis(500.0)));
        assert_eq!(parse_css_time(" 2s "), Some(Millis(2000.0)));
        assert_eq!(parse_css_time("150"), Some(Millis(150.0)));
        assert_eq!(parse_css_time("-100ms"), Some(Millis(-100.0)));
    }

    #[test]
    fn junk_times_do_not_parse() {
        assert_eq!(parse_css_time(""), None);
        assert_eq!(parse_css_time("fast"), None);
        assert_eq!(parse_css_time("ms"), None);
        assert_eq!(parse_css_time("1m"), None);
    }

    #[test]
    fn resolve_covers_the_author_union() {
        let none = |_: &str| -> Option<String> { None };
        assert_eq!(StaggerSpec::Off.resolve(none), Millis::ZERO);
        assert_eq!(StaggerSpec::Delay(80.0).resolve(none), Millis(80.0));
        assert_eq!(StaggerSpec::from("0.25s").resolve(none), Millis(250.0));
        assert_eq!(StaggerSpec::from("junk").resolve(none), Millis::ZERO);
    }

    #[test]
    fn property_lookup_defaults_to_a_useful_stagger() {
        let spec = StaggerSpec::from(true);
        assert_eq!(spec.resolve(|_| None), DEFAULT_STAGGER);
        assert_eq!(spec.resolve(|_| Some("".to_string())), DEFAULT_STAGGER);
        assert_eq!(spec.resolve(|_| Some("  ".to_string())), DEFAULT_STAGGER);
        assert_eq!(spec.resolve(|_| Some("240ms".to_string())), Millis(240.0));
        assert_eq!(spec.resolve(|_| Some("oops".to_string())), Millis::ZERO);
    }

    #[test]
    fn property_lookup_asks_for_the_stagger_property() {
        let resolved = StaggerSpec::FromProperty.resolve(|name| {
            assert_eq!(name, STAGGER_PROPERTY, "resolve reads the stagger property");
            Some("75ms".to_string())
        });
        assert_eq!(resolved, Millis(75.0));
    }

    #[test]
    fn false_means_off() {
        assert_eq!(StaggerSpec::from(false), StaggerSpec::Off);
        assert_eq!(StaggerSpec::from(false).resolve(|_| None), Millis::ZERO);
    }
}
