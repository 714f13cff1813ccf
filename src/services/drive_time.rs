// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Drive-time to color gradient.
//!
//! Drive times are free text such as `"2h 30m"`, `"3h"` or `"45m"`. The
//! total minutes map onto a three-segment gradient:
//!
//! - 0-3 hours: green (34,139,34) to orange (255,165,0)
//! - 3-4 hours: orange to red (green channel 165 → 0)
//! - over 4 hours: red

use std::fmt;

const GREEN: Rgb = Rgb::new(34, 139, 34);
const ORANGE: Rgb = Rgb::new(255, 165, 0);
const RED: Rgb = Rgb::new(255, 0, 0);

const ORANGE_AT_MINUTES: u32 = 180;
const RED_AT_MINUTES: u32 = 240;

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returned for drive times that cannot be parsed.
    pub const FALLBACK: Self = Self { r: 0, g: 0, b: 0 };
}

/// CSS `rgb(r, g, b)` notation.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Parse a drive-time string into total minutes.
///
/// A number followed by `h` counts as hours and one followed by `m` as
/// minutes; a bare number is hours when it comes first and minutes after an
/// hour part. Numbers may carry a decimal part (`1.5h` is 90 minutes); the
/// total is rounded to the nearest minute. Returns `None` when the string has
/// no digits at all.
pub fn parse_drive_time(input: &str) -> Option<u32> {
    let mut hours: Option<f64> = None;
    let mut minutes: Option<f64> = None;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_ascii_digit() {
            continue;
        }
        let mut number = String::from(c);
        while let Some(&next) = chars.peek() {
            if next.is_ascii_digit() || (next == '.' && !number.contains('.')) {
                number.push(next);
                chars.next();
            } else {
                break;
            }
        }
        let Ok(value) = number.trim_end_matches('.').parse::<f64>() else {
            continue;
        };
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        match chars.peek().map(|c| c.to_ascii_lowercase()) {
            Some('h') if hours.is_none() => hours = Some(value),
            Some('m') if minutes.is_none() => minutes = Some(value),
            _ if hours.is_none() && minutes.is_none() => hours = Some(value),
            _ if minutes.is_none() => minutes = Some(value),
            _ => {}
        }
    }

    if hours.is_none() && minutes.is_none() {
        return None;
    }
    let total = hours.unwrap_or(0.0) * 60.0 + minutes.unwrap_or(0.0);
    Some(total.round().min(f64::from(u32::MAX)) as u32)
}

/// Map a total number of minutes onto the gradient.
pub fn minutes_color(total_minutes: u32) -> Rgb {
    if total_minutes <= ORANGE_AT_MINUTES {
        let ratio = f64::from(total_minutes) / f64::from(ORANGE_AT_MINUTES);
        lerp(GREEN, ORANGE, ratio)
    } else if total_minutes <= RED_AT_MINUTES {
        let ratio = f64::from(total_minutes - ORANGE_AT_MINUTES)
            / f64::from(RED_AT_MINUTES - ORANGE_AT_MINUTES);
        lerp(ORANGE, RED, ratio)
    } else {
        RED
    }
}

/// Color for a drive-time string, or [`Rgb::FALLBACK`] if it can't be parsed.
pub fn drive_time_color(drive_time: &str) -> Rgb {
    parse_drive_time(drive_time)
        .map(minutes_color)
        .unwrap_or(Rgb::FALLBACK)
}

fn lerp(from: Rgb, to: Rgb, ratio: f64) -> Rgb {
    let channel = |a: u8, b: u8| {
        let value = f64::from(a) + (f64::from(b) - f64::from(a)) * ratio;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}
