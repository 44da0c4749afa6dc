//! Brute-force time estimation.
//!
//! Converts the size of the search space (word-list size to the power
//! of the passphrase length) into a human-scaled duration: how long an
//! attacker guessing at a fixed rate would need to try every possible
//! passphrase.

use std::fmt;

/// Assumed attacker capability, in guesses per second.
///
/// One trillion guesses per second. This is a policy constant, not a
/// measurement: estimates are only comparable against each other if
/// every caller assumes the same adversary.
pub const GUESS_RATE: f64 = 1_000_000_000_000.0;

/// Above this many of the largest unit, the estimate stops being a
/// number and becomes [`StrengthEstimate::Forever`].
const FOREVER_THRESHOLD: f64 = 1000.0;

/// Smallest amount of a unit worth reporting.
const UNIT_THRESHOLD: f64 = 1.0;

/// Human time units, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
    Decades,
    Centuries,
    Millennia,
    Ages,
    Epochs,
    Eras,
    Eons,
}

impl TimeUnit {
    /// Display label for the unit.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Years => "years",
            TimeUnit::Decades => "decades",
            TimeUnit::Centuries => "centuries",
            TimeUnit::Millennia => "millennia",
            TimeUnit::Ages => "ages",
            TimeUnit::Epochs => "epochs",
            TimeUnit::Eras => "eras",
            TimeUnit::Eons => "eons",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Successive divisors walking one unit up the ladder, paired with the
/// unit the division lands on. Seconds are the starting point.
const LADDER: [(f64, TimeUnit); 11] = [
    (60.0, TimeUnit::Minutes),
    (60.0, TimeUnit::Hours),
    (24.0, TimeUnit::Days),
    (365.25, TimeUnit::Years),
    (10.0, TimeUnit::Decades),
    (10.0, TimeUnit::Centuries),
    (10.0, TimeUnit::Millennia),
    (1000.0, TimeUnit::Ages),
    (10.0, TimeUnit::Epochs),
    (10.0, TimeUnit::Eras),
    (5.0, TimeUnit::Eons),
];

/// A human-readable estimate of the time to exhaust the search space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrengthEstimate {
    /// Less than one second: the passphrase offers no real resistance.
    Negligible,
    /// A finite amount of some human time unit.
    Time {
        /// Whole units, truncated (not rounded) for display.
        magnitude: u64,
        /// The largest unit with at least one whole of it.
        unit: TimeUnit,
    },
    /// At least a thousand eons: beyond any meaningful number.
    Forever,
}

impl StrengthEstimate {
    /// Estimates the time to try every passphrase of `word_count` words
    /// drawn from a list of `list_size` at [`GUESS_RATE`].
    pub fn compute(word_count: usize, list_size: usize) -> Self {
        let permutations = (list_size as f64).powi(word_count as i32);
        let seconds = permutations / GUESS_RATE;

        let mut scaled = Vec::with_capacity(LADDER.len() + 1);
        scaled.push((seconds, TimeUnit::Seconds));
        let mut value = seconds;
        for (divisor, unit) in LADDER {
            value /= divisor;
            scaled.push((value, unit));
        }

        // `value` now holds the eons figure.
        if value >= FOREVER_THRESHOLD {
            return StrengthEstimate::Forever;
        }
        if seconds < UNIT_THRESHOLD {
            return StrengthEstimate::Negligible;
        }

        for (value, unit) in scaled.into_iter().rev() {
            if value >= UNIT_THRESHOLD {
                return StrengthEstimate::Time {
                    magnitude: value as u64,
                    unit,
                };
            }
        }

        StrengthEstimate::Negligible
    }
}

impl fmt::Display for StrengthEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthEstimate::Negligible => f.write_str("almost no time"),
            StrengthEstimate::Time { magnitude, unit } => {
                write!(f, "about {magnitude} {unit}")
            }
            StrengthEstimate::Forever => f.write_str("effectively forever"),
        }
    }
}
