//! Human-readable multi-unit durations ("2 days, 3 hours").
//!
//! Rounding folds everything below the kept units into the smallest kept unit,
//! then carries upward when a unit rounds to a whole multiple of the next
//! larger one, so 1h 59m 40s shown with two units reads "2 hours".

use std::time::Duration;

/// Units a duration can be broken into, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    const fn millis(self) -> f64 {
        match self {
            Self::Day => 86_400_000.0,
            Self::Hour => 3_600_000.0,
            Self::Minute => 60_000.0,
            Self::Second => 1_000.0,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }
}

/// Formatting options for [`humanize`].
#[derive(Debug, Clone, Copy)]
pub struct HumanizeOptions<'a> {
    /// Units to break the duration into, largest first.
    pub units: &'a [Unit],
    /// Keep at most this many of the most significant non-zero units.
    pub largest: Option<usize>,
}

/// Average time per move: minutes and seconds.
pub const MOVE_TIME: HumanizeOptions<'static> = HumanizeOptions {
    units: &[Unit::Minute, Unit::Second],
    largest: None,
};

/// Game length: days down to seconds, two most significant units.
pub const GAME_LENGTH: HumanizeOptions<'static> = HumanizeOptions {
    units: &[Unit::Day, Unit::Hour, Unit::Minute, Unit::Second],
    largest: Some(2),
};

/// Render `duration` as a rounded, comma-separated list of unit counts.
#[must_use]
pub fn humanize(duration: Duration, options: HumanizeOptions<'_>) -> String {
    let units = options.units;
    let Some(&smallest) = units.last() else {
        return String::new();
    };

    let mut counts = Vec::with_capacity(units.len());
    let mut rest = duration.as_millis() as f64;
    for (i, unit) in units.iter().enumerate() {
        let count = if i + 1 == units.len() {
            rest / unit.millis()
        } else {
            (rest / unit.millis()).floor()
        };
        rest -= count * unit.millis();
        counts.push(count);
    }

    let first_occupied = counts.iter().position(|c| *c != 0.0).unwrap_or(0);

    for i in (0..counts.len()).rev() {
        counts[i] = counts[i].round();
        if i == 0 {
            break;
        }
        let ratio = units[i - 1].millis() / units[i].millis();
        let beyond_largest = options
            .largest
            .is_some_and(|largest| largest.saturating_sub(1) < i.saturating_sub(first_occupied));
        if counts[i] % ratio == 0.0 || beyond_largest {
            counts[i - 1] += counts[i] / ratio;
            counts[i] = 0.0;
        }
    }

    let limit = options.largest.unwrap_or(units.len());
    let pieces: Vec<String> = units
        .iter()
        .zip(&counts)
        .filter(|(_, count)| **count != 0.0)
        .take(limit)
        .map(|(unit, count)| format_piece(*count as u64, *unit))
        .collect();

    if pieces.is_empty() {
        return format_piece(0, smallest);
    }
    pieces.join(", ")
}

fn format_piece(count: u64, unit: Unit) -> String {
    if count == 1 {
        format!("{count} {}", unit.name())
    } else {
        format!("{count} {}s", unit.name())
    }
}
