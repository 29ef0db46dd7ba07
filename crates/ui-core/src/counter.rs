//! Ease-out counter animation used by the dashboard stat cards.

/// Leading integer of `text`, the way browsers read `parseInt`: optional
/// leading whitespace and sign, then digits. Anything else reads as 0.
pub fn parse_leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first().copied() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(0)
}

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// A running count-up from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub start: i64,
    pub end: i64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(start: i64, end: i64, duration_ms: u32) -> Self {
        Self {
            start,
            end,
            duration_ms: f64::from(duration_ms),
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Value to display after `elapsed_ms`; exactly `end` once finished.
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        if self.is_finished(elapsed_ms) {
            return self.end;
        }
        let eased = ease_out_cubic(self.progress(elapsed_ms));
        (self.start as f64 + (self.end - self.start) as f64 * eased).floor() as i64
    }
}
