//! Human-readable call duration formatting.

/// Format a duration in seconds the way the client renders it: `3m 20s`,
/// `3m`, `45s`. Non-positive and NaN inputs render as `0s`.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0s".to_string();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.round() as u64;
    let mins = total / 60;
    let secs = total % 60;

    match (mins, secs) {
        (0, s) => format!("{s}s"),
        (m, 0) => format!("{m}m"),
        (m, s) => format!("{m}m {s}s"),
    }
}
