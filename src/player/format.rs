//! Time formatting for chapter labels, the status line and the CLI.

/// Format a time in seconds as `M:SS`, or `H:MM:SS` once it reaches an hour.
///
/// Fractional seconds are truncated. Non-finite and negative values
/// format as `0:00`.
///
/// # Examples
///
/// ```
/// use chapterbar::player::format::format_time;
///
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(3661.0), "1:01:01");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

/// Parse `SS`, `M:SS` or `H:MM:SS` (seconds may carry a fraction).
///
/// Returns `None` for empty input, more than three fields, negative or
/// non-finite values.
pub fn parse_time(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let fields: Vec<&str> = input.split(':').collect();
    if fields.len() > 3 {
        return None;
    }

    let mut total = 0.0f64;
    for (i, field) in fields.iter().enumerate() {
        let is_last = i == fields.len() - 1;
        let value: f64 = if is_last {
            field.trim().parse().ok()?
        } else {
            // Hours and minutes must be whole numbers
            field.trim().parse::<u64>().ok()? as f64
        };
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        total = total * 60.0 + value;
    }

    Some(total)
}
