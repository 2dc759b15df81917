use std::time::Instant;
use tracing::info;

/// Logs how long a CLI command took when dropped.
pub struct Timer {
    label: String,
    start: Instant,
}

impl Timer {
    pub fn start(label: impl Into<String>) -> Self {
        let label = label.into();
        info!("Starting: {}", label);
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        info!("Finished: {} (took {:.2?})", self.label, self.start.elapsed());
    }
}

/// Integer with thousands separators: `1234567` → `"1,234,567"`.
pub fn fmt_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed integer delta: `+1,200` / `-350` / `0`.
pub fn fmt_delta(n: i64) -> String {
    if n > 0 {
        format!("+{}", fmt_number(n))
    } else {
        fmt_number(n)
    }
}

/// Signed percentage-point change with one decimal, a dash when unknown.
pub fn fmt_pp_change(change: Option<f64>) -> String {
    change.map_or_else(|| "—".to_string(), |c| format!("{:+.1} pp", c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_number() {
        assert_eq!(fmt_number(1_234_567), "1,234,567");
        assert_eq!(fmt_number(0), "0");
        assert_eq!(fmt_number(-42_000), "-42,000");
        assert_eq!(fmt_number(999), "999");
        assert_eq!(fmt_number(150_000), "150,000");
    }

    #[test]
    fn test_fmt_delta() {
        assert_eq!(fmt_delta(1200), "+1,200");
        assert_eq!(fmt_delta(-350), "-350");
        assert_eq!(fmt_delta(0), "0");
    }

    #[test]
    fn test_fmt_pp_change() {
        assert_eq!(fmt_pp_change(Some(0.26)), "+0.3 pp");
        assert_eq!(fmt_pp_change(Some(-1.0)), "-1.0 pp");
        assert_eq!(fmt_pp_change(None), "—");
    }
}
