//! Stat counter animation
//!
//! Stat labels like "2,500+" count up from zero when their section mounts.
//! The animation is a fixed number of equal increments over a fixed
//! duration; the displayed value is the floor of the running total with the
//! label's `%`/`+` suffix re-applied. Labels without digits, or reading
//! "Zero", do not animate at all.

/// Total animation duration.
pub const COUNTER_DURATION_MS: u32 = 2000;
/// Number of increments the animation is divided into.
pub const COUNTER_STEPS: u32 = 60;
/// Delay between increments.
pub const COUNTER_STEP_MS: u32 = COUNTER_DURATION_MS / COUNTER_STEPS;

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
    increment: f64,
    percent: bool,
    plus: bool,
}

impl CounterAnimation {
    /// Parses a stat label into an animation. Returns `None` for labels
    /// that should be displayed as-is (no digits, or the word "zero").
    pub fn parse(label: &str) -> Option<Self> {
        if label.to_lowercase().contains("zero") {
            return None;
        }
        let digits: String = label.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let target = digits.parse().ok()?;
        Some(Self {
            target,
            current: 0.0,
            increment: target as f64 / f64::from(COUNTER_STEPS),
            percent: label.contains('%'),
            plus: label.contains('+'),
        })
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target as f64
    }

    /// The currently displayed value.
    pub fn label(&self) -> String {
        let mut label = (self.current.floor() as u64).min(self.target).to_string();
        if self.percent {
            label.push('%');
        }
        if self.plus {
            label.push('+');
        }
        label
    }

    /// Advances one increment, clamping at the target, and returns the new
    /// display label.
    pub fn tick(&mut self) -> String {
        self.current = (self.current + self.increment).min(self.target as f64);
        self.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_grouping_and_keeps_suffixes() {
        let anim = CounterAnimation::parse("2,500+").unwrap();
        assert_eq!(anim.label(), "0+");
        let anim = CounterAnimation::parse("98%").unwrap();
        assert_eq!(anim.label(), "0%");
    }

    #[test]
    fn test_zero_and_digitless_labels_do_not_animate() {
        assert!(CounterAnimation::parse("Zero").is_none());
        assert!(CounterAnimation::parse("zero fees").is_none());
        assert!(CounterAnimation::parse("Unlimited").is_none());
    }

    #[test]
    fn test_full_run_reaches_target_and_clamps() {
        let mut anim = CounterAnimation::parse("2,500+").unwrap();
        let mut last = String::new();
        for _ in 0..COUNTER_STEPS {
            last = anim.tick();
        }
        assert!(anim.is_done());
        assert_eq!(last, "2500+");
        // Extra ticks stay clamped.
        assert_eq!(anim.tick(), "2500+");
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut anim = CounterAnimation::parse("98%").unwrap();
        let mut previous = 0;
        while !anim.is_done() {
            let label = anim.tick();
            let value: u64 = label.trim_end_matches('%').parse().unwrap();
            assert!(value >= previous);
            assert!(value <= 98);
            previous = value;
        }
        assert_eq!(previous, 98);
    }
}
