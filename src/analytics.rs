//! Optional analytics reporting
//!
//! The page reports a handful of events to an external `gtag` function that
//! may or may not exist at runtime. The sink is modeled as a capability
//! with a no-op default: every call site goes through [`Analytics`], and the
//! web implementation looks `window.gtag` up defensively on each call, so
//! the page behaves identically with analytics blocked or absent.

use std::collections::BTreeSet;
use std::rc::Rc;

/// Scroll-depth milestones, in percent of the page scrolled.
pub const SCROLL_DEPTH_MILESTONES: &[u32] = &[25, 50, 75, 100];
/// Time-on-page milestones, in seconds.
pub const TIME_ON_PAGE_MILESTONES: &[u32] = &[30, 60, 120, 300];

/// Flat parameter value passed along with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Str(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Str(value)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Float(value)
    }
}

/// Destination for analytics events. Implementations must never fail
/// visibly; reporting is fire-and-forget.
pub trait AnalyticsSink {
    fn record(&self, event: &str, params: &[(&str, Param)]);
}

/// Default sink when no reporting function is available.
pub struct Noop;

impl AnalyticsSink for Noop {
    fn record(&self, event: &str, _params: &[(&str, Param)]) {
        tracing::debug!(event, "analytics event dropped (no sink)");
    }
}

/// `window.gtag`-backed sink. Looks the function up on every call and does
/// nothing when it is missing or not callable.
#[cfg(feature = "web")]
pub struct Gtag;

#[cfg(feature = "web")]
impl AnalyticsSink for Gtag {
    fn record(&self, event: &str, params: &[(&str, Param)]) {
        use wasm_bindgen::{JsCast, JsValue};

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(gtag) = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) else {
            return;
        };
        let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
            tracing::debug!(event, "gtag not present, dropping analytics event");
            return;
        };

        let args = js_sys::Object::new();
        for (key, value) in params {
            let value = match value {
                Param::Str(s) => JsValue::from_str(s),
                Param::Int(n) => JsValue::from_f64(*n as f64),
                Param::Float(n) => JsValue::from_f64(*n),
            };
            let _ = js_sys::Reflect::set(&args, &JsValue::from_str(key), &value);
        }
        let _ = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(event),
            &args,
        );
    }
}

/// Cloneable handle to the active sink, provided through Dioxus context.
#[derive(Clone)]
pub struct Analytics {
    sink: Rc<dyn AnalyticsSink>,
}

impl Analytics {
    pub fn new(sink: Rc<dyn AnalyticsSink>) -> Self {
        Self { sink }
    }

    /// The sink for the current build: `gtag` on web, no-op elsewhere.
    pub fn for_platform() -> Self {
        #[cfg(feature = "web")]
        {
            Self::new(Rc::new(Gtag))
        }
        #[cfg(not(feature = "web"))]
        {
            Self::new(Rc::new(Noop))
        }
    }

    /// Waitlist conversion event.
    pub fn conversion(&self) {
        self.sink.record(
            "conversion",
            &[
                ("send_to", "GA_MEASUREMENT_ID/CONVERSION_ID".into()),
                ("value", 1.0.into()),
                ("currency", "AUD".into()),
            ],
        );
    }

    /// CTA button click.
    pub fn button_click(&self, label: &str, section: &str) {
        self.sink.record(
            "click",
            &[
                ("event_category", "Button".into()),
                ("event_label", label.into()),
                ("custom_parameter_1", section.into()),
            ],
        );
    }

    pub fn scroll_depth(&self, percent: u32) {
        self.sink.record(
            "scroll",
            &[
                ("event_category", "Scroll Depth".into()),
                ("event_label", format!("{percent}%").into()),
                ("value", i64::from(percent).into()),
            ],
        );
    }

    pub fn time_on_page(&self, seconds: u32) {
        self.sink.record(
            "timing_complete",
            &[
                ("name", "time_on_page".into()),
                ("value", i64::from(seconds).into()),
            ],
        );
    }
}

/// Tracks fixed thresholds that should each be reported exactly once.
///
/// Used for scroll depth (percent) and time on page (seconds). The input
/// value may move backwards (the user scrolls up); already-reported
/// thresholds stay reported.
#[derive(Debug, Clone)]
pub struct MilestoneTracker {
    thresholds: &'static [u32],
    reached: BTreeSet<u32>,
}

impl MilestoneTracker {
    pub fn new(thresholds: &'static [u32]) -> Self {
        Self {
            thresholds,
            reached: BTreeSet::new(),
        }
    }

    /// Feeds the current value and returns thresholds newly crossed by it,
    /// in ascending order.
    pub fn crossed(&mut self, value: u32) -> Vec<u32> {
        let mut newly = Vec::new();
        for &threshold in self.thresholds {
            if value >= threshold && self.reached.insert(threshold) {
                newly.push(threshold);
            }
        }
        newly
    }

    /// True once every threshold has been reported; recurring tick tasks
    /// use this to stop themselves.
    pub fn is_complete(&self) -> bool {
        self.reached.len() == self.thresholds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        events: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl AnalyticsSink for Recorder {
        fn record(&self, event: &str, params: &[(&str, Param)]) {
            let keys = params.iter().map(|(k, _)| k.to_string()).collect();
            self.events.borrow_mut().push((event.to_string(), keys));
        }
    }

    #[test]
    fn test_conversion_event_shape() {
        let recorder = Rc::new(Recorder {
            events: RefCell::new(Vec::new()),
        });
        let analytics = Analytics::new(recorder.clone());
        analytics.conversion();
        let events = recorder.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "conversion");
        assert_eq!(events[0].1, vec!["send_to", "value", "currency"]);
    }

    #[test]
    fn test_noop_sink_swallows_events() {
        let analytics = Analytics::new(Rc::new(Noop));
        analytics.conversion();
        analytics.button_click("Join the Waitlist", "hero");
        analytics.scroll_depth(50);
        analytics.time_on_page(30);
    }

    #[test]
    fn test_milestones_reported_once_in_order() {
        let mut tracker = MilestoneTracker::new(SCROLL_DEPTH_MILESTONES);
        assert_eq!(tracker.crossed(10), Vec::<u32>::new());
        assert_eq!(tracker.crossed(60), vec![25, 50]);
        assert_eq!(tracker.crossed(60), Vec::<u32>::new());
        assert_eq!(tracker.crossed(100), vec![75, 100]);
        assert!(tracker.is_complete());
    }

    #[test]
    fn test_milestones_survive_scrolling_back_up() {
        let mut tracker = MilestoneTracker::new(SCROLL_DEPTH_MILESTONES);
        tracker.crossed(80);
        assert_eq!(tracker.crossed(5), Vec::<u32>::new());
        assert_eq!(tracker.crossed(100), vec![100]);
    }

    #[test]
    fn test_time_milestones() {
        let mut tracker = MilestoneTracker::new(TIME_ON_PAGE_MILESTONES);
        for second in 0..=60 {
            let newly = tracker.crossed(second);
            match second {
                30 => assert_eq!(newly, vec![30]),
                60 => assert_eq!(newly, vec![60]),
                _ => assert!(newly.is_empty()),
            }
        }
        assert!(!tracker.is_complete());
    }
}
