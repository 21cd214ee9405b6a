use crate::{Listener, PerformanceMetric, Subscription};

/// Paint entry name for the first paint.
pub const FIRST_PAINT: &str = "first-paint";
/// Paint entry name for the first contentful paint.
pub const FIRST_CONTENTFUL_PAINT: &str = "first-contentful-paint";

/// The subset of a navigation timing record the dashboard derives metrics
/// from. Timestamps are milliseconds relative to the time origin; fields the
/// host did not report read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavigationTiming {
    /// Start of the navigation (0 for the document's own navigation)
    pub start_time: f64,
    /// When the request for the document was issued
    pub request_start: f64,
    /// When the first response byte arrived
    pub response_start: f64,
    /// When the document became interactive
    pub dom_interactive: f64,
    /// When the load event finished
    pub load_event_end: f64,
}

/// Source of navigation and paint timing records.
pub trait TimingProvider {
    /// The recorded navigation entry, if any.
    fn navigation(&self) -> Option<NavigationTiming>;
    /// Start time of the paint entry called `name`, if recorded.
    fn paint(&self, name: &str) -> Option<f64>;
    /// Observe navigation entries, including already-buffered ones, for the
    /// lifetime of the returned [`Subscription`].
    fn observe_navigation(&self, listener: Listener<NavigationTiming>) -> Subscription;
}

impl<T> TimingProvider for std::sync::Arc<T>
where
    T: TimingProvider + ?Sized,
{
    fn navigation(&self) -> Option<NavigationTiming> {
        (**self).navigation()
    }

    fn paint(&self, name: &str) -> Option<f64> {
        (**self).paint(name)
    }

    fn observe_navigation(&self, listener: Listener<NavigationTiming>) -> Subscription {
        (**self).observe_navigation(listener)
    }
}

/// Derive the displayed metrics from a navigation record and optional paint
/// timings. Every value is clamped at zero.
pub fn derive_metrics(
    navigation: &NavigationTiming,
    first_paint: Option<f64>,
    first_contentful_paint: Option<f64>,
) -> Vec<PerformanceMetric> {
    let mut metrics = vec![
        PerformanceMetric::new(
            "Time to First Byte (TTFB)",
            navigation.response_start - navigation.request_start,
        ),
        PerformanceMetric::new(
            "DOM Interactive",
            navigation.dom_interactive - navigation.start_time,
        ),
        PerformanceMetric::new(
            "Page Load Time",
            navigation.load_event_end - navigation.start_time,
        ),
    ];

    if let Some(start) = first_paint {
        metrics.push(PerformanceMetric::new("First Paint", start));
    }
    if let Some(start) = first_contentful_paint {
        metrics.push(PerformanceMetric::new("First Contentful Paint", start));
    }

    metrics
}

/// Derive metrics for `navigation`, reading paint timings from `provider`.
/// No navigation record means no metrics.
pub fn read_metrics<P>(provider: &P, navigation: Option<&NavigationTiming>) -> Vec<PerformanceMetric>
where
    P: TimingProvider + ?Sized,
{
    match navigation {
        Some(navigation) => derive_metrics(
            navigation,
            provider.paint(FIRST_PAINT),
            provider.paint(FIRST_CONTENTFUL_PAINT),
        ),
        None => {
            tracing::debug!("No navigation timing entry available");
            Vec::new()
        }
    }
}
