//! Navigation performance bar chart.

use internals_probe::{PerformanceMetric, format_millis};
use leptos::prelude::*;

/// Narrowest bar drawn, so near-zero durations stay visible.
pub const BAR_FLOOR_PERCENT: f64 = 2.0;

/// Scale used when every metric is zero.
pub const DEFAULT_SCALE_MS: f64 = 1000.0;

/// The duration a full-width bar represents: the largest metric, or
/// [`DEFAULT_SCALE_MS`] when there is none above zero.
pub fn scale_max(metrics: &[PerformanceMetric]) -> f64 {
    let max = metrics
        .iter()
        .map(|metric| metric.value_ms)
        .fold(0.0, f64::max);

    if max > 0.0 { max } else { DEFAULT_SCALE_MS }
}

/// Filled width of a bar, in percent, clamped to
/// [`BAR_FLOOR_PERCENT`]..=100.
pub fn bar_width_percent(value_ms: f64, max_ms: f64) -> f64 {
    (value_ms / max_ms.max(1.0) * 100.0).clamp(BAR_FLOOR_PERCENT, 100.0)
}

/// One bar per metric, scaled to the largest, or a "no data" message.
#[component]
pub fn PerformanceCard(
    /// Metrics derived from the latest navigation entry.
    #[prop(into)]
    metrics: Signal<Vec<PerformanceMetric>>,
) -> impl IntoView {
    view! {
        <div class="card performance-card">
            <div class="card-header">
                <h3>"Navigation Performance"</h3>
            </div>
            <div class="card-body metric-bars">
                {move || {
                    let metrics = metrics.get();
                    if metrics.is_empty() {
                        view! {
                            <p class="empty">"No navigation entries available."</p>
                        }.into_any()
                    } else {
                        let max_ms = scale_max(&metrics);
                        metrics.into_iter().map(|metric| view! {
                            <MetricBar label=metric.label value_ms=metric.value_ms max_ms=max_ms />
                        }).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn MetricBar(label: String, value_ms: f64, max_ms: f64) -> impl IntoView {
    let width = bar_width_percent(value_ms, max_ms);

    view! {
        <div class="metric-bar">
            <div class="metric-bar-label">
                <span>{label}</span>
                <span class="accent">{format_millis(value_ms)}</span>
            </div>
            <div class="metric-bar-track">
                <div class="metric-bar-fill" style=format!("width: {width:.2}%")></div>
            </div>
        </div>
    }
}
