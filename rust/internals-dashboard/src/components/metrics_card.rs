//! Label/value list card.

use internals_probe::MetricItem;
use leptos::prelude::*;

/// List of label/value rows. Accented values are emphasized, and rows
/// carrying a status show a colored dot before the value.
#[component]
pub fn MetricsCard(
    /// Card heading.
    #[prop(into)]
    title: String,
    /// Rows, in display order.
    #[prop(into)]
    items: Signal<Vec<MetricItem>>,
) -> impl IntoView {
    view! {
        <div class="card metrics-card">
            <div class="card-header">
                <h3>{title}</h3>
            </div>
            <div class="card-body">
                <ul class="metric-list">
                    {move || items.get().into_iter().map(|item| view! {
                        <li>
                            <span class="metric-label">{item.label}</span>
                            <span class="metric-value" class:accent=item.accent>
                                {item.dot.map(|on| view! { <StatusDot on=on /> })}
                                {item.value}
                            </span>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn StatusDot(on: bool) -> impl IntoView {
    let class = if on { "status-dot dot-on" } else { "status-dot dot-off" };
    view! { <span class=class aria-hidden="true"></span> }
}
