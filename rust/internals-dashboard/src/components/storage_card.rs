//! Key/value table card.
//!
//! Renders a storage or cookie snapshot with its totals. Cards that are
//! given an `on_clear` action show a "Clear" button gated behind a
//! [`ConfirmDialog`].

use internals_probe::{Entry, Totals, format_kilobytes};
use leptos::prelude::*;

use super::{ConfirmDialog, DialogState};

/// Table of entries with item count and, when sizes are tracked, total size.
#[component]
pub fn StorageCard(
    /// Card heading, e.g. "Local Storage".
    #[prop(into)]
    title: String,
    /// Entries from the latest snapshot.
    #[prop(into)]
    entries: Signal<Vec<Entry>>,
    /// Whether to show the size column and total size.
    #[prop(default = true)]
    show_sizes: bool,
    /// Destructive action offered behind a confirmation step.
    #[prop(optional, into)]
    on_clear: Option<Callback<()>>,
) -> impl IntoView {
    let dialog = RwSignal::new(DialogState::Closed);
    let totals = Memo::new(move |_| entries.with(|entries| Totals::of(entries, show_sizes)));
    let column_span = if show_sizes { "3" } else { "2" };

    let clear_controls = on_clear.map(|on_clear| {
        let dialog_title = format!("Clear {title}?");
        let description = format!(
            "This action will remove all entries from {}. This cannot be undone.",
            title.to_lowercase()
        );
        let label = format!("Clear {title}");

        view! {
            <div class="card-footer">
                <button class="button" on:click=move |_| dialog.update(DialogState::open)>
                    {label}
                </button>
            </div>
            <ConfirmDialog
                state=dialog
                title=dialog_title
                description=description
                on_confirm=on_clear
            />
        }
    });

    view! {
        <div class="card storage-card">
            <div class="card-header">
                <h3>{title}</h3>
            </div>
            <div class="card-body">
                <div class="card-totals">
                    <div>"Total Items: "<span class="accent">{move || totals.get().items}</span></div>
                    {show_sizes.then(|| view! {
                        <div>
                            "Total Size: "
                            <span class="accent">{move || format_kilobytes(totals.get().bytes)}</span>
                            " KB"
                        </div>
                    })}
                </div>
                <div class="table-scroll">
                    <table class="entry-table">
                        <thead>
                            <tr>
                                <th>"Key"</th>
                                <th>"Value"</th>
                                {show_sizes.then(|| view! { <th>"Size (bytes)"</th> })}
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = entries.get();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td class="empty" colspan=column_span>"No data"</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    rows.into_iter().map(|Entry { key, value, size }| {
                                        let size = size.unwrap_or_default();
                                        let key_title = key.clone();
                                        let value_title = value.clone();
                                        view! {
                                            <tr>
                                                <td class="key">
                                                    <div class="truncate" title=key_title>{key}</div>
                                                </td>
                                                <td class="value">
                                                    <div class="truncate" title=value_title>{value}</div>
                                                </td>
                                                {show_sizes.then(|| view! { <td class="size">{size}</td> })}
                                            </tr>
                                        }
                                    }).collect::<Vec<_>>().into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
            {clear_controls}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    fn render(entries: Vec<Entry>, show_sizes: bool, clearable: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let entries = RwSignal::new(entries);
            if clearable {
                view! {
                    <StorageCard
                        title="Local Storage"
                        entries=entries
                        show_sizes=show_sizes
                        on_clear=Callback::new(|_: ()| {})
                    />
                }
                .to_html()
            } else {
                view! { <StorageCard title="Local Storage" entries=entries show_sizes=show_sizes /> }
                    .to_html()
            }
        })
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_spans_the_empty_row_across_every_column() {
        let html = render(Vec::new(), true, false);
        assert!(html.contains("No data"));
        assert!(html.contains(r#"colspan="3""#));
        assert!(html.contains("Size (bytes)"));

        let html = render(Vec::new(), false, false);
        assert!(html.contains("No data"));
        assert!(html.contains(r#"colspan="2""#));
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_hides_sizes_when_untracked() {
        let html = render(vec![Entry::without_size("theme", "dark")], false, false);

        assert!(html.contains("Total Items"));
        assert!(!html.contains("Total Size"));
        assert!(!html.contains("Size (bytes)"));
        assert!(!html.contains("No data"));
        assert!(html.contains(r#"title="dark""#));
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_shows_sizes_and_totals_when_tracked() {
        let html = render(
            vec![Entry::sized("theme", "dark"), Entry::sized("name", "José")],
            true,
            false,
        );

        assert!(html.contains("Total Size"));
        assert!(html.contains("0.01"));
        assert!(html.contains(r#"title="theme""#));
        assert!(html.contains(r#"title="José""#));
        assert!(!html.contains("No data"));
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_offers_clear_only_with_an_action() {
        assert!(render(Vec::new(), true, true).contains("Clear Local Storage"));
        assert!(!render(Vec::new(), true, false).contains("Clear Local Storage"));
    }
}
