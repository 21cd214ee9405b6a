use leptos::prelude::*;

/// Page header.
#[component]
pub fn Hero(#[prop(into)] title: String, #[prop(into)] tagline: String) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content">
                <h1>{title}</h1>
                <p>{tagline}</p>
            </div>
        </section>
    }
}
