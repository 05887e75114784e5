use leptos::prelude::*;

/// Placeholder shown while the current route's data is loading.
#[component]
pub fn LoadingAnimation() -> impl IntoView {
    view! {
        <section id="loading">
            <div class="loader"></div>
        </section>
    }
}
