use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a href="/">"Back to start"</a>
        </div>
    }
}
