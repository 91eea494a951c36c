use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Detect and understand bias in your content."</p>
            <div>
                <a href="/analyze">"Start an analysis"</a>
                <a href="/results">"View results"</a>
            </div>
        </footer>
    }
}
