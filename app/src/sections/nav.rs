use bias_report::components::{Icon, ICON_FILE_TEXT};
use leptos::prelude::*;

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <a href="/" class="site-nav-brand">
                <Icon path=ICON_FILE_TEXT size="24" />
                <span>"Bias Analyzer"</span>
            </a>
            <div class="site-nav-links">
                <a href="/">"Home"</a>
                <a href="/analyze">"Analyze"</a>
            </div>
        </nav>
    }
}
