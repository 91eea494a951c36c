use super::{SiteFooter, SiteNav};
use leptos::prelude::*;

/// Shared page chrome. The default variant wraps content in nav + footer;
/// `minimal` centers the content with no chrome, for the form page.
#[component]
pub fn AppLayout(#[prop(default = false)] minimal: bool, children: Children) -> impl IntoView {
    if minimal {
        view! {
            <div class="layout-minimal">
                <main class="layout-minimal-content">{children()}</main>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="layout">
                <SiteNav />
                <main class="layout-content">{children()}</main>
                <SiteFooter />
            </div>
        }
        .into_any()
    }
}
