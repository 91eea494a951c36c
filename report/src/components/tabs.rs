//! Sidebar tab navigation driven by the active-tab signal.

use super::icons::{
    Icon, ICON_CHART_BAR, ICON_FILE_TEXT, ICON_TREND_UP, ICON_WARNING_CIRCLE,
};
use crate::series::Tab;
use leptos::prelude::*;

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Overview => ICON_FILE_TEXT,
        Tab::Sentiment => ICON_TREND_UP,
        Tab::Political => ICON_CHART_BAR,
        Tab::Toxicity => ICON_WARNING_CIRCLE,
    }
}

/// One button per offered tab; clicking moves the active-tab signal, which
/// is the whole of the tab state machine.
#[component]
pub fn TabBar(tabs: Vec<Tab>, active: RwSignal<Tab>) -> impl IntoView {
    let buttons = tabs
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class=move || if active.get() == tab { "nav-item active" } else { "nav-item" }
                    on:click=move |_| active.set(tab)
                >
                    <Icon path=tab_icon(tab) class="icon-sm" />
                    <span>{tab.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! { <nav class="sidebar-nav">{buttons}</nav> }
}
