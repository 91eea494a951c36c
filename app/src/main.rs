// Bias Analyzer — Leptos 0.8 CSR app

mod api;
mod pages;
mod sections;

use bias_report::styles::APP_CSS;
use bias_report::types::AnalysisResponse;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::{AnalyzePage, NotFoundPage, ResultsPage, WelcomePage};

/// One submitted analysis: the trimmed input plus the service reply.
///
/// Provided as app-level context so the results route receives typed state
/// instead of ambient navigation state. Cleared implicitly on reload, in
/// which case the results page re-fetches from its query parameter.
#[derive(Clone, Debug)]
pub struct AnalysisSession {
    /// Trimmed text that was analyzed.
    pub entry: String,
    /// Service reply for that text.
    pub response: AnalysisResponse,
}

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_context(RwSignal::new(Option::<AnalysisSession>::None));

    view! {
        <style>{APP_CSS}</style>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=WelcomePage />
                <Route path=path!("/analyze") view=AnalyzePage />
                <Route path=path!("/results") view=ResultsPage />
            </Routes>
        </Router>
    }
}
