use crate::api;
use crate::AnalysisSession;
use bias_report::components::{
    AnalyzedTextPanel, ChartLegend, DonutChart, Icon, PoliticalCards, ScoreBarChart, ScoreCards,
    SummaryPanel, TabBar, ICON_WARNING_CIRCLE,
};
use bias_report::series::{ChartData, Tab};
use bias_report::types::AnalysisRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

const SENTIMENT_HIGH: &str = "High likelihood of this sentiment present in the content.";
const SENTIMENT_LOW: &str = "Low occurrence detected for this sentiment category.";
const TOXICITY_HIGH: &str = "High likelihood of this toxic indicator present in the content.";
const TOXICITY_LOW: &str = "Low occurrence detected for this toxicity category.";

#[derive(Clone)]
enum ResultsState {
    Missing,
    Loading,
    Failed,
    Ready(AnalysisSession),
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Option<AnalysisSession>>>();
    let query = use_query_map();

    let state = RwSignal::new(match session.get_untracked() {
        Some(existing) => ResultsState::Ready(existing),
        None => ResultsState::Missing,
    });

    // Landing here without in-memory state (a reload, or a shared link):
    // re-issue the analysis from the query parameter with default options.
    if matches!(state.get_untracked(), ResultsState::Missing) {
        let entry = query
            .with_untracked(|params| params.get("entry"))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        if let Some(entry) = entry {
            state.set(ResultsState::Loading);
            spawn_local(async move {
                let request = AnalysisRequest {
                    entry: entry.clone(),
                    ..Default::default()
                };
                match api::analyze(&request, None).await {
                    Ok(response) => {
                        let fresh = AnalysisSession { entry, response };
                        session.set(Some(fresh.clone()));
                        state.set(ResultsState::Ready(fresh));
                    }
                    Err(_) => state.set(ResultsState::Failed),
                }
            });
        }
    }

    view! {
        {move || match state.get() {
            ResultsState::Missing => {
                view! { <CenteredNote message="No analysis results available." /> }.into_any()
            }
            ResultsState::Loading => view! { <CenteredNote message="Analyzing…" /> }.into_any(),
            ResultsState::Failed => {
                view! {
                    <CenteredNote message="Failed to fetch analysis results. Please try again." />
                }
                .into_any()
            }
            ResultsState::Ready(ready) => view! { <Dashboard session=ready /> }.into_any(),
        }}
    }
}

#[component]
fn CenteredNote(message: &'static str) -> impl IntoView {
    view! {
        <div class="centered-note">
            <p>{message}</p>
        </div>
    }
}

#[component]
fn Dashboard(session: AnalysisSession) -> impl IntoView {
    let data = ChartData::from_result(&session.response.results);
    let tabs = data.tabs();
    let active = RwSignal::new(tabs.first().copied().unwrap_or(Tab::Overview));

    view! {
        <div class="app-shell">
            <aside class="app-sidebar">
                <div class="sidebar-header">
                    <h1>"Bias Analyzer"</h1>
                    <p>"Content Analysis Tool"</p>
                </div>
                <TabBar tabs=tabs active=active />
                <div class="sidebar-note">
                    <Icon path=ICON_WARNING_CIRCLE class="icon-sm" />
                    <p>"Analysis based on NLP models trained on neutral datasets"</p>
                </div>
            </aside>

            <div class="app-content">
                <div class="content-inner">
                    <header class="content-header">
                        <h2>{move || active.get().label()}</h2>
                        <p>"Real-time bias detection and analysis"</p>
                    </header>

                    <AnalyzedTextPanel entry=session.entry.clone() />

                    {move || {
                        let data = data.clone();
                        match active.get() {
                            Tab::Overview => view! { <OverviewView data=data /> }.into_any(),
                            Tab::Sentiment => view! { <SentimentView data=data /> }.into_any(),
                            Tab::Political => view! { <PoliticalView data=data /> }.into_any(),
                            Tab::Toxicity => view! { <ToxicityView data=data /> }.into_any(),
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SentimentView(data: ChartData) -> impl IntoView {
    view! {
        <div class="tab-grid">
            <div class="panel">
                <h3>"Sentiment Distribution"</h3>
                <DonutChart entries=data.sentiment.clone() />
                <ChartLegend entries=data.sentiment />
            </div>
            <ScoreCards
                entries=data.sentiment_ranked
                high_message=SENTIMENT_HIGH
                low_message=SENTIMENT_LOW
            />
        </div>
    }
}

#[component]
fn PoliticalView(data: ChartData) -> impl IntoView {
    view! {
        <div class="tab-grid">
            <div class="panel">
                <h3>"Political Bias Distribution"</h3>
                <DonutChart entries=data.political.clone() />
                <ChartLegend entries=data.political.clone() />
            </div>
            <PoliticalCards entries=data.political />
        </div>
    }
}

#[component]
fn ToxicityView(data: ChartData) -> impl IntoView {
    view! {
        <div class="tab-grid">
            <div class="panel">
                <h3>"Toxicity Distribution"</h3>
                <ScoreBarChart entries=data.toxicity.clone() />
                <ChartLegend entries=data.toxicity.clone() />
            </div>
            <ScoreCards
                entries=data.toxicity
                high_message=TOXICITY_HIGH
                low_message=TOXICITY_LOW
            />
        </div>
    }
}

#[component]
fn OverviewView(data: ChartData) -> impl IntoView {
    let sentiment = (!data.sentiment.is_empty()).then(|| {
        view! {
            <div class="panel">
                <h3>"Sentiment Analysis"</h3>
                <DonutChart entries=data.sentiment.clone() />
            </div>
        }
    });
    let political = (!data.political.is_empty()).then(|| {
        view! {
            <div class="panel">
                <h3>"Political Bias"</h3>
                <DonutChart entries=data.political.clone() />
            </div>
        }
    });
    let toxicity = (!data.toxicity.is_empty()).then(|| {
        view! {
            <div class="panel overview-wide">
                <h3>"Toxicity Distribution"</h3>
                <ScoreBarChart entries=data.toxicity.clone() />
            </div>
        }
    });

    view! {
        <div>
            <div class="overview-grid">
                {sentiment}
                {political}
            </div>
            {toxicity}
            <SummaryPanel summary=data.summary />
        </div>
    }
}
