use crate::sections::AppLayout;
use bias_report::components::{
    Icon, ICON_ARROW_RIGHT, ICON_CHECK_CIRCLE, ICON_FILE_TEXT, ICON_LIGHTNING, ICON_SHIELD,
    ICON_TREND_UP,
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "Sentiment Analysis",
        "Detect emotional tone and language patterns in your content",
        "trend",
    ),
    (
        "Political Bias Detection",
        "Identify political leanings and partisan language",
        "shield",
    ),
    (
        "Toxicity Screening",
        "Surface insults, threats, and other toxic indicators",
        "file",
    ),
    (
        "Adjustable Sensitivity",
        "Control detection levels from subtle to comprehensive",
        "lightning",
    ),
];

const BENEFITS: &[&str] = &[
    "Transparent NLP models trained on neutral datasets",
    "Visual representations with charts and highlights",
    "Citations and references for flagged content",
    "Perfect for academic, professional, and personal use",
];

const USE_CASES: &[(&str, &str, &str)] = &[
    (
        "Academic",
        "Check essays, research, and educational content.",
        "use-case use-case-academic",
    ),
    (
        "Professional",
        "Ensure neutral workplace communication.",
        "use-case use-case-professional",
    ),
    (
        "Personal",
        "Evaluate news, social media, and online content.",
        "use-case use-case-personal",
    ),
];

fn feature_icon(key: &str) -> &'static str {
    match key {
        "shield" => ICON_SHIELD,
        "lightning" => ICON_LIGHTNING,
        "trend" => ICON_TREND_UP,
        _ => ICON_FILE_TEXT,
    }
}

#[component]
pub fn WelcomePage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <AppLayout>
            <section class="hero">
                <div>
                    <div class="hero-icon">
                        <Icon path=ICON_FILE_TEXT size="36" />
                    </div>
                    <h1>"Bias Analyzer"</h1>
                    <p class="hero-subtitle">"Detect and understand bias in your content"</p>
                    <p class="hero-description">
                        "Our NLP-powered tool helps you identify sentiment, political leanings, "
                        "and various forms of bias in your text with clarity and transparency."
                    </p>
                    <button class="btn-primary" on:click=move |_| navigate("/analyze", Default::default())>
                        "Get Started"
                        <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
                    </button>
                </div>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, description, icon)| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-card-head">
                                        <div class="feature-card-icon">
                                            <Icon path=feature_icon(icon) />
                                        </div>
                                        <h3>{*title}</h3>
                                    </div>
                                    <p>{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="benefits">
                <div class="benefits-card">
                    <h2>"Why Use Bias Analyzer?"</h2>
                    <div class="benefits-list">
                        {BENEFITS
                            .iter()
                            .map(|benefit| {
                                view! {
                                    <div class="benefit">
                                        <Icon path=ICON_CHECK_CIRCLE class="icon-sm" />
                                        <p>{*benefit}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="use-cases">
                    {USE_CASES
                        .iter()
                        .map(|(title, text, class)| {
                            view! {
                                <div class=*class>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </AppLayout>
    }
}
