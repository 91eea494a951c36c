//! Text panels: analyzed-input card and the model summary.

use leptos::prelude::*;

/// Stock copy shown when the service sent no summary of its own.
const DEFAULT_SUMMARY: &str = "The analysis is based on NLP models trained on \
neutral datasets to ensure objective evaluation. Select a category tab for a \
per-score breakdown of the submitted content.";

/// Card echoing the analyzed text with character and word counts.
#[component]
pub fn AnalyzedTextPanel(entry: String) -> impl IntoView {
    let characters = entry.chars().count();
    let words = entry.split_whitespace().count();
    let counts = format!(
        "{characters} characters \u{2022} {words} {}",
        if words == 1 { "word" } else { "words" }
    );

    view! {
        <div class="panel analyzed-text">
            <h3>"Analyzed Text"</h3>
            <p class="analyzed-text-body">{entry}</p>
            <p class="analyzed-text-counts">{counts}</p>
        </div>
    }
}

/// Panel for the model-generated summary, with a stock fallback.
#[component]
pub fn SummaryPanel(summary: Option<String>) -> impl IntoView {
    view! {
        <div class="panel">
            <h3>"Analysis Summary"</h3>
            <p class="summary-body">{summary.unwrap_or_else(|| DEFAULT_SUMMARY.to_string())}</p>
        </div>
    }
}
