//! Stat cards: per-entry score summaries next to each chart.

use crate::series::{rank_descending, ChartSeriesEntry};
use leptos::prelude::*;

/// Ranked stat cards tinted with the series color. One card per entry with
/// high/low occurrence copy at the documented threshold.
#[component]
pub fn ScoreCards(
    entries: Vec<ChartSeriesEntry>,
    /// Copy shown when the entry crosses the high-occurrence threshold.
    high_message: &'static str,
    /// Copy shown otherwise.
    low_message: &'static str,
) -> impl IntoView {
    let cards = entries
        .into_iter()
        .map(|entry| {
            let message = if entry.is_high() { high_message } else { low_message };
            let tint = format!(
                "background-color: {color}20; border-color: {color};",
                color = entry.color
            );
            let ink = format!("color: {}", entry.color);
            view! {
                <div class="stat-card" style=tint>
                    <div class="stat-card-head">
                        <h4 style=ink.clone()>{entry.name.clone()}</h4>
                        <span class="stat-card-value" style=ink>{entry.percent_label()}</span>
                    </div>
                    <p>{message}</p>
                </div>
            }
        })
        .collect_view();

    view! { <div class="stat-stack">{cards}</div> }
}

struct BucketCopy {
    title: &'static str,
    high: &'static str,
    low: &'static str,
    class: &'static str,
}

const POLITICAL_COPY: &[(&str, BucketCopy)] = &[
    (
        "left",
        BucketCopy {
            title: "Left-Leaning",
            high: "Progressive language and framing detected.",
            low: "Low presence of progressive framing detected.",
            class: "bucket-left",
        },
    ),
    (
        "center",
        BucketCopy {
            title: "Center",
            high: "Balanced political perspective maintained.",
            low: "Low presence of centrist framing detected.",
            class: "bucket-center",
        },
    ),
    (
        "right",
        BucketCopy {
            title: "Right-Leaning",
            high: "Conservative language and framing detected.",
            low: "Low presence of conservative framing detected.",
            class: "bucket-right",
        },
    ),
];

/// Political stat cards with per-bucket copy, sorted descending by score.
/// Buckets outside the known three fall back to generic occurrence copy.
#[component]
pub fn PoliticalCards(entries: Vec<ChartSeriesEntry>) -> impl IntoView {
    let cards = rank_descending(&entries)
        .into_iter()
        .map(|entry| {
            let copy = POLITICAL_COPY
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(&entry.name))
                .map(|(_, copy)| copy);

            let title = copy.map(|c| c.title.to_string()).unwrap_or_else(|| entry.name.clone());
            let message = match copy {
                Some(copy) if entry.is_high() => copy.high,
                Some(copy) => copy.low,
                None if entry.is_high() => "High presence of this political framing detected.",
                None => "Low presence of this political framing detected.",
            };
            let class = format!(
                "stat-card political-card {}",
                copy.map(|c| c.class).unwrap_or("bucket-other")
            );

            view! {
                <div class=class>
                    <div class="stat-card-head">
                        <h4>{title}</h4>
                        <span class="stat-card-value">{entry.percent_label()}</span>
                    </div>
                    <p>{message}</p>
                </div>
            }
        })
        .collect_view();

    view! { <div class="stat-stack">{cards}</div> }
}
