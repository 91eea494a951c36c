//! Hand-rolled SVG charts: donut distribution and percent bar chart.
//!
//! No JS chart runtime; each chart is a plain SVG scaled by CSS. The donut
//! uses per-slice `stroke-dasharray` arcs on a shared ring, the bar chart
//! plots a fixed 0-100 percent domain.

use crate::series::ChartSeriesEntry;
use leptos::prelude::*;

/// Donut chart of one series. Slice angles are proportional to each entry's
/// share of the series total; an empty series renders just the track ring.
#[component]
pub fn DonutChart(entries: Vec<ChartSeriesEntry>) -> impl IntoView {
    let radius = 80.0_f64;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let total: f64 = entries.iter().map(|entry| entry.value).sum();
    // Small gap between slices; none when a single slice fills the ring.
    let gap = if entries.len() > 1 { 4.0 } else { 0.0 };

    let mut start = 0.0_f64;
    let slices = entries
        .into_iter()
        .map(|entry| {
            let fraction = if total > 0.0 { entry.value / total } else { 0.0 };
            let length = (fraction * circumference - gap).max(0.0);
            let dash_array = format!("{length:.2} {:.2}", circumference - length);
            let dash_offset = format!("{:.2}", -start);
            start += fraction * circumference;
            let tooltip = format!("{}: {}", entry.name, entry.percent_label());
            view! {
                <circle
                    cx="120"
                    cy="120"
                    r=radius.to_string()
                    fill="none"
                    stroke=entry.color
                    stroke-width="36"
                    stroke-dasharray=dash_array
                    stroke-dashoffset=dash_offset
                    transform="rotate(-90 120 120)"
                >
                    <title>{tooltip}</title>
                </circle>
            }
        })
        .collect_view();

    view! {
        <div class="chart donut-chart">
            <svg viewBox="0 0 240 240" role="img">
                <circle
                    cx="120"
                    cy="120"
                    r=radius.to_string()
                    fill="none"
                    stroke="var(--ring-track)"
                    stroke-width="36"
                />
                {slices}
            </svg>
        </div>
    }
}

/// Bar chart of one series on a fixed 0-100 percent domain, with dashed
/// gridlines and rotated category labels.
#[component]
pub fn ScoreBarChart(entries: Vec<ChartSeriesEntry>) -> impl IntoView {
    const WIDTH: f64 = 420.0;
    const HEIGHT: f64 = 260.0;
    const LEFT: f64 = 40.0;
    const RIGHT: f64 = 12.0;
    const TOP: f64 = 16.0;
    const BOTTOM: f64 = 52.0;

    let plot_w = WIDTH - LEFT - RIGHT;
    let plot_h = HEIGHT - TOP - BOTTOM;
    let slot = plot_w / entries.len().max(1) as f64;
    let bar_w = (slot * 0.6).min(44.0);

    let grid = [0.0_f64, 25.0, 50.0, 75.0, 100.0]
        .iter()
        .map(|tick| {
            let y = TOP + plot_h * (1.0 - tick / 100.0);
            view! {
                <line
                    x1=format!("{LEFT}")
                    y1=format!("{y:.1}")
                    x2=format!("{:.1}", LEFT + plot_w)
                    y2=format!("{y:.1}")
                    stroke="var(--grid-line)"
                    stroke-dasharray="3 3"
                />
                <text
                    x=format!("{:.1}", LEFT - 8.0)
                    y=format!("{:.1}", y + 4.0)
                    text-anchor="end"
                    class="axis-label"
                >
                    {format!("{tick}")}
                </text>
            }
        })
        .collect_view();

    let bars = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let x = LEFT + slot * index as f64 + (slot - bar_w) / 2.0;
            let height = (plot_h * (entry.value / 100.0).clamp(0.0, 1.0)).max(1.0);
            let y = TOP + plot_h - height;
            let label_x = LEFT + slot * index as f64 + slot / 2.0;
            let label_y = TOP + plot_h + 16.0;
            let tooltip = format!("{}: {}", entry.name, entry.percent_label());
            view! {
                <rect
                    x=format!("{x:.1}")
                    y=format!("{y:.1}")
                    width=format!("{bar_w:.1}")
                    height=format!("{height:.1}")
                    rx="4"
                    fill=entry.color
                >
                    <title>{tooltip}</title>
                </rect>
                <text
                    x=format!("{label_x:.1}")
                    y=format!("{label_y:.1}")
                    text-anchor="end"
                    transform=format!("rotate(-20 {label_x:.1} {label_y:.1})")
                    class="axis-label"
                >
                    {entry.name}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="chart bar-chart">
            <svg viewBox=format!("0 0 {WIDTH} {HEIGHT}") role="img">
                {grid}
                {bars}
            </svg>
        </div>
    }
}

/// Legend grid: one colored dot, name, and percent per series entry.
#[component]
pub fn ChartLegend(entries: Vec<ChartSeriesEntry>) -> impl IntoView {
    let items = entries
        .into_iter()
        .map(|entry| {
            view! {
                <div class="legend-item">
                    <span class="legend-dot" style=format!("background-color: {}", entry.color)></span>
                    <p class="legend-name">{entry.name.clone()}</p>
                    <p class="legend-value">{entry.percent_label()}</p>
                </div>
            }
        })
        .collect_view();

    view! { <div class="chart-legend">{items}</div> }
}
