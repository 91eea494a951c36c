//! Leptos UI components for the analysis dashboard.
//!
//! Modular, reusable building blocks composed by the app's pages:
//!
//! ```text
//! Results page
//! ├── TabBar (sidebar, signal-driven)
//! ├── AnalyzedTextPanel
//! ├── DonutChart + ChartLegend (sentiment / political)
//! ├── ScoreBarChart + ChartLegend (toxicity)
//! ├── ScoreCards / PoliticalCards (ranked stats)
//! └── SummaryPanel (overview)
//! ```

mod cards;
mod charts;
mod icons;
mod summary;
mod tabs;

pub use cards::{PoliticalCards, ScoreCards};
pub use charts::{ChartLegend, DonutChart, ScoreBarChart};
pub use icons::*;
pub use summary::{AnalyzedTextPanel, SummaryPanel};
pub use tabs::TabBar;
