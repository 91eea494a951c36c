//! CSS for the application.
//!
//! One stylesheet constant injected by the app shell, covering the landing
//! and form pages plus the dashboard (sidebar, tabs, charts, stat cards).
//! Light sage/stone theme.
//!
//! # Customization
//!
//! ```rust
//! use bias_report::styles::APP_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", APP_CSS, my_css);
//! ```

/// Complete stylesheet for the application.
pub const APP_CSS: &str = r#"
:root {
    --sage: #9caf88;
    --sage-light: #b8c9a8;
    --sage-dark: #8a9d7a;
    --stone-900: #1c1917;
    --stone-800: #292524;
    --stone-700: #44403c;
    --stone-600: #57534e;
    --stone-500: #78716c;
    --stone-300: #d6d3d1;
    --stone-200: #e7e5e4;
    --stone-100: #f5f5f4;
    --amber-50: #fffbeb;
    --accent-green: #10b981;
    --error-red: #e11d48;
    --ring-track: #f0efed;
    --grid-line: #d6d3d1;
    --radius-card: 16px;
    --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html, body {
    margin: 0;
    min-height: 100vh;
}

body {
    font-family: var(--font-sans);
    background: linear-gradient(135deg, var(--stone-100), var(--amber-50), var(--stone-200));
    color: var(--stone-800);
    line-height: 1.6;
}

button {
    font-family: inherit;
    cursor: pointer;
}

.icon-sm {
    width: 20px;
    height: 20px;
    flex-shrink: 0;
}

/* ---------- layout chrome ---------- */

.layout {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

.layout-content {
    flex: 1;
}

.layout-minimal {
    display: flex;
    min-height: 100vh;
    align-items: center;
    justify-content: center;
    padding: 24px;
}

.layout-minimal-content {
    width: 100%;
    max-width: 720px;
}

.site-nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 16px 32px;
}

.site-nav-brand {
    display: flex;
    align-items: center;
    gap: 10px;
    font-weight: 700;
    font-size: 18px;
    color: var(--stone-800);
    text-decoration: none;
}

.site-nav-brand svg {
    color: var(--sage-dark);
}

.site-nav-links {
    display: flex;
    gap: 20px;
}

.site-nav-links a {
    color: var(--stone-600);
    text-decoration: none;
    font-size: 15px;
}

.site-nav-links a:hover {
    color: var(--stone-900);
}

.site-footer {
    border-top: 1px solid var(--stone-200);
    padding: 20px 32px;
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 12px;
    font-size: 14px;
    color: var(--stone-500);
}

.site-footer a {
    color: var(--stone-600);
    margin-left: 16px;
}

/* ---------- welcome page ---------- */

.hero {
    max-width: 1180px;
    margin: 0 auto;
    padding: 72px 32px;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 64px;
    align-items: center;
}

.hero-icon {
    width: 64px;
    height: 64px;
    border-radius: 16px;
    background: var(--sage);
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--stone-800);
    margin-bottom: 20px;
}

.hero h1 {
    font-size: 46px;
    margin: 0 0 8px;
    color: var(--stone-800);
}

.hero-subtitle {
    font-size: 20px;
    color: var(--stone-600);
    margin: 0 0 16px;
}

.hero-description {
    font-size: 17px;
    color: var(--stone-600);
    max-width: 440px;
}

.btn-primary {
    display: inline-flex;
    align-items: center;
    gap: 10px;
    margin-top: 20px;
    padding: 14px 28px;
    border: none;
    border-radius: 12px;
    background: var(--sage);
    color: var(--stone-900);
    font-size: 17px;
    font-weight: 600;
    box-shadow: 0 8px 20px rgba(28, 25, 23, 0.12);
    transition: transform 0.2s ease;
}

.btn-primary:hover {
    transform: scale(1.04);
}

.feature-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 20px;
}

.feature-card {
    background: #fff;
    border: 1px solid var(--stone-200);
    border-radius: var(--radius-card);
    box-shadow: 0 12px 24px rgba(28, 25, 23, 0.08);
    padding: 20px;
}

.feature-card-head {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 10px;
}

.feature-card-icon {
    width: 44px;
    height: 44px;
    border-radius: 12px;
    background: var(--sage-light);
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--stone-800);
}

.feature-card h3 {
    margin: 0;
    font-size: 17px;
}

.feature-card p {
    margin: 0;
    font-size: 14px;
    color: var(--stone-600);
}

.benefits {
    max-width: 1180px;
    margin: 0 auto 64px;
    padding: 0 32px;
}

.benefits-card {
    background: #fff;
    border: 1px solid var(--stone-200);
    border-radius: var(--radius-card);
    box-shadow: 0 12px 24px rgba(28, 25, 23, 0.08);
    padding: 36px;
    margin-bottom: 40px;
}

.benefits-card h2 {
    text-align: center;
    margin: 0 0 28px;
}

.benefits-list {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 18px;
}

.benefit {
    display: flex;
    align-items: flex-start;
    gap: 10px;
    color: var(--stone-700);
}

.benefit svg {
    color: var(--accent-green);
    margin-top: 3px;
}

.use-cases {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 20px;
}

.use-case {
    border-radius: var(--radius-card);
    border: 1px solid;
    padding: 22px;
    box-shadow: 0 6px 16px rgba(28, 25, 23, 0.06);
}

.use-case h3 {
    margin: 0 0 8px;
}

.use-case p {
    margin: 0;
}

.use-case-academic { background: #eff6ff; border-color: #bfdbfe; color: #1e3a8a; }
.use-case-professional { background: #faf5ff; border-color: #e9d5ff; color: #581c87; }
.use-case-personal { background: var(--amber-50); border-color: #fde68a; color: #78350f; }

/* ---------- analyze form ---------- */

.analyze-form {
    background: rgba(255, 255, 255, 0.9);
    border: 1px solid #a7f3d0;
    border-radius: 24px;
    box-shadow: 0 14px 32px rgba(28, 25, 23, 0.1);
    padding: 32px;
    display: flex;
    flex-direction: column;
    gap: 22px;
}

.analyze-form h1 {
    margin: 0;
    font-size: 28px;
}

.form-subtitle {
    margin: 4px 0 0;
    color: var(--stone-600);
}

.form-panel {
    border: 2px solid var(--stone-200);
    border-radius: var(--radius-card);
    padding: 18px;
}

.form-panel-head {
    display: flex;
    align-items: center;
    gap: 10px;
    margin-bottom: 12px;
}

.form-panel-head h2, .form-panel-head h3 {
    margin: 0;
    font-size: 17px;
}

.form-panel textarea {
    width: 100%;
    resize: none;
    border: 2px solid var(--stone-300);
    border-radius: 12px;
    background: rgba(236, 253, 245, 0.5);
    padding: 14px 18px;
    font-size: 16px;
    font-family: inherit;
    color: var(--stone-900);
}

.form-panel textarea:focus {
    outline: none;
    border-color: var(--stone-500);
}

.form-panel textarea[readonly] {
    background: var(--stone-100);
    color: var(--stone-600);
}

.input-meta {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-top: 10px;
    font-size: 14px;
    color: var(--stone-500);
}

.file-input {
    display: none;
}

.upload-btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 8px 12px;
    border-radius: 8px;
    color: var(--stone-600);
    font-size: 14px;
    font-weight: 500;
    cursor: pointer;
}

.upload-btn:hover {
    background: var(--stone-100);
}

.upload-note {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-top: 8px;
    font-size: 14px;
    color: var(--stone-600);
}

.upload-cancel {
    border: none;
    background: none;
    color: var(--error-red);
    font-size: 14px;
    text-decoration: underline;
    padding: 0;
}

.option-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 20px;
}

.option-row {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 10px;
    border-radius: 10px;
    cursor: pointer;
}

.option-row:hover {
    background: var(--stone-100);
}

.option-row input {
    width: 18px;
    height: 18px;
    accent-color: #16a34a;
}

.option-row p {
    margin: 0;
    font-weight: 500;
}

.option-row .option-hint {
    font-weight: 400;
    font-size: 13px;
    color: var(--stone-600);
}

.sensitivity-note {
    display: flex;
    align-items: flex-start;
    gap: 8px;
    margin-top: 14px;
    padding: 14px;
    background: var(--amber-50);
    border: 2px solid #fde68a;
    border-radius: 12px;
    font-size: 14px;
    color: #78350f;
}

.sensitivity-note svg {
    color: #d97706;
    flex-shrink: 0;
    margin-top: 2px;
}

.form-error {
    margin: 0;
    font-size: 14px;
    font-weight: 500;
    color: var(--error-red);
}

.submit-btn {
    display: inline-flex;
    width: 100%;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 14px 24px;
    border: none;
    border-radius: var(--radius-card);
    background: var(--accent-green);
    color: #fff;
    font-size: 16px;
    font-weight: 600;
    box-shadow: 0 6px 14px rgba(16, 185, 129, 0.3);
    transition: transform 0.2s ease;
}

.submit-btn:hover:enabled {
    transform: translateY(-2px);
}

.submit-btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.form-note {
    display: flex;
    align-items: flex-start;
    gap: 10px;
    padding: 14px;
    border-radius: 12px;
    background: #065f46;
    color: #d1fae5;
    font-size: 14px;
}

.form-note svg {
    flex-shrink: 0;
    margin-top: 2px;
}

/* ---------- results dashboard ---------- */

.app-shell {
    display: flex;
    min-height: 100vh;
}

.app-sidebar {
    width: 256px;
    flex-shrink: 0;
    background: var(--sage);
    padding: 24px;
    box-shadow: 4px 0 18px rgba(28, 25, 23, 0.18);
    display: flex;
    flex-direction: column;
}

.sidebar-header h1 {
    margin: 0 0 4px;
    font-size: 24px;
    color: var(--stone-800);
}

.sidebar-header p {
    margin: 0 0 28px;
    font-size: 14px;
    color: var(--stone-700);
}

.sidebar-nav {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.nav-item {
    display: flex;
    align-items: center;
    gap: 12px;
    width: 100%;
    padding: 12px 16px;
    border: none;
    border-radius: 12px;
    background: none;
    color: var(--stone-700);
    font-size: 15px;
    font-weight: 500;
    text-align: left;
    transition: all 0.2s ease;
}

.nav-item:hover {
    background: rgba(68, 64, 60, 0.12);
}

.nav-item.active {
    background: var(--sage-light);
    color: var(--stone-800);
    box-shadow: 0 6px 14px rgba(28, 25, 23, 0.16);
}

.sidebar-note {
    margin-top: auto;
    padding: 16px;
    border-radius: 12px;
    background: var(--sage-dark);
    color: var(--stone-100);
    font-size: 14px;
}

.sidebar-note p {
    margin: 8px 0 0;
}

.app-content {
    flex: 1;
    padding: 32px;
    overflow-y: auto;
}

.content-inner {
    max-width: 1100px;
    margin: 0 auto;
}

.content-header h2 {
    margin: 0 0 4px;
    font-size: 30px;
}

.content-header p {
    margin: 0 0 28px;
    color: var(--stone-600);
}

.panel {
    background: #fff;
    border: 2px solid var(--stone-200);
    border-radius: var(--radius-card);
    box-shadow: 0 12px 24px rgba(28, 25, 23, 0.08);
    padding: 28px;
}

.panel h3 {
    margin: 0 0 18px;
    font-size: 19px;
}

.analyzed-text {
    margin-bottom: 28px;
    text-align: center;
}

.analyzed-text-body {
    margin: 0;
    color: var(--stone-700);
    white-space: pre-wrap;
}

.analyzed-text-counts {
    margin: 10px 0 0;
    font-size: 13px;
    color: var(--stone-500);
}

.tab-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 24px;
    align-items: start;
}

.overview-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 24px;
    margin-bottom: 24px;
}

.overview-wide {
    margin-bottom: 24px;
}

.chart svg {
    display: block;
    width: 100%;
    height: auto;
}

.donut-chart {
    max-width: 320px;
    margin: 0 auto;
}

.axis-label {
    font-size: 12px;
    fill: var(--stone-600);
}

.chart-legend {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 12px;
    margin-top: 20px;
}

.legend-item {
    text-align: center;
}

.legend-dot {
    display: block;
    width: 14px;
    height: 14px;
    border-radius: 50%;
    margin: 0 auto 6px;
}

.legend-name {
    margin: 0;
    font-size: 13px;
    font-weight: 500;
    color: var(--stone-700);
}

.legend-value {
    margin: 0;
    font-size: 12px;
    color: var(--stone-500);
}

.stat-stack {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.stat-card {
    border: 2px solid;
    border-radius: var(--radius-card);
    box-shadow: 0 10px 20px rgba(28, 25, 23, 0.08);
    padding: 20px;
}

.stat-card-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 8px;
}

.stat-card h4 {
    margin: 0;
    font-size: 16px;
}

.stat-card-value {
    font-size: 26px;
    font-weight: 700;
}

.stat-card p {
    margin: 0;
    font-size: 14px;
    color: var(--stone-700);
}

.political-card h4 {
    color: inherit;
}

.bucket-left { background: linear-gradient(135deg, #eff6ff, #dbeafe); border-color: #bfdbfe; color: #1e3a8a; }
.bucket-center { background: linear-gradient(135deg, #faf5ff, #f3e8ff); border-color: #e9d5ff; color: #581c87; }
.bucket-right { background: linear-gradient(135deg, #fdf2f8, #fce7f3); border-color: #fbcfe8; color: #831843; }
.bucket-other { background: var(--stone-100); border-color: var(--stone-300); color: var(--stone-700); }

.summary-body {
    margin: 0;
    color: var(--stone-600);
}

.centered-note {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--stone-800);
}

/* ---------- not found ---------- */

.not-found {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 8px;
}

.not-found h1 {
    margin: 0;
    font-size: 56px;
}

.not-found a {
    color: var(--sage-dark);
    font-weight: 600;
}

/* ---------- responsive ---------- */

@media (max-width: 900px) {
    .hero, .tab-grid, .overview-grid, .option-grid,
    .feature-grid, .benefits-list, .use-cases {
        grid-template-columns: 1fr;
    }

    .app-shell {
        flex-direction: column;
    }

    .app-sidebar {
        width: 100%;
    }
}
"#;
