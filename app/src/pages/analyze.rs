use crate::api;
use crate::sections::AppLayout;
use crate::AnalysisSession;
use bias_report::components::{
    Icon, ICON_CHECK_CIRCLE, ICON_FILE_TEXT, ICON_GEAR, ICON_UPLOAD, ICON_WARNING_CIRCLE,
};
use bias_report::types::{AnalysisRequest, SelectedCategories, Sensitivity};
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;
use web_sys::{AbortController, HtmlInputElement};

const ERR_EMPTY: &str = "Please add text to analyze before submitting.";
const ERR_GENERIC: &str = "An error occurred while processing your request. Please try again.";
const ERR_UPLOAD_TYPE: &str = "Please upload only .txt or .pdf files.";
const ERR_UPLOAD_SIZE: &str = "File is too large. The limit is 2 MB.";

/// MIME types the extraction endpoint accepts.
const UPLOAD_MIME_TYPES: &[&str] = &["text/plain", "application/pdf"];

/// Client-side mirror of the service's upload size limit.
const UPLOAD_MAX_BYTES: f64 = 2_000_000.0;

fn is_supported_upload(mime: &str) -> bool {
    UPLOAD_MIME_TYPES.contains(&mime)
}

/// Trimmed entry text, or `None` when there is nothing to analyze.
fn trimmed_entry(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn sensitivity_hint(level: Sensitivity) -> &'static str {
    match level {
        Sensitivity::Low => "Flag only strong bias",
        Sensitivity::Medium => "Balanced detection (recommended)",
        Sensitivity::High => "Flag all potential bias",
    }
}

const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("Sentiment Bias", "Detect emotional tone and language"),
    ("Political Bias", "Identify political leanings"),
    ("Toxicity", "Flag insults, threats, and toxic language"),
];

#[component]
pub fn AnalyzePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Option<AnalysisSession>>>();
    let navigate = use_navigate();

    let (entry, set_entry) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);
    let (sensitivity, set_sensitivity) = signal(Sensitivity::Medium);
    let (selected, set_selected) = signal(SelectedCategories::default());
    let (upload_name, set_upload_name) = signal(Option::<String>::None);
    let (extracting, set_extracting) = signal(false);

    // One analyze request in flight at a time; a resubmit aborts the last.
    let controller = StoredValue::new_local(Option::<AbortController>::None);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let char_count = Memo::new(move |_| entry.with(|text| text.chars().count()));
    let word_count = Memo::new(move |_| entry.with(|text| text.split_whitespace().count()));

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(trimmed) = entry.with_untracked(|text| trimmed_entry(text)) else {
            set_error.set(Some(ERR_EMPTY.to_string()));
            return;
        };
        set_error.set(None);
        set_submitting.set(true);

        controller.with_value(|previous| {
            if let Some(previous) = previous {
                previous.abort();
            }
        });
        let Ok(ctrl) = AbortController::new() else {
            set_submitting.set(false);
            set_error.set(Some(ERR_GENERIC.to_string()));
            return;
        };
        let abort_signal = ctrl.signal();
        controller.set_value(Some(ctrl));

        let request = AnalysisRequest {
            entry: trimmed.clone(),
            sensitivity: sensitivity.get_untracked(),
            selected: selected.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::analyze(&request, Some(&abort_signal)).await {
                Ok(response) => {
                    let query: String = js_sys::encode_uri_component(&trimmed).into();
                    session.set(Some(AnalysisSession {
                        entry: trimmed,
                        response,
                    }));
                    set_submitting.set(false);
                    navigate(&format!("/results?entry={query}"), Default::default());
                }
                Err(err) if err.is_abort() => {
                    // Superseded by a newer submission; that one owns the UI state.
                }
                Err(_) => {
                    set_submitting.set(false);
                    set_error.set(Some(ERR_GENERIC.to_string()));
                }
            }
        });
    };

    let on_file_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if !is_supported_upload(&file.type_()) {
            input.set_value("");
            set_error.set(Some(ERR_UPLOAD_TYPE.to_string()));
            return;
        }
        if file.size() > UPLOAD_MAX_BYTES {
            input.set_value("");
            set_error.set(Some(ERR_UPLOAD_SIZE.to_string()));
            return;
        }

        set_error.set(None);
        set_extracting.set(true);
        let name = file.name();
        spawn_local(async move {
            match api::extract_file(&file).await {
                Ok(extracted) => {
                    set_entry.set(extracted.extracted_text);
                    set_upload_name.set(Some(name));
                }
                Err(_) => set_error.set(Some(ERR_GENERIC.to_string())),
            }
            set_extracting.set(false);
        });
    };

    let cancel_upload = move |_| {
        set_entry.set(String::new());
        set_upload_name.set(None);
        if let Some(input) = file_input_ref.get() {
            input.set_value("");
        }
    };

    let category_toggles = CATEGORY_OPTIONS
        .iter()
        .enumerate()
        .map(|(index, (label, hint))| {
            let checked = move || {
                let current = selected.get();
                match index {
                    0 => current.sentiment,
                    1 => current.political,
                    _ => current.toxicity,
                }
            };
            let toggle = move |_| {
                set_selected.update(|current| match index {
                    0 => current.sentiment = !current.sentiment,
                    1 => current.political = !current.political,
                    _ => current.toxicity = !current.toxicity,
                });
            };
            view! {
                <label class="option-row">
                    <input type="checkbox" prop:checked=checked on:change=toggle />
                    <div>
                        <p>{*label}</p>
                        <p class="option-hint">{*hint}</p>
                    </div>
                </label>
            }
        })
        .collect_view();

    let sensitivity_levels = Sensitivity::ALL
        .into_iter()
        .map(|level| {
            view! {
                <label class="option-row">
                    <input
                        type="radio"
                        name="sensitivity"
                        prop:checked=move || sensitivity.get() == level
                        on:change=move |_| set_sensitivity.set(level)
                    />
                    <div>
                        <p>{level.label()}</p>
                        <p class="option-hint">{sensitivity_hint(level)}</p>
                    </div>
                </label>
            }
        })
        .collect_view();

    view! {
        <AppLayout minimal=true>
            <form class="analyze-form" on:submit=submit>
                <div>
                    <h1>"Analyze Your Content"</h1>
                    <p class="form-subtitle">"Enter text and choose what to check for."</p>
                </div>

                <div class="form-panel">
                    <div class="form-panel-head">
                        <Icon path=ICON_FILE_TEXT class="icon-sm" />
                        <h2>"Input Text"</h2>
                    </div>
                    <textarea
                        id="entry"
                        rows="8"
                        placeholder="Paste content here… (articles, posts, essays, etc.)"
                        prop:value=move || entry.get()
                        on:input=move |ev| set_entry.set(event_target_value(&ev))
                        readonly=move || upload_name.get().is_some()
                    ></textarea>
                    <div class="input-meta">
                        <p>
                            {move || {
                                let words = word_count.get();
                                format!(
                                    "{} characters \u{2022} {} {}",
                                    char_count.get(),
                                    words,
                                    if words == 1 { "word" } else { "words" },
                                )
                            }}
                        </p>
                        <input
                            id="upload"
                            type="file"
                            accept=".txt,.pdf"
                            class="file-input"
                            node_ref=file_input_ref
                            on:change=on_file_change
                        />
                        <label for="upload" class="upload-btn">
                            <Icon path=ICON_UPLOAD class="icon-sm" />
                            <span>{move || if extracting.get() { "Extracting…" } else { "Upload File" }}</span>
                        </label>
                    </div>
                    <Show when=move || upload_name.get().is_some()>
                        <div class="upload-note">
                            <span>
                                {move || format!("Using text from {}", upload_name.get().unwrap_or_default())}
                            </span>
                            <button type="button" class="upload-cancel" on:click=cancel_upload>
                                "Remove upload"
                            </button>
                        </div>
                    </Show>
                </div>

                <div class="option-grid">
                    <div class="form-panel">
                        <div class="form-panel-head">
                            <Icon path=ICON_GEAR class="icon-sm" />
                            <h3>"Select Bias Types"</h3>
                        </div>
                        {category_toggles}
                    </div>

                    <div class="form-panel">
                        <div class="form-panel-head">
                            <h3>"Sensitivity Level"</h3>
                        </div>
                        {sensitivity_levels}
                        <div class="sensitivity-note">
                            <Icon path=ICON_CHECK_CIRCLE class="icon-sm" />
                            <p>
                                "Higher sensitivity may produce more false positives but ensures "
                                "comprehensive analysis."
                            </p>
                        </div>
                    </div>
                </div>

                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                <button
                    type="submit"
                    class="submit-btn"
                    disabled=move || submitting.get() || extracting.get()
                >
                    {move || if submitting.get() { "Analyzing…" } else { "Analyze Content" }}
                </button>

                <div class="form-note">
                    <Icon path=ICON_WARNING_CIRCLE class="icon-sm" />
                    <p>
                        "Analysis is based on NLP models trained on neutral datasets to encourage "
                        "objective evaluation."
                    </p>
                </div>
            </form>
        </AppLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_whitespace_entries_are_rejected_before_any_request() {
        assert_eq!(trimmed_entry(""), None);
        assert_eq!(trimmed_entry("   \n\t  "), None);
    }

    #[test]
    fn entries_are_trimmed_for_submission() {
        assert_eq!(trimmed_entry("  Hello world \n"), Some("Hello world".to_string()));
    }

    #[test]
    fn upload_allow_list_accepts_only_text_and_pdf() {
        assert!(is_supported_upload("text/plain"));
        assert!(is_supported_upload("application/pdf"));
        assert!(!is_supported_upload(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert!(!is_supported_upload("image/png"));
    }
}
