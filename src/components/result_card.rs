//! Result card showing the generated summary and transcript details.

use leptos::prelude::*;

use crate::state::submission::SubmissionState;
use crate::util::format::format_thousands;

/// Card rendered after a successful summarization.
///
/// Shows the summary text, plus the transcript character count and a
/// preview excerpt when the backend provided them. The close control
/// hands off to `on_dismiss`, which resets the page to idle.
#[component]
pub fn ResultCard(on_dismiss: Callback<()>) -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();

    view! {
        {move || {
            submission
                .get()
                .result()
                .cloned()
                .map(|result| {
                    view! {
                        <div class="result-card">
                            <header class="result-card__header">
                                <h2>"Summary"</h2>
                                <button
                                    class="result-card__close"
                                    title="Close"
                                    on:click=move |_| on_dismiss.run(())
                                >
                                    "\u{00d7}"
                                </button>
                            </header>

                            <div class="result-card__summary">{result.summary}</div>

                            {result
                                .transcript_length
                                .map(|len| {
                                    view! {
                                        <div class="result-card__transcript-info">
                                            "Transcript length: "
                                            <strong>{format_thousands(len)}</strong>
                                            " characters"
                                        </div>
                                    }
                                })}

                            {result
                                .transcript_preview
                                .map(|preview| {
                                    view! {
                                        <details class="result-card__preview">
                                            <summary>"Transcript preview"</summary>
                                            <p class="result-card__preview-text">{preview}</p>
                                        </details>
                                    }
                                })}
                        </div>
                    }
                })
        }}
    }
}
