//! Transient status line shown while a submission is in flight.

use leptos::prelude::*;

use crate::state::submission::SubmissionState;

/// Spinner plus the current loading step ("Extracting transcript..." or
/// "Generating summary..."). Hidden in every other phase.
#[component]
pub fn StatusMessage() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();

    view! {
        {move || {
            submission
                .get()
                .status_message()
                .map(|text| {
                    view! {
                        <div class="status-message">
                            <span class="status-message__spinner" aria-hidden="true"></span>
                            <span class="status-message__text">{text}</span>
                        </div>
                    }
                })
        }}
    }
}
