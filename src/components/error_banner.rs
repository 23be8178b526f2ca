//! Error banner for validation, network, backend, and configuration errors.

use leptos::prelude::*;

use crate::state::submission::SubmissionState;

/// Renders the current error message, or nothing when no error is showing.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();

    view! {
        {move || {
            submission
                .get()
                .error_message()
                .map(|message| {
                    let message = message.to_owned();
                    view! { <div class="error-banner" role="alert">{message}</div> }
                })
        }}
    }
}
