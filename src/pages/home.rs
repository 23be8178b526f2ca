//! Home page. Owns the submission flow end to end.
//!
//! The page holds the input signal and drives the state machine in
//! `state::submission`; the async leg (HTTP call plus the cosmetic reveal
//! delay) runs on the browser event loop via `spawn_local` and reports
//! back with the request token it was handed, so a dismissal or a newer
//! submission makes the old response a no-op.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::result_card::ResultCard;
use crate::components::status_message::StatusMessage;
use crate::components::summarize_form::SummarizeForm;
use crate::state::submission::{SubmissionState, SubmitDecision};

/// Cosmetic pause before revealing the result card, in milliseconds.
/// Presentation polish only; zeroing it changes no observable contract.
pub const RESULT_REVEAL_DELAY_MS: u32 = 500;

/// The single page of the application.
#[component]
pub fn HomePage() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();
    let url = RwSignal::new(String::new());

    // One-shot backend readiness probe. Failures are diagnostic only and
    // must not disturb whatever the page is currently showing.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_health().await {
            Ok(health) => submission.update(|s| s.apply_health(&health)),
            Err(cause) => log::error!("Health check failed: {cause}"),
        }
    });

    let on_submit = Callback::new(move |()| {
        let decision = submission.try_update(|s| s.begin_submit(&url.get_untracked()));
        let Some(SubmitDecision::Send { url: target, token }) = decision else {
            // Rejected input already rendered its validation error.
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::SummarizeRequest { url: target };
            match crate::net::api::post_summarize(&request).await {
                Ok(response) => {
                    if response.success
                        && submission
                            .try_update(|s| s.summary_ready(token))
                            .unwrap_or(false)
                    {
                        gloo_timers::future::TimeoutFuture::new(RESULT_REVEAL_DELAY_MS).await;
                    }
                    submission.update(|s| s.complete(token, response));
                }
                Err(cause) => submission.update(|s| s.fail_network(token, &cause)),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, token);
        }
    });

    let on_dismiss = Callback::new(move |()| {
        submission.update(|s| s.dismiss());
        url.set(String::new());
    });

    view! {
        <main class="home-page">
            <header class="home-page__header">
                <h1>"YouTube Video Summarizer"</h1>
                <p class="home-page__tagline">
                    "Paste a video link and get a concise summary of its transcript."
                </p>
            </header>

            <SummarizeForm url=url on_submit=on_submit/>
            <ErrorBanner/>
            <StatusMessage/>
            <ResultCard on_dismiss=on_dismiss/>
        </main>
    }
}
