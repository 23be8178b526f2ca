#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::types::{HealthResponse, SummarizeResponse};
use crate::util::youtube::is_valid_youtube_url;

/// Warning shown when the health probe reports missing backend credentials.
pub const CONFIG_WARNING: &str =
    "Warning: OpenAI API key not configured. Please check your .env file.";

/// What the caller must do after asking to submit a URL.
///
/// `Rejected` means validation failed and an error is already showing; no
/// request may be sent. `Send` carries the trimmed URL plus the token that
/// tags the eventual response so stale completions can be dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    Rejected,
    Send { url: String, token: u64 },
}

/// Progress messages shown while a submission is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingStep {
    ExtractingTranscript,
    GeneratingSummary,
}

impl LoadingStep {
    /// Transient status text for this step.
    pub fn message(self) -> &'static str {
        match self {
            Self::ExtractingTranscript => "Extracting transcript...",
            Self::GeneratingSummary => "Generating summary...",
        }
    }
}

/// Data rendered in the result card after a successful summarization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryView {
    pub summary: String,
    pub transcript_length: Option<u64>,
    pub transcript_preview: Option<String>,
}

/// The four visible UI states of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading(LoadingStep),
    Error(String),
    Result(SummaryView),
}

/// State machine for the summarize form.
///
/// Owns the idle / loading / error / result lifecycle. All transitions are
/// synchronous; the async glue (HTTP call, reveal delay) lives in the page
/// component and reports back through [`SubmissionState::complete`] or
/// [`SubmissionState::fail_network`] with the token it was handed.
///
/// `seq` is bumped by every `begin_submit` and `dismiss`, so a completion
/// carrying an older token is recognized as stale and ignored.
#[derive(Clone, Debug, Default)]
pub struct SubmissionState {
    phase: Phase,
    seq: u64,
}

impl SubmissionState {
    /// Validate `raw` and, if acceptable, enter the loading phase.
    ///
    /// Empty or non-YouTube input switches to an error phase and returns
    /// [`SubmitDecision::Rejected`]; the caller must not touch the network.
    pub fn begin_submit(&mut self, raw: &str) -> SubmitDecision {
        let url = raw.trim();
        if url.is_empty() {
            self.phase = Phase::Error("Please enter a YouTube URL".to_owned());
            return SubmitDecision::Rejected;
        }
        if !is_valid_youtube_url(url) {
            self.phase = Phase::Error("Please enter a valid YouTube URL".to_owned());
            return SubmitDecision::Rejected;
        }

        // Supersedes any submission still in flight.
        self.seq += 1;
        self.phase = Phase::Loading(LoadingStep::ExtractingTranscript);
        SubmitDecision::Send {
            url: url.to_owned(),
            token: self.seq,
        }
    }

    /// Advance the status text to "Generating summary...".
    ///
    /// Called once the backend has answered successfully, before the
    /// cosmetic reveal delay. Returns `false` for stale tokens so the
    /// caller can skip the delay as well.
    pub fn summary_ready(&mut self, token: u64) -> bool {
        if token != self.seq {
            return false;
        }
        self.phase = Phase::Loading(LoadingStep::GeneratingSummary);
        true
    }

    /// Apply a completed backend response.
    ///
    /// Success shows the result card; failure shows the backend-supplied
    /// message or a generic fallback. Stale tokens are dropped.
    pub fn complete(&mut self, token: u64, response: SummarizeResponse) {
        if token != self.seq {
            return;
        }
        if response.success {
            self.phase = Phase::Result(SummaryView {
                summary: response.summary.unwrap_or_default(),
                transcript_length: response.transcript_length,
                transcript_preview: response.transcript_preview,
            });
        } else {
            self.phase = Phase::Error(
                response
                    .error
                    .unwrap_or_else(|| "An error occurred".to_owned()),
            );
        }
    }

    /// The request never completed; surface the underlying cause.
    pub fn fail_network(&mut self, token: u64, cause: &str) {
        if token != self.seq {
            return;
        }
        self.phase = Phase::Error(format!("Network error: {cause}"));
    }

    /// Close the result card (or clear an error) and return to idle.
    ///
    /// Also invalidates the current token: a submission dismissed while in
    /// flight keeps the page idle when its response eventually lands.
    pub fn dismiss(&mut self) {
        self.seq += 1;
        self.phase = Phase::Idle;
    }

    /// Apply the startup health probe result. A missing API key is shown as
    /// a warning; anything else leaves the page untouched.
    pub fn apply_health(&mut self, health: &HealthResponse) {
        if !health.api_key_configured {
            self.phase = Phase::Error(CONFIG_WARNING.to_owned());
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// True while a request is in flight; drives the disabled form controls.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    /// Transient status text, present only while loading.
    pub fn status_message(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Loading(step) => Some(step.message()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&SummaryView> {
        match &self.phase {
            Phase::Result(view) => Some(view),
            _ => None,
        }
    }
}
