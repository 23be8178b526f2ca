use super::*;
use crate::net::types::{HealthResponse, SummarizeResponse};

fn success_response() -> SummarizeResponse {
    serde_json::from_value(serde_json::json!({
        "success": true,
        "summary": "S",
        "transcript_length": 1234,
        "transcript_preview": "P"
    }))
    .expect("success response")
}

fn failure_response(error: Option<&str>) -> SummarizeResponse {
    let mut body = serde_json::json!({ "success": false });
    if let Some(error) = error {
        body["error"] = serde_json::json!(error);
    }
    serde_json::from_value(body).expect("failure response")
}

/// Drive a state into the loading phase and hand back the token.
fn submitted(state: &mut SubmissionState) -> u64 {
    match state.begin_submit("https://youtu.be/abc123") {
        SubmitDecision::Send { token, .. } => token,
        SubmitDecision::Rejected => panic!("valid URL was rejected"),
    }
}

// =============================================================
// begin_submit validation
// =============================================================

#[test]
fn empty_input_is_rejected_with_prompt() {
    let mut state = SubmissionState::default();
    assert_eq!(state.begin_submit(""), SubmitDecision::Rejected);
    assert_eq!(state.error_message(), Some("Please enter a YouTube URL"));
    assert!(!state.is_loading());
}

#[test]
fn whitespace_only_input_counts_as_empty() {
    let mut state = SubmissionState::default();
    assert_eq!(state.begin_submit("   "), SubmitDecision::Rejected);
    assert_eq!(state.error_message(), Some("Please enter a YouTube URL"));
}

#[test]
fn non_youtube_input_is_rejected_without_send() {
    let mut state = SubmissionState::default();
    assert_eq!(state.begin_submit("not a url"), SubmitDecision::Rejected);
    assert_eq!(
        state.error_message(),
        Some("Please enter a valid YouTube URL")
    );
    assert!(!state.is_loading());
}

#[test]
fn valid_url_enters_loading_with_transcript_status() {
    let mut state = SubmissionState::default();
    let decision = state.begin_submit("https://www.youtube.com/watch?v=abc123");
    match decision {
        SubmitDecision::Send { url, token } => {
            assert_eq!(url, "https://www.youtube.com/watch?v=abc123");
            assert_eq!(token, 1);
        }
        SubmitDecision::Rejected => panic!("valid URL was rejected"),
    }
    assert!(state.is_loading());
    assert_eq!(state.status_message(), Some("Extracting transcript..."));
}

#[test]
fn begin_submit_trims_surrounding_whitespace() {
    let mut state = SubmissionState::default();
    let decision = state.begin_submit("  https://youtu.be/abc123  ");
    match decision {
        SubmitDecision::Send { url, .. } => assert_eq!(url, "https://youtu.be/abc123"),
        SubmitDecision::Rejected => panic!("valid URL was rejected"),
    }
}

#[test]
fn begin_submit_clears_a_prior_error() {
    let mut state = SubmissionState::default();
    let _ = state.begin_submit("not a url");
    let _ = submitted(&mut state);
    assert!(state.error_message().is_none());
}

// =============================================================
// complete, backend outcomes
// =============================================================

#[test]
fn successful_response_shows_result() {
    let mut state = SubmissionState::default();
    let token = submitted(&mut state);
    state.complete(token, success_response());

    let view = state.result().expect("result view");
    assert_eq!(view.summary, "S");
    assert_eq!(view.transcript_length, Some(1234));
    assert_eq!(view.transcript_preview.as_deref(), Some("P"));
}

#[test]
fn success_without_transcript_fields_still_shows_summary() {
    let mut state = SubmissionState::default();
    let token = submitted(&mut state);
    let response: SummarizeResponse =
        serde_json::from_value(serde_json::json!({ "success": true, "summary": "S" }))
            .expect("response");
    state.complete(token, response);

    let view = state.result().expect("result view");
    assert_eq!(view.summary, "S");
    assert_eq!(view.transcript_length, None);
    assert_eq!(view.transcript_preview, None);
}

#[test]
fn backend_failure_shows_backend_message() {
    let mut state = SubmissionState::default();
    let token = submitted(&mut state);
    state.complete(token, failure_response(Some("quota exceeded")));
    assert_eq!(state.error_message(), Some("quota exceeded"));
}

#[test]
fn backend_failure_without_message_uses_fallback() {
    let mut state = SubmissionState::default();
    let token = submitted(&mut state);
    state.complete(token, failure_response(None));
    assert_eq!(state.error_message(), Some("An error occurred"));
}

#[test]
fn every_outcome_leaves_loading_and_hides_status() {
    for outcome in 0..3 {
        let mut state = SubmissionState::default();
        let token = submitted(&mut state);
        match outcome {
            0 => state.complete(token, success_response()),
            1 => state.complete(token, failure_response(Some("quota exceeded"))),
            _ => state.fail_network(token, "connection refused"),
        }
        assert!(!state.is_loading());
        assert!(state.status_message().is_none());
    }
}

// =============================================================
// fail_network
// =============================================================

#[test]
fn network_failure_includes_the_cause() {
    let mut state = SubmissionState::default();
    let token = submitted(&mut state);
    state.fail_network(token, "connection refused");
    let message = state.error_message().expect("error message");
    assert!(message.starts_with("Network error: "));
    assert!(message.contains("connection refused"));
}

// =============================================================
// summary_ready
// =============================================================

#[test]
fn summary_ready_advances_the_status_text() {
    let mut state = SubmissionState::default();
    let token = submitted(&mut state);
    assert!(state.summary_ready(token));
    assert_eq!(state.status_message(), Some("Generating summary..."));
}

#[test]
fn summary_ready_ignores_stale_tokens() {
    let mut state = SubmissionState::default();
    let stale = submitted(&mut state);
    state.dismiss();
    assert!(!state.summary_ready(stale));
    assert_eq!(state.phase(), &Phase::Idle);
}

// =============================================================
// dismiss and stale responses
// =============================================================

#[test]
fn dismiss_returns_to_idle() {
    let mut state = SubmissionState::default();
    let token = submitted(&mut state);
    state.complete(token, success_response());
    state.dismiss();

    assert_eq!(state.phase(), &Phase::Idle);
    assert!(state.error_message().is_none());
    assert!(state.result().is_none());
}

#[test]
fn response_after_dismissal_is_dropped() {
    let mut state = SubmissionState::default();
    let stale = submitted(&mut state);
    state.dismiss();
    state.complete(stale, success_response());
    assert_eq!(state.phase(), &Phase::Idle);
}

#[test]
fn network_failure_after_dismissal_is_dropped() {
    let mut state = SubmissionState::default();
    let stale = submitted(&mut state);
    state.dismiss();
    state.fail_network(stale, "connection refused");
    assert_eq!(state.phase(), &Phase::Idle);
}

#[test]
fn newer_submission_supersedes_an_older_one() {
    let mut state = SubmissionState::default();
    let first = submitted(&mut state);
    let second = submitted(&mut state);
    assert_ne!(first, second);

    // The late response from the first request must not clobber the
    // second one's loading phase.
    state.complete(first, failure_response(Some("quota exceeded")));
    assert!(state.is_loading());

    state.complete(second, success_response());
    assert!(state.result().is_some());
}

// =============================================================
// apply_health
// =============================================================

#[test]
fn missing_api_key_shows_config_warning() {
    let mut state = SubmissionState::default();
    state.apply_health(&HealthResponse {
        api_key_configured: false,
    });
    assert_eq!(state.error_message(), Some(CONFIG_WARNING));
}

#[test]
fn configured_api_key_leaves_state_alone() {
    let mut state = SubmissionState::default();
    state.apply_health(&HealthResponse {
        api_key_configured: true,
    });
    assert_eq!(state.phase(), &Phase::Idle);
}
