//! URL input form with the submit button.

use leptos::prelude::*;

use crate::state::submission::SubmissionState;

/// The summarize form: a URL input and a submit button.
///
/// Both controls are disabled for the full duration of an in-flight
/// request and re-enabled on any outcome; the button swaps its label for
/// a loader while loading.
#[component]
pub fn SummarizeForm(url: RwSignal<String>, on_submit: Callback<()>) -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();
    let loading = move || submission.get().is_loading();

    view! {
        <form
            class="summarize-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <input
                class="summarize-form__input"
                type="text"
                placeholder="https://www.youtube.com/watch?v=..."
                prop:value=move || url.get()
                prop:disabled=loading
                on:input=move |ev| url.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" prop:disabled=loading>
                {move || {
                    if loading() {
                        view! { <span class="btn__loader" aria-hidden="true"></span> }.into_any()
                    } else {
                        view! { <span class="btn__text">"Summarize"</span> }.into_any()
                    }
                }}
            </button>
        </form>
    }
}
