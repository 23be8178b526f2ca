//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::submission::SubmissionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared submission state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Single controller instance for the page session; discarded on
    // navigation along with everything it references.
    let submission = RwSignal::new(SubmissionState::default());
    provide_context(submission);

    view! {
        <Stylesheet id="leptos" href="/pkg/summarizer-client.css"/>
        <Title text="YouTube Video Summarizer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
