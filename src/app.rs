use leptos::prelude::*;

/// Root component of the LoopyDB shell. One instance per mount.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1>"LoopyDB"</h1>
                <p class="tagline">"Elite Dangerous journal explorer"</p>
            </header>
            <main class="content">
                <p class="placeholder">
                    "Choose a journal directory to start browsing your flight history."
                </p>
            </main>
        </div>
    }
}
