pub mod dashboard_state;
pub mod footer;
pub mod header;

pub use dashboard_state::{use_dashboard_state, DashboardState};

use leptos::prelude::*;

/// Single-screen shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, mode toggle)             |
/// +------------------------------------------+
/// |  Content                                 |
/// +------------------------------------------+
/// |  Footer (callouts, attribution)          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
                <footer::Footer />
            </main>
        </div>
    }
}
