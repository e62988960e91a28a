//! Navigation Bar Component

use leptos::prelude::*;

use crate::config::use_config;

/// Brand link plus external "install" and "github" links
#[component]
pub fn NavBar() -> impl IntoView {
    let config = use_config();

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-brand">
                <img src=config.logo_src alt="react-scan-logo" width="30" height="30" />
                <h3>
                    <strong style="font-family: Geist Mono, monospace;">"React Scan"</strong>
                </h3>
            </a>
            <div class="navbar-links">
                <a href=config.readme_url class="navbar-link" target="_blank" rel="noopener noreferrer">
                    "install"
                </a>
                <a href=config.repository_url class="navbar-link" target="_blank" rel="noopener noreferrer">
                    "github"
                </a>
            </div>
        </nav>
    }
}
