//! Sticky Footer Component
//!
//! Install snippet with copy button and follow-up links.

use leptos::prelude::*;

use crate::components::CopyButton;
use crate::config::use_config;

#[component]
pub fn StickyFooter() -> impl IntoView {
    let config = use_config();

    view! {
        <div class="sticky-footer">
            <p>"Get started by adding this script to your app:"</p>
            <div class="code-container">
                <code>{config.install_snippet}</code>
                <CopyButton text=config.install_snippet reset_ms=config.copy_reset_ms />
            </div>
            <p>
                <small>
                    <strong>"Important:"</strong>
                    " Add this before any other scripts run!"
                </small>
            </p>
            <a href=config.readme_url class="cta-button">"View source →"</a>
            <p>
                <small>
                    "Psst... need something more advanced? Check out: "
                    <a href=config.lint_url class="navbar-link">"Million Lint"</a>
                </small>
            </p>
        </div>
    }
}
