//! Page Configuration
//!
//! Compile-time settings shared with the component tree via context.

use leptos::prelude::*;
use log::LevelFilter;

/// Script tag visitors copy from the footer
pub const INSTALL_SNIPPET: &str =
    r#"<script src="https://unpkg.com/react-scan/dist/auto.global.js"></script>"#;

/// Page settings
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    /// Id of the host element the app mounts into
    pub mount_id: &'static str,
    /// Widths at or below this render the static demo image
    pub mobile_breakpoint_px: f64,
    /// Delay before the copy button label reverts
    pub copy_reset_ms: u32,
    pub install_snippet: &'static str,
    pub log_level: LevelFilter,
    pub logo_src: &'static str,
    pub demo_image_src: &'static str,
    pub readme_url: &'static str,
    pub repository_url: &'static str,
    pub lint_url: &'static str,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            mount_id: "root",
            mobile_breakpoint_px: 768.0,
            copy_reset_ms: 2000,
            install_snippet: INSTALL_SNIPPET,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            logo_src: "/logo.svg",
            demo_image_src: "/demo.gif",
            readme_url: "https://github.com/aidenybai/react-scan#readme",
            repository_url: "https://github.com/aidenybai/react-scan",
            lint_url: "https://million.dev",
        }
    }
}

/// Get the page config from context
pub fn use_config() -> DemoConfig {
    expect_context::<DemoConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.mobile_breakpoint_px, 768.0);
        assert_eq!(config.copy_reset_ms, 2000);
        assert!(config.install_snippet.starts_with("<script src="));
        assert!(config.install_snippet.ends_with("</script>"));
    }
}
