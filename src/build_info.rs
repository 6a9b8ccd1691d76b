//! Compile-time build metadata exposed to the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("ASKLINE_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("ASKLINE_BUILD_TIMESTAMP");

/// Help trailer block that surfaces build metadata in `askline --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("ASKLINE_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("ASKLINE_BUILD_TIMESTAMP")
);

/// Version block for `askline --version`; clap prepends the binary name.
pub fn long_version_text() -> String {
    format!("{VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_version_text_includes_expected_lines() {
        let text = long_version_text();
        assert!(text.starts_with(VERSION));
        assert!(text.contains("commit:"));
        assert!(text.contains("built:"));
    }

    #[test]
    fn help_trailer_names_both_fields() {
        assert!(HELP_BUILD_METADATA.contains("commit:"));
        assert!(HELP_BUILD_METADATA.contains("built:"));
    }
}
