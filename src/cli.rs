//! CLI argument parsing via clap.

use clap::Parser;

use askline::build_info;

/// Ask a single question in the terminal and print the chosen answer.
///
/// The listed options gain a trailing free-form entry; picking it opens an
/// inline editor. The answer goes to stdout, everything else to stderr.
#[derive(Debug, Parser)]
#[command(
    name = "askline",
    version = build_info::VERSION,
    long_version = build_info::long_version_text(),
    after_help = build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// The question to ask.
    pub question: String,

    /// The options to choose from.
    #[arg(value_name = "OPTION")]
    pub options: Vec<String>,

    /// Path to config file (default: ./askline.toml or ~/.config/askline/askline.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Theme name (built-ins: dark, light, solarized).
    #[arg(long = "theme")]
    pub theme: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Cap the prompt width at COLS columns.
    #[arg(long = "width", value_name = "COLS", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Print the full result envelope as JSON instead of the bare answer.
    #[arg(long = "json")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn question_and_options_are_positional() {
        let args = Args::parse_from(["askline", "Deploy?", "Yes", "No"]);
        assert_eq!(args.question, "Deploy?");
        assert_eq!(args.options, vec!["Yes".to_string(), "No".to_string()]);
        assert!(!args.no_color);
        assert!(!args.json);
    }

    #[test]
    fn question_alone_parses_with_empty_options() {
        let args = Args::parse_from(["askline", "Deploy?"]);
        assert_eq!(args.question, "Deploy?");
        assert!(args.options.is_empty());
    }

    #[test]
    fn flags_parse_alongside_positionals() {
        let args = Args::parse_from([
            "askline",
            "--theme",
            "light",
            "--no-color",
            "--width",
            "60",
            "--json",
            "Deploy?",
            "Yes",
        ]);
        assert_eq!(args.theme.as_deref(), Some("light"));
        assert!(args.no_color);
        assert_eq!(args.width, Some(60));
        assert!(args.json);
        assert_eq!(args.question, "Deploy?");
        assert_eq!(args.options, vec!["Yes".to_string()]);
    }

    #[test]
    fn config_flag_has_a_short_form() {
        let args = Args::parse_from(["askline", "-c", "custom.toml", "Deploy?"]);
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn missing_question_is_a_parse_error() {
        assert!(Args::try_parse_from(["askline"]).is_err());
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Args::try_parse_from(["askline", "--width", "0", "Deploy?"]).is_err());
    }
}
