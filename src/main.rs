//! CLI entry point for askline.

mod cli;

use askline::config::load_config;
use askline::prompt::ask_with;
use askline::tools::question::{outcome_output, render_call, render_result, QuestionTool};
use askline::tui::write_lines;
use askline::ui::theme;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_logging();

    // Load config.
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if args.no_color {
        config.display.color = false;
    }
    if let Some(width) = args.width {
        config.prompt.max_width = Some(width);
    }

    // Config-file themes fall back to dark when unknown; an explicit --theme
    // must exist.
    if let Err(e) = theme::initialize(&config.display.theme, &config.themes) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
    if let Some(name) = args.theme.as_deref() {
        if let Err(e) = theme::set_active_theme(name) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }

    let style = config.ask_style();
    let color = style.color;

    if args.json {
        // Tool semantics: preconditions come back inside the envelope.
        let tool = QuestionTool::new(style);
        match tool.run(&args.question, &args.options).await {
            Ok(output) => {
                match serde_json::to_string_pretty(&output) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("error: {e}");
                        std::process::exit(1);
                    }
                }
                if output.details.answer.is_none() {
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // Transcript header stays as scrollback above the interactive chrome.
    let mut stderr = std::io::stderr();
    let _ = write_lines(
        &mut stderr,
        &render_call(&args.question, &args.options),
        color,
    );

    match ask_with(&args.question, &args.options, style).await {
        Ok(outcome) => {
            let output = outcome_output(&args.question, &args.options, &outcome);
            let _ = write_lines(&mut stderr, &render_result(&output), color);
            match output.details.answer {
                Some(answer) => println!("{answer}"),
                None => std::process::exit(1),
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("ASKLINE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
