//! Ask-the-user question tool.
//!
//! Wraps the interactive single-choice prompt in the envelope a host agent
//! expects: a text content line plus structured details recording the
//! question, the offered options, and how the answer was produced. Missing
//! preconditions (no terminal, no options) are reported inside the envelope
//! rather than as hard errors so a host can relay them to its model verbatim.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AskError, ToolError};
use crate::prompt::{ask_with, AnswerOrigin, AskStyle, PromptOutcome, OTHER_LABEL};
use crate::tools::Tool;
use crate::tui::settings;
use crate::types::{FunctionDefinition, ToolDefinition};
use crate::ui::span::{Line, Span};
use crate::ui::theme::ThemeToken;

const TEXT_NO_UI: &str = "Error: UI not available (running in non-interactive mode)";
const TEXT_NO_OPTIONS: &str = "Error: No options provided";
const TEXT_CANCELLED: &str = "User cancelled the selection";

// ---------------------------------------------------------------------------
// Envelope types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct QuestionArgs {
    question: String,
    options: Vec<String>,
}

/// Structured result details alongside the text content.
///
/// `answer` is `null` when no answer was produced. `wasCustom` is present
/// only on a produced answer and tells a selected option apart from text
/// written in the inline editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetails {
    pub question: String,
    pub options: Vec<String>,
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub was_custom: Option<bool>,
}

/// Full tool result: content for the model, details for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutput {
    pub content: String,
    pub details: QuestionDetails,
}

// ---------------------------------------------------------------------------
// Tool
// ---------------------------------------------------------------------------

/// Interactive question tool.
#[derive(Debug, Default)]
pub struct QuestionTool {
    style: AskStyle,
}

impl QuestionTool {
    pub fn new(style: AskStyle) -> Self {
        Self { style }
    }

    /// Run the prompt and shape whatever happened into the envelope.
    pub async fn run(
        &self,
        question: &str,
        options: &[String],
    ) -> Result<QuestionOutput, ToolError> {
        match ask_with(question, options, self.style.clone()).await {
            Ok(outcome) => Ok(outcome_output(question, options, &outcome)),
            Err(e) => fallback_output(question, options, e),
        }
    }
}

#[async_trait]
impl Tool for QuestionTool {
    fn name(&self) -> &'static str {
        "question"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: "question".to_string(),
                description: "Ask the user a question and let them pick from options. \
                              Use when you need user input to proceed."
                    .to_string(),
                parameters: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "question": {
                            "type": "string",
                            "description": "The question to ask the user"
                        },
                        "options": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Options for the user to choose from"
                        }
                    },
                    "required": ["question", "options"],
                    "additionalProperties": false
                }),
            },
        }
    }

    async fn execute(&self, arguments: &str) -> Result<String, ToolError> {
        let args: QuestionArgs = serde_json::from_str(arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        let output = self.run(&args.question, &args.options).await?;
        serde_json::to_string_pretty(&output)
            .map_err(|e| ToolError::ExecutionFailed(format!("serialize result: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Envelope construction
// ---------------------------------------------------------------------------

/// Envelope for a prompt that resolved.
pub fn outcome_output(
    question: &str,
    options: &[String],
    outcome: &PromptOutcome,
) -> QuestionOutput {
    match outcome {
        PromptOutcome::Answered { text, origin } => {
            let was_custom = *origin == AnswerOrigin::Custom;
            let prefix = if was_custom {
                "User wrote: "
            } else {
                "User selected: "
            };
            QuestionOutput {
                content: format!("{prefix}{text}"),
                details: QuestionDetails {
                    question: question.to_string(),
                    options: options.to_vec(),
                    answer: Some(text.clone()),
                    was_custom: Some(was_custom),
                },
            }
        }
        PromptOutcome::Cancelled => QuestionOutput {
            content: TEXT_CANCELLED.to_string(),
            details: QuestionDetails {
                question: question.to_string(),
                options: options.to_vec(),
                answer: None,
                was_custom: None,
            },
        },
    }
}

/// Preconditions become error-shaped envelopes; anything else is a real
/// execution failure.
fn fallback_output(
    question: &str,
    options: &[String],
    err: AskError,
) -> Result<QuestionOutput, ToolError> {
    match err {
        AskError::NotInteractive => Ok(error_output(question, options.to_vec(), TEXT_NO_UI)),
        AskError::NoOptions => Ok(error_output(question, Vec::new(), TEXT_NO_OPTIONS)),
        other => Err(ToolError::ExecutionFailed(other.to_string())),
    }
}

fn error_output(question: &str, options: Vec<String>, text: &str) -> QuestionOutput {
    QuestionOutput {
        content: text.to_string(),
        details: QuestionDetails {
            question: question.to_string(),
            options,
            answer: None,
            was_custom: None,
        },
    }
}

// ---------------------------------------------------------------------------
// Transcript rendering
// ---------------------------------------------------------------------------

/// Lines announcing the call: tool title, question, and the offered options
/// including the synthetic free-form entry.
pub fn render_call(question: &str, options: &[String]) -> Vec<Line> {
    let mut lines = vec![Line::new(vec![
        Span::themed("question ", ThemeToken::ToolTitle).bold(),
        Span::themed(question, ThemeToken::Muted),
    ])];
    if !options.is_empty() {
        let mut offered: Vec<&str> = options.iter().map(String::as_str).collect();
        offered.push(OTHER_LABEL);
        lines.push(Line::from(Span::themed(
            format!("  Options: {}", offered.join(", ")),
            ThemeToken::Dim,
        )));
    }
    lines
}

/// One summary line for the result.
pub fn render_result(output: &QuestionOutput) -> Vec<Line> {
    let details = &output.details;
    let line = match &details.answer {
        None => Line::from(Span::themed("Cancelled", ThemeToken::Warning)),
        Some(answer) if details.was_custom == Some(true) => Line::new(vec![
            Span::themed(settings::GLYPH_RESULT_OK, ThemeToken::Success),
            Span::themed("(wrote) ", ThemeToken::Muted),
            Span::themed(answer, ThemeToken::Accent),
        ]),
        Some(answer) => Line::new(vec![
            Span::themed(settings::GLYPH_RESULT_OK, ThemeToken::Success),
            Span::themed(answer, ThemeToken::Accent),
        ]),
    };
    vec![line]
}
