//! Tool plumbing for hosts that drive the prompt from a model loop.
//!
//! A [`Tool`] is an async trait object dispatched by name with raw JSON
//! arguments; [`ToolRegistry`] holds the set a host offers. The built-in
//! [`question::QuestionTool`] wraps the interactive prompt.

pub mod question;

use crate::error::ToolError;
use crate::types::ToolDefinition;
use async_trait::async_trait;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Tool trait
// ---------------------------------------------------------------------------

/// One callable tool: a name, a schema, and an async body.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Dispatch name; must match what callers send.
    fn name(&self) -> &'static str;

    /// Definition advertised to the model alongside a request.
    fn definition(&self) -> ToolDefinition;

    /// Run with a raw JSON arguments string, yielding the text to hand back.
    async fn execute(&self, arguments: &str) -> Result<String, ToolError>;
}

// ---------------------------------------------------------------------------
// Tool registry
// ---------------------------------------------------------------------------

/// The tools a host offers, keyed by name.
pub struct ToolRegistry {
    tools: HashMap<&'static str, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register under the tool's own name; a later registration with the
    /// same name replaces the earlier one.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools.insert(tool.name(), Box::new(tool));
    }

    /// Definitions of everything registered, for a model request.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Dispatch a call to the named tool.
    pub async fn execute(&self, name: &str, arguments: &str) -> Result<String, ToolError> {
        match self.tools.get(name) {
            Some(tool) => tool.execute(arguments).await,
            None => Err(ToolError::ExecutionFailed(format!("unknown tool: {name}"))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::question::QuestionTool;
    use super::*;
    use crate::types::FunctionDefinition;

    /// Minimal tool that claims the `question` name with its own schema.
    struct StubTool {
        reply: &'static str,
    }

    #[async_trait]
    impl Tool for StubTool {
        fn name(&self) -> &'static str {
            "question"
        }

        fn definition(&self) -> ToolDefinition {
            ToolDefinition {
                tool_type: "function".into(),
                function: FunctionDefinition {
                    name: "question".into(),
                    description: "stub".into(),
                    parameters: serde_json::json!({}),
                },
            }
        }

        async fn execute(&self, _arguments: &str) -> Result<String, ToolError> {
            Ok(self.reply.to_string())
        }
    }

    #[test]
    fn empty_until_something_registers() {
        assert!(ToolRegistry::new().is_empty());
        assert!(ToolRegistry::default().is_empty());

        let mut registry = ToolRegistry::new();
        registry.register(QuestionTool::default());
        assert!(!registry.is_empty());
        assert_eq!(registry.definitions().len(), 1);
    }

    #[test]
    fn later_registration_wins_the_name() {
        let mut registry = ToolRegistry::new();
        registry.register(QuestionTool::default());
        registry.register(StubTool { reply: "pong" });

        let defs = registry.definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].function.description, "stub");
    }

    #[tokio::test]
    async fn execute_dispatches_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(StubTool { reply: "pong" });
        let out = registry.execute("question", "{}").await.unwrap();
        assert_eq!(out, "pong");
    }

    #[tokio::test]
    async fn unknown_names_surface_in_the_error() {
        let registry = ToolRegistry::new();
        let err = registry.execute("confirm", "{}").await.unwrap_err();
        assert!(matches!(&err, ToolError::ExecutionFailed(msg) if msg.contains("confirm")));
    }
}
