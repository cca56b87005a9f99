//! Agent executor — drives the model ↔ tool loop for one chat turn.
//!
//! The executor sends the conversation plus tool definitions to the model.
//! While the model stops with `tool_use`, the requested tools are invoked
//! and their results appended as `tool_result` blocks, then the model is
//! called again. The loop is capped at [`MAX_ITERATIONS`] rounds; hitting
//! the cap is surfaced like any other agent failure.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::agent::llm_client::{ContentBlock, LlmClient, LlmError, ToolDefinition};
use crate::agent::tool::Tool;
use crate::errors::AppError;

/// Upper bound on model round-trips for a single chat turn.
pub const MAX_ITERATIONS: usize = 5;

/// Fixed system instruction for every turn. There is no per-request or
/// multi-turn prompt state.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that uses tools when needed.";

/// The agent-execution seam held in `AppState` as `Arc<dyn AgentRuntime>`.
/// Endpoint tests swap in a mock so no live model call is ever made.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    async fn invoke(&self, input: &str) -> Result<String, AppError>;
}

pub struct AgentExecutor {
    llm: LlmClient,
    tools: Vec<Arc<dyn Tool>>,
    tool_definitions: Vec<ToolDefinition>,
}

impl AgentExecutor {
    pub fn new(llm: LlmClient, tools: Vec<Arc<dyn Tool>>) -> Self {
        let tool_definitions = tools
            .iter()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect();

        Self {
            llm,
            tools,
            tool_definitions,
        }
    }

    /// Invokes every `tool_use` block in an assistant turn and returns the
    /// matching `tool_result` blocks in request order.
    async fn run_tool_calls(&self, content: &[ContentBlock]) -> Result<Vec<Value>, AppError> {
        let mut results = Vec::new();

        for block in content.iter().filter(|b| b.block_type == "tool_use") {
            let id = block
                .id
                .as_deref()
                .ok_or_else(|| AppError::Agent("tool_use block missing id".to_string()))?;
            let name = block
                .name
                .as_deref()
                .ok_or_else(|| AppError::Agent("tool_use block missing name".to_string()))?;

            let output = match self.tools.iter().find(|t| t.name() == name) {
                Some(tool) => {
                    let input = block.input.clone().unwrap_or_else(|| json!({}));
                    debug!(tool = name, "invoking tool");
                    tool.invoke(input).await?
                }
                None => {
                    // Let the model recover instead of failing the request.
                    warn!(tool = name, "model requested unknown tool");
                    format!("Unknown tool: {name}")
                }
            };

            results.push(json!({
                "type": "tool_result",
                "tool_use_id": id,
                "content": output,
            }));
        }

        Ok(results)
    }
}

#[async_trait]
impl AgentRuntime for AgentExecutor {
    async fn invoke(&self, input: &str) -> Result<String, AppError> {
        let mut messages: Vec<Value> = vec![json!({ "role": "user", "content": input })];

        for _ in 0..MAX_ITERATIONS {
            let response = self
                .llm
                .call(&messages, &self.tool_definitions, SYSTEM_PROMPT)
                .await
                .map_err(|e| AppError::Agent(e.to_string()))?;

            if !response.wants_tools() {
                let text = response.text();
                if text.is_empty() {
                    return Err(AppError::Agent(LlmError::EmptyContent.to_string()));
                }
                return Ok(text);
            }

            let tool_results = self.run_tool_calls(&response.content).await?;

            // Replay the assistant turn verbatim, then answer it.
            messages.push(json!({
                "role": "assistant",
                "content": serde_json::to_value(&response.content)
                    .map_err(|e| AppError::Agent(e.to_string()))?,
            }));
            messages.push(json!({ "role": "user", "content": tool_results }));
        }

        warn!("agent exceeded {MAX_ITERATIONS} tool iterations");
        Err(AppError::Agent(
            LlmError::MaxIterations(MAX_ITERATIONS).to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UppercaseTool;

    #[async_trait]
    impl Tool for UppercaseTool {
        fn name(&self) -> &str {
            "uppercase"
        }
        fn description(&self) -> &str {
            "Uppercases the input"
        }
        fn input_schema(&self) -> Value {
            json!({ "type": "object" })
        }
        async fn invoke(&self, input: Value) -> Result<String, AppError> {
            Ok(input["text"].as_str().unwrap_or_default().to_uppercase())
        }
    }

    fn tool_use_block(id: &str, name: &str, input: Value) -> ContentBlock {
        ContentBlock {
            block_type: "tool_use".to_string(),
            text: None,
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            input: Some(input),
        }
    }

    fn make_executor() -> AgentExecutor {
        AgentExecutor::new(
            LlmClient::new("test-key".to_string()),
            vec![Arc::new(UppercaseTool)],
        )
    }

    #[tokio::test]
    async fn test_tool_calls_produce_matching_results() {
        let executor = make_executor();
        let content = vec![
            tool_use_block("toolu_01", "uppercase", json!({ "text": "abc" })),
            tool_use_block("toolu_02", "uppercase", json!({ "text": "def" })),
        ];

        let results = executor.run_tool_calls(&content).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["tool_use_id"], "toolu_01");
        assert_eq!(results[0]["content"], "ABC");
        assert_eq!(results[1]["tool_use_id"], "toolu_02");
        assert_eq!(results[1]["content"], "DEF");
    }

    #[tokio::test]
    async fn test_unknown_tool_becomes_recoverable_result() {
        let executor = make_executor();
        let content = vec![tool_use_block("toolu_01", "nonexistent", json!({}))];

        let results = executor.run_tool_calls(&content).await.unwrap();
        assert_eq!(results[0]["content"], "Unknown tool: nonexistent");
    }

    #[tokio::test]
    async fn test_text_blocks_are_ignored_by_tool_runner() {
        let executor = make_executor();
        let content = vec![ContentBlock {
            block_type: "text".to_string(),
            text: Some("thinking...".to_string()),
            id: None,
            name: None,
            input: None,
        }];

        let results = executor.run_tool_calls(&content).await.unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_tool_definitions_are_built_from_tools() {
        let executor = make_executor();
        assert_eq!(executor.tool_definitions.len(), 1);
        assert_eq!(executor.tool_definitions[0].name, "uppercase");
    }
}
