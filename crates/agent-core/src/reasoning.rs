//! Reasoning Loop
//!
//! ReAct-style loop: the model observes the conversation, optionally emits a
//! tool call, receives the tool result as context, and repeats until it
//! produces a plain-text answer. Which tools get invoked, in what order and
//! how many times per turn, is entirely the model's decision; this code only
//! supplies the catalog and executes what is asked.

use std::sync::Arc;

use crate::error::{AgentError, Result};
use crate::message::{Conversation, Message, Role};
use crate::provider::{GenerationOptions, LlmProvider};
use crate::tool::{ToolCall, ToolRegistry, ToolResult};

/// Agent configuration
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// System prompt template
    pub system_prompt: String,

    /// Maximum reasoning iterations before giving up
    pub max_iterations: usize,

    /// Generation options
    pub generation: GenerationOptions,

    /// Whether to append tool descriptions to system prompt
    pub inject_tool_descriptions: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            max_iterations: 10,
            generation: GenerationOptions::default(),
            inject_tool_descriptions: true,
        }
    }
}

const DEFAULT_SYSTEM_PROMPT: &str = r#"You are a helpful AI assistant.

When you need to use a tool, respond with a JSON block in this exact format:
```tool
{"tool": "tool_name", "arguments": {"arg1": "value1"}}
```

After receiving tool results, synthesize them into a helpful response.
If you can answer directly without tools, do so.
Be concise and accurate."#;

/// The main Agent struct
pub struct Agent {
    provider: Arc<dyn LlmProvider>,
    tools: Arc<ToolRegistry>,
    config: AgentConfig,
}

impl Agent {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        tools: Arc<ToolRegistry>,
        config: AgentConfig,
    ) -> Self {
        Self {
            provider,
            tools,
            config,
        }
    }

    /// Build the full system prompt including tool descriptions
    fn build_system_prompt(&self) -> String {
        let mut prompt = self.config.system_prompt.clone();

        if self.config.inject_tool_descriptions && !self.tools.is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(&self.tools.generate_prompt_section());
        }

        prompt
    }

    /// Run the agent until it produces a final text response
    pub async fn run(&self, conversation: &mut Conversation) -> Result<String> {
        // Ensure system prompt is set
        if conversation.messages().first().map(|m| &m.role) != Some(&Role::System) {
            let messages = conversation.messages_mut();
            messages.insert(0, Message::system(self.build_system_prompt()));
        }

        let mut iterations = 0;

        loop {
            iterations += 1;

            if iterations > self.config.max_iterations {
                return Err(AgentError::MaxIterations(self.config.max_iterations));
            }

            let completion = self
                .provider
                .complete(conversation.messages(), &self.config.generation)
                .await?;

            let content = completion.content.clone();
            conversation.push(Message::assistant(&content));

            match self.parse_tool_call(&content) {
                Ok(Some(tool_call)) => {
                    tracing::debug!(tool = %tool_call.name, "Executing tool");

                    let result = self.execute_tool(&tool_call).await;

                    let tool_message = self.format_tool_result(&result);
                    conversation.push(Message::tool(tool_message, tool_call.id.clone()));
                }
                Ok(None) => {
                    // No tool call - this is the final response
                    return Ok(content);
                }
                Err(e) => {
                    // Malformed tool block: report it back so the model can retry
                    tracing::warn!("Rejected tool call: {}", e);
                    conversation.push(Message::tool(
                        format!("[Tool call rejected]\n{}", e),
                        None,
                    ));
                }
            }
        }
    }

    /// Run with a simple string input (creates temporary conversation)
    pub async fn ask(&self, question: &str) -> Result<String> {
        let mut conversation = Conversation::with_system_prompt(self.build_system_prompt());
        conversation.push(Message::user(question));
        self.run(&mut conversation).await
    }

    /// Parse a tool call from LLM response
    ///
    /// A well-formed ```tool block must parse; a garbled one is a `Parse`
    /// error rather than silent free text.
    fn parse_tool_call(&self, content: &str) -> Result<Option<ToolCall>> {
        // Look for ```tool ... ``` blocks
        let tool_start = "```tool";
        let tool_end = "```";

        if let Some(start_idx) = content.find(tool_start) {
            let after_marker = &content[start_idx + tool_start.len()..];
            if let Some(end_idx) = after_marker.find(tool_end) {
                let json_str = after_marker[..end_idx].trim();

                return match serde_json::from_str::<RawToolCall>(json_str) {
                    Ok(raw) => {
                        let mut call = raw.into_call();
                        if call.id.is_none() {
                            call.id = Some(uuid::Uuid::new_v4().to_string());
                        }
                        Ok(Some(call))
                    }
                    Err(e) => Err(AgentError::Parse(format!(
                        "invalid tool call JSON: {}",
                        e
                    ))),
                };
            }
        }

        // Fallback: raw JSON with a "tool" key somewhere in the text
        Ok(self.parse_inline_tool_call(content))
    }

    fn parse_inline_tool_call(&self, content: &str) -> Option<ToolCall> {
        if !content.contains(r#""tool""#) {
            return None;
        }

        let start = content.find('{')?;
        let end = content.rfind('}')?;

        if end <= start {
            return None;
        }

        let json_str = &content[start..=end];
        serde_json::from_str::<RawToolCall>(json_str)
            .ok()
            .map(RawToolCall::into_call)
    }

    /// Execute a tool call, converting engine errors into failure results
    async fn execute_tool(&self, call: &ToolCall) -> ToolResult {
        match self.tools.execute(call).await {
            Ok(mut result) => {
                result.id = call.id.clone();
                result
            }
            Err(e) => ToolResult {
                name: call.name.clone(),
                id: call.id.clone(),
                success: false,
                output: format!("Error: {}", e),
                data: None,
            },
        }
    }

    fn format_tool_result(&self, result: &ToolResult) -> String {
        if result.success {
            format!("[Tool '{}' returned]\n{}", result.name, result.output)
        } else {
            format!("[Tool '{}' failed]\n{}", result.name, result.output)
        }
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

/// Wire shape of a model-emitted tool call (`{"tool": ..., "arguments": ...}`)
#[derive(serde::Deserialize)]
struct RawToolCall {
    #[serde(rename = "tool")]
    name: String,
    #[serde(default)]
    arguments: std::collections::HashMap<String, serde_json::Value>,
    #[serde(default)]
    id: Option<String>,
}

impl RawToolCall {
    fn into_call(self) -> ToolCall {
        ToolCall {
            name: self.name,
            arguments: self.arguments,
            id: self.id,
        }
    }
}

/// Builder for Agent configuration
pub struct AgentBuilder {
    provider: Option<Arc<dyn LlmProvider>>,
    tools: ToolRegistry,
    config: AgentConfig,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            provider: None,
            tools: ToolRegistry::new(),
            config: AgentConfig::default(),
        }
    }

    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn tool<T: crate::tool::Tool + 'static>(mut self, tool: T) -> Self {
        self.tools.register(tool);
        self
    }

    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.generation.model = model.into();
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.generation.temperature = temp;
        self
    }

    pub fn max_iterations(mut self, max: usize) -> Self {
        self.config.max_iterations = max;
        self
    }

    pub fn build(self) -> Result<Agent> {
        let provider = self
            .provider
            .ok_or_else(|| AgentError::Config("Provider is required".into()))?;

        Ok(Agent::new(provider, Arc::new(self.tools), self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Completion;
    use crate::tool::{Tool, ToolSchema};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider that replays a fixed script of responses
    struct ScriptedProvider {
        responses: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().rev().map(String::from).collect()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn complete(
            &self,
            _messages: &[Message],
            options: &GenerationOptions,
        ) -> Result<Completion> {
            let content = self
                .responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| AgentError::Provider("script exhausted".into()))?;
            Ok(Completion {
                content,
                model: options.model.clone(),
                usage: None,
                finish_reason: None,
            })
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }
    }

    struct PingTool;

    #[async_trait]
    impl Tool for PingTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema::niladic("ping", "Reply with pong", false)
        }

        async fn execute(&self, _call: &ToolCall) -> Result<ToolResult> {
            Ok(ToolResult::success("ping", "pong"))
        }
    }

    #[tokio::test]
    async fn test_plain_answer_passes_through() {
        let provider = Arc::new(ScriptedProvider::new(vec!["Just an answer."]));
        let agent = AgentBuilder::new()
            .provider(provider)
            .tool(PingTool)
            .build()
            .unwrap();

        let answer = agent.ask("hello").await.unwrap();
        assert_eq!(answer, "Just an answer.");
    }

    #[tokio::test]
    async fn test_tool_call_round_trip() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            "```tool\n{\"tool\": \"ping\", \"arguments\": {}}\n```",
            "The tool said pong.",
        ]));
        let agent = AgentBuilder::new()
            .provider(provider)
            .tool(PingTool)
            .build()
            .unwrap();

        let mut conversation = Conversation::new();
        conversation.push(Message::user("ping please"));

        let answer = agent.run(&mut conversation).await.unwrap();
        assert_eq!(answer, "The tool said pong.");

        // system + user + assistant(tool call) + tool result + assistant(final)
        assert_eq!(conversation.len(), 5);
        assert!(conversation.messages()[3].content.contains("pong"));
    }

    #[tokio::test]
    async fn test_unknown_tool_becomes_failure_context() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            "```tool\n{\"tool\": \"missing\", \"arguments\": {}}\n```",
            "I could not do that.",
        ]));
        let agent = AgentBuilder::new().provider(provider).build().unwrap();

        let mut conversation = Conversation::new();
        conversation.push(Message::user("do the thing"));

        let answer = agent.run(&mut conversation).await.unwrap();
        assert_eq!(answer, "I could not do that.");
        assert!(
            conversation
                .messages()
                .iter()
                .any(|m| m.role == Role::Tool && m.content.contains("failed"))
        );
    }

    #[tokio::test]
    async fn test_garbled_tool_block_is_rejected_and_recoverable() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            "```tool\n{\"tool\": \"ping\", \"arguments\":\n```",
            "```tool\n{\"tool\": \"ping\", \"arguments\": {}}\n```",
            "The tool said pong.",
        ]));
        let agent = AgentBuilder::new()
            .provider(provider)
            .tool(PingTool)
            .build()
            .unwrap();

        let mut conversation = Conversation::new();
        conversation.push(Message::user("ping please"));

        let answer = agent.run(&mut conversation).await.unwrap();
        assert_eq!(answer, "The tool said pong.");
        assert!(
            conversation
                .messages()
                .iter()
                .any(|m| m.role == Role::Tool && m.content.contains("rejected"))
        );
    }

    #[test]
    fn test_build_requires_provider() {
        assert!(AgentBuilder::new().build().is_err());
    }
}
