//! # agent-runtime
//!
//! Concrete LLM providers for the agent engine.
//!
//! ## Providers
//!
//! - **OpenAI-compatible** (default): any chat-completions endpoint
//!   (OpenAI, OpenRouter, vLLM, LM Studio, ...) selected via environment
//!   variables.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_runtime::OpenAiProvider;
//!
//! let provider = OpenAiProvider::from_env()?;
//! let agent = AgentBuilder::new()
//!     .provider(Arc::new(provider))
//!     .build()?;
//! ```

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(feature = "openai")]
pub use openai::{OpenAiConfig, OpenAiProvider};

// Re-export core types for convenience
pub use agent_core::{
    Agent, AgentBuilder, AgentError, Conversation, LlmProvider, Message, Result, Role, Tool,
    ToolRegistry,
};
