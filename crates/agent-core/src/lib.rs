//! # agent-core
//!
//! Provider-agnostic agent engine: conversation state, an extensible tool
//! system, and the reasoning loop that ties them together.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        Agent                               │
//! │  ┌─────────────┐  ┌─────────────┐  ┌────────────────────┐  │
//! │  │  Reasoning  │  │    Tool     │  │   LlmProvider      │  │
//! │  │    Loop     │──│   Registry  │──│   (Strategy)       │  │
//! │  └─────────────┘  └─────────────┘  └────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait keeps the engine independent of any particular
//! LLM backend; the `Tool` trait keeps capabilities independent of any
//! particular dispatch mechanism.

pub mod error;
pub mod message;
pub mod provider;
pub mod reasoning;
pub mod tool;

pub use error::{AgentError, Result};
pub use message::{Conversation, Message, Role};
pub use provider::{Completion, GenerationOptions, LlmProvider};
pub use reasoning::{Agent, AgentBuilder, AgentConfig};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult, ToolSchema};
