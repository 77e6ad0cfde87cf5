//! Model access layer: the completion client and the two tool runners built on it.

pub mod client;
pub mod tool;

pub use client::{CompletionClient, DEFAULT_ENDPOINT, HttpCompletionClient, InvokeError};
pub use tool::{MisinformationTool, SimplificationTool, SubmitError};
