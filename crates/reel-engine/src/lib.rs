//! Render engine client and poll driver.
//!
//! [`RenderClient`] talks to the engine's HTTP API (submit a spec, read a
//! job status); [`PollDriver`] drives a submitted job to a terminal state
//! on a fixed cadence with a hard ceiling and cancellation support.

pub mod client;
pub mod config;
pub mod error;
pub mod poll;

pub use client::RenderClient;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use poll::{PollConfig, PollDriver, PollHandle, PollOutcome};
