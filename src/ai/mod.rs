/// Gemini client for the bot simulation panel.
///
/// One fixed endpoint, one call per chat turn: the transcript is mapped to
/// the API's two wire roles, the bot behavior script rides along as the
/// system instruction, and the reply text comes back whole. No retries,
/// no streaming, no rate limiting.
mod client;

pub use client::{ChatError, ChatResult, SimulatorClient, simulate_reply};
