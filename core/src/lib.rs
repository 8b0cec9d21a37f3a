// Core Gemini API functionality shared by the astromaestro binaries:
// - API client for the generateContent endpoint
// - Request/response data structures
// - Conversational session state
// - Configuration loading
// - Shared error types

// Export client module - API client for Gemini
pub mod client;
pub use client::*;

// Export types module - Request/response data structures
pub mod types;
pub use types::*;

// Export session module - Multi-turn chat state
pub mod session;
pub use session::*;

// Export config module - Configuration loading
pub mod config;
pub use config::*;

// Export errors module - Shared error types
pub mod errors;
pub use errors::*;
