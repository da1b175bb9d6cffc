//! SentiBot core: sentiment scoring and conversation-trend engine.
//!
//! This crate is pure computation: it maps message texts to polarity scores
//! and labels, aggregates a session's scores into an overall verdict with a
//! mood trend, models the conversation transcript, and selects canned
//! replies. Terminal I/O and file persistence live in the surrounding
//! crates and talk to this one through the traits defined here.

pub mod config;
pub mod error;
pub mod intent;
pub mod responder;
pub mod sentiment;
pub mod session;

// Re-export common error type
pub use error::{Result, SentibotError};
