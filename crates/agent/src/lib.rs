//! Chat assistant for the pricing page
//!
//! The assistant does not understand messages. Every non-empty visitor message
//! gets one reply drawn from a fixed set of canned answers, delivered after a
//! short delay so the exchange reads like a conversation.
//!
//! # Key Types
//!
//! - `ChatResponder` - async seam that turns a visitor message into a reply
//! - `CannedResponder` - the shipped responder, driven by a `RandomSource`
//! - `ChatSession` - transcript plus the reply tasks still waiting to land

pub mod responder;
pub mod session;

pub use responder::{
    CannedResponder, ChatResponder, FixedSequenceSource, RandomSource, SeededSource,
    ThreadRngSource, CANNED_REPLIES,
};
pub use session::ChatSession;
