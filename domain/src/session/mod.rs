//! Conversation session domain.
//!
//! - [`entities::Turn`]: a single role-tagged message
//! - [`entities::Transcript`]: the ordered history a session owns
//! - [`request::ExchangeRequest`]: the payload for one exchange
//! - [`outcome::ExchangeOutcome`]: the typed result of one exchange

pub mod entities;
pub mod outcome;
pub mod request;
