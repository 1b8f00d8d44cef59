//! Question catalog and prize ladder for Hotseat.
//!
//! Everything in this crate is read-only at runtime: the catalog and the
//! ladder are loaded and validated once at startup, then shared across
//! every session (typically behind an `Arc`) without synchronization.
//!
//! # Key types
//!
//! - [`Question`] / [`QuestionId`] — one multiple-choice question record
//! - [`QuestionBank`] — the validated catalog, indexed by id
//! - [`PrizeLadder`] — ascending prize values plus the safe rung
//! - [`BankError`] — every way the config data can be malformed

mod bank;
mod error;
mod ladder;
mod question;

pub use bank::QuestionBank;
pub use error::BankError;
pub use ladder::PrizeLadder;
pub use question::{Question, QuestionId, OPTION_COUNT};
