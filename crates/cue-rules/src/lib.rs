//! cue-rules: feedback rules and the stock rule catalog
//!
//! A [`Rule`] pairs a pure predicate over interaction events with the
//! feedback action to run when it matches, plus priority, layering and
//! haptic settings. The [`catalog`] module ships preconfigured rules for
//! common interaction patterns.

pub mod catalog;
pub mod rule;

// Re-exports
pub use rule::{FeedbackAction, Rule, RulePredicate};
