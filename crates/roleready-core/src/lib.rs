//! roleready-core — Assessment engine, navigator, and scoring.
//!
//! This crate defines the question-bank data model, the question-flow
//! state machine, and the scoring pipeline that the roleready system
//! builds on.

pub mod bank;
pub mod error;
pub mod model;
pub mod navigator;
pub mod report;
pub mod results;
pub mod scoring;
