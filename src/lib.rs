//! Verity - Scripted User-Interview Sequencer
//!
//! This crate walks a respondent through a fixed sequence of research prompts
//! and accumulates their answers into an in-memory record for one session.

pub mod adapters;
pub mod config;
pub mod domain;
