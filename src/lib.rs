//! Leave and overtime tracking for a fixed team roster.
//!
//! This crate provides the leave rule engine (daily caps, the exclusive
//! pair, same-day and duplicate checks), a record store over a pluggable
//! document store, and the HTTP API that exposes both.

#![warn(missing_docs)]

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod rules;
pub mod store;
