//! Tigris Chat - pixel-art chat companion
//!
//! Two halves share this library:
//! - the question endpoint (`api`), which logs every question to an
//!   append-only file and relays it to the answer service
//! - the conversation view (`conversation`, `ui`), a terminal client that
//!   drives the submit/reveal state machine against that endpoint

pub mod answer;
pub mod api;
pub mod client;
pub mod config;
pub mod conversation;
pub mod question_log;
pub mod ui;
