//! Homework review status watcher.
//!
//! The binary wires three pieces together:
//!
//! - **watcher**: the fetch -> validate -> notify loop
//! - **logging**: tracing to stdout and an append-mode log file
//!
//! The API client and the Telegram notifier live in their own crates
//! (`reviewbot-api`, `reviewbot-telegram`); the loop talks to them through
//! the [`watcher::Feed`] and [`watcher::Sink`] traits.

pub mod logging;
pub mod watcher;

pub use watcher::{Feed, Sink, WatchError, Watcher};
