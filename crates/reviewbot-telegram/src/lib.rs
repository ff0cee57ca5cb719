//! Telegram notification delivery for reviewbot.
//!
//! The bot is send-only: no dispatcher, no command handlers, just
//! `sendMessage` to the one chat named in the configuration. Delivery
//! failure is reported through a boolean so the watcher loop stays alive
//! whatever Telegram does.

pub mod notifier;

pub use notifier::StatusNotifier;
