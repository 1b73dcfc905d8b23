//! Events des App-Layers.
//!
//! UI und Hintergrund-Lader melden `AppIntent`s; `intent_mapping` übersetzt sie
//! in `AppCommand`s, die der Controller ausführt und protokolliert.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
