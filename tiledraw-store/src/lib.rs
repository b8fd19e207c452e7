//! Tiledraw Store
//!
//! State containers used by drawing sessions:
//! - `Store`: an observable value with synchronous subscriber notification
//! - `Stack`: an immutable, bounded undo history
//!
//! Neither type knows anything about drawings; the editor decides what goes
//! in them.

pub mod history;
pub mod store;

pub use history::{Stack, UNDO_STACK_LIMIT};
pub use store::{Store, Subscription};
