//! Section state store for Storydeck storylines.
//!
//! The store exclusively owns the live ordered section list. Every mutation
//! is a named command applied synchronously through [`StorylineStore::apply`];
//! consumers read state or receive deltas to merge, never hold long-lived
//! copies. The order invariant (`order` values exactly `0..n-1`) holds
//! immediately after every command.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod store;

pub use command::SectionCommand;
pub use store::StorylineStore;
