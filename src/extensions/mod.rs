//! Extension points for hosts.

pub mod observers;

pub use observers::{ObserverContext, ShowcaseEvent, ShowcaseObserver};
