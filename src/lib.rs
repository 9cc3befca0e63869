//! sre-showcase: section routing and chart lifecycle for a tabbed project
//! showcase page.
//!
//! The crate is headless. A host (a wasm shell, a desktop adapter, a test)
//! feeds it navigation, keyboard and theme events, advances its clock, and
//! binds a charting library through the `ChartBackend` trait.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Showcase, ShowcaseConfig};
pub use error::{ShowcaseError, ShowcaseResult};
