mod card_animation;
pub mod chart_catalog;
mod chart_lifecycle;
mod deferred;
mod observer_dispatch;
mod observer_registry;
mod section_router;
mod showcase;
mod showcase_config;
mod snapshot;
mod theme;

pub use card_animation::CardAnimation;
pub use chart_lifecycle::{BuildReport, ChartLifecycleManager, ChartSlot};
pub use deferred::{DeferredQueue, DeferredTask, PendingTask};
pub use section_router::{Activation, NavItem, Section, SectionRouter};
pub use showcase::Showcase;
pub use showcase_config::{ChartBuildTrigger, ShowcaseConfig};
pub use snapshot::{
    NavItemSnapshot, SHOWCASE_SNAPSHOT_JSON_SCHEMA_V1, ShowcaseSnapshot,
    ShowcaseSnapshotJsonContractV1,
};
pub use theme::{
    COLOR_SCHEME_ATTRIBUTE, ColorScheme, SchemePalette, TEXT_PROPERTY, TEXT_SECONDARY_PROPERTY,
    ThemeColors, ThemeSource,
};
