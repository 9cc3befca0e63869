pub mod layout;
pub mod tech_details;
pub mod types;

pub use layout::{PageLayout, SectionMarkup, TechCardMarkup};
pub use tech_details::{TechDetails, TechToggle};
pub use types::{SectionId, SlotId};
