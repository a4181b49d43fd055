pub mod core;

// Re-export commonly used types
pub use crate::core::brands::{Brand, Gaomon, Wacom, XpPen};
pub use crate::core::catalog::{TabletBuilder, TabletCatalog};
pub use crate::core::compatibility::{
    AdvancedCompatibility, CompatibilityKind, CompatibilityStrategy, DefaultCompatibility,
};
pub use crate::core::config::ShowcaseConfig;
pub use crate::core::errors::ShowcaseError;
pub use crate::core::showcase::{Showcase, ShowcaseSummary};
pub use crate::core::tablet::{DiscountQuote, GraphicTablet};
pub use crate::core::types::TabletSpecs;
