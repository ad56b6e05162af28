//! Pages
//!
//! One page per dashboard section.

pub mod analytics;
pub mod anomalies;
pub mod overview;
pub mod restaurants;
pub mod settings;

pub use analytics::Analytics;
pub use anomalies::Anomalies;
pub use overview::Overview;
pub use restaurants::Restaurants;
pub use settings::Settings;
