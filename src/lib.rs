//! # DineDash
//!
//! Admin dashboard core for a multi-restaurant platform: restaurant
//! management, platform analytics and an AI anomaly feed, all held in memory
//! and driven by user actions.
//!
//! The crate carries no rendering. The `dinedash-ui` crate draws it in the
//! browser with Leptos; the `dinedash` binary drives it from a terminal.
//!
//! ## Modules
//!
//! - [`store`]: ordered in-memory entity collections and field schemas
//! - [`model`]: restaurants, anomalies and analytics series
//! - [`view`]: filters, pagination, the section router and form controllers
//! - [`workflow`]: anomaly status transitions and the anomaly feed
//! - [`provider`]: where the initial records come from
//! - [`analytics`] / [`overview`]: derived views
//! - [`theme`]: light/dark mode behind a preference store
//! - [`dashboard`]: everything above combined into one state object
//!
//! ## Quick Start
//!
//! ```rust
//! use dinedash::provider::SeedProvider;
//! use dinedash::view::Section;
//! use dinedash::workflow::AnomalyAction;
//! use dinedash::Dashboard;
//!
//! let mut dashboard = Dashboard::new(&SeedProvider);
//! dashboard.navigate(Section::Anomalies);
//!
//! // Resolving straight from active is refused
//! let outcome = dashboard.apply_anomaly_action("a1", AnomalyAction::Resolve);
//! assert!(!outcome.is_applied());
//!
//! dashboard.apply_anomaly_action("a1", AnomalyAction::Investigate);
//! assert!(dashboard.apply_anomaly_action("a1", AnomalyAction::Resolve).is_applied());
//!
//! dashboard.dismiss_anomaly("a1");
//! assert_eq!(dashboard.anomalies().len(), 1);
//! ```

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod format;
pub mod model;
pub mod overview;
pub mod provider;
pub mod session;
pub mod store;
pub mod theme;
pub mod view;
pub mod workflow;

// Re-export top-level types for convenience
pub use dashboard::Dashboard;
pub use error::{DashboardError, DashboardResult};

pub use model::{Anomaly, AnomalyStatus, Restaurant, RestaurantStatus, Severity};

pub use store::{Editable, Entity, EntityStore, FieldKind, FieldSpec, Patch};

pub use view::{FieldFilter, FormController, Page, Pagination, SaveOutcome, Section, SectionRouter};

pub use workflow::{AnomalyAction, AnomalyFeed, AnomalyFilter, TransitionOutcome};

pub use provider::{DataProvider, JsonSeedProvider, SeedBundle, SeedProvider};

pub use theme::{Palette, PreferenceStore, ThemeMode, ThemeService};

pub use config::{generate_default_config, Config, ConfigError};
