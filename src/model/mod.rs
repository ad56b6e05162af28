//! Domain records
//!
//! - **restaurant**: restaurant partners, menus and the edit schema
//! - **anomaly**: anomaly alerts and their classification enums
//! - **analytics**: chart series and overview feed items

pub mod analytics;
pub mod anomaly;
pub mod restaurant;

pub use analytics::{
    ActivityEntry, ActivityKind, AnalyticsDataset, CityRevenue, CuisineShare, HeadlineChanges,
    MonthlyTrend, PartnerPerformance, SystemHealth,
};
pub use anomaly::{
    Anomaly, AnomalyDetail, AnomalyKind, AnomalyStatus, ChangeDirection, MetricDelta, Severity,
    TimelineEvent,
};
pub use restaurant::{MenuCategory, MenuItem, Restaurant, RestaurantStatus, PARTNER_TIERS};
