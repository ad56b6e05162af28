//! Analytics series and overview feed items
//!
//! Platform-wide aggregates that are not derived from the restaurant store:
//! per-city revenue, cuisine share, monthly trends and partner performance,
//! plus the recent-activity feed shown on the overview.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityRevenue {
    pub city: String,
    pub revenue: u64,
    pub orders: u32,
    pub restaurants: u32,
}

/// Share of restaurants by cuisine, in percent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CuisineShare {
    pub name: String,
    pub value: u32,
    /// Hex color used by the pie chart
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTrend {
    pub month: String,
    pub revenue: u64,
    pub orders: u32,
    pub partners: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartnerPerformance {
    /// Tier label, e.g. "Premium Partners"
    pub tier: String,
    pub revenue: u64,
    pub count: u32,
    pub avg_rating: f64,
}

/// Change labels shown under the headline KPIs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeadlineChanges {
    pub revenue: String,
    pub restaurants: String,
    pub orders: String,
    pub rating: String,
}

impl Default for HeadlineChanges {
    fn default() -> Self {
        Self {
            revenue: "+0%".to_string(),
            restaurants: "+0%".to_string(),
            orders: "+0%".to_string(),
            rating: "+0".to_string(),
        }
    }
}

/// Everything the analytics section charts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AnalyticsDataset {
    pub revenue_by_city: Vec<CityRevenue>,
    pub cuisine_share: Vec<CuisineShare>,
    pub monthly_trends: Vec<MonthlyTrend>,
    pub partner_performance: Vec<PartnerPerformance>,
    #[serde(default)]
    pub changes: HeadlineChanges,
}

/// What an activity entry is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Restaurant,
    Anomaly,
    Alert,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub id: u32,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// Relative time label, e.g. "2 hours ago"
    pub time: String,
}

/// Platform health reading for the overview stat card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemHealth {
    /// Uptime percentage
    pub uptime: f64,
    pub change: String,
}

impl Default for SystemHealth {
    fn default() -> Self {
        Self {
            uptime: 100.0,
            change: "+0%".to_string(),
        }
    }
}
