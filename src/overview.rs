//! Dashboard overview derivation
//!
//! The landing section: a status banner driven by the anomaly feed, stat
//! cards computed from the restaurant store, the recent activity feed, the
//! top three restaurants by revenue and quick links into other sections.

use serde::Serialize;

use crate::analytics::StatCard;
use crate::format;
use crate::model::{ActivityEntry, HeadlineChanges, Restaurant, RestaurantStatus, SystemHealth};
use crate::view::Section;
use crate::workflow::AnomalyFeed;

/// Number of restaurants in the top performers card
pub const TOP_PERFORMERS: usize = 3;

/// Counts shown in the system status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBanner {
    pub critical_active: usize,
    pub active: usize,
}

impl StatusBanner {
    pub fn from_feed(feed: &AnomalyFeed) -> Self {
        Self {
            critical_active: feed.critical_active_count(),
            active: feed.active_count(),
        }
    }

    pub fn needs_attention(&self) -> bool {
        self.critical_active > 0
    }

    pub fn message(&self) -> String {
        if self.active == 0 {
            return "No active anomalies. All systems operational.".to_string();
        }
        format!(
            "{} critical anomalies detected. {} active overall.",
            self.critical_active, self.active
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    /// 1-based rank
    pub rank: usize,
    pub id: u32,
    pub name: String,
    pub city: String,
    pub revenue: u64,
    pub rating: f64,
    /// Revenue relative to the leader, 0-100
    pub progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub caption: &'static str,
    pub section: Section,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Add Restaurant",
        caption: "Onboard new partner",
        section: Section::Restaurants,
    },
    QuickAction {
        label: "View Anomalies",
        caption: "Check AI alerts",
        section: Section::Anomalies,
    },
    QuickAction {
        label: "Analytics",
        caption: "View detailed reports",
        section: Section::Analytics,
    },
    QuickAction {
        label: "Manage Users",
        caption: "User administration",
        section: Section::Settings,
    },
];

/// Everything the overview section renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub banner: StatusBanner,
    pub stats: Vec<StatCard>,
    pub activity: Vec<ActivityEntry>,
    pub top_performers: Vec<TopPerformer>,
}

impl Overview {
    pub fn derive(
        restaurants: &[Restaurant],
        feed: &AnomalyFeed,
        changes: &HeadlineChanges,
        health: &SystemHealth,
        activity: &[ActivityEntry],
    ) -> Self {
        let revenue: u64 = restaurants.iter().map(|r| r.revenue).sum();
        let orders: u64 = restaurants.iter().map(|r| u64::from(r.orders)).sum();
        let active = restaurants
            .iter()
            .filter(|r| r.status == RestaurantStatus::Active)
            .count();

        let stats = vec![
            StatCard::new(
                "Total Revenue",
                format::compact_currency(revenue),
                &changes.revenue,
                "#E53935",
            ),
            StatCard::new(
                "Active Restaurants",
                active.to_string(),
                &changes.restaurants,
                "#FB8C00",
            ),
            StatCard::new(
                "Total Orders",
                format::thousands(orders),
                &changes.orders,
                "#4CAF50",
            ),
            StatCard::new(
                "System Health",
                format!("{:.1}%", health.uptime),
                &health.change,
                "#2196F3",
            ),
        ];

        Self {
            banner: StatusBanner::from_feed(feed),
            stats,
            activity: activity.to_vec(),
            top_performers: top_performers(restaurants, TOP_PERFORMERS),
        }
    }
}

/// Highest revenue first; ties keep store order
pub fn top_performers(restaurants: &[Restaurant], n: usize) -> Vec<TopPerformer> {
    let mut ranked: Vec<&Restaurant> = restaurants.iter().collect();
    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue));

    let leader = ranked.first().map_or(0, |r| r.revenue);
    ranked
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, r)| TopPerformer {
            rank: i + 1,
            id: r.id,
            name: r.name.clone(),
            city: r.city.clone(),
            revenue: r.revenue,
            rating: r.rating,
            progress: if leader == 0 {
                0.0
            } else {
                r.revenue as f64 / leader as f64 * 100.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{DataProvider, SeedProvider};

    fn overview(restaurants: &[Restaurant]) -> Overview {
        let feed = AnomalyFeed::new(SeedProvider.anomalies());
        Overview::derive(
            restaurants,
            &feed,
            &SeedProvider.analytics().changes,
            &SeedProvider.system_health(),
            &SeedProvider.activity(),
        )
    }

    #[test]
    fn test_stats_from_store() {
        let view = overview(&SeedProvider.restaurants());
        let values: Vec<&str> = view.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["$422K", "3", "3,664", "98.5%"]);
        assert_eq!(view.stats[3].change, "-0.2%");
        assert_eq!(view.activity.len(), 3);
    }

    #[test]
    fn test_banner() {
        let view = overview(&SeedProvider.restaurants());
        assert_eq!(view.banner.critical_active, 1);
        assert_eq!(view.banner.active, 1);
        assert!(view.banner.needs_attention());
        assert_eq!(
            view.banner.message(),
            "1 critical anomalies detected. 1 active overall."
        );
    }

    #[test]
    fn test_top_performers() {
        let top = top_performers(&SeedProvider.restaurants(), TOP_PERFORMERS);
        let names: Vec<&str> = top.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Mario's Italian Bistro", "Sakura Sushi", "Spice Garden"]);
        assert_eq!(top[0].progress, 100.0);
        assert!((top[1].progress - 78.4).abs() < 1e-9);
        assert_eq!(top[2].rank, 3);
    }

    #[test]
    fn test_top_performers_ties_and_empty() {
        let restaurants = vec![
            Restaurant::new(1, "A", "X", "Y", "Standard Partner"),
            Restaurant::new(2, "B", "X", "Y", "Standard Partner"),
        ];
        let top = top_performers(&restaurants, 3);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, 1);
        assert_eq!(top[0].progress, 0.0);

        assert!(top_performers(&[], 3).is_empty());
    }

    #[test]
    fn test_quick_actions_target_sections() {
        let sections: Vec<Section> = QUICK_ACTIONS.iter().map(|a| a.section).collect();
        assert_eq!(
            sections,
            vec![
                Section::Restaurants,
                Section::Anomalies,
                Section::Analytics,
                Section::Settings
            ]
        );
    }
}
