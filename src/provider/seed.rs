//! Built-in seed data
//!
//! The records the dashboard starts from when no seed file is configured.

use super::DataProvider;
use crate::model::{
    ActivityEntry, ActivityKind, AnalyticsDataset, Anomaly, AnomalyDetail, AnomalyKind,
    AnomalyStatus, CityRevenue, CuisineShare, HeadlineChanges, MenuCategory, MenuItem,
    MetricDelta, MonthlyTrend, PartnerPerformance, Restaurant, RestaurantStatus, Severity,
    SystemHealth, TimelineEvent,
};

/// Provider serving the compiled-in seed
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedProvider;

fn item(name: &str, price: f64, description: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        price,
        description: description.to_string(),
    }
}

fn category(name: &str, items: Vec<MenuItem>) -> MenuCategory {
    MenuCategory {
        category: name.to_string(),
        items,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl DataProvider for SeedProvider {
    fn restaurants(&self) -> Vec<Restaurant> {
        vec![
            Restaurant::new(1, "Mario's Italian Bistro", "New York", "Italian", "Premium Partner")
                .metrics(125_000, 4.8, 1250)
                .contact(
                    "+1 (555) 123-4567",
                    "contact@mariosbistro.com",
                    "123 Little Italy St, New York, NY 10013",
                    "Giuseppe Mario",
                )
                .menu(vec![
                    category(
                        "Pasta",
                        vec![
                            item(
                                "Spaghetti Carbonara",
                                18.0,
                                "Classic Roman pasta with eggs, cheese, and pancetta",
                            ),
                            item("Fettuccine Alfredo", 16.0, "Creamy pasta with parmesan cheese"),
                        ],
                    ),
                    category(
                        "Pizza",
                        vec![
                            item("Margherita", 14.0, "Fresh tomato, mozzarella, and basil"),
                            item("Pepperoni", 16.0, "Classic pepperoni with mozzarella cheese"),
                        ],
                    ),
                ]),
            Restaurant::new(2, "Sakura Sushi", "Los Angeles", "Japanese", "Standard Partner")
                .metrics(98_000, 4.6, 890)
                .contact(
                    "+1 (555) 987-6543",
                    "info@sakurasushi.com",
                    "456 Sunset Blvd, Los Angeles, CA 90028",
                    "Hiroshi Tanaka",
                )
                .menu(vec![category(
                    "Sushi Rolls",
                    vec![
                        item("California Roll", 12.0, "Crab, avocado, and cucumber"),
                        item("Spicy Tuna Roll", 14.0, "Spicy tuna with cucumber"),
                    ],
                )]),
            Restaurant::new(3, "Taco Fiesta", "Austin", "Mexican", "Premium Partner")
                .status(RestaurantStatus::Pending)
                .metrics(67_000, 4.3, 567),
            Restaurant::new(4, "Le Petit Café", "San Francisco", "French", "Standard Partner")
                .status(RestaurantStatus::Inactive)
                .metrics(45_000, 4.1, 234),
            Restaurant::new(5, "Spice Garden", "Chicago", "Indian", "Premium Partner")
                .metrics(87_000, 4.7, 723),
        ]
    }

    fn anomalies(&self) -> Vec<Anomaly> {
        vec![
            Anomaly {
                id: "a1".to_string(),
                kind: AnomalyKind::Revenue,
                severity: Severity::Critical,
                title: "Revenue drop detected".to_string(),
                description: "Sharp 32% revenue decline vs previous 2h baseline.".to_string(),
                restaurant: "Central Bistro".to_string(),
                city: "Paris".to_string(),
                impact: "-32% hourly revenue".to_string(),
                confidence: 92,
                status: AnomalyStatus::Active,
                timestamp: "2 min ago".to_string(),
                detail: AnomalyDetail {
                    affected_metrics: vec![
                        MetricDelta::new("Revenue/h", "$2,150", "$1,460", "-32%"),
                        MetricDelta::new("Average Ticket", "$28.40", "$22.10", "-22%"),
                    ],
                    timeline: vec![
                        TimelineEvent::new("09:10", "Baseline stable"),
                        TimelineEvent::new("09:35", "Downward trend begins"),
                        TimelineEvent::new("09:40", "Anomaly flagged"),
                    ],
                    recommendations: strings(&[
                        "Check POS connectivity",
                        "Verify promo configurations",
                        "Review kitchen delay logs",
                    ]),
                    technical_details:
                        "Z-score 4.8 vs rolling 2h window across correlated revenue streams."
                            .to_string(),
                    estimated_resolution: "~35 min (historical median)".to_string(),
                },
            },
            Anomaly {
                id: "a2".to_string(),
                kind: AnomalyKind::Security,
                severity: Severity::High,
                title: "Suspicious login pattern".to_string(),
                description: "Multiple failed privileged logins from unusual ASN.".to_string(),
                restaurant: "Harbor Grill".to_string(),
                city: "Lisbon".to_string(),
                impact: "Potential credential stuffing risk".to_string(),
                confidence: 88,
                status: AnomalyStatus::Investigating,
                timestamp: "14 min ago".to_string(),
                detail: AnomalyDetail {
                    affected_metrics: vec![
                        MetricDelta::new("Failed Logins", "4", "36", "+800%"),
                        MetricDelta::new("Unique IPs", "3", "17", "+466%"),
                    ],
                    timeline: vec![
                        TimelineEvent::new("08:50", "Baseline auth noise"),
                        TimelineEvent::new("09:05", "Spike in failed logins"),
                        TimelineEvent::new("09:07", "ASN flagged"),
                    ],
                    recommendations: strings(&[
                        "Temporarily enforce MFA challenge",
                        "Geo-block offending ASN",
                        "Rotate impacted service tokens",
                    ]),
                    technical_details:
                        "Entropy deviation across credential attempts exceeded 3.2 threshold."
                            .to_string(),
                    estimated_resolution: "~20 min (containment)".to_string(),
                },
            },
        ]
    }

    fn analytics(&self) -> AnalyticsDataset {
        let city = |city: &str, revenue, orders, restaurants| CityRevenue {
            city: city.to_string(),
            revenue,
            orders,
            restaurants,
        };
        let cuisine = |name: &str, value, color: &str| CuisineShare {
            name: name.to_string(),
            value,
            color: color.to_string(),
        };
        let month = |month: &str, revenue, orders, partners| MonthlyTrend {
            month: month.to_string(),
            revenue,
            orders,
            partners,
        };

        AnalyticsDataset {
            revenue_by_city: vec![
                city("New York", 125_000, 1250, 15),
                city("Los Angeles", 98_000, 890, 12),
                city("Chicago", 87_000, 723, 10),
                city("Austin", 67_000, 567, 8),
                city("San Francisco", 45_000, 234, 6),
            ],
            cuisine_share: vec![
                cuisine("Italian", 28, "#E53935"),
                cuisine("Japanese", 22, "#FB8C00"),
                cuisine("Mexican", 18, "#4CAF50"),
                cuisine("French", 15, "#2196F3"),
                cuisine("Indian", 12, "#9C27B0"),
                cuisine("Other", 5, "#607D8B"),
            ],
            monthly_trends: vec![
                month("Jan", 85_000, 850, 45),
                month("Feb", 92_000, 920, 48),
                month("Mar", 98_000, 980, 52),
                month("Apr", 105_000, 1050, 55),
                month("May", 112_000, 1120, 58),
                month("Jun", 125_000, 1250, 62),
            ],
            partner_performance: vec![
                PartnerPerformance {
                    tier: "Premium Partners".to_string(),
                    revenue: 280_000,
                    count: 35,
                    avg_rating: 4.7,
                },
                PartnerPerformance {
                    tier: "Standard Partners".to_string(),
                    revenue: 142_000,
                    count: 28,
                    avg_rating: 4.3,
                },
            ],
            changes: HeadlineChanges {
                revenue: "+12.5%".to_string(),
                restaurants: "+8.2%".to_string(),
                orders: "+15.3%".to_string(),
                rating: "+0.2".to_string(),
            },
        }
    }

    fn activity(&self) -> Vec<ActivityEntry> {
        let entry = |id, kind, title: &str, description: &str, time: &str| ActivityEntry {
            id,
            kind,
            title: title.to_string(),
            description: description.to_string(),
            time: time.to_string(),
        };

        vec![
            entry(
                1,
                ActivityKind::Restaurant,
                "New restaurant added",
                "Mario's Italian Bistro joined the platform",
                "2 hours ago",
            ),
            entry(
                2,
                ActivityKind::Anomaly,
                "Anomaly resolved",
                "Revenue drop issue at Sakura Sushi resolved",
                "4 hours ago",
            ),
            entry(
                3,
                ActivityKind::Alert,
                "New anomaly detected",
                "Unusual order pattern at Taco Fiesta",
                "6 hours ago",
            ),
        ]
    }

    fn system_health(&self) -> SystemHealth {
        SystemHealth {
            uptime: 98.5,
            change: "-0.2%".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let restaurants = SeedProvider.restaurants();
        let ids: HashSet<u32> = restaurants.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), restaurants.len());

        let anomalies = SeedProvider.anomalies();
        let ids: HashSet<&str> = anomalies.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), anomalies.len());
    }

    #[test]
    fn test_cuisine_share_sums_to_hundred() {
        let total: u32 = SeedProvider
            .analytics()
            .cuisine_share
            .iter()
            .map(|c| c.value)
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_menus_present_for_featured_partners() {
        let restaurants = SeedProvider.restaurants();
        assert!(restaurants[0].menu.is_some());
        assert!(restaurants[1].menu.is_some());
        assert!(restaurants[2].menu.is_none());
        assert_eq!(restaurants[0].manager.as_deref(), Some("Giuseppe Mario"));
    }
}
