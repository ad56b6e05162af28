//! Analytics view derivation
//!
//! Applies the city / cuisine / partner selections to an
//! [`AnalyticsDataset`] and computes the headline KPIs from what remains.
//! Each selection narrows only the series it names; monthly trends are
//! never filtered.

use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};
use crate::format;
use crate::model::{
    AnalyticsDataset, ChangeDirection, CityRevenue, CuisineShare, MonthlyTrend,
    PartnerPerformance,
};
use crate::view::filter::{with_all, Choice};

/// A headline number with its change label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub direction: ChangeDirection,
    /// Accent color of the card
    pub color: &'static str,
}

impl StatCard {
    pub fn new(title: &str, value: String, change: &str, color: &'static str) -> Self {
        Self {
            title: title.to_string(),
            value,
            change: change.to_string(),
            direction: ChangeDirection::of(change),
            color,
        }
    }
}

/// Selections on the analytics section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsFilters {
    pub city: Choice,
    pub cuisine: Choice,
    pub partner: Choice,
}

/// Filter keys accepted by [`AnalyticsFilters::set`]
pub const ANALYTICS_FILTER_KEYS: &[&str] = &["city", "cuisine", "partner"];

impl AnalyticsFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one selection by key
    pub fn set(&mut self, key: &str, selection: &str) -> DashboardResult<()> {
        let choice = Choice::parse(selection);
        match key {
            "city" => self.city = choice,
            "cuisine" => self.cuisine = choice,
            "partner" => self.partner = choice,
            _ => return Err(DashboardError::UnknownFilter(key.to_string())),
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Select options per filter, each starting with `"all"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsOptions {
    pub cities: Vec<String>,
    pub cuisines: Vec<String>,
    pub partners: Vec<String>,
}

impl AnalyticsOptions {
    pub fn from_dataset(dataset: &AnalyticsDataset) -> Self {
        Self {
            cities: with_all(dataset.revenue_by_city.iter().map(|c| c.city.clone())),
            cuisines: with_all(dataset.cuisine_share.iter().map(|c| c.name.clone())),
            partners: with_all(dataset.partner_performance.iter().map(|p| p.tier.clone())),
        }
    }
}

/// Display label for a select option
pub fn option_label(key: &str, value: &str) -> String {
    if !Choice::parse(value).is_all() {
        return value.to_string();
    }
    match key {
        "city" => "All Cities".to_string(),
        "cuisine" => "All Cuisines".to_string(),
        "partner" => "All Partners".to_string(),
        "status" => "All Statuses".to_string(),
        _ => "All".to_string(),
    }
}

/// Filtered series plus KPIs, ready to chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsView {
    pub revenue_by_city: Vec<CityRevenue>,
    pub cuisine_share: Vec<CuisineShare>,
    pub monthly_trends: Vec<MonthlyTrend>,
    pub partner_performance: Vec<PartnerPerformance>,
    pub kpis: Vec<StatCard>,
}

impl AnalyticsView {
    pub fn derive(dataset: &AnalyticsDataset, filters: &AnalyticsFilters) -> Self {
        let revenue_by_city: Vec<CityRevenue> = dataset
            .revenue_by_city
            .iter()
            .filter(|c| filters.city.matches(Some(c.city.as_str())))
            .cloned()
            .collect();
        let cuisine_share: Vec<CuisineShare> = dataset
            .cuisine_share
            .iter()
            .filter(|c| filters.cuisine.matches(Some(c.name.as_str())))
            .cloned()
            .collect();
        let partner_performance: Vec<PartnerPerformance> = dataset
            .partner_performance
            .iter()
            .filter(|p| filters.partner.matches(Some(p.tier.as_str())))
            .cloned()
            .collect();

        let total_revenue: u64 = partner_performance.iter().map(|p| p.revenue).sum();
        let restaurants: u32 = partner_performance.iter().map(|p| p.count).sum();
        let orders: u64 = revenue_by_city.iter().map(|c| u64::from(c.orders)).sum();
        let rating = weighted_rating(&partner_performance);

        let changes = &dataset.changes;
        let kpis = vec![
            StatCard::new(
                "Total Revenue",
                format::compact_currency(total_revenue),
                &changes.revenue,
                "#E53935",
            ),
            StatCard::new(
                "Active Restaurants",
                restaurants.to_string(),
                &changes.restaurants,
                "#FB8C00",
            ),
            StatCard::new(
                "Total Orders",
                format::thousands(orders),
                &changes.orders,
                "#4CAF50",
            ),
            StatCard::new("Avg Rating", format!("{:.1}", rating), &changes.rating, "#2196F3"),
        ];

        Self {
            revenue_by_city,
            cuisine_share,
            monthly_trends: dataset.monthly_trends.clone(),
            partner_performance,
            kpis,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.revenue_by_city.is_empty()
            && self.cuisine_share.is_empty()
            && self.partner_performance.is_empty()
    }
}

/// Average rating weighted by restaurant count; 0 when there are none
pub fn weighted_rating(partners: &[PartnerPerformance]) -> f64 {
    let count: u32 = partners.iter().map(|p| p.count).sum();
    if count == 0 {
        return 0.0;
    }
    let total: f64 = partners.iter().map(|p| p.avg_rating * f64::from(p.count)).sum();
    total / f64::from(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{DataProvider, SeedProvider};

    #[test]
    fn test_unfiltered_view() {
        let dataset = SeedProvider.analytics();
        let view = AnalyticsView::derive(&dataset, &AnalyticsFilters::new());

        assert_eq!(view.revenue_by_city.len(), 5);
        assert_eq!(view.cuisine_share.len(), 6);
        assert_eq!(view.monthly_trends.len(), 6);
        assert_eq!(view.kpis[0].value, "$422K");
        assert_eq!(view.kpis[1].value, "63");
        assert_eq!(view.kpis[2].value, "3,664");
        assert_eq!(view.kpis[3].value, "4.5");
        assert_eq!(view.kpis[0].direction, ChangeDirection::Up);
    }

    #[test]
    fn test_filters_narrow_their_series() {
        let dataset = SeedProvider.analytics();
        let mut filters = AnalyticsFilters::new();
        filters.set("city", "Austin").unwrap();
        filters.set("partner", "Premium Partners").unwrap();

        let view = AnalyticsView::derive(&dataset, &filters);
        assert_eq!(view.revenue_by_city.len(), 1);
        assert_eq!(view.revenue_by_city[0].orders, 567);
        assert_eq!(view.cuisine_share.len(), 6);
        assert_eq!(view.monthly_trends.len(), 6);
        assert_eq!(view.kpis[0].value, "$280K");
        assert_eq!(view.kpis[1].value, "35");
        assert_eq!(view.kpis[3].value, "4.7");
    }

    #[test]
    fn test_unknown_filter_key() {
        let mut filters = AnalyticsFilters::new();
        assert!(matches!(
            filters.set("region", "EU"),
            Err(DashboardError::UnknownFilter(_))
        ));
    }

    #[test]
    fn test_options_and_labels() {
        let options = AnalyticsOptions::from_dataset(&SeedProvider.analytics());
        assert_eq!(options.cities.len(), 6);
        assert_eq!(options.partners, vec!["all", "Premium Partners", "Standard Partners"]);
        assert_eq!(option_label("city", "all"), "All Cities");
        assert_eq!(option_label("partner", "Premium Partners"), "Premium Partners");
    }

    #[test]
    fn test_weighted_rating_empty() {
        assert_eq!(weighted_rating(&[]), 0.0);
    }
}
