//! Dashboard state
//!
//! One `Dashboard` holds both entity collections and all of the view state
//! around them. Every user interaction maps to one method here; derived
//! views (the visible table page, the filtered anomaly feed, analytics and
//! overview) are recomputed on demand and never stored.

use crate::analytics::{AnalyticsFilters, AnalyticsOptions, AnalyticsView};
use crate::config::Config;
use crate::error::{DashboardError, DashboardResult};
use crate::model::{ActivityEntry, AnalyticsDataset, Anomaly, Restaurant, SystemHealth};
use crate::overview::Overview;
use crate::provider::DataProvider;
use crate::store::{find_field, Editable, EntityStore};
use crate::view::{
    DialogState, FieldFilter, FormController, Page, Pagination, SaveOutcome, Section,
    SectionRouter, Ticket,
};
use crate::workflow::{AnomalyAction, AnomalyFeed, AnomalyFilter, TransitionOutcome};

/// Unresolved anomalies listed in the notification popover
pub const NOTIFICATION_PREVIEW: usize = 3;

#[derive(Debug, Clone)]
pub struct Dashboard {
    router: SectionRouter,

    restaurants: EntityStore<Restaurant>,
    restaurant_filter: FieldFilter,
    pagination: Pagination,
    restaurant_form: FormController<Restaurant>,
    restaurant_details: DialogState<u32>,

    anomalies: AnomalyFeed,
    anomaly_filter: AnomalyFilter,
    anomaly_details: DialogState<String>,

    analytics: AnalyticsDataset,
    analytics_filters: AnalyticsFilters,
    activity: Vec<ActivityEntry>,
    system_health: SystemHealth,
}

impl Dashboard {
    /// Seed a dashboard from a provider with default options
    pub fn new(provider: &dyn DataProvider) -> Self {
        Self {
            router: SectionRouter::new(),
            restaurants: EntityStore::new(provider.restaurants()),
            restaurant_filter: FieldFilter::new(),
            pagination: Pagination::default(),
            restaurant_form: FormController::new(),
            restaurant_details: DialogState::default(),
            anomalies: AnomalyFeed::new(provider.anomalies()),
            anomaly_filter: AnomalyFilter::All,
            anomaly_details: DialogState::default(),
            analytics: provider.analytics(),
            analytics_filters: AnalyticsFilters::new(),
            activity: provider.activity(),
            system_health: provider.system_health(),
        }
    }

    /// Seed a dashboard and apply page size and form options from config
    pub fn with_config(provider: &dyn DataProvider, config: &Config) -> Self {
        let mut dashboard = Self::new(provider);
        dashboard.pagination = Pagination::new(config.data.page_size);
        dashboard
            .restaurant_form
            .set_enforce_required(config.forms.enforce_required);
        dashboard
    }

    // Navigation

    pub fn section(&self) -> Section {
        self.router.active()
    }

    pub fn router(&self) -> &SectionRouter {
        &self.router
    }

    /// Begin a section change; finish it with [`Dashboard::commit_section`]
    pub fn select_section(&mut self, section: Section) -> Ticket {
        self.router.select(section)
    }

    pub fn commit_section(&mut self, ticket: Ticket) -> bool {
        self.router.commit(ticket)
    }

    /// Change section immediately
    pub fn navigate(&mut self, section: Section) {
        self.router.select_now(section);
    }

    // Restaurants

    pub fn restaurants(&self) -> &EntityStore<Restaurant> {
        &self.restaurants
    }

    pub fn restaurant(&self, id: u32) -> Option<&Restaurant> {
        self.restaurants.get(&id)
    }

    pub fn restaurant_filter(&self) -> &FieldFilter {
        &self.restaurant_filter
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    fn filtered_len(&self) -> usize {
        self.restaurant_filter.apply(self.restaurants.list()).len()
    }

    /// Current page of the filtered restaurant table
    pub fn restaurant_page(&self) -> Page<&Restaurant> {
        let matching = self.restaurant_filter.apply(self.restaurants.list());
        self.pagination.paginate(&matching)
    }

    /// Constrain a schema field of the restaurant table; returns to page 0
    pub fn set_restaurant_filter(&mut self, key: &str, selection: &str) -> DashboardResult<()> {
        let field = find_field(Restaurant::schema(), key)
            .ok_or_else(|| DashboardError::UnknownFilter(key.to_string()))?;
        self.restaurant_filter.set(field.key, selection);
        self.pagination.set_page(0, self.filtered_len());
        Ok(())
    }

    pub fn clear_restaurant_filter(&mut self) {
        self.restaurant_filter.clear();
        self.pagination.set_page(0, self.filtered_len());
    }

    pub fn set_page(&mut self, page: usize) {
        let total = self.filtered_len();
        self.pagination.set_page(page, total);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    pub fn restaurant_form(&self) -> &FormController<Restaurant> {
        &self.restaurant_form
    }

    pub fn open_restaurant_create(&mut self) {
        self.restaurant_form.open_for_create();
    }

    /// Open the edit dialog; false when the id is absent
    pub fn open_restaurant_edit(&mut self, id: u32) -> bool {
        match self.restaurants.get(&id) {
            Some(restaurant) => {
                self.restaurant_form.open_for_edit(restaurant);
                true
            }
            None => false,
        }
    }

    pub fn update_restaurant_field(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        self.restaurant_form.update_field(key, value)
    }

    pub fn save_restaurant(&mut self) -> DashboardResult<SaveOutcome> {
        let outcome = self.restaurant_form.save(&mut self.restaurants)?;
        let total = self.filtered_len();
        self.pagination.clamp(total);
        Ok(outcome)
    }

    pub fn cancel_restaurant_form(&mut self) {
        self.restaurant_form.cancel();
    }

    /// Remove a restaurant and keep the table cursor in range
    pub fn delete_restaurant(&mut self, id: u32) -> Option<Restaurant> {
        let removed = self.restaurants.remove(&id)?;
        self.restaurant_details.close_if(&id);
        let total = self.filtered_len();
        self.pagination.clamp(total);
        Some(removed)
    }

    pub fn restaurant_details(&self) -> Option<&Restaurant> {
        self.restaurant_details
            .selected()
            .and_then(|id| self.restaurants.get(id))
    }

    pub fn show_restaurant(&mut self, id: u32) -> bool {
        if !self.restaurants.contains(&id) {
            return false;
        }
        self.restaurant_details.open(id);
        true
    }

    pub fn close_restaurant_details(&mut self) {
        self.restaurant_details.close();
    }

    // Anomalies

    pub fn anomalies(&self) -> &AnomalyFeed {
        &self.anomalies
    }

    pub fn anomaly_filter(&self) -> AnomalyFilter {
        self.anomaly_filter
    }

    pub fn set_anomaly_filter(&mut self, key: &str) -> DashboardResult<()> {
        self.anomaly_filter = key.parse()?;
        Ok(())
    }

    pub fn visible_anomalies(&self) -> Vec<&Anomaly> {
        self.anomalies.filtered(self.anomaly_filter)
    }

    pub fn apply_anomaly_action(&mut self, id: &str, action: AnomalyAction) -> TransitionOutcome {
        self.anomalies.apply(id, action)
    }

    pub fn dismiss_anomaly(&mut self, id: &str) -> Option<Anomaly> {
        let removed = self.anomalies.dismiss(id)?;
        self.anomaly_details.close_if(&removed.id);
        Some(removed)
    }

    pub fn anomaly_details(&self) -> Option<&Anomaly> {
        self.anomaly_details
            .selected()
            .and_then(|id| self.anomalies.get(id))
    }

    pub fn show_anomaly(&mut self, id: &str) -> bool {
        if self.anomalies.get(id).is_none() {
            return false;
        }
        self.anomaly_details.open(id.to_string());
        true
    }

    pub fn close_anomaly_details(&mut self) {
        self.anomaly_details.close();
    }

    /// Badge count and the first few unresolved anomalies
    pub fn notifications(&self) -> (usize, Vec<&Anomaly>) {
        let unresolved = self.anomalies.unresolved();
        let count = unresolved.len();
        (count, unresolved.into_iter().take(NOTIFICATION_PREVIEW).collect())
    }

    // Analytics and overview

    pub fn analytics_filters(&self) -> &AnalyticsFilters {
        &self.analytics_filters
    }

    pub fn set_analytics_filter(&mut self, key: &str, selection: &str) -> DashboardResult<()> {
        self.analytics_filters.set(key, selection)
    }

    pub fn analytics_options(&self) -> AnalyticsOptions {
        AnalyticsOptions::from_dataset(&self.analytics)
    }

    pub fn analytics_view(&self) -> AnalyticsView {
        AnalyticsView::derive(&self.analytics, &self.analytics_filters)
    }

    pub fn overview(&self) -> Overview {
        Overview::derive(
            self.restaurants.list(),
            &self.anomalies,
            &self.analytics.changes,
            &self.system_health,
            &self.activity,
        )
    }
}
