//! Section router
//!
//! Exactly one section is active at a time. Selecting a section starts a
//! transition that is committed on the next tick; the pending marker lets
//! the UI show a loading skeleton while the swap happens. A newer selection
//! supersedes a pending one, so a stale commit is ignored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Top-level dashboard sections
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Restaurants,
    Analytics,
    Anomalies,
    Settings,
}

impl Section {
    /// Sidebar order
    pub fn all() -> &'static [Section] {
        &[
            Section::Dashboard,
            Section::Restaurants,
            Section::Analytics,
            Section::Anomalies,
            Section::Settings,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Restaurants => "restaurants",
            Section::Analytics => "analytics",
            Section::Anomalies => "anomalies",
            Section::Settings => "settings",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Restaurants => "Restaurants",
            Section::Analytics => "Analytics",
            Section::Anomalies => "AI Anomaly Detection",
            Section::Settings => "Settings",
        }
    }

    /// Top bar title
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard Overview",
            Section::Restaurants => "Restaurant Management",
            Section::Analytics => "Global Analytics",
            Section::Anomalies => "AI Anomaly Detection",
            Section::Settings => "Settings",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Section::all()
            .iter()
            .copied()
            .find(|section| section.key() == key)
            .ok_or_else(|| DashboardError::UnknownSection(s.to_string()))
    }
}

/// Handle for a pending transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    ticket: Ticket,
    target: Section,
}

/// Owns the active section and the pending transition
#[derive(Debug, Clone, Default)]
pub struct SectionRouter {
    active: Section,
    pending: Option<Pending>,
    issued: u64,
}

impl SectionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Section a pending transition is heading to
    pub fn pending_target(&self) -> Option<Section> {
        self.pending.map(|p| p.target)
    }

    /// Start a transition; any earlier pending transition is superseded
    pub fn select(&mut self, section: Section) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        if let Some(previous) = self.pending.replace(Pending {
            ticket,
            target: section,
        }) {
            tracing::debug!(from = %previous.target, to = %section, "superseded pending transition");
        }
        ticket
    }

    /// Finish a transition; returns false for a superseded ticket
    pub fn commit(&mut self, ticket: Ticket) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                if self.active != pending.target {
                    tracing::debug!(from = %self.active, to = %pending.target, "section changed");
                    self.active = pending.target;
                }
                true
            }
            _ => false,
        }
    }

    /// Select and commit in one step
    pub fn select_now(&mut self, section: Section) {
        let ticket = self.select(section);
        self.commit(ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_section() {
        let router = SectionRouter::new();
        assert_eq!(router.active(), Section::Dashboard);
        assert!(!router.is_pending());
    }

    #[test]
    fn test_select_each_section() {
        let mut router = SectionRouter::new();
        for section in Section::all() {
            router.select_now(*section);
            assert_eq!(router.active(), *section);
            let others = Section::all().iter().filter(|s| router.is_active(**s)).count();
            assert_eq!(others, 1);
        }
    }

    #[test]
    fn test_select_twice_is_idempotent() {
        let mut router = SectionRouter::new();
        router.select_now(Section::Analytics);
        router.select_now(Section::Analytics);
        assert_eq!(router.active(), Section::Analytics);
        assert!(!router.is_pending());
    }

    #[test]
    fn test_pending_until_commit() {
        let mut router = SectionRouter::new();
        let ticket = router.select(Section::Restaurants);
        assert!(router.is_pending());
        assert_eq!(router.active(), Section::Dashboard);
        assert_eq!(router.pending_target(), Some(Section::Restaurants));

        assert!(router.commit(ticket));
        assert_eq!(router.active(), Section::Restaurants);
        assert!(!router.is_pending());
    }

    #[test]
    fn test_newer_selection_supersedes() {
        let mut router = SectionRouter::new();
        let first = router.select(Section::Restaurants);
        let second = router.select(Section::Anomalies);

        assert!(!router.commit(first));
        assert_eq!(router.active(), Section::Dashboard);
        assert!(router.is_pending());

        assert!(router.commit(second));
        assert_eq!(router.active(), Section::Anomalies);

        // Already committed
        assert!(!router.commit(second));
    }

    #[test]
    fn test_parse_section() {
        assert_eq!("Settings".parse::<Section>().unwrap(), Section::Settings);
        assert!(matches!(
            "reports".parse::<Section>(),
            Err(DashboardError::UnknownSection(_))
        ));
        assert_eq!(Section::Anomalies.title(), "AI Anomaly Detection");
        assert_eq!(Section::Restaurants.title(), "Restaurant Management");
    }
}
