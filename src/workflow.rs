//! Anomaly investigation workflow
//!
//! Status only moves through [`AnomalyAction`]s:
//!
//! ```text
//! active --investigate--> investigating --resolve--> resolved
//!   ^                        |      ^                   |
//!   +--------reopen----------+      +------reopen-------+
//! ```
//!
//! Any other request is rejected without touching the anomaly. Dismissal
//! removes an anomaly from the feed from any status.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;
use crate::model::{Anomaly, AnomalyStatus, Severity};
use crate::store::EntityStore;
use crate::view::filter::ALL;

/// A user action on an anomaly's status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyAction {
    Investigate,
    Resolve,
    Reopen,
}

impl AnomalyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyAction::Investigate => "investigate",
            AnomalyAction::Resolve => "resolve",
            AnomalyAction::Reopen => "reopen",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnomalyAction::Investigate => "Investigate",
            AnomalyAction::Resolve => "Resolve",
            AnomalyAction::Reopen => "Reopen",
        }
    }

    /// Target status, or `None` when the action is not allowed from `from`
    pub fn next_status(&self, from: AnomalyStatus) -> Option<AnomalyStatus> {
        use AnomalyStatus::*;
        match (self, from) {
            (AnomalyAction::Investigate, Active) => Some(Investigating),
            (AnomalyAction::Resolve, Investigating) => Some(Resolved),
            (AnomalyAction::Reopen, Investigating) => Some(Active),
            (AnomalyAction::Reopen, Resolved) => Some(Investigating),
            _ => None,
        }
    }

    /// Actions offered for an anomaly in `status`, in button order
    pub fn available(status: AnomalyStatus) -> Vec<AnomalyAction> {
        [
            AnomalyAction::Investigate,
            AnomalyAction::Resolve,
            AnomalyAction::Reopen,
        ]
        .into_iter()
        .filter(|action| action.next_status(status).is_some())
        .collect()
    }
}

impl fmt::Display for AnomalyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnomalyAction {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "investigate" => Ok(AnomalyAction::Investigate),
            "resolve" => Ok(AnomalyAction::Resolve),
            "reopen" => Ok(AnomalyAction::Reopen),
            _ => Err(DashboardError::InvalidValue {
                field: "action".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// What happened to a requested transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied {
        from: AnomalyStatus,
        to: AnomalyStatus,
    },
    /// Not allowed from the current status; nothing changed
    Rejected { status: AnomalyStatus },
    NotFound,
}

impl TransitionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied { .. })
    }
}

/// Feed filter: everything, one severity, or one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnomalyFilter {
    #[default]
    All,
    Severity(Severity),
    Status(AnomalyStatus),
}

/// Quick filter buttons above the feed: (key, label)
pub const FEED_FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("critical", "Critical"),
    ("high", "High"),
    ("active", "Active"),
];

impl AnomalyFilter {
    pub fn key(&self) -> &'static str {
        match self {
            AnomalyFilter::All => ALL,
            AnomalyFilter::Severity(severity) => severity.as_str(),
            AnomalyFilter::Status(status) => status.as_str(),
        }
    }

    pub fn matches(&self, anomaly: &Anomaly) -> bool {
        match self {
            AnomalyFilter::All => true,
            AnomalyFilter::Severity(severity) => anomaly.severity == *severity,
            AnomalyFilter::Status(status) => anomaly.status == *status,
        }
    }
}

impl FromStr for AnomalyFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.is_empty() || key.eq_ignore_ascii_case(ALL) {
            return Ok(AnomalyFilter::All);
        }
        if let Ok(severity) = key.parse::<Severity>() {
            return Ok(AnomalyFilter::Severity(severity));
        }
        key.parse::<AnomalyStatus>()
            .map(AnomalyFilter::Status)
            .map_err(|_| DashboardError::UnknownFilter(s.to_string()))
    }
}

/// The anomaly collection plus its workflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnomalyFeed {
    store: EntityStore<Anomaly>,
}

impl AnomalyFeed {
    pub fn new(anomalies: Vec<Anomaly>) -> Self {
        Self {
            store: EntityStore::new(anomalies),
        }
    }

    pub fn list(&self) -> &[Anomaly] {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> Option<&Anomaly> {
        self.store.list().iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Apply a workflow action to one anomaly
    pub fn apply(&mut self, id: &str, action: AnomalyAction) -> TransitionOutcome {
        let Some(from) = self.get(id).map(|a| a.status) else {
            return TransitionOutcome::NotFound;
        };

        let Some(to) = action.next_status(from) else {
            tracing::warn!(id, %action, status = %from, "rejected anomaly transition");
            return TransitionOutcome::Rejected { status: from };
        };

        self.store.modify(&id.to_string(), |anomaly| anomaly.status = to);
        tracing::debug!(id, %action, %from, %to, "anomaly transition");
        TransitionOutcome::Applied { from, to }
    }

    /// Remove an anomaly from the feed; absent ids are a no-op
    pub fn dismiss(&mut self, id: &str) -> Option<Anomaly> {
        self.store.remove(&id.to_string())
    }

    /// Anomalies matching `filter`, feed order preserved
    pub fn filtered(&self, filter: AnomalyFilter) -> Vec<&Anomaly> {
        self.list().iter().filter(|a| filter.matches(a)).collect()
    }

    /// Critical anomalies that nobody has picked up yet
    pub fn critical_active_count(&self) -> usize {
        self.list()
            .iter()
            .filter(|a| a.severity == Severity::Critical && a.status == AnomalyStatus::Active)
            .count()
    }

    pub fn active_count(&self) -> usize {
        self.list()
            .iter()
            .filter(|a| a.status == AnomalyStatus::Active)
            .count()
    }

    /// Anomalies not yet resolved, shown in the notification popover
    pub fn unresolved(&self) -> Vec<&Anomaly> {
        self.list()
            .iter()
            .filter(|a| a.status != AnomalyStatus::Resolved)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{DataProvider, SeedProvider};

    fn feed() -> AnomalyFeed {
        AnomalyFeed::new(SeedProvider.anomalies())
    }

    #[test]
    fn test_transition_table() {
        use AnomalyStatus::*;
        assert_eq!(AnomalyAction::Investigate.next_status(Active), Some(Investigating));
        assert_eq!(AnomalyAction::Resolve.next_status(Investigating), Some(Resolved));
        assert_eq!(AnomalyAction::Reopen.next_status(Investigating), Some(Active));
        assert_eq!(AnomalyAction::Reopen.next_status(Resolved), Some(Investigating));

        assert_eq!(AnomalyAction::Resolve.next_status(Active), None);
        assert_eq!(AnomalyAction::Reopen.next_status(Active), None);
        assert_eq!(AnomalyAction::Investigate.next_status(Investigating), None);
        assert_eq!(AnomalyAction::Investigate.next_status(Resolved), None);
        assert_eq!(AnomalyAction::Resolve.next_status(Resolved), None);
    }

    #[test]
    fn test_investigate_then_resolve() {
        let mut feed = feed();
        assert_eq!(feed.get("a1").unwrap().status, AnomalyStatus::Active);

        let outcome = feed.apply("a1", AnomalyAction::Investigate);
        assert_eq!(
            outcome,
            TransitionOutcome::Applied {
                from: AnomalyStatus::Active,
                to: AnomalyStatus::Investigating
            }
        );

        assert!(feed.apply("a1", AnomalyAction::Resolve).is_applied());
        assert_eq!(feed.get("a1").unwrap().status, AnomalyStatus::Resolved);
    }

    #[test]
    fn test_resolve_from_active_rejected() {
        let mut feed = feed();
        let before = feed.clone();

        let outcome = feed.apply("a1", AnomalyAction::Resolve);
        assert_eq!(
            outcome,
            TransitionOutcome::Rejected {
                status: AnomalyStatus::Active
            }
        );
        assert_eq!(feed, before);
    }

    #[test]
    fn test_reopen_paths() {
        let mut feed = feed();
        // a2 starts investigating
        assert!(feed.apply("a2", AnomalyAction::Reopen).is_applied());
        assert_eq!(feed.get("a2").unwrap().status, AnomalyStatus::Active);

        feed.apply("a2", AnomalyAction::Investigate);
        feed.apply("a2", AnomalyAction::Resolve);
        assert!(feed.apply("a2", AnomalyAction::Reopen).is_applied());
        assert_eq!(feed.get("a2").unwrap().status, AnomalyStatus::Investigating);
    }

    #[test]
    fn test_unknown_id() {
        let mut feed = feed();
        assert_eq!(feed.apply("zz", AnomalyAction::Investigate), TransitionOutcome::NotFound);
        assert!(feed.dismiss("zz").is_none());
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_dismiss_from_any_status() {
        let mut feed = feed();
        feed.apply("a2", AnomalyAction::Resolve);
        assert!(feed.dismiss("a2").is_some());
        assert!(feed.get("a2").is_none());
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn test_filter_keys() {
        let feed = feed();
        let ids = |filter: &str| -> Vec<String> {
            let filter: AnomalyFilter = filter.parse().unwrap();
            feed.filtered(filter).iter().map(|a| a.id.clone()).collect()
        };

        assert_eq!(ids("all"), vec!["a1", "a2"]);
        assert_eq!(ids("critical"), vec!["a1"]);
        assert_eq!(ids("high"), vec!["a2"]);
        assert_eq!(ids("active"), vec!["a1"]);
        assert_eq!(ids("investigating"), vec!["a2"]);
        assert!(ids("low").is_empty());

        assert!(matches!(
            "urgent".parse::<AnomalyFilter>(),
            Err(DashboardError::UnknownFilter(_))
        ));
    }

    #[test]
    fn test_counters() {
        let mut feed = feed();
        assert_eq!(feed.critical_active_count(), 1);
        assert_eq!(feed.active_count(), 1);
        assert_eq!(feed.unresolved().len(), 2);

        feed.apply("a1", AnomalyAction::Investigate);
        assert_eq!(feed.critical_active_count(), 0);
        assert_eq!(feed.active_count(), 0);

        feed.apply("a1", AnomalyAction::Resolve);
        assert_eq!(feed.unresolved().len(), 1);
    }

    #[test]
    fn test_available_actions() {
        assert_eq!(
            AnomalyAction::available(AnomalyStatus::Active),
            vec![AnomalyAction::Investigate]
        );
        assert_eq!(
            AnomalyAction::available(AnomalyStatus::Investigating),
            vec![AnomalyAction::Resolve, AnomalyAction::Reopen]
        );
        assert_eq!(
            AnomalyAction::available(AnomalyStatus::Resolved),
            vec![AnomalyAction::Reopen]
        );
    }
}
