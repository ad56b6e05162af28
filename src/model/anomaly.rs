//! Anomaly alerts
//!
//! Alerts raised against a restaurant, with a severity, a workflow status and
//! a detail record used by the details dialog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;
use crate::store::Entity;
use crate::view::filter::Filterable;

/// What kind of signal raised the anomaly
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    Revenue,
    Security,
    Orders,
    Performance,
}

impl AnomalyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::Revenue => "revenue",
            AnomalyKind::Security => "security",
            AnomalyKind::Orders => "orders",
            AnomalyKind::Performance => "performance",
        }
    }
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity, ordered from most to least urgent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn all() -> &'static [Severity] {
        &[Severity::Critical, Severity::High, Severity::Medium, Severity::Low]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(DashboardError::InvalidValue {
                field: "severity".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Position in the investigation workflow
///
/// Only changed through [`AnomalyAction`](crate::workflow::AnomalyAction).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyStatus {
    Active,
    Investigating,
    Resolved,
}

impl AnomalyStatus {
    pub fn all() -> &'static [AnomalyStatus] {
        &[
            AnomalyStatus::Active,
            AnomalyStatus::Investigating,
            AnomalyStatus::Resolved,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyStatus::Active => "active",
            AnomalyStatus::Investigating => "investigating",
            AnomalyStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for AnomalyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnomalyStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(AnomalyStatus::Active),
            "investigating" => Ok(AnomalyStatus::Investigating),
            "resolved" => Ok(AnomalyStatus::Resolved),
            _ => Err(DashboardError::InvalidValue {
                field: "status".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Before/after reading of one affected metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricDelta {
    pub metric: String,
    pub before: String,
    pub after: String,
    /// Signed change label, e.g. "-32%"
    pub change: String,
}

impl MetricDelta {
    pub fn new(metric: &str, before: &str, after: &str, change: &str) -> Self {
        Self {
            metric: metric.to_string(),
            before: before.to_string(),
            after: after.to_string(),
            change: change.to_string(),
        }
    }

    /// Direction of the change label
    pub fn direction(&self) -> ChangeDirection {
        ChangeDirection::of(&self.change)
    }
}

/// Sign of a change label such as "+12.5%" or "-0.2%"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    pub fn of(label: &str) -> Self {
        match label.trim_start().chars().next() {
            Some('+') => ChangeDirection::Up,
            Some('-') => ChangeDirection::Down,
            _ => ChangeDirection::Flat,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEvent {
    pub time: String,
    pub event: String,
}

impl TimelineEvent {
    pub fn new(time: &str, event: &str) -> Self {
        Self {
            time: time.to_string(),
            event: event.to_string(),
        }
    }
}

/// Investigation detail shown in the anomaly dialog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AnomalyDetail {
    pub affected_metrics: Vec<MetricDelta>,
    pub timeline: Vec<TimelineEvent>,
    pub recommendations: Vec<String>,
    pub technical_details: String,
    pub estimated_resolution: String,
}

/// A detected anomaly
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Anomaly {
    pub id: String,
    pub kind: AnomalyKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub restaurant: String,
    pub city: String,
    pub impact: String,
    /// Detector confidence, 0-100
    pub confidence: u8,
    pub status: AnomalyStatus,
    /// Relative detection time label, e.g. "2 min ago"
    pub timestamp: String,
    #[serde(default)]
    pub detail: AnomalyDetail,
}

impl Entity for Anomaly {
    type Id = String;
    const KIND: &'static str = "anomaly";

    fn id(&self) -> &String {
        &self.id
    }
}

impl Filterable for Anomaly {
    fn filter_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "kind" => self.kind.to_string(),
            "severity" => self.severity.to_string(),
            "status" => self.status.to_string(),
            "restaurant" => self.restaurant.clone(),
            "city" => self.city.clone(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_direction() {
        assert_eq!(ChangeDirection::of("+800%"), ChangeDirection::Up);
        assert_eq!(ChangeDirection::of("-32%"), ChangeDirection::Down);
        assert_eq!(ChangeDirection::of("0%"), ChangeDirection::Flat);
        assert_eq!(ChangeDirection::of(""), ChangeDirection::Flat);
    }

    #[test]
    fn test_severity_ordering() {
        let mut severities = vec![Severity::Low, Severity::Critical, Severity::Medium];
        severities.sort();
        assert_eq!(severities, vec![Severity::Critical, Severity::Medium, Severity::Low]);
    }

    #[test]
    fn test_status_round_trip_through_str() {
        for status in AnomalyStatus::all() {
            assert_eq!(status.as_str().parse::<AnomalyStatus>().unwrap(), *status);
        }
        assert!("closed".parse::<AnomalyStatus>().is_err());
    }
}
