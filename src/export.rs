//! Data export
//!
//! Writes the current collections as CSV or JSON, for the settings page
//! download and the CLI `export` command.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{DashboardError, DashboardResult};
use crate::model::{Anomaly, Restaurant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(DashboardError::InvalidValue {
                field: "format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

const RESTAURANT_COLUMNS: &[&str] = &[
    "id", "name", "city", "cuisine", "partner", "status", "revenue", "rating", "orders",
    "manager", "phone", "email", "address",
];

const ANOMALY_COLUMNS: &[&str] = &[
    "id",
    "kind",
    "severity",
    "status",
    "title",
    "restaurant",
    "city",
    "impact",
    "confidence",
    "timestamp",
];

/// Restaurants as CSV (flat columns, menus omitted) or JSON (full records)
pub fn export_restaurants(restaurants: &[Restaurant], format: ExportFormat) -> DashboardResult<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(restaurants)?),
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(RESTAURANT_COLUMNS)?;
            for r in restaurants {
                writer.write_record([
                    r.id.to_string(),
                    r.name.clone(),
                    r.city.clone(),
                    r.cuisine.clone(),
                    r.partner.clone(),
                    r.status.to_string(),
                    r.revenue.to_string(),
                    r.rating.to_string(),
                    r.orders.to_string(),
                    r.manager.clone().unwrap_or_default(),
                    r.phone.clone().unwrap_or_default(),
                    r.email.clone().unwrap_or_default(),
                    r.address.clone().unwrap_or_default(),
                ])?;
            }
            finish(writer)
        }
    }
}

/// Anomalies as CSV (headline columns) or JSON (with detail records)
pub fn export_anomalies(anomalies: &[Anomaly], format: ExportFormat) -> DashboardResult<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(anomalies)?),
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(ANOMALY_COLUMNS)?;
            for a in anomalies {
                writer.write_record([
                    a.id.clone(),
                    a.kind.to_string(),
                    a.severity.to_string(),
                    a.status.to_string(),
                    a.title.clone(),
                    a.restaurant.clone(),
                    a.city.clone(),
                    a.impact.clone(),
                    a.confidence.to_string(),
                    a.timestamp.clone(),
                ])?;
            }
            finish(writer)
        }
    }
}

fn finish(writer: csv::Writer<Vec<u8>>) -> DashboardResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| DashboardError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DashboardError::Serialization(e.to_string()))
}

/// Download name, e.g. `restaurants-2026-10-18.csv`
pub fn file_name(stem: &str, format: ExportFormat, date: NaiveDate) -> String {
    format!("{}-{}.{}", stem, date.format("%Y-%m-%d"), format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{DataProvider, SeedProvider};

    #[test]
    fn test_restaurants_csv() {
        let csv = export_restaurants(&SeedProvider.restaurants(), ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,name,city,cuisine,partner,status,revenue,rating,orders,manager,phone,email,address"
        );
        let mario = lines.next().unwrap();
        assert!(mario.starts_with("1,Mario's Italian Bistro,New York,Italian,Premium Partner,active,125000,4.8,1250,"));
        // Address contains commas and is quoted
        assert!(mario.ends_with("\"123 Little Italy St, New York, NY 10013\""));
        assert_eq!(csv.lines().count(), 6);
    }

    #[test]
    fn test_restaurants_csv_reads_back() {
        let csv = export_restaurants(&SeedProvider.restaurants(), ExportFormat::Csv).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let names: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[1].to_string())
            .collect();
        assert_eq!(names.len(), 5);
        assert_eq!(names[3], "Le Petit Café");
    }

    #[test]
    fn test_restaurants_json_keeps_menus() {
        let json = export_restaurants(&SeedProvider.restaurants(), ExportFormat::Json).unwrap();
        let restored: Vec<Restaurant> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, SeedProvider.restaurants());
    }

    #[test]
    fn test_anomalies_csv() {
        let csv = export_anomalies(&SeedProvider.anomalies(), ExportFormat::Csv).unwrap();
        let second = csv.lines().nth(2).unwrap();
        assert!(second.starts_with("a2,security,high,investigating,"));
    }

    #[test]
    fn test_format_and_file_name() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());

        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(
            file_name("restaurants", ExportFormat::Csv, date),
            "restaurants-2026-10-18.csv"
        );
    }
}
