//! Chip Component
//!
//! Small colored labels for statuses, severities and partner tiers.

use leptos::*;

use dinedash::{AnomalyStatus, RestaurantStatus, Severity};

pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "bg-red-600 text-white",
        Severity::High => "bg-orange-500 text-white",
        Severity::Medium => "bg-yellow-400 text-gray-900",
        Severity::Low => "bg-blue-500 text-white",
    }
}

pub fn anomaly_status_class(status: AnomalyStatus) -> &'static str {
    match status {
        AnomalyStatus::Active => "bg-red-100 text-red-700",
        AnomalyStatus::Investigating => "bg-yellow-100 text-yellow-800",
        AnomalyStatus::Resolved => "bg-green-100 text-green-700",
    }
}

pub fn restaurant_status_class(status: RestaurantStatus) -> &'static str {
    match status {
        RestaurantStatus::Active => "bg-green-100 text-green-700",
        RestaurantStatus::Inactive => "bg-gray-200 text-gray-700",
        RestaurantStatus::Pending => "bg-yellow-100 text-yellow-800",
    }
}

pub fn partner_class(partner: &str) -> &'static str {
    if partner == "Premium Partner" {
        "bg-[var(--primary)] text-white"
    } else {
        "border border-gray-300 text-[var(--muted-foreground)]"
    }
}

#[component]
pub fn Chip(
    #[prop(into)]
    label: String,
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("inline-block px-2 py-0.5 rounded-full text-xs font-semibold {}", class)>
            {label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors_distinct() {
        let classes: Vec<_> = Severity::all().iter().map(|s| severity_class(*s)).collect();
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_partner_class() {
        assert!(partner_class("Premium Partner").contains("--primary"));
        assert!(partner_class("Standard Partner").contains("border"));
    }
}
