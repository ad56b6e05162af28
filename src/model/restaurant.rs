//! Restaurant records
//!
//! A restaurant partner on the platform, its contact details, headline
//! metrics and (optionally) its menu.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DashboardError, DashboardResult};
use crate::store::{Editable, Entity, FieldKind, FieldSpec};
use crate::view::filter::Filterable;

/// Partner tiers offered in the edit form
pub const PARTNER_TIERS: &[&str] = &["Standard Partner", "Premium Partner"];

/// Lifecycle status of a restaurant partnership
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RestaurantStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl RestaurantStatus {
    pub fn all() -> &'static [RestaurantStatus] {
        &[
            RestaurantStatus::Active,
            RestaurantStatus::Inactive,
            RestaurantStatus::Pending,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RestaurantStatus::Active => "active",
            RestaurantStatus::Inactive => "inactive",
            RestaurantStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for RestaurantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestaurantStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(RestaurantStatus::Active),
            "inactive" => Ok(RestaurantStatus::Inactive),
            "pending" => Ok(RestaurantStatus::Pending),
            _ => Err(DashboardError::InvalidValue {
                field: "status".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// A dish on a restaurant's menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub name: String,
    /// Price in whole dollars
    pub price: f64,
    pub description: String,
}

/// A named group of menu items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuCategory {
    pub category: String,
    pub items: Vec<MenuItem>,
}

/// A restaurant partner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub cuisine: String,
    /// Partner tier, see [`PARTNER_TIERS`]
    pub partner: String,
    pub status: RestaurantStatus,
    /// Lifetime revenue in dollars
    pub revenue: u64,
    pub rating: f64,
    pub orders: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<MenuCategory>>,
}

const RESTAURANT_SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("name", "Restaurant Name").required(),
    FieldSpec::text("city", "City").required(),
    FieldSpec::text("cuisine", "Cuisine Type").required(),
    FieldSpec::text("partner", "Partner Type")
        .kind(FieldKind::Select(PARTNER_TIERS))
        .required(),
    FieldSpec::text("status", "Status")
        .kind(FieldKind::Select(&["active", "inactive", "pending"]))
        .default_value("active"),
    FieldSpec::text("manager", "Manager Name"),
    FieldSpec::text("phone", "Phone Number").kind(FieldKind::Phone),
    FieldSpec::text("email", "Email Address").kind(FieldKind::Email),
    FieldSpec::text("address", "Address").kind(FieldKind::Multiline),
];

impl Restaurant {
    /// Builder used by seed data and tests
    pub fn new(
        id: u32,
        name: impl Into<String>,
        city: impl Into<String>,
        cuisine: impl Into<String>,
        partner: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            city: city.into(),
            cuisine: cuisine.into(),
            partner: partner.into(),
            status: RestaurantStatus::Active,
            revenue: 0,
            rating: 0.0,
            orders: 0,
            phone: None,
            email: None,
            address: None,
            manager: None,
            menu: None,
        }
    }

    /// Builder: set status
    pub fn status(mut self, status: RestaurantStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: set headline metrics
    pub fn metrics(mut self, revenue: u64, rating: f64, orders: u32) -> Self {
        self.revenue = revenue;
        self.rating = rating;
        self.orders = orders;
        self
    }

    /// Builder: set contact details
    pub fn contact(
        mut self,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        manager: impl Into<String>,
    ) -> Self {
        self.phone = Some(phone.into());
        self.email = Some(email.into());
        self.address = Some(address.into());
        self.manager = Some(manager.into());
        self
    }

    /// Builder: set the menu
    pub fn menu(mut self, menu: Vec<MenuCategory>) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn is_premium(&self) -> bool {
        self.partner == "Premium Partner"
    }

    /// Address line for the details view, falling back to city and cuisine
    pub fn location_line(&self) -> String {
        match &self.address {
            Some(address) if !address.is_empty() => address.clone(),
            _ => format!("{}, {} Cuisine", self.city, self.cuisine),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl Entity for Restaurant {
    type Id = u32;
    const KIND: &'static str = "restaurant";

    fn id(&self) -> &u32 {
        &self.id
    }
}

impl Editable for Restaurant {
    const LABEL: &'static str = "Restaurant";

    fn schema() -> &'static [FieldSpec] {
        RESTAURANT_SCHEMA
    }

    fn blank() -> Self {
        Restaurant::new(0, "", "", "", "")
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn read_field(&self, key: &str) -> Option<String> {
        let value = match key {
            "name" => self.name.clone(),
            "city" => self.city.clone(),
            "cuisine" => self.cuisine.clone(),
            "partner" => self.partner.clone(),
            "status" => self.status.to_string(),
            "manager" => self.manager.clone().unwrap_or_default(),
            "phone" => self.phone.clone().unwrap_or_default(),
            "email" => self.email.clone().unwrap_or_default(),
            "address" => self.address.clone().unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }

    fn write_field(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        match key {
            "name" => self.name = value.to_string(),
            "city" => self.city = value.to_string(),
            "cuisine" => self.cuisine = value.to_string(),
            "partner" => self.partner = value.to_string(),
            "status" => self.status = value.parse()?,
            "manager" => self.manager = optional(value),
            "phone" => self.phone = optional(value),
            "email" => self.email = optional(value),
            "address" => self.address = optional(value),
            _ => {
                return Err(DashboardError::UnknownField {
                    entity: Self::KIND,
                    field: key.to_string(),
                })
            }
        }
        Ok(())
    }
}

impl Filterable for Restaurant {
    fn filter_value(&self, field: &str) -> Option<String> {
        self.read_field(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("Active".parse::<RestaurantStatus>().unwrap(), RestaurantStatus::Active);
        assert_eq!(" pending ".parse::<RestaurantStatus>().unwrap(), RestaurantStatus::Pending);
        assert!("closed".parse::<RestaurantStatus>().is_err());
    }

    #[test]
    fn test_write_optional_fields() {
        let mut r = Restaurant::blank();
        r.write_field("phone", "+1 555 0100").unwrap();
        assert_eq!(r.phone.as_deref(), Some("+1 555 0100"));

        r.write_field("phone", "   ").unwrap();
        assert!(r.phone.is_none());
        assert_eq!(r.read_field("phone").unwrap(), "");
    }

    #[test]
    fn test_unknown_field() {
        let mut r = Restaurant::blank();
        assert!(matches!(
            r.write_field("revenue", "10"),
            Err(DashboardError::UnknownField { .. })
        ));
        assert!(r.read_field("revenue").is_none());
    }

    #[test]
    fn test_location_line() {
        let r = Restaurant::new(1, "Taco Fiesta", "Austin", "Mexican", "Premium Partner");
        assert_eq!(r.location_line(), "Austin, Mexican Cuisine");
        assert!(r.is_premium());

        let r = r.contact("", "", "1 Main St", "");
        assert_eq!(r.location_line(), "1 Main St");
    }

    #[test]
    fn test_schema_required_fields() {
        let required: Vec<_> = Restaurant::schema()
            .iter()
            .filter(|f| f.required)
            .map(|f| f.key)
            .collect();
        assert_eq!(required, vec!["name", "city", "cuisine", "partner"]);
    }

    #[test]
    fn test_serialization_skips_empty_optionals() {
        let r = Restaurant::new(7, "Spice Garden", "Chicago", "Indian", "Premium Partner");
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("phone"));

        let restored: Restaurant = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, r);
    }
}
