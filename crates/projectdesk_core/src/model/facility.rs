//! Facility branding record.
//!
//! # Responsibility
//! - Describe a physical location's contact details and visual theme.
//! - Provide the compiled-in mock record used by the web front.
//!
//! # Invariants
//! - Wire form uses camelCase field names (`primaryColor`, `zipCode`).
//! - Theme colors are `#RRGGBB` tokens when validated.

use super::ModelValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

/// Visual theme settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub theme: String,
}

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Contact channels. `website` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityContact {
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub website: String,
}

/// Branding/configuration record for one facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub name: String,
    pub settings: FacilitySettings,
    pub address: FacilityAddress,
    pub contact: FacilityContact,
}

impl Facility {
    /// Checks the theme colors.
    ///
    /// Address and contact fields are display-only and accepted as given.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        for (field, value) in [
            ("primaryColor", &self.settings.primary_color),
            ("secondaryColor", &self.settings.secondary_color),
        ] {
            if !HEX_COLOR_RE.is_match(value) {
                return Err(ModelValidationError::InvalidColor {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Returns the compiled-in facility record served to the web front.
pub fn mock_facility() -> Facility {
    Facility {
        name: "Riverside Community Center".to_string(),
        settings: FacilitySettings {
            primary_color: "#1E40AF".to_string(),
            secondary_color: "#F59E0B".to_string(),
            theme: "light".to_string(),
        },
        address: FacilityAddress {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62704".to_string(),
        },
        contact: FacilityContact {
            phone: "555-1234".to_string(),
            email: "info@riverside.example".to_string(),
            website: "https://riverside.example".to_string(),
        },
    }
}
