//! Pure facility formatting helpers.

use crate::model::facility::Facility;
use serde::Serialize;

/// Link used when a facility has no website.
pub const MISSING_WEBSITE_LINK: &str = "#";

/// Theme tokens extracted from facility settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityTheme {
    pub primary_color: String,
    pub secondary_color: String,
    pub theme: String,
}

/// Address display variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAddress {
    /// `street, city, state zip`
    pub full: String,
    /// `city, state`
    pub short: String,
    /// Same as `short`; kept separate for layouts that pair it with `zip_code`.
    pub city_state: String,
    pub zip_code: String,
}

/// Contact display strings and links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedContact {
    pub phone: String,
    pub email: String,
    pub email_link: String,
    pub website: String,
    /// The website itself, or `#` when the facility has none.
    pub website_link: String,
}

pub fn facility_theme(facility: &Facility) -> FacilityTheme {
    FacilityTheme {
        primary_color: facility.settings.primary_color.clone(),
        secondary_color: facility.settings.secondary_color.clone(),
        theme: facility.settings.theme.clone(),
    }
}

pub fn format_facility_address(facility: &Facility) -> FormattedAddress {
    let address = &facility.address;
    let city_state = format!("{}, {}", address.city, address.state);
    FormattedAddress {
        full: format!(
            "{}, {}, {} {}",
            address.street, address.city, address.state, address.zip_code
        ),
        short: city_state.clone(),
        city_state,
        zip_code: address.zip_code.clone(),
    }
}

pub fn format_facility_contact(facility: &Facility) -> FormattedContact {
    let contact = &facility.contact;
    let website_link = if contact.website.trim().is_empty() {
        MISSING_WEBSITE_LINK.to_string()
    } else {
        contact.website.clone()
    };
    FormattedContact {
        phone: contact.phone.clone(),
        email: contact.email.clone(),
        email_link: format!("mailto:{}", contact.email),
        website: contact.website.clone(),
        website_link,
    }
}
