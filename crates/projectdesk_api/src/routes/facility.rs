use crate::error::ApiResponse;
use axum::Json;
use projectdesk_core::{
    facility_theme, format_facility_address, format_facility_contact, use_facility, Facility,
    FacilityContext, FacilityProvider, FacilityTheme, FormattedAddress, FormattedContact,
};
use serde::Serialize;

/// Facility record plus its derived display strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityView {
    pub facility: Facility,
    pub theme: FacilityTheme,
    pub address: FormattedAddress,
    pub contact: FormattedContact,
}

impl FacilityView {
    fn from_context(context: &FacilityContext) -> Option<Self> {
        let facility = use_facility(context).facility.as_ref()?;
        Some(Self {
            theme: facility_theme(facility),
            address: format_facility_address(facility),
            contact: format_facility_contact(facility),
            facility: facility.clone(),
        })
    }
}

pub(super) async fn get_facility() -> Json<ApiResponse<FacilityView>> {
    let provider = FacilityProvider::mock();
    match provider.scope(FacilityView::from_context) {
        Some(view) => Json(ApiResponse::success(view)),
        None => Json(ApiResponse::error("facility is not loaded")),
    }
}
