//! Facility context provider.
//!
//! Consumers take `&FacilityContext` as a parameter, so a lookup outside a
//! provider does not type-check. Hosts that resolve the context dynamically
//! go through [`try_use_facility`], which reports a missing provider as a
//! typed error.

use crate::model::facility::{mock_facility, Facility};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Facility value plus load status, as seen by consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityContext {
    pub facility: Option<Facility>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FacilityContext {
    fn ready(facility: Facility) -> Self {
        Self {
            facility: Some(facility),
            loading: false,
            error: None,
        }
    }

    fn loading(previous: Option<Facility>) -> Self {
        Self {
            facility: previous,
            loading: true,
            error: None,
        }
    }
}

/// Lookup failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacilityContextError {
    MissingProvider,
}

impl Display for FacilityContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingProvider => {
                write!(f, "facility context requested outside of a FacilityProvider")
            }
        }
    }
}

impl Error for FacilityContextError {}

/// Async-fetch collaborator for facility data.
pub trait FacilitySource {
    fn fetch_facility(&self) -> Result<Facility, String>;
}

/// Source that always yields the compiled-in mock record.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockFacilitySource;

impl FacilitySource for MockFacilitySource {
    fn fetch_facility(&self) -> Result<Facility, String> {
        Ok(mock_facility())
    }
}

/// Owner of the facility context handed to descendants.
#[derive(Debug, Clone)]
pub struct FacilityProvider {
    context: FacilityContext,
}

impl FacilityProvider {
    /// Provider backed by the mock record, already settled.
    pub fn mock() -> Self {
        Self::with_facility(mock_facility())
    }

    pub fn with_facility(facility: Facility) -> Self {
        Self {
            context: FacilityContext::ready(facility),
        }
    }

    /// Provider that has not fetched anything yet.
    pub fn pending() -> Self {
        Self {
            context: FacilityContext::loading(None),
        }
    }

    /// Marks the context as loading; keeps the previous facility visible.
    pub fn begin_load(&mut self) {
        self.context = FacilityContext::loading(self.context.facility.take());
    }

    /// Settles a load started by [`FacilityProvider::begin_load`].
    pub fn finish_load(&mut self, result: Result<Facility, String>) {
        match result {
            Ok(facility) => {
                info!("event=facility_load module=facility status=ok");
                self.context = FacilityContext::ready(facility);
            }
            Err(err) => {
                warn!("event=facility_load module=facility status=error error={err}");
                self.context.loading = false;
                self.context.error = Some(err);
            }
        }
    }

    /// Runs a full fetch against `source`.
    pub fn load(&mut self, source: &impl FacilitySource) -> &FacilityContext {
        self.begin_load();
        self.finish_load(source.fetch_facility());
        &self.context
    }

    pub fn context(&self) -> &FacilityContext {
        &self.context
    }

    /// Runs a descendant consumer with this provider's context.
    pub fn scope<T>(&self, consumer: impl FnOnce(&FacilityContext) -> T) -> T {
        consumer(&self.context)
    }
}

/// Statically checked lookup: a context parameter proves a provider exists.
pub fn use_facility(context: &FacilityContext) -> &FacilityContext {
    context
}

/// Dynamically checked lookup for hosts that may lack a provider.
pub fn try_use_facility(
    context: Option<&FacilityContext>,
) -> Result<&FacilityContext, FacilityContextError> {
    context.ok_or(FacilityContextError::MissingProvider)
}
