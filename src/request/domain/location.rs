//! Validated place and time values for a cleaning request.

use super::RequestDomainError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Where the cleaning takes place. All four fields are required free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLocation {
    city: String,
    district: String,
    neighborhood: String,
    address_detail: String,
}

impl ServiceLocation {
    /// Creates a validated service location.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::EmptyLocationField`] naming the first
    /// field that is blank after trimming.
    pub fn new(
        city: impl Into<String>,
        district: impl Into<String>,
        neighborhood: impl Into<String>,
        address_detail: impl Into<String>,
    ) -> Result<Self, RequestDomainError> {
        Ok(Self {
            city: required_field(city, "city")?,
            district: required_field(district, "district")?,
            neighborhood: required_field(neighborhood, "neighborhood")?,
            address_detail: required_field(address_detail, "address_detail")?,
        })
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the district.
    #[must_use]
    pub fn district(&self) -> &str {
        &self.district
    }

    /// Returns the neighborhood.
    #[must_use]
    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    /// Returns the free-text address detail.
    #[must_use]
    pub fn address_detail(&self) -> &str {
        &self.address_detail
    }
}

fn required_field(
    value: impl Into<String>,
    field: &'static str,
) -> Result<String, RequestDomainError> {
    let raw = value.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RequestDomainError::EmptyLocationField { field });
    }
    Ok(trimmed.to_owned())
}

/// Requested scheduling slot, supplied by the customer at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSlot {
    service_date: NaiveDate,
    service_time: NaiveTime,
}

impl ServiceSlot {
    /// Creates a scheduling slot.
    #[must_use]
    pub const fn new(service_date: NaiveDate, service_time: NaiveTime) -> Self {
        Self {
            service_date,
            service_time,
        }
    }

    /// Returns the requested service date.
    #[must_use]
    pub const fn service_date(self) -> NaiveDate {
        self.service_date
    }

    /// Returns the requested time of day.
    #[must_use]
    pub const fn service_time(self) -> NaiveTime {
        self.service_time
    }
}
