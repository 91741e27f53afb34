//! Pricing calculator for cleaning requests.
//!
//! The published formula is `base(home_size) * (1 + (employee_count - 1) *
//! 0.5)`. Because every base rate is even, the multiplier collapses to
//! `half_base * (employee_count + 1)` and the whole computation stays in
//! exact integer arithmetic.

use super::{ParseHomeSizeError, RequestDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size class of the home to be cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeSize {
    /// 1-2 rooms.
    Small,
    /// 3-4 rooms.
    Medium,
    /// 5+ rooms.
    Large,
}

impl HomeSize {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Returns the base rate for a single-employee job, in currency units.
    #[must_use]
    pub const fn base_rate(self) -> u32 {
        match self {
            Self::Small => 500,
            Self::Medium => 800,
            Self::Large => 1200,
        }
    }

    /// Returns half the base rate. Every base rate is even, so this is
    /// exact.
    const fn half_base(self) -> u32 {
        match self {
            Self::Small => 250,
            Self::Medium => 400,
            Self::Large => 600,
        }
    }
}

impl fmt::Display for HomeSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for HomeSize {
    type Error = ParseHomeSizeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(ParseHomeSizeError(value.to_owned())),
        }
    }
}

/// Number of employees requested for a job, validated to `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeCount(u8);

impl EmployeeCount {
    /// Smallest supported crew size.
    pub const MIN: u8 = 1;
    /// Largest supported crew size.
    pub const MAX: u8 = 5;

    /// Creates a validated employee count.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::InvalidEmployeeCount`] when the value
    /// is outside `[1, 5]`.
    pub const fn new(value: u8) -> Result<Self, RequestDomainError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(RequestDomainError::InvalidEmployeeCount(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for EmployeeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price of a cleaning request in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    /// Creates a price from a whole currency amount.
    #[must_use]
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// Returns the amount in whole currency units.
    #[must_use]
    pub const fn amount(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Computes the price for a job of the given size and crew.
///
/// Pure and deterministic; the price is fixed at request creation and never
/// recomputed afterwards.
#[must_use]
pub const fn quote(home_size: HomeSize, employee_count: EmployeeCount) -> Price {
    let crew = employee_count.value() as u32;
    Price::new(home_size.half_base() * (crew + 1))
}
