//! The inquiry record and its classification enums.
//!
//! Status, priority, and type are closed enums: unknown wire values are
//! rejected at parse time, never defaulted silently. Every lookup table
//! is an exhaustive `match`, so adding a variant is a compile error until
//! each table is updated.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A submitted contact/request record.
///
/// Created externally by the public inquiry form; the admin side only
/// reads and deletes. `id` is opaque and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub inquiry_type: InquiryType,
    pub subject: String,
    pub message: String,
    pub status: InquiryStatus,
    pub priority: InquiryPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Presentation accent associated with a status or priority.
///
/// The admin UI maps each tone to a badge style; keeping the mapping here
/// (rather than string-keyed lookups in the view) makes it exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// Processing state of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryStatus {
    Pending,
    InProgress,
    Resolved,
    Closed,
}

impl InquiryStatus {
    pub const ALL_VARIANTS_STR: &'static str = "pending|in-progress|resolved|closed";

    pub const ALL_VARIANTS: &'static [InquiryStatus] = &[
        InquiryStatus::Pending,
        InquiryStatus::InProgress,
        InquiryStatus::Resolved,
        InquiryStatus::Closed,
    ];

    /// Wire-format string, as sent by the inquiry form and admin API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Human-readable label for the admin table.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    #[must_use]
    pub const fn tone(&self) -> Tone {
        match *self {
            Self::Pending => Tone::Warning,
            Self::InProgress => Tone::Info,
            Self::Resolved => Tone::Success,
            Self::Closed => Tone::Neutral,
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            other => Err(CoreError::InvalidStatus(other.to_owned())),
        }
    }
}

/// Urgency of an inquiry.
///
/// Ordering for sort purposes is by [`rank`](Self::rank), never
/// alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl InquiryPriority {
    pub const ALL_VARIANTS_STR: &'static str = "low|medium|high|urgent";

    pub const ALL_VARIANTS: &'static [InquiryPriority] = &[
        InquiryPriority::Low,
        InquiryPriority::Medium,
        InquiryPriority::High,
        InquiryPriority::Urgent,
    ];

    /// Sort rank: urgent > high > medium > low.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match *self {
            Self::Urgent => 3,
            Self::High => 2,
            Self::Medium => 1,
            Self::Low => 0,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    #[must_use]
    pub const fn tone(&self) -> Tone {
        match *self {
            Self::Low => Tone::Neutral,
            Self::Medium => Tone::Info,
            Self::High => Tone::Warning,
            Self::Urgent => Tone::Danger,
        }
    }
}

impl fmt::Display for InquiryPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryPriority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            other => Err(CoreError::InvalidPriority(other.to_owned())),
        }
    }
}

/// Category selected on the public inquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryType {
    General,
    Support,
    Sales,
    Partnership,
    Technical,
    ErpSolutions,
}

impl InquiryType {
    pub const ALL_VARIANTS_STR: &'static str =
        "general|support|sales|partnership|technical|erp-solutions";

    pub const ALL_VARIANTS: &'static [InquiryType] = &[
        InquiryType::General,
        InquiryType::Support,
        InquiryType::Sales,
        InquiryType::Partnership,
        InquiryType::Technical,
        InquiryType::ErpSolutions,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::General => "general",
            Self::Support => "support",
            Self::Sales => "sales",
            Self::Partnership => "partnership",
            Self::Technical => "technical",
            Self::ErpSolutions => "erp-solutions",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::General => "General",
            Self::Support => "Support",
            Self::Sales => "Sales",
            Self::Partnership => "Partnership",
            Self::Technical => "Technical",
            Self::ErpSolutions => "ERP Solutions",
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Self::General),
            "support" => Ok(Self::Support),
            "sales" => Ok(Self::Sales),
            "partnership" => Ok(Self::Partnership),
            "technical" => Ok(Self::Technical),
            "erp-solutions" => Ok(Self::ErpSolutions),
            other => Err(CoreError::InvalidInquiryType(other.to_owned())),
        }
    }
}
