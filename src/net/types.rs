//! Wire DTOs mirrored from backend records.
//!
//! DESIGN
//! ======
//! Every payload is a closed struct. The backend is document-store backed, so
//! ids arrive as `_id`, `id`, or both on the same record; `id` wins when both
//! are present and only `id` is written back. Chat lines likewise carry
//! `timestamp`, `createdAt`, or both. JSON keys are camelCase.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `id` / `_id` record key.
mod record_id {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    #[derive(Deserialize)]
    struct Keys {
        #[serde(default)]
        id: Option<String>,
        #[serde(default, rename = "_id")]
        underscore_id: Option<String>,
    }

    #[derive(Serialize)]
    struct Key<'a> {
        id: &'a str,
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let keys = Keys::deserialize(deserializer)?;
        keys.id
            .or(keys.underscore_id)
            .ok_or_else(|| de::Error::missing_field("id"))
    }

    pub fn serialize<S: Serializer>(id: &str, serializer: S) -> Result<S::Ok, S::Error> {
        Key { id }.serialize(serializer)
    }
}

/// `timestamp` / `createdAt` send time of a chat line.
mod sent_at {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    #[derive(Deserialize)]
    struct Keys {
        #[serde(default)]
        timestamp: Option<String>,
        #[serde(default, rename = "createdAt")]
        created_at: Option<String>,
    }

    #[derive(Serialize)]
    struct Key<'a> {
        timestamp: &'a str,
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let keys = Keys::deserialize(deserializer)?;
        keys.timestamp
            .or(keys.created_at)
            .ok_or_else(|| de::Error::missing_field("timestamp"))
    }

    pub fn serialize<S: Serializer>(timestamp: &str, serializer: S) -> Result<S::Ok, S::Error> {
        Key { timestamp }.serialize(serializer)
    }
}

/// Account role; decides routes, dashboards and permitted API calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Technician,
    Admin,
}

/// Error returned when a stored or received role string is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Self; 3] = [Self::User, Self::Technician, Self::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Technician => "technician",
            Self::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::User => "Customer",
            Self::Technician => "Technician",
            Self::Admin => "Admin",
        }
    }

    /// Landing route for this role after login or a denied navigation.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::User => "/user/dashboard",
            Self::Technician => "/technician/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "technician" => Ok(Self::Technician),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile record for any role. Technician-only fields are empty for others.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub is_approved: Option<bool>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Lifecycle status of a service request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Pending,
    Broadcasted,
    Accepted,
    OnTheWay,
    AwaitingApproval,
    Approved,
    InProgress,
    Completed,
    Cancelled,
}

impl ServiceStatus {
    pub const ALL: [Self; 9] = [
        Self::Pending,
        Self::Broadcasted,
        Self::Accepted,
        Self::OnTheWay,
        Self::AwaitingApproval,
        Self::Approved,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Broadcasted => "broadcasted",
            Self::Accepted => "accepted",
            Self::OnTheWay => "on_the_way",
            Self::AwaitingApproval => "awaiting_approval",
            Self::Approved => "approved",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Broadcasted => "Finding technician",
            Self::Accepted => "Accepted",
            Self::OnTheWay => "On the way",
            Self::AwaitingApproval => "Awaiting approval",
            Self::Approved => "Approved",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// The customer may cancel until the technician is en route.
    pub fn user_can_cancel(self) -> bool {
        matches!(self, Self::Pending | Self::Broadcasted | Self::Accepted)
    }

    /// A technician is attached and the request is not cancelled.
    pub fn has_technician(self) -> bool {
        !matches!(self, Self::Pending | Self::Broadcasted | Self::Cancelled)
    }

    /// Chat is open while a technician is attached and work is unfinished.
    pub fn chat_open(self) -> bool {
        self.has_technician() && !self.is_terminal()
    }

    /// Next status a technician moves the job to through the status endpoint.
    ///
    /// `OnTheWay` advances by submitting an estimate and `InProgress` by the
    /// completion report, so neither has a plain status successor.
    pub fn technician_next(self) -> Option<Self> {
        match self {
            Self::Accepted => Some(Self::OnTheWay),
            Self::Approved => Some(Self::InProgress),
            _ => None,
        }
    }
}

/// Compact reference to the other party on a request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartySummary {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Service request as rendered by dashboards and detail pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub appliance_type: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub description: String,
    pub address: String,
    #[serde(default)]
    pub preferred_date: Option<String>,
    pub status: ServiceStatus,
    #[serde(default)]
    pub user: Option<PartySummary>,
    #[serde(default)]
    pub technician: Option<PartySummary>,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    #[serde(default)]
    pub estimate_note: Option<String>,
    #[serde(default)]
    pub final_cost: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Appliance catalogue entry used by the request form picker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub base_price: Option<f64>,
}

/// One chat line in a service-request room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub sender_id: String,
    pub sender_role: Role,
    pub content: String,
    #[serde(flatten, with = "sent_at")]
    pub timestamp: String,
}

/// Customer rating of a completed job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub user: Option<PartySummary>,
    #[serde(default)]
    pub technician: Option<PartySummary>,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// In-app notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Purchasable maintenance plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub duration_days: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub discount_percent: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Expired,
}

/// The caller's plan membership.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub plan: SubscriptionPlan,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Platform counters for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub total_technicians: u64,
    #[serde(default)]
    pub pending_technicians: u64,
    pub total_requests: u64,
    #[serde(default)]
    pub completed_requests: u64,
    #[serde(default)]
    pub total_revenue: f64,
}

/// Job counters for the technician dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianStats {
    pub total_jobs: u64,
    pub completed_jobs: u64,
    #[serde(default)]
    pub active_jobs: u64,
    #[serde(default)]
    pub earnings: f64,
    #[serde(default)]
    pub rating: Option<f64>,
}
