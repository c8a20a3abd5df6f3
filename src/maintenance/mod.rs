//! Maintenance scheduling core
//!
//! Pure date arithmetic and status classification for installed equipment:
//! computing the next maintenance due date from the last service date and
//! the configured interval, classifying a due date into a severity tier
//! relative to a reference date, and reducing a client's equipment into one
//! worst-case status for dashboards and map markers.
//!
//! Nothing in this module performs I/O or reads the ambient clock; callers
//! resolve "today" once per request and pass it down explicitly.

pub mod schedule;
pub mod status;

pub use schedule::{classify_maintenance, compute_next_maintenance, MaintenanceStatus, WARNING_WINDOW_DAYS};
pub use status::aggregate_client_status;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity tier of a maintenance due date relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Due date more than 30 days away
    Ok,
    /// Due within the warning window (30 days, inclusive)
    Warning,
    /// Due date strictly before the reference date
    Expired,
    /// No schedule defined (missing last-service date or interval)
    ToDefine,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Ok => "ok",
            Tier::Warning => "warning",
            Tier::Expired => "expired",
            Tier::ToDefine => "to_define",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
