//! Inventory-retrieval job handles.

use serde::Serialize;

/// Handle of a job initiated on the remote service.
///
/// A descriptor always carries a job id; responses without one are rejected
/// before a descriptor is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDescriptor {
    /// Opaque job identifier.
    pub job_id: String,

    /// Relative URI path of the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
