//! Audit values stamped onto a unit of work.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and provenance attached to every mutating operation.
///
/// `changed_by` names who asked for the change, `changed_by_system` names
/// the subsystem that carried it out. When the originator is not a person,
/// both fields reference a well-known identity from [`crate::actors`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditValues {
    /// Actor that requested the change
    pub changed_by: Uuid,

    /// System actor that executed the change
    pub changed_by_system: Uuid,

    /// Correlation id shared by every record written in one operation
    pub operation_id: String,

    /// Moment the change takes effect
    pub valid_from: DateTime<Utc>,
}

impl AuditValues {
    /// Audit values for a change requested by `changed_by` and executed by
    /// `changed_by_system`, with a fresh operation id.
    pub fn new(changed_by: Uuid, changed_by_system: Uuid) -> Self {
        Self {
            changed_by,
            changed_by_system,
            operation_id: Uuid::now_v7().to_string(),
            valid_from: Utc::now(),
        }
    }

    /// Audit values for a system acting on its own behalf, such as an import
    /// pipeline or a scheduled ingest job.
    pub fn for_system(actor: Uuid) -> Self {
        Self::new(actor, actor)
    }

    /// Replace the generated operation id with an externally supplied
    /// correlation id, typically a request trace id.
    pub fn with_operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = operation_id.into();
        self
    }
}

/// Source of the ambient audit identity for the current unit of work.
///
/// API layers implement this over their request context; batch jobs return a
/// fixed value built with [`AuditValues::for_system`].
pub trait AuditContextProvider {
    fn current(&self) -> AuditValues;
}
