//! Audit record models
//!
//! Shapes of the records the audit store persists for every mutating
//! operation. The store itself lives with the API and import services; this
//! crate only defines the rows and the builder used to assemble them.

use amp_common::AmpError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::context::AuditValues;

/// Audit log entry as stored by the audit store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuditEntry {
    /// Unique identifier for the audit entry
    pub id: Uuid,
    /// Actor that requested the change
    pub changed_by: Uuid,
    /// System actor that executed the change (see [`crate::actors`])
    pub changed_by_system: Uuid,
    /// Correlation id shared by all records of one operation
    pub operation_id: String,
    /// Action performed
    pub action: String,
    /// Type of resource affected
    pub resource_type: String,
    /// ID of the affected resource
    pub resource_id: Option<Uuid>,
    /// Before/after state or creation data
    pub changes: Option<JsonValue>,
    /// Timestamp when the action occurred
    pub timestamp: DateTime<Utc>,
}

/// Audit action types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Import,
    Ingest,
    Other,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Import => "import",
            Self::Ingest => "ingest",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resource types that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Entity,
    Party,
    Role,
    Assignment,
    Delegation,
    Resource,
    Other,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Party => "party",
            Self::Role => "role",
            Self::Assignment => "assignment",
            Self::Delegation => "delegation",
            Self::Resource => "resource",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload for creating a new audit entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditEntry {
    /// Actor that requested the change
    pub changed_by: Uuid,
    /// System actor that executed the change
    pub changed_by_system: Uuid,
    /// Correlation id for the enclosing operation
    pub operation_id: String,
    /// Action performed
    pub action: AuditAction,
    /// Type of resource affected
    pub resource_type: ResourceType,
    /// ID of the affected resource
    pub resource_id: Option<Uuid>,
    /// Before/after state or creation data
    pub changes: Option<JsonValue>,
}

impl CreateAuditEntry {
    /// Create a builder for constructing audit entries
    pub fn builder() -> AuditEntryBuilder {
        AuditEntryBuilder::default()
    }
}

/// Builder for creating audit entries
#[derive(Debug, Clone, Default)]
pub struct AuditEntryBuilder {
    audit_values: Option<AuditValues>,
    action: Option<AuditAction>,
    resource_type: Option<ResourceType>,
    resource_id: Option<Uuid>,
    changes: Option<JsonValue>,
}

impl AuditEntryBuilder {
    /// Set the actor pair and operation id from the ambient audit values
    pub fn audit_values(mut self, audit_values: AuditValues) -> Self {
        self.audit_values = Some(audit_values);
        self
    }

    pub fn action(mut self, action: AuditAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    pub fn resource_id(mut self, resource_id: Option<Uuid>) -> Self {
        self.resource_id = resource_id;
        self
    }

    pub fn changes(mut self, changes: JsonValue) -> Self {
        self.changes = Some(changes);
        self
    }

    /// Build the CreateAuditEntry
    ///
    /// # Panics
    /// Panics if audit values, action or resource_type are not set. Use
    /// `try_build()` for fallible construction.
    pub fn build(self) -> CreateAuditEntry {
        match self.try_build() {
            Ok(entry) => entry,
            Err(err) => panic!("AuditEntryBuilder: {err}"),
        }
    }

    /// Try to build the CreateAuditEntry, returning an error if required
    /// fields are missing
    pub fn try_build(self) -> amp_common::Result<CreateAuditEntry> {
        let audit_values = self
            .audit_values
            .ok_or_else(|| AmpError::Validation("audit values are required".to_string()))?;
        let action = self
            .action
            .ok_or_else(|| AmpError::Validation("action is required".to_string()))?;
        let resource_type = self
            .resource_type
            .ok_or_else(|| AmpError::Validation("resource_type is required".to_string()))?;

        Ok(CreateAuditEntry {
            changed_by: audit_values.changed_by,
            changed_by_system: audit_values.changed_by_system,
            operation_id: audit_values.operation_id,
            action,
            resource_type,
            resource_id: self.resource_id,
            changes: self.changes,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::actors;

    #[test]
    fn test_audit_action_as_str() {
        assert_eq!(AuditAction::Create.as_str(), "create");
        assert_eq!(AuditAction::Import.as_str(), "import");
        assert_eq!(AuditAction::Ingest.as_str(), "ingest");
    }

    #[test]
    fn test_resource_type_as_str() {
        assert_eq!(ResourceType::Entity.as_str(), "entity");
        assert_eq!(ResourceType::Assignment.as_str(), "assignment");
        assert_eq!(ResourceType::Resource.as_str(), "resource");
    }

    #[test]
    fn test_audit_entry_builder() {
        let entry = CreateAuditEntry::builder()
            .audit_values(AuditValues::for_system(actors::ENDUSER_API))
            .action(AuditAction::Create)
            .resource_type(ResourceType::Delegation)
            .resource_id(Some(Uuid::new_v4()))
            .build();

        assert_eq!(entry.action, AuditAction::Create);
        assert_eq!(entry.resource_type, ResourceType::Delegation);
        assert_eq!(
            entry.changed_by_system,
            Uuid::parse_str(actors::ENDUSER_API_STR).unwrap()
        );
    }

    #[test]
    fn test_try_build_requires_audit_values() {
        let result = CreateAuditEntry::builder()
            .action(AuditAction::Update)
            .resource_type(ResourceType::Role)
            .try_build();

        assert!(matches!(result, Err(AmpError::Validation(_))));
    }

    #[test]
    fn test_try_build_requires_action() {
        let result = CreateAuditEntry::builder()
            .audit_values(AuditValues::for_system(actors::STATIC_DATA_INGEST))
            .resource_type(ResourceType::Entity)
            .try_build();

        assert!(matches!(result, Err(AmpError::Validation(_))));
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&AuditAction::Create).unwrap();
        assert_eq!(json, r#""create""#);

        let action: AuditAction = serde_json::from_str(r#""ingest""#).unwrap();
        assert_eq!(action, AuditAction::Ingest);
    }

    #[test]
    fn test_resource_type_serialization() {
        let json = serde_json::to_string(&ResourceType::Delegation).unwrap();
        assert_eq!(json, r#""delegation""#);

        let resource: ResourceType = serde_json::from_str(r#""entity""#).unwrap();
        assert_eq!(resource, ResourceType::Entity);
    }
}
