//! AMP Audit Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Audit primitives shared by the AMP import pipelines and API surfaces.
//!
//! # Overview
//!
//! Every mutating operation in AMP leaves an audit trail naming who asked
//! for the change and which system carried it out. This crate provides:
//!
//! - **Actors**: the well-known, fixed identities of the non-human systems
//!   that write audit records ([`actors`])
//! - **Context**: the audit values stamped onto a unit of work ([`context`])
//! - **Models**: the shapes of the records the audit store persists
//!   ([`models`])
//!
//! # Example
//!
//! ```
//! use amp_audit::{actors, AuditAction, AuditValues, CreateAuditEntry, ResourceType};
//!
//! let audit = AuditValues::for_system(actors::STATIC_DATA_INGEST);
//! let entry = CreateAuditEntry::builder()
//!     .audit_values(audit)
//!     .action(AuditAction::Ingest)
//!     .resource_type(ResourceType::Entity)
//!     .build();
//!
//! assert_eq!(entry.changed_by_system, actors::STATIC_DATA_INGEST);
//! ```

pub mod actors;
pub mod context;
pub mod models;

// Re-export commonly used types
pub use context::{AuditContextProvider, AuditValues};
pub use models::{AuditAction, AuditEntry, AuditEntryBuilder, CreateAuditEntry, ResourceType};
