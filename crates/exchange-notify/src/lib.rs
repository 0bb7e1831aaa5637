//! # Exchange Notify
//!
//! Notification collaborator for the Gift-Circle workspace.
//!
//! Renders one assignment notice per participant - carrying only that
//! participant's own contact details plus their assigned receiver's display
//! name and wish note, never an identifier and never the full mapping - and
//! delivers it through a pluggable mail provider, collecting per-message
//! success or failure without short-circuiting. One provider is chosen per
//! run via [`ProviderKind`]; there is no failover orchestration here.
//!
//! ## Architecture
//!
//! - **Domain**: message and delivery-report entities, error taxonomy
//! - **Templates**: plain-text notice and organizer-summary rendering
//! - **Ports**: outbound `EmailProvider`
//! - **Adapters**: Resend and SendGrid clients
//! - **Application**: `NotificationService`

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod templates;

pub use application::service::NotificationService;
pub use config::{NotifyConfig, ProviderKind};
pub use domain::entities::{DeliveryOutcome, DeliveryReport, EmailMessage};
pub use domain::errors::{NotifyError, ProviderError};
pub use ports::outbound::EmailProvider;
