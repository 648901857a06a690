//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Session`], [`SessionStatus`], [`User`] - Authentication state machine
//! - [`FileRecord`], [`MediaKind`] - Media file records and collection edits
//! - [`ListingQuery`], [`SortKey`], [`TypeFilter`] - Listing query tuple
//! - [`ShareSession`] - Per-dialog share workflow state machine
//! - [`AppRoute`] - Hash-based navigation

mod file;
mod query;
mod route;
mod session;
mod share;

pub use file::{bump_record_view, prepend_records, remove_record, FileRecord, MediaKind};
pub use query::{ListingQuery, SortKey, TypeFilter};
pub use route::AppRoute;
pub use session::{AuthResponse, Session, SessionStatus, User, VerifyResponse};
pub use share::{InviteState, LinkState, ShareSession, ShareTab};
