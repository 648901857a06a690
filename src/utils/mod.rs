//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`dom`] - Browser window, storage, clipboard, and hash navigation access
//! - [`fetch`] - HTTP requests over the Fetch API with timeout racing
//! - [`storage`] - Durable session persistence (the token store)
//! - [`format`] - File-size and date display formatting

pub mod dom;
pub mod fetch;
pub mod format;
pub mod storage;
