//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`auth`] - Login/register forms and the route guard
//! - [`dashboard`] - Protected dashboard: upload, search, grid, sharing
//! - [`shared`] - Public shared-file viewer
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod auth;
pub mod dashboard;
pub mod icons;
pub mod router;
pub mod shared;

pub use router::AppRouter;
