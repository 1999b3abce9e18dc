//! # toollab-client
//!
//! Data/auth layer for the Toollab school-management application: the shared
//! HTTP client with its authorization pipeline, durable session state, route
//! guard decisions, and one thin wrapper module per API domain (classrooms,
//! cursus, families, payments, tarification, schools, staff, students,
//! statistics, users).
//!
//! The crate owns no UI. A shell wires it up once at startup:
//!
//! ```no_run
//! use std::sync::Arc;
//! use toollab_client::{ApiClient, Config};
//! use toollab_client::navigate::NoopNavigator;
//! use toollab_client::state::Auth;
//! use toollab_client::storage::FileStorage;
//!
//! # fn main() -> Result<(), toollab_client::ApiError> {
//! let client = ApiClient::new(
//!     &Config::from_env(),
//!     Arc::new(FileStorage::open("toollab.json")),
//!     Arc::new(NoopNavigator),
//! )?;
//! let auth = Auth::new(client.clone());
//! auth.init_auth();
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod navigate;
pub mod net;
pub mod session;
pub mod state;
pub mod storage;
pub mod util;

pub use config::Config;
pub use error::ApiError;
pub use net::ApiClient;
pub use net::types::{AuthPayload, Credentials, RegisterData, User};
pub use session::{Session, SessionStore};
