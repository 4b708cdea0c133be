//! GreenStep Core
//!
//! Client-side core of the GreenStep sustainability tracker: domain models,
//! the three state partitions, the operation coordinator that drives them,
//! and the REST client it calls.
//!
//! Views dispatch nothing themselves. They call a [`Coordinator`] operation,
//! which emits `Started`, performs one request and then emits `Succeeded` or
//! `Failed` into whatever [`Dispatch`] sink it was built with.

pub mod api;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod insights;
pub mod models;
pub mod state;
pub mod token;

pub use api::{Endpoint, GreenApi, HttpApi};
pub use config::ApiConfig;
pub use coordinator::{Coordinator, Operation};
pub use error::{ApiError, ApiResult, OperationError};
pub use state::{AppState, Dispatch, Event, Phase, RequestStatus};
pub use token::{BearerToken, MemoryTokenStore, TokenStore};

#[cfg(feature = "store")]
pub use state::AppStateStoreFields;
