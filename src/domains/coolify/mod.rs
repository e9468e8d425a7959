//! Coolify API domain.
//!
//! A thin, stateless binding of the Coolify REST API. Every call is a single
//! round trip; retries and caching are left to the caller.

mod client;
mod error;
pub mod models;

pub use client::CoolifyClient;
pub use error::{ApiError, ApiErrorBody, ApiResult};
pub use models::{
    CreateApplicationRequest, CreatePrivateKeyRequest, CreateServerRequest, CreateServiceRequest,
    EnvironmentVariable, Pagination, ProxyType,
};
