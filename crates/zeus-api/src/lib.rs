//! Async Rust client for the Zeus address-pool API.
//!
//! Zeus hands out IP address pools per region and leases addresses out of
//! them to named assignments. This crate covers the HTTP surface of that
//! service: pool create/fetch/delete, assignment create/fetch/delete, and
//! the request/response types on the wire.
//!
//! All request methods take a [`CancellationToken`] so callers can abort
//! in-flight calls; see [`Client`] for details.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::Client;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{
    AddressResult, AssignDetail, CreateAssignRequest, CreateAssignResponse, CreatePoolRequest,
    CreatePoolResponse, PoolDetail,
};
