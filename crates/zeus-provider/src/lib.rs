//! Provider core for the Zeus address-pool service.
//!
//! Zeus hands out regional IPv4 pools ("pool") and leases addresses out
//! of them to named assignments ("assign"). This crate implements the
//! provider side of that: the dynamic value model and its JSON codec, the
//! plan-time stability policy, lease state encoding, resource and
//! data-source orchestration, provider configuration, and the IPv4
//! conversion functions.
//!
//! The plugin hosting protocol is deliberately not here: a host shim
//! resolves [`ProviderConfig`], calls [`ZeusProvider::configure`], and
//! drives the async operation methods directly.

pub mod codec;
pub mod config;
pub mod data_source;
pub mod error;
pub mod functions;
pub mod lease;
pub mod plan;
pub mod provider;
pub mod resource;
pub mod value;

pub use config::{ProviderConfig, ProviderSettings};
pub use error::Error;
pub use functions::{ipv4_ip2long, ipv4_long2ip};
pub use lease::{LeaseRecord, encode_leases};
pub use provider::ZeusProvider;
pub use value::{Attr, DynamicValue, ValueKind};
