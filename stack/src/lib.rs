//! Declarative infrastructure descriptor for the stream relay: a single
//! Lambda-backed HTTP endpoint that brokers game-streaming sessions.
//!
//! The crate builds an [`InfrastructureDescriptor`] in three steps: validate
//! the stream group identifier, derive the permission grants scoped to it,
//! and declare the route table for the relay's fixed operation set. The
//! descriptor is handed to a [`ProvisioningEngine`] which materializes the
//! actual resources; nothing in here talks to the network.

pub mod config;
pub mod descriptor;
pub mod grants;
pub mod instructions;
pub mod provision;
pub mod routes;
pub mod validate;

pub use config::StackConfig;
pub use descriptor::{assemble, ComputeUnit, ComputeUnitRef, InfrastructureDescriptor};
pub use grants::{build_grants, Action, PermissionGrant};
pub use instructions::format_instructions;
pub use provision::{Applied, ProvisioningEngine};
pub use routes::{build_routes, CorsPolicy, HttpMethod, RouteEntry, RouteTable};
pub use validate::{ApplicationId, FormatError, StreamGroupId};
