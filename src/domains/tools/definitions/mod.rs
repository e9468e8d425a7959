//! Tool definitions module.
//!
//! One file per Coolify resource family. Each file exposes `entries()`, the
//! list of tools it contributes to the registry.

pub mod applications;
pub mod common;
pub mod deployments;
pub mod envs;
pub mod private_keys;
pub mod servers;
pub mod services;
pub mod system;
pub mod teams;

use super::handlers::ToolEntry;

/// Every tool, in catalog order.
pub fn all_entries() -> Vec<ToolEntry> {
    let mut entries = Vec::new();
    entries.extend(system::entries());
    entries.extend(teams::entries());
    entries.extend(servers::entries());
    entries.extend(services::entries());
    entries.extend(applications::entries());
    entries.extend(deployments::entries());
    entries.extend(private_keys::entries());
    entries.extend(envs::entries());
    entries
}
