use crate::config::StackConfig;
use crate::grants::{build_grants, PermissionGrant};
use crate::routes::{build_routes, CorsPolicy, RouteTable};
use crate::validate::{ApplicationId, FormatError, StreamGroupId};
use serde::Serialize;
use std::collections::BTreeMap;

pub const COMPUTE_UNIT_NAME: &str = "stream-relay";

/// Environment bindings handed to the compute unit at provision time.
pub const ENV_STREAM_GROUP_ID: &str = "STREAM_GROUP_ID";
pub const ENV_APPLICATION_ID: &str = "APPLICATION_ID";

/// Name-based reference routes use to point at the compute unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComputeUnitRef(String);

impl ComputeUnitRef {
    pub fn named(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// The one Lambda behind the gateway. `handler` names the bootstrap binary
/// that loads the session server; the server itself is opaque to this crate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeUnit {
    pub name: String,
    pub handler: String,
    pub environment: BTreeMap<String, String>,
}

impl ComputeUnit {
    fn new(stream_group_id: &StreamGroupId, application_id: &ApplicationId) -> Self {
        let environment = BTreeMap::from([
            (
                ENV_STREAM_GROUP_ID.to_owned(),
                stream_group_id.as_str().to_owned(),
            ),
            (
                ENV_APPLICATION_ID.to_owned(),
                application_id.as_str().to_owned(),
            ),
        ]);
        Self {
            name: COMPUTE_UNIT_NAME.to_owned(),
            handler: "relay".to_owned(),
            environment,
        }
    }

    pub fn reference(&self) -> ComputeUnitRef {
        ComputeUnitRef::named(&self.name)
    }
}

/// The full declarative graph handed to the provisioning engine. Assembled
/// once per deployment and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureDescriptor {
    pub account: String,
    pub region: String,
    pub compute_unit: ComputeUnit,
    pub grants: Vec<PermissionGrant>,
    pub routes: RouteTable,
    pub cors: CorsPolicy,
}

/// Builds the descriptor from explicit configuration: validate the stream
/// group id, then derive the grants and route table from it. A format
/// failure aborts here, before anything is handed off, so a malformed
/// descriptor can never be partially applied.
pub fn assemble(config: StackConfig) -> Result<InfrastructureDescriptor, FormatError> {
    let stream_group_id = StreamGroupId::new(&config.stream_group_id)?;
    let application_id = ApplicationId::from(config.application_id);

    let compute_unit = ComputeUnit::new(&stream_group_id, &application_id);
    let grants = build_grants(&stream_group_id);
    let routes = build_routes(&compute_unit.reference());

    Ok(InfrastructureDescriptor {
        account: config.account,
        region: config.region,
        compute_unit,
        grants,
        routes,
        cors: CorsPolicy::permissive(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_assembles_end_to_end() {
        let descriptor = assemble(StackConfig::default()).unwrap();
        assert_eq!(descriptor.grants.len(), 1);
        assert_eq!(descriptor.routes.len(), 5);
        assert_eq!(descriptor.compute_unit.name, COMPUTE_UNIT_NAME);
    }

    #[test]
    fn compute_unit_receives_the_identifier_bindings() {
        let config = StackConfig {
            stream_group_id: "sg-abc123456".to_owned(),
            application_id: "a-9876543210".to_owned(),
            ..StackConfig::default()
        };
        let descriptor = assemble(config).unwrap();
        let env = &descriptor.compute_unit.environment;
        assert_eq!(env.get(ENV_STREAM_GROUP_ID).map(String::as_str), Some("sg-abc123456"));
        assert_eq!(env.get(ENV_APPLICATION_ID).map(String::as_str), Some("a-9876543210"));
    }

    #[test]
    fn malformed_stream_group_id_aborts_assembly() {
        let config = StackConfig {
            stream_group_id: "sg-short".to_owned(),
            ..StackConfig::default()
        };
        assert!(assemble(config).is_err());
    }

    #[test]
    fn route_paths_are_unique() {
        let descriptor = assemble(StackConfig::default()).unwrap();
        let mut paths: Vec<String> = descriptor
            .routes
            .entries()
            .iter()
            .map(|e| e.path())
            .collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 5);
    }

    #[test]
    fn descriptor_renders_to_json() {
        let descriptor = assemble(StackConfig::default()).unwrap();
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["computeUnit"]["name"], "stream-relay");
        assert_eq!(json["grants"][0]["Effect"], "Allow");
        assert_eq!(json["cors"]["allowOrigins"][0], "*");
    }
}
