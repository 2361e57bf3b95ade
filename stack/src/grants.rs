use crate::validate::StreamGroupId;
use serde::Serialize;

/// Service namespace of the downstream streaming API.
pub const SERVICE_NAMESPACE: &str = "gameliftstreams";

/// The three session operations the relay is allowed to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    #[serde(rename = "gameliftstreams:StartStreamSession")]
    StartStreamSession,
    #[serde(rename = "gameliftstreams:GetStreamSession")]
    GetStreamSession,
    #[serde(rename = "gameliftstreams:TerminateStreamSession")]
    TerminateStreamSession,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::StartStreamSession => "gameliftstreams:StartStreamSession",
            Action::GetStreamSession => "gameliftstreams:GetStreamSession",
            Action::TerminateStreamSession => "gameliftstreams:TerminateStreamSession",
        }
    }
}

/// One allow statement tying the session actions to resource patterns.
#[derive(Debug, Clone, Serialize)]
pub struct PermissionGrant {
    #[serde(rename = "Effect")]
    pub effect: &'static str,
    #[serde(rename = "Action")]
    pub actions: Vec<Action>,
    #[serde(rename = "Resource")]
    pub resources: Vec<String>,
}

/// Matches any application in the service namespace. Application identity is
/// enforced at session time by the streaming service, so the grant stays
/// broad at this layer.
pub fn any_application_arn() -> String {
    format!("arn:aws:{SERVICE_NAMESPACE}:*:*:application/*")
}

/// Matches only the validated stream group.
pub fn stream_group_arn(stream_group_id: &StreamGroupId) -> String {
    format!("arn:aws:{SERVICE_NAMESPACE}:*:*:streamgroup/{stream_group_id}")
}

/// Builds the relay's permission set: one grant covering the three session
/// actions against the broad application pattern and the group-scoped
/// pattern. Total over validated input.
pub fn build_grants(stream_group_id: &StreamGroupId) -> Vec<PermissionGrant> {
    vec![PermissionGrant {
        effect: "Allow",
        actions: vec![
            Action::StartStreamSession,
            Action::GetStreamSession,
            Action::TerminateStreamSession,
        ],
        resources: vec![any_application_arn(), stream_group_arn(stream_group_id)],
    }]
}
