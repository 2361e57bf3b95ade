use std::env;

pub const DEFAULT_STREAM_GROUP_ID: &str = "sg-000000000";
pub const DEFAULT_APPLICATION_ID: &str = "a-000000000";

/// Deployment inputs, resolved once at the entry point and passed by value.
/// Nothing below the entry point reads the process environment.
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Stream group identifier; validated before it reaches any resource.
    pub stream_group_id: String,
    /// Application identifier; forwarded as-is, never validated.
    pub application_id: String,
    /// Deployment account, forwarded untouched to the provisioning engine.
    pub account: String,
    /// Deployment region, forwarded untouched to the provisioning engine.
    pub region: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            stream_group_id: DEFAULT_STREAM_GROUP_ID.to_owned(),
            application_id: DEFAULT_APPLICATION_ID.to_owned(),
            account: "*".to_owned(),
            region: "*".to_owned(),
        }
    }
}

impl StackConfig {
    /// Loads the config from the environment, falling back to the defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            stream_group_id: env::var("STREAM_GROUP_ID").unwrap_or(defaults.stream_group_id),
            application_id: env::var("APPLICATION_ID").unwrap_or(defaults.application_id),
            account: env::var("CDK_DEFAULT_ACCOUNT").unwrap_or(defaults.account),
            region: env::var("CDK_DEFAULT_REGION").unwrap_or(defaults.region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_documented_placeholders() {
        let config = StackConfig::default();
        assert_eq!(config.stream_group_id, "sg-000000000");
        assert_eq!(config.application_id, "a-000000000");
    }
}
