use crate::descriptor::InfrastructureDescriptor;

/// What a successful apply reports back: the base URL of the provisioned
/// endpoint, which feeds the usage instructions.
#[derive(Debug, Clone)]
pub struct Applied {
    pub endpoint_base_url: String,
}

/// Seam to the external engine that materializes the descriptor into real
/// resources. The call blocks until the engine reports; engine failures
/// propagate unmodified, with no retry, so a misconfigured deployment
/// surfaces immediately.
pub trait ProvisioningEngine {
    fn apply(&self, descriptor: &InfrastructureDescriptor) -> anyhow::Result<Applied>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StackConfig;
    use crate::descriptor::assemble;
    use crate::instructions::format_instructions;

    struct FixedEndpoint(&'static str);

    impl ProvisioningEngine for FixedEndpoint {
        fn apply(&self, _descriptor: &InfrastructureDescriptor) -> anyhow::Result<Applied> {
            Ok(Applied {
                endpoint_base_url: self.0.to_owned(),
            })
        }
    }

    struct AlwaysFails;

    impl ProvisioningEngine for AlwaysFails {
        fn apply(&self, _descriptor: &InfrastructureDescriptor) -> anyhow::Result<Applied> {
            anyhow::bail!("rollback: rate exceeded")
        }
    }

    #[test]
    fn applied_endpoint_feeds_the_instructions() {
        let config = StackConfig::default();
        let stream_group_id = config.stream_group_id.clone();
        let application_id = config.application_id.clone();

        let descriptor = assemble(config).unwrap();
        let applied = FixedEndpoint("https://x.example/prod")
            .apply(&descriptor)
            .unwrap();

        let text = format_instructions(&applied.endpoint_base_url, &stream_group_id, &application_id);
        assert!(text.contains("https://x.example/prod"));
    }

    #[test]
    fn engine_errors_surface_unmodified() {
        let descriptor = assemble(StackConfig::default()).unwrap();
        let err = AlwaysFails.apply(&descriptor).unwrap_err();
        assert_eq!(err.to_string(), "rollback: rate exceeded");
    }
}
