use crate::pipeline::Spoke;
use clusterconv_relocate::{materialize, merge_by_key};
use clusterconv_types::bootstrap::{v1alpha2 as spoke, v1beta1 as hub};
use clusterconv_types::copy::CopyError;
use tracing::debug;

pub(crate) const CONFIG_STASHED: &[&str] = &[
    "spec.initConfiguration.nodeRegistration.ignorePreflightErrors",
    "spec.joinConfiguration.nodeRegistration.ignorePreflightErrors",
    "spec.files[].contentFrom",
    "spec.diskSetup",
    "spec.mounts",
    "spec.verbosity",
    "spec.useExperimentalRetryJoin",
    "status.dataSecretName",
    "status.observedGeneration",
    "status.conditions",
];

pub(crate) const TEMPLATE_STASHED: &[&str] = &[
    "spec.template.spec.initConfiguration.nodeRegistration.ignorePreflightErrors",
    "spec.template.spec.joinConfiguration.nodeRegistration.ignorePreflightErrors",
    "spec.template.spec.files[].contentFrom",
    "spec.template.spec.diskSetup",
    "spec.template.spec.mounts",
    "spec.template.spec.verbosity",
    "spec.template.spec.useExperimentalRetryJoin",
];

/// Restores the hub-only parts of a kubeadm bootstrap spec.
///
/// Files are matched by path. A live file gets the stashed `contentFrom` only when
/// its inline content is empty; files that exist only in the stash are dropped.
fn restore_kubeadm_spec(restored: hub::KubeadmConfigSpec, dst: &mut hub::KubeadmConfigSpec) {
    if let Some(init) = &restored.init_configuration
        && !init.node_registration.ignore_preflight_errors.is_empty()
    {
        materialize(&mut dst.init_configuration)
            .node_registration
            .ignore_preflight_errors = init.node_registration.ignore_preflight_errors.clone();
    }
    if let Some(join) = &restored.join_configuration
        && !join.node_registration.ignore_preflight_errors.is_empty()
    {
        materialize(&mut dst.join_configuration)
            .node_registration
            .ignore_preflight_errors = join.node_registration.ignore_preflight_errors.clone();
    }

    let filled = merge_by_key(
        &mut dst.files,
        &restored.files,
        |file| file.path.as_str(),
        |file| file.content.is_empty(),
        |live, stashed| {
            if let Some(source) = &stashed.content_from {
                live.content_from = Some(source.clone());
            }
        },
    );
    debug!(filled, "restored file sources");

    dst.disk_setup = restored.disk_setup;
    dst.mounts = restored.mounts;
    dst.verbosity = restored.verbosity;
    dst.use_experimental_retry_join = restored.use_experimental_retry_join;
}

impl Spoke for spoke::KubeadmConfig {
    type Hub = hub::KubeadmConfig;

    fn copy_up(&self) -> Result<hub::KubeadmConfig, CopyError> {
        Ok(self.into())
    }

    fn copy_down(hub: &hub::KubeadmConfig) -> Result<Self, CopyError> {
        Ok(hub.into())
    }

    fn relocate_up(&self, _hub: &mut hub::KubeadmConfig) -> Result<(), CopyError> {
        Ok(())
    }

    fn relocate_down(_hub: &hub::KubeadmConfig, _spoke: &mut Self) {}

    fn restore(&self, restored: hub::KubeadmConfig, hub: &mut hub::KubeadmConfig) {
        restore_kubeadm_spec(restored.spec, &mut hub.spec);
        hub.status.data_secret_name = restored.status.data_secret_name;
        hub.status.observed_generation = restored.status.observed_generation;
        hub.status.conditions = restored.status.conditions;
    }
}

impl Spoke for spoke::KubeadmConfigTemplate {
    type Hub = hub::KubeadmConfigTemplate;

    fn copy_up(&self) -> Result<hub::KubeadmConfigTemplate, CopyError> {
        Ok(self.into())
    }

    fn copy_down(hub: &hub::KubeadmConfigTemplate) -> Result<Self, CopyError> {
        Ok(hub.into())
    }

    fn relocate_up(&self, _hub: &mut hub::KubeadmConfigTemplate) -> Result<(), CopyError> {
        Ok(())
    }

    fn relocate_down(_hub: &hub::KubeadmConfigTemplate, _spoke: &mut Self) {}

    fn restore(&self, restored: hub::KubeadmConfigTemplate, hub: &mut hub::KubeadmConfigTemplate) {
        restore_kubeadm_spec(restored.spec.template.spec, &mut hub.spec.template.spec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn file(path: &str, content: &str) -> hub::File {
        hub::File {
            path: path.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    fn secret(name: &str) -> Option<hub::FileSource> {
        Some(hub::FileSource {
            secret: hub::SecretFileSource {
                name: name.to_string(),
                key: "value".to_string(),
            },
        })
    }

    #[test]
    fn spec_fields_list_matches_template_prefix() {
        let spec_fields = CONFIG_STASHED.iter().filter(|f| f.starts_with("spec."));
        assert_eq!(spec_fields.clone().count(), TEMPLATE_STASHED.len());
        for (plain, templated) in spec_fields.zip(TEMPLATE_STASHED) {
            assert_eq!(templated.strip_prefix("spec.template."), Some(*plain));
        }
    }

    #[test]
    fn content_from_only_fills_empty_live_files() {
        let mut restored = hub::KubeadmConfigSpec::default();
        restored.files = vec![
            hub::File {
                content_from: secret("a"),
                ..file("/etc/a", "")
            },
            hub::File {
                content_from: secret("b"),
                ..file("/etc/b", "")
            },
            hub::File {
                content_from: secret("gone"),
                ..file("/etc/gone", "")
            },
        ];

        let mut live = hub::KubeadmConfigSpec::default();
        live.files = vec![file("/etc/a", ""), file("/etc/b", "edited inline")];

        restore_kubeadm_spec(restored, &mut live);

        assert_eq!(live.files.len(), 2);
        assert_eq!(live.files[0].content_from, secret("a"));
        assert_eq!(live.files[1].content_from, None);
        assert_eq!(live.files[1].content, "edited inline");
    }

    #[test]
    fn ignore_preflight_errors_materialize_join_configuration() {
        let mut restored = hub::KubeadmConfigSpec::default();
        let mut join = hub::JoinConfiguration::default();
        join.node_registration.ignore_preflight_errors = vec!["Swap".to_string()];
        restored.join_configuration = Some(join);
        restored.verbosity = Some(5);

        let mut live = hub::KubeadmConfigSpec::default();
        restore_kubeadm_spec(restored, &mut live);

        let join = live.join_configuration.expect("materialized");
        assert_eq!(join.node_registration.ignore_preflight_errors, vec!["Swap"]);
        assert!(live.init_configuration.is_none());
        assert_eq!(live.verbosity, Some(5));
    }

    #[test]
    fn empty_ignore_list_leaves_configuration_absent() {
        let mut restored = hub::KubeadmConfigSpec::default();
        restored.init_configuration = Some(hub::InitConfiguration::default());

        let mut live = hub::KubeadmConfigSpec::default();
        restore_kubeadm_spec(restored, &mut live);
        assert!(live.init_configuration.is_none());
    }
}
