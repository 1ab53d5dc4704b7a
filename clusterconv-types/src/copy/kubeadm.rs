use crate::bootstrap::{v1alpha2 as spoke, v1beta1 as hub};
use crate::copy::{copy_all, list_type_meta_of, type_meta_of};

impl From<&spoke::NodeRegistrationOptions> for hub::NodeRegistrationOptions {
    fn from(options: &spoke::NodeRegistrationOptions) -> Self {
        Self {
            name: options.name.clone(),
            cri_socket: options.cri_socket.clone(),
            taints: options.taints.clone(),
            kubelet_extra_args: options.kubelet_extra_args.clone(),
            ignore_preflight_errors: Vec::new(),
        }
    }
}

impl From<&hub::NodeRegistrationOptions> for spoke::NodeRegistrationOptions {
    fn from(options: &hub::NodeRegistrationOptions) -> Self {
        Self {
            name: options.name.clone(),
            cri_socket: options.cri_socket.clone(),
            taints: options.taints.clone(),
            kubelet_extra_args: options.kubelet_extra_args.clone(),
        }
    }
}

impl From<&spoke::InitConfiguration> for hub::InitConfiguration {
    fn from(init: &spoke::InitConfiguration) -> Self {
        Self {
            node_registration: (&init.node_registration).into(),
            local_api_endpoint: init.local_api_endpoint.clone(),
        }
    }
}

impl From<&hub::InitConfiguration> for spoke::InitConfiguration {
    fn from(init: &hub::InitConfiguration) -> Self {
        Self {
            node_registration: (&init.node_registration).into(),
            local_api_endpoint: init.local_api_endpoint.clone(),
        }
    }
}

impl From<&spoke::JoinConfiguration> for hub::JoinConfiguration {
    fn from(join: &spoke::JoinConfiguration) -> Self {
        Self {
            node_registration: (&join.node_registration).into(),
            ca_cert_path: join.ca_cert_path.clone(),
            discovery: join.discovery.clone(),
            control_plane: join.control_plane.clone(),
        }
    }
}

impl From<&hub::JoinConfiguration> for spoke::JoinConfiguration {
    fn from(join: &hub::JoinConfiguration) -> Self {
        Self {
            node_registration: (&join.node_registration).into(),
            ca_cert_path: join.ca_cert_path.clone(),
            discovery: join.discovery.clone(),
            control_plane: join.control_plane.clone(),
        }
    }
}

impl From<&spoke::File> for hub::File {
    fn from(file: &spoke::File) -> Self {
        Self {
            path: file.path.clone(),
            owner: file.owner.clone(),
            permissions: file.permissions.clone(),
            encoding: file.encoding.clone(),
            content: file.content.clone(),
            content_from: None,
        }
    }
}

impl From<&hub::File> for spoke::File {
    fn from(file: &hub::File) -> Self {
        Self {
            path: file.path.clone(),
            owner: file.owner.clone(),
            permissions: file.permissions.clone(),
            encoding: file.encoding.clone(),
            content: file.content.clone(),
        }
    }
}

impl From<&spoke::KubeadmConfigSpec> for hub::KubeadmConfigSpec {
    fn from(spec: &spoke::KubeadmConfigSpec) -> Self {
        Self {
            cluster_configuration: spec.cluster_configuration.clone(),
            init_configuration: spec.init_configuration.as_ref().map(Into::into),
            join_configuration: spec.join_configuration.as_ref().map(Into::into),
            files: copy_all(&spec.files),
            pre_kubeadm_commands: spec.pre_kubeadm_commands.clone(),
            post_kubeadm_commands: spec.post_kubeadm_commands.clone(),
            users: spec.users.clone(),
            ntp: spec.ntp.clone(),
            format: spec.format.clone(),
            ..Default::default()
        }
    }
}

impl From<&hub::KubeadmConfigSpec> for spoke::KubeadmConfigSpec {
    fn from(spec: &hub::KubeadmConfigSpec) -> Self {
        Self {
            cluster_configuration: spec.cluster_configuration.clone(),
            init_configuration: spec.init_configuration.as_ref().map(Into::into),
            join_configuration: spec.join_configuration.as_ref().map(Into::into),
            files: copy_all(&spec.files),
            pre_kubeadm_commands: spec.pre_kubeadm_commands.clone(),
            post_kubeadm_commands: spec.post_kubeadm_commands.clone(),
            users: spec.users.clone(),
            ntp: spec.ntp.clone(),
            format: spec.format.clone(),
        }
    }
}

impl From<&spoke::KubeadmConfigStatus> for hub::KubeadmConfigStatus {
    fn from(status: &spoke::KubeadmConfigStatus) -> Self {
        // Inline bootstrap data cannot become a secret reference.
        Self {
            ready: status.ready,
            failure_reason: status.error_reason.clone(),
            failure_message: status.error_message.clone(),
            ..Default::default()
        }
    }
}

impl From<&hub::KubeadmConfigStatus> for spoke::KubeadmConfigStatus {
    fn from(status: &hub::KubeadmConfigStatus) -> Self {
        Self {
            ready: status.ready,
            bootstrap_data: None,
            error_reason: status.failure_reason.clone(),
            error_message: status.failure_message.clone(),
        }
    }
}

impl From<&spoke::KubeadmConfig> for hub::KubeadmConfig {
    fn from(config: &spoke::KubeadmConfig) -> Self {
        Self {
            type_meta: type_meta_of::<hub::KubeadmConfig>(),
            metadata: config.metadata.clone(),
            spec: (&config.spec).into(),
            status: (&config.status).into(),
        }
    }
}

impl From<&hub::KubeadmConfig> for spoke::KubeadmConfig {
    fn from(config: &hub::KubeadmConfig) -> Self {
        Self {
            type_meta: type_meta_of::<spoke::KubeadmConfig>(),
            metadata: config.metadata.clone(),
            spec: (&config.spec).into(),
            status: (&config.status).into(),
        }
    }
}

impl From<&spoke::KubeadmConfigList> for hub::KubeadmConfigList {
    fn from(list: &spoke::KubeadmConfigList) -> Self {
        Self {
            type_meta: list_type_meta_of::<hub::KubeadmConfigList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}

impl From<&hub::KubeadmConfigList> for spoke::KubeadmConfigList {
    fn from(list: &hub::KubeadmConfigList) -> Self {
        Self {
            type_meta: list_type_meta_of::<spoke::KubeadmConfigList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}

impl From<&spoke::KubeadmConfigTemplate> for hub::KubeadmConfigTemplate {
    fn from(template: &spoke::KubeadmConfigTemplate) -> Self {
        Self {
            type_meta: type_meta_of::<hub::KubeadmConfigTemplate>(),
            metadata: template.metadata.clone(),
            spec: hub::KubeadmConfigTemplateSpec {
                template: hub::KubeadmConfigTemplateResource {
                    spec: (&template.spec.template.spec).into(),
                },
            },
        }
    }
}

impl From<&hub::KubeadmConfigTemplate> for spoke::KubeadmConfigTemplate {
    fn from(template: &hub::KubeadmConfigTemplate) -> Self {
        Self {
            type_meta: type_meta_of::<spoke::KubeadmConfigTemplate>(),
            metadata: template.metadata.clone(),
            spec: spoke::KubeadmConfigTemplateSpec {
                template: spoke::KubeadmConfigTemplateResource {
                    spec: (&template.spec.template.spec).into(),
                },
            },
        }
    }
}

impl From<&spoke::KubeadmConfigTemplateList> for hub::KubeadmConfigTemplateList {
    fn from(list: &spoke::KubeadmConfigTemplateList) -> Self {
        Self {
            type_meta: list_type_meta_of::<hub::KubeadmConfigTemplateList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}

impl From<&hub::KubeadmConfigTemplateList> for spoke::KubeadmConfigTemplateList {
    fn from(list: &hub::KubeadmConfigTemplateList) -> Self {
        Self {
            type_meta: list_type_meta_of::<spoke::KubeadmConfigTemplateList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}
