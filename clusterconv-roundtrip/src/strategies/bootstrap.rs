//! Strategies for `bootstrap.cluster.x-k8s.io` kubeadm objects in both versions.

use super::meta::*;
use clusterconv_types::bootstrap::{
    BootstrapTokenDiscovery, ClusterConfiguration, ControlPlaneComponent, Discovery,
    FileDiscovery, JoinControlPlane, KubeadmApiEndpoint, Networking, Ntp, Taint, User, format,
};
use proptest::collection::{btree_map, vec};
use proptest::option;
use proptest::prelude::*;

prop_compose! {
    fn arb_component()(extra_args in arb_string_map()) -> ControlPlaneComponent {
        ControlPlaneComponent { extra_args }
    }
}

prop_compose! {
    fn arb_cluster_configuration()(
        kubernetes_version in "v1\\.[0-9]{1,2}\\.[0-9]",
        control_plane_endpoint in arb_text(),
        cluster_name in arb_name(),
        image_repository in arb_text(),
        networking in (arb_text(), arb_text(), arb_text()),
        api_server in arb_component(),
        controller_manager in arb_component(),
        scheduler in arb_component(),
        feature_gates in btree_map(arb_name(), any::<bool>(), 0..3),
    ) -> ClusterConfiguration {
        ClusterConfiguration {
            kubernetes_version,
            control_plane_endpoint,
            cluster_name,
            image_repository,
            networking: Networking {
                service_subnet: networking.0,
                pod_subnet: networking.1,
                dns_domain: networking.2,
            },
            api_server,
            controller_manager,
            scheduler,
            feature_gates,
        }
    }
}

prop_compose! {
    fn arb_kubeadm_api_endpoint()(
        advertise_address in arb_text(),
        bind_port in any::<i32>(),
    ) -> KubeadmApiEndpoint {
        KubeadmApiEndpoint { advertise_address, bind_port }
    }
}

prop_compose! {
    fn arb_token_discovery()(
        token in "[a-z0-9]{6}\\.[a-z0-9]{16}",
        api_server_endpoint in arb_text(),
        ca_cert_hashes in vec("sha256:[0-9a-f]{8}", 0..2),
        unsafe_skip_ca_verification in any::<bool>(),
    ) -> BootstrapTokenDiscovery {
        BootstrapTokenDiscovery { token, api_server_endpoint, ca_cert_hashes, unsafe_skip_ca_verification }
    }
}

prop_compose! {
    fn arb_discovery()(
        bootstrap_token in option::of(arb_token_discovery()),
        file in option::of(arb_text().prop_map(|kube_config_path| FileDiscovery { kube_config_path })),
        tls_bootstrap_token in arb_text(),
        timeout in option::of("[0-9]{1,2}m0s"),
    ) -> Discovery {
        Discovery { bootstrap_token, file, tls_bootstrap_token, timeout }
    }
}

prop_compose! {
    fn arb_taint()(
        key in arb_name(),
        value in arb_text(),
        effect in prop_oneof![Just("NoSchedule"), Just("PreferNoSchedule"), Just("NoExecute")],
    ) -> Taint {
        Taint { key, value, effect: effect.to_string() }
    }
}

prop_compose! {
    fn arb_user()(
        name in arb_name(),
        gecos in arb_opt_text(),
        groups in arb_opt_text(),
        home_dir in arb_opt_text(),
        shell in option::of(Just("/bin/bash".to_string())),
        lock_password in option::of(any::<bool>()),
        sudo in option::of(Just("ALL=(ALL) NOPASSWD:ALL".to_string())),
        ssh_authorized_keys in vec("ssh-ed25519 [A-Za-z0-9]{8}", 0..2),
    ) -> User {
        User { name, gecos, groups, home_dir, shell, lock_password, sudo, ssh_authorized_keys }
    }
}

prop_compose! {
    fn arb_ntp()(
        servers in vec(arb_name(), 0..2),
        enabled in option::of(any::<bool>()),
    ) -> Ntp {
        Ntp { servers, enabled }
    }
}

fn arb_format() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just(format::CLOUD_CONFIG.to_string())]
}

fn arb_path() -> impl Strategy<Value = String> {
    "/etc/[a-e]{1,2}"
}

/// Fields shared by both spec versions.
#[derive(Debug, Clone)]
struct Common {
    cluster_configuration: Option<ClusterConfiguration>,
    pre_kubeadm_commands: Vec<String>,
    post_kubeadm_commands: Vec<String>,
    users: Vec<User>,
    ntp: Option<Ntp>,
    format: String,
}

prop_compose! {
    fn arb_common()(
        cluster_configuration in option::of(arb_cluster_configuration()),
        pre_kubeadm_commands in vec(arb_text(), 0..2),
        post_kubeadm_commands in vec(arb_text(), 0..2),
        users in vec(arb_user(), 0..2),
        ntp in option::of(arb_ntp()),
        format in arb_format(),
    ) -> Common {
        Common { cluster_configuration, pre_kubeadm_commands, post_kubeadm_commands, users, ntp, format }
    }
}

/// Hub (`v1beta1`) strategies.
pub mod hub {
    use super::*;
    use clusterconv_types::bootstrap::v1beta1::*;

    prop_compose! {
        fn arb_node_registration()(
            name in arb_name(),
            cri_socket in arb_text(),
            taints in vec(arb_taint(), 0..2),
            kubelet_extra_args in arb_string_map(),
            ignore_preflight_errors in vec(prop_oneof![Just("Swap".to_string()), Just("NumCPU".to_string()), arb_name()], 0..3),
        ) -> NodeRegistrationOptions {
            NodeRegistrationOptions { name, cri_socket, taints, kubelet_extra_args, ignore_preflight_errors }
        }
    }

    prop_compose! {
        fn arb_init()(
            node_registration in arb_node_registration(),
            local_api_endpoint in arb_kubeadm_api_endpoint(),
        ) -> InitConfiguration {
            InitConfiguration { node_registration, local_api_endpoint }
        }
    }

    prop_compose! {
        fn arb_join()(
            node_registration in arb_node_registration(),
            ca_cert_path in arb_text(),
            discovery in arb_discovery(),
            control_plane in option::of(arb_kubeadm_api_endpoint().prop_map(|local_api_endpoint| JoinControlPlane { local_api_endpoint })),
        ) -> JoinConfiguration {
            JoinConfiguration { node_registration, ca_cert_path, discovery, control_plane }
        }
    }

    prop_compose! {
        fn arb_file()(
            path in arb_path(),
            owner in prop_oneof![Just(String::new()), Just("root:root".to_string())],
            permissions in prop_oneof![Just(String::new()), Just("0600".to_string())],
            encoding in prop_oneof![Just(String::new()), Just("base64".to_string())],
            content in arb_text(),
            content_from in option::of((arb_name(), arb_name())),
        ) -> File {
            File {
                path,
                owner,
                permissions,
                encoding,
                content,
                content_from: content_from.map(|(name, key)| FileSource {
                    secret: SecretFileSource { name, key },
                }),
            }
        }
    }

    prop_compose! {
        fn arb_partition()(
            device in "/dev/sd[a-c]",
            layout in any::<bool>(),
            overwrite in option::of(any::<bool>()),
            table_type in option::of(prop_oneof![Just("gpt".to_string()), Just("mbr".to_string())]),
        ) -> Partition {
            Partition { device, layout, overwrite, table_type }
        }
    }

    prop_compose! {
        fn arb_filesystem()(
            device in "/dev/sd[a-c]1",
            filesystem in prop_oneof![Just("ext4".to_string()), Just("xfs".to_string())],
            label in arb_name(),
            partition in option::of(Just("auto".to_string())),
            overwrite in option::of(any::<bool>()),
            extra_opts in vec(arb_text(), 0..2),
        ) -> Filesystem {
            Filesystem { device, filesystem, label, partition, overwrite, extra_opts }
        }
    }

    prop_compose! {
        fn arb_disk_setup()(
            partitions in vec(arb_partition(), 0..2),
            filesystems in vec(arb_filesystem(), 0..2),
        ) -> DiskSetup {
            DiskSetup { partitions, filesystems }
        }
    }

    prop_compose! {
        pub fn arb_spec()(
            common in arb_common(),
            init_configuration in option::of(arb_init()),
            join_configuration in option::of(arb_join()),
            files in vec(arb_file(), 0..4),
            disk_setup in option::of(arb_disk_setup()),
            mounts in vec(vec(arb_text(), 1..3), 0..2),
            verbosity in option::of(0i32..10),
            use_experimental_retry_join in any::<bool>(),
        ) -> KubeadmConfigSpec {
            KubeadmConfigSpec {
                cluster_configuration: common.cluster_configuration,
                init_configuration,
                join_configuration,
                files,
                disk_setup,
                mounts,
                pre_kubeadm_commands: common.pre_kubeadm_commands,
                post_kubeadm_commands: common.post_kubeadm_commands,
                users: common.users,
                ntp: common.ntp,
                format: common.format,
                verbosity,
                use_experimental_retry_join,
            }
        }
    }

    prop_compose! {
        fn arb_status()(
            ready in any::<bool>(),
            data_secret_name in option::of(arb_name()),
            failure_reason in arb_text(),
            failure_message in arb_text(),
            observed_generation in 0i64..100,
            conditions in arb_conditions(),
        ) -> KubeadmConfigStatus {
            KubeadmConfigStatus {
                ready,
                data_secret_name,
                failure_reason,
                failure_message,
                observed_generation,
                conditions,
            }
        }
    }

    prop_compose! {
        pub fn arb_kubeadm_config()(
            metadata in arb_object_meta(&[], &[]),
            spec in arb_spec(),
            status in arb_status(),
        ) -> KubeadmConfig {
            KubeadmConfig { type_meta: Default::default(), metadata, spec, status }
        }
    }

    prop_compose! {
        pub fn arb_kubeadm_config_template()(
            metadata in arb_object_meta(&[], &[]),
            spec in arb_spec(),
        ) -> KubeadmConfigTemplate {
            KubeadmConfigTemplate {
                type_meta: Default::default(),
                metadata,
                spec: KubeadmConfigTemplateSpec {
                    template: KubeadmConfigTemplateResource { spec },
                },
            }
        }
    }
}

/// Spoke (`v1alpha2`) strategies.
pub mod spoke {
    use super::*;
    use clusterconv_types::bootstrap::v1alpha2::*;

    prop_compose! {
        fn arb_node_registration()(
            name in arb_name(),
            cri_socket in arb_text(),
            taints in vec(arb_taint(), 0..2),
            kubelet_extra_args in arb_string_map(),
        ) -> NodeRegistrationOptions {
            NodeRegistrationOptions { name, cri_socket, taints, kubelet_extra_args }
        }
    }

    prop_compose! {
        fn arb_init()(
            node_registration in arb_node_registration(),
            local_api_endpoint in arb_kubeadm_api_endpoint(),
        ) -> InitConfiguration {
            InitConfiguration { node_registration, local_api_endpoint }
        }
    }

    prop_compose! {
        fn arb_join()(
            node_registration in arb_node_registration(),
            ca_cert_path in arb_text(),
            discovery in arb_discovery(),
            control_plane in option::of(arb_kubeadm_api_endpoint().prop_map(|local_api_endpoint| JoinControlPlane { local_api_endpoint })),
        ) -> JoinConfiguration {
            JoinConfiguration { node_registration, ca_cert_path, discovery, control_plane }
        }
    }

    prop_compose! {
        fn arb_file()(
            path in arb_path(),
            owner in prop_oneof![Just(String::new()), Just("root:root".to_string())],
            permissions in prop_oneof![Just(String::new()), Just("0600".to_string())],
            encoding in prop_oneof![Just(String::new()), Just("base64".to_string())],
            content in arb_text(),
        ) -> File {
            File { path, owner, permissions, encoding, content }
        }
    }

    prop_compose! {
        pub fn arb_spec()(
            common in arb_common(),
            init_configuration in option::of(arb_init()),
            join_configuration in option::of(arb_join()),
            files in vec(arb_file(), 0..4),
        ) -> KubeadmConfigSpec {
            KubeadmConfigSpec {
                cluster_configuration: common.cluster_configuration,
                init_configuration,
                join_configuration,
                files,
                pre_kubeadm_commands: common.pre_kubeadm_commands,
                post_kubeadm_commands: common.post_kubeadm_commands,
                users: common.users,
                ntp: common.ntp,
                format: common.format,
            }
        }
    }

    prop_compose! {
        pub fn arb_kubeadm_config()(
            metadata in arb_object_meta(&[], &[]),
            spec in arb_spec(),
            ready in any::<bool>(),
            bootstrap_data in option::of("[A-Za-z0-9+/]{0,16}"),
            error_reason in arb_text(),
            error_message in arb_text(),
        ) -> KubeadmConfig {
            KubeadmConfig {
                type_meta: Default::default(),
                metadata,
                spec,
                status: KubeadmConfigStatus { ready, bootstrap_data, error_reason, error_message },
            }
        }
    }

    prop_compose! {
        pub fn arb_kubeadm_config_template()(
            metadata in arb_object_meta(&[], &[]),
            spec in arb_spec(),
        ) -> KubeadmConfigTemplate {
            KubeadmConfigTemplate {
                type_meta: Default::default(),
                metadata,
                spec: KubeadmConfigTemplateSpec {
                    template: KubeadmConfigTemplateResource { spec },
                },
            }
        }
    }

    prop_compose! {
        pub fn arb_kubeadm_config_list()(
            metadata in arb_list_meta(),
            items in vec(arb_kubeadm_config(), 0..3),
        ) -> KubeadmConfigList {
            KubeadmConfigList { type_meta: Default::default(), metadata, items }
        }
    }

    prop_compose! {
        pub fn arb_kubeadm_config_template_list()(
            metadata in arb_list_meta(),
            items in vec(arb_kubeadm_config_template(), 0..3),
        ) -> KubeadmConfigTemplateList {
            KubeadmConfigTemplateList { type_meta: Default::default(), metadata, items }
        }
    }
}
