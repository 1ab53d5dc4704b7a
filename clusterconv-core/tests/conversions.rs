use clusterconv_core::types::api::{v1alpha2, v1beta1};
use clusterconv_core::types::bootstrap::{v1alpha2 as bootstrap_v1alpha2, v1beta1 as bootstrap_v1beta1};
use clusterconv_core::types::meta::{Condition, ObjectMeta, ObjectReference, is_condition_true};
use clusterconv_core::types::schema::CONVERSION_DATA_ANNOTATION;
use clusterconv_core::{ConvertError, Convertible};
use pretty_assertions::assert_eq;

fn meta(name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some("default".to_string()),
        ..Default::default()
    }
}

fn down<S: Convertible>(hub: &S::Hub) -> S {
    let mut spoke = S::default();
    spoke.convert_from(hub).expect("down");
    spoke
}

fn up<S: Convertible>(spoke: &S) -> S::Hub {
    let mut hub = S::Hub::default();
    spoke.convert_to(&mut hub).expect("up");
    hub
}

fn ready_condition(type_: &str) -> Condition {
    Condition {
        type_: type_.to_string(),
        status: "True".to_string(),
        ..Default::default()
    }
}

#[test]
fn control_plane_endpoint_moves_into_api_endpoints() {
    let mut hub = v1beta1::Cluster {
        metadata: meta("c"),
        ..Default::default()
    };
    hub.spec.control_plane_endpoint = v1beta1::ApiEndpoint {
        host: "example.com".to_string(),
        port: 6443,
    };

    let spoke: v1alpha2::Cluster = down(&hub);
    assert_eq!(
        spoke.status.api_endpoints,
        vec![v1alpha2::ApiEndpoint {
            host: "example.com".to_string(),
            port: 6443,
        }]
    );
    assert_eq!(spoke.type_meta.api_version, "cluster.x-k8s.io/v1alpha2");

    let back = up(&spoke);
    assert_eq!(back.spec.control_plane_endpoint, hub.spec.control_plane_endpoint);
    assert_eq!(back, hub_with_type_meta(hub));
}

#[test]
fn native_spoke_takes_first_endpoint_only() {
    let mut spoke = v1alpha2::Cluster {
        metadata: meta("native"),
        ..Default::default()
    };
    spoke.status.api_endpoints = vec![
        v1alpha2::ApiEndpoint {
            host: "a.example.com".to_string(),
            port: 6443,
        },
        v1alpha2::ApiEndpoint {
            host: "b.example.com".to_string(),
            port: 443,
        },
    ];
    spoke.status.control_plane_initialized = true;

    let hub = up(&spoke);
    assert_eq!(hub.spec.control_plane_endpoint.host, "a.example.com");
    assert!(is_condition_true(
        &hub.status.conditions,
        v1beta1::CONTROL_PLANE_INITIALIZED_CONDITION
    ));
    assert!(hub.metadata.annotations.is_empty());
}

#[test]
fn oversized_port_fails_without_touching_destination() {
    let mut spoke = v1alpha2::Cluster::default();
    spoke.status.api_endpoints = vec![v1alpha2::ApiEndpoint {
        host: "big".to_string(),
        port: i64::from(i32::MAX) + 1,
    }];

    let mut dst = v1beta1::Cluster {
        metadata: meta("untouched"),
        ..Default::default()
    };
    let before = dst.clone();
    let err = spoke.convert_to(&mut dst).expect_err("overflow");
    assert!(matches!(err, ConvertError::StructuralCopy(_)));
    assert_eq!(dst, before);
}

#[test]
fn hub_only_cluster_fields_survive_a_round_trip() {
    let mut hub = v1beta1::Cluster {
        metadata: meta("c"),
        ..Default::default()
    };
    hub.spec.paused = true;
    hub.spec.control_plane_ref = Some(ObjectReference {
        kind: "KubeadmControlPlane".to_string(),
        name: "cp".to_string(),
        ..Default::default()
    });
    hub.spec.topology = Some(v1beta1::Topology {
        class: "quick-start".to_string(),
        version: "v1.27.0".to_string(),
        variables: vec![v1beta1::ClusterVariable {
            name: "region".to_string(),
            value: serde_json::json!("eu-west-1"),
        }],
        ..Default::default()
    });
    hub.status.control_plane_ready = true;
    hub.status.observed_generation = 7;
    hub.status.conditions = vec![
        ready_condition("Ready"),
        ready_condition(v1beta1::CONTROL_PLANE_INITIALIZED_CONDITION),
    ];

    let spoke: v1alpha2::Cluster = down(&hub);
    assert!(spoke.status.control_plane_initialized);
    assert!(spoke.metadata.annotations.contains_key(CONVERSION_DATA_ANNOTATION));

    let back = up(&spoke);
    assert_eq!(back, hub_with_type_meta(hub));
}

fn hub_with_type_meta<H: clusterconv_core::types::Object>(mut hub: H) -> H {
    hub.stamp_type_meta();
    hub
}

#[test]
fn spoke_edits_win_over_the_stash() {
    let mut hub = v1beta1::Cluster::default();
    hub.spec.control_plane_endpoint = v1beta1::ApiEndpoint {
        host: "old.example.com".to_string(),
        port: 6443,
    };
    hub.spec.paused = true;

    let mut spoke: v1alpha2::Cluster = down(&hub);
    spoke.status.api_endpoints[0].host = "new.example.com".to_string();
    spoke.status.phase = "Provisioned".to_string();

    let back = up(&spoke);
    assert_eq!(back.spec.control_plane_endpoint.host, "new.example.com");
    assert_eq!(back.status.phase, "Provisioned");
    assert!(back.spec.paused);
}

#[test]
fn edited_cluster_name_label_wins_over_the_stash() {
    let mut hub = v1beta1::Machine {
        metadata: meta("m"),
        ..Default::default()
    };
    hub.spec.cluster_name = "old".to_string();

    let mut spoke: v1alpha2::Machine = down(&hub);
    spoke.metadata.labels.insert(
        v1alpha2::MACHINE_CLUSTER_LABEL_NAME.to_string(),
        "new".to_string(),
    );
    assert_eq!(up(&spoke).spec.cluster_name, "new");

    spoke
        .metadata
        .labels
        .remove(v1alpha2::MACHINE_CLUSTER_LABEL_NAME);
    assert_eq!(up(&spoke).spec.cluster_name, "old");
}

#[test]
fn edited_cluster_name_label_reaches_machine_deployment_template() {
    let mut hub = v1beta1::MachineDeployment {
        metadata: meta("md"),
        ..Default::default()
    };
    hub.spec.cluster_name = "old".to_string();
    hub.spec.template.spec.cluster_name = "old".to_string();

    let mut spoke: v1alpha2::MachineDeployment = down(&hub);
    spoke.metadata.labels.insert(
        v1alpha2::MACHINE_CLUSTER_LABEL_NAME.to_string(),
        "new".to_string(),
    );

    let back = up(&spoke);
    assert_eq!(back.spec.cluster_name, "new");
    assert_eq!(back.spec.template.spec.cluster_name, "new");
}

#[test]
fn control_plane_initialized_survives_stashed_conditions() {
    let hub = v1beta1::Cluster {
        metadata: meta("c"),
        ..Default::default()
    };

    let mut spoke: v1alpha2::Cluster = down(&hub);
    spoke.status.control_plane_initialized = true;

    let back = up(&spoke);
    assert!(is_condition_true(
        &back.status.conditions,
        v1beta1::CONTROL_PLANE_INITIALIZED_CONDITION
    ));
}

#[test]
fn stashed_control_plane_initialized_condition_is_kept_verbatim() {
    let mut hub = v1beta1::Cluster {
        metadata: meta("c"),
        ..Default::default()
    };
    hub.status.conditions = vec![Condition {
        reason: "Bootstrapped".to_string(),
        ..ready_condition(v1beta1::CONTROL_PLANE_INITIALIZED_CONDITION)
    }];

    let spoke: v1alpha2::Cluster = down(&hub);
    assert!(spoke.status.control_plane_initialized);
    assert_eq!(up(&spoke).status.conditions, hub.status.conditions);
}

#[test]
fn corrupt_stash_fails_and_leaves_destination_alone() {
    let mut spoke = v1alpha2::Cluster {
        metadata: meta("c"),
        ..Default::default()
    };
    spoke
        .metadata
        .annotations
        .insert(CONVERSION_DATA_ANNOTATION.to_string(), "{not json".to_string());

    let mut dst = v1beta1::Cluster {
        metadata: meta("previous"),
        ..Default::default()
    };
    dst.spec.paused = true;
    let before = dst.clone();

    let err = spoke.convert_to(&mut dst).expect_err("corrupt");
    assert!(err.is_stash_corrupt());
    assert_eq!(dst, before);
}

#[test]
fn machine_cluster_name_label_is_promoted_and_demoted() {
    let mut spoke = v1alpha2::Machine {
        metadata: meta("m"),
        ..Default::default()
    };
    spoke.metadata.labels.insert(
        v1alpha2::MACHINE_CLUSTER_LABEL_NAME.to_string(),
        "prod".to_string(),
    );
    spoke.metadata.annotations.insert(
        v1alpha2::EXCLUDE_NODE_DRAINING_ANNOTATION.to_string(),
        "true".to_string(),
    );

    let hub = up(&spoke);
    assert_eq!(hub.spec.cluster_name, "prod");
    assert!(hub.metadata.labels.is_empty());
    assert_eq!(
        hub.metadata
            .annotation(v1beta1::EXCLUDE_NODE_DRAINING_ANNOTATION),
        Some("true")
    );

    let again: v1alpha2::Machine = down(&hub);
    assert_eq!(
        again.metadata.label(v1alpha2::MACHINE_CLUSTER_LABEL_NAME),
        Some("prod")
    );
    assert_eq!(
        again
            .metadata
            .annotation(v1alpha2::EXCLUDE_NODE_DRAINING_ANNOTATION),
        Some("true")
    );
}

#[test]
fn machine_hub_only_fields_are_restored() {
    let mut hub = v1beta1::Machine {
        metadata: meta("m"),
        ..Default::default()
    };
    hub.spec.cluster_name = "prod".to_string();
    hub.spec.bootstrap.data_secret_name = Some("m-bootstrap".to_string());
    hub.spec.failure_domain = Some("az-1".to_string());
    hub.spec.node_drain_timeout = Some("10m0s".to_string());
    hub.status.observed_generation = 3;
    hub.status.node_info = Some(v1beta1::NodeSystemInfo {
        kubelet_version: "v1.27.0".to_string(),
        ..Default::default()
    });

    let spoke: v1alpha2::Machine = down(&hub);
    assert_eq!(spoke.spec.bootstrap.data, None);

    let back = up(&spoke);
    assert_eq!(back, hub_with_type_meta(hub));
}

#[test]
fn machine_deployment_revision_annotations_round_trip() {
    let mut hub = v1beta1::MachineDeployment {
        metadata: meta("md"),
        ..Default::default()
    };
    hub.metadata.annotations.insert(
        v1beta1::REVISION_ANNOTATION.to_string(),
        "4".to_string(),
    );
    hub.metadata.annotations.insert(
        v1beta1::MAX_REPLICAS_ANNOTATION.to_string(),
        "5".to_string(),
    );
    hub.spec.cluster_name = "prod".to_string();
    hub.spec.template.spec.cluster_name = "prod".to_string();
    hub.spec.strategy = Some(v1beta1::MachineDeploymentStrategy {
        type_: "RollingUpdate".to_string(),
        rolling_update: Some(v1beta1::MachineRollingUpdateDeployment {
            delete_policy: Some("Oldest".to_string()),
            ..Default::default()
        }),
    });
    hub.status.phase = v1beta1::machine_deployment_phase::RUNNING.to_string();

    let spoke: v1alpha2::MachineDeployment = down(&hub);
    assert_eq!(
        spoke.metadata.annotation(v1alpha2::REVISION_ANNOTATION),
        Some("4")
    );
    assert_eq!(
        spoke.metadata.annotation(v1alpha2::MAX_REPLICAS_ANNOTATION),
        Some("5")
    );
    assert!(
        spoke
            .metadata
            .annotation(v1beta1::REVISION_ANNOTATION)
            .is_none()
    );

    let back = up(&spoke);
    assert_eq!(back, hub_with_type_meta(hub));
}

#[test]
fn machine_deployment_restores_delete_policy_into_missing_strategy() {
    let mut hub = v1beta1::MachineDeployment::default();
    hub.spec.strategy = Some(v1beta1::MachineDeploymentStrategy {
        type_: "RollingUpdate".to_string(),
        rolling_update: Some(v1beta1::MachineRollingUpdateDeployment {
            delete_policy: Some("Newest".to_string()),
            ..Default::default()
        }),
    });

    let mut spoke: v1alpha2::MachineDeployment = down(&hub);
    spoke.spec.strategy = None;

    let back = up(&spoke);
    let rolling = back
        .spec
        .strategy
        .and_then(|s| s.rolling_update)
        .expect("materialized");
    assert_eq!(rolling.delete_policy.as_deref(), Some("Newest"));
}

#[test]
fn machine_set_label_fills_both_cluster_names() {
    let mut spoke = v1alpha2::MachineSet::default();
    spoke.metadata.labels.insert(
        v1alpha2::MACHINE_CLUSTER_LABEL_NAME.to_string(),
        "prod".to_string(),
    );
    let hub = up(&spoke);
    assert_eq!(hub.spec.cluster_name, "prod");
    assert_eq!(hub.spec.template.spec.cluster_name, "prod");
    assert!(hub.metadata.labels.is_empty());
}

#[test]
fn kubeadm_config_restores_sources_and_preflight_errors() {
    let mut hub = bootstrap_v1beta1::KubeadmConfig {
        metadata: meta("kc"),
        ..Default::default()
    };
    hub.spec.files = vec![
        bootstrap_v1beta1::File {
            path: "/etc/secret".to_string(),
            content_from: Some(bootstrap_v1beta1::FileSource {
                secret: bootstrap_v1beta1::SecretFileSource {
                    name: "creds".to_string(),
                    key: "token".to_string(),
                },
            }),
            ..Default::default()
        },
        bootstrap_v1beta1::File {
            path: "/etc/motd".to_string(),
            content: "hello".to_string(),
            ..Default::default()
        },
    ];
    let mut init = bootstrap_v1beta1::InitConfiguration::default();
    init.node_registration.ignore_preflight_errors = vec!["NumCPU".to_string()];
    hub.spec.init_configuration = Some(init);
    hub.spec.use_experimental_retry_join = true;
    hub.spec.mounts = vec![vec!["/dev/sdb".to_string(), "/data".to_string()]];
    hub.status.data_secret_name = Some("kc-data".to_string());

    let spoke: bootstrap_v1alpha2::KubeadmConfig = down(&hub);
    assert_eq!(spoke.spec.files.len(), 2);
    assert_eq!(spoke.spec.files[0].content, "");

    let back = up(&spoke);
    assert_eq!(back, hub_with_type_meta(hub));
}

#[test]
fn kubeadm_config_template_restores_nested_spec() {
    let mut hub = bootstrap_v1beta1::KubeadmConfigTemplate::default();
    let mut join = bootstrap_v1beta1::JoinConfiguration::default();
    join.node_registration.ignore_preflight_errors = vec!["Swap".to_string()];
    hub.spec.template.spec.join_configuration = Some(join);
    hub.spec.template.spec.verbosity = Some(4);

    let spoke: bootstrap_v1alpha2::KubeadmConfigTemplate = down(&hub);
    let back = up(&spoke);
    assert_eq!(back, hub_with_type_meta(hub));
}
