//! Strategies for `cluster.x-k8s.io/v1alpha2` objects and lists.

use super::meta::*;
use clusterconv_types::api::v1alpha2::*;
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

const CLUSTER_NAME_LABEL: &[&str] = &[MACHINE_CLUSTER_LABEL_NAME];

const MACHINE_ANNOTATIONS: &[&str] = &[EXCLUDE_NODE_DRAINING_ANNOTATION];

const REVISION_ANNOTATIONS: &[&str] = &[
    REVISION_ANNOTATION,
    REVISION_HISTORY_ANNOTATION,
    DESIRED_REPLICAS_ANNOTATION,
    MAX_REPLICAS_ANNOTATION,
];

prop_compose! {
    fn arb_api_endpoint()(
        host in "[a-z]{1,8}\\.example\\.com",
        port in any::<i32>(),
    ) -> ApiEndpoint {
        ApiEndpoint { host, port: i64::from(port) }
    }
}

prop_compose! {
    pub fn arb_cluster()(
        metadata in arb_object_meta(&[], &[]),
        cluster_network in option::of(arb_cluster_network()),
        infrastructure_ref in option::of(arb_object_reference()),
        api_endpoints in vec(arb_api_endpoint(), 0..2),
        error_reason in arb_opt_text(),
        error_message in arb_opt_text(),
        phase in arb_text(),
        infrastructure_ready in any::<bool>(),
        control_plane_initialized in any::<bool>(),
    ) -> Cluster {
        Cluster {
            type_meta: Default::default(),
            metadata,
            spec: ClusterSpec { cluster_network, infrastructure_ref },
            status: ClusterStatus {
                api_endpoints,
                error_reason,
                error_message,
                phase,
                infrastructure_ready,
                control_plane_initialized,
            },
        }
    }
}

prop_compose! {
    pub fn arb_embedded_meta()(
        name in option::of(arb_name()),
        generate_name in option::of(arb_name()),
        namespace in option::of(arb_name()),
        labels in arb_string_map(),
        annotations in arb_string_map(),
        owner_references in vec(arb_owner_reference(), 0..2),
    ) -> EmbeddedObjectMeta {
        EmbeddedObjectMeta { name, generate_name, namespace, labels, annotations, owner_references }
    }
}

prop_compose! {
    pub fn arb_machine_spec()(
        metadata in arb_embedded_meta(),
        config_ref in option::of(arb_object_reference()),
        data in option::of("[A-Za-z0-9+/]{0,16}"),
        infrastructure_ref in arb_object_reference(),
        version in option::of("v1\\.[0-9]{1,2}\\.[0-9]"),
        provider_id in arb_opt_text(),
    ) -> MachineSpec {
        MachineSpec {
            metadata,
            bootstrap: Bootstrap { config_ref, data },
            infrastructure_ref,
            version,
            provider_id,
        }
    }
}

prop_compose! {
    fn arb_machine_status()(
        node_ref in option::of(arb_object_reference()),
        last_updated in option::of(arb_time()),
        version in option::of("v1\\.[0-9]{1,2}\\.[0-9]"),
        error_reason in arb_opt_text(),
        error_message in arb_opt_text(),
        addresses in vec(arb_machine_address(), 0..3),
        phase in arb_text(),
        ready in any::<(bool, bool)>(),
    ) -> MachineStatus {
        MachineStatus {
            node_ref,
            last_updated,
            version,
            error_reason,
            error_message,
            addresses,
            phase,
            bootstrap_ready: ready.0,
            infrastructure_ready: ready.1,
        }
    }
}

prop_compose! {
    pub fn arb_machine()(
        metadata in arb_object_meta(CLUSTER_NAME_LABEL, MACHINE_ANNOTATIONS),
        spec in arb_machine_spec(),
        status in arb_machine_status(),
    ) -> Machine {
        Machine { type_meta: Default::default(), metadata, spec, status }
    }
}

prop_compose! {
    fn arb_machine_template()(
        metadata in arb_embedded_meta(),
        spec in arb_machine_spec(),
    ) -> MachineTemplateSpec {
        MachineTemplateSpec { metadata, spec }
    }
}

prop_compose! {
    pub fn arb_machine_set()(
        metadata in arb_object_meta(CLUSTER_NAME_LABEL, REVISION_ANNOTATIONS),
        replicas in option::of(0i32..10),
        min_ready_seconds in 0i32..600,
        delete_policy in prop_oneof![Just(""), Just("Random"), Just("Newest"), Just("Oldest")],
        selector in arb_label_selector(),
        template in arb_machine_template(),
        status_selector in arb_text(),
        counts in (0i32..10, 0i32..10, 0i32..10, 0i32..10),
        observed_generation in 0i64..100,
        error in (arb_opt_text(), arb_opt_text()),
    ) -> MachineSet {
        MachineSet {
            type_meta: Default::default(),
            metadata,
            spec: MachineSetSpec {
                replicas,
                min_ready_seconds,
                delete_policy: delete_policy.to_string(),
                selector,
                template,
            },
            status: MachineSetStatus {
                selector: status_selector,
                replicas: counts.0,
                fully_labeled_replicas: counts.1,
                ready_replicas: counts.2,
                available_replicas: counts.3,
                observed_generation,
                error_reason: error.0,
                error_message: error.1,
            },
        }
    }
}

prop_compose! {
    fn arb_strategy()(
        type_ in prop_oneof![Just("RollingUpdate"), Just("OnDelete")],
        rolling_update in option::of((
            option::of(arb_int_or_string()),
            option::of(arb_int_or_string()),
        )),
    ) -> MachineDeploymentStrategy {
        MachineDeploymentStrategy {
            type_: type_.to_string(),
            rolling_update: rolling_update.map(|(max_unavailable, max_surge)| {
                MachineRollingUpdateDeployment { max_unavailable, max_surge }
            }),
        }
    }
}

prop_compose! {
    fn arb_machine_deployment_spec()(
        replicas in option::of(0i32..10),
        selector in arb_label_selector(),
        template in arb_machine_template(),
        strategy in option::of(arb_strategy()),
        min_ready_seconds in option::of(0i32..600),
        revision_history_limit in option::of(0i32..10),
        paused in any::<bool>(),
        progress_deadline_seconds in option::of(0i32..600),
    ) -> MachineDeploymentSpec {
        MachineDeploymentSpec {
            replicas,
            selector,
            template,
            strategy,
            min_ready_seconds,
            revision_history_limit,
            paused,
            progress_deadline_seconds,
        }
    }
}

prop_compose! {
    pub fn arb_machine_deployment()(
        metadata in arb_object_meta(CLUSTER_NAME_LABEL, REVISION_ANNOTATIONS),
        spec in arb_machine_deployment_spec(),
        observed_generation in 0i64..100,
        selector in arb_text(),
        counts in (0i32..10, 0i32..10, 0i32..10, 0i32..10, 0i32..10),
    ) -> MachineDeployment {
        MachineDeployment {
            type_meta: Default::default(),
            metadata,
            spec,
            status: MachineDeploymentStatus {
                observed_generation,
                selector,
                replicas: counts.0,
                updated_replicas: counts.1,
                ready_replicas: counts.2,
                available_replicas: counts.3,
                unavailable_replicas: counts.4,
            },
        }
    }
}

prop_compose! {
    pub fn arb_cluster_list()(
        metadata in arb_list_meta(),
        items in vec(arb_cluster(), 0..3),
    ) -> ClusterList {
        ClusterList { type_meta: Default::default(), metadata, items }
    }
}

prop_compose! {
    pub fn arb_machine_list()(
        metadata in arb_list_meta(),
        items in vec(arb_machine(), 0..3),
    ) -> MachineList {
        MachineList { type_meta: Default::default(), metadata, items }
    }
}

prop_compose! {
    pub fn arb_machine_set_list()(
        metadata in arb_list_meta(),
        items in vec(arb_machine_set(), 0..3),
    ) -> MachineSetList {
        MachineSetList { type_meta: Default::default(), metadata, items }
    }
}

prop_compose! {
    pub fn arb_machine_deployment_list()(
        metadata in arb_list_meta(),
        items in vec(arb_machine_deployment(), 0..3),
    ) -> MachineDeploymentList {
        MachineDeploymentList { type_meta: Default::default(), metadata, items }
    }
}
