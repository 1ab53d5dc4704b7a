//! Strategies for `cluster.x-k8s.io/v1beta1` objects.

use super::meta::*;
use clusterconv_types::api::v1beta1::*;
use proptest::collection::{btree_map, vec};
use proptest::option;
use proptest::prelude::*;
use serde_json::Value;

const MACHINE_ANNOTATIONS: &[&str] = &[EXCLUDE_NODE_DRAINING_ANNOTATION];

const REVISION_ANNOTATIONS: &[&str] = &[
    REVISION_ANNOTATION,
    REVISION_HISTORY_ANNOTATION,
    DESIRED_REPLICAS_ANNOTATION,
    MAX_REPLICAS_ANNOTATION,
];

fn arb_json() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_text().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

prop_compose! {
    pub fn arb_template_meta()(
        labels in arb_string_map(),
        annotations in arb_string_map(),
    ) -> TemplateMeta {
        TemplateMeta { labels, annotations }
    }
}

prop_compose! {
    fn arb_machine_deployment_topology()(
        metadata in arb_template_meta(),
        class in arb_name(),
        name in arb_name(),
        failure_domain in option::of(arb_name()),
        replicas in option::of(0i32..10),
    ) -> MachineDeploymentTopology {
        MachineDeploymentTopology { metadata, class, name, failure_domain, replicas }
    }
}

prop_compose! {
    fn arb_cluster_variable()(name in arb_name(), value in arb_json()) -> ClusterVariable {
        ClusterVariable { name, value }
    }
}

prop_compose! {
    fn arb_topology()(
        class in arb_name(),
        version in "v1\\.[0-9]{1,2}\\.[0-9]",
        rollout_after in option::of(arb_time()),
        control_plane_metadata in arb_template_meta(),
        control_plane_replicas in option::of(0i32..5),
        workers in option::of(vec(arb_machine_deployment_topology(), 0..3)),
        variables in vec(arb_cluster_variable(), 0..3),
    ) -> Topology {
        Topology {
            class,
            version,
            rollout_after,
            control_plane: ControlPlaneTopology {
                metadata: control_plane_metadata,
                replicas: control_plane_replicas,
            },
            workers: workers.map(|machine_deployments| WorkersTopology { machine_deployments }),
            variables,
        }
    }
}

prop_compose! {
    fn arb_failure_domain()(
        control_plane in any::<bool>(),
        attributes in arb_string_map(),
    ) -> FailureDomainSpec {
        FailureDomainSpec { control_plane, attributes }
    }
}

prop_compose! {
    fn arb_api_endpoint()(host in prop_oneof![Just(String::new()), arb_name()], port in any::<i32>()) -> ApiEndpoint {
        ApiEndpoint { host, port }
    }
}

prop_compose! {
    fn arb_cluster_spec()(
        paused in any::<bool>(),
        cluster_network in option::of(arb_cluster_network()),
        control_plane_endpoint in arb_api_endpoint(),
        control_plane_ref in option::of(arb_object_reference()),
        infrastructure_ref in option::of(arb_object_reference()),
        topology in option::of(arb_topology()),
    ) -> ClusterSpec {
        ClusterSpec {
            paused,
            cluster_network,
            control_plane_endpoint,
            control_plane_ref,
            infrastructure_ref,
            topology,
        }
    }
}

prop_compose! {
    fn arb_cluster_status()(
        failure_domains in btree_map(arb_name(), arb_failure_domain(), 0..3),
        failure_reason in arb_opt_text(),
        failure_message in arb_opt_text(),
        phase in arb_text(),
        infrastructure_ready in any::<bool>(),
        control_plane_ready in any::<bool>(),
        conditions in arb_conditions(),
        observed_generation in 0i64..100,
    ) -> ClusterStatus {
        ClusterStatus {
            failure_domains,
            failure_reason,
            failure_message,
            phase,
            infrastructure_ready,
            control_plane_ready,
            conditions,
            observed_generation,
        }
    }
}

prop_compose! {
    pub fn arb_cluster()(
        metadata in arb_object_meta(&[], &[]),
        spec in arb_cluster_spec(),
        status in arb_cluster_status(),
    ) -> Cluster {
        Cluster { type_meta: Default::default(), metadata, spec, status }
    }
}

prop_compose! {
    pub fn arb_machine_spec()(
        cluster_name in prop_oneof![Just(String::new()), arb_name()],
        config_ref in option::of(arb_object_reference()),
        data_secret_name in option::of(arb_name()),
        infrastructure_ref in arb_object_reference(),
        version in option::of("v1\\.[0-9]{1,2}\\.[0-9]"),
        provider_id in arb_opt_text(),
        failure_domain in option::of(arb_name()),
        node_drain_timeout in option::of("[0-9]{1,2}m0s"),
    ) -> MachineSpec {
        MachineSpec {
            cluster_name,
            bootstrap: Bootstrap { config_ref, data_secret_name },
            infrastructure_ref,
            version,
            provider_id,
            failure_domain,
            node_drain_timeout,
        }
    }
}

prop_compose! {
    fn arb_node_info()(
        machine_id in arb_text(),
        kernel_version in arb_text(),
        os_image in arb_text(),
        container_runtime_version in arb_text(),
        kubelet_version in arb_text(),
        operating_system in prop_oneof![Just("linux"), Just("windows")],
        architecture in prop_oneof![Just("amd64"), Just("arm64")],
    ) -> NodeSystemInfo {
        NodeSystemInfo {
            machine_id,
            kernel_version,
            os_image,
            container_runtime_version,
            kubelet_version,
            operating_system: operating_system.to_string(),
            architecture: architecture.to_string(),
        }
    }
}

prop_compose! {
    fn arb_machine_status()(
        node_ref in option::of(arb_object_reference()),
        node_info in option::of(arb_node_info()),
        last_updated in option::of(arb_time()),
        failure_reason in arb_opt_text(),
        failure_message in arb_opt_text(),
        addresses in vec(arb_machine_address(), 0..3),
        phase in arb_text(),
        ready in any::<(bool, bool)>(),
        observed_generation in 0i64..100,
        conditions in arb_conditions(),
    ) -> MachineStatus {
        MachineStatus {
            node_ref,
            node_info,
            last_updated,
            failure_reason,
            failure_message,
            addresses,
            phase,
            bootstrap_ready: ready.0,
            infrastructure_ready: ready.1,
            observed_generation,
            conditions,
        }
    }
}

prop_compose! {
    pub fn arb_machine()(
        metadata in arb_object_meta(&[], MACHINE_ANNOTATIONS),
        spec in arb_machine_spec(),
        status in arb_machine_status(),
    ) -> Machine {
        Machine { type_meta: Default::default(), metadata, spec, status }
    }
}

prop_compose! {
    fn arb_machine_template()(
        metadata in arb_template_meta(),
        spec in arb_machine_spec(),
    ) -> MachineTemplateSpec {
        MachineTemplateSpec { metadata, spec }
    }
}

prop_compose! {
    fn arb_machine_set_spec()(
        cluster_name in prop_oneof![Just(String::new()), arb_name()],
        replicas in option::of(0i32..10),
        min_ready_seconds in 0i32..600,
        delete_policy in prop_oneof![Just(""), Just("Random"), Just("Newest"), Just("Oldest")],
        selector in arb_label_selector(),
        template in arb_machine_template(),
    ) -> MachineSetSpec {
        MachineSetSpec {
            cluster_name,
            replicas,
            min_ready_seconds,
            delete_policy: delete_policy.to_string(),
            selector,
            template,
        }
    }
}

prop_compose! {
    fn arb_machine_set_status()(
        selector in arb_text(),
        replicas in (0i32..10, 0i32..10, 0i32..10, 0i32..10),
        observed_generation in 0i64..100,
        failure_reason in arb_opt_text(),
        failure_message in arb_opt_text(),
        conditions in arb_conditions(),
    ) -> MachineSetStatus {
        MachineSetStatus {
            selector,
            replicas: replicas.0,
            fully_labeled_replicas: replicas.1,
            ready_replicas: replicas.2,
            available_replicas: replicas.3,
            observed_generation,
            failure_reason,
            failure_message,
            conditions,
        }
    }
}

prop_compose! {
    pub fn arb_machine_set()(
        metadata in arb_object_meta(&[], REVISION_ANNOTATIONS),
        spec in arb_machine_set_spec(),
        status in arb_machine_set_status(),
    ) -> MachineSet {
        MachineSet { type_meta: Default::default(), metadata, spec, status }
    }
}

prop_compose! {
    fn arb_rolling_update()(
        max_unavailable in option::of(arb_int_or_string()),
        max_surge in option::of(arb_int_or_string()),
        delete_policy in option::of(prop_oneof![Just("Random"), Just("Newest"), Just("Oldest")]),
    ) -> MachineRollingUpdateDeployment {
        MachineRollingUpdateDeployment {
            max_unavailable,
            max_surge,
            delete_policy: delete_policy.map(str::to_string),
        }
    }
}

prop_compose! {
    fn arb_strategy()(
        type_ in prop_oneof![Just("RollingUpdate"), Just("OnDelete")],
        rolling_update in option::of(arb_rolling_update()),
    ) -> MachineDeploymentStrategy {
        MachineDeploymentStrategy { type_: type_.to_string(), rolling_update }
    }
}

prop_compose! {
    fn arb_machine_deployment_spec()(
        cluster_name in prop_oneof![Just(String::new()), arb_name()],
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
            cluster_name,
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
    fn arb_machine_deployment_status()(
        observed_generation in 0i64..100,
        selector in arb_text(),
        replicas in (0i32..10, 0i32..10, 0i32..10, 0i32..10, 0i32..10),
        phase in prop_oneof![
            Just(machine_deployment_phase::SCALING_UP),
            Just(machine_deployment_phase::SCALING_DOWN),
            Just(machine_deployment_phase::RUNNING),
            Just(machine_deployment_phase::FAILED),
            Just(machine_deployment_phase::UNKNOWN),
        ],
        conditions in arb_conditions(),
    ) -> MachineDeploymentStatus {
        MachineDeploymentStatus {
            observed_generation,
            selector,
            replicas: replicas.0,
            updated_replicas: replicas.1,
            ready_replicas: replicas.2,
            available_replicas: replicas.3,
            unavailable_replicas: replicas.4,
            phase: phase.to_string(),
            conditions,
        }
    }
}

prop_compose! {
    pub fn arb_machine_deployment()(
        metadata in arb_object_meta(&[], REVISION_ANNOTATIONS),
        spec in arb_machine_deployment_spec(),
        status in arb_machine_deployment_status(),
    ) -> MachineDeployment {
        MachineDeployment { type_meta: Default::default(), metadata, spec, status }
    }
}
