//! Strategies for metadata and the small shared shapes.

use chrono::{DateTime, Utc};
use clusterconv_types::api::{ClusterNetwork, MachineAddress, NetworkRanges};
use clusterconv_types::meta::{
    Condition, IntOrString, LabelSelector, LabelSelectorRequirement, ListMeta, ManagedFieldsEntry,
    ObjectMeta, ObjectReference, OwnerReference, StringMap,
};
use proptest::collection::{btree_map, vec};
use proptest::option;
use proptest::prelude::*;
use proptest::sample::subsequence;

pub fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,8}"
}

pub fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ./:_-]{0,12}"
}

pub fn arb_opt_text() -> impl Strategy<Value = Option<String>> {
    option::of(arb_text())
}

/// Timestamps at whole seconds, as the API server stores them.
pub fn arb_time() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800).prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap_or_default())
}

/// Keys never collide with any reserved or relocated key.
pub fn arb_string_map() -> impl Strategy<Value = StringMap> {
    btree_map("[a-z]{1,6}(\\.io/[a-z]{1,6})?", arb_text(), 0..3)
}

/// A string map that may also carry some of `reserved`.
pub fn arb_string_map_with(reserved: &'static [&'static str]) -> impl Strategy<Value = StringMap> {
    (
        arb_string_map(),
        subsequence(reserved, 0..=reserved.len()),
        "[a-z0-9]{0,6}",
    )
        .prop_map(|(mut map, keys, value)| {
            for key in keys {
                map.insert(key.to_string(), value.clone());
            }
            map
        })
}

prop_compose! {
    pub fn arb_owner_reference()(
        api_version in arb_text(),
        kind in arb_name(),
        name in arb_name(),
        uid in arb_text(),
        controller in option::of(any::<bool>()),
        block_owner_deletion in option::of(any::<bool>()),
    ) -> OwnerReference {
        OwnerReference { api_version, kind, name, uid, controller, block_owner_deletion }
    }
}

prop_compose! {
    pub fn arb_managed_fields_entry()(
        manager in arb_name(),
        operation in prop_oneof![Just("Apply"), Just("Update")],
        api_version in arb_text(),
        time in option::of(arb_time()),
    ) -> ManagedFieldsEntry {
        ManagedFieldsEntry { manager, operation: operation.to_string(), api_version, time }
    }
}

prop_compose! {
    fn arb_identity()(
        name in option::of(arb_name()),
        generate_name in option::of(arb_name()),
        namespace in option::of(arb_name()),
        uid in arb_opt_text(),
        resource_version in option::of("[0-9]{1,6}"),
        generation in option::of(0i64..1000),
        creation_timestamp in option::of(arb_time()),
    ) -> ObjectMeta {
        ObjectMeta {
            name,
            generate_name,
            namespace,
            uid,
            resource_version,
            generation,
            creation_timestamp,
            ..Default::default()
        }
    }
}

prop_compose! {
    /// Object metadata whose labels and annotations may carry the given reserved keys.
    pub fn arb_object_meta(
        reserved_labels: &'static [&'static str],
        reserved_annotations: &'static [&'static str],
    )(
        identity in arb_identity(),
        labels in arb_string_map_with(reserved_labels),
        annotations in arb_string_map_with(reserved_annotations),
        owner_references in vec(arb_owner_reference(), 0..2),
        finalizers in vec(arb_name(), 0..2),
        managed_fields in vec(arb_managed_fields_entry(), 0..2),
    ) -> ObjectMeta {
        ObjectMeta {
            labels,
            annotations,
            owner_references,
            finalizers,
            managed_fields,
            ..identity
        }
    }
}

prop_compose! {
    pub fn arb_list_meta()(
        resource_version in option::of("[0-9]{1,6}"),
        continue_token in arb_opt_text(),
    ) -> ListMeta {
        ListMeta { resource_version, continue_token }
    }
}

prop_compose! {
    pub fn arb_object_reference()(
        kind in arb_name(),
        namespace in arb_name(),
        name in arb_name(),
        uid in arb_text(),
        api_version in arb_text(),
        resource_version in "[0-9]{0,4}",
        field_path in arb_text(),
    ) -> ObjectReference {
        ObjectReference { kind, namespace, name, uid, api_version, resource_version, field_path }
    }
}

prop_compose! {
    pub fn arb_condition()(
        type_ in prop_oneof![Just("Ready"), Just("ControlPlaneInitialized"), Just("InfrastructureReady")],
        status in prop_oneof![Just("True"), Just("False"), Just("Unknown")],
        severity in prop_oneof![Just(""), Just("Error"), Just("Warning"), Just("Info")],
        last_transition_time in option::of(arb_time()),
        reason in arb_text(),
        message in arb_text(),
    ) -> Condition {
        Condition {
            type_: type_.to_string(),
            status: status.to_string(),
            severity: severity.to_string(),
            last_transition_time,
            reason,
            message,
        }
    }
}

pub fn arb_conditions() -> impl Strategy<Value = Vec<Condition>> {
    vec(arb_condition(), 0..3)
}

prop_compose! {
    fn arb_selector_requirement()(
        key in arb_name(),
        operator in prop_oneof![Just("In"), Just("NotIn"), Just("Exists")],
        values in vec(arb_name(), 0..2),
    ) -> LabelSelectorRequirement {
        LabelSelectorRequirement { key, operator: operator.to_string(), values }
    }
}

prop_compose! {
    pub fn arb_label_selector()(
        match_labels in arb_string_map(),
        match_expressions in vec(arb_selector_requirement(), 0..2),
    ) -> LabelSelector {
        LabelSelector { match_labels, match_expressions }
    }
}

pub fn arb_int_or_string() -> impl Strategy<Value = IntOrString> {
    prop_oneof![
        any::<i32>().prop_map(IntOrString::Int),
        "[0-9]{1,2}%".prop_map(IntOrString::String),
    ]
}

prop_compose! {
    fn arb_network_ranges()(cidr_blocks in vec("10\\.[0-9]{1,3}\\.0\\.0/16", 0..2)) -> NetworkRanges {
        NetworkRanges { cidr_blocks }
    }
}

prop_compose! {
    pub fn arb_cluster_network()(
        api_server_port in option::of(any::<i32>()),
        services in option::of(arb_network_ranges()),
        pods in option::of(arb_network_ranges()),
        service_domain in arb_text(),
    ) -> ClusterNetwork {
        ClusterNetwork { api_server_port, services, pods, service_domain }
    }
}

prop_compose! {
    pub fn arb_machine_address()(
        type_ in prop_oneof![Just("Hostname"), Just("InternalIP"), Just("ExternalDNS")],
        address in arb_text(),
    ) -> MachineAddress {
        MachineAddress { type_: type_.to_string(), address }
    }
}
