//! Hub version of the `cluster.x-k8s.io` types.

use crate::api::{ClusterNetwork, MachineAddress};
use crate::meta::{
    Condition, IntOrString, LabelSelector, ListMeta, ObjectMeta, ObjectReference, StringMap,
    TypeMeta,
};
use crate::schema::CLUSTER_V1BETA1;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label set on machines and machine templates naming the owning cluster.
pub const CLUSTER_LABEL_NAME: &str = "cluster.x-k8s.io/cluster-name";

/// Annotation that excludes a machine from node draining on deletion.
pub const EXCLUDE_NODE_DRAINING_ANNOTATION: &str = "machine.cluster.x-k8s.io/exclude-node-draining";

pub const REVISION_ANNOTATION: &str = "machinedeployment.clusters.x-k8s.io/revision";
pub const REVISION_HISTORY_ANNOTATION: &str = "machinedeployment.clusters.x-k8s.io/revision-history";
pub const DESIRED_REPLICAS_ANNOTATION: &str = "machinedeployment.clusters.x-k8s.io/desired-replicas";
pub const MAX_REPLICAS_ANNOTATION: &str = "machinedeployment.clusters.x-k8s.io/max-replicas";

/// Condition reporting that the control plane accepted its first API request.
pub const CONTROL_PLANE_INITIALIZED_CONDITION: &str = "ControlPlaneInitialized";

/// MachineDeployment phases.
pub mod machine_deployment_phase {
    pub const SCALING_UP: &str = "ScalingUp";
    pub const SCALING_DOWN: &str = "ScalingDown";
    pub const RUNNING: &str = "Running";
    pub const FAILED: &str = "Failed";
    pub const UNKNOWN: &str = "Unknown";
}

// ---------------------------------------------------------------------------
// Cluster
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: ClusterSpec,

    #[serde(default)]
    pub status: ClusterStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub paused: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_network: Option<ClusterNetwork>,

    #[serde(default)]
    pub control_plane_endpoint: ApiEndpoint,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane_ref: Option<ObjectReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure_ref: Option<ObjectReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topology: Option<Topology>,
}

/// A reachable API server endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpoint {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub port: i32,
}

impl ApiEndpoint {
    pub fn is_zero(&self) -> bool {
        self.host.is_empty() && self.port == 0
    }
}

/// Managed topology of a cluster derived from a ClusterClass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    pub class: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollout_after: Option<DateTime<Utc>>,

    #[serde(default)]
    pub control_plane: ControlPlaneTopology,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<WorkersTopology>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<ClusterVariable>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneTopology {
    #[serde(default)]
    pub metadata: TemplateMeta,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkersTopology {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub machine_deployments: Vec<MachineDeploymentTopology>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDeploymentTopology {
    #[serde(default)]
    pub metadata: TemplateMeta,

    pub class: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
}

/// A user supplied topology variable. `value` is free-form JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterVariable {
    pub name: String,

    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStatus {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub failure_domains: BTreeMap<String, FailureDomainSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase: String,

    #[serde(default)]
    pub infrastructure_ready: bool,

    #[serde(default)]
    pub control_plane_ready: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub observed_generation: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDomainSpec {
    #[serde(default)]
    pub control_plane: bool,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: StringMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<Cluster>,
}

// ---------------------------------------------------------------------------
// Machine
// ---------------------------------------------------------------------------

/// Labels and annotations carried by templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMeta {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: StringMap,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: StringMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: MachineSpec,

    #[serde(default)]
    pub status: MachineStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSpec {
    #[serde(default)]
    pub cluster_name: String,

    #[serde(default)]
    pub bootstrap: Bootstrap,

    #[serde(default)]
    pub infrastructure_ref: ObjectReference,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, rename = "providerID", skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_domain: Option<String>,

    /// Duration string such as `"10m0s"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_drain_timeout: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bootstrap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_ref: Option<ObjectReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_secret_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_ref: Option<ObjectReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_info: Option<NodeSystemInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<MachineAddress>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase: String,

    #[serde(default)]
    pub bootstrap_ready: bool,

    #[serde(default)]
    pub infrastructure_ready: bool,

    #[serde(default)]
    pub observed_generation: i64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSystemInfo {
    #[serde(rename = "machineID")]
    pub machine_id: String,

    pub kernel_version: String,

    pub os_image: String,

    pub container_runtime_version: String,

    pub kubelet_version: String,

    pub operating_system: String,

    pub architecture: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<Machine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineTemplateSpec {
    #[serde(default)]
    pub metadata: TemplateMeta,

    #[serde(default)]
    pub spec: MachineSpec,
}

// ---------------------------------------------------------------------------
// MachineSet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineSet {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: MachineSetSpec,

    #[serde(default)]
    pub status: MachineSetStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSetSpec {
    #[serde(default)]
    pub cluster_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    #[serde(default)]
    pub min_ready_seconds: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub delete_policy: String,

    #[serde(default)]
    pub selector: LabelSelector,

    #[serde(default)]
    pub template: MachineTemplateSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSetStatus {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub selector: String,

    #[serde(default)]
    pub replicas: i32,

    #[serde(default)]
    pub fully_labeled_replicas: i32,

    #[serde(default)]
    pub ready_replicas: i32,

    #[serde(default)]
    pub available_replicas: i32,

    #[serde(default)]
    pub observed_generation: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineSetList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<MachineSet>,
}

// ---------------------------------------------------------------------------
// MachineDeployment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineDeployment {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: MachineDeploymentSpec,

    #[serde(default)]
    pub status: MachineDeploymentStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDeploymentSpec {
    #[serde(default)]
    pub cluster_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    #[serde(default)]
    pub selector: LabelSelector,

    #[serde(default)]
    pub template: MachineTemplateSpec,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<MachineDeploymentStrategy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_ready_seconds: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_history_limit: Option<i32>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub paused: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_deadline_seconds: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDeploymentStrategy {
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_update: Option<MachineRollingUpdateDeployment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineRollingUpdateDeployment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<IntOrString>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_surge: Option<IntOrString>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_policy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDeploymentStatus {
    #[serde(default)]
    pub observed_generation: i64,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub selector: String,

    #[serde(default)]
    pub replicas: i32,

    #[serde(default)]
    pub updated_replicas: i32,

    #[serde(default)]
    pub ready_replicas: i32,

    #[serde(default)]
    pub available_replicas: i32,

    #[serde(default)]
    pub unavailable_replicas: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineDeploymentList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<MachineDeployment>,
}

impl_object!(Cluster, CLUSTER_V1BETA1, "Cluster");
impl_object!(Machine, CLUSTER_V1BETA1, "Machine");
impl_object!(MachineSet, CLUSTER_V1BETA1, "MachineSet");
impl_object!(MachineDeployment, CLUSTER_V1BETA1, "MachineDeployment");

impl crate::Hub for Cluster {}
impl crate::Hub for Machine {}
impl crate::Hub for MachineSet {}
impl crate::Hub for MachineDeployment {}

impl_list!(ClusterList, Cluster, CLUSTER_V1BETA1, "ClusterList");
impl_list!(MachineList, Machine, CLUSTER_V1BETA1, "MachineList");
impl_list!(MachineSetList, MachineSet, CLUSTER_V1BETA1, "MachineSetList");
impl_list!(
    MachineDeploymentList,
    MachineDeployment,
    CLUSTER_V1BETA1,
    "MachineDeploymentList"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_endpoint_zero_detection() {
        assert!(ApiEndpoint::default().is_zero());
        assert!(
            !ApiEndpoint {
                host: "example.com".to_string(),
                port: 0,
            }
            .is_zero()
        );
    }

    #[test]
    fn cluster_serializes_type_meta_inline() {
        let mut cluster = Cluster::default();
        crate::Object::stamp_type_meta(&mut cluster);
        let value = serde_json::to_value(&cluster).expect("serialize");
        assert_eq!(value["apiVersion"], "cluster.x-k8s.io/v1beta1");
        assert_eq!(value["kind"], "Cluster");
    }
}
