//! Spoke version of the `cluster.x-k8s.io` types.

use crate::api::{ClusterNetwork, MachineAddress};
use crate::meta::{
    IntOrString, LabelSelector, ListMeta, ObjectMeta, ObjectReference, OwnerReference, StringMap,
    TypeMeta,
};
use crate::schema::CLUSTER_V1ALPHA2;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label naming the cluster a machine belongs to. The hub promotes it to `spec.clusterName`.
pub const MACHINE_CLUSTER_LABEL_NAME: &str = "cluster.x-k8s.io/cluster-name";

pub const EXCLUDE_NODE_DRAINING_ANNOTATION: &str = "machine.cluster.k8s.io/exclude-node-draining";

pub const REVISION_ANNOTATION: &str = "machinedeployment.clusters.k8s.io/revision";
pub const REVISION_HISTORY_ANNOTATION: &str = "machinedeployment.clusters.k8s.io/revision-history";
pub const DESIRED_REPLICAS_ANNOTATION: &str = "machinedeployment.clusters.k8s.io/desired-replicas";
pub const MAX_REPLICAS_ANNOTATION: &str = "machinedeployment.clusters.k8s.io/max-replicas";

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

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_network: Option<ClusterNetwork>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure_ref: Option<ObjectReference>,
}

/// An API server endpoint. The port is an unsized integer in this version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpoint {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub port: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStatus {
    #[serde(default, rename = "apiEndpoints", skip_serializing_if = "Vec::is_empty")]
    pub api_endpoints: Vec<ApiEndpoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase: String,

    #[serde(default)]
    pub infrastructure_ready: bool,

    #[serde(default)]
    pub control_plane_initialized: bool,
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

/// Object metadata embedded in machine specs and templates.
///
/// Only labels and annotations survive a conversion; the remaining fields have no
/// counterpart in the hub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: StringMap,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: StringMap,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owner_references: Vec<OwnerReference>,
}

impl EmbeddedObjectMeta {
    /// True when any field other than labels and annotations is set.
    pub fn has_identity(&self) -> bool {
        self.name.is_some()
            || self.generate_name.is_some()
            || self.namespace.is_some()
            || !self.owner_references.is_empty()
    }
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
    pub metadata: EmbeddedObjectMeta,

    #[serde(default)]
    pub bootstrap: Bootstrap,

    #[serde(default)]
    pub infrastructure_ref: ObjectReference,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, rename = "providerID", skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bootstrap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_ref: Option<ObjectReference>,

    /// Inline bootstrap data. Has no hub counterpart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_ref: Option<ObjectReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<MachineAddress>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase: String,

    #[serde(default)]
    pub bootstrap_ready: bool,

    #[serde(default)]
    pub infrastructure_ready: bool,
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
    pub metadata: EmbeddedObjectMeta,

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

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
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
    pub error_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
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
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
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

impl_object!(Cluster, CLUSTER_V1ALPHA2, "Cluster");
impl_object!(Machine, CLUSTER_V1ALPHA2, "Machine");
impl_object!(MachineSet, CLUSTER_V1ALPHA2, "MachineSet");
impl_object!(MachineDeployment, CLUSTER_V1ALPHA2, "MachineDeployment");

impl_list!(ClusterList, Cluster, CLUSTER_V1ALPHA2, "ClusterList");
impl_list!(MachineList, Machine, CLUSTER_V1ALPHA2, "MachineList");
impl_list!(MachineSetList, MachineSet, CLUSTER_V1ALPHA2, "MachineSetList");
impl_list!(
    MachineDeploymentList,
    MachineDeployment,
    CLUSTER_V1ALPHA2,
    "MachineDeploymentList"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_status_reads_api_endpoints() {
        let status: ClusterStatus = serde_json::from_value(serde_json::json!({
            "apiEndpoints": [{ "host": "example.com", "port": 6443 }],
            "errorReason": "InvalidConfiguration",
        }))
        .expect("deserialize");

        assert_eq!(status.api_endpoints.len(), 1);
        assert_eq!(status.api_endpoints[0].port, 6443);
        assert_eq!(status.error_reason.as_deref(), Some("InvalidConfiguration"));
    }

    #[test]
    fn embedded_meta_identity_ignores_labels() {
        let mut meta = EmbeddedObjectMeta::default();
        meta.labels.insert("a".to_string(), "b".to_string());
        assert!(!meta.has_identity());

        meta.name = Some("tmpl".to_string());
        assert!(meta.has_identity());
    }
}
