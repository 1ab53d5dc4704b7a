//! `cluster.x-k8s.io` resource types.
//!
//! Shapes that are identical in both versions live here and are shared by the hub and
//! the spoke; the structural copier clones them as a whole.

use serde::{Deserialize, Serialize};

pub mod v1alpha2;
pub mod v1beta1;

/// Cluster-wide network configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNetwork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_server_port: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<NetworkRanges>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pods: Option<NetworkRanges>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_domain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRanges {
    #[serde(default)]
    pub cidr_blocks: Vec<String>,
}

/// An address assigned to a machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineAddress {
    #[serde(rename = "type")]
    pub type_: String,

    pub address: String,
}
