//! `bootstrap.cluster.x-k8s.io` kubeadm types.
//!
//! The kubeadm configuration documents are largely identical across versions. The
//! shared parts live here; node registration, init/join configuration and files
//! differ and are defined per version.

use crate::meta::StringMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod v1alpha2;
pub mod v1beta1;

/// Supported bootstrap data formats.
pub mod format {
    pub const CLOUD_CONFIG: &str = "cloud-config";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfiguration {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kubernetes_version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub control_plane_endpoint: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cluster_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_repository: String,

    #[serde(default)]
    pub networking: Networking,

    #[serde(default)]
    pub api_server: ControlPlaneComponent,

    #[serde(default)]
    pub controller_manager: ControlPlaneComponent,

    #[serde(default)]
    pub scheduler: ControlPlaneComponent,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub feature_gates: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Networking {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_subnet: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pod_subnet: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dns_domain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneComponent {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_args: StringMap,
}

/// Address the local API server advertises and binds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeadmApiEndpoint {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub advertise_address: String,

    #[serde(default)]
    pub bind_port: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discovery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap_token: Option<BootstrapTokenDiscovery>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileDiscovery>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tls_bootstrap_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapTokenDiscovery {
    #[serde(default)]
    pub token: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_server_endpoint: String,

    #[serde(default, rename = "caCertHashes", skip_serializing_if = "Vec::is_empty")]
    pub ca_cert_hashes: Vec<String>,

    #[serde(default, rename = "unsafeSkipCAVerification")]
    pub unsafe_skip_ca_verification: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiscovery {
    pub kube_config_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinControlPlane {
    #[serde(default, rename = "localAPIEndpoint")]
    pub local_api_endpoint: KubeadmApiEndpoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taint {
    pub key: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    pub effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gecos: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_password: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sudo: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_authorized_keys: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ntp {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
