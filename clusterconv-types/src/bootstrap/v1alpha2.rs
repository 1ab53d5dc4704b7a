//! Spoke version of the kubeadm bootstrap types.

use crate::bootstrap::{ClusterConfiguration, Discovery, JoinControlPlane, KubeadmApiEndpoint, Ntp, Taint, User};
use crate::meta::{ListMeta, ObjectMeta, StringMap, TypeMeta};
use crate::schema::BOOTSTRAP_V1ALPHA2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubeadmConfig {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: KubeadmConfigSpec,

    #[serde(default)]
    pub status: KubeadmConfigStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeadmConfigSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_configuration: Option<ClusterConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_configuration: Option<InitConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_configuration: Option<JoinConfiguration>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pre_kubeadm_commands: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_kubeadm_commands: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,

    #[serde(default, rename = "ntp", skip_serializing_if = "Option::is_none")]
    pub ntp: Option<Ntp>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRegistrationOptions {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, rename = "criSocket", skip_serializing_if = "String::is_empty")]
    pub cri_socket: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taints: Vec<Taint>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub kubelet_extra_args: StringMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitConfiguration {
    #[serde(default)]
    pub node_registration: NodeRegistrationOptions,

    #[serde(default, rename = "localAPIEndpoint")]
    pub local_api_endpoint: KubeadmApiEndpoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinConfiguration {
    #[serde(default)]
    pub node_registration: NodeRegistrationOptions,

    #[serde(default, rename = "caCertPath", skip_serializing_if = "String::is_empty")]
    pub ca_cert_path: String,

    #[serde(default)]
    pub discovery: Discovery,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane: Option<JoinControlPlane>,
}

/// A file written to the node. Content is always inline in this version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub path: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub permissions: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub encoding: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeadmConfigStatus {
    #[serde(default)]
    pub ready: bool,

    /// Inline bootstrap payload. The hub references a secret instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap_data: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_reason: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubeadmConfigList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<KubeadmConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubeadmConfigTemplate {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: KubeadmConfigTemplateSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeadmConfigTemplateSpec {
    #[serde(default)]
    pub template: KubeadmConfigTemplateResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeadmConfigTemplateResource {
    #[serde(default)]
    pub spec: KubeadmConfigSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubeadmConfigTemplateList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<KubeadmConfigTemplate>,
}

impl_object!(KubeadmConfig, BOOTSTRAP_V1ALPHA2, "KubeadmConfig");
impl_object!(KubeadmConfigTemplate, BOOTSTRAP_V1ALPHA2, "KubeadmConfigTemplate");

impl_list!(KubeadmConfigList, KubeadmConfig, BOOTSTRAP_V1ALPHA2, "KubeadmConfigList");
impl_list!(
    KubeadmConfigTemplateList,
    KubeadmConfigTemplate,
    BOOTSTRAP_V1ALPHA2,
    "KubeadmConfigTemplateList"
);
