//! Hub version of the kubeadm bootstrap types.

use crate::bootstrap::{ClusterConfiguration, Discovery, JoinControlPlane, KubeadmApiEndpoint, Ntp, Taint, User};
use crate::meta::{Condition, ListMeta, ObjectMeta, StringMap, TypeMeta};
use crate::schema::BOOTSTRAP_V1BETA1;
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

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_setup: Option<DiskSetup>,

    /// Each entry is one mount: device followed by mount point and options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mounts: Vec<Vec<String>>,

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

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<i32>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_experimental_retry_join: bool,
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

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_preflight_errors: Vec<String>,
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

/// A file written to the node before kubeadm runs.
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

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_from: Option<FileSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSource {
    pub secret: SecretFileSource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretFileSource {
    pub name: String,

    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskSetup {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partitions: Vec<Partition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filesystems: Vec<Filesystem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    pub device: String,

    #[serde(default)]
    pub layout: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filesystem {
    pub device: String,

    pub filesystem: String,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_opts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeadmConfigStatus {
    #[serde(default)]
    pub ready: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_secret_name: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub failure_reason: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub failure_message: String,

    #[serde(default)]
    pub observed_generation: i64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
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

impl_object!(KubeadmConfig, BOOTSTRAP_V1BETA1, "KubeadmConfig");
impl_object!(KubeadmConfigTemplate, BOOTSTRAP_V1BETA1, "KubeadmConfigTemplate");

impl crate::Hub for KubeadmConfig {}
impl crate::Hub for KubeadmConfigTemplate {}

impl_list!(KubeadmConfigList, KubeadmConfig, BOOTSTRAP_V1BETA1, "KubeadmConfigList");
impl_list!(
    KubeadmConfigTemplateList,
    KubeadmConfigTemplate,
    BOOTSTRAP_V1BETA1,
    "KubeadmConfigTemplateList"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_content_from_uses_secret_reference() {
        let file: File = serde_json::from_value(serde_json::json!({
            "path": "/etc/kubernetes/azure.json",
            "contentFrom": { "secret": { "name": "azure-json", "key": "control-plane-azure.json" } },
        }))
        .expect("deserialize");

        assert!(file.content.is_empty());
        assert_eq!(
            file.content_from.map(|c| c.secret.name),
            Some("azure-json".to_string())
        );
    }
}
