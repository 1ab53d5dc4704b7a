//! Documented round-trip exclusions.
//!
//! Each `normalize` pins the fields of a generated value that a conversion provably
//! cannot carry, so the remaining fields must survive exactly. Adding a relocation
//! rule without adjusting these makes the property tests fail.

use clusterconv_relocate::{RelocationTable, table_for};
use clusterconv_types::api::{v1alpha2 as spoke, v1beta1 as hub};
use clusterconv_types::bootstrap::{v1alpha2 as bootstrap_spoke, v1beta1 as bootstrap_hub};
use clusterconv_types::meta::ObjectMeta;
use clusterconv_types::schema::CONVERSION_DATA_ANNOTATION;
use clusterconv_types::{Object, copy::narrow_i32};
use std::collections::BTreeSet;

/// The fixed value `ClusterVariable.value` is pinned to.
pub const PINNED_VARIABLE_VALUE: &str = "test-string";

/// Pins fields a conversion cannot carry.
pub trait Exclusions {
    fn normalize(&mut self);
}

fn table_of<T: Object>() -> Option<&'static RelocationTable> {
    table_for(T::KIND)
}

/// Hub metadata never carries spoke-version keys, the promoted label or a stash.
fn normalize_hub_meta(meta: &mut ObjectMeta, table: Option<&RelocationTable>) {
    meta.annotations.remove(CONVERSION_DATA_ANNOTATION);
    let Some(table) = table else {
        return;
    };
    for rename in table.annotations {
        meta.annotations.remove(rename.spoke);
    }
    if let Some(promotion) = table.promotion {
        meta.labels.remove(promotion.label);
    }
}

/// Spoke metadata never carries hub-version keys or a stash, and an empty promoted
/// label has no hub value to come back from.
fn normalize_spoke_meta(meta: &mut ObjectMeta, table: Option<&RelocationTable>) {
    meta.annotations.remove(CONVERSION_DATA_ANNOTATION);
    let Some(table) = table else {
        return;
    };
    for rename in table.annotations {
        meta.annotations.remove(rename.hub);
    }
    if let Some(promotion) = table.promotion
        && meta.label(promotion.label) == Some("")
    {
        meta.labels.remove(promotion.label);
    }
}

impl Exclusions for hub::Cluster {
    fn normalize(&mut self) {
        normalize_hub_meta(&mut self.metadata, table_of::<Self>());
        if let Some(topology) = &mut self.spec.topology {
            for variable in &mut topology.variables {
                variable.value = serde_json::Value::from(PINNED_VARIABLE_VALUE);
            }
        }
    }
}

impl Exclusions for hub::Machine {
    fn normalize(&mut self) {
        normalize_hub_meta(&mut self.metadata, table_of::<Self>());
    }
}

impl Exclusions for hub::MachineSet {
    fn normalize(&mut self) {
        normalize_hub_meta(&mut self.metadata, table_of::<Self>());
        self.spec.template.spec.cluster_name = self.spec.cluster_name.clone();
    }
}

impl Exclusions for hub::MachineDeployment {
    fn normalize(&mut self) {
        normalize_hub_meta(&mut self.metadata, table_of::<Self>());
        self.spec.template.spec.cluster_name = self.spec.cluster_name.clone();
    }
}

/// A file sourced from a secret has no inline content, and paths are unique.
fn normalize_files(files: &mut Vec<bootstrap_hub::File>) {
    let mut seen = BTreeSet::new();
    files.retain(|file| seen.insert(file.path.clone()));
    for file in files.iter_mut() {
        if file.content_from.is_some() {
            file.content.clear();
        }
    }
}

impl Exclusions for bootstrap_hub::KubeadmConfig {
    fn normalize(&mut self) {
        normalize_hub_meta(&mut self.metadata, table_of::<Self>());
        normalize_files(&mut self.spec.files);
    }
}

impl Exclusions for bootstrap_hub::KubeadmConfigTemplate {
    fn normalize(&mut self) {
        normalize_hub_meta(&mut self.metadata, table_of::<Self>());
        normalize_files(&mut self.spec.template.spec.files);
    }
}

impl Exclusions for spoke::Cluster {
    fn normalize(&mut self) {
        normalize_spoke_meta(&mut self.metadata, table_of::<Self>());

        let endpoints = &mut self.status.api_endpoints;
        endpoints.truncate(1);
        if let Some(endpoint) = endpoints.first_mut()
            && narrow_i32("port", endpoint.port).is_err()
        {
            endpoint.port = endpoint.port.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
        }
        endpoints.retain(|e| !(e.host.is_empty() && e.port == 0));
    }
}

fn normalize_spoke_machine_spec(spec: &mut spoke::MachineSpec) {
    spec.metadata = Default::default();
    spec.bootstrap.data = None;
}

fn normalize_spoke_template(template: &mut spoke::MachineTemplateSpec) {
    let meta = &mut template.metadata;
    meta.name = None;
    meta.generate_name = None;
    meta.namespace = None;
    meta.owner_references.clear();
    normalize_spoke_machine_spec(&mut template.spec);
}

impl Exclusions for spoke::Machine {
    fn normalize(&mut self) {
        normalize_spoke_meta(&mut self.metadata, table_of::<Self>());
        normalize_spoke_machine_spec(&mut self.spec);
        self.status.version = None;
    }
}

impl Exclusions for spoke::MachineSet {
    fn normalize(&mut self) {
        normalize_spoke_meta(&mut self.metadata, table_of::<Self>());
        normalize_spoke_template(&mut self.spec.template);
    }
}

impl Exclusions for spoke::MachineDeployment {
    fn normalize(&mut self) {
        normalize_spoke_meta(&mut self.metadata, table_of::<Self>());
        normalize_spoke_template(&mut self.spec.template);
    }
}

impl Exclusions for bootstrap_spoke::KubeadmConfig {
    fn normalize(&mut self) {
        normalize_spoke_meta(&mut self.metadata, table_of::<Self>());
        self.status.bootstrap_data = None;
    }
}

impl Exclusions for bootstrap_spoke::KubeadmConfigTemplate {
    fn normalize(&mut self) {
        normalize_spoke_meta(&mut self.metadata, table_of::<Self>());
    }
}

/// List items are copied structurally, so relocated cluster fields do not survive.
/// Copied items always carry their own `apiVersion`/`kind`.
impl Exclusions for spoke::ClusterList {
    fn normalize(&mut self) {
        for item in &mut self.items {
            item.normalize();
            item.stamp_type_meta();
            item.status.api_endpoints.clear();
            item.status.control_plane_initialized = false;
        }
    }
}

macro_rules! list_exclusions {
    ($($list:ty),* $(,)?) => {
        $(
            impl Exclusions for $list {
                fn normalize(&mut self) {
                    for item in &mut self.items {
                        item.normalize();
                        item.stamp_type_meta();
                    }
                }
            }
        )*
    };
}

list_exclusions!(
    spoke::MachineList,
    spoke::MachineSetList,
    spoke::MachineDeploymentList,
    bootstrap_spoke::KubeadmConfigList,
    bootstrap_spoke::KubeadmConfigTemplateList,
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spoke_cluster_keeps_one_endpoint_within_range() {
        let mut cluster = spoke::Cluster::default();
        cluster.status.api_endpoints = vec![
            spoke::ApiEndpoint {
                host: "a".to_string(),
                port: i64::MAX,
            },
            spoke::ApiEndpoint {
                host: "b".to_string(),
                port: 1,
            },
        ];
        cluster.normalize();
        assert_eq!(
            cluster.status.api_endpoints,
            vec![spoke::ApiEndpoint {
                host: "a".to_string(),
                port: i64::from(i32::MAX),
            }]
        );
    }

    #[test]
    fn hub_files_are_unique_and_sourced_files_are_empty() {
        let mut config = bootstrap_hub::KubeadmConfig::default();
        config.spec.files = vec![
            bootstrap_hub::File {
                path: "/etc/a".to_string(),
                content: "inline".to_string(),
                content_from: Some(Default::default()),
                ..Default::default()
            },
            bootstrap_hub::File {
                path: "/etc/a".to_string(),
                ..Default::default()
            },
        ];
        config.normalize();
        assert_eq!(config.spec.files.len(), 1);
        assert_eq!(config.spec.files[0].content, "");
    }

    #[test]
    fn empty_cluster_name_label_is_dropped() {
        let mut machine = spoke::Machine::default();
        machine
            .metadata
            .labels
            .insert(spoke::MACHINE_CLUSTER_LABEL_NAME.to_string(), String::new());
        machine.normalize();
        assert!(machine.metadata.labels.is_empty());
    }
}
