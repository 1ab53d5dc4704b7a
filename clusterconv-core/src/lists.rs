//! List conversions.
//!
//! List wrappers add no fields of their own, so a list converts by copying its
//! metadata and every item structurally. Items are not stashed or relocated.

use clusterconv_types::List;
use clusterconv_types::api::{v1alpha2, v1beta1};
use clusterconv_types::bootstrap::{v1alpha2 as bootstrap_v1alpha2, v1beta1 as bootstrap_v1beta1};
use tracing::debug;

/// A spoke list and its hub counterpart.
pub trait ListConvertible: List + Sized {
    type HubList: List;

    fn convert_to(&self, dst: &mut Self::HubList);

    fn convert_from(&mut self, src: &Self::HubList);
}

macro_rules! list_pair {
    ($spoke:ty => $hub:ty) => {
        impl ListConvertible for $spoke {
            type HubList = $hub;

            fn convert_to(&self, dst: &mut $hub) {
                debug!(kind = <$spoke as List>::KIND, items = self.items.len(), "list up");
                *dst = <$hub>::from(self);
            }

            fn convert_from(&mut self, src: &$hub) {
                debug!(kind = <$hub as List>::KIND, items = src.items.len(), "list down");
                *self = <$spoke>::from(src);
            }
        }
    };
}

list_pair!(v1alpha2::ClusterList => v1beta1::ClusterList);
list_pair!(v1alpha2::MachineList => v1beta1::MachineList);
list_pair!(v1alpha2::MachineSetList => v1beta1::MachineSetList);
list_pair!(v1alpha2::MachineDeploymentList => v1beta1::MachineDeploymentList);
list_pair!(bootstrap_v1alpha2::KubeadmConfigList => bootstrap_v1beta1::KubeadmConfigList);
list_pair!(
    bootstrap_v1alpha2::KubeadmConfigTemplateList => bootstrap_v1beta1::KubeadmConfigTemplateList
);

#[cfg(test)]
mod tests {
    use super::*;
    use clusterconv_types::meta::ObjectMeta;
    use pretty_assertions::assert_eq;

    #[test]
    fn machine_list_copies_items_without_relocating() {
        let mut machine = v1alpha2::Machine::default();
        machine.metadata = ObjectMeta::named("m-0");
        machine.metadata.labels.insert(
            v1alpha2::MACHINE_CLUSTER_LABEL_NAME.to_string(),
            "prod".to_string(),
        );
        let spoke = v1alpha2::MachineList {
            items: vec![machine],
            ..Default::default()
        };

        let mut hub = v1beta1::MachineList::default();
        spoke.convert_to(&mut hub);

        assert_eq!(hub.type_meta.api_version, "cluster.x-k8s.io/v1beta1");
        assert_eq!(hub.type_meta.kind, "MachineList");
        assert_eq!(hub.items.len(), 1);
        assert_eq!(hub.items[0].metadata.name.as_deref(), Some("m-0"));
        assert_eq!(hub.items[0].spec.cluster_name, "");
        assert_eq!(
            hub.items[0]
                .metadata
                .label(v1alpha2::MACHINE_CLUSTER_LABEL_NAME),
            Some("prod")
        );
    }

    #[test]
    fn cluster_list_down_keeps_list_meta() {
        let mut hub = v1beta1::ClusterList::default();
        hub.metadata.resource_version = Some("42".to_string());
        hub.items.push(v1beta1::Cluster::default());

        let mut spoke = v1alpha2::ClusterList::default();
        spoke.convert_from(&hub);

        assert_eq!(spoke.type_meta.api_version, "cluster.x-k8s.io/v1alpha2");
        assert_eq!(spoke.metadata.resource_version.as_deref(), Some("42"));
        assert_eq!(spoke.items.len(), 1);
        assert_eq!(spoke.items[0].type_meta.kind, "Cluster");
    }
}
