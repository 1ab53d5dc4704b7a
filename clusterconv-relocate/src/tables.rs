//! Per-kind relocation tables.

use crate::{AnnotationRename, FieldMove, LabelPromotion, StatusRename};
use clusterconv_types::api::{v1alpha2, v1beta1};

pub const EXCLUDE_NODE_DRAINING: &[AnnotationRename] = &[AnnotationRename {
    spoke: v1alpha2::EXCLUDE_NODE_DRAINING_ANNOTATION,
    hub: v1beta1::EXCLUDE_NODE_DRAINING_ANNOTATION,
}];

pub const MACHINE_DEPLOYMENT_REVISIONS: &[AnnotationRename] = &[
    AnnotationRename {
        spoke: v1alpha2::REVISION_ANNOTATION,
        hub: v1beta1::REVISION_ANNOTATION,
    },
    AnnotationRename {
        spoke: v1alpha2::REVISION_HISTORY_ANNOTATION,
        hub: v1beta1::REVISION_HISTORY_ANNOTATION,
    },
    AnnotationRename {
        spoke: v1alpha2::DESIRED_REPLICAS_ANNOTATION,
        hub: v1beta1::DESIRED_REPLICAS_ANNOTATION,
    },
    AnnotationRename {
        spoke: v1alpha2::MAX_REPLICAS_ANNOTATION,
        hub: v1beta1::MAX_REPLICAS_ANNOTATION,
    },
];

pub const MACHINE_CLUSTER_NAME: LabelPromotion = LabelPromotion {
    label: v1alpha2::MACHINE_CLUSTER_LABEL_NAME,
    targets: &["spec.clusterName"],
};

pub const TEMPLATED_CLUSTER_NAME: LabelPromotion = LabelPromotion {
    label: v1alpha2::MACHINE_CLUSTER_LABEL_NAME,
    targets: &["spec.clusterName", "spec.template.spec.clusterName"],
};

pub const ERROR_TO_FAILURE: &[StatusRename] = &[
    StatusRename {
        spoke: "status.errorReason",
        hub: "status.failureReason",
    },
    StatusRename {
        spoke: "status.errorMessage",
        hub: "status.failureMessage",
    },
];

pub const CLUSTER_MOVES: &[FieldMove] = &[
    FieldMove {
        spoke: "status.apiEndpoints[0]",
        hub: "spec.controlPlaneEndpoint",
        note: "only the first endpoint is kept; the port narrows to 32 bits",
    },
    FieldMove {
        spoke: "status.controlPlaneInitialized",
        hub: "status.conditions[ControlPlaneInitialized]",
        note: "true maps to a True condition",
    },
];

/// Everything a kind relocates, in application order.
#[derive(Debug, Clone, Copy)]
pub struct RelocationTable {
    pub kind: &'static str,
    pub annotations: &'static [AnnotationRename],
    pub promotion: Option<LabelPromotion>,
    pub status_renames: &'static [StatusRename],
    pub moves: &'static [FieldMove],
}

pub const CLUSTER: RelocationTable = RelocationTable {
    kind: "Cluster",
    annotations: &[],
    promotion: None,
    status_renames: ERROR_TO_FAILURE,
    moves: CLUSTER_MOVES,
};

pub const MACHINE: RelocationTable = RelocationTable {
    kind: "Machine",
    annotations: EXCLUDE_NODE_DRAINING,
    promotion: Some(MACHINE_CLUSTER_NAME),
    status_renames: ERROR_TO_FAILURE,
    moves: &[],
};

pub const MACHINE_SET: RelocationTable = RelocationTable {
    kind: "MachineSet",
    annotations: MACHINE_DEPLOYMENT_REVISIONS,
    promotion: Some(TEMPLATED_CLUSTER_NAME),
    status_renames: ERROR_TO_FAILURE,
    moves: &[],
};

pub const MACHINE_DEPLOYMENT: RelocationTable = RelocationTable {
    kind: "MachineDeployment",
    annotations: MACHINE_DEPLOYMENT_REVISIONS,
    promotion: Some(TEMPLATED_CLUSTER_NAME),
    status_renames: &[],
    moves: &[],
};

pub const KUBEADM_CONFIG: RelocationTable = RelocationTable {
    kind: "KubeadmConfig",
    annotations: &[],
    promotion: None,
    status_renames: ERROR_TO_FAILURE,
    moves: &[],
};

pub const KUBEADM_CONFIG_TEMPLATE: RelocationTable = RelocationTable {
    kind: "KubeadmConfigTemplate",
    annotations: &[],
    promotion: None,
    status_renames: &[],
    moves: &[],
};

const TABLES: &[RelocationTable] = &[
    CLUSTER,
    MACHINE,
    MACHINE_SET,
    MACHINE_DEPLOYMENT,
    KUBEADM_CONFIG,
    KUBEADM_CONFIG_TEMPLATE,
];

pub fn tables() -> &'static [RelocationTable] {
    TABLES
}

pub fn table_for(kind: &str) -> Option<&'static RelocationTable> {
    TABLES.iter().find(|t| t.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_one_table() {
        let mut kinds: Vec<_> = tables().iter().map(|t| t.kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), tables().len());
    }

    #[test]
    fn rename_keys_differ_between_versions() {
        for table in tables() {
            for rename in table.annotations {
                assert_ne!(rename.spoke, rename.hub, "{}", table.kind);
            }
        }
    }

    #[test]
    fn lookup_by_kind() {
        let table = table_for("MachineSet").expect("table");
        assert_eq!(table.annotations.len(), 4);
        assert_eq!(
            table.promotion.map(|p| p.targets.len()),
            Some(2)
        );
        assert!(table_for("Pod").is_none());
    }
}
