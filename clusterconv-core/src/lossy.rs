//! Fields that cannot survive a conversion.
//!
//! Every field of every kind is either structurally copied, relocated, restored from
//! the stash, or listed here.

use clusterconv_relocate::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LossyField {
    pub kind: &'static str,
    /// The conversion that drops the field.
    pub direction: Direction,
    pub field: &'static str,
    pub reason: &'static str,
}

pub const LOSSY_FIELDS: &[LossyField] = &[
    LossyField {
        kind: "Cluster",
        direction: Direction::Up,
        field: "status.apiEndpoints[1..]",
        reason: "the hub keeps a single control plane endpoint",
    },
    LossyField {
        kind: "Machine",
        direction: Direction::Up,
        field: "spec.bootstrap.data",
        reason: "inline bootstrap data has no hub field; use dataSecretName",
    },
    LossyField {
        kind: "Machine",
        direction: Direction::Up,
        field: "spec.metadata",
        reason: "embedded object metadata was removed from the hub machine spec",
    },
    LossyField {
        kind: "Machine",
        direction: Direction::Up,
        field: "status.version",
        reason: "removed from the hub status",
    },
    LossyField {
        kind: "MachineSet",
        direction: Direction::Up,
        field: "spec.template.metadata.{name,generateName,namespace,ownerReferences}",
        reason: "hub template metadata carries labels and annotations only",
    },
    LossyField {
        kind: "MachineSet",
        direction: Direction::Up,
        field: "spec.template.spec.bootstrap.data",
        reason: "inline bootstrap data has no hub field; use dataSecretName",
    },
    LossyField {
        kind: "MachineDeployment",
        direction: Direction::Up,
        field: "spec.template.metadata.{name,generateName,namespace,ownerReferences}",
        reason: "hub template metadata carries labels and annotations only",
    },
    LossyField {
        kind: "MachineDeployment",
        direction: Direction::Up,
        field: "spec.template.spec.bootstrap.data",
        reason: "inline bootstrap data has no hub field; use dataSecretName",
    },
    LossyField {
        kind: "KubeadmConfig",
        direction: Direction::Up,
        field: "status.bootstrapData",
        reason: "the hub publishes bootstrap data through status.dataSecretName",
    },
    LossyField {
        kind: "KubeadmConfig",
        direction: Direction::Down,
        field: "spec.files[].contentFrom",
        reason: "restored only for files without inline content; duplicate paths collapse",
    },
    LossyField {
        kind: "KubeadmConfigTemplate",
        direction: Direction::Down,
        field: "spec.template.spec.files[].contentFrom",
        reason: "restored only for files without inline content; duplicate paths collapse",
    },
];

pub fn lossy_fields_for(kind: &str) -> impl Iterator<Item = &'static LossyField> + '_ {
    LOSSY_FIELDS.iter().filter(move |f| f.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_names_a_known_family() {
        for entry in LOSSY_FIELDS {
            assert!(
                clusterconv_relocate::table_for(entry.kind).is_some(),
                "unknown kind {}",
                entry.kind
            );
        }
    }

    #[test]
    fn file_sources_are_lossy_for_both_kubeadm_kinds() {
        assert_eq!(lossy_fields_for("Machine").count(), 3);
        for kind in ["KubeadmConfig", "KubeadmConfigTemplate"] {
            assert!(
                lossy_fields_for(kind).any(|f| f.field.ends_with("files[].contentFrom")),
                "{kind} does not list file sources"
            );
        }
    }
}
