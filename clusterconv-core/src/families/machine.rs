use crate::families::{rename_annotations, take_promoted_label, write_promoted_label};
use crate::pipeline::Spoke;
use clusterconv_relocate::Direction;
use clusterconv_relocate::tables::MACHINE;
use clusterconv_types::api::{v1alpha2 as spoke, v1beta1 as hub};
use clusterconv_types::copy::CopyError;

pub(crate) const STASHED: &[&str] = &[
    "spec.clusterName",
    "spec.bootstrap.dataSecretName",
    "spec.failureDomain",
    "spec.nodeDrainTimeout",
    "status.observedGeneration",
    "status.conditions",
    "status.nodeInfo",
];

/// Restores the hub-only parts of a machine spec.
///
/// `clusterName` is taken from the stash only when no label was promoted into `dst`.
pub fn restore_machine_spec(restored: &hub::MachineSpec, dst: &mut hub::MachineSpec) {
    if dst.cluster_name.is_empty() {
        dst.cluster_name = restored.cluster_name.clone();
    }
    dst.bootstrap.data_secret_name = restored.bootstrap.data_secret_name.clone();
    dst.failure_domain = restored.failure_domain.clone();
    dst.node_drain_timeout = restored.node_drain_timeout.clone();
}

impl Spoke for spoke::Machine {
    type Hub = hub::Machine;

    fn copy_up(&self) -> Result<hub::Machine, CopyError> {
        Ok(self.into())
    }

    fn copy_down(hub: &hub::Machine) -> Result<Self, CopyError> {
        Ok(hub.into())
    }

    fn relocate_up(&self, hub: &mut hub::Machine) -> Result<(), CopyError> {
        rename_annotations(&MACHINE, &mut hub.metadata, Direction::Up);
        if let Some(name) = take_promoted_label(&MACHINE, &mut hub.metadata) {
            hub.spec.cluster_name = name;
        }
        Ok(())
    }

    fn relocate_down(hub: &hub::Machine, spoke: &mut Self) {
        rename_annotations(&MACHINE, &mut spoke.metadata, Direction::Down);
        write_promoted_label(&MACHINE, &mut spoke.metadata, &hub.spec.cluster_name);
    }

    fn restore(&self, restored: hub::Machine, hub: &mut hub::Machine) {
        restore_machine_spec(&restored.spec, &mut hub.spec);
        hub.status.observed_generation = restored.status.observed_generation;
        hub.status.conditions = restored.status.conditions;
        hub.status.node_info = restored.status.node_info;
    }
}
