use crate::families::{rename_annotations, restore_machine_spec, take_promoted_label, write_promoted_label};
use crate::pipeline::Spoke;
use clusterconv_relocate::Direction;
use clusterconv_relocate::tables::MACHINE_SET;
use clusterconv_types::api::{v1alpha2 as spoke, v1beta1 as hub};
use clusterconv_types::copy::CopyError;

pub(crate) const STASHED: &[&str] = &[
    "spec.clusterName",
    "spec.template.spec.clusterName",
    "spec.template.spec.bootstrap.dataSecretName",
    "spec.template.spec.failureDomain",
    "spec.template.spec.nodeDrainTimeout",
    "status.conditions",
];

impl Spoke for spoke::MachineSet {
    type Hub = hub::MachineSet;

    fn copy_up(&self) -> Result<hub::MachineSet, CopyError> {
        Ok(self.into())
    }

    fn copy_down(hub: &hub::MachineSet) -> Result<Self, CopyError> {
        Ok(hub.into())
    }

    fn relocate_up(&self, hub: &mut hub::MachineSet) -> Result<(), CopyError> {
        if let Some(name) = take_promoted_label(&MACHINE_SET, &mut hub.metadata) {
            hub.spec.template.spec.cluster_name = name.clone();
            hub.spec.cluster_name = name;
        }
        rename_annotations(&MACHINE_SET, &mut hub.metadata, Direction::Up);
        Ok(())
    }

    fn relocate_down(hub: &hub::MachineSet, spoke: &mut Self) {
        rename_annotations(&MACHINE_SET, &mut spoke.metadata, Direction::Down);
        write_promoted_label(&MACHINE_SET, &mut spoke.metadata, &hub.spec.cluster_name);
    }

    fn restore(&self, restored: hub::MachineSet, hub: &mut hub::MachineSet) {
        if hub.spec.cluster_name.is_empty() {
            hub.spec.cluster_name = restored.spec.cluster_name;
        }
        restore_machine_spec(&restored.spec.template.spec, &mut hub.spec.template.spec);
        hub.status.conditions = restored.status.conditions;
    }
}
