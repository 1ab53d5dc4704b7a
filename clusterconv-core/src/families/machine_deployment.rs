use crate::families::{rename_annotations, restore_machine_spec, take_promoted_label, write_promoted_label};
use crate::pipeline::Spoke;
use clusterconv_relocate::tables::MACHINE_DEPLOYMENT;
use clusterconv_relocate::{Direction, materialize};
use clusterconv_types::api::{v1alpha2 as spoke, v1beta1 as hub};
use clusterconv_types::copy::CopyError;

pub(crate) const STASHED: &[&str] = &[
    "spec.clusterName",
    "spec.template.spec.clusterName",
    "spec.template.spec.bootstrap.dataSecretName",
    "spec.template.spec.failureDomain",
    "spec.template.spec.nodeDrainTimeout",
    "spec.strategy.rollingUpdate.deletePolicy",
    "status.phase",
    "status.conditions",
];

impl Spoke for spoke::MachineDeployment {
    type Hub = hub::MachineDeployment;

    fn copy_up(&self) -> Result<hub::MachineDeployment, CopyError> {
        Ok(self.into())
    }

    fn copy_down(hub: &hub::MachineDeployment) -> Result<Self, CopyError> {
        Ok(hub.into())
    }

    fn relocate_up(&self, hub: &mut hub::MachineDeployment) -> Result<(), CopyError> {
        if let Some(name) = take_promoted_label(&MACHINE_DEPLOYMENT, &mut hub.metadata) {
            hub.spec.template.spec.cluster_name = name.clone();
            hub.spec.cluster_name = name;
        }
        rename_annotations(&MACHINE_DEPLOYMENT, &mut hub.metadata, Direction::Up);
        Ok(())
    }

    fn relocate_down(hub: &hub::MachineDeployment, spoke: &mut Self) {
        rename_annotations(&MACHINE_DEPLOYMENT, &mut spoke.metadata, Direction::Down);
        write_promoted_label(
            &MACHINE_DEPLOYMENT,
            &mut spoke.metadata,
            &hub.spec.cluster_name,
        );
    }

    fn restore(&self, restored: hub::MachineDeployment, hub: &mut hub::MachineDeployment) {
        if hub.spec.cluster_name.is_empty() {
            hub.spec.cluster_name = restored.spec.cluster_name.clone();
        }
        // spec.paused exists in both versions; the live value wins.
        restore_machine_spec(&restored.spec.template.spec, &mut hub.spec.template.spec);

        if let Some(rolling) = restored
            .spec
            .strategy
            .and_then(|strategy| strategy.rolling_update)
        {
            let strategy = materialize(&mut hub.spec.strategy);
            materialize(&mut strategy.rolling_update).delete_policy = rolling.delete_policy;
        }

        hub.status.phase = restored.status.phase;
        hub.status.conditions = restored.status.conditions;
    }
}
