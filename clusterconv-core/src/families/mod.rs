//! Per-family conversion hooks.

use clusterconv_relocate::{Direction, RelocationTable, apply_renames, demote_label, promote_label};
use clusterconv_types::meta::ObjectMeta;

mod cluster;
mod kubeadm;
mod machine;
mod machine_deployment;
mod machine_set;

pub use machine::restore_machine_spec;

/// Fields restored from the stash, per kind.
pub fn stashed_fields(kind: &str) -> &'static [&'static str] {
    match kind {
        "Cluster" => cluster::STASHED,
        "Machine" => machine::STASHED,
        "MachineSet" => machine_set::STASHED,
        "MachineDeployment" => machine_deployment::STASHED,
        "KubeadmConfig" => kubeadm::CONFIG_STASHED,
        "KubeadmConfigTemplate" => kubeadm::TEMPLATE_STASHED,
        _ => &[],
    }
}

fn rename_annotations(table: &RelocationTable, meta: &mut ObjectMeta, direction: Direction) {
    apply_renames(table.annotations, &mut meta.annotations, direction);
}

/// Takes the promoted label off `meta`, returning its value.
fn take_promoted_label(table: &RelocationTable, meta: &mut ObjectMeta) -> Option<String> {
    table
        .promotion
        .and_then(|promotion| promote_label(&mut meta.labels, promotion.label))
}

fn write_promoted_label(table: &RelocationTable, meta: &mut ObjectMeta, value: &str) {
    if let Some(promotion) = table.promotion {
        demote_label(&mut meta.labels, promotion.label, value);
    }
}
