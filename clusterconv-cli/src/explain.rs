//! Kind explanations for the `clusterconv explain` command.
//!
//! Everything shown comes from the engine's own tables: relocation rules, the fields
//! restored from the stash and the registry of lossy fields.

use clusterconv_core::LossyField;
use clusterconv_core::dispatch::{Family, families, family_for};
use clusterconv_core::families::stashed_fields;
use clusterconv_core::lossy_fields_for;
use clusterconv_relocate::{RelocationTable, table_for};
use std::fmt::Write;

/// What happens to one kind's fields in conversion.
#[derive(Debug, Clone)]
pub struct KindExplanation {
    pub family: &'static Family,
    pub relocations: Option<&'static RelocationTable>,
    pub stashed: &'static [&'static str],
    pub lossy: Vec<&'static LossyField>,
}

/// Looks up `kind`, ignoring ASCII case.
pub fn explain(kind: &str) -> Option<KindExplanation> {
    let family = family_for(kind).or_else(|| {
        families()
            .iter()
            .find(|f| f.kind.eq_ignore_ascii_case(kind))
    })?;

    Some(KindExplanation {
        family,
        relocations: table_for(family.kind),
        stashed: stashed_fields(family.kind),
        lossy: lossy_fields_for(family.kind).collect(),
    })
}

pub fn list_kinds() -> Vec<&'static str> {
    families().iter().map(|f| f.kind).collect()
}

const RULE: &str =
    "--------------------------------------------------------------------------------";

pub fn render_text(explanation: &KindExplanation) -> String {
    let family = explanation.family;
    let mut out = String::new();

    let _ = writeln!(out, "KIND: {}", family.kind);
    let _ = writeln!(out);
    let _ = writeln!(out, "Group:  {}", family.group());
    let _ = writeln!(out, "Spoke:  {}", family.spoke_version);
    let _ = writeln!(out, "Hub:    {}", family.hub_version);
    let _ = writeln!(out);

    if family.is_list {
        let _ = writeln!(out, "LIST");
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(
            out,
            "List metadata and every item are copied structurally. Items are not\n\
             relocated or stashed; convert items one by one to keep hub-only fields."
        );
        return out;
    }

    let _ = writeln!(out, "RELOCATIONS");
    let _ = writeln!(out, "{}", RULE);
    match explanation.relocations {
        Some(table) if has_rules(table) => {
            for rename in table.annotations {
                let _ = writeln!(out, "  annotation  {} <-> {}", rename.spoke, rename.hub);
            }
            if let Some(promotion) = table.promotion {
                let _ = writeln!(
                    out,
                    "  label       {} -> {}",
                    promotion.label,
                    promotion.targets.join(", ")
                );
            }
            for rename in table.status_renames {
                let _ = writeln!(out, "  status      {} <-> {}", rename.spoke, rename.hub);
            }
            for field_move in table.moves {
                let _ = writeln!(
                    out,
                    "  move        {} <-> {} ({})",
                    field_move.spoke, field_move.hub, field_move.note
                );
            }
        }
        _ => {
            let _ = writeln!(out, "  (none)");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "RESTORED FROM STASH");
    let _ = writeln!(out, "{}", RULE);
    for field in explanation.stashed {
        let _ = writeln!(out, "  {}", field);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "LOSSY");
    let _ = writeln!(out, "{}", RULE);
    if explanation.lossy.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for lossy in &explanation.lossy {
        let _ = writeln!(
            out,
            "  {:<5} {}: {}",
            lossy.direction.as_str(),
            lossy.field,
            lossy.reason
        );
    }

    out
}

fn has_rules(table: &RelocationTable) -> bool {
    !table.annotations.is_empty()
        || table.promotion.is_some()
        || !table.status_renames.is_empty()
        || !table.moves.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_is_case_insensitive() {
        let explanation = explain("machinedeployment").expect("known kind");
        assert_eq!(explanation.family.kind, "MachineDeployment");
        assert!(explanation.relocations.is_some());
        assert!(!explanation.stashed.is_empty());
    }

    #[test]
    fn unknown_kind_has_no_explanation() {
        assert!(explain("Pod").is_none());
    }

    #[test]
    fn machine_text_names_label_and_lossy_fields() {
        let text = render_text(&explain("Machine").expect("known kind"));
        assert!(text.contains("cluster.x-k8s.io/cluster-name -> spec.clusterName"));
        assert!(text.contains("spec.bootstrap.data"));
        assert!(text.contains("spec.nodeDrainTimeout"));
    }

    #[test]
    fn template_has_no_relocations() {
        let text = render_text(&explain("KubeadmConfigTemplate").expect("known kind"));
        assert!(text.contains("RELOCATIONS"));
        assert!(text.contains("(none)"));
    }

    #[test]
    fn lists_are_explained_as_structural() {
        let text = render_text(&explain("ClusterList").expect("known kind"));
        assert!(text.contains("copied structurally"));
        assert!(!text.contains("RESTORED FROM STASH"));
    }

    #[test]
    fn every_kind_is_listed() {
        let kinds = list_kinds();
        assert_eq!(kinds.len(), 12);
        assert!(kinds.contains(&"KubeadmConfigTemplateList"));
    }
}
