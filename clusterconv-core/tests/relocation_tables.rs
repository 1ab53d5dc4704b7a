//! The descriptive parts of the relocation tables agree with what conversion does.

use clusterconv_core::dispatch::{convert_document, family_for};
use clusterconv_relocate::tables;
use pretty_assertions::assert_eq;
use serde_json::{Map, Value, json};

fn pointer(path: &str) -> String {
    format!("/{}", path.replace('.', "/"))
}

fn set_path(document: &mut Value, path: &str, value: Value) {
    let mut parts: Vec<&str> = path.split('.').collect();
    let Some(last) = parts.pop() else {
        return;
    };
    let mut node = document;
    for part in parts {
        node = node
            .as_object_mut()
            .expect("object")
            .entry(part)
            .or_insert_with(|| Value::Object(Map::new()));
    }
    node.as_object_mut()
        .expect("object")
        .insert(last.to_string(), value);
}

fn spoke_document(kind: &str) -> (Value, &'static str) {
    let family = family_for(kind).expect("known kind");
    let document = json!({
        "apiVersion": family.spoke_version,
        "kind": kind,
        "metadata": { "name": "relocated", "namespace": "default" },
    });
    (document, family.hub_version)
}

#[test]
fn promoted_label_fills_every_target() {
    for table in tables::tables() {
        let Some(promotion) = table.promotion else {
            continue;
        };
        let (mut document, hub_version) = spoke_document(table.kind);
        set_path(
            &mut document,
            "metadata.labels",
            json!({ promotion.label: "prod" }),
        );

        let hub = convert_document(document, hub_version).expect("up");
        for target in promotion.targets {
            assert_eq!(
                hub.pointer(&pointer(target)),
                Some(&json!("prod")),
                "{} {}",
                table.kind,
                target
            );
        }
        assert_eq!(hub.pointer(&pointer("metadata.labels")), None, "{}", table.kind);
    }
}

#[test]
fn status_renames_carry_values_both_ways() {
    for table in tables::tables() {
        for rename in table.status_renames {
            let (mut document, hub_version) = spoke_document(table.kind);
            set_path(&mut document, rename.spoke, json!("InvalidConfiguration"));

            let hub = convert_document(document, hub_version).expect("up");
            assert_eq!(
                hub.pointer(&pointer(rename.hub)),
                Some(&json!("InvalidConfiguration")),
                "{} {}",
                table.kind,
                rename.hub
            );

            let spoke_version = family_for(table.kind).expect("known kind").spoke_version;
            let spoke = convert_document(hub, spoke_version).expect("down");
            assert_eq!(
                spoke.pointer(&pointer(rename.spoke)),
                Some(&json!("InvalidConfiguration")),
                "{} {}",
                table.kind,
                rename.spoke
            );
        }
    }
}
