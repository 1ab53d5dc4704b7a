use clusterconv_stash::{StashEnvelope, StashError, persist, recall, write};
use clusterconv_types::api::v1beta1::{Cluster, Machine};
use clusterconv_types::meta::{ObjectMeta, ObjectReference};
use clusterconv_types::schema::CONVERSION_DATA_ANNOTATION;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn hub_cluster() -> Cluster {
    let mut cluster = Cluster {
        metadata: ObjectMeta {
            name: Some("hub".to_string()),
            namespace: Some("default".to_string()),
            uid: Some("0b7c".to_string()),
            resource_version: Some("42".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    cluster
        .metadata
        .labels
        .insert("team".to_string(), "infra".to_string());
    cluster.spec.paused = true;
    cluster.spec.control_plane_ref = Some(ObjectReference {
        name: "controlplane-1".to_string(),
        ..Default::default()
    });
    cluster.status.control_plane_ready = true;
    cluster
}

fn stashed(blob: String) -> ObjectMeta {
    let mut meta = ObjectMeta::default();
    write::<Cluster>(&mut meta, blob);
    meta
}

#[test]
fn absent_stash_is_not_an_error() {
    let recalled = recall::<Cluster>(&ObjectMeta::default()).expect("recall");
    assert_eq!(recalled, None);
}

#[test]
fn persisted_snapshot_recalls_without_metadata() {
    let hub = hub_cluster();
    let meta = stashed(persist(&hub).expect("persist"));

    let restored = recall::<Cluster>(&meta).expect("recall").expect("present");

    assert_eq!(restored.metadata, ObjectMeta::default());
    assert_eq!(restored.spec, hub.spec);
    assert_eq!(restored.status, hub.status);
}

#[test]
fn identity_metadata_never_reaches_the_blob() {
    let blob = persist(&hub_cluster()).expect("persist");
    for needle in [
        "\"hub\"",
        "\"default\"",
        "\"0b7c\"",
        "\"42\"",
        "\"team\"",
        "\"infra\"",
        "metadata",
    ] {
        assert!(!blob.contains(needle), "blob leaked {}: {}", needle, blob);
    }
}

#[test]
fn unparsable_blob_is_corrupt() {
    let meta = stashed("{not json".to_string());
    let err = recall::<Cluster>(&meta).expect_err("corrupt");
    assert!(err.is_corrupt());
    assert!(err.to_string().contains("not a stash envelope"));
}

#[test]
fn foreign_kind_is_corrupt() {
    let blob = persist(&Machine::default()).expect("persist");
    let meta = stashed(blob);

    let err = recall::<Cluster>(&meta).expect_err("kind mismatch");
    assert!(matches!(
        err,
        StashError::Corrupt { kind: "Cluster", ref reason } if reason.contains("Machine")
    ));
}

#[test]
fn tampered_data_fails_checksum() {
    let blob = persist(&hub_cluster()).expect("persist");
    let mut envelope: StashEnvelope = serde_json::from_str(&blob).expect("envelope");
    envelope.data["spec"]["paused"] = serde_json::json!(false);
    let meta = stashed(serde_json::to_string(&envelope).expect("encode"));

    let err = recall::<Cluster>(&meta).expect_err("checksum");
    assert!(err.to_string().contains("checksum mismatch"));
}

#[test]
fn unknown_envelope_version_is_corrupt() {
    let blob = persist(&hub_cluster()).expect("persist");
    let mut envelope: StashEnvelope = serde_json::from_str(&blob).expect("envelope");
    envelope.version = 7;
    let meta = stashed(serde_json::to_string(&envelope).expect("encode"));

    let err = recall::<Cluster>(&meta).expect_err("version");
    assert!(err.to_string().contains("unsupported envelope version 7"));
}

#[test]
fn reserved_key_is_shared_by_every_kind() {
    let mut meta = ObjectMeta::default();
    write::<Machine>(&mut meta, "x".to_string());
    assert!(meta.annotations.contains_key(CONVERSION_DATA_ANNOTATION));
}

proptest! {
    #[test]
    fn arbitrary_annotation_values_never_panic(blob in ".*") {
        let meta = stashed(blob);
        let _ = recall::<Cluster>(&meta);
    }

    #[test]
    fn observed_generation_survives(generation in any::<i64>(), phase in "[A-Za-z]{0,12}") {
        let mut hub = Cluster::default();
        hub.status.observed_generation = generation;
        hub.status.phase = phase;

        let meta = stashed(persist(&hub).expect("persist"));
        let restored = recall::<Cluster>(&meta).expect("recall").expect("present");
        prop_assert_eq!(restored.status, hub.status);
    }
}
