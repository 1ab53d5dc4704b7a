//! Stash codec: a hub snapshot carried in one reserved annotation of a spoke object.
//!
//! The stored value is a small JSON envelope:
//!
//! ```json
//! { "version": 1, "kind": "Cluster", "sha256": "<hex>", "data": { "spec": { ... } } }
//! ```
//!
//! `sha256` is the digest of the compact JSON encoding of `data`. The snapshot never
//! carries metadata: identity fields must track the live object, and labels and
//! annotations travel structurally.

use clusterconv_hash::{digest_matches, sha256_hex};
use clusterconv_types::Hub;
use clusterconv_types::meta::ObjectMeta;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

mod error;

pub use error::StashError;

/// Current envelope layout.
pub const ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StashEnvelope {
    pub version: u32,
    pub kind: String,
    pub sha256: String,
    pub data: serde_json::Value,
}

impl StashEnvelope {
    fn seal(kind: &str, data: serde_json::Value) -> Result<Self, serde_json::Error> {
        let compact = serde_json::to_vec(&data)?;
        Ok(Self {
            version: ENVELOPE_VERSION,
            kind: kind.to_string(),
            sha256: sha256_hex(&compact),
            data,
        })
    }
}

/// Serializes `hub` without its metadata into a stash blob.
pub fn persist<H>(hub: &H) -> Result<String, StashError>
where
    H: Hub + Clone + Serialize,
{
    let mut snapshot = hub.clone();
    *snapshot.metadata_mut() = ObjectMeta::default();

    let mut data = serde_json::to_value(&snapshot).map_err(StashError::Encode)?;
    if let Some(fields) = data.as_object_mut() {
        fields.remove("apiVersion");
        fields.remove("kind");
        fields.remove("metadata");
    }

    let envelope = StashEnvelope::seal(H::KIND, data).map_err(StashError::Encode)?;
    let blob = serde_json::to_string(&envelope).map_err(StashError::Encode)?;
    debug!(kind = H::KIND, bytes = blob.len(), "persisted stash");
    Ok(blob)
}

/// Stores `blob` under the reserved key, replacing any previous stash.
pub fn write<H: Hub>(meta: &mut ObjectMeta, blob: String) {
    meta.annotations.insert(H::STASH_KEY.to_string(), blob);
}

/// Removes the reserved key. Returns the previous value, if any.
pub fn remove<H: Hub>(meta: &mut ObjectMeta) -> Option<String> {
    meta.annotations.remove(H::STASH_KEY)
}

/// Reads the hub snapshot stored on `meta`.
///
/// `Ok(None)` when no stash is present.
pub fn recall<H>(meta: &ObjectMeta) -> Result<Option<H>, StashError>
where
    H: Hub + DeserializeOwned,
{
    let Some(blob) = meta.annotation(H::STASH_KEY) else {
        debug!(kind = H::KIND, "no stash present");
        return Ok(None);
    };

    let corrupt = |reason: String| StashError::Corrupt {
        kind: H::KIND,
        reason,
    };

    let envelope: StashEnvelope = serde_json::from_str(blob)
        .map_err(|err| corrupt(format!("not a stash envelope: {}", err)))?;

    if envelope.version != ENVELOPE_VERSION {
        return Err(corrupt(format!(
            "unsupported envelope version {}",
            envelope.version
        )));
    }
    if envelope.kind != H::KIND {
        return Err(corrupt(format!("snapshot is for kind {}", envelope.kind)));
    }

    let compact = serde_json::to_vec(&envelope.data)
        .map_err(|err| corrupt(format!("unreadable snapshot data: {}", err)))?;
    if !digest_matches(&compact, &envelope.sha256) {
        return Err(corrupt("checksum mismatch".to_string()));
    }

    let hub = serde_json::from_value(envelope.data)
        .map_err(|err| corrupt(format!("snapshot does not decode: {}", err)))?;
    debug!(kind = H::KIND, "recalled stash");
    Ok(Some(hub))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clusterconv_types::api::v1beta1::Cluster;

    #[test]
    fn write_overwrites_previous_blob() {
        let mut meta = ObjectMeta::default();
        write::<Cluster>(&mut meta, "first".to_string());
        write::<Cluster>(&mut meta, "second".to_string());

        assert_eq!(meta.annotations.len(), 1);
        assert_eq!(remove::<Cluster>(&mut meta).as_deref(), Some("second"));
        assert!(meta.annotations.is_empty());
    }

    #[test]
    fn envelope_checksum_covers_compact_data() {
        let data = serde_json::json!({ "spec": { "paused": true } });
        let envelope = StashEnvelope::seal("Cluster", data).expect("seal");
        assert_eq!(envelope.sha256, sha256_hex(br#"{"spec":{"paused":true}}"#));
    }
}
