use clusterconv_types::meta::StringMap;
use std::collections::BTreeMap;
use tracing::debug;

/// Moves the value under `from` to `to`. No-op when `from` is absent.
///
/// An existing value under `to` is replaced.
pub fn rename_key(map: &mut StringMap, from: &str, to: &str) -> bool {
    let Some(value) = map.remove(from) else {
        return false;
    };
    if let Some(previous) = map.insert(to.to_string(), value) {
        debug!(from, to, previous = %previous, "rename replaced existing value");
    }
    true
}

/// Removes `label` and returns its value.
pub fn promote_label(labels: &mut StringMap, label: &str) -> Option<String> {
    labels.remove(label)
}

/// Writes `value` under `label` unless it is empty.
pub fn demote_label(labels: &mut StringMap, label: &str, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    labels.insert(label.to_string(), value.to_string());
    true
}

/// Returns the nested value, allocating a default first when it is absent.
pub fn materialize<T: Default>(slot: &mut Option<T>) -> &mut T {
    slot.get_or_insert_with(T::default)
}

/// Merges stash-only sub-fields into live entries matched by key.
///
/// A live entry is filled only when `is_empty` reports its competing field as empty.
/// Restored entries without a live counterpart are ignored. Returns the number of
/// fills performed.
pub fn merge_by_key<T>(
    live: &mut [T],
    restored: &[T],
    key: impl Fn(&T) -> &str,
    is_empty: impl Fn(&T) -> bool,
    mut fill: impl FnMut(&mut T, &T),
) -> usize {
    let index: BTreeMap<String, usize> = live
        .iter()
        .enumerate()
        .map(|(i, item)| (key(item).to_string(), i))
        .collect();

    let mut filled = 0;
    for entry in restored {
        let Some(&i) = index.get(key(entry)) else {
            continue;
        };
        if is_empty(&live[i]) {
            fill(&mut live[i], entry);
            filled += 1;
        }
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Entry {
        path: String,
        content: String,
        source: Option<String>,
    }

    fn entry(path: &str, content: &str, source: Option<&str>) -> Entry {
        Entry {
            path: path.to_string(),
            content: content.to_string(),
            source: source.map(str::to_string),
        }
    }

    fn merge(live: &mut [Entry], restored: &[Entry]) -> usize {
        merge_by_key(
            live,
            restored,
            |e| e.path.as_str(),
            |e| e.content.is_empty(),
            |l, r| l.source = r.source.clone(),
        )
    }

    #[test]
    fn rename_key_is_noop_when_source_absent() {
        let mut map = StringMap::new();
        map.insert("to".to_string(), "kept".to_string());
        assert!(!rename_key(&mut map, "from", "to"));
        assert_eq!(map.get("to").map(String::as_str), Some("kept"));
    }

    #[test]
    fn rename_key_last_write_wins() {
        let mut map = StringMap::new();
        map.insert("from".to_string(), "new".to_string());
        map.insert("to".to_string(), "old".to_string());
        assert!(rename_key(&mut map, "from", "to"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("to").map(String::as_str), Some("new"));
    }

    #[test]
    fn demote_label_skips_empty_values() {
        let mut labels = StringMap::new();
        assert!(!demote_label(&mut labels, "l", ""));
        assert!(labels.is_empty());
        assert!(demote_label(&mut labels, "l", "c1"));
        assert_eq!(promote_label(&mut labels, "l").as_deref(), Some("c1"));
        assert!(labels.is_empty());
    }

    #[test]
    fn materialize_allocates_once() {
        let mut slot: Option<Vec<u8>> = None;
        materialize(&mut slot).push(1);
        materialize(&mut slot).push(2);
        assert_eq!(slot, Some(vec![1, 2]));
    }

    #[test]
    fn merge_fills_only_empty_live_entries() {
        let mut live = vec![entry("/a", "", None), entry("/b", "inline", None)];
        let restored = vec![
            entry("/a", "", Some("secret-a")),
            entry("/b", "", Some("secret-b")),
            entry("/c", "", Some("secret-c")),
        ];

        assert_eq!(merge(&mut live, &restored), 1);
        assert_eq!(live[0].source.as_deref(), Some("secret-a"));
        assert_eq!(live[1].source, None);
        assert_eq!(live.len(), 2);
    }

    #[test]
    fn merge_with_empty_restored_is_noop() {
        let mut live = vec![entry("/a", "", None)];
        let before = live.clone();
        assert_eq!(merge(&mut live, &[]), 0);
        assert_eq!(live, before);
    }
}
