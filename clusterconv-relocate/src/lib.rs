//! Field relocation rules.
//!
//! Relocations cover hub fields that have no structurally identical spoke counterpart
//! but can still be expressed in the spoke: renamed annotations, labels promoted to
//! typed fields, and renamed status fields.
//!
//! Annotation renames and the promoted label key are applied straight from the
//! tables. Promotion targets, status renames and field moves are descriptive: the
//! typed copies and family hooks in `clusterconv-core` perform them, and the tables
//! document them for `clusterconv explain`.

mod primitives;
pub mod tables;

pub use primitives::{demote_label, materialize, merge_by_key, promote_label, rename_key};
pub use tables::{RelocationTable, table_for, tables};

use clusterconv_types::meta::StringMap;

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Spoke to hub.
    Up,
    /// Hub to spoke.
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// An annotation stored under a different key in each version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationRename {
    pub spoke: &'static str,
    pub hub: &'static str,
}

impl AnnotationRename {
    pub fn apply(&self, annotations: &mut StringMap, direction: Direction) -> bool {
        match direction {
            Direction::Up => rename_key(annotations, self.spoke, self.hub),
            Direction::Down => rename_key(annotations, self.hub, self.spoke),
        }
    }
}

/// Applies every rename in table order.
pub fn apply_renames(
    renames: &[AnnotationRename],
    annotations: &mut StringMap,
    direction: Direction,
) -> usize {
    renames
        .iter()
        .filter(|rename| rename.apply(annotations, direction))
        .count()
}

/// A label that the hub stores as one or more typed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPromotion {
    pub label: &'static str,
    /// Hub field paths that receive the value. The first one is written back down.
    ///
    /// Descriptive; the family hooks write these fields.
    pub targets: &'static [&'static str],
}

/// A status field renamed between versions with identical meaning.
///
/// Descriptive; the typed copies perform the rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRename {
    pub spoke: &'static str,
    pub hub: &'static str,
}

/// A field that moves to a different location or shape.
///
/// Descriptive; the family hooks perform the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMove {
    pub spoke: &'static str,
    pub hub: &'static str,
    pub note: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENAMES: &[AnnotationRename] = &[
        AnnotationRename {
            spoke: "old/a",
            hub: "new/a",
        },
        AnnotationRename {
            spoke: "old/b",
            hub: "new/b",
        },
    ];

    #[test]
    fn apply_renames_counts_moves() {
        let mut annotations = StringMap::new();
        annotations.insert("old/a".to_string(), "1".to_string());
        annotations.insert("keep".to_string(), "2".to_string());

        assert_eq!(apply_renames(RENAMES, &mut annotations, Direction::Up), 1);
        assert_eq!(annotations.get("new/a").map(String::as_str), Some("1"));
        assert!(!annotations.contains_key("old/a"));

        assert_eq!(apply_renames(RENAMES, &mut annotations, Direction::Down), 1);
        assert_eq!(annotations.get("old/a").map(String::as_str), Some("1"));
        assert_eq!(annotations.get("keep").map(String::as_str), Some("2"));
    }
}
