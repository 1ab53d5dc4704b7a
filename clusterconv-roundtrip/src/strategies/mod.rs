//! proptest strategies for every convertible kind.
//!
//! Generators stay inside each field's valid domain (ports fit 32 bits, map keys never
//! collide with relocated keys). Everything else, including values a version cannot
//! express, is generated freely and pinned afterwards by [`crate::Exclusions`].

pub mod bootstrap;
pub mod hub;
pub mod meta;
pub mod spoke;
