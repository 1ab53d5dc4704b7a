//! Hub-and-spoke conversion engine for Cluster API resources.
//!
//! Pure and I/O-free. Every resource family has a hub version (`v1beta1`) and a spoke
//! version (`v1alpha2`); conversions always go through the hub.
//!
//! # Entry points
//!
//! - [`Convertible::convert_to`] / [`Convertible::convert_from`]: typed objects
//! - [`ListConvertible`]: typed list wrappers
//! - [`convert_document`](dispatch::convert_document): untyped JSON by `apiVersion`/`kind`
//! - [`review`](review::review): a `ConversionReview` request
//!
//! # Pipeline
//!
//! Down-conversion copies, relocates and then stashes the whole hub object in a
//! reserved annotation on the spoke. Up-conversion copies, relocates, then restores
//! hub-only fields from the stash when one is present. See [`pipeline`].

pub mod dispatch;
pub mod error;
pub mod families;
pub mod lists;
pub mod lossy;
pub mod pipeline;
pub mod review;

pub use error::{ConvertError, ConvertResult};
pub use lists::ListConvertible;
pub use lossy::{LOSSY_FIELDS, LossyField, lossy_fields_for};
pub use pipeline::{Convertible, Spoke, Step};

// Re-export the type crates so embedders don't need them directly.
pub use clusterconv_stash::StashError;
pub use clusterconv_types as types;
