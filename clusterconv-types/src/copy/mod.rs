//! Structural copies between the spoke and hub shapes.
//!
//! Every `From` impl here copies identically shaped fields one to one and leaves
//! everything else at its default. Relocations and stash restores are layered on top
//! by the conversion engine.
//!
//! Copies of whole objects stamp the target's own `apiVersion`/`kind`.

use crate::Object;
use crate::meta::TypeMeta;

mod cluster;
mod kubeadm;
mod machine;

/// Errors emitted by structural copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    OutOfRange { field: &'static str, value: i64 },
}

impl std::fmt::Display for CopyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyError::OutOfRange { field, value } => {
                write!(f, "value {} for {} does not fit in 32 bits", value, field)
            }
        }
    }
}

impl std::error::Error for CopyError {}

/// Narrows a spoke integer into a hub `int32` field.
pub fn narrow_i32(field: &'static str, value: i64) -> Result<i32, CopyError> {
    i32::try_from(value).map_err(|_| CopyError::OutOfRange { field, value })
}

fn type_meta_of<T: Object>() -> TypeMeta {
    TypeMeta::new(T::API_VERSION, T::KIND)
}

fn list_type_meta_of<T: crate::List>() -> TypeMeta {
    TypeMeta::new(T::API_VERSION, T::KIND)
}

fn copy_all<'a, S: 'a, D: From<&'a S>>(items: &'a [S]) -> Vec<D> {
    items.iter().map(D::from).collect()
}
