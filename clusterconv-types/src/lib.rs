//! Shared object model (schemas-as-code) for the clusterconv workspace.
//!
//! # Layout
//! - [`meta`]: metadata shapes shared by every version.
//! - [`api`]: `cluster.x-k8s.io` core types, hub (`v1beta1`) and spoke (`v1alpha2`).
//! - [`bootstrap`]: `bootstrap.cluster.x-k8s.io` kubeadm types, hub and spoke.
//! - [`copy`]: structural copies between identically shaped fields of the two versions.
//!
//! # Design constraints
//! - These types are serialized verbatim into stash annotations. Be conservative with
//!   renames; prefer adding optional fields.
//! - Every type derives `Default` and `PartialEq` so round trips can be compared.

use meta::{ListMeta, ObjectMeta, TypeMeta};

macro_rules! impl_object {
    ($ty:ty, $api_version:expr, $kind:literal) => {
        impl $crate::Object for $ty {
            const API_VERSION: &'static str = $api_version;
            const KIND: &'static str = $kind;

            fn type_meta(&self) -> &$crate::meta::TypeMeta {
                &self.type_meta
            }

            fn type_meta_mut(&mut self) -> &mut $crate::meta::TypeMeta {
                &mut self.type_meta
            }

            fn metadata(&self) -> &$crate::meta::ObjectMeta {
                &self.metadata
            }

            fn metadata_mut(&mut self) -> &mut $crate::meta::ObjectMeta {
                &mut self.metadata
            }
        }
    };
}

macro_rules! impl_list {
    ($ty:ty, $item:ty, $api_version:expr, $kind:literal) => {
        impl $crate::List for $ty {
            const API_VERSION: &'static str = $api_version;
            const KIND: &'static str = $kind;
            type Item = $item;

            fn type_meta_mut(&mut self) -> &mut $crate::meta::TypeMeta {
                &mut self.type_meta
            }

            fn list_meta(&self) -> &$crate::meta::ListMeta {
                &self.metadata
            }

            fn items(&self) -> &[$item] {
                &self.items
            }
        }
    };
}

pub mod api;
pub mod bootstrap;
pub mod copy;
pub mod meta;

/// Group/version identifiers and reserved keys.
pub mod schema {
    pub const CLUSTER_GROUP: &str = "cluster.x-k8s.io";
    pub const BOOTSTRAP_GROUP: &str = "bootstrap.cluster.x-k8s.io";

    pub const CLUSTER_V1ALPHA2: &str = "cluster.x-k8s.io/v1alpha2";
    pub const CLUSTER_V1BETA1: &str = "cluster.x-k8s.io/v1beta1";
    pub const BOOTSTRAP_V1ALPHA2: &str = "bootstrap.cluster.x-k8s.io/v1alpha2";
    pub const BOOTSTRAP_V1BETA1: &str = "bootstrap.cluster.x-k8s.io/v1beta1";

    /// Annotation holding the serialized hub snapshot on spoke objects.
    pub const CONVERSION_DATA_ANNOTATION: &str = "cluster.x-k8s.io/conversion-data";
}

/// A versioned, named object.
pub trait Object {
    const API_VERSION: &'static str;
    const KIND: &'static str;

    fn type_meta(&self) -> &TypeMeta;

    fn type_meta_mut(&mut self) -> &mut TypeMeta;

    fn metadata(&self) -> &ObjectMeta;

    fn metadata_mut(&mut self) -> &mut ObjectMeta;

    /// Overwrite `apiVersion`/`kind` with this type's own identifiers.
    fn stamp_type_meta(&mut self) {
        *self.type_meta_mut() = TypeMeta::new(Self::API_VERSION, Self::KIND);
    }
}

/// The canonical, most expressive version of a resource family.
pub trait Hub: Object {
    /// Reserved annotation that carries this kind's stash on spoke objects.
    const STASH_KEY: &'static str = schema::CONVERSION_DATA_ANNOTATION;
}

/// A container of same-kind objects.
pub trait List {
    const API_VERSION: &'static str;
    const KIND: &'static str;
    type Item: Object;

    fn type_meta_mut(&mut self) -> &mut TypeMeta;

    fn list_meta(&self) -> &ListMeta;

    fn items(&self) -> &[Self::Item];

    fn stamp_type_meta(&mut self) {
        *self.type_meta_mut() = TypeMeta::new(Self::API_VERSION, Self::KIND);
    }
}
