//! Conversion of untyped documents by `apiVersion` and `kind`.

use crate::error::{ConvertError, ConvertResult};
use crate::lists::ListConvertible;
use crate::pipeline::{Convertible, Spoke};
use clusterconv_types::List;
use clusterconv_types::api::v1alpha2;
use clusterconv_types::bootstrap::v1alpha2 as bootstrap_v1alpha2;
use clusterconv_types::schema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

type ConvertFn = fn(Value) -> ConvertResult<Value>;

/// One convertible kind and the versions it is served in.
#[derive(Debug, Clone, Copy)]
pub struct Family {
    pub kind: &'static str,
    pub spoke_version: &'static str,
    pub hub_version: &'static str,
    pub is_list: bool,
    up: ConvertFn,
    down: ConvertFn,
}

impl Family {
    const fn object<S>() -> Self
    where
        S: Spoke + Serialize + DeserializeOwned,
    {
        Self {
            kind: S::KIND,
            spoke_version: S::API_VERSION,
            hub_version: <S::Hub as clusterconv_types::Object>::API_VERSION,
            is_list: false,
            up: up_object::<S>,
            down: down_object::<S>,
        }
    }

    const fn list<L>() -> Self
    where
        L: ListConvertible + Default + Serialize + DeserializeOwned,
        L::HubList: Default + Serialize + DeserializeOwned,
    {
        Self {
            kind: L::KIND,
            spoke_version: L::API_VERSION,
            hub_version: <L::HubList as List>::API_VERSION,
            is_list: true,
            up: up_list::<L>,
            down: down_list::<L>,
        }
    }

    pub fn group(&self) -> &'static str {
        self.hub_version
            .split_once('/')
            .map_or(self.hub_version, |(group, _)| group)
    }
}

fn up_object<S>(document: Value) -> ConvertResult<Value>
where
    S: Spoke + Serialize + DeserializeOwned,
{
    let spoke: S = serde_json::from_value(document)?;
    let mut hub = S::Hub::default();
    Convertible::convert_to(&spoke, &mut hub)?;
    Ok(serde_json::to_value(&hub)?)
}

fn down_object<S>(document: Value) -> ConvertResult<Value>
where
    S: Spoke + Serialize + DeserializeOwned,
{
    let hub: S::Hub = serde_json::from_value(document)?;
    let mut spoke = S::default();
    Convertible::convert_from(&mut spoke, &hub)?;
    Ok(serde_json::to_value(&spoke)?)
}

fn up_list<L>(document: Value) -> ConvertResult<Value>
where
    L: ListConvertible + Default + Serialize + DeserializeOwned,
    L::HubList: Default + Serialize + DeserializeOwned,
{
    let spoke: L = serde_json::from_value(document)?;
    let mut hub = L::HubList::default();
    ListConvertible::convert_to(&spoke, &mut hub);
    Ok(serde_json::to_value(&hub)?)
}

fn down_list<L>(document: Value) -> ConvertResult<Value>
where
    L: ListConvertible + Default + Serialize + DeserializeOwned,
    L::HubList: Default + Serialize + DeserializeOwned,
{
    let hub: L::HubList = serde_json::from_value(document)?;
    let mut spoke = L::default();
    ListConvertible::convert_from(&mut spoke, &hub);
    Ok(serde_json::to_value(&spoke)?)
}

const FAMILIES: &[Family] = &[
    Family::object::<v1alpha2::Cluster>(),
    Family::object::<v1alpha2::Machine>(),
    Family::object::<v1alpha2::MachineSet>(),
    Family::object::<v1alpha2::MachineDeployment>(),
    Family::object::<bootstrap_v1alpha2::KubeadmConfig>(),
    Family::object::<bootstrap_v1alpha2::KubeadmConfigTemplate>(),
    Family::list::<v1alpha2::ClusterList>(),
    Family::list::<v1alpha2::MachineList>(),
    Family::list::<v1alpha2::MachineSetList>(),
    Family::list::<v1alpha2::MachineDeploymentList>(),
    Family::list::<bootstrap_v1alpha2::KubeadmConfigList>(),
    Family::list::<bootstrap_v1alpha2::KubeadmConfigTemplateList>(),
];

/// Every convertible kind, objects first.
pub fn families() -> &'static [Family] {
    FAMILIES
}

pub fn family_for(kind: &str) -> Option<&'static Family> {
    FAMILIES.iter().find(|f| f.kind == kind)
}

/// Every apiVersion a document may declare or be converted to.
pub fn served_versions() -> [&'static str; 4] {
    [
        schema::CLUSTER_V1ALPHA2,
        schema::CLUSTER_V1BETA1,
        schema::BOOTSTRAP_V1ALPHA2,
        schema::BOOTSTRAP_V1BETA1,
    ]
}

fn type_meta_of(document: &Value) -> (String, String) {
    let field = |name: &str| {
        document
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    (field("apiVersion"), field("kind"))
}

/// Converts `document` to `target_api_version`.
///
/// Documents already at the target version are returned as is.
pub fn convert_document(document: Value, target_api_version: &str) -> ConvertResult<Value> {
    let (api_version, kind) = type_meta_of(&document);

    let Some(family) = family_for(&kind) else {
        return Err(ConvertError::UnsupportedKind { api_version, kind });
    };

    for version in [api_version.as_str(), target_api_version] {
        if version != family.spoke_version && version != family.hub_version {
            return Err(ConvertError::UnsupportedVersion {
                kind,
                api_version: version.to_string(),
            });
        }
    }

    if api_version == target_api_version {
        debug!(kind = family.kind, api_version = %api_version, "already at target version");
        return Ok(document);
    }

    if target_api_version == family.hub_version {
        (family.up)(document)
    } else {
        (family.down)(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn every_kind_is_registered_once() {
        let mut kinds: Vec<_> = families().iter().map(|f| f.kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), 12);
        assert_eq!(family_for("MachineList").map(|f| f.is_list), Some(true));
        assert_eq!(
            family_for("KubeadmConfig").map(Family::group),
            Some("bootstrap.cluster.x-k8s.io")
        );
    }

    #[test]
    fn same_version_is_a_no_op() {
        let doc = json!({
            "apiVersion": "cluster.x-k8s.io/v1beta1",
            "kind": "Cluster",
            "metadata": {"name": "c"},
            "unknownField": true,
        });
        let out = convert_document(doc.clone(), "cluster.x-k8s.io/v1beta1").expect("convert");
        assert_eq!(out, doc);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let doc = json!({"apiVersion": "cluster.x-k8s.io/v1beta1", "kind": "Widget"});
        let err = convert_document(doc, "cluster.x-k8s.io/v1alpha2").expect_err("widget");
        assert!(matches!(err, ConvertError::UnsupportedKind { ref kind, .. } if kind == "Widget"));
    }

    #[test]
    fn foreign_group_version_is_rejected() {
        let doc = json!({"apiVersion": "cluster.x-k8s.io/v1beta1", "kind": "Machine"});
        let err =
            convert_document(doc, "bootstrap.cluster.x-k8s.io/v1alpha2").expect_err("wrong group");
        assert!(matches!(
            err,
            ConvertError::UnsupportedVersion { ref api_version, .. }
                if api_version == "bootstrap.cluster.x-k8s.io/v1alpha2"
        ));
    }

    #[test]
    fn malformed_document_is_a_document_error() {
        let doc = json!({
            "apiVersion": "cluster.x-k8s.io/v1alpha2",
            "kind": "Machine",
            "spec": {"bootstrap": 7},
        });
        let err = convert_document(doc, "cluster.x-k8s.io/v1beta1").expect_err("bad spec");
        assert!(matches!(err, ConvertError::Document(_)));
    }
}
