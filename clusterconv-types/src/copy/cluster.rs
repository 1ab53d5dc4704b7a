use crate::api::{v1alpha2 as spoke, v1beta1 as hub};
use crate::copy::{copy_all, list_type_meta_of, type_meta_of};

impl From<&spoke::ClusterSpec> for hub::ClusterSpec {
    fn from(spec: &spoke::ClusterSpec) -> Self {
        Self {
            cluster_network: spec.cluster_network.clone(),
            infrastructure_ref: spec.infrastructure_ref.clone(),
            ..Default::default()
        }
    }
}

impl From<&hub::ClusterSpec> for spoke::ClusterSpec {
    fn from(spec: &hub::ClusterSpec) -> Self {
        Self {
            cluster_network: spec.cluster_network.clone(),
            infrastructure_ref: spec.infrastructure_ref.clone(),
        }
    }
}

impl From<&spoke::ClusterStatus> for hub::ClusterStatus {
    fn from(status: &spoke::ClusterStatus) -> Self {
        Self {
            failure_reason: status.error_reason.clone(),
            failure_message: status.error_message.clone(),
            phase: status.phase.clone(),
            infrastructure_ready: status.infrastructure_ready,
            ..Default::default()
        }
    }
}

impl From<&hub::ClusterStatus> for spoke::ClusterStatus {
    fn from(status: &hub::ClusterStatus) -> Self {
        Self {
            error_reason: status.failure_reason.clone(),
            error_message: status.failure_message.clone(),
            phase: status.phase.clone(),
            infrastructure_ready: status.infrastructure_ready,
            ..Default::default()
        }
    }
}

impl From<&spoke::Cluster> for hub::Cluster {
    fn from(cluster: &spoke::Cluster) -> Self {
        Self {
            type_meta: type_meta_of::<hub::Cluster>(),
            metadata: cluster.metadata.clone(),
            spec: (&cluster.spec).into(),
            status: (&cluster.status).into(),
        }
    }
}

impl From<&hub::Cluster> for spoke::Cluster {
    fn from(cluster: &hub::Cluster) -> Self {
        Self {
            type_meta: type_meta_of::<spoke::Cluster>(),
            metadata: cluster.metadata.clone(),
            spec: (&cluster.spec).into(),
            status: (&cluster.status).into(),
        }
    }
}

impl From<&spoke::ClusterList> for hub::ClusterList {
    fn from(list: &spoke::ClusterList) -> Self {
        Self {
            type_meta: list_type_meta_of::<hub::ClusterList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}

impl From<&hub::ClusterList> for spoke::ClusterList {
    fn from(list: &hub::ClusterList) -> Self {
        Self {
            type_meta: list_type_meta_of::<spoke::ClusterList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_fields_become_failure_fields() {
        let status = spoke::ClusterStatus {
            error_reason: Some("InvalidConfiguration".to_string()),
            error_message: Some("bad".to_string()),
            phase: "Failed".to_string(),
            ..Default::default()
        };

        let copied = hub::ClusterStatus::from(&status);
        assert_eq!(copied.failure_reason.as_deref(), Some("InvalidConfiguration"));
        assert_eq!(copied.failure_message.as_deref(), Some("bad"));

        let back = spoke::ClusterStatus::from(&copied);
        assert_eq!(back, status);
    }

    #[test]
    fn hub_only_spec_fields_are_left_default() {
        let hub_spec = hub::ClusterSpec {
            paused: true,
            control_plane_endpoint: hub::ApiEndpoint {
                host: "example.com".to_string(),
                port: 6443,
            },
            ..Default::default()
        };

        let spoke_spec = spoke::ClusterSpec::from(&hub_spec);
        let up = hub::ClusterSpec::from(&spoke_spec);
        assert!(!up.paused);
        assert!(up.control_plane_endpoint.is_zero());
    }
}
