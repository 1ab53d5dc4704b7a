use crate::pipeline::Spoke;
use clusterconv_types::api::{v1alpha2 as spoke, v1beta1 as hub};
use clusterconv_types::copy::{CopyError, narrow_i32};
use clusterconv_types::meta::{is_condition_true, mark_condition_true};

pub(crate) const STASHED: &[&str] = &[
    "spec.controlPlaneRef",
    "spec.paused",
    "spec.topology",
    "status.controlPlaneReady",
    "status.failureDomains",
    "status.conditions",
    "status.observedGeneration",
];

impl Spoke for spoke::Cluster {
    type Hub = hub::Cluster;

    fn copy_up(&self) -> Result<hub::Cluster, CopyError> {
        Ok(self.into())
    }

    fn copy_down(hub: &hub::Cluster) -> Result<Self, CopyError> {
        Ok(hub.into())
    }

    fn relocate_up(&self, hub: &mut hub::Cluster) -> Result<(), CopyError> {
        if self.status.control_plane_initialized {
            mark_condition_true(
                &mut hub.status.conditions,
                hub::CONTROL_PLANE_INITIALIZED_CONDITION,
            );
        }

        if let Some(endpoint) = self.status.api_endpoints.first() {
            hub.spec.control_plane_endpoint = hub::ApiEndpoint {
                host: endpoint.host.clone(),
                port: narrow_i32("status.apiEndpoints[0].port", endpoint.port)?,
            };
        }
        Ok(())
    }

    fn relocate_down(hub: &hub::Cluster, spoke: &mut Self) {
        if is_condition_true(
            &hub.status.conditions,
            hub::CONTROL_PLANE_INITIALIZED_CONDITION,
        ) {
            spoke.status.control_plane_initialized = true;
        }

        let endpoint = &hub.spec.control_plane_endpoint;
        if !endpoint.is_zero() {
            spoke.status.api_endpoints = vec![spoke::ApiEndpoint {
                host: endpoint.host.clone(),
                port: i64::from(endpoint.port),
            }];
        }
    }

    fn restore(&self, restored: hub::Cluster, hub: &mut hub::Cluster) {
        hub.spec.control_plane_ref = restored.spec.control_plane_ref;
        hub.spec.paused = restored.spec.paused;
        if restored.spec.topology.is_some() {
            hub.spec.topology = restored.spec.topology;
        }

        hub.status.control_plane_ready = restored.status.control_plane_ready;
        hub.status.failure_domains = restored.status.failure_domains;
        hub.status.conditions = restored.status.conditions;
        hub.status.observed_generation = restored.status.observed_generation;

        if self.status.control_plane_initialized
            && !is_condition_true(
                &hub.status.conditions,
                hub::CONTROL_PLANE_INITIALIZED_CONDITION,
            )
        {
            mark_condition_true(
                &mut hub.status.conditions,
                hub::CONTROL_PLANE_INITIALIZED_CONDITION,
            );
        }
    }
}
