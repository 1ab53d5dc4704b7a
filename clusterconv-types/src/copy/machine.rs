use crate::api::{v1alpha2 as spoke, v1beta1 as hub};
use crate::copy::{copy_all, list_type_meta_of, type_meta_of};

impl From<&spoke::EmbeddedObjectMeta> for hub::TemplateMeta {
    fn from(meta: &spoke::EmbeddedObjectMeta) -> Self {
        Self {
            labels: meta.labels.clone(),
            annotations: meta.annotations.clone(),
        }
    }
}

impl From<&hub::TemplateMeta> for spoke::EmbeddedObjectMeta {
    fn from(meta: &hub::TemplateMeta) -> Self {
        Self {
            labels: meta.labels.clone(),
            annotations: meta.annotations.clone(),
            ..Default::default()
        }
    }
}

// Machine

impl From<&spoke::Bootstrap> for hub::Bootstrap {
    fn from(bootstrap: &spoke::Bootstrap) -> Self {
        // Inline data has no secret to point at.
        Self {
            config_ref: bootstrap.config_ref.clone(),
            data_secret_name: None,
        }
    }
}

impl From<&hub::Bootstrap> for spoke::Bootstrap {
    fn from(bootstrap: &hub::Bootstrap) -> Self {
        Self {
            config_ref: bootstrap.config_ref.clone(),
            data: None,
        }
    }
}

impl From<&spoke::MachineSpec> for hub::MachineSpec {
    fn from(spec: &spoke::MachineSpec) -> Self {
        Self {
            bootstrap: (&spec.bootstrap).into(),
            infrastructure_ref: spec.infrastructure_ref.clone(),
            version: spec.version.clone(),
            provider_id: spec.provider_id.clone(),
            ..Default::default()
        }
    }
}

impl From<&hub::MachineSpec> for spoke::MachineSpec {
    fn from(spec: &hub::MachineSpec) -> Self {
        Self {
            metadata: Default::default(),
            bootstrap: (&spec.bootstrap).into(),
            infrastructure_ref: spec.infrastructure_ref.clone(),
            version: spec.version.clone(),
            provider_id: spec.provider_id.clone(),
        }
    }
}

impl From<&spoke::MachineStatus> for hub::MachineStatus {
    fn from(status: &spoke::MachineStatus) -> Self {
        Self {
            node_ref: status.node_ref.clone(),
            last_updated: status.last_updated,
            failure_reason: status.error_reason.clone(),
            failure_message: status.error_message.clone(),
            addresses: status.addresses.clone(),
            phase: status.phase.clone(),
            bootstrap_ready: status.bootstrap_ready,
            infrastructure_ready: status.infrastructure_ready,
            ..Default::default()
        }
    }
}

impl From<&hub::MachineStatus> for spoke::MachineStatus {
    fn from(status: &hub::MachineStatus) -> Self {
        Self {
            node_ref: status.node_ref.clone(),
            last_updated: status.last_updated,
            version: None,
            error_reason: status.failure_reason.clone(),
            error_message: status.failure_message.clone(),
            addresses: status.addresses.clone(),
            phase: status.phase.clone(),
            bootstrap_ready: status.bootstrap_ready,
            infrastructure_ready: status.infrastructure_ready,
        }
    }
}

impl From<&spoke::Machine> for hub::Machine {
    fn from(machine: &spoke::Machine) -> Self {
        Self {
            type_meta: type_meta_of::<hub::Machine>(),
            metadata: machine.metadata.clone(),
            spec: (&machine.spec).into(),
            status: (&machine.status).into(),
        }
    }
}

impl From<&hub::Machine> for spoke::Machine {
    fn from(machine: &hub::Machine) -> Self {
        Self {
            type_meta: type_meta_of::<spoke::Machine>(),
            metadata: machine.metadata.clone(),
            spec: (&machine.spec).into(),
            status: (&machine.status).into(),
        }
    }
}

impl From<&spoke::MachineList> for hub::MachineList {
    fn from(list: &spoke::MachineList) -> Self {
        Self {
            type_meta: list_type_meta_of::<hub::MachineList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}

impl From<&hub::MachineList> for spoke::MachineList {
    fn from(list: &hub::MachineList) -> Self {
        Self {
            type_meta: list_type_meta_of::<spoke::MachineList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}

impl From<&spoke::MachineTemplateSpec> for hub::MachineTemplateSpec {
    fn from(template: &spoke::MachineTemplateSpec) -> Self {
        Self {
            metadata: (&template.metadata).into(),
            spec: (&template.spec).into(),
        }
    }
}

impl From<&hub::MachineTemplateSpec> for spoke::MachineTemplateSpec {
    fn from(template: &hub::MachineTemplateSpec) -> Self {
        Self {
            metadata: (&template.metadata).into(),
            spec: (&template.spec).into(),
        }
    }
}

// MachineSet

impl From<&spoke::MachineSetSpec> for hub::MachineSetSpec {
    fn from(spec: &spoke::MachineSetSpec) -> Self {
        Self {
            cluster_name: String::new(),
            replicas: spec.replicas,
            min_ready_seconds: spec.min_ready_seconds,
            delete_policy: spec.delete_policy.clone(),
            selector: spec.selector.clone(),
            template: (&spec.template).into(),
        }
    }
}

impl From<&hub::MachineSetSpec> for spoke::MachineSetSpec {
    fn from(spec: &hub::MachineSetSpec) -> Self {
        Self {
            replicas: spec.replicas,
            min_ready_seconds: spec.min_ready_seconds,
            delete_policy: spec.delete_policy.clone(),
            selector: spec.selector.clone(),
            template: (&spec.template).into(),
        }
    }
}

impl From<&spoke::MachineSetStatus> for hub::MachineSetStatus {
    fn from(status: &spoke::MachineSetStatus) -> Self {
        Self {
            selector: status.selector.clone(),
            replicas: status.replicas,
            fully_labeled_replicas: status.fully_labeled_replicas,
            ready_replicas: status.ready_replicas,
            available_replicas: status.available_replicas,
            observed_generation: status.observed_generation,
            failure_reason: status.error_reason.clone(),
            failure_message: status.error_message.clone(),
            conditions: Vec::new(),
        }
    }
}

impl From<&hub::MachineSetStatus> for spoke::MachineSetStatus {
    fn from(status: &hub::MachineSetStatus) -> Self {
        Self {
            selector: status.selector.clone(),
            replicas: status.replicas,
            fully_labeled_replicas: status.fully_labeled_replicas,
            ready_replicas: status.ready_replicas,
            available_replicas: status.available_replicas,
            observed_generation: status.observed_generation,
            error_reason: status.failure_reason.clone(),
            error_message: status.failure_message.clone(),
        }
    }
}

impl From<&spoke::MachineSet> for hub::MachineSet {
    fn from(set: &spoke::MachineSet) -> Self {
        Self {
            type_meta: type_meta_of::<hub::MachineSet>(),
            metadata: set.metadata.clone(),
            spec: (&set.spec).into(),
            status: (&set.status).into(),
        }
    }
}

impl From<&hub::MachineSet> for spoke::MachineSet {
    fn from(set: &hub::MachineSet) -> Self {
        Self {
            type_meta: type_meta_of::<spoke::MachineSet>(),
            metadata: set.metadata.clone(),
            spec: (&set.spec).into(),
            status: (&set.status).into(),
        }
    }
}

impl From<&spoke::MachineSetList> for hub::MachineSetList {
    fn from(list: &spoke::MachineSetList) -> Self {
        Self {
            type_meta: list_type_meta_of::<hub::MachineSetList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}

impl From<&hub::MachineSetList> for spoke::MachineSetList {
    fn from(list: &hub::MachineSetList) -> Self {
        Self {
            type_meta: list_type_meta_of::<spoke::MachineSetList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}

// MachineDeployment

impl From<&spoke::MachineRollingUpdateDeployment> for hub::MachineRollingUpdateDeployment {
    fn from(update: &spoke::MachineRollingUpdateDeployment) -> Self {
        Self {
            max_unavailable: update.max_unavailable.clone(),
            max_surge: update.max_surge.clone(),
            delete_policy: None,
        }
    }
}

impl From<&hub::MachineRollingUpdateDeployment> for spoke::MachineRollingUpdateDeployment {
    fn from(update: &hub::MachineRollingUpdateDeployment) -> Self {
        Self {
            max_unavailable: update.max_unavailable.clone(),
            max_surge: update.max_surge.clone(),
        }
    }
}

impl From<&spoke::MachineDeploymentStrategy> for hub::MachineDeploymentStrategy {
    fn from(strategy: &spoke::MachineDeploymentStrategy) -> Self {
        Self {
            type_: strategy.type_.clone(),
            rolling_update: strategy.rolling_update.as_ref().map(Into::into),
        }
    }
}

impl From<&hub::MachineDeploymentStrategy> for spoke::MachineDeploymentStrategy {
    fn from(strategy: &hub::MachineDeploymentStrategy) -> Self {
        Self {
            type_: strategy.type_.clone(),
            rolling_update: strategy.rolling_update.as_ref().map(Into::into),
        }
    }
}

impl From<&spoke::MachineDeploymentSpec> for hub::MachineDeploymentSpec {
    fn from(spec: &spoke::MachineDeploymentSpec) -> Self {
        Self {
            cluster_name: String::new(),
            replicas: spec.replicas,
            selector: spec.selector.clone(),
            template: (&spec.template).into(),
            strategy: spec.strategy.as_ref().map(Into::into),
            min_ready_seconds: spec.min_ready_seconds,
            revision_history_limit: spec.revision_history_limit,
            paused: spec.paused,
            progress_deadline_seconds: spec.progress_deadline_seconds,
        }
    }
}

impl From<&hub::MachineDeploymentSpec> for spoke::MachineDeploymentSpec {
    fn from(spec: &hub::MachineDeploymentSpec) -> Self {
        Self {
            replicas: spec.replicas,
            selector: spec.selector.clone(),
            template: (&spec.template).into(),
            strategy: spec.strategy.as_ref().map(Into::into),
            min_ready_seconds: spec.min_ready_seconds,
            revision_history_limit: spec.revision_history_limit,
            paused: spec.paused,
            progress_deadline_seconds: spec.progress_deadline_seconds,
        }
    }
}

impl From<&spoke::MachineDeploymentStatus> for hub::MachineDeploymentStatus {
    fn from(status: &spoke::MachineDeploymentStatus) -> Self {
        Self {
            observed_generation: status.observed_generation,
            selector: status.selector.clone(),
            replicas: status.replicas,
            updated_replicas: status.updated_replicas,
            ready_replicas: status.ready_replicas,
            available_replicas: status.available_replicas,
            unavailable_replicas: status.unavailable_replicas,
            phase: String::new(),
            conditions: Vec::new(),
        }
    }
}

impl From<&hub::MachineDeploymentStatus> for spoke::MachineDeploymentStatus {
    fn from(status: &hub::MachineDeploymentStatus) -> Self {
        Self {
            observed_generation: status.observed_generation,
            selector: status.selector.clone(),
            replicas: status.replicas,
            updated_replicas: status.updated_replicas,
            ready_replicas: status.ready_replicas,
            available_replicas: status.available_replicas,
            unavailable_replicas: status.unavailable_replicas,
        }
    }
}

impl From<&spoke::MachineDeployment> for hub::MachineDeployment {
    fn from(deployment: &spoke::MachineDeployment) -> Self {
        Self {
            type_meta: type_meta_of::<hub::MachineDeployment>(),
            metadata: deployment.metadata.clone(),
            spec: (&deployment.spec).into(),
            status: (&deployment.status).into(),
        }
    }
}

impl From<&hub::MachineDeployment> for spoke::MachineDeployment {
    fn from(deployment: &hub::MachineDeployment) -> Self {
        Self {
            type_meta: type_meta_of::<spoke::MachineDeployment>(),
            metadata: deployment.metadata.clone(),
            spec: (&deployment.spec).into(),
            status: (&deployment.status).into(),
        }
    }
}

impl From<&spoke::MachineDeploymentList> for hub::MachineDeploymentList {
    fn from(list: &spoke::MachineDeploymentList) -> Self {
        Self {
            type_meta: list_type_meta_of::<hub::MachineDeploymentList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}

impl From<&hub::MachineDeploymentList> for spoke::MachineDeploymentList {
    fn from(list: &hub::MachineDeploymentList) -> Self {
        Self {
            type_meta: list_type_meta_of::<spoke::MachineDeploymentList>(),
            metadata: list.metadata.clone(),
            items: copy_all(&list.items),
        }
    }
}
