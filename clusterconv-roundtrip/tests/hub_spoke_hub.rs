//! Hub objects survive a trip through the spoke version.
//!
//! Every hub-only field is stashed on the way down and restored on the way up, so
//! after normalization the result must be identical to the input.

use clusterconv_roundtrip::strategies::{bootstrap, hub};
use clusterconv_roundtrip::{Exclusions, RoundTripFailure, hub_spoke_hub};
use clusterconv_types::api::v1alpha2;
use clusterconv_types::bootstrap::v1alpha2 as bootstrap_v1alpha2;
use proptest::prelude::*;

fn check(result: Result<(), RoundTripFailure>) -> Result<(), TestCaseError> {
    result.map_err(|err| TestCaseError::fail(err.to_string()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cluster(mut cluster in hub::arb_cluster()) {
        cluster.normalize();
        check(hub_spoke_hub::<v1alpha2::Cluster>(&cluster))?;
    }

    #[test]
    fn machine(mut machine in hub::arb_machine()) {
        machine.normalize();
        check(hub_spoke_hub::<v1alpha2::Machine>(&machine))?;
    }

    #[test]
    fn machine_set(mut machine_set in hub::arb_machine_set()) {
        machine_set.normalize();
        check(hub_spoke_hub::<v1alpha2::MachineSet>(&machine_set))?;
    }

    #[test]
    fn machine_deployment(mut machine_deployment in hub::arb_machine_deployment()) {
        machine_deployment.normalize();
        check(hub_spoke_hub::<v1alpha2::MachineDeployment>(&machine_deployment))?;
    }

    #[test]
    fn kubeadm_config(mut config in bootstrap::hub::arb_kubeadm_config()) {
        config.normalize();
        check(hub_spoke_hub::<bootstrap_v1alpha2::KubeadmConfig>(&config))?;
    }

    #[test]
    fn kubeadm_config_template(mut template in bootstrap::hub::arb_kubeadm_config_template()) {
        template.normalize();
        check(hub_spoke_hub::<bootstrap_v1alpha2::KubeadmConfigTemplate>(&template))?;
    }
}
