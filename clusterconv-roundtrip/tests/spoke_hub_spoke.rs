//! Spoke objects and lists survive a trip through the hub version.
//!
//! Only the documented lossy fields are pinned before comparing, and the stash the
//! down-conversion writes is ignored.

use clusterconv_roundtrip::strategies::{bootstrap, spoke};
use clusterconv_roundtrip::{Exclusions, RoundTripFailure, list_spoke_hub_spoke, spoke_hub_spoke};
use proptest::prelude::*;

fn check(result: Result<(), RoundTripFailure>) -> Result<(), TestCaseError> {
    result.map_err(|err| TestCaseError::fail(err.to_string()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cluster(mut cluster in spoke::arb_cluster()) {
        cluster.normalize();
        check(spoke_hub_spoke(&cluster))?;
    }

    #[test]
    fn machine(mut machine in spoke::arb_machine()) {
        machine.normalize();
        check(spoke_hub_spoke(&machine))?;
    }

    #[test]
    fn machine_set(mut machine_set in spoke::arb_machine_set()) {
        machine_set.normalize();
        check(spoke_hub_spoke(&machine_set))?;
    }

    #[test]
    fn machine_deployment(mut machine_deployment in spoke::arb_machine_deployment()) {
        machine_deployment.normalize();
        check(spoke_hub_spoke(&machine_deployment))?;
    }

    #[test]
    fn kubeadm_config(mut config in bootstrap::spoke::arb_kubeadm_config()) {
        config.normalize();
        check(spoke_hub_spoke(&config))?;
    }

    #[test]
    fn kubeadm_config_template(mut template in bootstrap::spoke::arb_kubeadm_config_template()) {
        template.normalize();
        check(spoke_hub_spoke(&template))?;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn cluster_list(mut list in spoke::arb_cluster_list()) {
        list.normalize();
        check(list_spoke_hub_spoke(&list))?;
    }

    #[test]
    fn machine_list(mut list in spoke::arb_machine_list()) {
        list.normalize();
        check(list_spoke_hub_spoke(&list))?;
    }

    #[test]
    fn machine_set_list(mut list in spoke::arb_machine_set_list()) {
        list.normalize();
        check(list_spoke_hub_spoke(&list))?;
    }

    #[test]
    fn machine_deployment_list(mut list in spoke::arb_machine_deployment_list()) {
        list.normalize();
        check(list_spoke_hub_spoke(&list))?;
    }

    #[test]
    fn kubeadm_config_list(mut list in bootstrap::spoke::arb_kubeadm_config_list()) {
        list.normalize();
        check(list_spoke_hub_spoke(&list))?;
    }

    #[test]
    fn kubeadm_config_template_list(mut list in bootstrap::spoke::arb_kubeadm_config_template_list()) {
        list.normalize();
        check(list_spoke_hub_spoke(&list))?;
    }
}
