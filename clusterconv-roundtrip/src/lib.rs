//! Randomized round-trip oracle for clusterconv.
//!
//! - [`hub_spoke_hub`]: a hub object survives down- then up-conversion exactly.
//! - [`spoke_hub_spoke`]: a spoke object survives up- then down-conversion, ignoring
//!   the stash written on the way down.
//! - [`list_spoke_hub_spoke`]: the same for list wrappers.
//!
//! Inputs come from [`strategies`] and are passed through [`Exclusions::normalize`]
//! first, so only fields a conversion provably cannot carry are ignored.

pub mod exclusions;
pub mod strategies;

pub use exclusions::Exclusions;

use clusterconv_core::{ConvertError, Convertible, ListConvertible};
use clusterconv_types::{Hub, List, Object};
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoundTripFailure {
    #[error("{kind}: {leg} conversion failed: {source}")]
    Convert {
        kind: &'static str,
        leg: &'static str,
        #[source]
        source: ConvertError,
    },

    #[error("{kind}: {direction} round trip changed the object\nexpected: {expected}\nactual: {actual}")]
    Mismatch {
        kind: &'static str,
        direction: &'static str,
        expected: String,
        actual: String,
    },
}

fn mismatch<T: Debug>(
    kind: &'static str,
    direction: &'static str,
    expected: &T,
    actual: &T,
) -> RoundTripFailure {
    RoundTripFailure::Mismatch {
        kind,
        direction,
        expected: format!("{expected:#?}"),
        actual: format!("{actual:#?}"),
    }
}

/// Hub to spoke to hub. The result must equal `hub` with its type meta stamped.
pub fn hub_spoke_hub<S>(hub: &S::Hub) -> Result<(), RoundTripFailure>
where
    S: Convertible,
    S::Hub: PartialEq + Debug,
{
    let kind = <S::Hub as Object>::KIND;

    let mut spoke = S::default();
    spoke
        .convert_from(hub)
        .map_err(|source| RoundTripFailure::Convert {
            kind,
            leg: "hub to spoke",
            source,
        })?;

    let mut actual = S::Hub::default();
    spoke
        .convert_to(&mut actual)
        .map_err(|source| RoundTripFailure::Convert {
            kind,
            leg: "spoke to hub",
            source,
        })?;

    let mut expected = hub.clone();
    expected.stamp_type_meta();
    if actual == expected {
        Ok(())
    } else {
        Err(mismatch(kind, "hub-spoke-hub", &expected, &actual))
    }
}

/// Spoke to hub to spoke. The stash written on the way down is not compared.
pub fn spoke_hub_spoke<S>(spoke: &S) -> Result<(), RoundTripFailure>
where
    S: Convertible + Clone + PartialEq + Debug,
{
    let kind = S::KIND;

    let mut hub = S::Hub::default();
    spoke
        .convert_to(&mut hub)
        .map_err(|source| RoundTripFailure::Convert {
            kind,
            leg: "spoke to hub",
            source,
        })?;

    let mut actual = S::default();
    actual
        .convert_from(&hub)
        .map_err(|source| RoundTripFailure::Convert {
            kind,
            leg: "hub to spoke",
            source,
        })?;
    actual
        .metadata_mut()
        .annotations
        .remove(<S::Hub as Hub>::STASH_KEY);

    let mut expected = spoke.clone();
    expected.stamp_type_meta();
    if actual == expected {
        Ok(())
    } else {
        Err(mismatch(kind, "spoke-hub-spoke", &expected, &actual))
    }
}

/// Spoke list to hub list and back.
pub fn list_spoke_hub_spoke<L>(list: &L) -> Result<(), RoundTripFailure>
where
    L: ListConvertible + Default + Clone + PartialEq + Debug,
    L::HubList: Default,
{
    let mut hub = L::HubList::default();
    list.convert_to(&mut hub);

    let mut actual = L::default();
    actual.convert_from(&hub);

    let mut expected = list.clone();
    expected.stamp_type_meta();
    if actual == expected {
        Ok(())
    } else {
        Err(mismatch(L::KIND, "spoke-hub-spoke", &expected, &actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clusterconv_types::api::{v1alpha2, v1beta1};

    #[test]
    fn default_hub_cluster_round_trips() {
        hub_spoke_hub::<v1alpha2::Cluster>(&v1beta1::Cluster::default()).expect("round trip");
    }

    #[test]
    fn mismatch_renders_both_sides() {
        let err = mismatch("Machine", "hub-spoke-hub", &1, &2);
        let message = err.to_string();
        assert!(message.starts_with("Machine: hub-spoke-hub round trip changed the object"));
        assert!(message.contains("expected: 1"));
        assert!(message.contains("actual: 2"));
    }
}
