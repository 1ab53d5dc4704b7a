#![no_main]

use arbitrary::Arbitrary;
use clusterconv_core::Convertible;
use clusterconv_types::api::{v1alpha2, v1beta1};
use clusterconv_types::schema::CONVERSION_DATA_ANNOTATION;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    cluster_name: String,
    blob: String,
}

fuzz_target!(|input: Input| {
    // Whatever sits in the stash annotation, up-conversion either fails cleanly or
    // yields a hub without the annotation.
    let mut spoke = v1alpha2::Machine::default();
    spoke.metadata.labels.insert(
        v1alpha2::MACHINE_CLUSTER_LABEL_NAME.to_string(),
        input.cluster_name,
    );
    spoke
        .metadata
        .annotations
        .insert(CONVERSION_DATA_ANNOTATION.to_string(), input.blob);

    let mut hub = v1beta1::Machine::default();
    match spoke.convert_to(&mut hub) {
        Ok(()) => assert!(!hub.metadata.annotations.contains_key(CONVERSION_DATA_ANNOTATION)),
        Err(err) => {
            assert!(err.is_stash_corrupt());
            assert_eq!(hub, v1beta1::Machine::default());
        }
    }
});
