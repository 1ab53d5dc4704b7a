#![no_main]

use clusterconv_core::review::{ConversionReview, review};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(request) = serde_json::from_slice::<ConversionReview>(data) else {
        return;
    };
    let response = review(&request);
    let result = response.response.expect("review always answers");
    if let Some(req) = &request.request {
        assert_eq!(result.uid, req.uid);
        if !result.result.is_success() {
            assert!(result.converted_objects.is_empty());
        }
    }
});
