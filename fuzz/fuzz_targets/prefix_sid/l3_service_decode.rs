#![no_main]

use bytes::Bytes;
use holo_prefix_sid::packet::prefix_sid::decode_l3_service;
use libfuzzer_sys::arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);

    if let Ok(tlv_len) = usize::arbitrary(&mut u)
        && let Ok(value) = Vec::<u8>::arbitrary(&mut u)
    {
        let _ = decode_l3_service(Bytes::from(value), tlv_len);
    }
});
