#![no_main]

use holo_prefix_sid::packet::prefix_sid::{DecodeCfg, decode_attribute_with};
use libfuzzer_sys::arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);

    if let Ok(cfg) = DecodeCfg::arbitrary(&mut u)
        && let Ok(attr) = Vec::<u8>::arbitrary(&mut u)
        && let Ok(attr_len) = usize::arbitrary(&mut u)
    {
        let attr_len = attr_len % (attr.len() + 1);
        let _ = decode_attribute_with(&attr, attr_len, &cfg);
    }
});
