//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod prefix_sid;

use holo_prefix_sid::packet::prefix_sid::{DecodeCfg, decode_attribute_with};
use holo_prefix_sid::packet::tree::{Node, Value};

//
// Helper functions.
//

fn test_decode_attr(bytes: &[u8], cfg: &DecodeCfg) -> Node {
    decode_attribute_with(bytes, bytes.len(), cfg).unwrap()
}

fn assert_uint(node: &Node, path: &str, expected: u64) {
    assert_eq!(node.get_path(path), Some(&Value::Uint(expected)), "{path}");
}

fn assert_str(node: &Node, path: &str, expected: &str) {
    assert_eq!(
        node.get_path(path).and_then(Value::as_str).map(String::as_str),
        Some(expected),
        "{path}"
    );
}

// Builds a TLV using the Prefix-SID header layout (type, length, reserved).
fn tlv(tlv_type: u8, value: &[u8]) -> Vec<u8> {
    let length = (value.len() + 1) as u16;
    let mut bytes = vec![tlv_type];
    bytes.extend_from_slice(&length.to_be_bytes());
    bytes.push(0);
    bytes.extend_from_slice(value);
    bytes
}

// Builds the value of an SRv6 SID Information Sub-TLV.
fn sid_information(sid: [u8; 16], behavior: u16, sstlvs: &[u8]) -> Vec<u8> {
    let mut bytes = sid.to_vec();
    bytes.push(0x00);
    bytes.extend_from_slice(&behavior.to_be_bytes());
    bytes.push(0x00);
    bytes.extend_from_slice(sstlvs);
    bytes
}
