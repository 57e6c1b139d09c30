//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::sync::LazyLock as Lazy;

use bytes::Bytes;
use const_addrs::ip6;
use holo_prefix_sid::packet::prefix_sid::{
    DecodeCfg, SidInformation, SidStructure, decode_attribute,
    decode_l3_service, decode_sid_structure,
};

use super::{
    assert_str, assert_uint, sid_information, test_decode_attr, tlv,
};

//
// Test attributes.
//

// SRv6 L3 Service TLV carrying one SID Information Sub-TLV (2001:db8::1,
// End.DT6) with a SID Structure Sub-Sub-TLV (32/16/16/0/0/0).
static ATTR1: Lazy<Vec<u8>> = Lazy::new(|| {
    vec![
        0x05, 0x00, 0x23, 0x00, 0x01, 0x00, 0x1f, 0x00, 0x20, 0x01, 0x0d,
        0xb8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x12, 0x00, 0x01, 0x00, 0x07, 0x00, 0x20,
        0x10, 0x10, 0x00, 0x00, 0x00,
    ]
});

// Unknown TLV (type 99) followed by ATTR1.
static ATTR2: Lazy<Vec<u8>> = Lazy::new(|| {
    let mut bytes = vec![0x63, 0x00, 0x03, 0x00, 0xaa, 0xbb];
    bytes.extend_from_slice(&ATTR1);
    bytes
});

// Label-Index TLV followed by an SRv6 L3 Service TLV with an unknown
// Sub-TLV and two SID Information Sub-TLVs, the second one carrying an
// unknown Sub-Sub-TLV before its SID Structure.
static ATTR3: Lazy<Vec<u8>> = Lazy::new(|| {
    let label_index = tlv(1, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x64]);
    let sid1 = sid_information(ip6!("2001:db8:1::").octets(), 19, &[]);
    let mut sstlvs = tlv(2, &[0xff; 3]);
    sstlvs.extend(tlv(1, &[40, 24, 16, 8, 16, 64]));
    let sid2 = sid_information(ip6!("fc00:0:1:e000::").octets(), 62, &sstlvs);

    let mut stlvs = tlv(9, &[0x01, 0x02]);
    stlvs.extend(tlv(1, &sid1));
    stlvs.extend(tlv(1, &sid2));

    let mut bytes = label_index;
    bytes.extend(tlv(5, &stlvs));
    bytes
});

//
// Tests.
//

#[test]
fn test_decode_attr1() {
    let node = decode_attribute(&ATTR1, ATTR1.len()).unwrap();

    assert_eq!(node.len(), 1);
    let info = "srv6_l3_service.sid_information";
    assert_str(&node, &format!("{info}.sid_value"), "2001:db8::1");
    assert_uint(&node, &format!("{info}.service_sid_flags"), 0);
    assert_uint(&node, &format!("{info}.endpoint_behavior_codepoint"), 18);
    assert_str(&node, &format!("{info}.endpoint_behavior"), "End.DT6");

    let structure = format!("{info}.sid_structure");
    assert_uint(&node, &format!("{structure}.locator_block_length"), 32);
    assert_uint(&node, &format!("{structure}.locator_node_length"), 16);
    assert_uint(&node, &format!("{structure}.function_length"), 16);
    assert_uint(&node, &format!("{structure}.argument_length"), 0);
    assert_uint(&node, &format!("{structure}.transposition_length"), 0);
    assert_uint(&node, &format!("{structure}.transposition_offset"), 0);

    let structure = node
        .get_path(&structure)
        .and_then(|value| value.as_node())
        .unwrap();
    assert_eq!(structure.len(), 6);
}

#[test]
fn test_decode_attr1_json() {
    let node = test_decode_attr(&ATTR1, &DecodeCfg::default());
    let expected = concat!(
        r#"{"srv6_l3_service":{"sid_information":{"#,
        r#""sid_value":"2001:db8::1","service_sid_flags":0,"#,
        r#""endpoint_behavior_codepoint":18,"endpoint_behavior":"End.DT6","#,
        r#""sid_structure":{"locator_block_length":32,"#,
        r#""locator_node_length":16,"function_length":16,"#,
        r#""argument_length":0,"transposition_length":0,"#,
        r#""transposition_offset":0}}}}"#,
    );
    assert_eq!(node.to_json().unwrap(), expected);
}

#[test]
fn test_decode_idempotent() {
    let node1 = test_decode_attr(&ATTR3, &DecodeCfg::default());
    let node2 = test_decode_attr(&ATTR3, &DecodeCfg::default());
    assert_eq!(node1, node2);
}

#[test]
fn test_decode_unknown_tlv() {
    // The unknown TLV alone yields nothing.
    let node = test_decode_attr(&ATTR2[..6], &DecodeCfg::default());
    assert!(node.child("srv6_l3_service").is_none());
    assert!(node.is_empty());

    // The TLV following the unknown one is still decoded.
    let node = test_decode_attr(&ATTR2, &DecodeCfg::default());
    assert_eq!(node, test_decode_attr(&ATTR1, &DecodeCfg::default()));
}

#[test]
fn test_decode_attr3() {
    let node = test_decode_attr(&ATTR3, &DecodeCfg::default());

    let l3_service = node.child("srv6_l3_service").unwrap();
    let infos = l3_service.children("sid_information").collect::<Vec<_>>();
    assert_eq!(infos.len(), 2);

    assert_str(infos[0], "sid_value", "2001:db8:1::");
    assert_str(infos[0], "endpoint_behavior", "End.DT4");
    assert!(infos[0].child("sid_structure").is_none());

    assert_str(infos[1], "sid_value", "fc00:0:1:e000::");
    assert_uint(infos[1], "endpoint_behavior_codepoint", 62);
    assert_str(infos[1], "endpoint_behavior", "End.DT6 with NEXT-CSID");
    assert_uint(infos[1], "sid_structure.locator_block_length", 40);
    assert_uint(infos[1], "sid_structure.locator_node_length", 24);
    assert_uint(infos[1], "sid_structure.function_length", 16);
    assert_uint(infos[1], "sid_structure.argument_length", 8);
    assert_uint(infos[1], "sid_structure.transposition_length", 16);
    assert_uint(infos[1], "sid_structure.transposition_offset", 64);
}

#[test]
fn test_decode_l3_service() {
    // Skip the L3 Service TLV header.
    let data = Bytes::copy_from_slice(&ATTR1[4..]);
    let node = decode_l3_service(data, ATTR1.len() - 4);
    assert_str(&node, "sid_information.endpoint_behavior", "End.DT6");
    assert_uint(&node, "sid_information.sid_structure.function_length", 16);
}

#[test]
fn test_decode_sid_structure() {
    let mut sstlvs = tlv(1, &[32, 16, 16, 0, 0, 0]);
    sstlvs.extend(tlv(1, &[48, 16, 32, 0, 16, 48]));
    let len = sstlvs.len();
    let node = decode_sid_structure(Bytes::from(sstlvs), len);

    let structures = node.children("sid_structure").collect::<Vec<_>>();
    assert_eq!(structures.len(), 2);
    assert_uint(structures[0], "locator_block_length", 32);
    assert_uint(structures[1], "locator_block_length", 48);
    assert_uint(structures[1], "transposition_offset", 48);
}

#[test]
fn test_decode_sid_information_record() {
    let value = sid_information(ip6!("2001:db8::1").octets(), 18, &[]);
    let mut buf = Bytes::from(value);
    let info = SidInformation::decode(21, &mut buf).unwrap();
    assert_eq!(info, SidInformation::new(ip6!("2001:db8::1"), 0, 18, 0));
    assert!(buf.is_empty());
}

#[test]
fn test_decode_sid_structure_record() {
    let mut buf = Bytes::from_static(&[32, 16, 16, 0, 0, 0]);
    let structure = SidStructure::decode(7, &mut buf).unwrap();
    assert_eq!(structure, SidStructure::new(32, 16, 16, 0, 0, 0));
}

#[test]
fn test_l3_service_truncation() {
    // The SID Information Sub-TLV starts right after the TLV header and its
    // SID Structure Sub-Sub-TLV takes the last 10 bytes.
    let stlv_start = 4;
    let sstlv_start = ATTR1.len() - 10;

    for len in stlv_start..ATTR1.len() {
        let data = Bytes::copy_from_slice(&ATTR1[stlv_start..len]);
        let node = decode_l3_service(data, len - stlv_start);
        assert!(node.is_empty(), "truncated at {len}");
    }
    let data = Bytes::copy_from_slice(&ATTR1[stlv_start..]);
    let node = decode_l3_service(data, ATTR1.len() - stlv_start);
    assert!(node.get_path("sid_information.sid_structure").is_some());

    // Cutting inside the SID Structure only drops the SID Structure.
    for len in sstlv_start..ATTR1.len() {
        let data = Bytes::copy_from_slice(&ATTR1[sstlv_start..len]);
        let node = decode_sid_structure(data, len - sstlv_start);
        assert!(node.child("sid_structure").is_none(), "truncated at {len}");
    }
    let data = Bytes::copy_from_slice(&ATTR1[sstlv_start..]);
    let node = decode_sid_structure(data, ATTR1.len() - sstlv_start);
    assert_uint(&node, "sid_structure.locator_block_length", 32);
}
