//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv6Addr;

use arbitrary::Arbitrary;
use bytes::{Buf, Bytes};
use derive_new::new;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::debug::Debug;
use crate::packet::consts::{
    PrefixSidTlvType, Srv6ServiceDataSubSubTlvType, Srv6ServiceSubTlvType,
    endpoint_behavior_name,
};
use crate::packet::cursor::TlvCursor;
use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::tree::Node;

// TLV header size (type, length and reserved fields).
//
// The same header layout is used by the Prefix-SID TLVs, the SRv6 Service
// Sub-TLVs and the SRv6 Service Data Sub-Sub-TLVs.
pub const TLV_HDR_SIZE: usize = 4;
// Number of header bytes not covered by the TLV length field.
pub const TLV_LEN_OFFSET: usize = 3;

// Decoding limits.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Arbitrary, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeCfg {
    // Per-level sibling limits. Once more TLVs than this were processed at a
    // given level, the rest of that level is dropped.
    pub max_tlvs: usize,
    pub max_sub_tlvs: usize,
    pub max_sub_sub_tlvs: usize,
}

// Nesting level of a TLV inside the BGP Prefix-SID attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum TlvLevel {
    Attribute,
    Srv6Service,
    Srv6SidInformation,
}

// Generic TLV as found at any nesting level.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct RawTlv {
    pub tlv_type: u8,
    pub length: u16,
    pub reserved: u8,
    pub value: Bytes,
}

// Walks the TLVs found in a buffer, enforcing the length budget of the
// enclosing element and the sibling limit of the level.
#[derive(Debug)]
pub struct TlvIter {
    buf: Bytes,
    level: TlvLevel,
    count: usize,
    max_count: usize,
}

// SRv6 SID Information Sub-TLV, without its Sub-Sub-TLVs.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct SidInformation {
    pub sid_value: Ipv6Addr,
    pub flags: u8,
    pub endpoint_behavior: u16,
    pub reserved: u8,
}

// SRv6 SID Structure Sub-Sub-TLV.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct SidStructure {
    pub locator_block_length: u8,
    pub locator_node_length: u8,
    pub function_length: u8,
    pub argument_length: u8,
    pub transposition_length: u8,
    pub transposition_offset: u8,
}

// ===== impl DecodeCfg =====

impl Default for DecodeCfg {
    fn default() -> DecodeCfg {
        DecodeCfg {
            max_tlvs: 3,
            max_sub_tlvs: 3,
            max_sub_sub_tlvs: 3,
        }
    }
}

// ===== impl TlvLevel =====

impl std::fmt::Display for TlvLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TlvLevel::Attribute => write!(f, "BGP Prefix-SID attribute"),
            TlvLevel::Srv6Service => write!(f, "SRv6 Service TLV"),
            TlvLevel::Srv6SidInformation => {
                write!(f, "SRv6 SID Information Sub-TLV")
            }
        }
    }
}

// ===== impl RawTlv =====

impl RawTlv {
    // Decodes the next TLV, making sure it fits in the buffer.
    //
    // On error nothing useful is left in the buffer and the caller must stop
    // walking the current level.
    pub fn decode(buf: &mut Bytes) -> DecodeResult<Self> {
        if buf.remaining() < TLV_HDR_SIZE {
            return Err(DecodeError::TruncatedTlvHeader(buf.remaining()));
        }

        let tlv_type = buf.read_u8()?;
        let length = buf.read_u16()?;
        let reserved = buf.read_u8()?;

        // The length field covers the reserved byte, so it can't be zero.
        if length == 0 {
            return Err(DecodeError::InvalidTlvLength(length));
        }

        // Check the remaining budget before advancing.
        let value_len = length as usize - 1;
        if value_len > buf.remaining() {
            // Report the bytes that were left for the length field to cover.
            return Err(DecodeError::TruncatedTlv {
                length,
                remaining: buf.remaining() + TLV_HDR_SIZE - TLV_LEN_OFFSET,
            });
        }
        let value = buf.copy_to_bytes(value_len);

        Ok(RawTlv {
            tlv_type,
            length,
            reserved,
            value,
        })
    }

    // Returns the total number of bytes the TLV takes on the wire.
    pub fn wire_len(&self) -> usize {
        self.length as usize + TLV_LEN_OFFSET
    }
}

// ===== impl TlvIter =====

impl TlvIter {
    // Creates an iterator over the first `budget` bytes of `buf`.
    pub fn new(
        mut buf: Bytes,
        budget: usize,
        level: TlvLevel,
        max_count: usize,
    ) -> TlvIter {
        buf.truncate(budget);
        TlvIter {
            buf,
            level,
            count: 0,
            max_count,
        }
    }
}

impl Iterator for TlvIter {
    type Item = RawTlv;

    fn next(&mut self) -> Option<RawTlv> {
        if self.buf.is_empty() {
            return None;
        }

        if self.count > self.max_count {
            Debug::SiblingLimitReached(self.level, self.max_count).log();
            self.buf.clear();
            return None;
        }

        match RawTlv::decode(&mut self.buf) {
            Ok(tlv) => {
                self.count += 1;
                Some(tlv)
            }
            Err(error) => {
                error.log();
                self.buf.clear();
                None
            }
        }
    }
}

impl std::iter::FusedIterator for TlvIter {}

// ===== impl SidInformation =====

impl SidInformation {
    // Size of the fields following the Sub-TLV header.
    pub const FIXED_LEN: usize = 20;
    // Sub-TLV length value covering the reserved byte and the fixed fields.
    pub const MIN_LENGTH: u16 = 21;

    pub fn decode(stlv_len: u16, buf: &mut Bytes) -> DecodeResult<Self> {
        // Validate the Sub-TLV length.
        if stlv_len < Self::MIN_LENGTH || buf.remaining() < Self::FIXED_LEN {
            return Err(DecodeError::InvalidTlvLength(stlv_len));
        }

        let sid_value = buf.read_ipv6()?;
        let flags = buf.read_u8()?;
        let endpoint_behavior = buf.read_u16()?;
        let reserved = buf.read_u8()?;

        Ok(SidInformation {
            sid_value,
            flags,
            endpoint_behavior,
            reserved,
        })
    }

    pub fn to_node(&self) -> Node {
        let mut node = Node::new();
        node.put("sid_value", self.sid_value.to_string());
        node.put("service_sid_flags", self.flags);
        node.put("endpoint_behavior_codepoint", self.endpoint_behavior);
        node.put(
            "endpoint_behavior",
            endpoint_behavior_name(self.endpoint_behavior),
        );
        node
    }
}

// ===== impl SidStructure =====

impl SidStructure {
    pub const LENGTH: usize = 6;

    pub fn decode(stlv_len: u16, buf: &mut Bytes) -> DecodeResult<Self> {
        // Validate the Sub-Sub-TLV length.
        if buf.remaining() < Self::LENGTH {
            return Err(DecodeError::InvalidTlvLength(stlv_len));
        }

        let locator_block_length = buf.read_u8()?;
        let locator_node_length = buf.read_u8()?;
        let function_length = buf.read_u8()?;
        let argument_length = buf.read_u8()?;
        let transposition_length = buf.read_u8()?;
        let transposition_offset = buf.read_u8()?;

        Ok(SidStructure {
            locator_block_length,
            locator_node_length,
            function_length,
            argument_length,
            transposition_length,
            transposition_offset,
        })
    }

    pub fn to_node(&self) -> Node {
        let mut node = Node::new();
        node.put("locator_block_length", self.locator_block_length);
        node.put("locator_node_length", self.locator_node_length);
        node.put("function_length", self.function_length);
        node.put("argument_length", self.argument_length);
        node.put("transposition_length", self.transposition_length);
        node.put("transposition_offset", self.transposition_offset);
        node
    }
}

// ===== global functions =====

/// Decodes the value of a BGP Prefix-SID attribute using the default limits.
///
/// See [`decode_attribute_with`].
pub fn decode_attribute(data: &[u8], attr_len: usize) -> DecodeResult<Node> {
    decode_attribute_with(data, attr_len, &DecodeCfg::default())
}

/// Decodes the value of a BGP Prefix-SID attribute.
///
/// Only the first `attr_len` bytes of `data` are considered. Malformed
/// content never makes this function fail: decoding of the affected level
/// stops and the tree built so far is returned. An error is returned only
/// when `attr_len` exceeds the size of `data`.
pub fn decode_attribute_with(
    data: &[u8],
    attr_len: usize,
    cfg: &DecodeCfg,
) -> DecodeResult<Node> {
    if attr_len > data.len() {
        return Err(DecodeError::AttrLengthExceedsBuffer {
            attr_len,
            buf_len: data.len(),
        });
    }

    let buf = Bytes::copy_from_slice(&data[..attr_len]);
    let mut node = Node::new();
    for tlv in TlvIter::new(buf, attr_len, TlvLevel::Attribute, cfg.max_tlvs) {
        let span =
            debug_span!("tlv", r#type = tlv.tlv_type, length = tlv.length);
        let _span_guard = span.enter();

        match PrefixSidTlvType::from_u8(tlv.tlv_type) {
            Some(PrefixSidTlvType::Srv6L3Service) => {
                let tlv_len = tlv.value.len();
                let l3_service =
                    decode_l3_service_with(tlv.value, tlv_len, cfg);
                node.add_child("srv6_l3_service", l3_service);
            }
            Some(tlv_type) => {
                Debug::TlvIgnored(tlv_type).log();
            }
            None => {
                Debug::TlvUnknown(TlvLevel::Attribute, tlv.tlv_type).log();
            }
        }
    }

    Ok(node)
}

/// Decodes the Sub-TLVs of an SRv6 L3 Service TLV using the default limits.
pub fn decode_l3_service(data: Bytes, tlv_len: usize) -> Node {
    decode_l3_service_with(data, tlv_len, &DecodeCfg::default())
}

/// Decodes the Sub-TLVs of an SRv6 L3 Service TLV.
///
/// `data` starts right after the TLV's reserved field and `tlv_len` is the
/// number of bytes taken by the Sub-TLVs.
pub fn decode_l3_service_with(
    data: Bytes,
    tlv_len: usize,
    cfg: &DecodeCfg,
) -> Node {
    let mut node = Node::new();
    let stlvs =
        TlvIter::new(data, tlv_len, TlvLevel::Srv6Service, cfg.max_sub_tlvs);
    for mut stlv in stlvs {
        let span = debug_span!(
            "sub-tlv",
            r#type = stlv.tlv_type,
            length = stlv.length
        );
        let _span_guard = span.enter();

        match Srv6ServiceSubTlvType::from_u8(stlv.tlv_type) {
            Some(Srv6ServiceSubTlvType::SidInformation) => {
                let info =
                    match SidInformation::decode(stlv.length, &mut stlv.value) {
                        Ok(info) => info,
                        Err(error) => {
                            error.log();
                            continue;
                        }
                    };
                Debug::SidInformationRx(&info).log();

                // Decode Sub-Sub-TLVs.
                let subtlv_len = (stlv.length - SidInformation::MIN_LENGTH)
                    as usize;
                let mut info_node = info.to_node();
                info_node.append(decode_sid_structure_with(
                    stlv.value, subtlv_len, cfg,
                ));
                node.add_child("sid_information", info_node);
            }
            None => {
                Debug::TlvUnknown(TlvLevel::Srv6Service, stlv.tlv_type).log();
            }
        }
    }

    node
}

/// Decodes the Sub-Sub-TLVs of an SRv6 SID Information Sub-TLV using the
/// default limits.
pub fn decode_sid_structure(data: Bytes, subtlv_len: usize) -> Node {
    decode_sid_structure_with(data, subtlv_len, &DecodeCfg::default())
}

/// Decodes the Sub-Sub-TLVs of an SRv6 SID Information Sub-TLV.
///
/// Every SID Structure found becomes a `sid_structure` child of the returned
/// node, ready to be merged into the SID Information node.
pub fn decode_sid_structure_with(
    data: Bytes,
    subtlv_len: usize,
    cfg: &DecodeCfg,
) -> Node {
    let mut node = Node::new();
    let sstlvs = TlvIter::new(
        data,
        subtlv_len,
        TlvLevel::Srv6SidInformation,
        cfg.max_sub_sub_tlvs,
    );
    for mut sstlv in sstlvs {
        let span = debug_span!(
            "sub-sub-tlv",
            r#type = sstlv.tlv_type,
            length = sstlv.length
        );
        let _span_guard = span.enter();

        match Srv6ServiceDataSubSubTlvType::from_u8(sstlv.tlv_type) {
            Some(Srv6ServiceDataSubSubTlvType::SidStructure) => {
                match SidStructure::decode(sstlv.length, &mut sstlv.value) {
                    Ok(structure) => {
                        Debug::SidStructureRx(&structure).log();
                        node.add_child("sid_structure", structure.to_node());
                    }
                    Err(error) => error.log(),
                }
            }
            None => {
                Debug::TlvUnknown(
                    TlvLevel::Srv6SidInformation,
                    sstlv.tlv_type,
                )
                .log();
            }
        }
    }

    node
}
