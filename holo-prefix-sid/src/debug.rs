//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::debug;

use crate::packet::consts::{PrefixSidTlvType, endpoint_behavior_name};
use crate::packet::prefix_sid::{SidInformation, SidStructure, TlvLevel};

// BGP Prefix-SID debug messages.
#[derive(Debug)]
pub enum Debug<'a> {
    TlvIgnored(PrefixSidTlvType),
    TlvUnknown(TlvLevel, u8),
    SiblingLimitReached(TlvLevel, usize),
    SidInformationRx(&'a SidInformation),
    SidStructureRx(&'a SidStructure),
}

// ===== impl Debug =====

impl Debug<'_> {
    // Log debug message using the tracing API.
    pub(crate) fn log(&self) {
        match self {
            Debug::TlvIgnored(tlv_type) => {
                // Parent span(s): tlv
                debug!(?tlv_type, code = *tlv_type as u8, "{}", self);
            }
            Debug::TlvUnknown(level, tlv_type) => {
                // Parent span(s): tlv | sub-tlv | sub-sub-tlv
                debug!(%level, r#type = %tlv_type, "{}", self);
            }
            Debug::SiblingLimitReached(level, max) => {
                debug!(%level, %max, "{}", self);
            }
            Debug::SidInformationRx(info) => {
                // Parent span(s): tlv, sub-tlv
                let raw = info
                    .sid_value
                    .octets()
                    .chunks(2)
                    .map(|chunk| format!("{:02X}{:02X}", chunk[0], chunk[1]))
                    .collect::<Vec<_>>()
                    .join(":");
                let flags = format!("{:02X}", info.flags);
                let behavior = endpoint_behavior_name(info.endpoint_behavior);
                debug!(
                    sid_value = %info.sid_value, %raw, %flags,
                    endpoint_behavior = %behavior, "{}", self
                );
            }
            Debug::SidStructureRx(structure) => {
                // Parent span(s): tlv, sub-tlv, sub-sub-tlv
                debug!(
                    locator_block_length = %structure.locator_block_length,
                    locator_node_length = %structure.locator_node_length,
                    function_length = %structure.function_length,
                    argument_length = %structure.argument_length,
                    transposition_length = %structure.transposition_length,
                    transposition_offset = %structure.transposition_offset,
                    "{}", self
                );
            }
        }
    }
}

impl std::fmt::Display for Debug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Debug::TlvIgnored(tlv_type) => {
                write!(f, "{tlv_type:?} TLV not supported, skipping")
            }
            Debug::TlvUnknown(level, tlv_type) => {
                write!(f, "unknown TLV type {tlv_type} in {level}, skipping")
            }
            Debug::SiblingLimitReached(..) => {
                write!(f, "too many TLVs at the same level, stop decoding")
            }
            Debug::SidInformationRx(..) => {
                write!(f, "SRv6 SID Information sub-TLV")
            }
            Debug::SidStructureRx(..) => {
                write!(f, "SRv6 SID Structure sub-sub-TLV")
            }
        }
    }
}
