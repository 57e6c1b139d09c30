//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::TryGetError;
use serde::{Deserialize, Serialize};
use tracing::warn;

// Type aliases.
pub type DecodeResult<T> = Result<T, DecodeError>;

// BGP Prefix-SID decoding errors.
//
// Apart from `AttrLengthExceedsBuffer`, these never reach the caller of the
// attribute decoder: they end the walk at the nesting level where they were
// detected, and whatever was decoded until then is kept.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum DecodeError {
    ReadOutOfBounds,
    InvalidIntWidth(usize),
    TruncatedTlvHeader(usize),
    InvalidTlvLength(u16),
    TruncatedTlv { length: u16, remaining: usize },
    AttrLengthExceedsBuffer { attr_len: usize, buf_len: usize },
}

// ===== impl DecodeError =====

impl DecodeError {
    pub(crate) fn log(&self) {
        match self {
            DecodeError::InvalidIntWidth(width) => {
                warn!(%width, "{}", self);
            }
            DecodeError::TruncatedTlvHeader(remaining) => {
                warn!(%remaining, "{}", self);
            }
            DecodeError::InvalidTlvLength(length) => {
                warn!(%length, "{}", self);
            }
            DecodeError::TruncatedTlv { length, remaining } => {
                warn!(%length, %remaining, "{}", self);
            }
            DecodeError::AttrLengthExceedsBuffer { attr_len, buf_len } => {
                warn!(%attr_len, %buf_len, "{}", self);
            }
            DecodeError::ReadOutOfBounds => {
                warn!("{}", self);
            }
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::ReadOutOfBounds => {
                write!(f, "attempt to read out of bounds")
            }
            DecodeError::InvalidIntWidth(width) => {
                write!(f, "invalid integer width: {width}")
            }
            DecodeError::TruncatedTlvHeader(remaining) => {
                write!(f, "truncated TLV header: {remaining} bytes left")
            }
            DecodeError::InvalidTlvLength(length) => {
                write!(f, "invalid TLV length: {length}")
            }
            DecodeError::TruncatedTlv { length, remaining } => {
                write!(
                    f,
                    "TLV length {length} exceeds the remaining {remaining} bytes"
                )
            }
            DecodeError::AttrLengthExceedsBuffer { attr_len, buf_len } => {
                write!(
                    f,
                    "attribute length {attr_len} exceeds buffer size {buf_len}"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<TryGetError> for DecodeError {
    fn from(_error: TryGetError) -> DecodeError {
        DecodeError::ReadOutOfBounds
    }
}
