//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv6Addr;

use bytes::{Buf, Bytes};

use crate::packet::error::{DecodeError, DecodeResult};

// Checked read methods for TLV buffers.
//
// Every read either consumes exactly the requested number of bytes or fails
// without touching the buffer.
pub trait TlvCursor {
    /// Copies `N` bytes from `self` verbatim.
    ///
    /// The current position is advanced by `N`.
    fn read_bytes<const N: usize>(&mut self) -> DecodeResult<[u8; N]>;

    /// Gets an unsigned integer of `n` bytes (at most 8) from `self`.
    ///
    /// With `network_order` set the bytes are taken as big-endian, otherwise
    /// the first byte in the buffer is the least significant one.
    ///
    /// The current position is advanced by `n`.
    fn read_uint(
        &mut self,
        n: usize,
        network_order: bool,
    ) -> DecodeResult<u64>;

    /// Gets an unsigned 8 bit integer from `self`.
    ///
    /// The current position is advanced by 1.
    fn read_u8(&mut self) -> DecodeResult<u8>;

    /// Gets an unsigned 16 bit integer from `self` in big-endian byte order.
    ///
    /// The current position is advanced by 2.
    fn read_u16(&mut self) -> DecodeResult<u16>;

    /// Gets an IPv6 addr from `self`, keeping the wire byte order.
    ///
    /// The current position is advanced by 16.
    fn read_ipv6(&mut self) -> DecodeResult<Ipv6Addr>;
}

// ===== impl Bytes =====

impl TlvCursor for Bytes {
    fn read_bytes<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        if self.remaining() < N {
            return Err(DecodeError::ReadOutOfBounds);
        }

        let mut bytes = [0; N];
        self.copy_to_slice(&mut bytes);
        Ok(bytes)
    }

    fn read_uint(
        &mut self,
        n: usize,
        network_order: bool,
    ) -> DecodeResult<u64> {
        if n > std::mem::size_of::<u64>() {
            return Err(DecodeError::InvalidIntWidth(n));
        }
        if n == 0 {
            return Ok(0);
        }

        let value = if network_order {
            self.try_get_uint(n)?
        } else {
            self.try_get_uint_le(n)?
        };
        Ok(value)
    }

    fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.try_get_u8()?)
    }

    fn read_u16(&mut self) -> DecodeResult<u16> {
        Ok(self.try_get_u16()?)
    }

    fn read_ipv6(&mut self) -> DecodeResult<Ipv6Addr> {
        let octets = self.read_bytes::<16>()?;
        Ok(Ipv6Addr::from(octets))
    }
}
