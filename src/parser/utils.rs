/*!
Provides IO utility functions for read bytes of different length and converting to corresponding structs.
*/
use crate::models::*;
use bytes::{Buf, Bytes};
use ipnet::{Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};
use thiserror::Error;

/// Low-level read failure. Decoders turn it into a [ParserError](crate::ParserError) that
/// carries the family and the bytes being decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ReadError {
    #[error("not enough bytes: need {needed}, {remaining} remaining")]
    NotEnoughBytes { needed: usize, remaining: usize },
    #[error("invalid network prefix mask")]
    InvalidPrefixLength(#[from] ipnet::PrefixLenError),
    #[error("{0}")]
    Malformed(String),
}

impl ReadUtils for Bytes {}

// Allow reading IPs from Reads
pub(crate) trait ReadUtils: Buf {
    #[inline]
    fn has_n_remaining(&self, n: usize) -> Result<(), ReadError> {
        if self.remaining() < n {
            Err(ReadError::NotEnoughBytes {
                needed: n,
                remaining: self.remaining(),
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8, ReadError> {
        self.has_n_remaining(1)?;
        Ok(self.get_u8())
    }

    #[inline]
    fn read_u16(&mut self) -> Result<u16, ReadError> {
        self.has_n_remaining(2)?;
        Ok(self.get_u16())
    }

    #[inline]
    fn read_u32(&mut self) -> Result<u32, ReadError> {
        self.has_n_remaining(4)?;
        Ok(self.get_u32())
    }

    fn read_ipv6_address(&mut self) -> Result<Ipv6Addr, ReadError> {
        self.has_n_remaining(16)?;
        let buf = self.get_u128();
        Ok(Ipv6Addr::from(buf))
    }

    fn read_n_bytes(&mut self, n_bytes: usize) -> Result<Bytes, ReadError> {
        self.has_n_remaining(n_bytes)?;
        Ok(self.copy_to_bytes(n_bytes))
    }

    fn read_route_distinguisher(&mut self) -> Result<RouteDistinguisher, ReadError> {
        self.has_n_remaining(8)?;
        let mut rd = [0u8; 8];
        self.copy_to_slice(&mut rd);
        Ok(RouteDistinguisher(rd))
    }

    fn read_mpls_label(&mut self) -> Result<MplsLabel, ReadError> {
        self.has_n_remaining(3)?;
        let mut label = [0u8; 3];
        self.copy_to_slice(&mut label);
        Ok(MplsLabel::from_bytes(label))
    }

    /// Read the address part of an NLRI prefix whose bit length has already been consumed.
    fn read_ipv4_prefix_bits(&mut self, bit_len: u8) -> Result<Ipv4Net, ReadError> {
        if bit_len > 32 {
            return Err(ReadError::Malformed(format!(
                "invalid IPv4 prefix length: {}",
                bit_len
            )));
        }
        let byte_len = bit_len.div_ceil(8) as usize;
        self.has_n_remaining(byte_len)?;
        let mut buff = [0u8; 4];
        self.copy_to_slice(&mut buff[..byte_len]);
        Ok(Ipv4Net::new(Ipv4Addr::from(buff), bit_len)?)
    }

    fn read_ipv6_prefix_bits(&mut self, bit_len: u8) -> Result<Ipv6Net, ReadError> {
        if bit_len > 128 {
            return Err(ReadError::Malformed(format!(
                "invalid IPv6 prefix length: {}",
                bit_len
            )));
        }
        let byte_len = bit_len.div_ceil(8) as usize;
        self.has_n_remaining(byte_len)?;
        let mut buff = [0u8; 16];
        self.copy_to_slice(&mut buff[..byte_len]);
        Ok(Ipv6Net::new(Ipv6Addr::from(buff), bit_len)?)
    }
}
