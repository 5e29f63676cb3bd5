use bytes::Bytes;
use std::fmt::{Display, Formatter};
use std::net::Ipv6Addr;

/// Next hop carried in an MP_REACH_NLRI attribute.
///
/// Only the IPv6 unicast family has its next hop decoded. Every other family keeps the
/// next-hop field as raw bytes so nothing is lost. [NextHop::Textual] is an input form for
/// building attributes from configuration-style values.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NextHop {
    Raw(Bytes),
    Textual(String),
    /// RFC 2545: a global address, optionally followed by a link-local address when the
    /// advertising speaker shares a subnet with the peer.
    Ipv6 {
        global: Ipv6Addr,
        link_local: Option<Ipv6Addr>,
    },
}

impl NextHop {
    pub fn ipv6(global: Ipv6Addr, link_local: Option<Ipv6Addr>) -> Self {
        NextHop::Ipv6 { global, link_local }
    }

    pub fn textual<S: Into<String>>(addr: S) -> Self {
        NextHop::Textual(addr.into())
    }

    /// Global IPv6 address, if this is a decoded IPv6 next hop.
    pub const fn global(&self) -> Option<Ipv6Addr> {
        match self {
            NextHop::Ipv6 { global, .. } => Some(*global),
            _ => None,
        }
    }

    /// Link-local IPv6 address, present only for 32-byte IPv6 next hops.
    pub const fn link_local(&self) -> Option<Ipv6Addr> {
        match self {
            NextHop::Ipv6 { link_local, .. } => *link_local,
            _ => None,
        }
    }
}

impl Display for NextHop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NextHop::Raw(bytes) => {
                for b in bytes.iter() {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
            NextHop::Textual(addr) => write!(f, "{}", addr),
            NextHop::Ipv6 {
                global,
                link_local: None,
            } => write!(f, "{}", global),
            NextHop::Ipv6 {
                global,
                link_local: Some(link_local),
            } => write!(f, "{} ({})", global, link_local),
        }
    }
}
