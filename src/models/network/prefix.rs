use bytes::{BufMut, Bytes, BytesMut};
use ipnet::IpNet;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// A representation of a network prefix with an optional ADD-PATH path identifier.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkPrefix {
    pub prefix: IpNet,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub path_id: Option<u32>,
}

// Attempt to reduce the size of the debug output
impl Debug for NetworkPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.path_id {
            Some(path_id) => write!(f, "{}#{}", self.prefix, path_id),
            None => write!(f, "{}", self.prefix),
        }
    }
}

impl FromStr for NetworkPrefix {
    type Err = ipnet::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let prefix = IpNet::from_str(s)?;
        Ok(NetworkPrefix {
            prefix,
            path_id: None,
        })
    }
}

impl NetworkPrefix {
    pub fn new(prefix: IpNet, path_id: Option<u32>) -> NetworkPrefix {
        NetworkPrefix { prefix, path_id }
    }

    /// Encodes the prefix in the RFC 4760 NLRI form: `[path id] length-in-bits address-bytes`.
    ///
    /// The path identifier is only written when present.
    ///
    /// ```rust
    /// use std::str::FromStr;
    /// use mpreach_codec::models::NetworkPrefix;
    ///
    /// let prefix = NetworkPrefix::from_str("2001:db8::/32").unwrap();
    /// assert_eq!(prefix.encode().as_ref(), &[32, 0x20, 0x01, 0x0d, 0xb8]);
    /// ```
    pub fn encode(&self) -> Bytes {
        let mut bytes = BytesMut::new();

        if let Some(path_id) = self.path_id {
            bytes.put_u32(path_id);
        }

        let bit_len = self.prefix.prefix_len();
        let byte_len = bit_len.div_ceil(8) as usize;
        bytes.put_u8(bit_len);

        match self.prefix {
            IpNet::V4(prefix) => {
                bytes.put_slice(&prefix.addr().octets()[0..byte_len]);
            }
            IpNet::V6(prefix) => {
                bytes.put_slice(&prefix.addr().octets()[0..byte_len]);
            }
        };
        bytes.freeze()
    }
}

impl From<IpNet> for NetworkPrefix {
    fn from(prefix: IpNet) -> Self {
        NetworkPrefix::new(prefix, None)
    }
}

impl Display for NetworkPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fromstr() {
        let network_prefix = NetworkPrefix::from_str("2001:db8::/32").unwrap();
        assert_eq!(
            network_prefix.prefix,
            IpNet::from_str("2001:db8::/32").unwrap()
        );
        assert_eq!(network_prefix.path_id, None);
        assert!(NetworkPrefix::from_str("2001:db8::/129").is_err());
    }

    #[test]
    fn test_encode() {
        let prefix = IpNet::from_str("192.168.0.0/24").unwrap();
        let network_prefix = NetworkPrefix::new(prefix, Some(1));
        assert_eq!(
            network_prefix.encode().as_ref(),
            &[0, 0, 0, 1, 24, 192, 168, 0]
        );

        let network_prefix = NetworkPrefix::from_str("::/0").unwrap();
        assert_eq!(network_prefix.encode().as_ref(), &[0]);
    }

    #[test]
    fn test_display() {
        let prefix = IpNet::from_str("192.168.0.0/24").unwrap();
        let network_prefix = NetworkPrefix::new(prefix, Some(1));
        assert_eq!(network_prefix.to_string(), "192.168.0.0/24");
        assert_eq!(format!("{network_prefix:?}"), "192.168.0.0/24#1");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serialization() {
        let prefix = IpNet::from_str("192.168.0.0/24").unwrap();
        let network_prefix = NetworkPrefix::new(prefix, Some(1));
        let serialized = serde_json::to_string(&network_prefix).unwrap();
        assert_eq!(serialized, "{\"prefix\":\"192.168.0.0/24\",\"path_id\":1}");
        let deserialized: NetworkPrefix = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, network_prefix);
    }
}
