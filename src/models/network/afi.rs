use num_enum::{FromPrimitive, IntoPrimitive};
use std::fmt::{Display, Formatter};

/// AFI -- Address Family Identifier
///
/// <https://www.iana.org/assignments/address-family-numbers/address-family-numbers.xhtml>
///
/// Values this crate does not interpret are kept in [Afi::Unknown] so that they survive a
/// parse/construct cycle unchanged.
#[derive(Debug, PartialEq, FromPrimitive, IntoPrimitive, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Afi {
    Ipv4 = 1,
    Ipv6 = 2,
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// SAFI -- Subsequent Address Family Identifier
///
/// <https://www.iana.org/assignments/safi-namespace/safi-namespace.xhtml>
#[derive(Debug, PartialEq, FromPrimitive, IntoPrimitive, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Safi {
    Unicast = 1,
    Multicast = 2,
    /// <https://datatracker.ietf.org/doc/html/rfc8277>
    MplsLabel = 4,
    /// MPLS-labeled VPN address, <https://datatracker.ietf.org/doc/html/rfc4364>
    MplsVpn = 128,
    /// Dissemination of flow specification rules, <https://datatracker.ietf.org/doc/html/rfc8955>
    FlowSpec = 133,
    FlowSpecVpn = 134,
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// The (AFI, SAFI) pair that decides how next hop and NLRI of an MP_REACH_NLRI attribute are
/// interpreted.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressFamily {
    pub afi: Afi,
    pub safi: Safi,
}

impl AddressFamily {
    pub const IPV4_MPLS_VPN: AddressFamily = AddressFamily::new(Afi::Ipv4, Safi::MplsVpn);
    pub const IPV4_FLOWSPEC: AddressFamily = AddressFamily::new(Afi::Ipv4, Safi::FlowSpec);
    pub const IPV6_UNICAST: AddressFamily = AddressFamily::new(Afi::Ipv6, Safi::Unicast);

    pub const fn new(afi: Afi, safi: Safi) -> Self {
        AddressFamily { afi, safi }
    }

    /// Build the family from the numbers found on the wire.
    pub fn from_raw(afi: u16, safi: u8) -> Self {
        AddressFamily {
            afi: Afi::from(afi),
            safi: Safi::from(safi),
        }
    }

    /// Numeric (AFI, SAFI) codes as written on the wire.
    pub fn to_raw(&self) -> (u16, u8) {
        (u16::from(self.afi), u8::from(self.safi))
    }
}

impl Display for AddressFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (afi, safi) = self.to_raw();
        write!(f, "{}/{}", afi, safi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_afi_safi_repr() {
        assert_eq!(u16::from(Afi::Ipv4), 1);
        assert_eq!(u16::from(Afi::Ipv6), 2);
        assert_eq!(Afi::from(25u16), Afi::Unknown(25));
        assert_eq!(u16::from(Afi::Unknown(25)), 25);

        assert_eq!(u8::from(Safi::Unicast), 1);
        assert_eq!(u8::from(Safi::MplsVpn), 128);
        assert_eq!(u8::from(Safi::FlowSpec), 133);
        assert_eq!(Safi::from(133u8), Safi::FlowSpec);
        assert_eq!(Safi::from(70u8), Safi::Unknown(70));
    }

    #[test]
    fn test_address_family() {
        let family = AddressFamily::from_raw(1, 133);
        assert_eq!(family, AddressFamily::IPV4_FLOWSPEC);
        assert_eq!(family.to_raw(), (1, 133));
        assert_eq!(family.to_string(), "1/133");

        let family = AddressFamily::from_raw(16388, 71);
        assert_eq!(family.afi, Afi::Unknown(16388));
        assert_eq!(family.safi, Safi::Unknown(71));
        assert_eq!(family.to_raw(), (16388, 71));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_afi_safi_serde() {
        let afi = Afi::Ipv4;
        let serialized = serde_json::to_string(&afi).unwrap();
        assert_eq!(serialized, "\"Ipv4\"");
        let deserialized: Afi = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, afi);

        let safi = Safi::FlowSpec;
        let serialized = serde_json::to_string(&safi).unwrap();
        assert_eq!(serialized, "\"FlowSpec\"");
        let deserialized: Safi = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, safi);
    }
}
