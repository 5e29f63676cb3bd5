#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use mpreach_codec::models::*;
    use mpreach_codec::{
        construct_mp_reach_nlri, parse_mp_reach_nlri, ConstructErrorKind, MpReachParser,
        ParserError, UpdateError,
    };
    use std::net::Ipv6Addr;
    use std::str::FromStr;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn value_from_hex(s: &str) -> Bytes {
        Bytes::from(hex::decode(s.replace(' ', "")).unwrap())
    }

    #[test]
    fn test_ipv6_unicast_example() {
        init_logger();
        let value = value_from_hex(
            "0002 01 10 00000000000000000000000000000001 00 20 20010db8",
        );
        let attr = parse_mp_reach_nlri(value).unwrap();
        assert_eq!(attr.family, AddressFamily::from_raw(2, 1));
        assert_eq!(
            attr.next_hop,
            NextHop::Ipv6 {
                global: Ipv6Addr::LOCALHOST,
                link_local: None
            }
        );
        assert_eq!(
            attr.nlri,
            NlriPayload::Parsed(ParsedNlri::Ipv6Unicast(vec![
                NetworkPrefix::from_str("2001:db8::/32").unwrap()
            ]))
        );
    }

    #[test]
    fn test_ipv6_link_local_next_hop() {
        let global = Ipv6Addr::from_str("2001:db8:0:1::1").unwrap();
        let link_local = Ipv6Addr::from_str("fe80::250:56ff:fe8a:1").unwrap();
        let mut value = vec![0x00, 0x02, 0x01, 0x20];
        value.extend(global.octets());
        value.extend(link_local.octets());
        value.push(0x00);
        value.extend_from_slice(
            &NetworkPrefix::from_str("2001:db8:1::/48")
                .unwrap()
                .encode(),
        );
        value.extend_from_slice(&NetworkPrefix::from_str("::/0").unwrap().encode());

        let attr = parse_mp_reach_nlri(Bytes::from(value)).unwrap();
        assert_eq!(attr.next_hop.global(), Some(global));
        assert_eq!(attr.next_hop.link_local(), Some(link_local));
        assert_eq!(attr.next_hop.to_string(), format!("{} ({})", global, link_local));
        let prefixes = attr.ipv6_prefixes().unwrap();
        assert_eq!(prefixes.len(), 2);
        assert_eq!(prefixes[1].prefix.prefix_len(), 0);
    }

    #[test]
    fn test_ipv6_next_hop_length_rejected() {
        for len in [0usize, 4, 15, 17, 31, 33] {
            let mut value = vec![0x00, 0x02, 0x01, len as u8];
            value.extend(std::iter::repeat(0xAA).take(len));
            value.push(0x00);
            let input = Bytes::from(value);
            let err = parse_mp_reach_nlri(input.clone()).unwrap_err();
            assert!(
                matches!(err, ParserError::AttributeLength { .. }),
                "next hop length {} accepted",
                len
            );
            assert_eq!(err.bytes(), &input);
            assert_eq!(err.update_error(), UpdateError::ATTRIBUTE_LENGTH_ERROR);
        }
    }

    #[test]
    fn test_truncated_values() {
        let full = value_from_hex("0002 01 10 00000000000000000000000000000001 00 20 20010db8");
        // every cut inside the header, next hop or reserved byte is a length error
        for cut in 0..21 {
            let err = parse_mp_reach_nlri(full.slice(..cut)).unwrap_err();
            assert!(matches!(err, ParserError::AttributeLength { .. }));
            assert_eq!(err.bytes(), &full.slice(..cut));
        }
        // cuts inside the NLRI are NLRI errors
        for cut in 22..full.len() {
            let err = parse_mp_reach_nlri(full.slice(..cut)).unwrap_err();
            assert!(matches!(err, ParserError::InvalidNlri { .. }));
        }
        // NLRI field can be empty
        assert!(parse_mp_reach_nlri(full.slice(..21)).is_ok());
    }

    #[test]
    fn test_opaque_round_trips_bytes() {
        let value = value_from_hex("0001 02 04 0a000001 00 18c00002 100a00");
        let attr = parse_mp_reach_nlri(value).unwrap();
        assert_eq!(attr.family, AddressFamily::new(Afi::Ipv4, Safi::Multicast));
        assert_eq!(attr.next_hop, NextHop::Raw(value_from_hex("0a000001")));
        assert_eq!(attr.nlri, NlriPayload::Opaque(value_from_hex("18c00002100a00")));

        // IPv6 multicast is not decoded either
        let value = value_from_hex("0002 02 00 00 deadbeef");
        let attr = parse_mp_reach_nlri(value).unwrap();
        assert!(attr.nlri.is_opaque());
        assert_eq!(attr.next_hop, NextHop::Raw(Bytes::new()));
    }

    #[test]
    fn test_vpn_mpls_with_add_path() {
        let value = value_from_hex(
            "0001 80 0c 0000000000000000c0000201 00 \
             0000000a 70 000641 0000fde800000001 0a0102 \
             0000000b 70 0007d1 0001c0000201000a c63364",
        );
        let attr = MpReachParser::new(true).parse(value).unwrap();
        let prefixes = attr.vpn_prefixes().unwrap();
        assert_eq!(prefixes.len(), 2);
        assert_eq!(prefixes[0].path_id, Some(10));
        assert_eq!(prefixes[0].labels[0].label, 100);
        assert_eq!(prefixes[0].to_string(), "65000:1:10.1.2.0/24");
        assert_eq!(prefixes[1].labels[0].label, 125);
        assert_eq!(prefixes[1].rd.to_string(), "192.0.2.1:10");
        assert_eq!(prefixes[1].prefix.to_string(), "198.51.100.0/24");
    }

    #[test]
    fn test_flowspec_construct_then_parse() {
        init_logger();
        let components = vec![
            FlowSpecComponent::DestinationPrefix(NetworkPrefix::from_str("203.0.113.0/24").unwrap()),
            FlowSpecComponent::SourcePrefix(NetworkPrefix::from_str("198.51.100.7/32").unwrap()),
            FlowSpecComponent::IpProtocol(vec![NumericOperator::equal_to(17)]),
            FlowSpecComponent::DestinationPort(vec![
                NumericOperator::greater_than_or_equal(1024),
                NumericOperator::equal_to(53),
            ]),
            FlowSpecComponent::PacketLength(vec![NumericOperator::less_than_or_equal(1500)]),
            FlowSpecComponent::Fragment(vec![BitmaskOperator::partial_match(0x01)]),
        ];
        let attr = MpReachAttribute::new_flowspec("198.51.100.1", components);
        let bytes = construct_mp_reach_nlri(&attr).unwrap();

        assert_eq!(bytes[0], 0x80);
        assert_eq!(bytes[1], 14);
        assert_eq!(bytes[2] as usize, bytes.len() - 3);

        let parsed = parse_mp_reach_nlri(bytes.slice(3..)).unwrap();
        assert_eq!(parsed.family, AddressFamily::IPV4_FLOWSPEC);
        assert_eq!(parsed.next_hop, NextHop::Raw(value_from_hex("c6336401")));

        // order preserved, end-of-list bits set only on the last operator
        let parsed_components = parsed.flowspec_components().unwrap();
        assert_eq!(parsed_components.len(), 6);
        let FlowSpecComponent::DestinationPort(ops) = &parsed_components[3] else {
            panic!("expected destination port");
        };
        assert!(!ops[0].end_of_list);
        assert!(ops[1].end_of_list);
        assert_eq!(ops[0].value, 1024);
        assert_eq!(ops[1].value, 53);
        assert_eq!(parsed_components, attr.flowspec_components().unwrap());
    }

    #[test]
    fn test_flowspec_ipv6_next_hop() {
        let attr = MpReachAttribute::new_flowspec(
            "2001:db8::1",
            vec![FlowSpecComponent::IpProtocol(vec![NumericOperator::equal_to(6)])],
        );
        let bytes = construct_mp_reach_nlri(&attr).unwrap();
        assert_eq!(bytes[6], 16);
        let parsed = parse_mp_reach_nlri(bytes.slice(3..)).unwrap();
        assert_eq!(
            parsed.next_hop,
            NextHop::Raw(Bytes::copy_from_slice(
                &Ipv6Addr::from_str("2001:db8::1").unwrap().octets()
            ))
        );
    }

    #[test]
    fn test_construct_errors() {
        let attr = MpReachAttribute::new_flowspec("192.0.2.1", vec![]);
        assert_eq!(construct_mp_reach_nlri(&attr).unwrap(), Bytes::new());

        let attr = MpReachAttribute::new(
            AddressFamily::IPV6_UNICAST,
            NextHop::ipv6(Ipv6Addr::LOCALHOST, None),
            NlriPayload::Parsed(ParsedNlri::Ipv6Unicast(vec![])),
        );
        let err = construct_mp_reach_nlri(&attr).unwrap_err();
        assert_eq!(err.kind, ConstructErrorKind::UnsupportedFamily);
        assert_eq!(*err.value, attr);

        let attr = MpReachAttribute::new(
            AddressFamily::IPV4_MPLS_VPN,
            NextHop::Raw(Bytes::new()),
            NlriPayload::Parsed(ParsedNlri::VpnMpls(vec![])),
        );
        assert_eq!(
            construct_mp_reach_nlri(&attr).unwrap_err().kind,
            ConstructErrorKind::NotSupported
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json() {
        let value = value_from_hex("0002 01 10 00000000000000000000000000000001 00 20 20010db8");
        let attr = parse_mp_reach_nlri(value).unwrap();
        let json = serde_json::to_string(&attr).unwrap();
        let back: MpReachAttribute = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attr);
    }
}
