/*!
mpreach-codec decodes and encodes the BGP MP_REACH_NLRI path attribute ([RFC 4760][rfc4760]).

Given the value bytes of an MP_REACH_NLRI attribute, the parser produces an [MpReachAttribute]
made of the (AFI, SAFI) pair, the next hop and the NLRI. Given an [MpReachAttribute], the
constructor produces the complete attribute bytes, header included.

# Supported address families

| AFI  | SAFI           | Next hop                          | NLRI                                     |
|------|----------------|-----------------------------------|------------------------------------------|
| IPv4 | MPLS VPN (128) | raw bytes                         | [LabeledVpnPrefix] list                  |
| IPv4 | Flow-spec (133)| raw bytes                         | [FlowSpecComponent] list (one rule)      |
| IPv6 | Unicast (1)    | global and optional link-local    | [NetworkPrefix] list                     |
| IPv4 | other          | raw bytes                         | opaque bytes, preserved as-is            |
| other| any            | raw bytes                         | opaque bytes, preserved as-is            |

Only IPv4 flow-spec attributes can be constructed.

# Examples

## Parsing

```
use bytes::Bytes;
use mpreach_codec::models::*;
use mpreach_codec::parse_mp_reach_nlri;

let value = Bytes::from_static(&[
    0x00, 0x02, 0x01, 0x10, // IPv6 unicast, 16-byte next hop
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, // ::1
    0x00, // reserved
    0x20, 0x20, 0x01, 0x0d, 0xb8, // 2001:db8::/32
]);
let attr = parse_mp_reach_nlri(value).unwrap();
assert_eq!(attr.family, AddressFamily::IPV6_UNICAST);
assert_eq!(attr.next_hop.global(), Some("::1".parse().unwrap()));
assert_eq!(attr.next_hop.link_local(), None);
assert_eq!(attr.ipv6_prefixes().unwrap()[0].to_string(), "2001:db8::/32");
```

Sessions that negotiated ADD-PATH use a [MpReachParser]:

```
use bytes::Bytes;
use mpreach_codec::MpReachParser;

let parser = MpReachParser::new(true);
let value = Bytes::from_static(&[
    0x00, 0x02, 0x01, 0x10,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    0x00,
    0x00, 0x00, 0x00, 0x01, 0x20, 0x20, 0x01, 0x0d, 0xb8, // path id 1
]);
let attr = parser.parse(value).unwrap();
assert_eq!(attr.ipv6_prefixes().unwrap()[0].path_id, Some(1));
```

## Constructing

```
use mpreach_codec::models::*;
use mpreach_codec::construct_mp_reach_nlri;

let attr = MpReachAttribute::new_flowspec(
    "192.0.2.1",
    vec![
        FlowSpecComponent::DestinationPrefix("192.0.2.0/24".parse().unwrap()),
        FlowSpecComponent::IpProtocol(vec![NumericOperator::equal_to(6)]),
    ],
);
let bytes = construct_mp_reach_nlri(&attr).unwrap();
assert_eq!(&bytes[..3], &[0x80, 0x0E, 0x12]);

// an empty rule has nothing to advertise
let empty = MpReachAttribute::new_flowspec("192.0.2.1", vec![]);
assert!(construct_mp_reach_nlri(&empty).unwrap().is_empty());
```

# Errors

Decoding fails with a [ParserError] that carries the offending bytes and maps to an UPDATE
Message Error subcode through [ParserError::update_error]. Construction fails with a
[ConstructError] that carries the value that could not be encoded.

[rfc4760]: https://datatracker.ietf.org/doc/html/rfc4760
*/

pub mod error;
pub mod models;
pub mod parser;

pub use error::{ConstructError, ConstructErrorKind, ParserError, UpdateError};
pub use models::*;
pub use parser::{construct_mp_reach_nlri, parse_mp_reach_nlri, MpReachParser};
