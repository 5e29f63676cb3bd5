use clap::{Parser, Subcommand};
use ipnet::{IpNet, Ipv4Net};
use log::info;
use serde_json::json;

use mpreach_codec::models::*;
use mpreach_codec::{construct_mp_reach_nlri, MpReachParser};

/// mpreach is a small cli tool to decode and build BGP MP_REACH_NLRI attributes.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a hex-encoded MP_REACH_NLRI attribute value
    Parse {
        /// Attribute value (after flags, type and length) as a hex string
        #[clap(name = "HEX")]
        value: String,

        /// NLRI entries carry ADD-PATH path identifiers
        #[clap(short, long)]
        add_path: bool,

        /// Output as JSON object
        #[clap(long)]
        json: bool,

        /// Pretty-print JSON output
        #[clap(long)]
        pretty: bool,
    },
    /// Build an IPv4 flow-spec MP_REACH_NLRI attribute and print it as hex
    Flowspec {
        /// Next hop address
        #[clap(short, long, default_value = "0.0.0.0")]
        next_hop: String,

        /// Match destination prefix
        #[clap(short, long)]
        dst: Option<Ipv4Net>,

        /// Match source prefix
        #[clap(short, long)]
        src: Option<Ipv4Net>,

        /// Match IP protocol numbers
        #[clap(short, long)]
        protocol: Vec<u8>,

        /// Match destination ports
        #[clap(short = 'P', long)]
        dst_port: Vec<u16>,
    },
}

/// OR-ed equality matches, one operator per value.
fn equal_to_any<T: Into<u64> + Copy>(values: &[T]) -> Vec<NumericOperator> {
    values
        .iter()
        .map(|v| NumericOperator::equal_to((*v).into()))
        .collect()
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::init();

    match opts.command {
        Command::Parse {
            value,
            add_path,
            json,
            pretty,
        } => {
            let bytes = match hex::decode(value.trim()) {
                Ok(b) => b,
                Err(err) => {
                    eprintln!("invalid hex input: {}", err);
                    std::process::exit(1);
                }
            };

            let attr = match MpReachParser::new(add_path).parse(bytes.into()) {
                Ok(attr) => attr,
                Err(err) => {
                    eprintln!("{} (update error subcode {})", err, u8::from(err.update_error()));
                    std::process::exit(1);
                }
            };

            if json {
                let val = json!(attr);
                let output = if pretty {
                    serde_json::to_string_pretty(&val)
                } else {
                    serde_json::to_string(&val)
                };
                match output {
                    Ok(s) => println!("{}", s),
                    Err(err) => {
                        eprintln!("{}", err);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("family:   {}", attr.family);
                println!("next hop: {}", attr.next_hop);
                match &attr.nlri {
                    NlriPayload::Parsed(ParsedNlri::Ipv6Unicast(prefixes)) => {
                        for prefix in prefixes {
                            println!("nlri:     {}", prefix);
                        }
                    }
                    NlriPayload::Parsed(ParsedNlri::VpnMpls(prefixes)) => {
                        for prefix in prefixes {
                            println!("nlri:     {:?}", prefix);
                        }
                    }
                    NlriPayload::Parsed(ParsedNlri::FlowSpec(components)) => {
                        for component in components {
                            println!("nlri:     {:?}", component);
                        }
                    }
                    NlriPayload::Opaque(bytes) => {
                        println!("nlri:     opaque {}", hex::encode(bytes));
                    }
                }
            }
        }
        Command::Flowspec {
            next_hop,
            dst,
            src,
            protocol,
            dst_port,
        } => {
            let mut components = vec![];
            if let Some(dst) = dst {
                components.push(FlowSpecComponent::DestinationPrefix(IpNet::V4(dst).into()));
            }
            if let Some(src) = src {
                components.push(FlowSpecComponent::SourcePrefix(IpNet::V4(src).into()));
            }
            if !protocol.is_empty() {
                components.push(FlowSpecComponent::IpProtocol(equal_to_any(&protocol)));
            }
            if !dst_port.is_empty() {
                components.push(FlowSpecComponent::DestinationPort(equal_to_any(&dst_port)));
            }
            info!("constructing flow-spec rule with {} components", components.len());

            let attr = MpReachAttribute::new_flowspec(next_hop, components);
            match construct_mp_reach_nlri(&attr) {
                Ok(bytes) => println!("{}", hex::encode(bytes)),
                Err(err) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                }
            }
        }
    }
}
