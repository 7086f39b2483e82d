use clap::Parser;
use dug_domain::{CliOverrides, DnsAnswer, DnsQuestion, DomainError, RecordType};
use dug_wire::{QueryBuilder, ResponseParser};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

mod bootstrap;
#[cfg(test)]
mod testutil;
mod transport;

use transport::{DnsTransport, UdpTransport};

#[derive(Parser)]
#[command(name = "dug")]
#[command(version)]
#[command(about = "DNS lookup tool with a hand-rolled wire codec")]
struct Cli {
    /// Record type to query (A, AAAA, CNAME, NS, PTR or TXT)
    record_type: String,

    /// Domain name to look up
    domain: String,

    /// DNS server IP; a random public resolver is used when omitted
    server: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Query timeout in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        query_timeout: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let record_type = RecordType::from_str(&cli.record_type)?;
    let server = pick_server(cli.server.as_deref(), &config.upstream_servers)?;
    let timeout = Duration::from_millis(config.query_timeout);
    let question = DnsQuestion::new(cli.domain.clone(), record_type);

    let started = Instant::now();
    let answers = resolve(&question, server, timeout).await?;

    println!("DNS server used: {}\n", server.ip());
    for answer in &answers {
        println!("Domain: {}", answer.name);
        println!("TTL: {}", answer.ttl);
        println!("Address: {}\n", answer.address);
    }
    println!("Resolved in {:.3}s", started.elapsed().as_secs_f64());

    Ok(())
}

/// Uses the server given on the command line, or draws one from the
/// configured pool.
fn pick_server(cli_server: Option<&str>, pool: &[String]) -> Result<SocketAddr, DomainError> {
    match cli_server {
        Some(server) => transport::parse_server_addr(server),
        None => {
            let chosen = fastrand::choice(pool).ok_or_else(|| {
                DomainError::InvalidServerAddress("empty upstream server pool".to_string())
            })?;
            debug!(server = %chosen, "picked random upstream");
            transport::parse_server_addr(chosen)
        }
    }
}

async fn resolve(
    question: &DnsQuestion,
    server: SocketAddr,
    timeout: Duration,
) -> Result<Vec<DnsAnswer>, DomainError> {
    let (id, query) = QueryBuilder::build_query_with_id(question)?;
    debug!(
        id,
        domain = %question.domain,
        record_type = %question.record_type,
        server = %server,
        "sending query"
    );

    let transport = UdpTransport::new(server);
    let response = transport.send(&query, timeout).await?;

    // The first datagram back wins; IDs are logged but not enforced.
    if response.len() >= 2 {
        let response_id = u16::from_be_bytes([response[0], response[1]]);
        if response_id != id {
            warn!(sent = id, received = response_id, "transaction ID mismatch");
        }
    }

    let answers = ResponseParser::parse(&response)?;
    info!(
        answers = answers.len(),
        protocol = transport.protocol_name(),
        "query resolved"
    );
    Ok(answers)
}
