//! KVCONF CLI
//!
//! Resolves client options the way a client constructor would and prints
//! the resulting configuration.

use clap::{Parser, ValueEnum};
use kvconf::{build, parse_option, BaseClient, ClientVariant, StandaloneClient};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Variant {
    /// Shared connection options only
    Base,
    /// Adds database index selection
    Standalone,
}

/// KVCONF - Client Configuration Resolver
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Client variant whose whitelist applies
    #[arg(long, value_enum, default_value_t = Variant::Standalone)]
    variant: Variant,

    /// Option as key=value (repeatable)
    #[arg(short, long = "option", value_name = "KEY=VALUE")]
    options: Vec<String>,

    /// Print the default configuration and ignore --option
    #[arg(long)]
    defaults: bool,
}

fn main() -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    fmt()
        .with_env_filter(EnvFilter::try_new(kvconf::log_directives(rust_log.as_deref()))?)
        .init();

    let args = Args::parse();

    let variant: &dyn ClientVariant = match args.variant {
        Variant::Base => &BaseClient,
        Variant::Standalone => &StandaloneClient,
    };

    let config = if args.defaults {
        variant.default_configuration()
    } else {
        let options = args
            .options
            .iter()
            .map(|s| parse_option(s))
            .collect::<kvconf::Result<Vec<_>>>()?;
        build(options, variant)
    };

    info!(variant = variant.name(), keys = config.len(), "Resolved configuration");

    for line in config.display_lines() {
        println!("{}", line);
    }
    println!("address = {}", config.address()?);

    Ok(())
}
