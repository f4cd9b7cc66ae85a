//! Price a forward with all three methods and print the comparison.
//!
//! Configuration comes from `FG_*` environment variables (or a `.env` file);
//! logging verbosity from `RUST_LOG`.

use forward_greeks::core::Result;
use forward_greeks::instruments::PricingEngine;
use forward_greeks::instruments::ForwardContract;
use forward_greeks::pricingengines::{
    AnalyticForwardEngine, FdForwardEngine, McForwardEngine, MethodComparison,
};
use forward_greeks::{OutputFormat, RunConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match RunConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cfg) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cfg: &RunConfig) -> Result<()> {
    let contract = cfg.contract()?;
    let market = cfg.market()?;
    tracing::info!(
        price_steps = cfg.fd.price_steps,
        time_steps = cfg.fd.time_steps,
        paths = cfg.mc.paths,
        "pricing forward"
    );

    let fd = FdForwardEngine::new(cfg.fd);
    let mc = McForwardEngine::new(cfg.mc);
    let analytic = AnalyticForwardEngine::new();
    let engines: [&dyn PricingEngine<ForwardContract>; 3] = [&fd, &mc, &analytic];
    let report = MethodComparison::run(&contract, &market, &engines)?;

    match cfg.output {
        OutputFormat::Table => print!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
