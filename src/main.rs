use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;

use signal_net::ast::Strings;
use signal_net::{solve, Interpreter, Report};

#[derive(Parser)]
#[command(name = "signal-net", version, about = "Resolve every wire of a 16-bit signal network")]
struct Cli {
    /// Circuit description, one definition per line
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: u8,
    /// Part 2: wire whose value is read after the first run
    #[arg(long, default_value = "a")]
    probe: String,
    /// Part 2: wire overridden with the probed value before the second run
    #[arg(long, default_value = "b")]
    target: String,
}

fn run(cli: &Cli) -> Result<String> {
    let code = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let mut ctx = Strings::default();
    let (network, solution) =
        solve(&code, &mut ctx).with_context(|| format!("evaluating {}", cli.input.display()))?;

    if cli.part == 1 {
        return Ok(Report::new(&solution, &ctx).to_string());
    }

    let probe = ctx
        .lookup(&cli.probe)
        .ok_or_else(|| anyhow!("no wire named `{}`", cli.probe))?;
    let target = ctx
        .lookup(&cli.target)
        .ok_or_else(|| anyhow!("no wire named `{}`", cli.target))?;
    let value = solution
        .get(probe)
        .ok_or_else(|| anyhow!("wire `{}` has no value", cli.probe))?;
    info!("overriding {} with {} = {}", cli.target, cli.probe, value);

    let network = network.with_literal(target, value, &ctx)?;
    let solution = Interpreter::new(&network)
        .run(&ctx)
        .with_context(|| format!("re-evaluating with {} = {}", cli.target, value))?;
    Ok(Report::new(&solution, &ctx).to_string())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let report = run(&cli)?;
    print!("{report}");
    Ok(())
}
