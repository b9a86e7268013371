use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    convert::{self, ConvertArgs, ValueArgs},
    version::{self, VersionArgs},
};
use radix_core::Radix;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod output;

#[derive(Parser, Debug)]
#[command(name = "radix", about = "Convert between binary, hexadecimal and decimal numbers")]
struct Cli {
    /// Emit results and errors as canonical JSON.
    #[arg(long, global = true)]
    json: bool,
    /// Log validation details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a binary string ("0b...") to hexadecimal.
    BinToHex(ValueArgs),
    /// Convert a hexadecimal string ("0x...") to binary.
    HexToBin(ValueArgs),
    /// Convert a decimal integer to binary.
    DecToBin(ValueArgs),
    /// Convert a binary string to a decimal integer.
    BinToDec(ValueArgs),
    /// Convert a decimal integer to hexadecimal.
    DecToHex(ValueArgs),
    /// Convert a hexadecimal string to a decimal integer.
    HexToDec(ValueArgs),
    /// Convert between any two representations.
    Convert(ConvertArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    let result = match cli.command {
        Command::BinToHex(args) => convert::run(Radix::Binary, Radix::Hex, &args, json),
        Command::HexToBin(args) => convert::run(Radix::Hex, Radix::Binary, &args, json),
        Command::DecToBin(args) => convert::run(Radix::Decimal, Radix::Binary, &args, json),
        Command::BinToDec(args) => convert::run(Radix::Binary, Radix::Decimal, &args, json),
        Command::DecToHex(args) => convert::run(Radix::Decimal, Radix::Hex, &args, json),
        Command::HexToDec(args) => convert::run(Radix::Hex, Radix::Decimal, &args, json),
        Command::Convert(args) => convert::run(args.from, args.to, &args.value, json),
        Command::Version(args) => version::run(&args, json),
    };

    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
