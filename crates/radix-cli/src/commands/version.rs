use std::error::Error;

use clap::Args;
use serde::Serialize;

use super::Outcome;
use crate::output::print_json;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Include the conversion library version.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    core_version: &'static str,
}

pub fn run(args: &VersionArgs, json: bool) -> Result<Outcome, Box<dyn Error>> {
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        core_version: radix_core::VERSION,
    };
    if json {
        print_json(&info)?;
    } else if args.long {
        println!("radix {} (radix-core {})", info.version, info.core_version);
    } else {
        println!("{}", info.version);
    }
    Ok(Outcome::Converted)
}
