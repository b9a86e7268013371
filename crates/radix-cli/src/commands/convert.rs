use std::error::Error;

use clap::Args;
use radix_core::{Radix, RadixError};
use serde::Serialize;
use tracing::{debug, warn};

use super::Outcome;
use crate::output::print_json;

#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Value to convert. Omitting it reports a missing argument.
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Representation of the input value: binary, hex or decimal.
    #[arg(long)]
    pub from: Radix,
    /// Representation to produce: binary, hex or decimal.
    #[arg(long)]
    pub to: Radix,
    #[command(flatten)]
    pub value: ValueArgs,
}

#[derive(Debug, Serialize)]
struct ConversionRecord<'a> {
    from: Radix,
    to: Radix,
    input: Option<&'a str>,
    output: Option<String>,
}

pub fn run(
    from: Radix,
    to: Radix,
    args: &ValueArgs,
    json: bool,
) -> Result<Outcome, Box<dyn Error>> {
    let input = args.value.as_deref();
    debug!(%from, %to, ?input, "converting");
    match radix_core::convert(input, from, to) {
        Ok(output) => {
            let outcome = if output.is_some() {
                Outcome::Converted
            } else {
                warn!(?input, %to, "negative decimal is outside the conversion domain");
                Outcome::NotApplicable
            };
            if json {
                print_json(&ConversionRecord { from, to, input, output })?;
            } else if let Some(output) = output {
                println!("{output}");
            }
            Ok(outcome)
        }
        Err(err) => {
            report(&err, json)?;
            Ok(Outcome::Rejected)
        }
    }
}

fn report(err: &RadixError, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        print_json(err)?;
    } else {
        eprintln!("error: {err}");
    }
    Ok(())
}
