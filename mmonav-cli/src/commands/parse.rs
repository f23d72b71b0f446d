//! Show how a piece of text scrubs and parses.
//!
//! Handy for debugging a game profile: paste a log line or a coordinate
//! string and see exactly what the pipeline makes of it.

use std::error::Error;

use clap::Args;

use mmonav::coord::parse_coordinates;
use mmonav::logline::{try_parse_log_line, DEFAULT_LOG_PATTERN};
use mmonav::scrub::scrub_entry;

use super::CoordinateFlags;

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Text to run through the pipeline
    pub text: String,

    /// Treat the text as a raw log line and extract the location report first
    #[arg(long)]
    pub log_line: bool,

    /// Location pattern for --log-line (case-insensitive)
    #[arg(long, default_value = DEFAULT_LOG_PATTERN)]
    pub pattern: String,

    #[command(flatten)]
    pub coords: CoordinateFlags,
}

pub fn run(args: ParseArgs) -> Result<(), Box<dyn Error>> {
    let text = if args.log_line {
        match try_parse_log_line(&args.text, &args.pattern) {
            Some(tokens) => {
                println!("log line:  {}", args.text);
                println!("extracted: {tokens}");
                tokens
            }
            None => {
                println!("no location report found in line");
                return Ok(());
            }
        }
    } else {
        let scrubbed = scrub_entry(&args.text);
        if scrubbed == args.text {
            println!("scrubbed:  (unchanged) {scrubbed}");
        } else {
            println!("scrubbed:  {scrubbed}");
        }
        scrubbed
    };

    match parse_coordinates(&text, args.coords.order()) {
        Some(data) => {
            println!("order:     {}", args.coords.order());
            println!("x: {}", data.x);
            println!("y: {}", data.y);
            match data.z {
                Some(z) => println!("z: {z}"),
                None => println!("z: -"),
            }
            match data.heading {
                Some(h) => println!("heading: {h}"),
                None => println!("heading: -"),
            }
        }
        None => println!("not a coordinate under order \"{}\"", args.coords.order()),
    }

    Ok(())
}
