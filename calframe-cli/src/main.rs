use anyhow::{Context, Result, anyhow};
use calframe_lib::{
    EncodedFrame, FrameEncoder,
    calendar::FrameField,
    clock::{Clock, FixedClock, SystemClock},
};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, command};
use indoc::printdoc;
use std::{
    io::{self, Write},
    str::FromStr,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Hex,
    Compact,
    Raw,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "hex" => OutputFormat::Hex,
            "compact" => OutputFormat::Compact,
            "raw" => OutputFormat::Raw,
            _ => anyhow::bail!("Valid formats are: 'hex', 'compact', and 'raw'"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timestamp(NaiveDateTime);

impl FromStr for Timestamp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
            .map(Timestamp)
            .map_err(|_| anyhow!("Expected a timestamp like '2021-07-27 10:10:35'"))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the date/time frame for now, or for the given local time
    Encode {
        #[arg(long)]
        at: Option<Timestamp>,
        #[arg(short, long, default_value = "hex")]
        format: OutputFormat,
    },
    /// Print every field of the frame followed by its hex dump
    Show {
        #[arg(long)]
        at: Option<Timestamp>,
    },
}

fn encode_with<C: Clock>(clock: C) -> Result<EncodedFrame> {
    FrameEncoder::new(clock)
        .encode_now()
        .map_err(|e| anyhow!("Failed to encode frame: {}", e))
}

fn encode_at(at: Option<Timestamp>) -> Result<EncodedFrame> {
    match at {
        Some(Timestamp(instant)) => encode_with(FixedClock(instant)),
        None => encode_with(SystemClock),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Encode { at, format } => {
            let encoded = encode_at(at)?;
            match format {
                OutputFormat::Hex => println!("{}", encoded.frame.to_hex()),
                OutputFormat::Compact => println!("{}", encoded.frame.to_hex_compact()),
                OutputFormat::Raw => {
                    let mut stdout = io::stdout().lock();
                    stdout
                        .write_all(encoded.frame.as_bytes())
                        .and_then(|_| stdout.flush())
                        .context("Failed to write frame to stdout")?;
                }
            }
        }
        Commands::Show { at } => {
            let encoded = encode_at(at)?;
            let fields = encoded.fields;

            printdoc!(
                r#"
                MESSAGE:
                  - {:<13} {}
                  - {:<13} {}
                  - {:<13} {}
                  - {:<13} {}
                  - {:<13} {}
                  - {:<13} {}
                  - {:<13} {}

                Sampled at: {}
                Frame:      {}
                "#,
                FrameField::Second.label(),
                fields.second,
                FrameField::Minute.label(),
                fields.minute,
                FrameField::Hour.label(),
                fields.hour,
                FrameField::DayOfMonth.label(),
                fields.day_of_month,
                FrameField::DayOfWeek.label(),
                fields.day_of_week,
                FrameField::Month.label(),
                fields.month,
                FrameField::Year.label(),
                fields.year,
                encoded.timestamp.format(DATE_TIME_FORMAT),
                encoded.frame,
            );
        }
    }
    Ok(())
}
