//! Command that generates ULIDs and converts them to and from 32 hex digits

use std::{io, io::Write, process::ExitCode};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ulid_core::Ulid;

#[derive(Parser, Debug)]
#[command(name = "ulid", about = "Generate and convert ULIDs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print newly generated ULIDs (default)
    Generate {
        /// Number of ULIDs to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Print the canonical string of a ULID given as 32 hex digits
    Encode { digits: String },
    /// Print the 32 hex digits of a ULID string
    Decode { ulid: String },
}

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let command = Cli::parse()
        .command
        .unwrap_or(Command::Generate { count: 1 });

    let mut buf = io::BufWriter::new(io::stdout());
    match command {
        Command::Generate { count } => {
            for _ in 0..count {
                match ulid_core::ulid() {
                    Ok(e) => writeln!(buf, "{}", e)?,
                    Err(err) => return fail(&mut buf, err),
                }
            }
        }
        Command::Encode { digits } => {
            let mut bytes = [0u8; 16];
            if let Err(err) = hex::decode_to_slice(digits.trim(), &mut bytes) {
                return fail(&mut buf, err);
            }
            writeln!(buf, "{}", Ulid::from(bytes))?;
        }
        Command::Decode { ulid } => match ulid.trim().parse::<Ulid>() {
            Ok(e) => writeln!(buf, "{}", hex::encode(e.as_bytes()))?,
            Err(err) => return fail(&mut buf, err),
        },
    }

    buf.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn fail(buf: &mut impl Write, err: impl std::fmt::Display) -> io::Result<ExitCode> {
    buf.flush()?;
    eprintln!("Error: {}", err);
    Ok(ExitCode::FAILURE)
}
