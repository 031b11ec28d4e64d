use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use codec::Offset;

mod demo;

/// Scramble text files with an additive Caesar offset, and read them back.
#[derive(Parser)]
#[command(name = "caesar")]
struct Args {
    /// Log debug events
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a text file. The offset is stored in the output.
    Encrypt {
        source: PathBuf,
        dest: PathBuf,

        /// Integer offset, magnitude at most 255. Random in [1, 254] if omitted.
        #[arg(short, long, allow_negative_numbers = true)]
        offset: Option<Offset>,
    },

    /// Decode a file produced by `encrypt`.
    Decrypt { source: PathBuf, dest: PathBuf },

    /// Write a sample encoded file and print it back decoded.
    Demo { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .compact()
        .init();

    match args.command {
        Command::Encrypt {
            source,
            dest,
            offset,
        } => {
            let offset = codec::encrypt(&source, &dest, offset)
                .with_context(|| format!("Failed to encrypt {:?} to {:?}", source, dest))?;
            tracing::info!("Encrypted {:?} to {:?} with offset {}", source, dest, offset);
        }
        Command::Decrypt { source, dest } => {
            let offset = codec::decrypt(&source, &dest)
                .with_context(|| format!("Failed to decrypt {:?} to {:?}", source, dest))?;
            tracing::info!("Decrypted {:?} to {:?} (offset {})", source, dest, offset);
        }
        Command::Demo { file } => {
            println!("Content of the file when decrypted:");
            for line in demo::run(&file)? {
                print!("{}", line);
            }
            println!();
        }
    }

    Ok(())
}
