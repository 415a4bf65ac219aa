use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::{ArgAction, Parser, Subcommand};
use huffpack::io::{compress_file, decompress_file, inspect};
use log::{error, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Static Huffman file compressor.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u64,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compress a file
    Compress { input: PathBuf, output: PathBuf },
    /// Decompress a file produced by `compress`
    Decompress { input: PathBuf, output: PathBuf },
    /// Print the header and code table of a compressed file
    Inspect { input: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("huffpack: logger unavailable: {}", e);
    }

    if let Err(e) = run(cli.command) {
        error!("{}", e);
        eprintln!("huffpack: {}", e);
        exit(1);
    }
}

fn run(command: Command) -> huffpack::Result<()> {
    match command {
        Command::Compress { input, output } => {
            let stats = compress_file(&input, &output)?;
            println!(
                "{} -> {}: {} -> {} bytes ({:.1}%)",
                input.display(),
                output.display(),
                stats.input_bytes,
                stats.output_bytes,
                stats.ratio() * 100.0
            );
        }
        Command::Decompress { input, output } => {
            let stats = decompress_file(&input, &output)?;
            println!(
                "{} -> {}: {} -> {} bytes",
                input.display(),
                output.display(),
                stats.input_bytes,
                stats.output_bytes
            );
        }
        Command::Inspect { input } => {
            let container = fs::read(&input)?;
            let summary = inspect(&container)?;
            println!("entries:      {}", summary.header.table.len());
            println!("symbols:      {}", summary.header.symbol_count);
            println!("padding bits: {}", summary.header.padding_bits);
            println!("header bytes: {}", summary.header_bytes);
            println!("payload bytes: {}", summary.payload_bytes);
            if let Some(codes) = summary.codes {
                for (symbol, code) in codes.iter() {
                    let bits: String = code.iter().map(|b| if *b { '1' } else { '0' }).collect();
                    println!(
                        "  {:#04x} x{:<10} {}",
                        symbol,
                        summary.header.table.get(symbol),
                        bits
                    );
                }
            }
        }
    }
    Ok(())
}
