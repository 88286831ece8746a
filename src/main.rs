use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use huffc::{Alphabet, HuffmanCoder};

#[derive(Debug, Parser)]
#[command(name = "huffc")]
#[command(about = "Per-message prefix-free text coder")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Restrict the accepted characters to the ones given here.
    #[arg(long, global = true)]
    alphabet: Option<String>,

    /// Filter for diagnostic output, e.g. "debug".
    #[arg(long, global = true, default_value = "warn")]
    log: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the bit-string encoding of a message ("-" reads stdin).
    Encode { message_file: String },

    /// Rebuild the coder from the original message and decode a bit-string.
    Decode {
        message_file: String,
        coded_file: String,

        /// Reject characters other than '0' and '1' instead of reading
        /// them as '0'.
        #[arg(long)]
        strict: bool,
    },

    /// Print the symbol-to-code table built from a message.
    Table { message_file: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .init();

    let alphabet = match &args.alphabet {
        Some(chars) => Alphabet::new(chars.chars()),
        None => Alphabet::standard(),
    };

    match args.command {
        Command::Encode { message_file } => {
            let message = read_input(&message_file)?;
            let coder = HuffmanCoder::with_alphabet(&message, alphabet)?;
            tracing::debug!(symbols = coder.code_table().len(), "built coder");
            println!("{}", coder.encode(&message));
        }
        Command::Decode {
            message_file,
            coded_file,
            strict,
        } => {
            let message = read_input(&message_file)?;
            let coded = read_input(&coded_file)?;
            let mut coder = HuffmanCoder::with_alphabet(&message, alphabet)?;
            if strict {
                coder = coder.strict();
            }
            tracing::debug!(bits = coded.trim_end().len(), "decoding");
            println!("{}", coder.decode(coded.trim_end())?);
        }
        Command::Table { message_file } => {
            let message = read_input(&message_file)?;
            let coder = HuffmanCoder::with_alphabet(&message, alphabet)?;
            for entry in coder.code_table() {
                println!("{}\t{}", display_symbol(entry.symbol), entry.code);
            }
        }
    }

    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("read {path}"))
    }
}

fn display_symbol(symbol: char) -> String {
    match symbol {
        ' ' => "' '".into(),
        '\t' => "'\\t'".into(),
        '\n' => "'\\n'".into(),
        _ => symbol.to_string(),
    }
}
