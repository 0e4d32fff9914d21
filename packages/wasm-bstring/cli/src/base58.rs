use anyhow::{Context, Result};
use clap::Subcommand;
use wasm_bstring::base58;

#[derive(Subcommand)]
pub enum Base58Command {
    /// Encode bytes (hex) as base58
    Encode {
        /// Data as hex
        data: String,
        /// Append a sha256d checksum (base58check)
        #[arg(short, long)]
        check: bool,
    },
    /// Decode a base58 string to bytes (hex)
    Decode {
        /// The base58 string to decode
        input: String,
        /// Verify and strip the base58check checksum
        #[arg(short, long)]
        check: bool,
    },
}

pub fn handle_command(command: Base58Command) -> Result<()> {
    match command {
        Base58Command::Encode { data, check } => {
            println!("{}", encode(&data, check)?);
            Ok(())
        }
        Base58Command::Decode { input, check } => {
            println!("{}", decode(&input, check)?);
            Ok(())
        }
    }
}

fn encode(data: &str, check: bool) -> Result<String> {
    let bytes = hex::decode(data).context("Invalid hex string for data")?;
    Ok(if check {
        base58::encode_check(&bytes)
    } else {
        base58::encode(&bytes)
    })
}

fn decode(input: &str, check: bool) -> Result<String> {
    let bytes = if check {
        base58::decode_check(input).context("Failed to decode base58check string")?
    } else {
        base58::decode(input).context("Failed to decode base58 string")?
    };
    Ok(hex::encode(bytes))
}
