use anyhow::{Context, Result};
use clap::Subcommand;
use wasm_bstring::{bech32, DecodedWitness};

#[derive(Subcommand)]
pub enum Bech32Command {
    /// Encode a witness program (hex) as a bech32 string
    Encode {
        /// Human-readable part (bc, tb, ltc, ...)
        hrp: String,
        /// Witness version (0-31)
        version: u8,
        /// Witness program as hex
        program: String,
        /// Use the bech32m checksum (BIP 350)
        #[arg(short = 'm', long)]
        bech32m: bool,
    },
    /// Decode a bech32 string to its HRP, version and program
    Decode {
        /// The bech32 string to decode
        input: String,
        /// Use the bech32m checksum (BIP 350)
        #[arg(short = 'm', long)]
        bech32m: bool,
    },
}

pub fn handle_command(command: Bech32Command) -> Result<()> {
    match command {
        Bech32Command::Encode {
            hrp,
            version,
            program,
            bech32m,
        } => {
            let program = hex::decode(&program).context("Invalid hex string for program")?;
            let encoded = if bech32m {
                bech32::encode_m(&hrp, &program, version)
            } else {
                bech32::encode(&hrp, &program, version)
            }
            .context("Failed to encode witness program")?;
            println!("{}", encoded);
            Ok(())
        }
        Bech32Command::Decode { input, bech32m } => {
            let decoded = if bech32m {
                bech32::decode_m(&input)
            } else {
                bech32::decode(&input)
            }
            .context("Failed to decode bech32 string")?;
            print!("{}", format_witness(&decoded));
            Ok(())
        }
    }
}

fn format_witness(decoded: &DecodedWitness) -> String {
    format!(
        "hrp: {}\nversion: {}\nprogram: {}\n",
        decoded.hrp,
        decoded.version,
        hex::encode(&decoded.program)
    )
}
