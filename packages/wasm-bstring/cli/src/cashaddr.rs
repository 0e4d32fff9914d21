use anyhow::{Context, Result};
use clap::Subcommand;
use wasm_bstring::{cashaddr, AddressRecord};

#[derive(Subcommand)]
pub enum CashAddrCommand {
    /// Encode a hash (hex) as a cashaddr
    Encode {
        /// Address prefix (bitcoincash, bchtest, ecash, ...)
        prefix: String,
        /// Address type (0 = P2PKH, 1 = P2SH)
        #[arg(value_name = "TYPE")]
        kind: u8,
        /// Hash as hex
        hash: String,
    },
    /// Decode a cashaddr to its prefix, type and hash
    Decode {
        /// The cashaddr to decode, with or without prefix
        input: String,
        /// Prefix assumed when the input has none
        #[arg(short, long, default_value = "bitcoincash")]
        prefix: String,
    },
}

pub fn handle_command(command: CashAddrCommand) -> Result<()> {
    match command {
        CashAddrCommand::Encode { prefix, kind, hash } => {
            let hash = hex::decode(&hash).context("Invalid hex string for hash")?;
            let address =
                cashaddr::encode(&prefix, kind, &hash).context("Failed to encode cashaddr")?;
            println!("{}", address);
            Ok(())
        }
        CashAddrCommand::Decode { input, prefix } => {
            let record = cashaddr::decode(&input, &prefix).context("Failed to decode cashaddr")?;
            print!("{}", format_record(&record));
            Ok(())
        }
    }
}

fn format_record(record: &AddressRecord) -> String {
    format!(
        "prefix: {}\ntype: {}\nhash: {}\n",
        record.prefix,
        record.kind,
        hex::encode(&record.hash)
    )
}
