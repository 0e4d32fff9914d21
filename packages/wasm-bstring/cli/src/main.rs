use anyhow::Result;
use clap::{Parser, Subcommand};

mod base58;
mod bech32;
mod cashaddr;

#[derive(Parser)]
#[command(name = "wasm-bstring-cli")]
#[command(about = "CLI tool for Base58, Bech32 and CashAddr strings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Base58 and Base58Check encoding and decoding
    Base58 {
        #[command(subcommand)]
        command: base58::Base58Command,
    },
    /// Bech32 and Bech32m witness address encoding and decoding
    Bech32 {
        #[command(subcommand)]
        command: bech32::Bech32Command,
    },
    /// CashAddr encoding and decoding
    Cashaddr {
        #[command(subcommand)]
        command: cashaddr::CashAddrCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Base58 { command } => base58::handle_command(command),
        Commands::Bech32 { command } => bech32::handle_command(command),
        Commands::Cashaddr { command } => cashaddr::handle_command(command),
    }
}
