use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use xtea_core::{RECOMMENDED_ROUNDS, codec};

#[derive(Parser)]
#[command(name = "xtea-cli")]
#[command(about = "XTEA single-block (en|de)crypt – CLI tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 64-bit block
    Encrypt {
        /// Block as 16 hex digits (little-endian words, v0 first)
        block: String,

        /// Key as 32 hex digits
        #[arg(short, long)]
        key: String,

        /// Number of Feistel cycles
        #[arg(short, long, default_value_t = RECOMMENDED_ROUNDS)]
        rounds: u32,
    },

    /// Decrypt one 64-bit block
    Decrypt {
        /// Block as 16 hex digits (little-endian words, v0 first)
        block: String,

        /// Key as 32 hex digits
        #[arg(short, long)]
        key: String,

        /// Number of Feistel cycles
        #[arg(short, long, default_value_t = RECOMMENDED_ROUNDS)]
        rounds: u32,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt { block, key, rounds } => {
            cmd_encrypt(&block, &key, rounds)?;
        }
        Commands::Decrypt { block, key, rounds } => {
            cmd_decrypt(&block, &key, rounds)?;
        }
    }

    Ok(())
}

fn cmd_encrypt(block_hex: &str, key_hex: &str, rounds: u32) -> Result<()> {
    let block = parse_block(block_hex)?;
    let key = parse_key(key_hex)?;

    let out = codec::encrypt(&block, &key, rounds).context("encryption failed")?;
    let words = codec::words_from_bytes(&out);

    println!("[info] rounds={}", rounds);
    println!("[info] v0=0x{:08x}  v1=0x{:08x}", words[0], words[1]);
    println!("[ok] cipher block -> {}", hex::encode(out));

    Ok(())
}

fn cmd_decrypt(block_hex: &str, key_hex: &str, rounds: u32) -> Result<()> {
    let block = parse_block(block_hex)?;
    let key = parse_key(key_hex)?;

    let out = codec::decrypt(&block, &key, rounds).context("decryption failed")?;
    let words = codec::words_from_bytes(&out);

    println!("[info] rounds={}", rounds);
    println!("[info] v0=0x{:08x}  v1=0x{:08x}", words[0], words[1]);
    println!("[ok] plain block -> {}", hex::encode(out));

    Ok(())
}

fn parse_block(s: &str) -> Result<[u8; 8]> {
    let bytes = hex::decode(s).context("block is not valid hex")?;
    if bytes.len() != 8 {
        bail!("block must be 16 hex digits (8 bytes), got {} bytes", bytes.len());
    }

    let mut out = [0u8; 8];
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn parse_key(s: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(s).context("key is not valid hex")?;
    if bytes.len() != 16 {
        bail!("key must be 32 hex digits (16 bytes), got {} bytes", bytes.len());
    }

    let mut out = [0u8; 16];
    out.copy_from_slice(&bytes);
    Ok(out)
}
