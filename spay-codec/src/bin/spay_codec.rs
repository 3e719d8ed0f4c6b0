//! `spay-codec` binary entry point.
//!
//! Prints key identifiers, decrypts tokens with a key directory and mints
//! mock tokens for gateway test cards.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use spay_codec::infrastructure::key_provider::pem_keys;
use spay_codec::{
    kid_from_public_key, CodecConfig, DecryptorRegistry, FilesystemKeyProvider, MockTokenBuilder,
    TestCard,
};
use tracing_subscriber::EnvFilter;

/// spay-codec CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "spay-codec")]
#[command(about = "Decode wallet-issued 3DS JWE payment credential tokens")]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the kid of a PEM private or public key.
    Kid {
        /// PEM file holding a PRIVATE KEY or PUBLIC KEY block.
        pem: PathBuf,
    },

    /// Decrypt a token and print the plaintext credential.
    Decrypt {
        /// Directory of PKCS8 PEM private keys.
        #[arg(short, long)]
        keys_dir: Option<PathBuf>,

        /// Profile version of the token.
        #[arg(short, long)]
        version: Option<String>,

        /// The token, or "-" to read it from stdin.
        #[arg(default_value = "-")]
        token: String,
    },

    /// Print a mock token for a test card and the plaintext sealed in it.
    Mock {
        /// Recipient PEM key (public, or private whose public half is used).
        #[arg(short, long)]
        public_key: PathBuf,

        /// Test card: visa, mastercard or amex.
        #[arg(short, long)]
        brand: Option<TestCard>,

        #[arg(short, long)]
        amount: Option<String>,

        #[arg(long)]
        currency: Option<String>,

        /// Pin the utc field (Unix milliseconds).
        #[arg(long)]
        utc: Option<i64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CodecConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CodecConfig::default(),
    };
    let log_level = args.log_level.as_deref().unwrap_or(&config.log_level);

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    match args.command {
        Command::Kid { pem } => print_kid(&pem),
        Command::Decrypt {
            keys_dir,
            version,
            token,
        } => {
            let keys_dir = keys_dir
                .or_else(|| config.decryptor.keys_dir.clone())
                .context("no key directory: pass --keys-dir or set decryptor.keys_dir")?;
            let version = version.unwrap_or_else(|| config.decryptor.version.clone());
            decrypt(&keys_dir, &version, &token)
        }
        Command::Mock {
            public_key,
            brand,
            amount,
            currency,
            utc,
        } => {
            let card = match brand {
                Some(card) => card,
                None => config
                    .mock
                    .brand
                    .parse()
                    .context("invalid mock.brand in config")?,
            };
            let mut builder = MockTokenBuilder::new(
                pem_keys::read_public_key(&public_key).context("reading recipient key")?,
            )
            .card(card)
            .amount(amount.unwrap_or_else(|| config.mock.amount.clone()))
            .currency(currency.unwrap_or_else(|| config.mock.currency.clone()));
            if let Some(utc) = utc {
                builder = builder.utc(utc);
            }

            let mock = builder.build().context("sealing mock token")?;
            println!("{}", mock.token);
            println!("{}", String::from_utf8_lossy(&mock.plaintext));
            Ok(())
        }
    }
}

fn print_kid(path: &Path) -> Result<()> {
    let public_key = pem_keys::read_public_key(path)
        .with_context(|| format!("reading key {}", path.display()))?;
    println!("{}", kid_from_public_key(&public_key)?);
    Ok(())
}

fn decrypt(keys_dir: &Path, version: &str, token: &str) -> Result<()> {
    let registry = DecryptorRegistry::with_default_profiles();
    let provider = Arc::new(
        FilesystemKeyProvider::open(keys_dir)
            .with_context(|| format!("opening key directory {}", keys_dir.display()))?,
    );
    let decryptor = registry.create(version, provider)?;

    let mut buf = String::new();
    let token = if token == "-" {
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading token from stdin")?;
        buf.as_str()
    } else {
        token
    };
    // The decoder takes the exact token; a shell argument or piped file may
    // carry a trailing newline.
    let token = token.trim();
    if token.is_empty() {
        bail!("empty token");
    }

    let plaintext = decryptor
        .decrypt(token.as_bytes())
        .context("decrypting token")?;
    tracing::info!(version, "token decrypted");
    println!("{}", String::from_utf8_lossy(&plaintext));
    Ok(())
}
