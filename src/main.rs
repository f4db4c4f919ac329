use anyhow::{Context, Result};
use caesarclue::Caesar;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// Ciphertext decrypted by the `demo` command.
const SAMPLE: &str = "xlmw mw xli tmgxyvi xlex m xsso mr xli xvmt.";

#[derive(Parser)]
#[command(name = "caesarclue")]
#[command(about = "Caesar cipher with known-word shift recovery")]
#[command(version)]
struct Cli {
    /// Clue word to search for when decrypting (repeatable, replaces defaults)
    #[arg(
        long = "clue",
        global = true,
        env = "CAESARCLUE_CLUES",
        value_delimiter = ','
    )]
    clues: Vec<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message
    Encrypt {
        /// Plaintext (a-z, '.', space, CR, LF; at most 80 characters)
        text: String,
        /// Rotation amount (non-negative)
        #[arg(long, short)]
        shift: i64,
    },
    /// Recover plaintext and shift from a ciphertext
    Decrypt {
        /// Ciphertext to recover
        text: String,
    },
    /// Decrypt a built-in sample message
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("caesarclue=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("caesarclue=warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let caesar = if cli.clues.is_empty() {
        Caesar::new()
    } else {
        Caesar::with_clues(&cli.clues).context("Failed to configure clue words")?
    };

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Encrypt { text, shift } => {
            let cipher = caesar
                .encrypt(&text, shift)
                .context("Failed to encrypt message")?;
            println!("{cipher}");
        }
        Commands::Decrypt { text } => {
            let r = caesar
                .decrypt(&text)
                .context("Failed to decrypt message")?;
            println!("plaintext: {}", r.plaintext);
            println!("shift    : {}", r.shift);
            println!("clue     : {} (at {})", r.clue, r.position);
        }
        Commands::Demo => {
            println!("in : '{SAMPLE}'");
            match caesar.decrypt(SAMPLE) {
                Ok(r) => {
                    println!("out: '{}'", r.plaintext);
                    println!("sh : {}", r.shift);
                    println!("err: none");
                }
                Err(e) => {
                    println!("out: ''");
                    println!("sh : 0");
                    println!("err: {e}");
                }
            }
        }
    }
    Ok(())
}
