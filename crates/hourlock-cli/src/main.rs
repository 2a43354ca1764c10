//! # Hourlock CLI
//!
//! Client-side proof computation for the Hourlock protocol. Runs entirely
//! offline: given the secret key from registration and the challenge key from
//! the server, it derives the proof to submit to `/verify`.
//!
//! ## Usage
//! ```bash
//! # Compute a proof for the current UTC window
//! hourlock prove --key1 4821 --key2 9173
//!
//! # Compute against an explicit seed (e.g. the one echoed by /challenge)
//! hourlock prove --key1 4821 --key2 9173 --seed 2814
//!
//! # Print the current window seed
//! hourlock window
//! ```

use clap::{Parser, Subcommand};

use hourlock_common::constants::DEFAULT_KEY_LENGTH;
use hourlock_common::proof::derive_proof;
use hourlock_common::window::current_window;

/// Hourlock proof calculator
#[derive(Parser, Debug)]
#[command(name = "hourlock")]
#[command(author, version, about = "Compute Hourlock proofs and window seeds", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the proof for a secret/challenge key pair
    Prove {
        /// Secret key (key1) from registration
        #[arg(long)]
        key1: u64,

        /// Challenge key (key2) from the server
        #[arg(long)]
        key2: u64,

        /// Window seed (defaults to the current UTC window)
        #[arg(long)]
        seed: Option<i64>,

        /// Significant digits kept in the proof (must match the server)
        #[arg(long, default_value_t = DEFAULT_KEY_LENGTH)]
        key_length: u32,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the current window seed
    Window {
        /// Offset added to the seed
        #[arg(long, default_value = "0")]
        offset: i64,
    },
}

fn main() {
    let args = Args::parse();

    match args.command {
        Command::Prove {
            key1,
            key2,
            seed,
            key_length,
            json,
        } => {
            let seed = seed.unwrap_or_else(|| current_window(0));

            match derive_proof(key1, key2, seed, key_length) {
                Ok(token) => {
                    if json {
                        println!(
                            "{}",
                            serde_json::json!({
                                "key1": key1,
                                "key2": key2,
                                "seed": seed,
                                "token": token,
                            })
                        );
                    } else {
                        println!("{token}");
                    }
                }
                Err(err) => {
                    eprintln!("Error: {err}");
                    std::process::exit(1);
                }
            }
        }

        Command::Window { offset } => {
            println!("{}", current_window(offset));
        }
    }
}
