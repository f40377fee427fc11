//! `gangway secret` - generate a fresh shared-secret credential.

use anyhow::Result;
use gangway_core::auth::CREDENTIAL_LEN;
use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub fn execute() -> Result<()> {
    println!("{}", generate());
    Ok(())
}

/// Generates a credential of the fixed length over `[A-Z0-9]`.
fn generate() -> String {
    let mut rng = rand::thread_rng();
    (0..CREDENTIAL_LEN)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}
