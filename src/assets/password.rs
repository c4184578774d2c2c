//! TFE administrator password
//!
//! A fresh random password is generated on every run unless an operator
//! supplies a pre-computed hash in `tls/tfe-password.hash`; in that case the
//! password file is written empty.

use std::path::Path;

use anyhow::anyhow;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use rand::Rng;
use tracing::debug;

use crate::domain::asset::{Asset, AssetKey, Parents, WritableAsset};
use crate::domain::entities::File;
use crate::domain::ports::FileFetcher;

/// Where the plaintext password is written
pub const TFE_PASSWORD_PATH: &str = "auth/tfe-password";

/// Optional operator-supplied hash
pub const TFE_PASSWORD_HASH_PATH: &str = "tls/tfe-password.hash";

/// Length of a generated password, dashes included
pub const PASSWORD_LENGTH: usize = 23;

const LOWER_LETTERS: &str = "abcdefghijkmnopqrstuvwxyz";
const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNPQRSTUVWXYZ";
const DIGITS: &str = "23456789";
const DASH_POSITIONS: [usize; 3] = [5, 11, 17];

/// The TFE user's password and its hash
#[derive(Debug, Default)]
pub struct TfePassword {
    password: String,
    password_hash: Vec<u8>,
    file: Option<File>,
}

impl TfePassword {
    /// Plaintext password; empty when only a hash was supplied
    pub fn password(&self) -> &str {
        &self.password
    }

    /// PHC-format hash of the password
    pub fn password_hash(&self) -> &[u8] {
        &self.password_hash
    }
}

/// Random password in `xxxxx-xxxxx-xxxxx-xxxxx` form.
///
/// Characters come from an alphabet without easily confused glyphs
/// (no `l`, `O`, `0` or `1`).
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R) -> String {
    let alphabet: Vec<char> = LOWER_LETTERS
        .chars()
        .chain(UPPER_LETTERS.chars())
        .chain(DIGITS.chars())
        .collect();
    (0..PASSWORD_LENGTH)
        .map(|i| {
            if DASH_POSITIONS.contains(&i) {
                '-'
            } else {
                alphabet[rng.gen_range(0..alphabet.len())]
            }
        })
        .collect()
}

/// Argon2id hash of `password` in PHC string format
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

impl Asset for TfePassword {
    fn name(&self) -> &str {
        "TFE Password"
    }

    fn dependencies(&self) -> Vec<AssetKey> {
        Vec::new()
    }

    fn generate(&mut self, _parents: &Parents) -> anyhow::Result<()> {
        let password = generate_password(&mut rand::thread_rng());
        self.password_hash = hash_password(&password)?.into_bytes();
        self.file = Some(File::new(TFE_PASSWORD_PATH, password.as_bytes()));
        self.password = password;
        Ok(())
    }

    fn as_writable(&self) -> Option<&dyn WritableAsset> {
        Some(self)
    }

    fn as_writable_mut(&mut self) -> Option<&mut dyn WritableAsset> {
        Some(self)
    }
}

impl WritableAsset for TfePassword {
    fn files(&self) -> Vec<&File> {
        self.file.iter().collect()
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> anyhow::Result<bool> {
        let Some(hash) = fetcher.fetch_optional(Path::new(TFE_PASSWORD_HASH_PATH))? else {
            return Ok(false);
        };
        debug!(file = TFE_PASSWORD_HASH_PATH, "Using supplied TFE password hash");
        self.password.clear();
        self.password_hash = hash.into_data();
        self.file = Some(File::new(TFE_PASSWORD_PATH, Vec::new()));
        Ok(true)
    }
}
