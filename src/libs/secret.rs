//! Encrypted at-rest storage for the Clockify API key.
//!
//! The key is never written to the configuration file. It is encrypted with
//! AES-256-CBC (PKCS7 padding), base64-encoded and stored in the application
//! data directory. Encryption keys are embedded at build time by `build.rs`,
//! either from the environment or derived from the package name.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    value: Option<String>,
    prompt: String,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_name: &str, prompt: &str) -> Self {
        // Compile-time embedded keys
        let key = APP_METADATA_ENCRYPTION_KEY.to_vec();
        let iv = APP_METADATA_ENCRYPTION_IV.to_vec();

        let secret_file_path = DataStorage::new().get_path(secret_name).unwrap_or_else(|_| PathBuf::from(secret_name));

        Self {
            value: None,
            secret_file_path,
            prompt: prompt.to_owned(),
            key,
            iv,
        }
    }

    fn with_value(&self, value: &str) -> Self {
        Self {
            value: Some(value.to_owned()),
            ..self.clone()
        }
    }

    /// Returns the stored secret, prompting for it when nothing usable is
    /// cached on disk.
    pub fn get_or_prompt(&self) -> Result<String> {
        if fs::metadata(&self.secret_file_path).is_ok() {
            if let Ok(value) = self.decrypt() {
                return Ok(value);
            }
        }
        self.prompt()
    }

    /// Prompts interactively and caches the entered secret.
    pub fn prompt(&self) -> Result<String> {
        let value = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.store(&value)?;
        Ok(value)
    }

    /// Encrypts a value and writes it to the secret file, replacing any
    /// previously stored value.
    pub fn store(&self, value: &str) -> Result<()> {
        self.with_value(value).encrypt()?;
        Ok(())
    }

    /// Removes the stored secret. Missing files count as already deleted.
    pub fn delete(&self) -> Result<bool> {
        if fs::metadata(&self.secret_file_path).is_ok() {
            fs::remove_file(&self.secret_file_path)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn encrypt(&self) -> Result<Self> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let value = self.value.clone().unwrap_or_default();
        let ciphertext = cipher.encrypt_vec(value.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.secret_file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let mut file = File::create(&self.secret_file_path)?;
        file.write_all(encoded.as_bytes())?;

        Ok(self.clone())
    }

    fn decrypt(&self) -> Result<String> {
        let mut file = File::open(&self.secret_file_path)?;
        let mut encoded = String::new();
        file.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded)?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let decrypted = cipher.decrypt_vec(&ciphertext)?;
        let value = String::from_utf8(decrypted)?;

        Ok(value)
    }
}
