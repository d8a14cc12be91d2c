// src/utils/password.rs

use crate::config::PasswordSettings;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// パスワード関連のエラー
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingError(#[from] argon2::password_hash::Error),

    #[error("Argon2 parameter error: {0}")]
    Argon2Error(#[from] argon2::Error),

    #[error("Weak password: {0}")]
    WeakPassword(String),

    #[error("Password configuration error: {0}")]
    ConfigurationError(String),
}

/// パスワード長の要件
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl PasswordPolicy {
    pub fn validate(&self) -> Result<(), PasswordError> {
        if self.min_length < 1 {
            return Err(PasswordError::ConfigurationError(
                "Minimum password length must be at least 1".to_string(),
            ));
        }

        if self.max_length < self.min_length {
            return Err(PasswordError::ConfigurationError(
                "Maximum password length must be greater than minimum".to_string(),
            ));
        }

        Ok(())
    }
}

/// パスワードハッシュマネージャー（Argon2id）
pub struct PasswordManager {
    argon2: Argon2<'static>,
    policy: PasswordPolicy,
}

impl PasswordManager {
    pub fn new(settings: &PasswordSettings) -> Result<Self, PasswordError> {
        let policy = PasswordPolicy {
            min_length: settings.min_length,
            max_length: settings.max_length,
        };
        policy.validate()?;

        let argon2 = Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            argon2::Params::new(
                settings.memory_cost,
                settings.time_cost,
                settings.parallelism,
                None,
            )
            .map_err(PasswordError::Argon2Error)?,
        );

        Ok(Self { argon2, policy })
    }

    /// パスワードをハッシュ化
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.validate_password_strength(password)?;

        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(PasswordError::HashingError)?;

        Ok(password_hash.to_string())
    }

    /// パスワードを検証（不一致は Ok(false)）
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(PasswordError::HashingError)?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::HashingError(e)),
        }
    }

    pub fn validate_password_strength(&self, password: &str) -> Result<(), PasswordError> {
        let length = password.chars().count();

        if length < self.policy.min_length {
            return Err(PasswordError::WeakPassword(format!(
                "Password must be at least {} characters long",
                self.policy.min_length
            )));
        }

        if length > self.policy.max_length {
            return Err(PasswordError::WeakPassword(format!(
                "Password must be no more than {} characters long",
                self.policy.max_length
            )));
        }

        Ok(())
    }
}
