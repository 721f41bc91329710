//! 口令校验与散列升级
//!
//! 演示账号以明文种子入库；首次登录成功后升级为 argon2 散列，
//! 之后走标准散列校验。明文比较走常量时间比较。

use crate::AuthError;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand_core::OsRng;
use subtle::ConstantTimeEq;

const ARGON2_PREFIX: &str = "$argon2";

/// 口令校验结果。
pub struct PasswordCheck {
    pub verified: bool,
    /// 明文种子校验通过时携带升级用的 argon2 散列。
    pub upgrade_hash: Option<String>,
}

impl PasswordCheck {
    fn rejected() -> Self {
        Self {
            verified: false,
            upgrade_hash: None,
        }
    }
}

/// 生成新的 argon2 散列。
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AuthError::Internal(err.to_string()))
}

/// 校验口令；存量值为明文种子且匹配时，同时产出升级散列。
pub fn verify_password_and_maybe_upgrade(
    stored: &str,
    password: &str,
) -> Result<PasswordCheck, AuthError> {
    if stored.starts_with(ARGON2_PREFIX) {
        return verify_hashed(stored, password);
    }
    verify_plaintext_seed(stored, password)
}

fn verify_hashed(stored: &str, password: &str) -> Result<PasswordCheck, AuthError> {
    let parsed =
        PasswordHash::new(stored).map_err(|err| AuthError::Internal(err.to_string()))?;
    Ok(PasswordCheck {
        verified: Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        upgrade_hash: None,
    })
}

fn verify_plaintext_seed(stored: &str, password: &str) -> Result<PasswordCheck, AuthError> {
    let matched: bool = stored.as_bytes().ct_eq(password.as_bytes()).into();
    if !matched {
        return Ok(PasswordCheck::rejected());
    }
    Ok(PasswordCheck {
        verified: true,
        upgrade_hash: Some(hash_password(password)?),
    })
}
