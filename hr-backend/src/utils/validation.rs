use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::{ValidateEmail, ValidationError};

/// 電話番号用正規表現（数字、空白、+、-、括弧）
pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9()\-\s]{6,20}$").unwrap());

/// 電話番号バリデーション
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone_number")
            .with_message(Cow::from("Invalid phone number")))
    }
}

/// 空白のみの文字列を拒否
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message(Cow::from("must not be blank")))
    } else {
        Ok(())
    }
}

/// 更新用メールアドレス検証（空文字は未指定として通す）
pub fn validate_email_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message(Cow::from("Invalid email format")))
    }
}

/// LIKE / ILIKE 用に検索語をエスケープし部分一致パターンにする
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
