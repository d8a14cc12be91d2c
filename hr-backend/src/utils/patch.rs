// src/utils/patch.rs

//! 部分更新のための「真値のみ上書き」ヘルパー
//!
//! 更新リクエストで送られた値は、真値（空でない文字列、0でない数値、true、
//! 任意の配列やマップ）のときだけ既存値を置き換える。`0`、`""`、`false`、
//! `null` や省略されたフィールドは既存値を保持する。

use std::collections::HashMap;

pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for i32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V> Truthy for HashMap<K, V> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for chrono::DateTime<chrono::Utc> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for uuid::Uuid {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// 真値が渡されたときだけ `Some` を返す
pub fn truthy<T: Truthy>(value: Option<T>) -> Option<T> {
    value.filter(Truthy::is_truthy)
}

/// 真値が渡されたときは新しい値、そうでなければ既存値
pub fn patch<T: Truthy>(incoming: Option<T>, current: T) -> T {
    truthy(incoming).unwrap_or(current)
}
