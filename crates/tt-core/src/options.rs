//! 置換表の設定
//!
//! USI の `USI_Hash` / `Threads` に相当する2項目だけを持つ。
//! 省略された項目は [`TtOptions::default`] の値になる。

use serde::{Deserialize, Serialize};

use crate::error::{TtError, TtResult};
use crate::threads::SearchGate;

/// 置換表サイズのデフォルト（MB）
pub const DEFAULT_HASH_MB: usize = 16;

/// 置換表の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtOptions {
    /// 置換表サイズ（MB）
    pub hash_mb: usize,
    /// 探索スレッド数（並列クリアの分割数にも使う）
    pub threads: usize,
}

impl Default for TtOptions {
    fn default() -> Self {
        Self {
            hash_mb: DEFAULT_HASH_MB,
            threads: std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl TtOptions {
    /// 値の検証（テーブル確保前に呼ぶ）
    pub fn validate(&self) -> TtResult<()> {
        if self.hash_mb == 0 {
            return Err(TtError::ZeroSize);
        }
        if self.hash_mb.checked_mul(1024 * 1024).is_none() {
            return Err(TtError::SizeOverflow { mb: self.hash_mb });
        }
        Ok(())
    }

    /// 設定のスレッド数で探索ゲートを作る
    pub fn search_gate(&self) -> SearchGate {
        SearchGate::new(self.threads)
    }
}
