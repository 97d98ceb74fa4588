//! Error types for the transposition table
//!
//! 置換表の確保まわりで起こり得る失敗のみを扱う。
//! probe のミスやタグ不一致はエラーではなく `found == false` で表す。

/// 置換表のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TtError {
    /// サイズ 0 MB が指定された
    #[error("Transposition table size must be at least 1MB")]
    ZeroSize,

    /// MB → バイト換算で usize をオーバーフローした
    #[error("Transposition table size {mb}MB overflows the address space")]
    SizeOverflow { mb: usize },

    /// メモリ確保に失敗した
    #[error("Failed to allocate {mb}MB ({bytes} bytes) for transposition table")]
    AllocationFailed { mb: usize, bytes: usize },
}

/// Result type for transposition table operations
pub type TtResult<T> = Result<T, TtError>;
