//! 置換表モジュール
//!
//! 探索結果をキャッシュする置換表（Transposition Table）。
//!
//! - `TTEntry`: エントリ（8バイト、`AtomicU64` 1語に詰める）
//! - `Cluster`: エントリのグループ（64バイト = 1キャッシュライン）
//! - `TranspositionTable`: テーブル本体
//! - 世代管理
//! - 並列クリア
//!
//! クラスターインデックスは64bitキーの下位32bitから multiply-high で求め、
//! クラスター内マッチングには上位16bitを使用する。
//! 8バイトエントリ × 8 = 64バイト/クラスター（パディングなし）。
//!
//! # 並行アクセス
//!
//! probe/save はロックも CAS も使わない。エントリは `Ordering::Relaxed` の
//! 1語ロード/ストアで読み書きするため、フィールド単位のちぎれは起きないが、
//! 競合した書き込みの一方が失われることはある。読み出し側は毎回タグを照合し、
//! 探索側は指し手の合法性を再検証するので、最悪でも「キャッシュが効かない」だけで済む。

mod alloc;
mod clear;
mod entry;
mod table;

pub use clear::slice_ranges;
pub use entry::{TTData, TTEntry};
pub use table::{ProbeResult, TranspositionTable};

/// クラスターサイズ（エントリ数）
/// 8bytes × 8 = 64bytes（キャッシュライン1本）
pub const CLUSTER_SIZE: usize = 8;

/// Generation関連の定数
///
/// gen_bound8 の下位2bitは境界に使うため、世代は4刻みで進める。
pub const GENERATION_BITS: u32 = 2;
pub const GENERATION_DELTA: u8 = 1 << GENERATION_BITS; // 4
pub const GENERATION_CYCLE: u16 = 255 + GENERATION_DELTA as u16;
pub const GENERATION_MASK: u16 = 0xFC; // (0xFF << GENERATION_BITS) as u8

/// 置換価値で相対年齢1世代あたりに差し引く深さ
pub const AGE_PENALTY: i32 = 8;

/// 置換判定で既存エントリの深さから差し引く余裕幅
///
/// 0 のとき、同一局面の非EXACT結果は厳密により深い場合にのみ上書きする。
pub const REPLACE_DEPTH_MARGIN: i32 = 0;

/// 並列クリア時にスレッドをCPUへバインドし始めるスレッド数の閾値
pub const BIND_THREAD_THRESHOLD: usize = 8;

/// hashfull がサンプリングするエントリ数
pub const HASHFULL_SAMPLE: usize = 1000;
