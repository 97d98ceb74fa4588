//! 並列探索向け置換表（Transposition Table）
//!
//! 探索スレッド間で共有する固定サイズのキャッシュ。局面の64bitハッシュキーから
//! 過去の探索結果（指し手・評価値・深さ・境界）を引く。
//!
//! - [`tt`]: 置換表本体（エントリ、クラスター、probe/save、clear、hashfull）
//! - [`threads`]: 探索スレッドプールとの境界（停止待ち・スレッド数・CPUバインド）
//! - [`types`]: 評価値・境界・指し手・深さ
//! - [`options`]: 置換表サイズ等の設定
//!
//! テーブルはグローバル変数にせず、エンジン側が所有して各探索スレッドへ
//! 参照（`&TranspositionTable` / `Arc`）で渡す。

pub mod error;
pub mod options;
pub mod prefetch;
pub mod threads;
pub mod tt;
pub mod types;

pub use error::{TtError, TtResult};
pub use options::TtOptions;
pub use prefetch::{NoPrefetch, TtPrefetch};
pub use threads::{SearchGate, SearchThreads, SingleThread};
pub use tt::{ProbeResult, TTData, TranspositionTable};
pub use types::{Bound, Depth, Move, Value};
