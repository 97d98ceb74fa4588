//! 置換表プリフェッチのトレイト定義
//!
//! 探索中に次の局面の置換表クラスターを事前にキャッシュへ読み込み、
//! メモリアクセスのレイテンシを隠す。

/// 置換表のプリフェッチを行うトレイト
///
/// 手を指した直後（子局面のキーが分かった時点）で呼ぶと、実際の probe 時には
/// キャッシュにヒットしやすくなる。
pub trait TtPrefetch {
    /// 指定されたキーに対応するクラスターをプリフェッチする
    fn prefetch(&self, key: u64);
}

/// プリフェッチを行わないダミー実装
///
/// 探索以外の用途（局面生成、テストなど）や、置換表が未確保の場面で使う。
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrefetch;

impl TtPrefetch for NoPrefetch {
    #[inline]
    fn prefetch(&self, _key: u64) {}
}
