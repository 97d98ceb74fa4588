//! 境界（Bound）

/// 置換表に保存する評価値の境界タイプ
///
/// gen_bound8 の下位2bitにそのまま格納する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Bound {
    /// なし
    #[default]
    None = 0,
    /// 上界（fail-low: 真の値はこれ以下）
    Upper = 1,
    /// 下界（fail-high: 真の値はこれ以上）
    Lower = 2,
    /// 正確な値
    Exact = 3,
}

impl Bound {
    /// 下位2bitから変換（上位bitは無視する）
    #[inline]
    pub const fn from_bits(n: u8) -> Bound {
        match n & 0x3 {
            1 => Bound::Upper,
            2 => Bound::Lower,
            3 => Bound::Exact,
            _ => Bound::None,
        }
    }
}
