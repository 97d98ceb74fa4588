//! 評価値（Value）
//!
//! 置換表は評価値の意味を解釈せず、16bitの符号付き整数としてそのまま格納する。

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 無効値（ミス時の `TTData` に入る）
    pub const NONE: Value = Value(32002);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// 置換表の16bitフィールドに収まるか
    #[inline]
    pub const fn fits_entry(self) -> bool {
        self.0 >= i16::MIN as i32 && self.0 <= i16::MAX as i32
    }
}
