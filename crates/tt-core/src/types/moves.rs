//! 指し手（16bit形式）
//!
//! 置換表が扱うのは16bitに詰めた指し手のみ。合法性の検証は呼び出し側（探索）の責務で、
//! 置換表は値を不透明なビット列として保存・復元するだけである。

use std::fmt;

/// 16bitに詰めた指し手
///
/// 下位7bit: 移動先、次の7bit: 移動元、上位2bit: フラグ。
/// `0` は「指し手なし」を表す。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Move(u16);

impl Move {
    /// 指し手なし
    pub const NONE: Move = Move(0);

    const TO_MASK: u16 = 0x7F;
    const FROM_SHIFT: u16 = 7;
    const FLAG_SHIFT: u16 = 14;

    /// 移動元・移動先・フラグから生成
    #[inline]
    pub const fn new(from: u8, to: u8, flags: u8) -> Move {
        debug_assert!(from < 128 && to < 128 && flags < 4);
        Move(
            (to as u16 & Self::TO_MASK)
                | ((from as u16 & Self::TO_MASK) << Self::FROM_SHIFT)
                | ((flags as u16) << Self::FLAG_SHIFT),
        )
    }

    /// 16bit値から生成
    #[inline]
    pub const fn from_u16(raw: u16) -> Move {
        Move(raw)
    }

    /// 16bit値に変換
    #[inline]
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// 移動元
    #[inline]
    pub const fn from_sq(self) -> u8 {
        ((self.0 >> Self::FROM_SHIFT) & Self::TO_MASK) as u8
    }

    /// 移動先
    #[inline]
    pub const fn to_sq(self) -> u8 {
        (self.0 & Self::TO_MASK) as u8
    }

    /// フラグ（成り・打ちなど、解釈は呼び出し側）
    #[inline]
    pub const fn flags(self) -> u8 {
        (self.0 >> Self::FLAG_SHIFT) as u8
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Move(NONE)")
        } else {
            write!(f, "Move({}->{}, flags={})", self.from_sq(), self.to_sq(), self.flags())
        }
    }
}
