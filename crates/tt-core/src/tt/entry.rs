//! 置換表エントリー
//!
//! TTEntry: 8バイトのエントリ（`AtomicU64` 1語）
//! TTData: 読み取り用のデータ構造
//!
//! # ビットレイアウト
//!
//! | bit    | フィールド  | 幅 | 内容                                         |
//! |--------|-------------|----|----------------------------------------------|
//! | 0-15   | key16       | 16 | キー上位16bit（0 = 空き）                     |
//! | 16-31  | move16      | 16 | 最善手（0 = なし）                           |
//! | 32-47  | value16     | 16 | 探索値（符号付き）                           |
//! | 48-55  | gen_bound8  | 8  | 世代(上位6bit) \| 境界(下位2bit)             |
//! | 56-63  | depth8      | 8  | depth - DEPTH_ENTRY_OFFSET（符号付き）        |
//!
//! 構造体のメモリレイアウトには依存せず、`pack` / `unpack` で明示的に詰める。

use std::sync::atomic::{AtomicU64, Ordering};

use super::{GENERATION_BITS, GENERATION_CYCLE, GENERATION_MASK, REPLACE_DEPTH_MARGIN};
use crate::types::{Bound, DEPTH_ENTRY_OFFSET, DEPTH_MAX, DEPTH_NONE, Depth, Move, ONE_PLY, Value};

const KEY_SHIFT: u32 = 0;
const MOVE_SHIFT: u32 = 16;
const VALUE_SHIFT: u32 = 32;
const GEN_BOUND_SHIFT: u32 = 48;
const DEPTH_SHIFT: u32 = 56;

/// 64bitキーからクラスター内照合用の16bitタグを取り出す
#[inline]
pub(crate) const fn key16_of(key: u64) -> u16 {
    (key >> 48) as u16
}

/// 1語から展開したエントリの各フィールド
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Fields {
    pub key16: u16,
    pub move16: u16,
    pub value16: i16,
    pub gen_bound8: u8,
    pub depth8: i8,
}

impl Fields {
    #[inline]
    pub(crate) const fn unpack(raw: u64) -> Self {
        Self {
            key16: (raw >> KEY_SHIFT) as u16,
            move16: (raw >> MOVE_SHIFT) as u16,
            value16: (raw >> VALUE_SHIFT) as u16 as i16,
            gen_bound8: (raw >> GEN_BOUND_SHIFT) as u8,
            depth8: (raw >> DEPTH_SHIFT) as u8 as i8,
        }
    }

    #[inline]
    pub(crate) const fn pack(self) -> u64 {
        ((self.key16 as u64) << KEY_SHIFT)
            | ((self.move16 as u64) << MOVE_SHIFT)
            | ((self.value16 as u16 as u64) << VALUE_SHIFT)
            | ((self.gen_bound8 as u64) << GEN_BOUND_SHIFT)
            | ((self.depth8 as u8 as u64) << DEPTH_SHIFT)
    }

    /// 相対的な世代（0 = 最新、単位は探索回数）
    #[inline]
    pub(crate) const fn relative_age(self, generation8: u8) -> u8 {
        let age = GENERATION_CYCLE
            .wrapping_add(generation8 as u16)
            .wrapping_sub(self.gen_bound8 as u16);
        ((age & GENERATION_MASK) >> GENERATION_BITS) as u8
    }

    #[inline]
    const fn bound(self) -> Bound {
        Bound::from_bits(self.gen_bound8)
    }
}

/// 置換表エントリー
///
/// 探索スレッド間でロックなしに共有される。全ビット0が「空き」を表すので、
/// テーブル全体を `write_bytes(0)` で初期化できる。
#[derive(Default)]
#[repr(transparent)]
pub struct TTEntry {
    data: AtomicU64,
}

// エントリサイズが8バイトであることを保証
const _: () = assert!(std::mem::size_of::<TTEntry>() == 8);

impl TTEntry {
    /// 新しい空のエントリを作成
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn load(&self) -> Fields {
        Fields::unpack(self.data.load(Ordering::Relaxed))
    }

    #[inline]
    fn store(&self, fields: Fields) {
        self.data.store(fields.pack(), Ordering::Relaxed);
    }

    /// エントリが使用されているか（キー上位16bitが0なら空き扱い）
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.load().key16 != 0
    }

    /// キーを取得
    #[inline]
    pub fn key16(&self) -> u16 {
        self.load().key16
    }

    /// 深さを取得（DEPTH_ENTRY_OFFSETを加算）
    #[inline]
    pub fn depth(&self) -> Depth {
        self.load().depth8 as Depth + DEPTH_ENTRY_OFFSET
    }

    /// 保存されている生のdepth8を取得
    #[inline]
    pub fn depth8(&self) -> i8 {
        self.load().depth8
    }

    /// 保存されている生のgen_bound8を取得
    #[inline]
    pub fn gen_bound8(&self) -> u8 {
        self.load().gen_bound8
    }

    /// エントリを読み取る
    pub fn read(&self) -> TTData {
        TTData::from_fields(self.load())
    }

    /// エントリに保存
    ///
    /// 探索のホットパスで呼ばれるため、構造体にまとめず個別の引数で受け取る。
    /// `generation8` の下位2bitは0であること（境界bitと重なる）。
    /// 外部からは `ProbeResult::write` 経由で書き込む。
    pub(crate) fn save(
        &self,
        key: u64,
        value: Value,
        bound: Bound,
        depth: Depth,
        mv: Move,
        generation8: u8,
    ) {
        debug_assert!(depth / ONE_PLY * ONE_PLY == depth, "depth must be a multiple of ONE_PLY");
        debug_assert!(
            (DEPTH_NONE..=DEPTH_MAX).contains(&depth),
            "depth {depth} out of storable range"
        );
        debug_assert!(value.fits_entry(), "value {value:?} does not fit in 16 bits");
        debug_assert!(generation8 & 0x3 == 0, "generation {generation8} overlaps bound bits");

        let key16 = key16_of(key);
        let mut e = self.load();

        // 新しい手がない場合は古い手を保持
        if mv.is_some() || key16 != e.key16 {
            e.move16 = mv.to_u16();
        }

        // 上書き条件：
        // - 異なるキー
        // - より深い探索
        // - BOUND_EXACT（確定値）
        let d8 = depth / ONE_PLY - DEPTH_ENTRY_OFFSET;
        if key16 != e.key16 || d8 > e.depth8 as i32 - REPLACE_DEPTH_MARGIN || bound == Bound::Exact
        {
            e.key16 = key16;
            e.value16 = value.raw() as i16;
            e.gen_bound8 = generation8 | bound as u8;
            e.depth8 = d8 as i8;
        }

        self.store(e);
    }

    /// 世代だけを現在の値に更新する（境界bitは保持）
    #[inline]
    pub(crate) fn refresh(&self, fields: Fields, generation8: u8) {
        let refreshed = Fields {
            gen_bound8: generation8 | (fields.gen_bound8 & 0x3),
            ..fields
        };
        self.store(refreshed);
    }

    /// 相対的な世代（0 = 最新）
    #[inline]
    pub fn relative_age(&self, generation8: u8) -> u8 {
        self.load().relative_age(generation8)
    }
}

/// 置換表から読み取ったデータ
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTData {
    /// 最善手
    pub mv: Move,
    /// 探索値
    pub value: Value,
    /// 探索深さ
    pub depth: Depth,
    /// 境界タイプ
    pub bound: Bound,
}

impl TTData {
    /// 空のデータ
    pub const EMPTY: Self = Self {
        mv: Move::NONE,
        value: Value::NONE,
        depth: DEPTH_NONE,
        bound: Bound::None,
    };

    #[inline]
    pub(crate) fn from_fields(e: Fields) -> Self {
        Self {
            mv: Move::from_u16(e.move16),
            value: Value::new(e.value16 as i32),
            depth: e.depth8 as Depth + DEPTH_ENTRY_OFFSET,
            bound: e.bound(),
        }
    }
}

impl Default for TTData {
    fn default() -> Self {
        Self::EMPTY
    }
}
