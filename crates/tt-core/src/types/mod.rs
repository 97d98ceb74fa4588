//! 置換表が扱う基本型

mod bound;
mod moves;
mod value;

pub use bound::Bound;
pub use moves::Move;
pub use value::Value;

/// 探索深さ（`ONE_PLY` 単位）
pub type Depth = i32;

/// 1手分の深さ
pub const ONE_PLY: Depth = 1;

/// 「深さ情報なし」（静止探索の最深部など）
pub const DEPTH_NONE: Depth = -6;

/// エントリに格納する際のオフセット
///
/// depth8 = depth - DEPTH_ENTRY_OFFSET。DEPTH_NONE も 1 以上で格納され、
/// ゼロクリアされたスロットはどの実深さよりも浅く読める。
pub const DEPTH_ENTRY_OFFSET: Depth = DEPTH_NONE - 1;

/// エントリに格納できる最大深さ（i8 の上限 - オフセット）
pub const DEPTH_MAX: Depth = i8::MAX as Depth + DEPTH_ENTRY_OFFSET;
