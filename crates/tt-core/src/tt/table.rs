//! TranspositionTable本体
//!
//! - Cluster: エントリのグループ
//! - TranspositionTable: テーブル本体
//! - probe/write操作

use super::alloc::{AllocKind, Allocation};
use super::clear::clear_entries;
use super::entry::{TTData, TTEntry, key16_of};
use super::{AGE_PENALTY, CLUSTER_SIZE, GENERATION_DELTA, GENERATION_MASK, HASHFULL_SAMPLE};
use crate::error::{TtError, TtResult};
use crate::prefetch::TtPrefetch;
use crate::threads::SearchThreads;
use crate::types::{Bound, Depth, Move, Value};
use std::ops::Deref;
use std::sync::atomic::{AtomicU8, Ordering};

/// クラスター構造
/// 同じハッシュインデックスに対して複数のエントリを持つ
/// 8bytes × 8 = 64bytes（キャッシュライン64バイトちょうど）
#[repr(C, align(64))]
pub(crate) struct Cluster {
    entries: [TTEntry; CLUSTER_SIZE],
}

// クラスターは64バイトであることを保証（キャッシュラインサイズ）
const _: () = assert!(std::mem::size_of::<Cluster>() == 64);
// エントリ範囲がメモリ上で連続していることを保証（並列クリアが前提とする）
const _: () =
    assert!(std::mem::size_of::<Cluster>() == CLUSTER_SIZE * std::mem::size_of::<TTEntry>());

const MB: usize = 1024 * 1024;

struct ClusterTable {
    alloc: Option<Allocation>,
    len: usize,
}

impl ClusterTable {
    const fn empty() -> Self {
        Self {
            alloc: None,
            len: 0,
        }
    }

    /// 未初期化のまま確保する。読み出す前に必ず `clear_entries` で埋めること。
    fn allocate_uninit(len: usize) -> Option<Self> {
        let bytes = len.checked_mul(std::mem::size_of::<Cluster>())?;
        let alloc = Allocation::allocate(bytes, std::mem::align_of::<Cluster>())?;
        Some(Self {
            alloc: Some(alloc),
            len,
        })
    }

    fn entry_ptr(&self) -> *mut TTEntry {
        match &self.alloc {
            Some(alloc) => alloc.ptr().as_ptr() as *mut TTEntry,
            None => std::ptr::NonNull::<TTEntry>::dangling().as_ptr(),
        }
    }

    fn uses_large_pages(&self) -> bool {
        self.alloc.as_ref().is_some_and(|a| a.kind() == AllocKind::LargePages)
    }

    fn allocated_bytes(&self) -> usize {
        self.alloc.as_ref().map_or(0, Allocation::size)
    }
}

impl Deref for ClusterTable {
    type Target = [Cluster];

    fn deref(&self) -> &Self::Target {
        match &self.alloc {
            // SAFETY: 確保済みの領域は resize 内で clear 済み
            Some(alloc) => unsafe {
                std::slice::from_raw_parts(alloc.ptr().as_ptr() as *const Cluster, self.len)
            },
            None => &[],
        }
    }
}

/// 置換表
///
/// 探索スレッドからは `&TranspositionTable` で共有し、`probe` / `ProbeResult::write`
/// をロックなしで呼ぶ。`resize` / `clear` は `&mut self` を取るので、探索と同時には
/// 呼べない。
pub struct TranspositionTable {
    /// クラスターの配列
    table: ClusterTable,
    /// エントリ総数
    entry_count: usize,
    /// クラスター数
    cluster_count: usize,
    /// 直近の resize で指定されたサイズ（MB）
    size_mb: usize,
    /// 世代カウンター（下位2bitは使用しない）
    generation8: AtomicU8,
}

impl TranspositionTable {
    /// 新しい置換表を作成（サイズはMB単位）
    ///
    /// 確保に失敗した場合はプロセスを終了する。
    pub fn new<T>(mb_size: usize, threads: &T) -> Self
    where
        T: SearchThreads + ?Sized,
    {
        let mut tt = Self::unallocated();
        tt.resize(mb_size, threads);
        tt
    }

    /// 新しい置換表を作成（確保失敗をエラーで返す）
    pub fn try_new<T>(mb_size: usize, threads: &T) -> TtResult<Self>
    where
        T: SearchThreads + ?Sized,
    {
        let mut tt = Self::unallocated();
        tt.try_resize(mb_size, threads)?;
        Ok(tt)
    }

    /// メモリを持たない置換表（resize するまで probe できない）
    pub(crate) const fn unallocated() -> Self {
        Self {
            table: ClusterTable::empty(),
            entry_count: 0,
            cluster_count: 0,
            size_mb: 0,
            generation8: AtomicU8::new(0),
        }
    }

    /// サイズを変更
    ///
    /// 探索の停止を待ってから再確保し、全体をゼロクリアする。
    /// 確保できなければ要求サイズを報告してプロセスを終了する
    /// （置換表なしでは探索が成り立たないため）。
    pub fn resize<T>(&mut self, mb_size: usize, threads: &T)
    where
        T: SearchThreads + ?Sized,
    {
        if let Err(err) = self.try_resize(mb_size, threads) {
            log::error!("{err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }

    /// サイズを変更（失敗時はテーブルを空にしてエラーを返す）
    pub fn try_resize<T>(&mut self, mb_size: usize, threads: &T) -> TtResult<()>
    where
        T: SearchThreads + ?Sized,
    {
        threads.wait_for_search_finished();

        if mb_size == 0 {
            return Err(TtError::ZeroSize);
        }
        let bytes = mb_size.checked_mul(MB).ok_or(TtError::SizeOverflow { mb: mb_size })?;
        let entry_count = bytes / std::mem::size_of::<TTEntry>();
        let cluster_count = entry_count / CLUSTER_SIZE;

        // 古い領域を先に解放してから確保する（ピークメモリを抑える）
        self.table = ClusterTable::empty();
        self.entry_count = 0;
        self.cluster_count = 0;
        self.size_mb = 0;

        let table = ClusterTable::allocate_uninit(cluster_count)
            .ok_or(TtError::AllocationFailed { mb: mb_size, bytes })?;

        self.table = table;
        self.entry_count = entry_count;
        self.cluster_count = cluster_count;
        self.size_mb = mb_size;

        log::info!(
            "TT resize: size_mb={} entries={} clusters={} bytes={} large_pages={}",
            mb_size,
            entry_count,
            cluster_count,
            self.table.allocated_bytes(),
            self.table.uses_large_pages()
        );

        self.clear(threads);
        Ok(())
    }

    /// クリア
    ///
    /// `threads.thread_count()` 本のスレッドで全エントリをゼロにする。
    /// 世代カウンターはそのまま。
    pub fn clear<T>(&mut self, threads: &T)
    where
        T: SearchThreads + ?Sized,
    {
        let base = self.table.entry_ptr();
        // SAFETY: &mut self なので他に参照はなく、base から entry_count 個は確保済み
        unsafe { clear_entries(base, self.entry_count, threads) };
    }

    /// 新しい探索を開始（世代を進める）
    pub fn new_search(&self) {
        self.generation8.fetch_add(GENERATION_DELTA, Ordering::Relaxed);
    }

    /// 現在の世代を取得
    #[inline]
    pub fn generation(&self) -> u8 {
        self.generation8.load(Ordering::Relaxed)
    }

    /// エントリ総数
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// クラスター数
    #[inline]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// 直近の resize で指定されたサイズ（MB、未確保なら0）
    #[inline]
    pub fn size_mb(&self) -> usize {
        self.size_mb
    }

    /// 置換表を検索
    ///
    /// ヒットしたら `found = true` とそのエントリ、ミスなら空きエントリか
    /// 置換価値（depth8 - 8 * relative_age）が最小のエントリを返す。
    ///
    /// # Panics
    ///
    /// テーブルが未確保のとき（`try_resize` が失敗した直後など）。
    pub fn probe(&self, key: u64) -> ProbeResult<'_> {
        let cluster = self.first_entry(key);
        let key16 = key16_of(key);
        let gen8 = self.generation();

        // クラスター内を検索（空きスロットか上位16bitの一致で打ち切り）
        for entry in &cluster.entries {
            let e = entry.load();
            if e.key16 == 0 {
                return ProbeResult {
                    found: false,
                    data: TTData::EMPTY,
                    entry,
                    tt: self,
                };
            }
            if e.key16 == key16 {
                // 世代だけ更新して「最近参照された」印にする
                if e.gen_bound8 & GENERATION_MASK as u8 != gen8 {
                    entry.refresh(e, gen8);
                }
                return ProbeResult {
                    found: true,
                    data: TTData::from_fields(e),
                    entry,
                    tt: self,
                };
            }
        }

        // 置換するエントリを選択（価値が最小のもの、同値なら先頭側）
        let mut replace = &cluster.entries[0];
        let mut min_value = i32::MAX;

        for entry in &cluster.entries {
            let e = entry.load();
            let value = e.depth8 as i32 - AGE_PENALTY * e.relative_age(gen8) as i32;

            if value < min_value {
                min_value = value;
                replace = entry;
            }
        }

        ProbeResult {
            found: false,
            data: TTData::EMPTY,
            entry: replace,
            tt: self,
        }
    }

    /// 置換表の使用率を1000分率で返す
    ///
    /// 先頭1000エントリのうち、現在の世代で書き込まれた（または参照された）
    /// 使用中エントリの数。報告用の近似値で、置換判定には使わない。
    pub fn hashfull(&self) -> i32 {
        let gen8 = self.generation();
        let sample_clusters = (HASHFULL_SAMPLE / CLUSTER_SIZE).min(self.cluster_count);
        let sampled = sample_clusters * CLUSTER_SIZE;
        if sampled == 0 {
            return 0;
        }

        let mut count = 0;
        for cluster in self.table.iter().take(sample_clusters) {
            for entry in &cluster.entries {
                let e = entry.load();
                if e.key16 != 0 && e.gen_bound8 & GENERATION_MASK as u8 == gen8 {
                    count += 1;
                }
            }
        }

        (count * HASHFULL_SAMPLE / sampled) as i32
    }

    /// Large Pagesを使って確保されたかを返す
    pub fn uses_large_pages(&self) -> bool {
        self.table.uses_large_pages()
    }

    /// クラスターインデックスを計算
    ///
    /// 下位32bit × cluster_count / 2^32。上位16bitのタグとは独立で、
    /// クラスター数が2の冪である必要もない。
    #[inline]
    pub(crate) fn cluster_index(&self, key: u64) -> usize {
        (((key & 0xFFFF_FFFF) as u128 * self.cluster_count as u128) >> 32) as usize
    }

    /// クラスターの参照を取得
    #[inline]
    pub(crate) fn first_entry(&self, key: u64) -> &Cluster {
        debug_assert!(self.cluster_count > 0, "probe on an unallocated transposition table");
        let index = self.cluster_index(key);
        &self.table[index]
    }

    /// 指定キーのクラスターをプリフェッチ
    #[inline]
    pub fn prefetch(&self, key: u64) {
        if self.cluster_count == 0 {
            return;
        }
        let cluster = self.first_entry(key);

        #[cfg(target_arch = "x86_64")]
        unsafe {
            use std::arch::x86_64::_mm_prefetch;
            _mm_prefetch(cluster as *const _ as *const i8, 3); // _MM_HINT_T0
        }

        #[cfg(not(target_arch = "x86_64"))]
        let _ = cluster; // 何もしない
    }
}

/// probe結果
pub struct ProbeResult<'a> {
    /// ヒットしたか
    pub found: bool,
    /// 読み取ったデータ（ミス時は `TTData::EMPTY`）
    pub data: TTData,
    /// 書き込み用エントリ
    entry: &'a TTEntry,
    tt: &'a TranspositionTable,
}

impl ProbeResult<'_> {
    /// probe で選ばれたエントリに書き込む
    ///
    /// 世代は置換表の現在値を使う。
    pub fn write(&self, key: u64, value: Value, bound: Bound, depth: Depth, mv: Move) {
        self.entry.save(key, value, bound, depth, mv, self.tt.generation());
    }

    /// 書き込み先エントリ
    pub fn entry(&self) -> &TTEntry {
        self.entry
    }
}

impl TtPrefetch for TranspositionTable {
    #[inline]
    fn prefetch(&self, key: u64) {
        TranspositionTable::prefetch(self, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threads::SingleThread;
    use crate::types::DEPTH_NONE;

    const KEY: u64 = 0x1234_5678_9ABC_DEF0;

    /// 同じクラスターに落ち、上位16bitだけが異なるキー
    fn key_with_tag(tag: u16) -> u64 {
        ((tag as u64) << 48) | (KEY & 0xFFFF_FFFF)
    }

    #[test]
    fn test_tt_new() {
        let tt = TranspositionTable::new(1, &SingleThread); // 1MB
        assert_eq!(tt.entry_count(), 131072);
        assert_eq!(tt.cluster_count(), 131072 / CLUSTER_SIZE);
        assert_eq!(tt.size_mb(), 1);
        assert_eq!(tt.generation(), 0);
    }

    #[test]
    fn test_tt_zero_size_rejected() {
        let mut tt = TranspositionTable::unallocated();
        assert_eq!(tt.try_resize(0, &SingleThread), Err(TtError::ZeroSize));
        assert_eq!(tt.entry_count(), 0);
        assert_eq!(tt.hashfull(), 0);
    }

    #[test]
    fn test_tt_size_overflow_rejected() {
        let mut tt = TranspositionTable::unallocated();
        let err = tt.try_resize(usize::MAX, &SingleThread).unwrap_err();
        assert_eq!(err, TtError::SizeOverflow { mb: usize::MAX });
    }

    #[test]
    fn test_tt_allocation_failure_leaves_table_empty() {
        let mut tt = TranspositionTable::new(1, &SingleThread);
        // バイト数は usize に収まるが Layout として不正なサイズ
        let mb = (isize::MAX as usize) / MB;
        let err = tt.try_resize(mb, &SingleThread).unwrap_err();
        assert!(matches!(err, TtError::AllocationFailed { .. }));
        assert_eq!(tt.entry_count(), 0);
        assert_eq!(tt.cluster_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_tt_probe_after_failed_resize_panics() {
        let mut tt = TranspositionTable::new(1, &SingleThread);
        assert!(tt.try_resize(0, &SingleThread).is_err());
        assert_eq!(tt.cluster_count(), 0);
        let _ = tt.probe(KEY);
    }

    #[test]
    fn test_tt_tag_zero_key_never_hits() {
        let tt = TranspositionTable::new(1, &SingleThread);
        let key = KEY & 0x0000_FFFF_FFFF_FFFF;

        let probe = tt.probe(key);
        assert!(!probe.found);
        probe.write(key, Value::new(55), Bound::Exact, 9, Move::new(3, 4, 0));

        // タグ0の書き込みは空きスロットと区別できない
        let probe = tt.probe(key);
        assert!(!probe.found);
        assert_eq!(probe.data, TTData::EMPTY);
        assert!(!probe.entry().is_occupied());
        assert_eq!(tt.hashfull(), 0);
    }

    #[test]
    fn test_tt_new_search() {
        let tt = TranspositionTable::new(1, &SingleThread);
        assert_eq!(tt.generation(), 0);

        tt.new_search();
        assert_eq!(tt.generation(), GENERATION_DELTA);

        tt.new_search();
        assert_eq!(tt.generation(), GENERATION_DELTA * 2);
    }

    #[test]
    fn test_tt_generation_cycle() {
        let tt = TranspositionTable::new(1, &SingleThread);
        for _ in 0..64 {
            tt.new_search();
        }
        // 4 * 64 = 256 で一周
        assert_eq!(tt.generation(), 0);
    }

    #[test]
    fn test_tt_probe_empty() {
        let tt = TranspositionTable::new(1, &SingleThread);
        let result = tt.probe(KEY);
        assert!(!result.found);
        assert_eq!(result.data, TTData::EMPTY);
    }

    #[test]
    fn test_tt_probe_and_write() {
        let tt = TranspositionTable::new(1, &SingleThread);
        let m1 = Move::new(12, 28, 0);

        // 最初はヒットしない
        let probe1 = tt.probe(KEY);
        assert!(!probe1.found);

        // 書き込み
        probe1.write(KEY, Value::new(100), Bound::Exact, 4, m1);

        // 2回目はヒット
        let probe2 = tt.probe(KEY);
        assert!(probe2.found);
        assert_eq!(probe2.data.value.raw(), 100);
        assert_eq!(probe2.data.depth, 4);
        assert_eq!(probe2.data.mv, m1);
        assert_eq!(probe2.data.bound, Bound::Exact);
    }

    #[test]
    fn test_tt_scenario_move_update_then_clear() {
        let mut tt = TranspositionTable::new(1, &SingleThread);
        assert_eq!(tt.entry_count(), 131072);
        let m1 = Move::new(12, 28, 0);
        let m2 = Move::new(6, 21, 0);

        tt.probe(KEY).write(KEY, Value::new(100), Bound::Exact, 4, m1);
        let hit = tt.probe(KEY);
        assert!(hit.found);
        assert_eq!((hit.data.value.raw(), hit.data.depth, hit.data.mv), (100, 4, m1));

        // 浅い下界：値と深さは残り、指し手だけ更新される
        tt.probe(KEY).write(KEY, Value::new(-30), Bound::Lower, 2, m2);
        let hit = tt.probe(KEY);
        assert!(hit.found);
        assert_eq!(hit.data.value.raw(), 100);
        assert_eq!(hit.data.depth, 4);
        assert_eq!(hit.data.bound, Bound::Exact);
        assert_eq!(hit.data.mv, m2);

        tt.clear(&SingleThread);
        let probe = tt.probe(KEY);
        assert!(!probe.found);
        assert_eq!(probe.entry().key16(), 0);
    }

    #[test]
    fn test_tt_hit_refreshes_generation() {
        let tt = TranspositionTable::new(1, &SingleThread);
        tt.probe(KEY).write(KEY, Value::new(5), Bound::Upper, 6, Move::NONE);

        tt.new_search();
        tt.new_search();
        let hit = tt.probe(KEY);
        assert!(hit.found);
        assert_eq!(hit.entry().relative_age(tt.generation()), 0);
        assert_eq!(hit.entry().gen_bound8(), tt.generation() | Bound::Upper as u8);
        // 値は触らない
        assert_eq!(hit.data.value.raw(), 5);
    }

    #[test]
    fn test_tt_empty_slots_filled_before_eviction() {
        let tt = TranspositionTable::new(1, &SingleThread);
        for tag in 1..=CLUSTER_SIZE as u16 {
            let key = key_with_tag(tag);
            let probe = tt.probe(key);
            assert!(!probe.found);
            assert_eq!(probe.entry().key16(), 0);
            probe.write(key, Value::new(tag as i32), Bound::Lower, 10, Move::NONE);
        }

        // 8エントリすべて残っている
        for tag in 1..=CLUSTER_SIZE as u16 {
            let probe = tt.probe(key_with_tag(tag));
            assert!(probe.found);
            assert_eq!(probe.data.value.raw(), tag as i32);
        }
    }

    #[test]
    fn test_tt_replaces_shallowest_entry() {
        let tt = TranspositionTable::new(1, &SingleThread);
        // 深さ 10,11,...,17 で埋め、tag=4 だけ浅くする
        for tag in 1..=CLUSTER_SIZE as u16 {
            let key = key_with_tag(tag);
            let depth = if tag == 4 { 2 } else { 9 + tag as Depth };
            tt.probe(key).write(key, Value::ZERO, Bound::Lower, depth, Move::NONE);
        }

        let probe = tt.probe(key_with_tag(0x7777));
        assert!(!probe.found);
        assert_eq!(probe.entry().key16(), 4);
    }

    #[test]
    fn test_tt_replacement_tie_prefers_first() {
        let tt = TranspositionTable::new(1, &SingleThread);
        for tag in 1..=CLUSTER_SIZE as u16 {
            let key = key_with_tag(tag);
            tt.probe(key).write(key, Value::ZERO, Bound::Lower, 7, Move::NONE);
        }

        let probe = tt.probe(key_with_tag(0x7777));
        assert!(!probe.found);
        assert_eq!(probe.entry().key16(), 1);
    }

    #[test]
    fn test_tt_replacement_prefers_old_entries() {
        let tt = TranspositionTable::new(1, &SingleThread);
        // tag 1..=4 を古い世代で、tag 5..=8 を新しい世代で同じ深さに保存
        for tag in 1..=4u16 {
            let key = key_with_tag(tag);
            tt.probe(key).write(key, Value::ZERO, Bound::Lower, 10, Move::NONE);
        }
        tt.new_search();
        for tag in 5..=CLUSTER_SIZE as u16 {
            let key = key_with_tag(tag);
            tt.probe(key).write(key, Value::ZERO, Bound::Lower, 10, Move::NONE);
        }

        let probe = tt.probe(key_with_tag(0x7777));
        assert_eq!(probe.entry().key16(), 1);
    }

    #[test]
    fn test_tt_deep_stale_entry_beats_shallow_fresh() {
        let tt = TranspositionTable::new(1, &SingleThread);
        // tag 1 は 1世代前だが深さ 30（価値 30+7-8 = 29 相当）
        let deep = key_with_tag(1);
        tt.probe(deep).write(deep, Value::ZERO, Bound::Lower, 30, Move::NONE);
        tt.new_search();
        for tag in 2..=CLUSTER_SIZE as u16 {
            let key = key_with_tag(tag);
            tt.probe(key).write(key, Value::ZERO, Bound::Lower, 12, Move::NONE);
        }

        let probe = tt.probe(key_with_tag(0x7777));
        assert_eq!(probe.entry().key16(), 2);
    }

    #[test]
    fn test_tt_hashfull() {
        let mut tt = TranspositionTable::new(1, &SingleThread);

        // 空の状態では0
        assert_eq!(tt.hashfull(), 0);

        // 先頭クラスター群を埋めると上がる
        tt.new_search();
        let clusters = tt.cluster_count() as u64;
        let mut written = 0;
        for i in 0..clusters {
            // cluster_index(key) == i になる下位32bit
            let low = ((i << 32) + clusters - 1) / clusters;
            let key = (0xABCD << 48) | low;
            if tt.cluster_index(key) < HASHFULL_SAMPLE / CLUSTER_SIZE {
                tt.probe(key).write(key, Value::ZERO, Bound::Exact, 1, Move::NONE);
                written += 1;
            }
        }
        assert_eq!(written, HASHFULL_SAMPLE / CLUSTER_SIZE);
        assert_eq!(tt.hashfull(), written as i32);

        // 世代が進むと古いエントリは数えない
        tt.new_search();
        assert_eq!(tt.hashfull(), 0);

        tt.clear(&SingleThread);
        assert_eq!(tt.hashfull(), 0);
    }

    #[test]
    fn test_tt_depth_none_roundtrip() {
        let tt = TranspositionTable::new(1, &SingleThread);
        tt.probe(KEY).write(KEY, Value::new(-7), Bound::Upper, DEPTH_NONE, Move::NONE);
        let hit = tt.probe(KEY);
        assert!(hit.found);
        assert_eq!(hit.data.depth, DEPTH_NONE);
    }

    #[test]
    fn test_tt_resize() {
        let mut tt = TranspositionTable::new(1, &SingleThread);
        tt.probe(KEY).write(KEY, Value::new(1), Bound::Exact, 3, Move::NONE);

        tt.resize(2, &SingleThread);
        assert_eq!(tt.entry_count(), 2 * 131072);
        // 再確保後は空
        assert!(!tt.probe(KEY).found);

        tt.resize(1, &SingleThread);
        assert_eq!(tt.entry_count(), 131072);
    }

    #[test]
    fn test_tt_cluster_index_in_range() {
        let mut tt = TranspositionTable::unallocated();
        tt.try_resize(3, &SingleThread).unwrap();
        let clusters = tt.cluster_count();
        for key in [0, 1, u64::MAX, 0xFFFF_FFFF, KEY, 0x8000_0000] {
            assert!(tt.cluster_index(key) < clusters);
        }
        // 上位32bitは index に影響しない
        assert_eq!(tt.cluster_index(KEY), tt.cluster_index(KEY & 0xFFFF_FFFF));
    }

    #[test]
    fn test_tt_prefetch_is_harmless() {
        let tt = TranspositionTable::new(1, &SingleThread);
        tt.prefetch(KEY);
        TranspositionTable::unallocated().prefetch(KEY);
    }

    #[test]
    fn test_cluster_size() {
        // クラスターは64バイト（キャッシュラインサイズ）
        assert_eq!(std::mem::size_of::<Cluster>(), 64);
        assert_eq!(std::mem::align_of::<Cluster>(), 64);
    }
}
