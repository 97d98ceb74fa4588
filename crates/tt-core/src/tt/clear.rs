//! 置換表の並列ゼロクリア
//!
//! エントリ範囲 `[0, len)` をスレッド数で等分し、各スレッドが自分の区間を
//! `write_bytes(0)` で埋める（割り切れない余りは最後の区間が持つ）。
//! 全スレッドの join 後に戻るので、呼び出し側からは一括でゼロになったように見える。

use std::ops::Range;
use std::time::Instant;

use super::BIND_THREAD_THRESHOLD;
use super::entry::TTEntry;
use crate::threads::SearchThreads;

/// `[0, len)` を `workers` 個の連続区間に分ける
///
/// 区間 i は `[i * stride, (i + 1) * stride)`（`stride = len / workers`）、
/// 最後の区間だけ終端が `len`。`workers == 0` は 1 として扱う。
pub fn slice_ranges(len: usize, workers: usize) -> impl ExactSizeIterator<Item = Range<usize>> {
    let workers = workers.max(1);
    let stride = len / workers;
    (0..workers).map(move |idx| {
        let start = stride * idx;
        let end = if idx != workers - 1 { start + stride } else { len };
        start..end
    })
}

/// `base` から `len` エントリを `threads.thread_count()` 本のスレッドでゼロクリアする
///
/// # Safety
///
/// `base` は `len` 個の `TTEntry` を格納できる確保済み領域を指し、
/// この呼び出しの間、他の誰からも読み書きされないこと（初期化済みである必要はない）。
pub(super) unsafe fn clear_entries<T>(base: *mut TTEntry, len: usize, threads: &T)
where
    T: SearchThreads + ?Sized,
{
    let workers = threads.thread_count().max(1);
    let bind = workers > BIND_THREAD_THRESHOLD;
    let start_time = Instant::now();

    if workers == 1 {
        // SAFETY: 呼び出し側の契約どおり base..base+len は排他的に書き込める
        unsafe { std::ptr::write_bytes(base, 0, len) };
    } else {
        let base_addr = base as usize;

        // スレッドを分割してゼロクリア
        std::thread::scope(|scope| {
            for (idx, range) in slice_ranges(len, workers).enumerate() {
                #[cfg(feature = "diagnostics")]
                log::debug!("[TT_DIAG] clear slice #{idx}: {range:?}");

                scope.spawn(move || {
                    // first-touch ポリシーでページを担当スレッドのノードに載せる
                    if bind {
                        threads.bind_this_thread(idx);
                    }
                    let ptr = base_addr as *mut TTEntry;
                    // SAFETY: 各区間は互いに素で、すべて [0, len) に収まる
                    unsafe { std::ptr::write_bytes(ptr.add(range.start), 0, range.len()) };
                });
            }
        });
    }

    log::debug!(
        "TT clear: entries={} threads={} bind={} elapsed={:?}",
        len,
        workers,
        bind,
        start_time.elapsed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_slice_ranges_single_worker() {
        let ranges: Vec<_> = slice_ranges(131072, 1).collect();
        assert_eq!(ranges, vec![0..131072]);
    }

    #[test]
    fn test_slice_ranges_remainder_goes_last() {
        let ranges: Vec<_> = slice_ranges(10, 3).collect();
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn test_slice_ranges_more_workers_than_entries() {
        let ranges: Vec<_> = slice_ranges(3, 5).collect();
        assert_eq!(ranges.len(), 5);
        assert!(ranges[..4].iter().all(|r| r.is_empty()));
        assert_eq!(ranges[4], 0..3);
    }

    #[test]
    fn test_slice_ranges_zero_workers() {
        let ranges: Vec<_> = slice_ranges(8, 0).collect();
        assert_eq!(ranges, vec![0..8]);
    }

    struct CountingThreads {
        count: usize,
        bound: AtomicUsize,
    }

    impl SearchThreads for CountingThreads {
        fn wait_for_search_finished(&self) {}

        fn thread_count(&self) -> usize {
            self.count
        }

        fn bind_this_thread(&self, _index: usize) {
            self.bound.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn dirty_entries(len: usize) -> Vec<TTEntry> {
        (0..len)
            .map(|i| {
                let e = TTEntry::new();
                e.save(
                    (i as u64 + 1) << 48,
                    crate::Value::new(1),
                    crate::Bound::Exact,
                    1,
                    crate::Move::NONE,
                    4,
                );
                e
            })
            .collect()
    }

    #[test]
    fn test_clear_entries_zeroes_everything() {
        for count in [1, 3, 8] {
            let mut entries = dirty_entries(1000);
            let threads = CountingThreads {
                count,
                bound: AtomicUsize::new(0),
            };
            unsafe { clear_entries(entries.as_mut_ptr(), entries.len(), &threads) };
            assert!(entries.iter().all(|e| !e.is_occupied() && e.gen_bound8() == 0));
            // 閾値以下ではバインドしない
            assert_eq!(threads.bound.load(Ordering::Relaxed), 0);
        }
    }

    #[test]
    fn test_clear_entries_binds_above_threshold() {
        let mut entries = dirty_entries(100);
        let threads = CountingThreads {
            count: BIND_THREAD_THRESHOLD + 1,
            bound: AtomicUsize::new(0),
        };
        unsafe { clear_entries(entries.as_mut_ptr(), entries.len(), &threads) };
        assert!(entries.iter().all(|e| !e.is_occupied()));
        assert_eq!(threads.bound.load(Ordering::Relaxed), BIND_THREAD_THRESHOLD + 1);
    }

    proptest! {
        #[test]
        fn prop_slice_ranges_partition(len in 0usize..100_000, workers in 0usize..64) {
            let ranges: Vec<_> = slice_ranges(len, workers).collect();
            prop_assert_eq!(ranges.len(), workers.max(1));

            // 連続・互いに素・和集合が全体
            let mut next = 0;
            for r in &ranges {
                prop_assert_eq!(r.start, next);
                prop_assert!(r.start <= r.end);
                next = r.end;
            }
            prop_assert_eq!(next, len);
        }
    }
}
