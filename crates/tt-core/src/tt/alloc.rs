//! 置換表用の大きなアラインメント付きメモリ確保
//!
//! テーブル全体を1回の確保で取り、先頭をキャッシュライン（Linux/Android では
//! 2MB の huge page 境界）に揃える。中身は初期化しない。ゼロ埋めは呼び出し側の
//! 並列クリアが担当し、各ページは最初に書き込んだスレッドのNUMAノードに載る。

use std::alloc::{Layout, alloc, dealloc};
use std::cmp::max;
use std::ptr::NonNull;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AllocKind {
    /// Transparent Huge Pages を要求した確保（Linux/Android）
    LargePages,
    /// 通常ページ（macOS / Windows 等）
    #[allow(dead_code)]
    Regular,
}

pub(super) struct Allocation {
    ptr: NonNull<u8>,
    kind: AllocKind,
    layout: Layout,
}

impl Allocation {
    /// `size` バイトを `alignment` 以上の境界で確保する
    ///
    /// 失敗時は `None`。`size` が 0 の場合も `None` を返す。
    pub(super) fn allocate(size: usize, alignment: usize) -> Option<Self> {
        if size == 0 {
            return None;
        }

        #[cfg(any(target_os = "linux", target_os = "android"))]
        let (page_align, kind) = (2 * 1024 * 1024, AllocKind::LargePages);
        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        let (page_align, kind) = (4096, AllocKind::Regular);

        let alignment = max(alignment, page_align);
        let layout = Layout::from_size_align(size, alignment).ok()?.pad_to_align();
        // SAFETY: layout のサイズは 0 でない
        let ptr = NonNull::new(unsafe { alloc(layout) })?;

        #[cfg(any(target_os = "linux", target_os = "android"))]
        unsafe {
            let result = libc::madvise(ptr.as_ptr() as *mut _, layout.size(), libc::MADV_HUGEPAGE);
            // madvise失敗は動作に影響しないが、パフォーマンスに影響する可能性がある
            if result != 0 {
                log::debug!("madvise(MADV_HUGEPAGE) failed for {} bytes", layout.size());
            }
        }

        Some(Allocation { ptr, kind, layout })
    }

    pub(super) fn ptr(&self) -> NonNull<u8> {
        self.ptr
    }

    pub(super) fn kind(&self) -> AllocKind {
        self.kind
    }

    /// 実際に確保したバイト数（アラインメントへの切り上げ後）
    pub(super) fn size(&self) -> usize {
        self.layout.size()
    }
}

impl Drop for Allocation {
    fn drop(&mut self) {
        // SAFETY: ptr/layout は allocate() で確保した組そのもの
        unsafe {
            dealloc(self.ptr.as_ptr(), self.layout);
        }
    }
}

// SAFETY: Allocation owns raw memory for the TT; concurrent access to its contents
// goes through atomics, and reallocation requires `&mut TranspositionTable`.
unsafe impl Send for Allocation {}
unsafe impl Sync for Allocation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_is_aligned() {
        let alloc = Allocation::allocate(64 * 1024, 64).expect("small allocation");
        assert_eq!(alloc.ptr().as_ptr() as usize % 64, 0);
        assert!(alloc.size() >= 64 * 1024);
        #[cfg(any(target_os = "linux", target_os = "android"))]
        {
            assert_eq!(alloc.kind(), AllocKind::LargePages);
            assert_eq!(alloc.ptr().as_ptr() as usize % (2 * 1024 * 1024), 0);
        }
    }

    #[test]
    fn test_allocation_zero_size() {
        assert!(Allocation::allocate(0, 64).is_none());
    }

    #[test]
    fn test_allocation_absurd_size_fails() {
        // Layout 生成自体が失敗するサイズ
        assert!(Allocation::allocate(usize::MAX - 10, 64).is_none());
    }
}
