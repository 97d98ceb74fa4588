//! 探索スレッドプールとの境界
//!
//! 置換表が探索スレッドプールに求めるのは次の3つだけ：
//!
//! - `wait_for_search_finished`: 探索が完全に止まるまで待つ（resize 前の同期）
//! - `thread_count`: 設定上のスレッド数（並列クリアの分割数）
//! - `bind_this_thread`: 呼び出しスレッドを論理プロセッサに固定する
//!
//! スレッドプール本体のライフサイクルは探索側の責務。ここでは境界のトレイトと、
//! 探索中の区間を数えるだけの最小実装 [`SearchGate`] を置く。

use parking_lot::{Condvar, Mutex};

/// 置換表から見た探索スレッドプール
pub trait SearchThreads: Sync {
    /// 実行中の探索がすべて終わるまでブロックする
    fn wait_for_search_finished(&self);

    /// 設定されたスレッド数（1以上）
    fn thread_count(&self) -> usize;

    /// 呼び出しスレッドを `index` 番目の論理プロセッサに固定する
    ///
    /// first-touch ポリシーの NUMA 環境で、ゼロクリアしたページを後でそのページに
    /// 触るCPUの近くに置くためのもの。失敗しても正しさには影響しない。
    fn bind_this_thread(&self, index: usize) {
        bind_to_core(index);
    }
}

/// `index` 番目（CPU数で剰余）のコアに現在のスレッドを固定する
pub fn bind_to_core(index: usize) -> bool {
    let cores = match core_affinity::get_core_ids() {
        Some(v) if !v.is_empty() => v,
        _ => {
            log::warn!("Failed to get core IDs for thread {index}, skipping affinity");
            return false;
        }
    };
    let core = cores[index % cores.len()];
    let ok = core_affinity::set_for_current(core);
    if !ok {
        log::warn!("Failed to pin thread {index} to core {:?}", core.id);
    }
    ok
}

/// 探索スレッドを持たない呼び出し元用（ツール・テストなど）
#[derive(Debug, Clone, Copy)]
pub struct SingleThread;

impl SearchThreads for SingleThread {
    fn wait_for_search_finished(&self) {}

    fn thread_count(&self) -> usize {
        1
    }

    fn bind_this_thread(&self, _index: usize) {}
}

/// 実行中の探索を数え、0 になるまで待てるようにするゲート
///
/// 探索スレッドは [`SearchGate::begin_search`] で得たガードを探索中保持する。
/// ガードが全部 drop されると `wait_for_search_finished` が戻る。
pub struct SearchGate {
    threads: usize,
    bind_threads: bool,
    running: Mutex<usize>,
    idle: Condvar,
}

impl SearchGate {
    /// `threads` スレッド構成のゲートを作る（0 は 1 として扱う）
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
            bind_threads: true,
            running: Mutex::new(0),
            idle: Condvar::new(),
        }
    }

    /// CPUバインドを無効化する（コンテナ環境やテスト用）
    pub fn without_binding(mut self) -> Self {
        self.bind_threads = false;
        self
    }

    /// 探索区間の開始。返り値のガードを drop すると区間が終わる。
    pub fn begin_search(&self) -> SearchGuard<'_> {
        *self.running.lock() += 1;
        SearchGuard { gate: self }
    }

    /// 実行中の探索数
    pub fn running(&self) -> usize {
        *self.running.lock()
    }

    fn finish_search(&self) {
        let mut running = self.running.lock();
        debug_assert!(*running > 0, "search guard released twice");
        *running -= 1;
        if *running == 0 {
            self.idle.notify_all();
        }
    }
}

impl SearchThreads for SearchGate {
    fn wait_for_search_finished(&self) {
        let mut running = self.running.lock();
        while *running > 0 {
            self.idle.wait(&mut running);
        }
    }

    fn thread_count(&self) -> usize {
        self.threads
    }

    fn bind_this_thread(&self, index: usize) {
        if self.bind_threads {
            bind_to_core(index);
        }
    }
}

/// 探索区間を表すガード
pub struct SearchGuard<'a> {
    gate: &'a SearchGate,
}

impl Drop for SearchGuard<'_> {
    fn drop(&mut self) {
        self.gate.finish_search();
    }
}
