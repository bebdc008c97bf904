use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::alert_bus::AlertBus;
use crate::tick::Tick;

/// Cancellation handle for a refresh loop.
///
/// Clones share one flag, so the presentation layer can keep a handle and
/// trip it from another thread while the loop runs.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// A unit of refresh work executed every tick.
///
/// Tasks fetch-and-recompute: pull a fresh snapshot, hand it to the
/// synchronous analysis core, emit alerts. The closure-free fn pointer keeps
/// runs deterministic and replayable.
pub struct RefreshTask {
    pub id: &'static str,
    pub run: fn(tick: Tick, bus: &mut AlertBus),
}

impl RefreshTask {
    pub fn new(id: &'static str, run: fn(Tick, &mut AlertBus)) -> Self {
        Self { id, run }
    }
}

/// Runs registered tasks once per tick, in a stable order.
#[derive(Default)]
pub struct RefreshLoop {
    next_order: u64,
    tasks: Vec<(u64, RefreshTask)>,
}

impl RefreshLoop {
    pub fn new() -> Self {
        Self {
            next_order: 0,
            tasks: Vec::new(),
        }
    }

    pub fn add_task(&mut self, task: RefreshTask) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.tasks.push((order, task));
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Runs every task for one tick.
    ///
    /// Total ordering: `(id, insertion_order)`. This stays deterministic
    /// even if callers accidentally register duplicate task ids.
    pub fn run_tick(&mut self, tick: Tick, bus: &mut AlertBus) {
        self.tasks
            .sort_by(|(oa, a), (ob, b)| a.id.cmp(b.id).then_with(|| oa.cmp(ob)));

        for (_order, task) in &self.tasks {
            (task.run)(tick, bus);
        }
    }

    /// Drives up to `max_ticks` consecutive ticks starting at `start`,
    /// checking the token before each one. Returns the number of ticks
    /// completed.
    pub fn run(
        &mut self,
        start: Tick,
        max_ticks: u64,
        bus: &mut AlertBus,
        token: &CancelToken,
    ) -> u64 {
        let mut tick = start;
        let mut completed = 0;
        while completed < max_ticks {
            if token.is_canceled() {
                break;
            }
            self.run_tick(tick, bus);
            completed += 1;
            tick = tick.next();
        }
        completed
    }
}
