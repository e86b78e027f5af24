//! Simulation observer trait and per-tick counters.

use wh_core::Tick;

use crate::Warehouse;

/// What happened during one tick, plus store sizes at its end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:       Tick,
    /// Orders matched to a volunteer in the assignment pass.
    pub assigned:   usize,
    /// Volunteers whose countdown finished in the step pass.
    pub finished:   usize,
    /// Collected orders returned to the pending store to await a driver.
    pub requeued:   usize,
    /// Orders that reached `Completed` this tick.
    pub delivered:  usize,
    /// Volunteers removed by the reap pass.
    pub reaped:     usize,

    pub pending:    usize,
    pub in_process: usize,
    pub completed:  usize,
    pub volunteers: usize,
}

/// Totals over one `run`/`run_ticks` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks:     u64,
    pub assigned:  usize,
    pub delivered: usize,
    pub reaped:    usize,
}

impl RunSummary {
    pub(crate) fn absorb(&mut self, tick: &TickSummary) {
        self.ticks += 1;
        self.assigned += tick.assigned;
        self.delivered += tick.delivered;
        self.reaped += tick.reaped;
    }
}

/// Callbacks invoked by [`Warehouse::run_ticks`] at key points in the tick
/// loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         println!("{}: {} delivered", summary.tick, summary.delivered);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any pass runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the reap pass of each tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the whole warehouse.
    fn on_snapshot(&mut self, _tick: Tick, _warehouse: &Warehouse) {}

    /// Called once after the final tick of a run completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
