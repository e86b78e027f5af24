//! The tick loop: assignment, step, completion, reap.

use tracing::{debug, info};

use wh_core::{OrderId, Tick, VolunteerId};
use wh_model::{Order, OrderStatus, RoleKind, Volunteer};

use crate::{RunSummary, SimObserver, TickSummary, Warehouse};

impl Warehouse {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Does nothing if the clock is already at or past the end tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        let remaining = self.config.end_tick().0.saturating_sub(self.current_tick().0);
        self.run_ticks(remaining, observer)
    }

    /// Run exactly `n` ticks from the current position.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> RunSummary {
        let mut run = RunSummary::default();
        for _ in 0..n {
            let now = self.current_tick();
            observer.on_tick_start(now);
            let summary = self.process_tick(now);
            observer.on_tick_end(&summary);
            if self.config.is_snapshot_tick(now) {
                observer.on_snapshot(now, self);
            }
            run.absorb(&summary);
            self.state.clock.advance();
        }
        observer.on_sim_end(self.current_tick());

        info!(
            ticks = run.ticks,
            assigned = run.assigned,
            delivered = run.delivered,
            reaped = run.reaped,
            now = %self.current_tick(),
            "run finished"
        );
        run
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> TickSummary {
        let assigned = self.assign_orders(now);
        let finished = self.step_volunteers(now);
        let (requeued, delivered) = self.reconcile_completions(now);
        let reaped = self.reap_volunteers(now);

        TickSummary {
            tick: now,
            assigned,
            finished,
            requeued,
            delivered,
            reaped,
            pending:    self.state.pending.len(),
            in_process: self.state.in_process.len(),
            completed:  self.state.completed.len(),
            volunteers: self.state.volunteers.len(),
        }
    }

    /// ① Match waiting orders to the first eligible volunteer.
    ///
    /// `Pending` orders look for a collector, `Collecting` orders (collected,
    /// waiting for delivery) look for a driver.  Matched orders move to the
    /// in-process store; unmatched ones keep their place in the queue.
    fn assign_orders(&mut self, now: Tick) -> usize {
        let waiting = std::mem::take(&mut self.state.pending);
        let mut still_waiting = Vec::with_capacity(waiting.len());
        let mut assigned = 0;

        for mut order in waiting {
            let stage = match order.status() {
                OrderStatus::Pending    => RoleKind::Collector,
                OrderStatus::Collecting => RoleKind::Driver,
                OrderStatus::Delivering | OrderStatus::Completed => {
                    still_waiting.push(order);
                    continue;
                }
            };

            match first_taker(&mut self.state.volunteers, stage, &order) {
                Some(volunteer) => {
                    match stage {
                        RoleKind::Collector => order.assign_collector(volunteer),
                        RoleKind::Driver    => order.assign_driver(volunteer),
                    }
                    debug!(tick = now.0, order = order.id().0, volunteer = volunteer.0, ?stage, "order assigned");
                    self.state.in_process.push(order);
                    assigned += 1;
                }
                None => still_waiting.push(order),
            }
        }

        self.state.pending = still_waiting;
        assigned
    }

    /// ② Advance every busy volunteer's countdown.
    fn step_volunteers(&mut self, now: Tick) -> usize {
        let mut finished = 0;
        for volunteer in &mut self.state.volunteers {
            if let Some(order) = volunteer.step() {
                debug!(tick = now.0, volunteer = volunteer.id.0, order = order.0, "volunteer finished order");
                finished += 1;
            }
        }
        finished
    }

    /// ③ Move finished work out of the in-process store.
    ///
    /// A collected order returns to the pending store keeping status
    /// `Collecting` and its collector; a delivered order becomes `Completed`.
    /// Volunteers are found by id, and their completed-order flag is consumed
    /// so it is reconciled exactly once.
    fn reconcile_completions(&mut self, now: Tick) -> (usize, usize) {
        let working = std::mem::take(&mut self.state.in_process);
        let mut still_working = Vec::with_capacity(working.len());
        let (mut requeued, mut delivered) = (0, 0);

        let volunteers = &mut self.state.volunteers;
        for mut order in working {
            match order.status() {
                OrderStatus::Collecting if finished_by(volunteers, order.collector(), order.id()) => {
                    debug!(tick = now.0, order = order.id().0, "order collected, awaiting driver");
                    self.state.pending.push(order);
                    requeued += 1;
                }
                OrderStatus::Delivering if finished_by(volunteers, order.driver(), order.id()) => {
                    order.complete();
                    debug!(tick = now.0, order = order.id().0, "order completed");
                    self.state.completed.push(order);
                    delivered += 1;
                }
                _ => still_working.push(order),
            }
        }

        self.state.in_process = still_working;
        (requeued, delivered)
    }

    /// ④ Remove idle volunteers with no quota left, in registry order.
    fn reap_volunteers(&mut self, now: Tick) -> usize {
        let before = self.state.volunteers.len();
        self.state.volunteers.retain(|v| {
            let keep = v.has_orders_left() || v.is_busy();
            if !keep {
                debug!(tick = now.0, volunteer = v.id.0, name = %v.name, "volunteer reaped");
            }
            keep
        });
        before - self.state.volunteers.len()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// First volunteer of `stage` in registry order that accepts `order`.
///
/// `accept_order` checks eligibility before mutating, so volunteers that
/// decline are left untouched.
fn first_taker(volunteers: &mut [Volunteer], stage: RoleKind, order: &Order) -> Option<VolunteerId> {
    volunteers
        .iter_mut()
        .filter(|v| v.kind() == stage)
        .find_map(|v| v.accept_order(order).then_some(v.id))
}

/// `true` (and the flag consumed) if volunteer `who` just finished `order`.
///
/// A volunteer that is no longer registered cannot have just finished.
fn finished_by(volunteers: &mut [Volunteer], who: Option<VolunteerId>, order: OrderId) -> bool {
    let Some(who) = who else { return false };
    volunteers
        .iter_mut()
        .find(|v| v.id == who)
        .is_some_and(|v| v.take_completed(order))
}
