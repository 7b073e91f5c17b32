//! Position lifecycle engine.
//!
//! Single-instrument, single-position, synchronous. Each closed bar
//! runs one pass of `on_bar`; fill notifications from the execution
//! collaborator arrive between bars through the `on_position_*`
//! callbacks, which are the only mutation path into the open position.
//!
//! Per-bar order of operations:
//! 1. append the bar; do nothing until warm-up completes;
//! 2. refresh the indicator snapshots and evaluate crossings;
//! 3. release the long re-entry latch on a reverse crossing;
//! 4. forced-exit checks on the open position;
//! 5. entry evaluation when flat: signal, latch, risk gate, sizing.

use crate::config::StrategyConfig;
use crate::error::EngineResult;
use crate::execution::ExecutionClient;
use crate::state::StrategyState;
use ottbot_core::{Bar, BarWindow, Direction, EntryOrder, Fill, InstrumentRules, Price, StopOrder};
use ottbot_detector::{BarSignals, IndicatorCache, SignalDetector, TrendIndicator};
use ottbot_position::{tier_split, Position, TakeProfitLadder, TIER_COUNT};
use ottbot_risk::{PositionSizer, RiskGate};
use rust_decimal::Decimal;
use tracing::{debug, info, trace, warn};

/// Entry order awaiting its fill, with the stop computed at placement.
///
/// Lapses if the fill has not arrived by the next bar.
#[derive(Debug, Clone, Copy)]
struct PendingEntry {
    direction: Direction,
    stop: Price,
}

/// The strategy orchestrator. At most one open position at any time.
pub struct StrategyEngine<I: TrendIndicator, X: ExecutionClient> {
    config: StrategyConfig,
    rules: InstrumentRules,
    window: BarWindow,
    cache: IndicatorCache<I>,
    gate: RiskGate,
    sizer: PositionSizer,
    execution: X,
    state: StrategyState,
    position: Option<Position>,
    pending_entry: Option<PendingEntry>,
}

impl<I: TrendIndicator, X: ExecutionClient> StrategyEngine<I, X> {
    pub fn new(
        config: StrategyConfig,
        rules: InstrumentRules,
        indicator: I,
        execution: X,
    ) -> EngineResult<Self> {
        config.validate()?;

        let capacity = config.warmup_bars.max(ottbot_core::bar::DEFAULT_WINDOW);
        let cache = IndicatorCache::new(
            indicator,
            config.signal.long.clone(),
            config.signal.short.clone(),
        );
        let gate = RiskGate::new(config.risk.max_risk_long, config.risk.max_risk_short);
        let sizer = PositionSizer::new(config.leverage, config.fee_rate);

        Ok(Self {
            config,
            rules,
            window: BarWindow::new(capacity),
            cache,
            gate,
            sizer,
            execution,
            state: StrategyState::default(),
            position: None,
            pending_entry: None,
        })
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn state(&self) -> &StrategyState {
        &self.state
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub fn execution(&self) -> &X {
        &self.execution
    }

    /// Live diagnostics for a dashboard display.
    pub fn watch_list(&self) -> Vec<(String, String)> {
        crate::diagnostics::watch_list(&self.config.symbol, &self.state)
    }

    /// Entry counters for the run so far.
    pub fn summary(&self) -> crate::diagnostics::RunSummary {
        crate::diagnostics::RunSummary::from_state(&self.state)
    }

    /// Process one closed bar.
    pub fn on_bar(&mut self, bar: Bar) -> EngineResult<()> {
        // An entry placed on the previous bar that never filled lapses.
        if self.pending_entry.take().is_some() {
            debug!("pending entry lapsed unfilled");
        }

        let index = self.window.push(bar);
        if !self.window.is_warm(self.config.warmup_bars) {
            trace!(bars = self.window.len(), "warming up");
            return Ok(());
        }

        let closes = self.window.closes();
        let (long, short) = self.cache.refresh(index, &closes);
        let signals = SignalDetector::evaluate(long, short);
        let long_line = long.line.last().copied();
        let short_line = short.line.last().copied();

        if signals.long_reverse {
            self.state.long_latch.arm();
        }

        if self.check_forced_exit(&signals)? {
            return Ok(());
        }

        if self.position.is_none() {
            self.evaluate_entry(&signals, long_line, short_line)?;
        }

        Ok(())
    }

    /// Forced exits run before entry evaluation. Returns true when a
    /// liquidation was issued this bar.
    fn check_forced_exit(&mut self, signals: &BarSignals) -> EngineResult<bool> {
        let Some(position) = &self.position else {
            return Ok(false);
        };

        let reverse = match position.direction {
            Direction::Long => signals.long_reverse,
            Direction::Short => signals.short_reverse,
        };

        if reverse {
            info!(
                direction = %position.direction,
                remaining = %position.remaining(),
                "reverse crossing, liquidating position"
            );
            self.execution.liquidate(position.remaining())?;
            return Ok(true);
        }

        // All tiers filled yet the position is still open: the final
        // tier should have closed it. Flatten and flag the anomaly.
        if position.tiers_hit >= TIER_COUNT {
            warn!(
                direction = %position.direction,
                remaining = %position.remaining(),
                tiers_hit = position.tiers_hit,
                "all take-profit tiers hit but position still open, forcing liquidation"
            );
            self.execution.liquidate(position.remaining())?;
            return Ok(true);
        }

        Ok(false)
    }

    fn evaluate_entry(
        &mut self,
        signals: &BarSignals,
        long_line: Option<Decimal>,
        short_line: Option<Decimal>,
    ) -> EngineResult<()> {
        if self.pending_entry.is_some() {
            return Ok(());
        }

        let (direction, line) = if signals.long_entry && self.state.long_latch.is_armed() {
            match long_line {
                Some(line) => (Direction::Long, line),
                None => return Ok(()),
            }
        } else if signals.short_entry && self.state.short_latch.is_armed() {
            match short_line {
                Some(line) => (Direction::Short, line),
                None => return Ok(()),
            }
        } else {
            return Ok(());
        };

        let Some(last_bar) = self.window.last() else {
            return Ok(());
        };
        let price = self.rules.round_price(last_bar.close);
        let stop = self.rules.round_price(Price::new(line));

        let capital = self.execution.capital()?;
        let allocation = capital * self.config.allocation_fraction;

        let verdict = self.gate.check(
            direction,
            allocation,
            capital,
            self.config.leverage,
            price,
            stop,
        );
        if !verdict.is_pass() {
            // Rejection is a silent no-op; the next signal starts fresh.
            trace!(%direction, risk_pct = %verdict.risk_pct(), "entry suppressed by risk gate");
            return Ok(());
        }

        let qty = self.sizer.qty(allocation, price, &self.rules);
        if !qty.is_positive() {
            return Ok(());
        }

        let order = EntryOrder {
            direction,
            qty,
            price,
        };
        info!(%direction, %qty, %price, %stop, "placing entry order");
        self.execution.place_entry(&order)?;
        self.pending_entry = Some(PendingEntry { direction, stop });
        Ok(())
    }

    /// Entry fill: create the position, issue the stop and the full
    /// take-profit tier batch.
    pub fn on_position_opened(&mut self, fill: Fill) -> EngineResult<()> {
        let Some(pending) = self.pending_entry.take() else {
            warn!(price = %fill.price, qty = %fill.qty, "entry fill with no pending entry, ignoring");
            return Ok(());
        };

        let split_index = match pending.direction {
            Direction::Long => self.config.risk.split_index_long,
            Direction::Short => self.config.risk.split_index_short,
        };
        let weights = tier_split(split_index);
        let ladder = TakeProfitLadder::build(
            pending.direction,
            fill.price,
            fill.qty,
            &self.config.ladder_percents,
            weights,
            &self.rules,
        );

        self.execution.replace_stop(&StopOrder {
            qty: fill.qty,
            price: pending.stop,
        })?;
        self.execution.place_take_profits(&ladder.tiers)?;

        match pending.direction {
            Direction::Long => {
                self.state.longs += 1;
                self.state.long_latch.block();
            }
            Direction::Short => self.state.shorts += 1,
        }
        self.state.prev_balance = self.execution.balance()?;

        info!(
            direction = %pending.direction,
            entry = %fill.price,
            qty = %fill.qty,
            stop = %pending.stop,
            tiers = ladder.tiers.len(),
            "position opened"
        );
        self.position = Some(Position::new(
            pending.direction,
            fill.price,
            fill.qty,
            pending.stop,
            ladder.tiers,
        ));
        Ok(())
    }

    /// Take-profit reduction fill: shrink the position and reissue the
    /// stop at the unchanged cycle stop price for the remaining size.
    pub fn on_position_reduced(&mut self, fill: Fill) -> EngineResult<()> {
        let Some(position) = self.position.as_mut() else {
            warn!(qty = %fill.qty, "reduction fill with no open position, ignoring");
            return Ok(());
        };

        let remaining = position.apply_reduction(fill.qty);
        let stop_price = position.stop_price;

        let balance = self.execution.balance()?;
        let realized = balance - self.state.prev_balance;
        self.state.prev_balance = balance;
        info!(
            remaining = %remaining,
            tiers_hit = position.tiers_hit,
            %realized,
            "take-profit tier filled"
        );

        if remaining.is_zero() {
            debug!("reduction emptied the position, treating as close");
            self.position = None;
            return Ok(());
        }

        self.execution.replace_stop(&StopOrder {
            qty: remaining,
            price: stop_price,
        })?;
        Ok(())
    }

    /// Full close fill: record cycle PnL and return to flat.
    pub fn on_position_closed(&mut self, fill: Fill) -> EngineResult<()> {
        let Some(position) = self.position.take() else {
            warn!(qty = %fill.qty, "close fill with no open position, ignoring");
            return Ok(());
        };

        let balance = self.execution.balance()?;
        let realized = balance - self.state.prev_balance;
        self.state.prev_balance = balance;
        info!(
            direction = %position.direction,
            entry = %position.entry_price,
            exit = %fill.price,
            initial_qty = %position.initial_qty,
            %realized,
            "position closed"
        );
        Ok(())
    }
}
