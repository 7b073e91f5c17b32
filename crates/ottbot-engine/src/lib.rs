//! Position lifecycle engine for the band-trend strategy.
//!
//! Wires the detector, risk gate, sizer and ladder into a synchronous
//! per-bar state machine. Market data and order execution are injected
//! collaborators; the engine itself holds no transport.

pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod execution;
pub mod logging;
pub mod state;

pub use config::{RiskConfig, SignalConfig, StrategyConfig};
pub use diagnostics::{watch_list, RunSummary};
pub use engine::StrategyEngine;
pub use error::{EngineError, EngineResult};
pub use execution::ExecutionClient;
pub use logging::init_logging;
pub use state::{ReentryLatch, StrategyState};
