//! SG-Ready controller — the per-tick orchestration.
//!
//! [`SgReadyController`] owns the arbiter, the encoder with both output
//! lines, the dwell guard, and the diagnostics reporter.  It reads the
//! wired inputs through an [`InputBank`] and never looks anything up by
//! name.
//!
//! ```text
//!  InputBank ──▶ ModeArbiter ──▶ DwellGuard ──▶ ModeEncoder ──▶ lines A/B
//!                                                    │
//!                                                    └──▶ DiagnosticsReporter
//! ```
//!
//! One tick runs to completion on the control thread.  The only state
//! kept between ticks is the applied mode/pattern, the dwell counter,
//! and the switch edge detectors.

use embedded_hal::digital::OutputPin;
use log::{debug, info, warn};
use serde::Serialize;

use crate::config::SgReadyConfig;
use crate::control::arbiter::{Decision, ModeArbiter, Rule};
use crate::control::encoder::{Encoding, ModeEncoder};
use crate::control::guard::DwellGuard;
use crate::control::mode::{Mode, OutputPattern};
use crate::diagnostics::{DiagnosticsReporter, Observables};
use crate::error::Result;
use crate::sensors::switch::{Edge, SwitchWatcher};
use crate::sensors::{InputBank, InputSnapshot};

use super::ports::DiagnosticsSink;

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// What the arbiter asked for.
    pub decision: Decision,
    /// Mode in force after the tick.
    pub mode: Mode,
    /// The output pattern changed (and diagnostics were published).
    pub changed: bool,
    /// The dwell guard held back the arbiter's decision.
    pub held: bool,
}

/// Point-in-time view for logging or telemetry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ControllerStatus {
    pub mode: Mode,
    pub rule: Rule,
    pub pattern: Option<OutputPattern>,
    pub inputs: InputSnapshot,
    pub tick_count: u64,
    pub dwell_remaining_ticks: u32,
    pub output_writes: u32,
}

pub struct SgReadyController<'a, A, B, S> {
    config: SgReadyConfig,
    arbiter: ModeArbiter,
    encoder: ModeEncoder<A, B>,
    guard: DwellGuard,
    inputs: InputBank<'a>,
    reporter: DiagnosticsReporter<S>,
    block_watch: SwitchWatcher,
    encourage_watch: SwitchWatcher,
    mode: Mode,
    last_decision: Decision,
    last_inputs: InputSnapshot,
    tick_count: u64,
}

impl<'a, A, B, S> SgReadyController<'a, A, B, S>
where
    A: OutputPin,
    B: OutputPin,
    S: DiagnosticsSink,
{
    /// Validate `config` and assemble the controller.
    ///
    /// Does **not** touch the outputs; call [`setup`](Self::setup) next.
    pub fn new(
        config: SgReadyConfig,
        pin_a: A,
        pin_b: B,
        inputs: InputBank<'a>,
        sink: S,
    ) -> Result<Self> {
        Self::with_encoding(config, Encoding::SG_READY, pin_a, pin_b, inputs, sink)
    }

    /// Like [`new`](Self::new) with a non-standard encoding table.
    pub fn with_encoding(
        config: SgReadyConfig,
        encoding: Encoding,
        pin_a: A,
        pin_b: B,
        inputs: InputBank<'a>,
        sink: S,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            arbiter: ModeArbiter::new(config.thresholds),
            encoder: ModeEncoder::new(encoding, pin_a, pin_b),
            guard: DwellGuard::new(config.min_dwell_ticks()),
            reporter: DiagnosticsReporter::new(sink, Observables::from_config(&config)),
            inputs,
            block_watch: SwitchWatcher::new(),
            encourage_watch: SwitchWatcher::new(),
            mode: Mode::Normal,
            last_decision: Decision {
                mode: Mode::Normal,
                rule: Rule::Default,
            },
            last_inputs: InputSnapshot::default(),
            tick_count: 0,
            config,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the fail-safe `Normal` pattern and publish initial
    /// diagnostics.
    pub fn setup(&mut self) {
        info!("Running setup");
        self.mode = Mode::Normal;
        if self.encoder.apply(Mode::Normal) {
            self.publish();
        }
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one arbitration cycle: capture → decide → guard → apply →
    /// publish.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_count += 1;
        self.guard.tick();

        // 1. Capture inputs
        let snapshot = self.inputs.capture();
        self.log_switch_edges(&snapshot);
        self.last_inputs = snapshot;

        // 2. Arbitrate
        let decision = self.arbiter.evaluate(&snapshot);
        self.last_decision = decision;

        // 3. Dwell guard (sensor-driven changes only)
        let held = !self.guard.admits(self.mode, &decision);
        let target = if held {
            debug!(
                "Mode change to {} suppressed: {} ticks of dwell remaining",
                decision.mode,
                self.guard.remaining()
            );
            self.mode
        } else {
            decision.mode
        };

        if target != self.mode {
            info!(
                "SGReady mode changed from {} to {} ({:?})",
                self.mode, target, decision.rule
            );
            self.mode = target;
            self.guard.restart();
        }

        // 4. Outputs; the first apply before setup() also lands here
        let changed = self.encoder.apply(target);

        // 5. Diagnostics, only on change
        if changed {
            self.publish();
        }

        TickOutcome {
            decision,
            mode: self.mode,
            changed,
            held,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Mode currently in force.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Pattern on the lines, `None` before the first write.
    pub fn pattern(&self) -> Option<OutputPattern> {
        self.encoder.applied()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &SgReadyConfig {
        &self.config
    }

    pub fn encoder(&self) -> &ModeEncoder<A, B> {
        &self.encoder
    }

    pub fn reporter(&self) -> &DiagnosticsReporter<S> {
        &self.reporter
    }

    pub fn inputs(&self) -> &InputBank<'a> {
        &self.inputs
    }

    pub fn status(&self) -> ControllerStatus {
        ControllerStatus {
            mode: self.mode,
            rule: self.last_decision.rule,
            pattern: self.encoder.applied(),
            inputs: self.last_inputs,
            tick_count: self.tick_count,
            dwell_remaining_ticks: self.guard.remaining(),
            output_writes: self.encoder.write_count(),
        }
    }

    /// Log the wiring.  Flags entities named in the config that have no
    /// input attached.
    pub fn dump_config(&self) {
        let c = &self.config;
        info!("SGReady controller");
        info!("  Pin A: GPIO{}", c.pin_a_gpio);
        info!("  Pin B: GPIO{}", c.pin_b_gpio);
        info!(
            "  Thresholds: price < {:.3}, temperature < {:.1}\u{00b0}C",
            c.thresholds.low_price, c.thresholds.low_temperature_c
        );
        info!(
            "  Tick: {} ms, dwell: {} s ({} ticks)",
            c.tick_interval_ms,
            c.min_dwell_secs,
            c.min_dwell_ticks()
        );

        let sensors = [
            ("temperature_sensor", &c.temperature_sensor, self.inputs.temperature().is_some()),
            ("price_level_sensor", &c.price_level_sensor, self.inputs.price_level().is_some()),
            ("force_block_switch", &c.force_block_switch, self.inputs.force_block().is_some()),
            (
                "force_encourage_switch",
                &c.force_encourage_switch,
                self.inputs.force_encourage().is_some(),
            ),
        ];
        for (field, entity, attached) in sensors {
            match (entity, attached) {
                (Some(id), true) => info!("  {}: {}", field, id),
                (Some(id), false) => warn!("  {}: {} (configured but not attached)", field, id),
                (None, true) => info!("  {}: attached", field),
                (None, false) => {}
            }
        }

        let diag = [
            ("mode_text_sensor", &c.mode_text_sensor),
            ("line_a_binary_sensor", &c.line_a_binary_sensor),
            ("line_b_binary_sensor", &c.line_b_binary_sensor),
        ];
        for (field, entity) in diag {
            if let Some(id) = entity {
                info!("  {}: {}", field, id);
            }
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn publish(&mut self) {
        if let Some(pattern) = self.encoder.applied() {
            self.reporter.publish(self.mode, pattern);
        }
    }

    fn log_switch_edges(&mut self, snapshot: &InputSnapshot) {
        let edges = [
            ("force block", self.block_watch.poll(snapshot.force_block)),
            ("force encourage", self.encourage_watch.poll(snapshot.force_encourage)),
        ];
        for (name, edge) in edges {
            match edge {
                Some(Edge::Rising) => info!("Switch '{}' engaged", name),
                Some(Edge::Falling) => info!("Switch '{}' released", name),
                None => {}
            }
        }
    }
}
