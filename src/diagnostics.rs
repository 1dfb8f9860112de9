//! Diagnostic observables.
//!
//! Mirrors the controller's state onto host entities: one binary sensor
//! per output line and a text sensor with the mode label.  Only the
//! entities named in the configuration are published.  Publication is
//! push-based and happens only when the applied pattern changes.

use crate::app::ports::DiagnosticsSink;
use crate::config::SgReadyConfig;
use crate::control::mode::{Line, Mode, OutputPattern};

/// Which observables are wired to host entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Observables {
    pub mode_text: bool,
    pub line_a: bool,
    pub line_b: bool,
}

impl Observables {
    /// Every observable wired.
    pub const ALL: Observables = Observables {
        mode_text: true,
        line_a: true,
        line_b: true,
    };

    pub fn from_config(config: &SgReadyConfig) -> Self {
        Self {
            mode_text: config.mode_text_sensor.is_some(),
            line_a: config.line_a_binary_sensor.is_some(),
            line_b: config.line_b_binary_sensor.is_some(),
        }
    }

    fn line(self, line: Line) -> bool {
        match line {
            Line::A => self.line_a,
            Line::B => self.line_b,
        }
    }
}

pub struct DiagnosticsReporter<S> {
    sink: S,
    wired: Observables,
    mode_label: Option<&'static str>,
    lines: Option<OutputPattern>,
    publications: u32,
}

impl<S: DiagnosticsSink> DiagnosticsReporter<S> {
    pub fn new(sink: S, wired: Observables) -> Self {
        Self {
            sink,
            wired,
            mode_label: None,
            lines: None,
            publications: 0,
        }
    }

    /// Push the new mode and line states to every wired observable.
    pub fn publish(&mut self, mode: Mode, pattern: OutputPattern) {
        if self.wired.mode_text {
            self.sink.publish_mode(mode.label());
        }
        for line in [Line::A, Line::B] {
            if self.wired.line(line) {
                self.sink.publish_line_state(line, pattern.line(line));
            }
        }
        self.mode_label = Some(mode.label());
        self.lines = Some(pattern);
        self.publications = self.publications.wrapping_add(1);
    }

    /// Last published mode label.
    pub fn mode_label(&self) -> Option<&'static str> {
        self.mode_label
    }

    /// Last published state of `line`.
    pub fn line_state(&self, line: Line) -> Option<bool> {
        self.lines.map(|p| p.line(line))
    }

    pub fn publication_count(&self) -> u32 {
        self.publications
    }

    pub fn wired(&self) -> Observables {
        self.wired
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
