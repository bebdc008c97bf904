use model::RainRisk;

use crate::tick::Tick;

/// One alert pushed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub tick_index: u64,
    pub kind: &'static str,
    pub severity: RainRisk,
    pub message: String,
}

/// Subscription surface the presentation layer owns.
///
/// Refresh tasks emit into the bus; whoever drives the loop inspects or
/// drains it after each tick.
#[derive(Debug, Default)]
pub struct AlertBus {
    alerts: Vec<Alert>,
}

impl AlertBus {
    pub fn new() -> Self {
        Self { alerts: Vec::new() }
    }

    pub fn emit(&mut self, tick: Tick, kind: &'static str, severity: RainRisk, message: impl Into<String>) {
        self.alerts.push(Alert {
            tick_index: tick.index,
            kind,
            severity,
            message: message.into(),
        });
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn drain(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.alerts)
    }
}
