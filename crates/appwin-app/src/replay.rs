//! Drive a window context from a JSON-lines stream of host messages and
//! report each notification it raises.

use std::io::{BufRead, Write};

use appwin_bridge::{HostMessage, WindowContext, WindowNotification, WindowStateBridge};
use appwin_common::{EventBus, WindowEvent};
use serde::Serialize;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, error, warn};

/// Stands in for the empty window id in plain reports.
const EMPTY_WINDOW_LABEL: &str = "\"\"";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    pub strict: bool,
    pub json: bool,
    pub bus_capacity: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub messages: usize,
    pub skipped: usize,
    pub notifications: usize,
}

#[derive(Serialize)]
struct ReportLine<'a> {
    line: usize,
    window: &'a str,
    event: &'static str,
}

pub struct Replayer {
    context: WindowContext,
    events: broadcast::Receiver<WindowEvent>,
    options: ReplayOptions,
}

impl Replayer {
    pub fn new(options: ReplayOptions) -> Self {
        let bus = EventBus::new(options.bus_capacity.max(1));
        let events = bus.subscribe();
        let context = WindowContext::with_bridge(
            WindowStateBridge::with_event_bus(bus),
            appwin_bridge::NoopHost,
        );
        Self {
            context,
            events,
            options,
        }
    }

    pub fn context(&self) -> &WindowContext {
        &self.context
    }

    /// Replay every message of `input`, writing one report line per
    /// notification to `out`.
    ///
    /// Blank lines and `#` comments are skipped. Malformed lines are logged
    /// and skipped, or abort the replay in strict mode.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> appwin_common::Result<ReplaySummary> {
        let mut summary = ReplaySummary::default();

        for (index, line) in input.lines().enumerate() {
            let line_no = index + 1;
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let message = match HostMessage::from_json(trimmed) {
                Ok(message) => message,
                Err(e) if self.options.strict => {
                    error!(line = line_no, "{e}");
                    return Err(e.into());
                }
                Err(e) => {
                    warn!(line = line_no, "skipping host message: {e}");
                    summary.skipped += 1;
                    continue;
                }
            };

            debug!(line = line_no, kind = message.kind(), "host message");
            self.context.handle(message);
            summary.messages += 1;
            summary.notifications += self.drain(line_no, out)?;
        }

        Ok(summary)
    }

    fn drain<W: Write>(&mut self, line_no: usize, out: &mut W) -> appwin_common::Result<usize> {
        let mut written = 0;
        loop {
            let event = match self.events.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                Err(TryRecvError::Lagged(missed)) => {
                    warn!(line = line_no, missed, "event bus lagged, notifications lost");
                    continue;
                }
            };
            let (Some(notification), Some(window)) =
                (WindowNotification::from_event(&event), event.window_id())
            else {
                continue;
            };

            if self.options.json {
                let report = ReportLine {
                    line: line_no,
                    window: window.as_str(),
                    event: notification.name(),
                };
                let json = serde_json::to_string(&report)
                    .map_err(|e| appwin_common::AppWinError::Other(e.to_string()))?;
                writeln!(out, "{json}")?;
            } else {
                let label = if window.is_empty() {
                    EMPTY_WINDOW_LABEL
                } else {
                    window.as_str()
                };
                writeln!(out, "{label} {notification}")?;
            }
            written += 1;
        }
        Ok(written)
    }
}
