use lazy_static::lazy_static;
use std::sync::Mutex;
use tracing::debug;

lazy_static! {
  static ref PROCESS_AWARENESS: DpiAwareness = DpiAwareness::default();
}

/// What happened when the process was asked to become per-monitor DPI aware.
///
/// None of these is an error: DPI lookups proceed either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwarenessOutcome {
  Set,
  AlreadySet,
  Unsupported,
}

/// Idempotent holder for the process-wide DPI awareness mode.
///
/// The first `ensure` call runs the OS request and remembers its outcome;
/// later calls return that outcome without touching the OS again.
#[derive(Debug, Default)]
pub struct DpiAwareness {
  outcome: Mutex<Option<AwarenessOutcome>>,
}

impl DpiAwareness {
  pub fn ensure(&self, request: impl FnOnce() -> AwarenessOutcome) -> AwarenessOutcome {
    let mut outcome = match self.outcome.lock() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    };

    if let Some(previous) = *outcome {
      return previous;
    }

    let result = request();
    debug!("DPI awareness request: {:?}", result);
    *outcome = Some(result);
    result
  }

  pub fn outcome(&self) -> Option<AwarenessOutcome> {
    match self.outcome.lock() {
      Ok(guard) => *guard,
      Err(poisoned) => *poisoned.into_inner(),
    }
  }
}

/// Opts the process into per-monitor DPI awareness, once.
///
/// Affects every window created afterwards in this process. On platforms
/// without the concept this records `Unsupported` and makes no OS call.
pub fn ensure_dpi_awareness() -> AwarenessOutcome {
  PROCESS_AWARENESS.ensure(request_process_awareness)
}

/// Outcome of the earliest `ensure_dpi_awareness` call, if there was one.
pub fn dpi_awareness() -> Option<AwarenessOutcome> {
  PROCESS_AWARENESS.outcome()
}

#[cfg(windows)]
fn request_process_awareness() -> AwarenessOutcome {
  match crate::monitor_util::Shcore::load() {
    Ok(shcore) => shcore.set_process_dpi_awareness(),
    Err(err) => {
      debug!("SetProcessDpiAwareness unavailable: {}", err);
      AwarenessOutcome::Unsupported
    }
  }
}

#[cfg(not(windows))]
fn request_process_awareness() -> AwarenessOutcome {
  AwarenessOutcome::Unsupported
}
