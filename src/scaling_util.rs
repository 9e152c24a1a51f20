use tracing::{debug, warn};

use crate::{dpi_info::DpiInfo, error::UnblurResult, Hwnd};
#[cfg(windows)]
use crate::{awareness_util::ensure_dpi_awareness, monitor_util::Shcore};

/// Source of DPI information for a native window.
///
/// `query` is total: implementations fall back to a neutral value instead of
/// failing. Nothing is cached, each call asks again.
pub trait DpiProvider {
  fn query(&self, window: &Hwnd) -> DpiInfo;
}

impl<F> DpiProvider for F
where
  F: Fn(&Hwnd) -> DpiInfo,
{
  fn query(&self, window: &Hwnd) -> DpiInfo {
    self(window)
  }
}

/// Collapses a detection result into a value: any failure becomes 96 DPI at 100%.
#[cfg_attr(not(windows), allow(dead_code))]
fn settle(window: &Hwnd, detected: UnblurResult<DpiInfo>) -> DpiInfo {
  match detected {
    Ok(info) => {
      debug!(
        "DPI detected for {:?}: x={:?}, y={:?}, scaling={:.2}",
        window, info.dpi_x, info.dpi_y, info.scaling
      );
      info
    }
    Err(err) => {
      warn!("{} for {:?}, using 100% scaling", err, window);
      DpiInfo::neutral()
    }
  }
}

/// Per-monitor effective DPI through shcore.dll.
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsDpiProvider;

#[cfg(windows)]
impl WindowsDpiProvider {
  /// The fallible lookup behind `query`.
  pub fn detect(&self, window: &Hwnd) -> UnblurResult<DpiInfo> {
    let shcore = Shcore::load()?;
    ensure_dpi_awareness();
    let (dpi_x, dpi_y) = shcore.get_screen_dpi_for_window(window)?;
    Ok(DpiInfo::from_dpi(dpi_x, dpi_y))
  }
}

#[cfg(windows)]
impl DpiProvider for WindowsDpiProvider {
  fn query(&self, window: &Hwnd) -> DpiInfo {
    settle(window, self.detect(window))
  }
}

/// Provider for platforms without per-monitor DPI. Makes no OS calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedDpiProvider;

impl DpiProvider for UnsupportedDpiProvider {
  fn query(&self, window: &Hwnd) -> DpiInfo {
    debug!("No per-monitor DPI on this platform, skipping detection for {:?}", window);
    DpiInfo::unsupported()
  }
}

#[cfg(windows)]
pub type PlatformDpiProvider = WindowsDpiProvider;
#[cfg(not(windows))]
pub type PlatformDpiProvider = UnsupportedDpiProvider;

pub fn platform_provider() -> PlatformDpiProvider {
  PlatformDpiProvider::default()
}
