use serde::Serialize;

/// DPI reported for an unscaled (100%) monitor.
pub const DPI_100_PERCENT: u32 = 96;

/// DPI of the monitor a window lives on, and the scaling factor derived from it.
///
/// `dpi_x`/`dpi_y` are `None` only where the platform has no monitor DPI
/// query. `scaling` is always positive and is `1.0` whenever detection is
/// unsupported or failed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DpiInfo {
  pub dpi_x: Option<u32>,
  pub dpi_y: Option<u32>,
  pub scaling: f64,
}

impl DpiInfo {
  /// Averages both axes against the 96 baseline.
  pub fn from_dpi(dpi_x: u32, dpi_y: u32) -> Self {
    let scaling = (dpi_x as f64 + dpi_y as f64) / (2 * DPI_100_PERCENT) as f64;
    Self {
      dpi_x: Some(dpi_x),
      dpi_y: Some(dpi_y),
      scaling,
    }
  }

  /// Fallback on Windows when any step of the lookup fails.
  pub fn neutral() -> Self {
    Self::from_dpi(DPI_100_PERCENT, DPI_100_PERCENT)
  }

  /// Result on platforms without per-monitor DPI.
  pub fn unsupported() -> Self {
    Self {
      dpi_x: None,
      dpi_y: None,
      scaling: 1.0,
    }
  }

  pub fn scaling_percent(&self) -> String {
    format!("{:.0}%", self.scaling * 100.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn scaling_from_common_dpis() {
    assert_eq!(DpiInfo::from_dpi(96, 96).scaling, 1.0);
    assert_eq!(DpiInfo::from_dpi(120, 120).scaling, 1.25);
    assert_eq!(DpiInfo::from_dpi(144, 144).scaling, 1.5);
    assert_eq!(DpiInfo::from_dpi(192, 192).scaling, 2.0);
  }

  #[test]
  fn scaling_averages_axes() {
    let info = DpiInfo::from_dpi(96, 192);
    assert_eq!(info.scaling, 1.5);
    assert_eq!(info.dpi_x, Some(96));
    assert_eq!(info.dpi_y, Some(192));
  }

  #[test]
  fn neutral_and_unsupported() {
    assert_eq!(
      DpiInfo::neutral(),
      DpiInfo {
        dpi_x: Some(96),
        dpi_y: Some(96),
        scaling: 1.0
      }
    );
    let unsupported = DpiInfo::unsupported();
    assert_eq!(unsupported.dpi_x, None);
    assert_eq!(unsupported.dpi_y, None);
    assert_eq!(unsupported.scaling, 1.0);
  }

  #[test]
  fn percent_for_display() {
    assert_eq!(DpiInfo::from_dpi(144, 144).scaling_percent(), "150%");
    assert_eq!(DpiInfo::unsupported().scaling_percent(), "100%");
  }
}
