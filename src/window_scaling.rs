use crate::{
  dpi_info::DpiInfo,
  error::{UnblurError, UnblurResult},
  geometry_util::try_scale_geometry,
  scaling_util::{platform_provider, DpiProvider},
  Hwnd,
};

/// DPI state captured for one window when it is created.
///
/// Holds the values from a single query; moving the window to another
/// monitor afterwards does not update them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowScaling {
  window: Hwnd,
  dpi: DpiInfo,
}

impl WindowScaling {
  pub fn new(window: Hwnd) -> Self {
    Self::with_provider(window, &platform_provider())
  }

  pub fn with_provider<P: DpiProvider + ?Sized>(window: Hwnd, provider: &P) -> Self {
    let dpi = provider.query(&window);
    Self { window, dpi }
  }

  pub fn window(&self) -> Hwnd {
    self.window
  }

  pub fn dpi(&self) -> DpiInfo {
    self.dpi
  }

  pub fn dpi_x(&self) -> Option<u32> {
    self.dpi.dpi_x
  }

  pub fn dpi_y(&self) -> Option<u32> {
    self.dpi.dpi_y
  }

  pub fn dpi_scaling(&self) -> f64 {
    self.dpi.scaling
  }

  /// `value * scaling`, truncated toward zero. Saturates at the `i32` bounds.
  pub fn scale_value(&self, value: f64) -> i32 {
    (value * self.dpi.scaling) as i32
  }

  /// Parses and scales a decimal string. Fails instead of saturating when the
  /// product does not fit in an `i32`.
  pub fn scale_str(&self, value: &str) -> UnblurResult<i32> {
    let parsed: f64 = value
      .trim()
      .parse()
      .map_err(|_| UnblurError::InvalidNumber(value.to_string()))?;

    let scaled = (parsed * self.dpi.scaling).trunc();
    if !scaled.is_finite() || scaled < i32::MIN as f64 || scaled > i32::MAX as f64 {
      return Err(UnblurError::OutOfRange(value.to_string()));
    }
    Ok(scaled as i32)
  }

  /// Scales a `"<W>x<H>+<X>+<Y>"` geometry by this window's factor.
  pub fn scale_geometry(&self, geometry: &str) -> UnblurResult<String> {
    try_scale_geometry(geometry, |token| self.scale_str(token))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(dpi: u32) -> WindowScaling {
    WindowScaling::with_provider(Hwnd(7), &move |_: &Hwnd| DpiInfo::from_dpi(dpi, dpi))
  }

  #[test]
  fn exposes_queried_values() {
    let scaling = at(144);
    assert_eq!(scaling.window(), Hwnd(7));
    assert_eq!(scaling.dpi_x(), Some(144));
    assert_eq!(scaling.dpi_y(), Some(144));
    assert_eq!(scaling.dpi_scaling(), 1.5);
  }

  #[test]
  fn scale_value_truncates() {
    assert_eq!(at(144).scale_value(100.0), 150);
    assert_eq!(at(120).scale_value(50.0), 62);
    assert_eq!(at(120).scale_value(-50.0), -62);
    assert_eq!(at(96).scale_value(99.9), 99);
  }

  #[test]
  fn scale_str_parses_numbers() {
    assert_eq!(at(192).scale_str("800"), Ok(1600));
    assert_eq!(at(192).scale_str("-12.5"), Ok(-25));
    assert_eq!(
      at(192).scale_str("wide"),
      Err(UnblurError::InvalidNumber("wide".to_string()))
    );
  }

  #[test]
  fn scales_geometry_strings() {
    assert_eq!(at(144).scale_geometry("800x600+100+50").unwrap(), "1200x900+150+75");
    assert_eq!(at(192).scale_geometry("800x600+-100+-50").unwrap(), "1600x1200+-200+-100");
    assert_eq!(
      at(144).scale_geometry("800x600"),
      Err(UnblurError::InvalidGeometry("800x600".to_string()))
    );
  }

  #[test]
  fn oversized_values_are_rejected() {
    assert_eq!(
      at(96).scale_geometry("3000000000x600+0+0"),
      Err(UnblurError::OutOfRange("3000000000".to_string()))
    );
    assert_eq!(
      at(192).scale_geometry("1000x600+-1500000000+0"),
      Err(UnblurError::OutOfRange("-1500000000".to_string()))
    );
    assert_eq!(
      at(96).scale_str("inf"),
      Err(UnblurError::OutOfRange("inf".to_string()))
    );
  }

  #[test]
  fn i32_bounds_still_fit() {
    assert_eq!(at(96).scale_str("2147483647"), Ok(i32::MAX));
    assert_eq!(at(96).scale_str("-2147483648"), Ok(i32::MIN));
    assert_eq!(at(96).scale_geometry("2147483647x1+-2147483648+0").unwrap(), "2147483647x1+-2147483648+0");
  }

  #[test]
  fn queries_once() {
    let calls = std::cell::Cell::new(0);
    let provider = |_: &Hwnd| {
      calls.set(calls.get() + 1);
      DpiInfo::neutral()
    };
    let scaling = WindowScaling::with_provider(Hwnd(1), &provider);
    scaling.scale_geometry("1x1+1+1").unwrap();
    scaling.scale_value(3.0);
    assert_eq!(calls.get(), 1);
  }

  #[cfg(not(windows))]
  #[test]
  fn default_provider_off_windows() {
    let scaling = WindowScaling::new(Hwnd(12345));
    assert_eq!(scaling.dpi(), DpiInfo::unsupported());
    assert_eq!(scaling.scale_geometry("800x600+100+50").unwrap(), "800x600+100+50");
  }
}
