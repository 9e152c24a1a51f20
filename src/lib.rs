//! Crisp windows on high-DPI Windows displays.
//!
//! Looks up the effective DPI of the monitor a window is on, derives a
//! scaling factor against the 96 DPI baseline, and rescales pixel values and
//! `"<W>x<H>+<X>+<Y>"` geometry strings with it.
//!
//! ```no_run
//! use unblur::{Hwnd, WindowScaling};
//!
//! let scaling = WindowScaling::new(Hwnd(0x1234));
//! println!("Scaling: {}", scaling.dpi().scaling_percent());
//! let geometry = scaling.scale_geometry("800x600+100+50")?;
//! # Ok::<(), unblur::UnblurError>(())
//! ```
//!
//! Off Windows every lookup yields no DPI values and a factor of `1.0`.

mod awareness_util;
mod dpi_info;
mod error;
mod geometry_util;
#[cfg(windows)]
mod monitor_util;
mod scaling_util;
mod window_scaling;

pub use awareness_util::{dpi_awareness, ensure_dpi_awareness, AwarenessOutcome, DpiAwareness};
pub use dpi_info::{DpiInfo, DPI_100_PERCENT};
pub use error::{DetectionError, UnblurError, UnblurResult};
pub use geometry_util::{scale_geometry, try_scale_geometry, Geometry};
#[cfg(windows)]
pub use scaling_util::WindowsDpiProvider;
pub use scaling_util::{
  platform_provider, DpiProvider, PlatformDpiProvider, UnsupportedDpiProvider,
};
pub use window_scaling::WindowScaling;

/// Native window handle (an `HWND` on Windows), carried as an opaque integer.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Hwnd(pub usize);

/// DPI of the monitor nearest to `window`. Never fails; see [`DpiInfo`].
pub fn query_dpi(window: Hwnd) -> DpiInfo {
  platform_provider().query(&window)
}

pub fn query_dpi_with<P: DpiProvider + ?Sized>(provider: &P, window: Hwnd) -> DpiInfo {
  provider.query(&window)
}
