use winapi::{
  shared::{
    minwindef::{HMODULE, UINT},
    windef::{HMONITOR, HWND},
    winerror::{E_ACCESSDENIED, HRESULT, S_OK},
  },
  um::{
    libloaderapi::{FreeLibrary, GetProcAddress, LoadLibraryA},
    shellscalingapi::{
      MDT_EFFECTIVE_DPI, MONITOR_DPI_TYPE, PROCESS_DPI_AWARENESS, PROCESS_PER_MONITOR_DPI_AWARE,
    },
    winuser::{MonitorFromWindow, MONITOR_DEFAULTTONEAREST},
  },
};

use crate::{awareness_util::AwarenessOutcome, error::DetectionError, Hwnd};

const SHCORE: &str = "shcore.dll";

type GetDpiForMonitorFn =
  unsafe extern "system" fn(HMONITOR, MONITOR_DPI_TYPE, *mut UINT, *mut UINT) -> HRESULT;
type SetProcessDpiAwarenessFn = unsafe extern "system" fn(PROCESS_DPI_AWARENESS) -> HRESULT;

/// Runtime binding to shcore.dll, which only exists on Windows 8.1 and later.
pub struct Shcore {
  module: HMODULE,
}

impl Drop for Shcore {
  fn drop(&mut self) {
    unsafe { FreeLibrary(self.module) };
  }
}

impl Shcore {
  pub fn load() -> Result<Self, DetectionError> {
    let module = unsafe { LoadLibraryA(b"shcore.dll\0".as_ptr() as *const _) };
    if module.is_null() {
      return Err(DetectionError::LibraryUnavailable(SHCORE));
    }
    Ok(Self { module })
  }

  fn symbol(&self, name: &'static str, c_name: &[u8]) -> Result<usize, DetectionError> {
    let address = unsafe { GetProcAddress(self.module, c_name.as_ptr() as *const _) };
    if address.is_null() {
      return Err(DetectionError::MissingSymbol(name, SHCORE));
    }
    Ok(address as usize)
  }

  /// Requests per-monitor awareness for the whole process.
  pub fn set_process_dpi_awareness(&self) -> AwarenessOutcome {
    let address = match self.symbol("SetProcessDpiAwareness", b"SetProcessDpiAwareness\0") {
      Ok(address) => address,
      Err(err) => {
        tracing::debug!("{}", err);
        return AwarenessOutcome::Unsupported;
      }
    };
    let set_awareness: SetProcessDpiAwarenessFn = unsafe { std::mem::transmute(address) };

    match unsafe { set_awareness(PROCESS_PER_MONITOR_DPI_AWARE) } {
      S_OK => AwarenessOutcome::Set,
      E_ACCESSDENIED => AwarenessOutcome::AlreadySet,
      result => {
        tracing::debug!("SetProcessDpiAwareness returned error code: {:#010x}", result);
        AwarenessOutcome::Unsupported
      }
    }
  }

  fn get_screen_dpi_for_monitor(&self, target_monitor: HMONITOR) -> Result<(u32, u32), DetectionError> {
    if target_monitor.is_null() {
      return Err(DetectionError::NoMonitor);
    }

    let address = self.symbol("GetDpiForMonitor", b"GetDpiForMonitor\0")?;
    let get_dpi: GetDpiForMonitorFn = unsafe { std::mem::transmute(address) };

    let mut dpi_x: UINT = 0;
    let mut dpi_y: UINT = 0;
    let result = unsafe { get_dpi(target_monitor, MDT_EFFECTIVE_DPI, &mut dpi_x, &mut dpi_y) };

    if result != S_OK {
      return Err(DetectionError::QueryFailed(result));
    }
    if dpi_x == 0 || dpi_y == 0 {
      return Err(DetectionError::ZeroDpi);
    }
    Ok((dpi_x, dpi_y))
  }

  /// Effective DPI of the monitor nearest to `hwnd`.
  pub fn get_screen_dpi_for_window(&self, hwnd: &Hwnd) -> Result<(u32, u32), DetectionError> {
    let target_monitor = unsafe { MonitorFromWindow(hwnd.0 as HWND, MONITOR_DEFAULTTONEAREST) };
    self.get_screen_dpi_for_monitor(target_monitor)
  }
}
