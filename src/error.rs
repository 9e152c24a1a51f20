use thiserror::Error;

/// Why a DPI lookup for a window did not produce a value.
///
/// Only ever logged; `query_dpi` turns every one of these into the neutral
/// fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetectionError {
  #[error("failed to load {0}")]
  LibraryUnavailable(&'static str),
  #[error("{1} does not export {0}")]
  MissingSymbol(&'static str, &'static str),
  #[error("failed to get monitor handle for window")]
  NoMonitor,
  #[error("GetDpiForMonitor returned error code: {0:#010x}")]
  QueryFailed(i32),
  #[error("monitor reported zero DPI")]
  ZeroDpi,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnblurError {
  #[error("invalid geometry string format: {0:?}")]
  InvalidGeometry(String),
  #[error("not a decimal number: {0:?}")]
  InvalidNumber(String),
  #[error("scaled value out of range: {0:?}")]
  OutOfRange(String),
  #[error("DPI detection failed: {0}")]
  DpiDetection(#[from] DetectionError),
}

pub type UnblurResult<T> = Result<T, UnblurError>;
