//! Parsing and rescaling of `"<W>x<H>+<X>+<Y>"` window geometry strings.
//!
//! Grammar of a match:
//!
//! ```text
//! geometry := digits "x" digits "+" signed "+" signed
//! signed   := ["-"] digits
//! digits   := ASCII digit, one or more
//! ```
//!
//! The parser searches for the leftmost match anywhere in the input, so
//! leading or trailing characters around a valid geometry are ignored:
//! `"=800x600+10+20 "` scales the same as `"800x600+10+20"`.
//!
//! Only ASCII digits count. Other Unicode decimal digits (`"８００x600+0+0"`)
//! are not accepted as geometry, which is narrower than a Unicode-aware `\d`.

use std::ops::Range;

use crate::error::{UnblurError, UnblurResult};

/// The four numeric tokens of a geometry match, borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry<'a> {
  pub width: &'a str,
  pub height: &'a str,
  pub x: &'a str,
  pub y: &'a str,
  /// Byte range of the match within the searched string.
  pub span: Range<usize>,
}

impl<'a> Geometry<'a> {
  /// Finds the leftmost geometry in `input`.
  pub fn find(input: &'a str) -> Option<Self> {
    (0..input.len()).find_map(|start| Self::match_at(input, start))
  }

  pub fn parse(input: &'a str) -> UnblurResult<Self> {
    Self::find(input).ok_or_else(|| UnblurError::InvalidGeometry(input.to_string()))
  }

  fn match_at(input: &'a str, start: usize) -> Option<Self> {
    let bytes = input.as_bytes();
    let mut pos = start;

    let width = take_digits(bytes, &mut pos, false)?;
    take_byte(bytes, &mut pos, b'x')?;
    let height = take_digits(bytes, &mut pos, false)?;
    take_byte(bytes, &mut pos, b'+')?;
    let x = take_digits(bytes, &mut pos, true)?;
    take_byte(bytes, &mut pos, b'+')?;
    let y = take_digits(bytes, &mut pos, true)?;

    // Every token boundary sits on an ASCII byte, so these slices are valid.
    Some(Self {
      width: &input[width],
      height: &input[height],
      x: &input[x],
      y: &input[y],
      span: start..pos,
    })
  }
}

fn take_byte(bytes: &[u8], pos: &mut usize, expected: u8) -> Option<()> {
  if bytes.get(*pos) == Some(&expected) {
    *pos += 1;
    Some(())
  } else {
    None
  }
}

fn take_digits(bytes: &[u8], pos: &mut usize, signed: bool) -> Option<Range<usize>> {
  let start = *pos;
  let mut end = start;
  if signed && bytes.get(end) == Some(&b'-') {
    end += 1;
  }
  let digits_start = end;
  while bytes.get(end).is_some_and(u8::is_ascii_digit) {
    end += 1;
  }
  if end == digits_start {
    return None;
  }
  *pos = end;
  Some(start..end)
}

/// Rewrites `geometry` by running `scale` over each of its four tokens.
///
/// Each token is passed as written, sign included. The result always has the
/// `"<W>x<H>+<X>+<Y>"` shape; text around the match is dropped. Rounding and
/// clamping are left to `scale`.
pub fn scale_geometry<F>(geometry: &str, mut scale: F) -> UnblurResult<String>
where
  F: FnMut(&str) -> i32,
{
  try_scale_geometry(geometry, |token| Ok(scale(token)))
}

/// Like [`scale_geometry`], for scaling functions that can fail.
pub fn try_scale_geometry<F>(geometry: &str, mut scale: F) -> UnblurResult<String>
where
  F: FnMut(&str) -> UnblurResult<i32>,
{
  let parsed = Geometry::parse(geometry)?;

  let width = scale(parsed.width)?;
  let height = scale(parsed.height)?;
  let x = scale(parsed.x)?;
  let y = scale(parsed.y)?;

  Ok(format!("{}x{}+{}+{}", width, height, x, y))
}
