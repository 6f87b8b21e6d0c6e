pub mod config;
pub mod scale;
pub mod simulate;

use anyhow::{bail, Context, Result};
use lupe_core::geometry::Size;

/// Parse a `WxH` dimension argument (e.g. `2000x1500`).
pub(crate) fn parse_size(raw: &str) -> Result<Size> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .with_context(|| format!("expected WxH, got {raw:?}"))?;
    let width = width
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid width in {raw:?}"))?;
    let height = height
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid height in {raw:?}"))?;
    if width <= 0.0 || height <= 0.0 {
        bail!("dimensions must be positive: {raw:?}");
    }
    Ok(Size::new(width, height))
}

/// Parse an `X,Y` position argument (e.g. `100,100`).
pub(crate) fn parse_point(raw: &str) -> Result<(f64, f64)> {
    let (x, y) = raw
        .split_once(',')
        .with_context(|| format!("expected X,Y, got {raw:?}"))?;
    let x = x
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid x in {raw:?}"))?;
    let y = y
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid y in {raw:?}"))?;
    Ok((x, y))
}
