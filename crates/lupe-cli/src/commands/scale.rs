use anyhow::Result;
use clap::Args;
use lupe_core::geometry::{compute_transform, Rect};

use crate::summary::print_scale_summary;

#[derive(Args)]
pub struct ScaleArgs {
    /// Full-resolution image dimensions
    #[arg(long, value_name = "WxH")]
    pub full: String,

    /// On-screen thumbnail dimensions
    #[arg(long, value_name = "WxH")]
    pub thumb: String,

    /// Thumbnail top-left position on screen
    #[arg(long, value_name = "X,Y", default_value = "0,0")]
    pub at: String,

    /// Viewport dimensions
    #[arg(long, value_name = "WxH", default_value = "1200x800")]
    pub viewport: String,

    /// Margin reserved on each viewport axis, in pixels
    #[arg(long, default_value = "60")]
    pub offset: f64,
}

pub fn run(args: &ScaleArgs) -> Result<()> {
    let full = super::parse_size(&args.full)?;
    let thumb_size = super::parse_size(&args.thumb)?;
    let (left, top) = super::parse_point(&args.at)?;
    let viewport = super::parse_size(&args.viewport)?;

    let thumb = Rect::new(left, top, thumb_size.width, thumb_size.height);
    let transform = compute_transform(full, thumb, viewport, args.offset);

    print_scale_summary(full, thumb, viewport, args.offset, &transform);
    Ok(())
}
