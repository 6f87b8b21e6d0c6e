use crate::error::{LupeError, Result};
use crate::geometry::Size;

/// Opaque handle to a registered zoomable container. The host maps it onto
/// whatever its rendering surface uses (a DOM node, a widget id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Raw attribute values read off a zoomable container, before validation.
#[derive(Clone, Debug, Default)]
pub struct ZoomableAttrs {
    /// `data-width`: full-resolution width in pixels.
    pub data_width: Option<String>,
    /// `data-height`: full-resolution height in pixels.
    pub data_height: Option<String>,
    /// Link target holding the high-resolution image URL.
    pub href: Option<String>,
}

/// A validated zoomable container: the full-resolution dimensions plus the
/// high-resolution URL substituted once zoom-in settles.
#[derive(Clone, Debug)]
pub struct Zoomable {
    pub id: ElementId,
    pub full_size: Size,
    pub hires_url: String,
}

impl Zoomable {
    pub fn new(id: ElementId, full_size: Size, hires_url: impl Into<String>) -> Result<Self> {
        if !full_size.is_valid() {
            return Err(LupeError::InvalidDimensions {
                width: full_size.width,
                height: full_size.height,
            });
        }
        Ok(Self {
            id,
            full_size,
            hires_url: hires_url.into(),
        })
    }

    /// Parse and validate a container's attributes. Missing or malformed
    /// values are reported as typed errors rather than flowing into the
    /// scale math as NaN.
    pub fn from_attrs(id: ElementId, attrs: &ZoomableAttrs) -> Result<Self> {
        let width = parse_dimension("data-width", attrs.data_width.as_deref())?;
        let height = parse_dimension("data-height", attrs.data_height.as_deref())?;
        let href = attrs
            .href
            .as_deref()
            .ok_or(LupeError::MissingAttribute { name: "href" })?;
        Self::new(id, Size::new(f64::from(width), f64::from(height)), href)
    }
}

fn parse_dimension(name: &'static str, value: Option<&str>) -> Result<u32> {
    let raw = value.ok_or(LupeError::MissingAttribute { name })?;
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| LupeError::InvalidDimension {
            name,
            value: raw.to_string(),
        })?;
    if parsed == 0 {
        return Err(LupeError::InvalidDimension {
            name,
            value: raw.to_string(),
        });
    }
    Ok(parsed)
}
