use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use clap::Args;
use console::Style;
use lupe_core::controller::{ZoomController, ZoomOptions};
use lupe_core::element::{ElementId, Zoomable};
use lupe_core::events::ZoomEventKind;
use lupe_core::geometry::{Rect, Size, Transform};
use lupe_core::surface::{CssClass, RenderSurface, PAGE_OVERLAY_CLASS};
use lupe_core::viewport::ViewportCache;
use tracing::debug;

#[derive(Args)]
pub struct SimulateArgs {
    /// Full-resolution image dimensions
    #[arg(long, value_name = "WxH", default_value = "2000x1500")]
    pub full: String,

    /// On-screen thumbnail dimensions
    #[arg(long, value_name = "WxH", default_value = "200x150")]
    pub thumb: String,

    /// Thumbnail top-left position on screen
    #[arg(long, value_name = "X,Y", default_value = "100,100")]
    pub at: String,

    /// Viewport dimensions
    #[arg(long, value_name = "WxH", default_value = "1200x800")]
    pub viewport: String,

    /// Margin reserved on each viewport axis, in pixels
    #[arg(long, default_value = "60")]
    pub offset: f64,

    /// High-resolution image URL substituted once zoom-in settles
    #[arg(long, default_value = "image-full.jpg")]
    pub url: String,

    /// Exit via the Escape key instead of a second click
    #[arg(long)]
    pub escape: bool,
}

type Log = Rc<RefCell<Vec<String>>>;

/// Surface that renders nothing and records every operation as a log line.
struct RecordingSurface {
    rect: Rect,
    log: Log,
}

impl RecordingSurface {
    fn record(&self, line: String) {
        self.log.borrow_mut().push(format!("surface  {line}"));
    }
}

impl RenderSurface for RecordingSurface {
    fn thumbnail_rect(&self, _id: ElementId) -> Rect {
        self.rect
    }

    fn add_class(&mut self, _id: ElementId, class: CssClass) {
        self.record(format!("add class \"{}\"", class.as_str()));
    }

    fn remove_class(&mut self, _id: ElementId, class: CssClass) {
        self.record(format!("remove class \"{}\"", class.as_str()));
    }

    fn set_page_overlay(&mut self, active: bool) {
        if active {
            self.record(format!("add page class \"{PAGE_OVERLAY_CLASS}\""));
        } else {
            self.record(format!("remove page class \"{PAGE_OVERLAY_CLASS}\""));
        }
    }

    fn force_layout(&mut self, _id: ElementId) {
        self.record("force layout read".to_string());
    }

    fn set_explicit_size(&mut self, _id: ElementId, size: Size) {
        self.record(format!("set explicit size {}x{}", size.width, size.height));
    }

    fn apply_transform(&mut self, _id: ElementId, transform: &Transform) {
        self.record(format!("apply transform {}", transform.to_css()));
    }

    fn clear_transform(&mut self, _id: ElementId) {
        self.record("clear transform".to_string());
    }

    fn strip_responsive_hints(&mut self, _id: ElementId) {
        self.record("strip srcset/sizes".to_string());
    }

    fn set_image_source(&mut self, _id: ElementId, url: &str) {
        self.record(format!("set image source {url:?}"));
    }

    fn request_frame(&mut self) {
        self.record("request animation frame".to_string());
    }

    fn watch_transition_end(&mut self, _id: ElementId) {
        self.record("watch transition-end".to_string());
    }

    fn watch_escape(&mut self, armed: bool) {
        if armed {
            self.record("arm escape watch".to_string());
        } else {
            self.record("release escape watch".to_string());
        }
    }
}

pub fn run(args: &SimulateArgs) -> Result<()> {
    let full = super::parse_size(&args.full)?;
    let thumb_size = super::parse_size(&args.thumb)?;
    let (left, top) = super::parse_point(&args.at)?;
    let viewport_size = super::parse_size(&args.viewport)?;

    let options = ZoomOptions {
        offset: args.offset,
        ..Default::default()
    };
    debug!(?options, "simulation options");

    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let surface = RecordingSurface {
        rect: Rect::new(left, top, thumb_size.width, thumb_size.height),
        log: Rc::clone(&log),
    };

    let id = ElementId(0);
    let element = Zoomable::new(id, full, args.url.clone())?;
    let viewport = ViewportCache::new(viewport_size, 0.0);
    let mut controller = ZoomController::new(surface, viewport, vec![element], options);

    for kind in ZoomEventKind::ALL {
        let log = Rc::clone(&log);
        controller.on(kind, move |event| {
            log.borrow_mut().push(format!("event    {}", event.kind()));
        });
    }

    // Scripted session: zoom in, settle, zoom back out.
    controller.handle_click(id, 0)?;
    controller.handle_frame(16)?;
    controller.handle_transition_end(id, 316)?;
    if args.escape {
        controller.handle_escape(1000)?;
    } else {
        controller.handle_click(id, 1000)?;
    }
    controller.handle_frame(1016)?;
    controller.handle_transition_end(id, 1316)?;

    let header = Style::new().cyan().bold();
    println!();
    println!("  {}", header.apply_to("Zoom session"));
    println!();
    for (index, line) in log.borrow().iter().enumerate() {
        println!("  {index:>3}  {line}");
    }
    println!();
    println!("  final phase: {:?}", controller.phase(id)?);
    println!();

    Ok(())
}
