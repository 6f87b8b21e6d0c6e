use console::Style;
use lupe_core::geometry::{Rect, Size, Transform};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    css: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            css: Style::new().green(),
        }
    }
}

pub fn print_scale_summary(
    full: Size,
    thumb: Rect,
    viewport: Size,
    offset: f64,
    transform: &Transform,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Lupe Zoom"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<16}{}",
        s.label.apply_to("Full image"),
        s.value.apply_to(format!("{}x{}", full.width, full.height))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Thumbnail"),
        s.value.apply_to(format!(
            "{}x{} at ({}, {})",
            thumb.width, thumb.height, thumb.left, thumb.top
        ))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!(
            "{}x{} (effective {}x{})",
            viewport.width,
            viewport.height,
            viewport.width - offset,
            viewport.height - offset
        ))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Max scale"),
        s.value.apply_to(format!("{:.4}", full.width / thumb.width))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.4}", transform.scale))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Translation"),
        s.value
            .apply_to(format!("({}, {})", transform.dx, transform.dy))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("CSS"),
        s.css.apply_to(transform.to_css())
    );
    println!();
}
