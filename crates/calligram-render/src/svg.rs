//! Scene to SVG serialization.
//!
//! Produces a standalone SVG document of the whole canvas: paper
//! background, the chosen base shape, then every text item in scene
//! order. Items with a path effect render as `<textPath>` along the
//! effect's baseline; plain items render as a centered `<text>`.

use calligram_core::{
    baseline_path, Background, Effect, Scene, TextItem, CANVAS_HEIGHT, CANVAS_WIDTH, PATH_WIDTH,
};
use std::fmt::Write;

use crate::shapes::shape_path;

/// Paper color behind everything.
const PAPER_COLOR: &str = "#fffaf8";

/// Outline of the base shape, a faint black.
const SHAPE_STROKE: &str = "#00000010";
const SHAPE_STROKE_WIDTH: f64 = 2.0;

/// Serialize the full canvas as an SVG document.
pub fn render_svg(scene: &Scene, background: &Background) -> String {
    let mut svg = String::with_capacity(1024 + scene.len() * 512);

    // Writing into a String cannot fail, so the fmt errors are ignored.
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\">",
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
    );
    let _ = write!(
        svg,
        "<rect width=\"{CANVAS_WIDTH}\" height=\"{CANVAS_HEIGHT}\" fill=\"{PAPER_COLOR}\"/>"
    );
    let _ = write!(
        svg,
        "<path d=\"{}\" fill=\"{}\" stroke=\"{SHAPE_STROKE}\" stroke-width=\"{SHAPE_STROKE_WIDTH}\"/>",
        shape_path(background.shape),
        escape_attr(&background.color),
    );

    for item in scene.items() {
        write_item(&mut svg, item);
    }

    svg.push_str("</svg>");
    log::debug!(
        "rendered svg: {} items, {} bytes",
        scene.len(),
        svg.len()
    );
    svg
}

fn write_item(svg: &mut String, item: &TextItem) {
    let weight = if item.bold { 700 } else { 400 };
    let _ = write!(
        svg,
        "<g transform=\"translate({}, {}) rotate({}) scale({})\">",
        item.x, item.y, item.rotate, item.scale
    );

    match item.effect {
        Effect::None => {
            let _ = write!(
                svg,
                "<text x=\"0\" y=\"0\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
                 font-size=\"{}\" font-family=\"{}\" fill=\"{}\" font-weight=\"{weight}\">{}</text>",
                item.size,
                escape_attr(&item.family),
                escape_attr(&item.color),
                escape_text(&item.text),
            );
        }
        effect => {
            let path = baseline_path(effect, item.strength, PATH_WIDTH);
            let path_id = format!("{}-path", item.id);
            let _ = write!(
                svg,
                "<defs><path id=\"{path_id}\" d=\"{}\" fill=\"none\"/></defs>",
                path.to_svg()
            );
            let _ = write!(
                svg,
                "<text text-anchor=\"middle\" dominant-baseline=\"middle\" \
                 font-size=\"{}\" font-family=\"{}\" fill=\"{}\" font-weight=\"{weight}\">\
                 <textPath href=\"#{path_id}\" startOffset=\"50%\">{}</textPath></text>",
                item.size,
                escape_attr(&item.family),
                escape_attr(&item.color),
                escape_text(&item.text),
            );
        }
    }

    svg.push_str("</g>");
}

/// Escape character data for an XML text node.
fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a string for use inside a double-quoted XML attribute.
fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
