//! Raster export: serialize the scene to SVG, rasterize it with resvg
//! and encode the result as PNG.

use calligram_core::{Background, Scene, CANVAS_HEIGHT, CANVAS_WIDTH};
use resvg::tiny_skia;
use std::path::Path;

use crate::svg::render_svg;

/// Errors from the PNG export pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to parse generated svg: {0}")]
    Svg(#[from] usvg::Error),
    #[error("failed to allocate {0}x{1} pixmap")]
    PixmapAlloc(u32, u32),
    #[error("png encoding failed: {0}")]
    Png(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the scene to an in-memory PNG at full canvas resolution.
pub fn render_png(scene: &Scene, background: &Background) -> Result<Vec<u8>, ExportError> {
    let pixmap = render_pixmap(scene, background)?;
    pixmap
        .encode_png()
        .map_err(|e| ExportError::Png(e.to_string()))
}

/// Render the scene and write the PNG to `path`.
///
/// The image is encoded fully in memory first, so a failing encode never
/// leaves a truncated file behind.
pub fn export_png(
    scene: &Scene,
    background: &Background,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let png = render_png(scene, background)?;
    std::fs::write(path.as_ref(), &png)?;
    log::info!(
        "exported {} items to {} ({} bytes)",
        scene.len(),
        path.as_ref().display(),
        png.len()
    );
    Ok(())
}

fn render_pixmap(
    scene: &Scene,
    background: &Background,
) -> Result<tiny_skia::Pixmap, ExportError> {
    let svg = render_svg(scene, background);

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &options)?;

    let width = CANVAS_WIDTH as u32;
    let height = CANVAS_HEIGHT as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(ExportError::PixmapAlloc(width, height))?;

    // Flatten onto white so transparent regions export as paper, not
    // alpha holes.
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calligram_core::{Effect, TextStyle};

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn test_empty_scene_exports_paper_pixels() {
        let pixmap = render_pixmap(&Scene::new(), &Background::default()).unwrap();
        assert_eq!(pixmap.width(), 1200);
        assert_eq!(pixmap.height(), 800);

        // The corner is outside the base shape, so it shows the paper.
        let corner = pixmap.pixel(0, 0).unwrap();
        assert_eq!(
            (corner.red(), corner.green(), corner.blue(), corner.alpha()),
            (255, 250, 248, 255)
        );
    }

    #[test]
    fn test_shape_fill_reaches_pixels() {
        let pixmap = render_pixmap(&Scene::new(), &Background::default()).unwrap();
        // Canvas center sits inside every catalog shape.
        let center = pixmap.pixel(600, 400).unwrap();
        assert_eq!(
            (center.red(), center.green(), center.blue()),
            (0x8b, 0x45, 0x13)
        );
    }

    #[test]
    fn test_render_png_is_valid_png() {
        let mut scene = Scene::new();
        scene.add_item(TextStyle {
            text: "Joy".to_string(),
            effect: Effect::Wave,
            ..TextStyle::default()
        });
        let png = render_png(&scene, &Background::default()).unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        export_png(&Scene::new(), &Background::default(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }
}
