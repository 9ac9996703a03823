//! Build a small scene and export it as a PNG.
//!
//! Run with `cargo run --example export_demo`; writes `calligram.png` in
//! the current directory.

use calligram_core::{Editor, Effect, ShapeKind, TextStyle, CANVAS_HEIGHT, CANVAS_WIDTH};
use calligram_render::export_png;
use kurbo::{Point, Vec2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut editor = Editor::new();
    editor.set_shape(ShapeKind::Lotus);
    editor.set_shape_color("#d4a017");

    editor.add_text_item(TextStyle {
        text: "Congratulations".to_string(),
        bold: true,
        effect: Effect::Curve,
        strength: 160.0,
        ..TextStyle::default()
    });
    editor.add_text_item(TextStyle {
        text: "Leila & Sami".to_string(),
        size: 36.0,
        color: "#5b3a1a".to_string(),
        effect: Effect::Wave,
        ..TextStyle::default()
    });

    // Drag the second line below the first.
    let center = Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    editor.pointer_down(center);
    editor.pointer_move(center + Vec2::new(0.0, 90.0));
    editor.pointer_up();

    export_png(editor.scene(), editor.background(), "calligram.png")?;
    println!("wrote calligram.png");
    Ok(())
}
