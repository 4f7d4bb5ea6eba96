use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colors
// ---------------------------------------------------------------------------

/// One visually distinct color per overlaid series, from evenly spaced hues.
/// Series are colored by plot order, so the same file keeps the same color
/// across all three charts as long as every chart draws the same samples.
pub fn series_colors(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
