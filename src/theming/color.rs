//! RGBA color values.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An RGBA color, with components in the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    #[serde(default = "opaque")]
    pub alpha: f32,
}

fn opaque() -> f32 {
    1.0
}

/// The 240 non-system xterm palette entries: a 6x6x6 color cube followed by
/// a 24-step grayscale ramp. Entry `i` maps to xterm color `i + 16`.
static XTERM_COLORS: Lazy<Vec<(f32, f32, f32)>> = Lazy::new(|| {
    const STEPS: [i32; 6] = [0, 95, 135, 175, 215, 255];

    (0..240)
        .map(|index: i32| {
            if index < 216 {
                (
                    STEPS[(index / 36) as usize] as f32,
                    STEPS[((index % 36) / 6) as usize] as f32,
                    STEPS[(index % 6) as usize] as f32,
                )
            } else {
                let gray = (index * 10 - 2152) as f32;
                (gray, gray, gray)
            }
        })
        .collect()
});

impl Color {
    /// Create a fully opaque color from RGB components.
    pub const fn new(red: f32, green: f32, blue: f32) -> Color {
        Color {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Create an opaque grayscale color.
    pub const fn white(level: f32) -> Color {
        Color::new(level, level, level)
    }

    /// The closest 256-color xterm index for this color.
    ///
    /// Finds the palette entry with the smallest Manhattan distance in RGB
    /// space; ties resolve to the highest index, which favors the grayscale
    /// ramp over the color cube for near-gray colors.
    pub fn xterm_index(&self) -> usize {
        let mut best_index = 0;
        let mut best_distance = f32::INFINITY;

        for (index, (red, green, blue)) in XTERM_COLORS.iter().enumerate() {
            let distance = (self.red * 255.0 - red).abs()
                + (self.green * 255.0 - green).abs()
                + (self.blue * 255.0 - blue).abs();

            if distance <= best_distance {
                best_distance = distance;
                best_index = index;
            }
        }

        best_index + 16
    }
}
