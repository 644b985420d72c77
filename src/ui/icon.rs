// Window icon, drawn procedurally
//
// A neon ring with a center dot on black, masked to a rounded square
// (22.37% corner radius, macOS style).

use eframe::egui;

const SIZE: u32 = 128;
const NEON: [u8; 3] = [56, 255, 20];

pub fn create_window_icon() -> egui::IconData {
    let mut rgba = vec![0u8; (SIZE * SIZE * 4) as usize];
    let center = (SIZE as f32 - 1.0) / 2.0;

    for y in 0..SIZE {
        for x in 0..SIZE {
            let idx = ((y * SIZE + x) * 4) as usize;
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let distance = (dx * dx + dy * dy).sqrt();

            // Ring between radius 34 and 42, dot inside 12
            let lit = (34.0..=42.0).contains(&distance) || distance <= 12.0;
            let [r, g, b] = if lit { NEON } else { [0, 0, 0] };

            rgba[idx] = r;
            rgba[idx + 1] = g;
            rgba[idx + 2] = b;
            rgba[idx + 3] = 255;
        }
    }

    round_corners(&mut rgba, SIZE, SIZE);

    egui::IconData {
        rgba,
        width: SIZE,
        height: SIZE,
    }
}

fn round_corners(rgba: &mut [u8], width: u32, height: u32) {
    let corner_radius = (width as f32 * 0.2237) as u32;

    for y in 0..height {
        for x in 0..width {
            let idx = ((y * width + x) * 4) as usize;

            let dx = if x < corner_radius {
                corner_radius - x
            } else if x >= width - corner_radius {
                x - (width - corner_radius - 1)
            } else {
                0
            };

            let dy = if y < corner_radius {
                corner_radius - y
            } else if y >= height - corner_radius {
                y - (height - corner_radius - 1)
            } else {
                0
            };

            if dx > 0 && dy > 0 {
                let distance = ((dx * dx + dy * dy) as f32).sqrt();
                if distance > corner_radius as f32 {
                    rgba[idx + 3] = 0;
                } else if distance > (corner_radius as f32 - 1.5) {
                    // Anti-aliasing at edge
                    let alpha = 1.0 - (distance - (corner_radius as f32 - 1.5)) / 1.5;
                    rgba[idx + 3] = ((rgba[idx + 3] as f32) * alpha) as u8;
                }
            }
        }
    }
}
