use eframe::egui::IconData;
use image::{ImageBuffer, Rgba};

const ICON_SIZE: u32 = 64;

// Builds the window icon: a rounded blue tile with a white check mark.
pub fn create_app_icon() -> IconData {
    let size = ICON_SIZE;
    let mut img = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(size, size);
    let s = size as f32;
    let radius = s * 0.2;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);

        if !inside_rounded_square(fx, fy, s, radius) {
            *pixel = Rgba([0, 0, 0, 0]);
            continue;
        }

        // Vertical gradient from #2196F3 at the top to #0D47A1 at the bottom.
        let t = fy / s;
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        let mut color = Rgba([lerp(0x21, 0x0D), lerp(0x96, 0x47), lerp(0xF3, 0xA1), 255]);

        if on_check_mark(fx / s, fy / s) {
            color = Rgba([255, 255, 255, 255]);
        }

        *pixel = color;
    }

    IconData {
        rgba: img.into_raw(),
        width: size,
        height: size,
    }
}

fn inside_rounded_square(x: f32, y: f32, size: f32, radius: f32) -> bool {
    let cx = x.clamp(radius, size - radius);
    let cy = y.clamp(radius, size - radius);
    let (dx, dy) = (x - cx, y - cy);
    dx * dx + dy * dy <= radius * radius
}

// Two strokes in unit coordinates: (0.25,0.52)->(0.43,0.70)->(0.76,0.34).
fn on_check_mark(u: f32, v: f32) -> bool {
    const WIDTH: f32 = 0.055;
    distance_to_segment(u, v, (0.25, 0.52), (0.43, 0.70)) < WIDTH
        || distance_to_segment(u, v, (0.43, 0.70), (0.76, 0.34)) < WIDTH
}

fn distance_to_segment(px: f32, py: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let len_sq = abx * abx + aby * aby;
    let t = (((px - a.0) * abx + (py - a.1) * aby) / len_sq).clamp(0.0, 1.0);
    let (qx, qy) = (a.0 + t * abx, a.1 + t * aby);
    ((px - qx).powi(2) + (py - qy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_has_expected_shape() {
        let icon = create_app_icon();
        assert_eq!(icon.width, ICON_SIZE);
        assert_eq!(icon.height, ICON_SIZE);
        assert_eq!(icon.rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);

        // Corner is transparent, centre of the tile is opaque.
        assert_eq!(icon.rgba[3], 0);
        let centre = ((ICON_SIZE / 2) * ICON_SIZE + ICON_SIZE / 2) as usize * 4;
        assert_eq!(icon.rgba[centre + 3], 255);
    }
}
