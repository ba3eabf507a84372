//! Writes a handful of placeholder images: a solid color with a vertical
//! brightness falloff and a little positional variation, so the fill
//! doesn't read as flat. Handy as stand-in artwork while the real assets
//! aren't done.

use placard::{png_encode, Raster, RGBA8};

fn main() {
  let images: &[(&str, [u8; 3])] = &[
    ("olive.png", [106, 142, 35]),
    ("slate.png", [105, 105, 105]),
    ("sienna.png", [160, 82, 45]),
    ("forest.png", [34, 139, 34]),
  ];
  for (filename, [r, g, b]) in images.iter().copied() {
    let raster = placeholder_raster(400, 300, r, g, b);
    let bytes = png_encode(&raster).unwrap();
    std::fs::write(filename, &bytes).unwrap();
    println!("wrote {filename}: {} bytes", bytes.len());
  }
}

fn placeholder_raster(width: u32, height: u32, r: u8, g: u8, b: u8) -> Raster {
  let mut raster = Raster::new(width, height).unwrap();
  for y in 0..height {
    // darken towards the bottom of the image
    let brightness = 1.0 - (y as f32 / height as f32) * 0.3;
    for x in 0..width {
      let variation = 0.9 + (x % 10) as f32 * 0.02 + (y % 10) as f32 * 0.02;
      let scale = |c: u8| ((c as f32 * brightness * variation) as u32).min(255) as u8;
      *raster.get_mut(x, y).unwrap() = RGBA8 { r: scale(r), g: scale(g), b: scale(b), a: 255 };
    }
  }
  raster
}
