use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Deterministic per-label trace colors
// ---------------------------------------------------------------------------

// FNV-1a 64-bit. Stable across runs and platforms, which is the whole point:
// the same column name must plot in the same color in every dump.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Deterministic color for a trace label.
///
/// The top 24 bits of the label's digest (the first six hex characters of
/// its zero-padded hex form) become the RGB code. Lightness is then clamped
/// into a readable band so hash-dark labels stay visible against the plot
/// background; the clamp is a pure function of the hash, so determinism is
/// preserved. Distinct labels may still land on similar colors.
pub fn trace_color(label: &str) -> Color32 {
    let digest = fnv1a_64(label.as_bytes());
    let r = (digest >> 56) as u8;
    let g = (digest >> 48) as u8;
    let b = (digest >> 40) as u8;

    let hsl: Hsl = Srgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    )
    .into_color();
    let clamped = Hsl::new(hsl.hue, hsl.saturation, hsl.lightness.clamp(0.35, 0.75));
    let rgb: Srgb = clamped.into_color();

    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
