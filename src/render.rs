use rayon::prelude::*;

use crate::grid::Grid;
use crate::noise::Scale;

/// Grayscale RGBA: the scale's nominal range maps linearly onto 0..=255.
pub fn render_field(values: &Grid<f32>, scale: Scale) -> Vec<u8> {
    let (lo, hi) = scale.bounds();
    let range = hi - lo;
    let w = values.w;
    let h = values.h;
    let mut rgba = vec![0u8; w * h * 4];

    rgba.par_chunks_mut(w * 4).enumerate().for_each(|(y, row)| {
        for x in 0..w {
            let t = (values.get(x, y) - lo) / range;
            let v = (t * 255.0).round().clamp(0.0, 255.0) as u8;
            row[x * 4..x * 4 + 4].copy_from_slice(&[v, v, v, 255]);
        }
    });
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_map_to_black_and_white() {
        let mut g: Grid<f32> = Grid::new(3, 1);
        g.set(0, 0, -1.0);
        g.set(1, 0, 0.0);
        g.set(2, 0, 1.0);
        let rgba = render_field(&g, Scale::NegOneToOne);
        assert_eq!(rgba.len(), 12);
        assert_eq!(&rgba[0..4], &[0, 0, 0, 255]);
        assert_eq!(rgba[4], 128);
        assert_eq!(&rgba[8..12], &[255, 255, 255, 255]);
    }
}
