//! Start and end cell resolution.

use crate::types::Pos;

use super::params::GenerationParams;
use super::rng::RandomSource;

/// The start is always bottom-center; a pure function of the dimensions.
pub(super) fn start_pos(width: u32, height: u32) -> Pos {
    Pos { y: height as i32 - 1, x: (width / 2) as i32 }
}

/// Highest row index the end cell may occupy. The end must live within the
/// top `percent` of rows; a band that collapses to nothing forces the top
/// row. The `- 1` is a documented contract: `percent=10` on height 20
/// allows `y <= 1`, not `y <= 2`.
pub(super) fn max_allowed_end_y(height: u32, percent: u8) -> i32 {
    let band = i64::from(height) * i64::from(percent.min(100)) / 100 - 1;
    band.clamp(0, i64::from(height) - 1) as i32
}

pub(super) fn resolve_end(params: &GenerationParams, rng: &mut RandomSource) -> Pos {
    let max_y = max_allowed_end_y(params.grid_height, params.end_max_height_percent);
    if params.random_end {
        let x = rng.next_int(0, params.grid_width as i32);
        let y = rng.next_int(0, max_y + 1);
        Pos { y, x }
    } else {
        Pos {
            y: params.fixed_end.y.clamp(0, max_y),
            x: params.fixed_end.x.clamp(0, params.grid_width as i32 - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levelgen::seed::SeedChoice;

    #[test]
    fn start_is_bottom_center() {
        assert_eq!(start_pos(10, 10), Pos { y: 9, x: 5 });
        assert_eq!(start_pos(5, 8), Pos { y: 7, x: 2 });
        assert_eq!(start_pos(1, 1), Pos { y: 0, x: 0 });
    }

    #[test]
    fn max_allowed_end_y_honors_the_off_by_one_contract() {
        // height=20, percent=10: floor(20*0.10)-1 = 1.
        assert_eq!(max_allowed_end_y(20, 10), 1);
        assert_eq!(max_allowed_end_y(10, 100), 9);
        assert_eq!(max_allowed_end_y(10, 0), 0);
        // Band collapse pins the end to the top row.
        assert_eq!(max_allowed_end_y(10, 5), 0);
    }

    #[test]
    fn fixed_end_is_clamped_into_the_height_band() {
        let params = GenerationParams {
            grid_width: 5,
            grid_height: 5,
            random_end: false,
            fixed_end: Pos { y: 4, x: 4 },
            end_max_height_percent: 100,
            seed: SeedChoice::Fixed(1),
            ..GenerationParams::default()
        }
        .clamped();
        let mut rng = RandomSource::new(1);
        assert_eq!(resolve_end(&params, &mut rng), Pos { y: 4, x: 4 });

        let shallow = GenerationParams { end_max_height_percent: 20, ..params }.clamped();
        let end = resolve_end(&shallow, &mut rng);
        assert_eq!(end, Pos { y: 0, x: 4 });
    }

    #[test]
    fn fixed_end_outside_the_grid_is_pulled_inside() {
        let params = GenerationParams {
            grid_width: 8,
            grid_height: 8,
            random_end: false,
            fixed_end: Pos { y: -5, x: 99 },
            end_max_height_percent: 100,
            ..GenerationParams::default()
        }
        .clamped();
        let mut rng = RandomSource::new(3);
        assert_eq!(resolve_end(&params, &mut rng), Pos { y: 0, x: 7 });
    }

    #[test]
    fn random_end_stays_inside_the_band_across_many_draws() {
        let params = GenerationParams {
            grid_width: 20,
            grid_height: 20,
            random_end: true,
            end_max_height_percent: 10,
            ..GenerationParams::default()
        }
        .clamped();
        let mut rng = RandomSource::new(77);
        for _ in 0..500 {
            let end = resolve_end(&params, &mut rng);
            assert!((0..20).contains(&end.x));
            assert!(end.y <= 1, "end.y={} escaped the 10% band", end.y);
        }
    }
}
