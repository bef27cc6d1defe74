//! Tests for configuration defaults

#[cfg(test)]
mod tests {
    use mazetile::io::configuration::{
        DEFAULT_STRIDE, GENERATED_BY, GRID_SIZE, MAX_FLOOR_RATIO, MIN_FLOOR_RATIO, TILE_SIZE,
    };
    use mazetile::spatial::tiles::tiles_per_axis;

    // Tests the floor band is a valid, non-trivial interval
    #[test]
    fn test_floor_band_sane() {
        assert!(0.0 < MIN_FLOOR_RATIO);
        assert!(MIN_FLOOR_RATIO < MAX_FLOOR_RATIO);
        assert!(MAX_FLOOR_RATIO < 1.0);
    }

    // Tests default geometry samples 31 x 31 tiles per grid
    #[test]
    fn test_default_geometry() {
        assert!(TILE_SIZE <= GRID_SIZE);
        assert_eq!(tiles_per_axis(GRID_SIZE, TILE_SIZE, DEFAULT_STRIDE), 31);
    }

    #[test]
    fn test_generated_by_names_crate() {
        assert!(GENERATED_BY.starts_with("mazetile "));
    }
}
