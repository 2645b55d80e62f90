mod densify;
mod generalize;

pub use densify::Densify;
pub use generalize::Generalize;

/// Parameters controlling densification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DensifyParams {
    /// Optional upper bound on vertices inserted into a single segment. A
    /// request exceeding it fails instead of allocating. `None` means no limit.
    pub max_vertices_per_segment: Option<usize>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Polyline, Vertex};
    use crate::math::distance_2d::point_to_point_dist;
    use crate::sample;

    fn max_segment_length(pl: &Polyline) -> f64 {
        pl.parts()
            .flat_map(|part| part.windows(2))
            .map(|w| point_to_point_dist(&w[0].xy(), &w[1].xy()))
            .fold(0.0, f64::max)
    }

    fn zigzag() -> Polyline {
        Polyline::new(vec![
            vec![
                Vertex::new(0.0, 0.0),
                Vertex::new(10.0, 3.0),
                Vertex::new(20.0, -4.0),
                Vertex::new(30.0, 0.5),
                Vertex::new(40.0, 8.0),
                Vertex::new(50.0, 0.0),
            ],
            vec![
                Vertex::new(100.0, 100.0),
                Vertex::new(101.0, 130.0),
                Vertex::new(160.0, 131.0),
            ],
        ])
        .unwrap()
    }

    #[test]
    fn ship_track_densify_then_generalize() {
        let track = Polyline::from_vertices([
            (2_330_611.13, 202_360.00),
            (2_330_583.83, 202_525.98),
            (2_330_574.16, 202_691.49),
            (2_330_689.29, 203_170.05),
        ])
        .unwrap();

        let dense = Densify::new(&track, 100.0).execute().unwrap();
        assert!(dense.vertex_count() > track.vertex_count());
        assert!(max_segment_length(&dense) <= 100.0 + 1e-6);

        let general = Generalize::new(&dense, 50.0, true).execute().unwrap();
        assert!(general.vertex_count() <= dense.vertex_count());
        let (result, source) = (general.part(0).unwrap(), track.part(0).unwrap());
        assert_eq!(result.first(), source.first());
        assert_eq!(result.last(), source.last());
    }

    #[test]
    fn generalize_is_idempotent() {
        let pl = zigzag();
        for tolerance in [0.0, 0.5, 2.0, 5.0, 50.0] {
            let once = Generalize::new(&pl, tolerance, true).execute().unwrap();
            let twice = Generalize::new(&once, tolerance, true).execute().unwrap();
            assert_eq!(once, twice, "tolerance={tolerance}");
        }
    }

    #[test]
    fn generalize_is_idempotent_on_full_ship_track() {
        let track = sample::ship_track();
        for tolerance in [1.0, 25.0, 100.0, 250.0] {
            let once = Generalize::new(&track, tolerance, true).execute().unwrap();
            let twice = Generalize::new(&once, tolerance, true).execute().unwrap();
            assert_eq!(once, twice, "tolerance={tolerance}");
        }
    }

    #[test]
    fn densify_never_loses_vertices() {
        let track = sample::ship_track();
        for length in [1.0, 50.0, 100.0, 333.0, 1.0e6] {
            let dense = Densify::new(&track, length).execute().unwrap();
            assert!(dense.vertex_count() >= track.vertex_count());
            assert!(max_segment_length(&dense) <= length + 1e-6);
        }
    }

    #[test]
    fn generalize_of_densified_recovers_corners() {
        // Densified vertices are collinear with their source segment, so a
        // zero-deviation generalize removes them again.
        let pl = zigzag();
        let dense = Densify::new(&pl, 0.75).execute().unwrap();
        let back = Generalize::new(&dense, 1e-6, true).execute().unwrap();
        assert_eq!(back.part_count(), pl.part_count());
        for (a, b) in back.parts().zip(pl.parts()) {
            assert_eq!(a.len(), b.len());
            for (va, vb) in a.iter().zip(b) {
                approx::assert_relative_eq!(va.x, vb.x, epsilon = 1e-9);
                approx::assert_relative_eq!(va.y, vb.y, epsilon = 1e-9);
            }
        }
    }
}
