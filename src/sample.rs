//! Reference data: a ship track sampled at irregular intervals along a river.

use crate::geometry::{Polyline, SpatialReference, Vertex};

/// Spatial reference of [`SHIP_TRACK`] (NAD83 / Maryland, metres).
pub const SHIP_TRACK_SPATIAL_REFERENCE: SpatialReference = SpatialReference::new(32126);

/// Ship positions in planar coordinates, in travel order.
pub const SHIP_TRACK: [(f64, f64); 17] = [
    (2_330_611.130_549, 202_360.002_957),
    (2_330_583.834_672, 202_525.984_012),
    (2_330_574.164_902, 202_691.488_009),
    (2_330_689.292_623, 203_170.045_888),
    (2_330_696.773_344, 203_317.495_798),
    (2_330_691.419_723, 203_380.917_080),
    (2_330_435.065_296, 203_816.662_457),
    (2_330_369.500_800, 204_329.861_789),
    (2_330_400.929_891, 204_712.129_673),
    (2_330_484.300_447, 204_927.797_132),
    (2_330_514.469_919, 205_000.792_463),
    (2_330_638.099_138, 205_271.601_116),
    (2_330_725.315_888, 205_631.231_308),
    (2_330_755.640_702, 206_433.354_860),
    (2_330_680.644_719, 206_660.240_923),
    (2_330_386.957_926, 207_340.947_204),
    (2_330_485.861_737, 207_742.298_501),
];

/// Returns the ship track as a single-part polyline with zero elevation.
#[must_use]
pub fn ship_track() -> Polyline {
    let mut polyline = Polyline::with_capacity(SHIP_TRACK.len(), 1);
    let part: Vec<Vertex> = SHIP_TRACK
        .iter()
        .map(|&(x, y)| Vertex::with_z(x, y, 0.0))
        .collect();
    polyline.push_part(&part);
    polyline
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::Length;

    #[test]
    fn ship_track_is_single_part() {
        let track = ship_track();
        assert_eq!(track.part_count(), 1);
        assert_eq!(track.vertex_count(), SHIP_TRACK.len());
        assert!(track.has_z());
        assert_eq!(SHIP_TRACK_SPATIAL_REFERENCE.wkid, 32126);
    }

    #[test]
    fn ship_track_matches_validated_construction() {
        let points = SHIP_TRACK.iter().map(|&(x, y)| (x, y, 0.0));
        let validated = Polyline::from_vertices(points).unwrap();
        assert_eq!(validated, ship_track());
    }

    #[test]
    fn ship_track_spans_several_kilometres() {
        let len = Length::new(&ship_track()).execute();
        assert!(len > 5_000.0 && len < 7_000.0, "len={len}");
    }
}
