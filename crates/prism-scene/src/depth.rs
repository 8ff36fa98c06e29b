//! Back-to-front ordering (painter's algorithm).
//!
//! The sort key is the planar distance from the camera to each triangle's
//! first vertex. Neither the centroid nor the stored `z` hint takes part.

use crate::triangle::Triangle;
use crate::vector::Vector2;

/// Depth sorter with a reusable key buffer.
///
/// Distances are computed once per triangle per sort. The sort is stable:
/// triangles at equal distance keep their relative input order.
#[derive(Debug, Default)]
pub struct DepthSorter {
    keyed: Vec<(f64, Triangle)>,
}

impl DepthSorter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reorders `triangles` farthest-first relative to `camera`.
    pub fn sort_in_place(&mut self, triangles: &mut [Triangle], camera: Vector2) {
        self.keyed.clear();
        self.keyed
            .extend(triangles.iter().map(|t| (t.anchor().distance(camera), *t)));

        self.keyed.sort_by(|a, b| b.0.total_cmp(&a.0));

        for (slot, (_, tri)) in triangles.iter_mut().zip(self.keyed.drain(..)) {
            *slot = tri;
        }
    }

    /// Returns a farthest-first copy of `triangles`; the input is untouched.
    pub fn sort(&mut self, triangles: &[Triangle], camera: Vector2) -> Vec<Triangle> {
        let mut out = triangles.to_vec();
        self.sort_in_place(&mut out, camera);
        out
    }
}

/// One-shot convenience over [`DepthSorter::sort`].
pub fn sort(triangles: &[Triangle], camera: Vector2) -> Vec<Triangle> {
    DepthSorter::new().sort(triangles, camera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    /// Triangle whose first vertex sits at `(x, y)`; `tag` goes into the red channel.
    fn tri_at(x: f64, y: f64, tag: u8) -> Triangle {
        Triangle {
            vertices: [Vector2::new(x, y), Vector2::new(x + 1.0, y), Vector2::new(x, y + 1.0)],
            color: Rgba::opaque(tag, 0, 0),
            z: 0.0,
        }
    }

    fn tags(list: &[Triangle]) -> Vec<u8> {
        list.iter().map(|t| t.color.r).collect()
    }

    #[test]
    fn farthest_first() {
        let input = [tri_at(5.0, 0.0, 5), tri_at(0.0, 1.0, 1), tri_at(-3.0, 0.0, 3)];
        let sorted = sort(&input, Vector2::zero());
        assert_eq!(tags(&sorted), vec![5, 3, 1]);
    }

    #[test]
    fn input_slice_is_not_reordered() {
        let input = vec![tri_at(1.0, 0.0, 1), tri_at(9.0, 0.0, 9)];
        let _ = sort(&input, Vector2::zero());
        assert_eq!(tags(&input), vec![1, 9]);
    }

    #[test]
    fn resorting_sorted_output_is_idempotent() {
        let input = [tri_at(2.0, 2.0, 2), tri_at(0.0, 7.0, 7), tri_at(0.5, 0.0, 1), tri_at(4.0, 0.0, 4)];
        let cam = Vector2::new(0.25, -0.5);
        let mut sorter = DepthSorter::new();
        let once = sorter.sort(&input, cam);
        let twice = sorter.sort(&once, cam);
        assert_eq!(once, twice);
    }

    #[test]
    fn ties_keep_input_order() {
        let input = [tri_at(0.0, 2.0, 10), tri_at(2.0, 0.0, 20), tri_at(-2.0, 0.0, 30)];
        assert_eq!(tags(&sort(&input, Vector2::zero())), vec![10, 20, 30]);
    }

    #[test]
    fn depth_hint_is_ignored() {
        let mut near = tri_at(1.0, 0.0, 1);
        near.z = 1000.0;
        let mut far = tri_at(6.0, 0.0, 6);
        far.z = -1000.0;
        assert_eq!(tags(&sort(&[near, far], Vector2::zero())), vec![6, 1]);
    }

    #[test]
    fn order_follows_the_camera() {
        let input = [tri_at(-4.0, 0.0, 1), tri_at(4.0, 0.0, 2)];
        assert_eq!(tags(&sort(&input, Vector2::new(-4.0, 0.0))), vec![2, 1]);
        assert_eq!(tags(&sort(&input, Vector2::new(4.0, 0.0))), vec![1, 2]);
    }

    #[test]
    fn only_the_first_vertex_counts() {
        // Second triangle has distant trailing vertices but a near anchor.
        let a = tri_at(3.0, 0.0, 1);
        let b = Triangle {
            vertices: [Vector2::new(1.0, 0.0), Vector2::new(100.0, 0.0), Vector2::new(0.0, 100.0)],
            color: Rgba::opaque(2, 0, 0),
            z: 0.0,
        };
        assert_eq!(tags(&sort(&[b, a], Vector2::zero())), vec![1, 2]);
    }

    #[test]
    fn empty_input() {
        assert!(sort(&[], Vector2::zero()).is_empty());
    }
}
