//! Core shared types: math re-exports and bounding volumes.

pub use glam::{Vec2, Vec3, vec2, vec3};

pub mod bounds;

pub use bounds::Aabb;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_from_no_points_is_none() {
        assert!(Aabb::from_points(&[] as &[Vec3]).is_none());
    }

    #[test]
    fn aabb_grows_to_contain_points() {
        let pts = [vec3(1.0, -2.0, 0.0), vec3(-1.0, 4.0, 2.0), vec3(0.0, 0.0, -3.0)];
        let b = Aabb::from_points(&pts).expect("bounds");
        assert_eq!(b.min, vec3(-1.0, -2.0, -3.0));
        assert_eq!(b.max, vec3(1.0, 4.0, 2.0));
        assert_eq!(b.extent(), vec3(2.0, 6.0, 5.0));
    }

    #[test]
    fn single_point_box_has_zero_radius() {
        let b = Aabb::from_points(&[vec3(3.0, 3.0, 3.0)]).unwrap();
        assert_eq!(b.center(), vec3(3.0, 3.0, 3.0));
        assert_eq!(b.radius(), 0.0);
    }
}
