//! Field Layout
//!
//! Static markings of the throwing field: distance lines down the +X throw
//! axis, the throwing circle at the origin and the stadium wall. Used by the
//! result display to place and label a throw.

use glam::Vec3;

/// One distance line across the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceMarker {
    /// Distance from the circle center along +X (meters)
    pub distance: f32,
    /// Major lines are wider and labelled
    pub major: bool,
    /// Line width across the throw axis (meters)
    pub width: f32,
    pub opacity: f32,
}

impl DistanceMarker {
    /// Label text for major lines ("40m")
    pub fn label(&self) -> Option<String> {
        self.major.then(|| format!("{}m", self.distance as u32))
    }

    /// Ground-level center of the line
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.distance, 0.02, 0.0)
    }
}

/// Dimensions of the field markings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    pub marker_spacing: f32,
    pub marker_max: f32,
    /// Every n-th marker multiple is major
    pub major_spacing: f32,
    /// Length of each line across the field
    pub marker_length: f32,
    pub circle_inner_radius: f32,
    pub circle_outer_radius: f32,
    pub wall_radius: f32,
    pub wall_height: f32,
    /// Lateral offset of the two label rows
    pub label_offset: f32,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            marker_spacing: 5.0,
            marker_max: 100.0,
            major_spacing: 10.0,
            marker_length: 50.0,
            circle_inner_radius: 1.0,
            circle_outer_radius: 1.1,
            wall_radius: 60.0,
            wall_height: 10.0,
            label_offset: 15.0,
        }
    }
}

impl FieldLayout {
    /// All distance lines, nearest first
    pub fn markers(&self) -> Vec<DistanceMarker> {
        if self.marker_spacing <= 0.0 {
            return Vec::new();
        }
        let count = (self.marker_max / self.marker_spacing).floor() as u32;
        (1..=count)
            .map(|i| {
                let distance = i as f32 * self.marker_spacing;
                let major = self.major_spacing > 0.0 && (distance % self.major_spacing).abs() < 1e-3;
                DistanceMarker {
                    distance,
                    major,
                    width: if major { 0.3 } else { 0.1 },
                    opacity: if major { 0.8 } else { 0.4 },
                }
            })
            .collect()
    }

    /// Marker closest to `distance`, or `None` if there are no markers or
    /// the distance is not finite.
    pub fn nearest_marker(&self, distance: f32) -> Option<DistanceMarker> {
        if !distance.is_finite() {
            return None;
        }
        self.markers().into_iter().min_by(|a, b| {
            (a.distance - distance)
                .abs()
                .total_cmp(&(b.distance - distance).abs())
        })
    }

    /// True if a ground point lies on the painted circle ring
    pub fn on_circle(&self, point: Vec3) -> bool {
        let r = Vec3::new(point.x, 0.0, point.z).length();
        r >= self.circle_inner_radius && r <= self.circle_outer_radius
    }

    /// True if a ground point lies past the stadium wall
    pub fn beyond_wall(&self, point: Vec3) -> bool {
        Vec3::new(point.x, 0.0, point.z).length() > self.wall_radius
    }
}

/// Result string for a throw, in meters with two decimals.
pub fn format_distance(distance: f32) -> String {
    format!("{distance:.2}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_every_five_meters() {
        let markers = FieldLayout::default().markers();
        assert_eq!(markers.len(), 20);
        assert_eq!(markers[0].distance, 5.0);
        assert_eq!(markers[19].distance, 100.0);
        assert_eq!(markers.iter().filter(|m| m.major).count(), 10);
        assert!(!markers[0].major);
        assert!(markers[1].major);
        assert_eq!(markers[1].width, 0.3);
    }

    #[test]
    fn test_major_labels() {
        let markers = FieldLayout::default().markers();
        assert_eq!(markers[3].label(), Some("20m".to_string()));
        assert_eq!(markers[2].label(), None);
    }

    #[test]
    fn test_nearest_marker() {
        let field = FieldLayout::default();
        assert_eq!(field.nearest_marker(52.3).map(|m| m.distance), Some(50.0));
        assert_eq!(field.nearest_marker(0.4).map(|m| m.distance), Some(5.0));
        assert_eq!(field.nearest_marker(250.0).map(|m| m.distance), Some(100.0));
        assert!(field.nearest_marker(f32::NAN).is_none());
    }

    #[test]
    fn test_circle_and_wall() {
        let field = FieldLayout::default();
        assert!(field.on_circle(Vec3::new(0.0, 0.0, 1.05)));
        assert!(!field.on_circle(Vec3::new(0.5, 0.0, 0.0)));
        assert!(field.beyond_wall(Vec3::new(61.0, 0.25, 0.0)));
        assert!(!field.beyond_wall(Vec3::new(52.0, 0.25, 3.0)));
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(52.347), "52.35m");
        assert_eq!(format_distance(7.0), "7.00m");
    }
}
