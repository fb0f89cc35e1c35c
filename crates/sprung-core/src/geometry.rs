//! Geometric primitives for graph layouts.
//!
//! This module provides the planar types the layout engine works with.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate, also used as a displacement or force vector
//! - [`Bounds`] - An axis-aligned bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Layout coordinates are abstract: the engine places nodes around the origin
//! and never assumes a unit or an orientation. Renderers pick their own scale
//! (see [`Bounds::diagonal`]) and axis direction.

/// A 2D point in layout space.
///
/// The same type is used for absolute positions and for relative vectors
/// (offsets between nodes, per-node force vectors). Coordinates are `f64`.
///
/// # Examples
///
/// ```
/// # use sprung_core::geometry::Point;
/// let p1 = Point::new(3.0, 4.0);
/// let p2 = Point::new(1.0, 1.0);
///
/// let offset = p1.sub_point(p2);
/// assert_eq!(offset.x(), 2.0);
/// assert_eq!(offset.y(), 3.0);
///
/// assert_eq!(p1.hypot(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the zero vector
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks if both coordinates are finite (neither infinite nor NaN)
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another point to this point, returning a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sprung_core::geometry::Point;
    /// let position = Point::new(100.0, 50.0);
    /// let offset = Point::new(10.0, -5.0);
    ///
    /// let moved = position.add_point(offset);
    /// assert_eq!(moved.x(), 110.0);
    /// assert_eq!(moved.y(), 45.0);
    /// ```
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Returns the vector pointing in the opposite direction
    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared Euclidean length, without the square root
    pub fn hypot_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance between this point and another point
    pub fn distance(self, other: Point) -> f64 {
        self.sub_point(other).hypot()
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sprung_core::geometry::Point;
    /// let point = Point::new(10.0, 20.0);
    ///
    /// let doubled = point.scale(2.0);
    /// assert_eq!(doubled.x(), 20.0);
    /// assert_eq!(doubled.y(), 40.0);
    /// ```
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Multiplies each coordinate by its own factor
    pub fn scale_axes(self, factor_x: f64, factor_y: f64) -> Self {
        Self {
            x: self.x * factor_x,
            y: self.y * factor_y,
        }
    }
}

/// An axis-aligned rectangle with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates zero-sized bounds located at a single point
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Computes the smallest bounds containing every point.
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sprung_core::geometry::{Bounds, Point};
    /// let points = [Point::new(-1.0, 2.0), Point::new(3.0, -2.0), Point::new(0.0, 0.0)];
    /// let bounds = Bounds::enclosing(points).unwrap();
    ///
    /// assert_eq!(bounds.min_x(), -1.0);
    /// assert_eq!(bounds.max_y(), 2.0);
    /// assert_eq!(bounds.width(), 4.0);
    /// assert_eq!(bounds.height(), 4.0);
    /// ```
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = Self::from_point(points.next()?);
        Some(points.fold(first, |bounds, point| bounds.include(point)))
    }

    /// Returns the bounds grown just enough to contain the point
    pub fn include(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Length of the diagonal from the minimum to the maximum corner
    pub fn diagonal(self) -> f64 {
        self.width().hypot(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let p1 = Point::new(3.0, 4.0);
        let p2 = Point::new(1.0, -2.0);

        let sum = p1.add_point(p2);
        assert_eq!(sum.x(), 4.0);
        assert_eq!(sum.y(), 2.0);

        let diff = p1.sub_point(p2);
        assert_eq!(diff.x(), 2.0);
        assert_eq!(diff.y(), 6.0);

        let negated = p2.negate();
        assert_eq!(negated.x(), -1.0);
        assert_eq!(negated.y(), 2.0);
    }

    #[test]
    fn test_point_lengths() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.hypot(), 5.0);
        assert_eq!(p.hypot_squared(), 25.0);
        assert_eq!(p.distance(Point::zero()), 5.0);
        assert_eq!(Point::zero().hypot(), 0.0);
    }

    #[test]
    fn test_point_scaling() {
        let point = Point::new(10.0, 20.0);

        let scaled_zero = point.scale(0.0);
        assert!(scaled_zero.is_zero());

        let scaled_neg = point.scale(-1.0);
        assert_eq!(scaled_neg.x(), -10.0);
        assert_eq!(scaled_neg.y(), -20.0);

        let per_axis = point.scale_axes(0.5, 0.25);
        assert_eq!(per_axis.x(), 5.0);
        assert_eq!(per_axis.y(), 5.0);
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, -1.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_bounds_enclosing_empty() {
        assert_eq!(Bounds::enclosing(Vec::new()), None);
    }

    #[test]
    fn test_bounds_enclosing_single_point() {
        let bounds = Bounds::enclosing([Point::new(2.0, 3.0)]).unwrap();
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
        assert_eq!(bounds.diagonal(), 0.0);
        assert_eq!(bounds.center(), Point::new(2.0, 3.0));
    }

    #[test]
    fn test_bounds_diagonal() {
        let bounds = Bounds::enclosing([Point::new(0.0, 0.0), Point::new(6.0, 8.0)]).unwrap();
        assert_eq!(bounds.diagonal(), 10.0);
        assert_eq!(bounds.center(), Point::new(3.0, 4.0));
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec(point_strategy(), 1..32)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Subtraction is antisymmetric: a - b == -(b - a).
    fn check_sub_is_antisymmetric(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let forward = p1.sub_point(p2);
        let backward = p2.sub_point(p1).negate();

        prop_assert_eq!(forward, backward);
        Ok(())
    }

    /// Adding then subtracting a point should return the original.
    fn check_add_sub_inverse(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let result = p1.add_point(p2).sub_point(p2);

        prop_assert!(approx_eq!(f64, result.x(), p1.x(), epsilon = 1e-9));
        prop_assert!(approx_eq!(f64, result.y(), p1.y(), epsilon = 1e-9));
        Ok(())
    }

    /// Enclosing bounds contain every input point.
    fn check_enclosing_contains_all(points: Vec<Point>) -> Result<(), TestCaseError> {
        let bounds = Bounds::enclosing(points.iter().copied()).unwrap();

        for point in &points {
            prop_assert!(bounds.min_x() <= point.x() && point.x() <= bounds.max_x());
            prop_assert!(bounds.min_y() <= point.y() && point.y() <= bounds.max_y());
        }
        Ok(())
    }

    /// Translating every point translates the bounds without changing the diagonal.
    fn check_diagonal_translation_invariant(
        points: Vec<Point>,
        offset: Point,
    ) -> Result<(), TestCaseError> {
        let original = Bounds::enclosing(points.iter().copied()).unwrap();
        let moved = Bounds::enclosing(points.iter().map(|p| p.add_point(offset))).unwrap();

        prop_assert!(approx_eq!(
            f64,
            original.diagonal(),
            moved.diagonal(),
            epsilon = 1e-9
        ));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn sub_is_antisymmetric(p1 in point_strategy(), p2 in point_strategy()) {
            check_sub_is_antisymmetric(p1, p2)?;
        }

        #[test]
        fn add_sub_inverse(p1 in point_strategy(), p2 in point_strategy()) {
            check_add_sub_inverse(p1, p2)?;
        }

        #[test]
        fn enclosing_contains_all(points in points_strategy()) {
            check_enclosing_contains_all(points)?;
        }

        #[test]
        fn diagonal_translation_invariant(points in points_strategy(), offset in point_strategy()) {
            check_diagonal_translation_invariant(points, offset)?;
        }
    }
}
