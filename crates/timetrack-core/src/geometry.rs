//! Canvas geometry.
//!
//! Coordinates follow SVG conventions: x grows to the right with later
//! years, y grows downward as rows stack below the axis.

use std::ops::Add;

/// A position on the canvas.
///
/// # Examples
///
/// ```
/// # use timetrack_core::geometry::Point;
/// let start = Point::new(50.0, 95.0);
/// let end = start + Point::new(0.0, 10.0);
/// assert_eq!(end, Point::new(50.0, 105.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Width and height of the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

/// A closed horizontal range `[start, end]`, such as one lifespan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    start: f32,
    end: f32,
}

impl Extent {
    /// Builds the extent between two x coordinates in either order.
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(self) -> f32 {
        self.start
    }

    pub fn end(self) -> f32 {
        self.end
    }

    pub fn len(self) -> f32 {
        self.end - self.start
    }

    /// Returns `true` if the two ranges share at least one x coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use timetrack_core::geometry::Extent;
    /// let ada = Extent::new(100.0, 200.0);
    /// assert!(ada.overlaps(Extent::new(200.0, 250.0)));
    /// assert!(!ada.overlaps(Extent::new(201.0, 250.0)));
    /// ```
    pub fn overlaps(self, other: Extent) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
