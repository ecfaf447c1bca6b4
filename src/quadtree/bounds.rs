use crate::Point;

/// One of the four equal sub-regions of a node.
///
/// `x` runs along the height and `y` along the width of a node, so the "top" half is the
/// one with the smaller `x` and the "left" half the one with the smaller `y`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Axis aligned region covered by a node
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Bounds {
    pub top_left: Point,
    pub height: i32,
    pub width: i32,
}

impl Bounds {
    pub fn new(top_left: Point, height: i32, width: i32) -> Self {
        Self {
            top_left,
            height,
            width,
        }
    }

    /// Bounds whose far edges can be represented. Returns `None` for empty or overflowing
    /// regions.
    pub fn checked(top_left: Point, height: i32, width: i32) -> Option<Self> {
        if height <= 0 || width <= 0 {
            return None;
        }
        top_left[0].checked_add(height)?;
        top_left[1].checked_add(width)?;
        Some(Self::new(top_left, height, width))
    }

    /// Midline crossing the `x` axis
    pub fn horline(&self) -> i64 {
        self.top_left[0] as i64 + (self.height / 2) as i64
    }

    /// Midline crossing the `y` axis
    pub fn vertline(&self) -> i64 {
        self.top_left[1] as i64 + (self.width / 2) as i64
    }

    fn bottom(&self) -> i64 {
        self.top_left[0] as i64 + self.height as i64
    }

    fn right(&self) -> i64 {
        self.top_left[1] as i64 + self.width as i64
    }

    /// Closed containment test, edges included.
    pub fn contains(&self, point: &Point) -> bool {
        let [x, y] = **point;
        let [x, y] = [x as i64, y as i64];

        self.top_left[0] as i64 <= x
            && x <= self.bottom()
            && self.top_left[1] as i64 <= y
            && y <= self.right()
    }

    /// Find the single quadrant that strictly contains the square footprint of a circle.
    ///
    /// Returns `None` when the footprint touches or crosses a midline, or leaves the bounds.
    /// Points (`radius == 0`) only yield `None` when they lie on a midline or outside.
    pub fn classify(&self, center: &Point, radius: i32) -> Option<Quadrant> {
        let [x, y] = **center;
        let [x, y, r] = [x as i64, y as i64, radius as i64];
        let [top, left] = [self.top_left[0] as i64, self.top_left[1] as i64];
        let (horline, vertline) = (self.horline(), self.vertline());

        let lower = if top <= x - r && x + r < horline {
            false
        } else if horline < x - r && x + r <= self.bottom() {
            true
        } else {
            return None;
        };
        let far = if left <= y - r && y + r < vertline {
            false
        } else if vertline < y - r && y + r <= self.right() {
            true
        } else {
            return None;
        };

        Some(Quadrant::ALL[lower as usize + 2 * far as usize])
    }

    /// Split the bounds into four quadrants, indexed by [`Quadrant::index`].
    /// Truncation remainders of odd dimensions go to the bottom and right quadrants.
    pub fn quadrants(&self) -> [Bounds; 4] {
        let sub_height = self.height / 2;
        let sub_width = self.width / 2;
        let far_height = self.height - sub_height;
        let far_width = self.width - sub_width;

        let tl = self.top_left;
        [
            Self::new(tl, sub_height, sub_width),
            Self::new(tl + Point::new(sub_height, 0), far_height, sub_width),
            Self::new(tl + Point::new(0, sub_width), sub_height, far_width),
            Self::new(
                tl + Point::new(sub_height, sub_width),
                far_height,
                far_width,
            ),
        ]
    }

    /// Whether splitting still yields four non-empty quadrants
    pub fn can_split(&self) -> bool {
        self.height >= 2 && self.width >= 2
    }

    /// Return whether `point` lies within `margin` of an edge or a midline on either axis.
    pub fn near_lines(&self, point: &Point, margin: i64) -> bool {
        let [x, y] = **point;
        let [x, y] = [x as i64, y as i64];

        let near = |v: i64, line: i64| (v - line).abs() <= margin;

        near(x, self.top_left[0] as i64)
            || near(x, self.horline())
            || near(x, self.bottom())
            || near(y, self.top_left[1] as i64)
            || near(y, self.vertline())
            || near(y, self.right())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane() -> Bounds {
        Bounds::new(Point::new(0, 0), 1000, 1000)
    }

    #[test]
    fn classify_points() {
        let b = plane();

        assert_eq!(b.classify(&Point::new(100, 100), 0), Some(Quadrant::TopLeft));
        assert_eq!(b.classify(&Point::new(900, 100), 0), Some(Quadrant::TopRight));
        assert_eq!(b.classify(&Point::new(100, 900), 0), Some(Quadrant::BottomLeft));
        assert_eq!(b.classify(&Point::new(900, 900), 0), Some(Quadrant::BottomRight));
        assert_eq!(b.classify(&Point::new(1000, 1000), 0), Some(Quadrant::BottomRight));
        assert_eq!(b.classify(&Point::new(0, 0), 0), Some(Quadrant::TopLeft));
    }

    #[test]
    fn classify_midline_is_none() {
        let b = plane();

        assert_eq!(b.classify(&Point::new(500, 100), 0), None);
        assert_eq!(b.classify(&Point::new(100, 500), 0), None);
        assert_eq!(b.classify(&Point::new(500, 500), 0), None);
    }

    #[test]
    fn classify_straddlers() {
        let b = plane();

        // crosses the horline
        assert_eq!(b.classify(&Point::new(480, 100), 50), None);
        // touches the vertline
        assert_eq!(b.classify(&Point::new(100, 450), 50), None);
        // leaves the bounds
        assert_eq!(b.classify(&Point::new(20, 100), 50), None);
        assert_eq!(b.classify(&Point::new(980, 980), 50), None);
        // fits right next to the midline
        assert_eq!(b.classify(&Point::new(449, 100), 50), Some(Quadrant::TopLeft));
        assert_eq!(b.classify(&Point::new(551, 551), 50), Some(Quadrant::BottomRight));
    }

    #[test]
    fn classify_does_not_overflow() {
        let b = Bounds::new(Point::new(i32::MAX - 10, i32::MAX - 10), 10, 10);

        assert_eq!(b.classify(&Point::new(i32::MAX, i32::MAX), i32::MAX), None);
        assert_eq!(
            b.classify(&Point::new(i32::MAX, i32::MAX), 0),
            Some(Quadrant::BottomRight)
        );
    }

    #[test]
    fn quadrants_tile_odd_bounds() {
        let b = Bounds::new(Point::new(3, 7), 11, 5);
        let q = b.quadrants();

        assert_eq!(q[0], Bounds::new(Point::new(3, 7), 5, 2));
        assert_eq!(q[1], Bounds::new(Point::new(8, 7), 6, 2));
        assert_eq!(q[2], Bounds::new(Point::new(3, 9), 5, 3));
        assert_eq!(q[3], Bounds::new(Point::new(8, 9), 6, 3));

        let area: i32 = q.iter().map(|q| q.height * q.width).sum();
        assert_eq!(area, b.height * b.width);
    }

    #[test]
    fn quadrants_agree_with_classify() {
        let b = Bounds::new(Point::new(-40, 17), 77, 31);
        let q = b.quadrants();

        for x in -40..=37 {
            for y in 17..=48 {
                let p = Point::new(x, y);
                if let Some(quadrant) = b.classify(&p, 0) {
                    assert!(q[quadrant.index()].contains(&p), "{:?} {:?}", p, quadrant);
                }
            }
        }
    }

    #[test]
    fn checked_rejects_bad_bounds() {
        assert!(Bounds::checked(Point::new(0, 0), 0, 10).is_none());
        assert!(Bounds::checked(Point::new(0, 0), 10, -1).is_none());
        assert!(Bounds::checked(Point::new(i32::MAX, 0), 1, 1).is_none());
        assert!(Bounds::checked(Point::new(0, 0), 1, 1).is_some());
    }

    #[test]
    fn near_lines_margin() {
        let b = plane();

        assert!(b.near_lines(&Point::new(200, 540), 40));
        assert!(!b.near_lines(&Point::new(200, 541), 40));
        assert!(b.near_lines(&Point::new(960, 200), 40));
        assert!(!b.near_lines(&Point::new(200, 200), 40));
    }
}
