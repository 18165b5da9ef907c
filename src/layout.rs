//! Terminal-cell geometry used for pointer hit testing.

/// A terminal cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub col: u16,
    pub row: u16,
}

impl Point {
    pub fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }
}

/// An axis-aligned block of cells. `width` and `height` are exclusive extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(col: u16, row: u16, width: u16, height: u16) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }

    /// The same rectangle grown downward by `rows`.
    pub fn extend_down(self, rows: u16) -> Self {
        Self {
            height: self.height.saturating_add(rows),
            ..self
        }
    }
}

/// Containment test for pointer events.
pub trait Region {
    fn contains(&self, point: Point) -> bool;
}

impl Region for Rect {
    fn contains(&self, point: Point) -> bool {
        let col = u32::from(point.col);
        let row = u32::from(point.row);
        col >= u32::from(self.col)
            && col < u32::from(self.col) + u32::from(self.width)
            && row >= u32::from(self.row)
            && row < u32::from(self.row) + u32::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(2, 1, 10, 3);
        assert!(rect.contains(Point::new(2, 1)));
        assert!(rect.contains(Point::new(11, 3)));
        assert!(!rect.contains(Point::new(12, 1)));
        assert!(!rect.contains(Point::new(2, 4)));
        assert!(!rect.contains(Point::new(1, 1)));
        assert!(!rect.contains(Point::new(2, 0)));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let rect = Rect::new(0, 0, 0, 0);
        assert!(!rect.contains(Point::new(0, 0)));
    }

    #[test]
    fn test_extend_down() {
        let rect = Rect::new(0, 0, u16::MAX, 1).extend_down(4);
        assert_eq!(rect.height, 5);
        assert!(rect.contains(Point::new(u16::MAX - 1, 4)));
        assert!(!rect.contains(Point::new(0, 5)));
        assert_eq!(Rect::new(0, 0, 1, u16::MAX).extend_down(1).height, u16::MAX);
    }
}
