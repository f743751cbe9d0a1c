use super::Vec2;

/// Screen rectangle: top-left `origin` and `size`, in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Same area with a non-negative size; a negative side moves the origin.
    pub fn normalized(self) -> Self {
        let span = |start: f32, len: f32| if len < 0.0 { (start + len, -len) } else { (start, len) };
        let (x, w) = span(self.origin.x, self.size.x);
        let (y, h) = span(self.origin.y, self.size.y);
        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_size_flips_origin() {
        let n = Rect::new(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, Rect::new(6.0, 7.0, 4.0, 3.0));
        assert!(!n.is_empty());
    }

    #[test]
    fn zero_width_is_empty() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert_eq!(Rect::new(1.0, 1.0, 2.0, 2.0).normalized(), Rect::new(1.0, 1.0, 2.0, 2.0));
    }
}
