use crate::point::Point2;

use super::ClipBounds;

bitflags::bitflags! {
    /// Cohen–Sutherland region code of a point relative to a clip window.
    ///
    /// The empty set means "inside". Horizontal and vertical bits are each
    /// mutually exclusive (a point cannot be both LEFT and RIGHT).
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Outcode: u8 {
        const LEFT   = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const TOP    = 0b1000;
    }
}

impl Outcode {
    /// Computes the region code of `p`. Points on the boundary are inside.
    pub fn of(p: Point2, bounds: &ClipBounds) -> Self {
        let mut code = Outcode::empty();

        if p.x < bounds.xmin {
            code |= Outcode::LEFT;
        } else if p.x > bounds.xmax {
            code |= Outcode::RIGHT;
        }

        if p.y < bounds.ymin {
            code |= Outcode::BOTTOM;
        } else if p.y > bounds.ymax {
            code |= Outcode::TOP;
        }

        code
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }
}
