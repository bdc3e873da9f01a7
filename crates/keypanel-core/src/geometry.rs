#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.w,
            height: self.h,
        }
    }
}

/// Portrait iff the container is taller than it is wide. Row padding is
/// selected per orientation during layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn of(size: Size) -> Self {
        if size.width < size.height {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(rect.contains(Vec2 { x: 10.0, y: 10.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_orientation_of() {
        let portrait = Size {
            width: 320.0,
            height: 480.0,
        };
        let landscape = Size {
            width: 480.0,
            height: 320.0,
        };
        let square = Size {
            width: 100.0,
            height: 100.0,
        };

        assert_eq!(Orientation::of(portrait), Orientation::Portrait);
        assert_eq!(Orientation::of(landscape), Orientation::Landscape);
        // Width is not strictly less than height, so a square counts as landscape.
        assert_eq!(Orientation::of(square), Orientation::Landscape);
    }
}
