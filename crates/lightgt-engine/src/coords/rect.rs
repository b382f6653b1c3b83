/// Axis-aligned rectangle stored by its edges.
///
/// `top` is simply the first Y (or V) value and `bottom` the second; nothing
/// requires `top < bottom`, which is what lets [`RectF::v_flip`] express a
/// mirrored mapping.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    #[inline]
    pub const fn from_coords(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Mirrors the rectangle vertically by swapping its top and bottom edges.
    ///
    /// Applying it twice restores the original rectangle.
    #[inline]
    pub fn v_flip(&mut self) {
        std::mem::swap(&mut self.top, &mut self.bottom);
    }

    #[inline]
    pub fn v_flipped(mut self) -> Self {
        self.v_flip();
        self
    }

    /// Corners in triangle-strip order: (l,t), (r,t), (l,b), (r,b).
    ///
    /// Four vertices, two triangles: (0,1,2) and (1,2,3).
    pub fn triangle_strip_coords(self) -> [[f32; 2]; 4] {
        [
            [self.left, self.top],
            [self.right, self.top],
            [self.left, self.bottom],
            [self.right, self.bottom],
        ]
    }
}
