use crate::foundation::error::{MockupError, MockupResult};

/// Opaque RGB color, serialized as `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Axis-aligned pixel rectangle; `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> MockupResult<Self> {
        if width == 0 || height == 0 {
            return Err(MockupError::validation(
                "PixelRect width and height must be > 0",
            ));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }

    // exclusive
    pub fn right(self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    // exclusive
    pub fn bottom(self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }

    pub fn contains(self, x: u32, y: u32) -> bool {
        x >= self.x && u64::from(x) < self.right() && y >= self.y && u64::from(y) < self.bottom()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
