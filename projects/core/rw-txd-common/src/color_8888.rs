use crate::color_565::Color565;

/// Represents a single RGBA8888 pixel color from a decoded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Fully transparent black.
    ///
    /// Used for the fourth entry of a transparent-mode DXT colour table and as the
    /// stand-in for pixels whose palette entry does not exist.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// Each parameter represents the intensity of its corresponding colour channel (0–255).
    ///
    /// # Examples
    ///
    /// ```
    /// use rw_txd_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a pixel from a BGRA byte quadruple, as stored by Direct3D
    /// `A8R8G8B8`/`X8R8G8B8` rasters.
    #[inline]
    pub const fn from_bgra(bytes: [u8; 4]) -> Self {
        Self::new(bytes[2], bytes[1], bytes[0], bytes[3])
    }

    /// Builds a pixel from an RGBA byte quadruple.
    #[inline]
    pub const fn from_rgba(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Returns the pixel as RGBA bytes.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Truncates this colour to [`Color565`], discarding alpha and the low bits of each channel.
    #[inline]
    pub fn to_color_565(&self) -> Color565 {
        Color565::from_rgb(self.r, self.g, self.b)
    }
}
