//! 16-bit RGB565 endpoint colours, as stored in DXT1 and DXT3 blocks.

use crate::color_8888::Color8888;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in the colour endpoints of DXT1/DXT3 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from separate RGB components, dropping the low bits
    /// of each channel.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub fn raw_value(&self) -> u16 {
        self.value
    }

    /// The unexpanded 5-bit red component.
    #[inline]
    pub fn red_5(&self) -> u8 {
        ((self.value >> 11) & 0b11111) as u8
    }

    /// The unexpanded 6-bit green component.
    #[inline]
    pub fn green_6(&self) -> u8 {
        ((self.value >> 5) & 0b111111) as u8
    }

    /// The unexpanded 5-bit blue component.
    #[inline]
    pub fn blue_5(&self) -> u8 {
        (self.value & 0b11111) as u8
    }

    // Endpoints are widened to 8 bits by replicating their top bits into the
    // freed low bits, so 0 stays 0 and the maximum maps to 255.

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub fn red(&self) -> u8 {
        let r = self.red_5();
        (r << 3) | (r >> 2)
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub fn green(&self) -> u8 {
        let g = self.green_6();
        (g << 2) | (g >> 4)
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub fn blue(&self) -> u8 {
        let b = self.blue_5();
        (b << 3) | (b >> 2)
    }

    /// Compares two [`Color565`] values by their raw 16-bit value.
    ///
    /// This is the comparison DXT1 uses to pick between the opaque 4-colour
    /// mode and the 3-colour + transparent mode.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use rw_txd_common::color_565::Color565;
    ///
    /// let rgba8888 = Color565::from_raw(0xF800).to_color_8888();
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 255);
    /// ```
    #[inline]
    pub fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 255)
    }

    /// Converts this RGB565 color to a RGBA8888 color with the specified alpha value
    #[inline]
    pub fn to_color_8888_with_alpha(&self, alpha: u8) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), alpha)
    }
}
