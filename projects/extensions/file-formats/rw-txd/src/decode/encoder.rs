use alloc::vec::Vec;

/// Encodes an RGBA8 image into a file format such as PNG.
///
/// The crate performs no file encoding itself. Implement this trait over an image
/// library and pass it to [`DecodedImage::encode_with`](crate::decode::DecodedImage::encode_with).
pub trait ImageEncoder {
    /// Error returned when encoding fails.
    type Error;

    /// Encodes a `width` x `height` image of row-major RGBA8 `rgba` pixels.
    fn encode(&self, width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, Self::Error>;
}
