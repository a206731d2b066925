//! Bounding-box arithmetic for the image conversion pipeline.
//!
//! The longer axis is pinned at [`BOUNDING_BOX`] and the shorter one scaled by
//! the aspect ratio, rounded half up. Sources smaller than the box are scaled
//! up; square sources always become `BOUNDING_BOX` × `BOUNDING_BOX`.

/// Edge length of the square bounding box, in pixels.
pub const BOUNDING_BOX: u32 = 256;

/// Output width and height for a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetDimensions {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

impl TargetDimensions {
    /// Compute the target for a `width` × `height` source.
    ///
    /// Both inputs are expected to be non-zero, which any decoded image
    /// satisfies. The scaled axis never drops below one pixel.
    ///
    /// # Examples
    /// ```
    /// use upload_transform::domain::TargetDimensions;
    ///
    /// let target = TargetDimensions::fit(1024, 768);
    /// assert_eq!((target.width, target.height), (256, 192));
    /// ```
    #[must_use]
    pub fn fit(width: u32, height: u32) -> Self {
        match width.cmp(&height) {
            std::cmp::Ordering::Less => Self {
                width: scale_shorter(width, height),
                height: BOUNDING_BOX,
            },
            std::cmp::Ordering::Greater => Self {
                width: BOUNDING_BOX,
                height: scale_shorter(height, width),
            },
            std::cmp::Ordering::Equal => Self {
                width: BOUNDING_BOX,
                height: BOUNDING_BOX,
            },
        }
    }
}

/// `round(BOUNDING_BOX × shorter / longer)` in integer arithmetic.
fn scale_shorter(shorter: u32, longer: u32) -> u32 {
    let denominator = u64::from(longer.max(1));
    let numerator = u64::from(BOUNDING_BOX) * u64::from(shorter);
    let rounded = (2 * numerator + denominator)
        .checked_div(2 * denominator)
        .unwrap_or(u64::from(BOUNDING_BOX));
    // shorter < longer, so the result is at most BOUNDING_BOX.
    u32::try_from(rounded).unwrap_or(BOUNDING_BOX).max(1)
}
