//! Lossless quarter-turn rotation.
//!
//! Pixels are moved, never resampled, so four clockwise turns reproduce the
//! original buffer exactly.
//!
//! # Algorithm
//!
//! For a source of size `w x h` the destination is `h x w`. Each source pixel
//! at `(x, y)` lands at:
//! ```text
//! clockwise:         (h - 1 - y, x)
//! counter-clockwise: (y, w - 1 - x)
//! ```

use serde::{Deserialize, Serialize};

use crate::buffer::ImageState;

const BYTES_PER_PIXEL: usize = 4;

/// Direction of a 90° rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotateDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    /// Change in clockwise quarter turns, modulo 4.
    fn quarter_turns(self) -> u8 {
        match self {
            RotateDirection::Clockwise => 1,
            RotateDirection::CounterClockwise => 3,
        }
    }
}

/// Rotate an image by 90° in `direction`.
///
/// The output has width and height swapped.
pub fn apply_rotation(image: &ImageState, direction: RotateDirection) -> ImageState {
    let (src_w, src_h) = (image.width() as usize, image.height() as usize);
    let (dst_w, dst_h) = (src_h, src_w);
    let src = image.pixels();

    let mut output = vec![0u8; src.len()];

    for y in 0..src_h {
        for x in 0..src_w {
            let (dst_x, dst_y) = match direction {
                RotateDirection::Clockwise => (src_h - 1 - y, x),
                RotateDirection::CounterClockwise => (y, src_w - 1 - x),
            };

            let src_idx = (y * src_w + x) * BYTES_PER_PIXEL;
            let dst_idx = (dst_y * dst_w + dst_x) * BYTES_PER_PIXEL;
            output[dst_idx..dst_idx + BYTES_PER_PIXEL]
                .copy_from_slice(&src[src_idx..src_idx + BYTES_PER_PIXEL]);
        }
    }

    let turns = (image.quarter_turns() + direction.quarter_turns()) % 4;
    image.derive(dst_w as u32, dst_h as u32, output, turns)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn image_strategy() -> impl Strategy<Value = ImageState> {
        (1u32..=24, 1u32..=24).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 4) as usize)
                .prop_map(move |pixels| ImageState::new(w, h, pixels))
        })
    }

    proptest! {
        /// Property: Four clockwise turns reproduce the original exactly.
        #[test]
        fn prop_four_turns_identity(img in image_strategy()) {
            let mut current = img.clone();
            for _ in 0..4 {
                current = apply_rotation(&current, RotateDirection::Clockwise);
            }
            prop_assert!(current.same_pixels(&img));
            prop_assert_eq!(current.quarter_turns(), 0);
        }

        /// Property: A counter-clockwise turn undoes a clockwise turn.
        #[test]
        fn prop_ccw_inverts_cw(img in image_strategy()) {
            let cw = apply_rotation(&img, RotateDirection::Clockwise);
            let back = apply_rotation(&cw, RotateDirection::CounterClockwise);
            prop_assert!(back.same_pixels(&img));
        }

        /// Property: Rotation swaps dimensions and preserves the buffer size.
        #[test]
        fn prop_dimensions_swapped(img in image_strategy()) {
            let rotated = apply_rotation(&img, RotateDirection::Clockwise);
            prop_assert_eq!(rotated.width(), img.height());
            prop_assert_eq!(rotated.height(), img.width());
            prop_assert_eq!(rotated.pixels().len(), img.pixels().len());
        }
    }
}
