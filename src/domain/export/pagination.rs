//! Slicing one tall image across fixed-size pages.
//!
//! The image is scaled to the page width and drawn whole on every page,
//! shifted up by the height already shown, so each page reveals the next
//! slice. Pages are added while the remaining height is `>= 0`, which emits
//! one trailing page when the scaled height is an exact multiple of the page
//! height.

use super::page::PageSize;

/// Pixel size of the captured image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Where the image goes on each page.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationPlan {
    pub page: PageSize,
    /// Image height after fitting to the page width, in mm.
    pub scaled_height_mm: f64,
    /// Vertical image offset per page in mm; 0 on page 1, negative after.
    pub offsets_mm: Vec<f64>,
}

impl PaginationPlan {
    /// Plans pages for an image; `None` for a zero-sized image.
    pub fn for_image(image: ImageDimensions, page: PageSize) -> Option<Self> {
        if image.width == 0 || image.height == 0 {
            return None;
        }

        let page_width = page.width_mm();
        let page_height = page.height_mm();
        let scaled_height = f64::from(image.height) * page_width / f64::from(image.width);

        let mut offsets = vec![0.0];
        let mut remaining = scaled_height - page_height;
        while remaining >= 0.0 {
            offsets.push(remaining - scaled_height);
            remaining -= page_height;
        }

        Some(Self {
            page,
            scaled_height_mm: scaled_height,
            offsets_mm: offsets,
        })
    }

    pub fn page_count(&self) -> usize {
        self.offsets_mm.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn plan(width: u32, height: u32) -> PaginationPlan {
        PaginationPlan::for_image(ImageDimensions { width, height }, PageSize::A4).unwrap()
    }

    #[test]
    fn short_image_fits_one_page() {
        let p = plan(1000, 1000);
        assert_eq!(p.page_count(), 1);
        assert_eq!(p.offsets_mm, vec![0.0]);
    }

    #[test]
    fn two_point_three_pages_emit_three() {
        // 2100 px fit to 210 mm is 10 px per mm, so 683.1 mm is 2.3 × 297 mm.
        let p = PaginationPlan::for_image(ImageDimensions { width: 2100, height: 6831 }, PageSize::A4)
            .unwrap();
        assert!((p.scaled_height_mm - 2.3 * 297.0).abs() < 1e-9);
        assert_eq!(p.page_count(), 3);
    }

    #[test]
    fn offsets_shift_by_one_page_each() {
        let p = plan(2100, 6831);
        assert_eq!(p.offsets_mm[0], 0.0);
        assert!((p.offsets_mm[1] + 297.0).abs() < 1e-9);
        assert!((p.offsets_mm[2] + 594.0).abs() < 1e-9);
    }

    #[test]
    fn exact_multiple_emits_trailing_page() {
        let p = plan(210, 594);
        assert_eq!(p.page_count(), 3);
    }

    #[test]
    fn exactly_one_page_emits_two() {
        let p = plan(210, 297);
        assert_eq!(p.page_count(), 2);
    }

    #[test]
    fn zero_sized_image_has_no_plan() {
        assert!(PaginationPlan::for_image(ImageDimensions { width: 0, height: 10 }, PageSize::A4)
            .is_none());
        assert!(PaginationPlan::for_image(ImageDimensions { width: 10, height: 0 }, PageSize::A4)
            .is_none());
    }

    proptest! {
        #[test]
        fn page_count_is_floor_of_ratio_plus_one(width in 100u32..4000, height in 1u32..40000) {
            let p = plan(width, height);
            let ratio = p.scaled_height_mm / 297.0;
            let expected = ratio.floor() as usize + 1;
            // Float accumulation may move an exact boundary by one page.
            let diff = (p.page_count() as i64 - expected as i64).abs();
            prop_assert!(diff <= 1);
        }

        #[test]
        fn offsets_strictly_decrease(width in 100u32..4000, height in 1u32..40000) {
            let p = plan(width, height);
            for pair in p.offsets_mm.windows(2) {
                prop_assert!(pair[1] < pair[0]);
            }
        }
    }
}
