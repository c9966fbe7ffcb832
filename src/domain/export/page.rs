//! Page geometry in millimetres.

/// PDF points per millimetre.
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Portrait page size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    width_mm: f64,
    height_mm: f64,
}

impl PageSize {
    /// ISO A4 portrait, 210 × 297 mm.
    pub const A4: PageSize = PageSize {
        width_mm: 210.0,
        height_mm: 297.0,
    };

    /// Returns `None` unless both sides are finite and positive.
    pub fn new(width_mm: f64, height_mm: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width_mm) && valid(height_mm) {
            Some(Self { width_mm, height_mm })
        } else {
            None
        }
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    pub fn width_pt(&self) -> f64 {
        self.width_mm * POINTS_PER_MM
    }

    pub fn height_pt(&self) -> f64 {
        self.height_mm * POINTS_PER_MM
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_in_points() {
        assert!((PageSize::A4.width_pt() - 595.28).abs() < 0.01);
        assert!((PageSize::A4.height_pt() - 841.89).abs() < 0.01);
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(PageSize::new(0.0, 297.0).is_none());
        assert!(PageSize::new(210.0, -1.0).is_none());
        assert!(PageSize::new(f64::NAN, 297.0).is_none());
        assert!(PageSize::new(100.0, 100.0).is_some());
    }
}
