//! Pure projections from store state to render payloads
//!
//! Each adapter is a function of `(readings, view state)` and retains
//! nothing; the panels re-read the store through them after every mutation.

pub mod chart;
pub mod map;
pub mod table;

use egui::Color32;

/// Temperature buckets shared by the map markers and the table tint.
///
/// Total over all inputs: every finite temperature lands in exactly one
/// bucket, boundaries belong to the higher bucket, and an unparseable value
/// falls through to `Cold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempBucket {
    Hot,
    Warm,
    Mild,
    Cool,
    Cold,
}

impl TempBucket {
    pub fn for_temperature(temp: Option<f64>) -> Self {
        match temp {
            Some(t) if t >= 30.0 => TempBucket::Hot,
            Some(t) if t >= 25.0 => TempBucket::Warm,
            Some(t) if t >= 20.0 => TempBucket::Mild,
            Some(t) if t >= 15.0 => TempBucket::Cool,
            _ => TempBucket::Cold,
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            TempBucket::Hot => Color32::from_rgb(0xEF, 0x44, 0x44),
            TempBucket::Warm => Color32::from_rgb(0xF5, 0x9E, 0x0B),
            TempBucket::Mild => Color32::from_rgb(0x10, 0xB9, 0x81),
            TempBucket::Cool => Color32::from_rgb(0x0E, 0xA5, 0xE9),
            TempBucket::Cold => Color32::from_rgb(0x1E, 0x40, 0xAF),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_higher_bucket() {
        assert_eq!(TempBucket::for_temperature(Some(30.0)), TempBucket::Hot);
        assert_eq!(TempBucket::for_temperature(Some(25.0)), TempBucket::Warm);
        assert_eq!(TempBucket::for_temperature(Some(20.0)), TempBucket::Mild);
        assert_eq!(TempBucket::for_temperature(Some(15.0)), TempBucket::Cool);
        assert_eq!(TempBucket::for_temperature(Some(14.999)), TempBucket::Cold);
    }

    #[test]
    fn bucketing_is_total() {
        for t in [-60.0, -0.1, 0.0, 12.3, 19.9, 24.9, 29.9, 45.0, 1e9] {
            // Must map every finite input to exactly one bucket, no panic.
            let _ = TempBucket::for_temperature(Some(t));
        }
        assert_eq!(TempBucket::for_temperature(None), TempBucket::Cold);
    }
}
