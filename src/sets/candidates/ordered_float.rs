use std::cmp::Ordering;

/// A path score with a total order.
///
/// `f64` is only `PartialOrd`, which is not enough to key a heap on. Scores are
/// therefore compared through [`f64::total_cmp`]: every finite score sorts before
/// positive infinity (the cost of an absent edge), and NaN sorts after everything so
/// a corrupted score can never surface as the minimum.
#[derive(Debug, Copy, Clone)]
#[repr(transparent)]
pub struct TotalF64(pub f64);

impl PartialEq for TotalF64 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
