//! Header-based tier routing

/// Number of tiers in a [`Cache`](crate::Cache)
pub const TIER_COUNT: usize = 3;

/// Map a header to a tier index in `0..tiers`
///
/// Sums the code point of every `char` in `header` and reduces it modulo
/// `tiers`. An empty header sums to 0.
///
/// # Panics
/// Panics if `tiers` is 0.
pub fn routing_key(header: &str, tiers: usize) -> usize {
    assert!(tiers > 0, "Tier count must be greater than 0");

    let total: u64 = header.chars().map(|c| u64::from(u32::from(c))).sum();
    (total % tiers as u64) as usize
}
