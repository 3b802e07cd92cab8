//! Cluster intensity: a [0, 1] priority score for heat-map rendering.
//!
//! Three sub-scores are each saturated at 1.0 and then weighted:
//!
//! | factor                          | saturates at | weight |
//! |---------------------------------|--------------|--------|
//! | member count                    | 10 reports   | 0.5    |
//! | average upvotes per member      | 5 upvotes    | 0.3    |
//! | duplicate count across members  | 10           | 0.2    |

const COUNT_SATURATION: f64 = 10.0;
const UPVOTE_SATURATION: f64 = 5.0;
const DUPLICATE_SATURATION: f64 = 10.0;

const COUNT_WEIGHT: f64 = 0.5;
const UPVOTE_WEIGHT: f64 = 0.3;
const DUPLICATE_WEIGHT: f64 = 0.2;

/// Compute cluster intensity from its member count, average upvotes and
/// the summed duplicate count of its members.
///
/// Non-decreasing in every argument; an empty cluster scores 0.
pub fn intensity(member_count: usize, average_upvotes: f64, total_duplicates: usize) -> f64 {
    let count = (member_count as f64 / COUNT_SATURATION).min(1.0);
    let upvotes = (average_upvotes.max(0.0) / UPVOTE_SATURATION).min(1.0);
    let duplicates = (total_duplicates as f64 / DUPLICATE_SATURATION).min(1.0);

    let score = COUNT_WEIGHT * count + UPVOTE_WEIGHT * upvotes + DUPLICATE_WEIGHT * duplicates;
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(intensity(0, 0.0, 0), 0.0);
    }

    #[test]
    fn singleton_without_votes() {
        assert!(approx(intensity(1, 0.0, 0), 0.05));
    }

    #[test]
    fn saturates_at_one() {
        assert!(approx(intensity(10, 5.0, 10), 1.0));
        assert!(approx(intensity(500, 80.0, 1000), 1.0));
    }

    #[test]
    fn weighted_mix() {
        // 0.5 * 0.4 + 0.3 * 0.5 + 0.2 * 0.6
        assert!(approx(intensity(4, 2.5, 6), 0.47));
    }

    #[test]
    fn monotone_in_member_count() {
        let mut prev = intensity(0, 1.0, 2);
        for n in 1..25 {
            let next = intensity(n, 1.0, 2);
            assert!(next >= prev, "intensity dropped at n={n}");
            prev = next;
        }
    }

    #[test]
    fn nan_upvotes_do_not_escape() {
        let v = intensity(3, f64::NAN, 0);
        assert!((0.0..=1.0).contains(&v));
    }
}
