use serde::Serialize;

/// Coarse label for how well the model's ratings agree with the
/// score-ordered answers (answer1 had the highest Stack Overflow score).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Good,
    Mid,
    Bad,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Good => "good",
            Verdict::Mid => "mid",
            Verdict::Bad => "bad",
        }
    }
}

/// Classifies three ratings by pairwise ordering.
///
/// Branches are evaluated in order and ties resolve to the first branch that
/// matches, so this is not equivalent to sorting. NaN fails every comparison
/// and yields `None`.
pub fn classify(r1: f64, r2: f64, r3: f64) -> Option<Verdict> {
    if r1 >= r2 && r2 >= r3 {
        Some(Verdict::Good)
    } else if (r1 >= r3 && r3 >= r2) || (r2 >= r1 && r1 >= r3) || (r3 >= r2 && r2 >= r1) {
        Some(Verdict::Mid)
    } else if (r3 >= r1 && r1 >= r2) || (r2 >= r3 && r3 >= r1) {
        Some(Verdict::Bad)
    } else {
        None
    }
}

/// `classify` over coerced ratings; a missing rating counts as NaN.
///
/// Ratings are compared as numbers even when the model sent them as strings,
/// so `"10","9","8"` is good. A string-wise comparison would order "10"
/// below "9" and call the same ratings bad.
pub fn classify_ratings(ratings: [Option<f64>; 3]) -> Option<Verdict> {
    let [r1, r2, r3] = ratings.map(|r| r.unwrap_or(f64::NAN));
    classify(r1, r2, r3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_is_good() {
        assert_eq!(classify(9.0, 7.0, 3.0), Some(Verdict::Good));
        assert_eq!(classify(8.0, 6.0, 4.0), Some(Verdict::Good));
    }

    #[test]
    fn test_all_equal_is_good() {
        assert_eq!(classify(9.0, 9.0, 9.0), Some(Verdict::Good));
    }

    #[test]
    fn test_mid_orderings() {
        // r1 >= r3 >= r2
        assert_eq!(classify(9.0, 3.0, 7.0), Some(Verdict::Mid));
        // r2 >= r1 >= r3
        assert_eq!(classify(7.0, 9.0, 3.0), Some(Verdict::Mid));
        // r3 >= r2 >= r1
        assert_eq!(classify(3.0, 7.0, 9.0), Some(Verdict::Mid));
    }

    #[test]
    fn test_bad_orderings() {
        // r3 >= r1 >= r2
        assert_eq!(classify(7.0, 3.0, 9.0), Some(Verdict::Bad));
        // r2 >= r3 >= r1
        assert_eq!(classify(3.0, 9.0, 7.0), Some(Verdict::Bad));
    }

    #[test]
    fn test_ties_follow_branch_order() {
        // r2 == r3 > r1 matches r3 >= r2 >= r1 before r2 >= r3 >= r1
        assert_eq!(classify(3.0, 7.0, 7.0), Some(Verdict::Mid));
        // r1 == r3 < r2 matches r2 >= r1 >= r3 before r2 >= r3 >= r1
        assert_eq!(classify(3.0, 7.0, 3.0), Some(Verdict::Mid));
        // r1 == r2 < r3 matches r3 >= r2 >= r1 before r3 >= r1 >= r2
        assert_eq!(classify(3.0, 3.0, 7.0), Some(Verdict::Mid));
    }

    #[test]
    fn test_two_digit_ratings_compare_numerically() {
        assert_eq!(
            classify_ratings([Some(10.0), Some(9.0), Some(8.0)]),
            Some(Verdict::Good)
        );
    }

    #[test]
    fn test_nan_has_no_label() {
        assert_eq!(classify(f64::NAN, 5.0, 3.0), None);
        assert_eq!(classify_ratings([Some(8.0), None, Some(4.0)]), None);
    }

    #[test]
    fn test_verdict_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Verdict::Mid).unwrap(), "\"mid\"");
        assert_eq!(Verdict::Bad.as_str(), "bad");
    }
}
