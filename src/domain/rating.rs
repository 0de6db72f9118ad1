/*
 * Responsibility
 * - Rating value type: five sub-scores, each 1..=5
 * - Overall score (equal-weight mean, one decimal)
 * - Aggregation of many ratings into per-dimension means
 */
use serde::Serialize;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    pub acidity: u8,
    pub sweetness: u8,
    pub body: u8,
    pub aroma: u8,
    pub balance: u8,
}

impl Rating {
    pub fn validate(&self) -> Result<(), &'static str> {
        let in_range = self
            .scores()
            .iter()
            .all(|&s| (MIN_SCORE..=MAX_SCORE).contains(&s));
        if in_range {
            Ok(())
        } else {
            Err("every score must be between 1 and 5")
        }
    }

    fn scores(&self) -> [u8; 5] {
        [self.acidity, self.sweetness, self.body, self.aroma, self.balance]
    }

    /// Equal-weight mean of the five sub-scores, rounded to one decimal.
    pub fn overall(&self) -> f64 {
        let sum: u32 = self.scores().iter().map(|&s| u32::from(s)).sum();
        round1(f64::from(sum) / 5.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub total: usize,
    pub acidity: f64,
    pub sweetness: f64,
    pub body: f64,
    pub aroma: f64,
    pub balance: f64,
    pub overall: f64,
}

impl RatingSummary {
    pub fn empty() -> Self {
        Self {
            total: 0,
            acidity: 0.0,
            sweetness: 0.0,
            body: 0.0,
            aroma: 0.0,
            balance: 0.0,
            overall: 0.0,
        }
    }
}

/// Per-dimension arithmetic means over a list of ratings, one decimal each.
/// `overall` is the mean of the per-rating overall scores. An empty list
/// yields all zeros with total 0.
pub fn aggregate(ratings: &[Rating]) -> RatingSummary {
    if ratings.is_empty() {
        return RatingSummary::empty();
    }
    let n = ratings.len() as f64;
    let mean = |pick: fn(&Rating) -> u8| -> f64 {
        round1(ratings.iter().map(|r| f64::from(pick(r))).sum::<f64>() / n)
    };
    RatingSummary {
        total: ratings.len(),
        acidity: mean(|r| r.acidity),
        sweetness: mean(|r| r.sweetness),
        body: mean(|r| r.body),
        aroma: mean(|r| r.aroma),
        balance: mean(|r| r.balance),
        overall: round1(ratings.iter().map(Rating::overall).sum::<f64>() / n),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(scores: [u8; 5]) -> Rating {
        Rating {
            acidity: scores[0],
            sweetness: scores[1],
            body: scores[2],
            aroma: scores[3],
            balance: scores[4],
        }
    }

    #[test]
    fn overall_is_the_rounded_mean() {
        assert!((rating([5, 4, 4, 5, 4]).overall() - 4.4).abs() < 1e-9);
        assert!((rating([5, 5, 5, 5, 5]).overall() - 5.0).abs() < 1e-9);
        assert!((rating([1, 1, 1, 1, 2]).overall() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn aggregate_means_per_dimension() {
        let summary = aggregate(&[rating([5, 4, 3, 4, 4]), rating([3, 5, 4, 5, 5])]);
        assert_eq!(summary.total, 2);
        assert!((summary.acidity - 4.0).abs() < 1e-9);
        assert!((summary.sweetness - 4.5).abs() < 1e-9);
        assert!((summary.body - 3.5).abs() < 1e-9);
        assert!(summary.overall > 0.0);
    }

    #[test]
    fn aggregate_of_nothing_is_zeros() {
        let summary = aggregate(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.overall, 0.0);
        assert_eq!(summary.acidity, 0.0);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(rating([1, 5, 3, 2, 4]).validate().is_ok());
        assert!(rating([0, 5, 3, 2, 4]).validate().is_err());
        assert!(rating([1, 6, 3, 2, 4]).validate().is_err());
    }
}
