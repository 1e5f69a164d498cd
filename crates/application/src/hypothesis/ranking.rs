//! Mid-rank assignment shared by the rank-based tests.

/// Relative tolerance under which two floats count as tied
const TIE_TOLERANCE: f64 = 1e-9;

/// Whether two values are equal up to floating-point round-off, e.g.
/// `0.84 - 0.68` and `0.86 - 0.70`.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TIE_TOLERANCE * a.abs().max(b.abs())
}

/// Ranks of a sample plus the sizes of its tie groups
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// 1-based mid-ranks, in the order of the input values
    pub ranks: Vec<f64>,
    /// Size of every tie group, singletons included
    pub tie_sizes: Vec<usize>,
}

impl Ranking {
    pub fn has_ties(&self) -> bool {
        self.tie_sizes.iter().any(|&t| t > 1)
    }

    /// `sum(t^3 - t)` over all tie groups
    pub fn tie_term(&self) -> f64 {
        self.tie_sizes
            .iter()
            .map(|&t| {
                let t = t as f64;
                t * t * t - t
            })
            .sum()
    }
}

/// Assign mid-ranks to `values`, ties receiving the average of the ranks
/// they span.
pub fn rank_with_ties(values: &[f64]) -> Ranking {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

    let mut ranks = vec![0.0; n];
    let mut tie_sizes = Vec::new();
    let mut start = 0;

    while start < n {
        let anchor = values[order[start]];
        let mut end = start + 1;
        while end < n && approx_eq(anchor, values[order[end]]) {
            end += 1;
        }

        // positions start..end hold ranks start+1 ..= end
        let mid_rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = mid_rank;
        }
        tie_sizes.push(end - start);
        start = end;
    }

    Ranking { ranks, tie_sizes }
}
