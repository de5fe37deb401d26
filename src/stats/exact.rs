//! Exact two-sided p-value of the two-sample KS statistic
//!
//! Under the null hypothesis every interleaving of the two sorted samples is
//! equally likely, which maps each outcome to a monotone lattice path from
//! `(0, 0)` to `(m, n)`. Point `(i, j)` means `i` values of the first sample
//! and `j` of the second have been passed, so the ECDF gap there is
//! `|i/m - j/n|`. The p-value `P(D >= d)` is the probability that a uniformly
//! random path touches a point with gap `>= d`.
//!
//! Probability mass is pushed forward row by row instead of counting paths,
//! so nothing overflows. Mass reaching an outside point is added to the
//! result and dropped, which counts each path once at its first exit and
//! keeps tiny p-values accurate.

/// Probability that a random interleaving reaches an ECDF gap of at least `d`
///
/// `d` is snapped to the lattice of attainable values before the walk. The
/// band test runs on integers: a point is outside when `|i*n - j*m| >= h`
/// with `h = round(d*m*n)`.
pub fn two_sided_p_value(m: usize, n: usize, d: f64) -> f64 {
    if m == 0 || n == 0 {
        return 1.0;
    }

    let (m64, n64) = (m as u64, n as u64);
    let h = (d * m as f64 * n as f64).round();
    if h <= 0.0 {
        return 1.0;
    }
    let h = h as u64;
    let outside = |i: u64, j: u64| (i * n64).abs_diff(j * m64) >= h;

    let mut row = vec![0.0f64; n + 1];
    let mut exit_mass = 0.0f64;

    // i = 0: only moves along the second sample
    row[0] = 1.0;
    for j in 1..=n {
        let remaining_b = (n - j + 1) as f64;
        let mass = row[j - 1] * remaining_b / (m as f64 + remaining_b);
        if outside(0, j as u64) {
            exit_mass += mass;
            row[j] = 0.0;
        } else {
            row[j] = mass;
        }
    }

    for i in 1..=m {
        // Step probabilities out of row i-1 (vertical) and along row i (horizontal)
        let remaining_a_prev = (m - i + 1) as f64;
        let remaining_a = (m - i) as f64;

        let mass = row[0] * remaining_a_prev / (remaining_a_prev + n as f64);
        if outside(i as u64, 0) {
            exit_mass += mass;
            row[0] = 0.0;
        } else {
            row[0] = mass;
        }

        for j in 1..=n {
            let remaining_b = (n - j) as f64;
            let from_prev_row = row[j] * remaining_a_prev / (remaining_a_prev + remaining_b);
            let from_left = row[j - 1] * (remaining_b + 1.0) / (remaining_a + remaining_b + 1.0);
            let mass = from_prev_row + from_left;

            if outside(i as u64, j as u64) {
                exit_mass += mass;
                row[j] = 0.0;
            } else {
                row[j] = mass;
            }
        }
    }

    exit_mass
}
