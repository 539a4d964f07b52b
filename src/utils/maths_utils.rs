use argminmax::ArgMinMax;

/// Smallest and largest value of a non-empty slice. None when empty.
#[inline]
pub(crate) fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    let (min_index, max_index) = vec.argminmax();
    Some((vec[min_index], vec[max_index]))
}

#[inline]
pub(crate) fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sum of squared deviations from `centre`.
#[inline]
pub(crate) fn sum_sq_dev(data: &[f64], centre: f64) -> f64 {
    data.iter()
        .map(|value| {
            let diff = value - centre;
            diff * diff
        })
        .sum()
}

/// Nearest value with `decimals` places, exact ties to even (display rounding for warnings).
/// Works on the decimal expansion, so `0.125` gives `0.12`.
pub fn round_to(val: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, val).parse().unwrap_or(val)
}
