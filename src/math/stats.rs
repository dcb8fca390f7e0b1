use num_traits::ToPrimitive;

fn as_f64<N: ToPrimitive>(number: N) -> f64 {
    number.to_f64().unwrap_or(f64::NAN)
}

/// Sums any primitive numbers as [`f64`]s.
///
/// # Examples
/// ```
/// # use dzlib::math::sum;
/// assert_eq!(sum([1_u8, 2, 3]), 6.0);
/// assert_eq!(sum([0.5_f32, -1.5]), -1.0);
/// ```
pub fn sum<N: ToPrimitive, I: IntoIterator<Item = N>>(numbers: I) -> f64 {
    numbers.into_iter().map(as_f64).sum()
}

/// Multiplies any primitive numbers as [`f64`]s. The product of no numbers is 1.
pub fn product<N: ToPrimitive, I: IntoIterator<Item = N>>(numbers: I) -> f64 {
    numbers.into_iter().map(as_f64).product()
}

/// Returns the arithmetic mean, or [`f64::NAN`] if there are no numbers.
pub fn mean<N: ToPrimitive, I: IntoIterator<Item = N>>(numbers: I) -> f64 {
    let (total, count) = numbers
        .into_iter()
        .fold((0.0, 0_usize), |(total, count), n| (total + as_f64(n), count + 1));
    total / count as f64
}

/// Returns the population standard deviation, or [`f64::NAN`] if there are no numbers.
///
/// # Examples
/// ```
/// # use dzlib::math::stddev;
/// assert_eq!(stddev([2, 4, 4, 4, 5, 5, 7, 9]), 2.0);
/// assert!(stddev(Vec::<i32>::new()).is_nan());
/// ```
pub fn stddev<N: ToPrimitive, I: IntoIterator<Item = N>>(numbers: I) -> f64 {
    let values: Vec<f64> = numbers.into_iter().map(as_f64).collect();
    let mean = mean(values.iter().copied());
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
