use std::sync::OnceLock;
use std::time::Instant;

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Returns the number of milliseconds since this function (or [`time_difference`]) was first
/// called.
///
/// The clock is monotonic, so it is suitable for measuring intervals but has no relation to
/// wall-clock time.
pub fn current_time_millis() -> u64 {
    let elapsed = EPOCH.get_or_init(Instant::now).elapsed().as_millis();
    u64::try_from(elapsed).unwrap_or(u64::MAX)
}

/// Returns the number of milliseconds between `from`, an earlier result of
/// [`current_time_millis`], and now.
pub fn time_difference(from: u64) -> u64 {
    current_time_millis().abs_diff(from)
}
