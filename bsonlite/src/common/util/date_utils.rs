use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

#[inline]
pub fn get_current_time() -> Result<u128, SystemTimeError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
}

// Fast path: returns 0 on any error instead of double error handling
#[inline]
pub fn get_current_time_or_zero() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Current wall-clock time as whole seconds since the UNIX epoch.
#[inline]
pub fn get_current_seconds_or_zero() -> u64 {
    (get_current_time_or_zero() / 1000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_current_time() {
        let current_time = get_current_time_or_zero();
        // Check if the current time is a positive number
        assert!(current_time > 0);
    }

    #[test]
    fn test_get_current_time_result_ok() {
        let result = get_current_time();
        assert!(result.is_ok());
        assert!(result.unwrap() > 0);
    }

    #[test]
    fn test_get_current_seconds_matches_millis() {
        let seconds = get_current_seconds_or_zero();
        let millis = get_current_time_or_zero();
        let diff = (millis / 1000) as i128 - seconds as i128;
        // Two reads of the clock; at most one second apart
        assert!((0..=1).contains(&diff));
    }
}
