use crate::types::{Duration, RowError};

/// Parses a `[[hh:]mm:]ss` time string into a duration.
///
/// Missing leading segments are treated as zero, so `"45"` is 45 seconds and
/// `"1:05"` is one minute five seconds. Segments are positional, not range
/// checked: `"90"` means 90 seconds, not 1:30. More than three segments, any
/// segment that is not a non-negative integer, or a total past `u64::MAX`
/// seconds fails.
pub(crate) fn parse_time(text: &str) -> Result<Duration, RowError> {
    let segments: Vec<&str> = text.split(':').collect();
    if segments.len() > 3 {
        return Err(RowError::MalformedTime {
            text: text.to_string(),
        });
    }

    let mut parts = [0u64; 3];
    for (part, segment) in parts[3 - segments.len()..].iter_mut().zip(segments) {
        *part = segment.parse().map_err(|_| RowError::MalformedTime {
            text: text.to_string(),
        })?;
    }

    let [hours, minutes, seconds] = parts;
    hours
        .checked_mul(3600)
        .and_then(|total| total.checked_add(minutes.checked_mul(60)?))
        .and_then(|total| total.checked_add(seconds))
        .map(Duration::from_secs)
        .ok_or_else(|| RowError::MalformedTime {
            text: text.to_string(),
        })
}
