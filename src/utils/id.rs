use chrono::{DateTime, Utc};

/// Time-derived identifier: epoch milliseconds of `at`, bumped past any id
/// already taken so back-to-back calls within one millisecond stay unique.
pub fn next_candidate_id<'a, I>(at: DateTime<Utc>, taken: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: std::collections::HashSet<&str> = taken.into_iter().collect();
    let mut millis = at.timestamp_millis();
    loop {
        let id = millis.to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
        millis += 1;
    }
}
