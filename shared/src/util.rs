/// Current UTC timestamp in milliseconds.
///
/// Also serves as the record id at creation time; two records created within
/// the same millisecond collide, which the registration flow tolerates.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
