use super::*;

fn stat(request_tokens: i64, response_tokens: i64, request_count: i64) -> UsageStat {
    UsageStat {
        id: 1,
        user_id: "u-1".to_owned(),
        model_id: "m-1".to_owned(),
        request_tokens,
        response_tokens,
        request_count,
        response_count: 1,
        duration_ms: 100,
        stat_type: "chat".to_owned(),
        timestamp: "2025-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn totals_over_empty_stats_are_zero() {
    assert_eq!(total_requests(&[]), 0);
    assert_eq!(total_tokens(&[]), 0);
}

#[test]
fn total_requests_sums_request_counts() {
    let records = [stat(1, 1, 3), stat(1, 1, 4)];
    assert_eq!(total_requests(&records), 7);
}

#[test]
fn total_tokens_sums_both_directions() {
    let records = [stat(10, 20, 1), stat(5, 5, 1)];
    assert_eq!(total_tokens(&records), 40);
}
