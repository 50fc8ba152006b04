use actix_web::HttpResponse;
use std::sync::atomic::{AtomicU64, Ordering};

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);
static PAIRS_CHECKED: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn add_pairs_checked(pairs: usize) {
    PAIRS_CHECKED.fetch_add(pairs as u64, Ordering::Relaxed);
}

fn render() -> String {
    format!(
        "# HELP http_requests_total Total number of HTTP requests\n\
         # TYPE http_requests_total counter\n\
         http_requests_total {}\n\
         \n\
         # HELP http_errors_total Total number of HTTP responses with a 4xx or 5xx status\n\
         # TYPE http_errors_total counter\n\
         http_errors_total {}\n\
         \n\
         # HELP interaction_pairs_checked_total Drug pairs resolved by /check-interaction\n\
         # TYPE interaction_pairs_checked_total counter\n\
         interaction_pairs_checked_total {}\n",
        REQUEST_COUNT.load(Ordering::Relaxed),
        ERROR_COUNT.load(Ordering::Relaxed),
        PAIRS_CHECKED.load(Ordering::Relaxed),
    )
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus text exposition", content_type = "text/plain")
    )
)]
pub async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(text: &str, name: &str) -> u64 {
        text.lines()
            .find_map(|line| line.strip_prefix(&format!("{} ", name)))
            .and_then(|value| value.parse().ok())
            .unwrap()
    }

    #[test]
    fn test_render_exposes_counters() {
        let before = counter(&render(), "interaction_pairs_checked_total");
        add_pairs_checked(3);
        let after = counter(&render(), "interaction_pairs_checked_total");

        // Counters are process-wide; other tests may bump them concurrently
        assert!(after >= before + 3);
        assert!(render().contains("# TYPE http_requests_total counter"));
    }
}
