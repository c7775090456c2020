//! Request metrics, labelled by API resource family.
//!
//! MailerLite rate-limits per account, so `429` replies get their own counter
//! next to the per-resource request totals.

use super::TransportRequest;
use crate::ErrorKind;
use http::StatusCode;
use std::time::Duration;

/// Labels shared by every metric of one request.
pub(crate) struct RequestLabels {
    method: metrics::SharedString,
    resource: &'static str,
}

impl RequestLabels {
    pub(crate) fn of(req: &TransportRequest) -> Self {
        Self {
            method: req.method.as_str().to_owned().into(),
            resource: req.resource,
        }
    }
}

/// Keeps `mailerlite_sdk_inflight{resource}` raised while a request is running.
pub(crate) struct InFlightGuard {
    gauge: metrics::Gauge,
}

impl InFlightGuard {
    pub(crate) fn new(labels: &RequestLabels) -> Self {
        let gauge = metrics::gauge!("mailerlite_sdk_inflight", "resource" => labels.resource);
        gauge.increment(1.0);
        Self { gauge }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.gauge.decrement(1.0);
    }
}

fn outcome_label(status: Option<StatusCode>, error: Option<ErrorKind>) -> &'static str {
    match (status, error) {
        (Some(status), _) if status.is_success() => "success",
        (Some(StatusCode::TOO_MANY_REQUESTS), _) => "rate_limited",
        (Some(status), _) if status.is_client_error() => "client_error",
        (Some(status), _) if status.is_server_error() => "server_error",
        (Some(_), _) => "other",
        (None, Some(ErrorKind::InvalidConfig)) => "invalid_config",
        (None, _) => "transport_error",
    }
}

/// Record one finished request. `status` is `None` when no reply arrived.
pub(crate) fn record_outcome(
    labels: &RequestLabels,
    status: Option<StatusCode>,
    latency: Duration,
    error: Option<ErrorKind>,
) {
    let outcome = outcome_label(status, error);
    let resource = labels.resource;

    metrics::counter!(
        "mailerlite_sdk_requests_total",
        "resource" => resource,
        "method" => labels.method.clone(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!(
        "mailerlite_sdk_request_duration_seconds",
        "resource" => resource,
        "method" => labels.method.clone()
    )
    .record(latency);

    if status == Some(StatusCode::TOO_MANY_REQUESTS) {
        metrics::counter!("mailerlite_sdk_rate_limited_total", "resource" => resource)
            .increment(1);
    }

    if error.is_some() {
        metrics::counter!(
            "mailerlite_sdk_errors_total",
            "resource" => resource,
            "outcome" => outcome
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_split_rate_limits_from_other_client_errors() {
        assert_eq!(outcome_label(Some(StatusCode::CREATED), None), "success");
        assert_eq!(
            outcome_label(Some(StatusCode::TOO_MANY_REQUESTS), None),
            "rate_limited"
        );
        assert_eq!(
            outcome_label(Some(StatusCode::UNPROCESSABLE_ENTITY), None),
            "client_error"
        );
        assert_eq!(
            outcome_label(Some(StatusCode::BAD_GATEWAY), None),
            "server_error"
        );
        assert_eq!(
            outcome_label(None, Some(ErrorKind::Transport)),
            "transport_error"
        );
        assert_eq!(
            outcome_label(None, Some(ErrorKind::InvalidConfig)),
            "invalid_config"
        );
    }
}
