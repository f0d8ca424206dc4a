//! One-shot webhook delivery. Failures are observed, not propagated: the
//! payload was already computed, and there is nobody left downstream to
//! hand a `Result` to once the HTTP response has already been sent.

use std::time::Duration;

use tracing::warn;

use crate::domain::Payload;

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn deliver(client: &reqwest::Client, url: &str, payload: &Payload) {
    let compute_id = payload.compute_id();

    let result = client
        .post(url)
        .timeout(DELIVERY_TIMEOUT)
        .json(payload)
        .send()
        .await;

    match result {
        Ok(response) if !response.status().is_success() => {
            warn!(
                compute_id,
                status = %response.status(),
                url,
                "webhook delivery rejected"
            );
        }
        Ok(_) => {}
        Err(error) => {
            warn!(compute_id, url, %error, "webhook delivery failed");
        }
    }
}
