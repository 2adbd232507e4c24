//! Status probe against a node's latest-randomness endpoint.

use crate::config::MalformedBodyPolicy;
use crate::poller::types::{PollError, PollResult, Randomness, Reachability};

/// Probe `url` once and classify the node.
///
/// Transport failures and non-2xx answers mean the node is down. A 2xx
/// answer whose body cannot be decoded is an error under
/// [`MalformedBodyPolicy::Fatal`] and a down node under
/// [`MalformedBodyPolicy::Unreachable`].
pub async fn probe(
    client: &reqwest::Client,
    url: &str,
    policy: MalformedBodyPolicy,
) -> PollResult<Reachability> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::info!(url = %url, error = %e, "Node is offline");
            return Ok(Reachability::Unreachable);
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::info!(url = %url, status = %status, "Node is offline: non-success status");
        return Ok(Reachability::Unreachable);
    }

    let decoded = match response.bytes().await {
        Ok(body) => serde_json::from_slice::<Randomness>(&body).map_err(|source| {
            PollError::MalformedBody {
                url: url.to_string(),
                source,
            }
        }),
        Err(source) => Err(PollError::BodyRead {
            url: url.to_string(),
            source,
        }),
    };

    match (decoded, policy) {
        (Ok(beacon), _) => {
            tracing::info!(randomness = %beacon.randomness, "Node is online");
            Ok(Reachability::Reachable)
        }
        (Err(e), MalformedBodyPolicy::Unreachable) => {
            tracing::warn!(error = %e, "Node answered with an unusable body, treating as offline");
            Ok(Reachability::Unreachable)
        }
        (Err(e), MalformedBodyPolicy::Fatal) => Err(e),
    }
}
