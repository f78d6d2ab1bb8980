// Standard library
use std::sync::Arc;

// 3rd party crates
use futures::future::join_all;
use reqwest::StatusCode;
use tracing::{debug, warn};

// Current module imports
use super::constants::DEFAULT_SERVICES;
use super::errors::IpDetectionError;
use super::types::{Address, Endpoint, EndpointResult, RetrieverContext};

/// Builds the built-in endpoint list.
pub fn default_endpoints() -> Vec<Arc<Endpoint>> {
    DEFAULT_SERVICES
        .iter()
        .map(|service| {
            Arc::new(match service.json_field {
                Some(field) => Endpoint::json(service.url, field),
                None => Endpoint::plain_text(service.url),
            })
        })
        .collect()
}

/// Issues one GET to the endpoint and extracts an address from a 200 body.
async fn query_endpoint(
    endpoint: &Endpoint,
    context: &RetrieverContext,
) -> Result<Address, IpDetectionError> {
    let response = context
        .client
        .get(&endpoint.url)
        .timeout(context.timeout)
        .send()
        .await
        .map_err(|error| IpDetectionError::NetworkError {
            service: endpoint.url.clone(),
            error,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(IpDetectionError::UnexpectedStatus {
            service: endpoint.url.clone(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|error| IpDetectionError::NetworkError {
            service: endpoint.url.clone(),
            error,
        })?;

    match endpoint.extractor.extract(&body) {
        Some(ip) => Ok(Address::new(ip)),
        None => Err(IpDetectionError::InvalidResponse {
            service: endpoint.url.clone(),
            response: body,
        }),
    }
}

/// Queries a single endpoint. Any failure is logged and turned into a result
/// without an address; it never escapes to the caller.
pub async fn retrieve(endpoint: Arc<Endpoint>, context: &RetrieverContext) -> EndpointResult {
    match query_endpoint(&endpoint, context).await {
        Ok(address) => {
            debug!(
                endpoint = %endpoint.url,
                ip = %address.ip,
                "Endpoint reported address"
            );
            EndpointResult {
                address: Some(address),
                endpoint,
            }
        }
        Err(e) => {
            warn!(endpoint = %endpoint.url, "Run into error making API call: {}", e);
            EndpointResult::failed(endpoint)
        }
    }
}

/// Queries all endpoints concurrently over the shared client and waits for
/// every call to finish. Results keep the order of `endpoints`.
pub async fn retrieve_all(
    endpoints: &[Arc<Endpoint>],
    context: &RetrieverContext,
) -> Vec<EndpointResult> {
    debug!(
        count = endpoints.len(),
        timeout = ?context.timeout,
        "Querying endpoints"
    );

    let results: Vec<EndpointResult> = join_all(
        endpoints
            .iter()
            .map(|endpoint| retrieve(Arc::clone(endpoint), context)),
    )
    .await;

    let succeeded = results.iter().filter(|r| r.address.is_some()).count();
    debug!(
        succeeded,
        failed = results.len() - succeeded,
        "All endpoint calls completed"
    );

    results
}
