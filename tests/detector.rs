use std::sync::Arc;
use std::time::Duration;

use ifconfig_me::utility::ip_detector::errors::IpDetectionError;
use ifconfig_me::utility::ip_detector::types::{Endpoint, IpDetector};
use ifconfig_me::utility::vote::types::{FamilyFilter, RankingEntry, VoteOptions};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IPV4: &str = "127.0.0.1";
const IPV4_OTHER: &str = "127.0.0.2";
const IPV6: &str = "2001:0db8:85a3:0000:0000:8a2e:0370:7334";

async fn serve(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn text_endpoint(server: &MockServer, route: &str) -> Arc<Endpoint> {
    Arc::new(Endpoint::plain_text(format!("{}{}", server.uri(), route)))
}

fn detector(endpoints: Vec<Arc<Endpoint>>) -> IpDetector {
    IpDetector::new(endpoints, Duration::from_secs(5)).expect("build detector")
}

fn with_statistics() -> VoteOptions {
    VoteOptions {
        include_statistics: true,
        ..VoteOptions::default()
    }
}

fn summary(statistics: &[RankingEntry]) -> Vec<(String, usize, Vec<String>)> {
    statistics
        .iter()
        .map(|entry| {
            (
                entry.address.ip.clone(),
                entry.weight,
                entry.endpoints.iter().map(|e| e.url.clone()).collect(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_detect_default_options() {
    let server = MockServer::start().await;
    serve(&server, "/ip", 200, IPV4).await;

    let outcome = detector(vec![text_endpoint(&server, "/ip")])
        .detect(&VoteOptions::default())
        .await
        .expect("detect");

    assert_eq!(outcome.ip, IPV4);
    assert!(outcome.statistics.is_empty());
}

#[tokio::test]
async fn test_detect_returns_statistics() {
    let server = MockServer::start().await;
    serve(&server, "/one", 200, IPV4).await;
    serve(&server, "/two", 200, &format!("{}\n", IPV4)).await;

    let one = text_endpoint(&server, "/one");
    let two = text_endpoint(&server, "/two");
    let outcome = detector(vec![Arc::clone(&one), Arc::clone(&two)])
        .detect(&with_statistics())
        .await
        .expect("detect");

    assert_eq!(outcome.ip, IPV4);
    assert_eq!(
        summary(&outcome.statistics),
        vec![(IPV4.to_string(), 2, vec![one.url.clone(), two.url.clone()])]
    );
}

#[tokio::test]
async fn test_most_common_ip_wins() {
    let server = MockServer::start().await;
    serve(&server, "/one", 200, IPV4).await;
    serve(&server, "/two", 200, IPV4_OTHER).await;

    let one = text_endpoint(&server, "/one");
    let two = text_endpoint(&server, "/two");
    let outcome = detector(vec![
        Arc::clone(&one),
        Arc::clone(&two),
        Arc::clone(&two),
        Arc::clone(&two),
    ])
    .detect(&with_statistics())
    .await
    .expect("detect");

    assert_eq!(outcome.ip, IPV4_OTHER);
    assert_eq!(
        summary(&outcome.statistics),
        vec![
            (
                IPV4_OTHER.to_string(),
                3,
                vec![two.url.clone(), two.url.clone(), two.url.clone()]
            ),
            (IPV4.to_string(), 1, vec![one.url.clone()]),
        ]
    );
}

#[tokio::test]
async fn test_ipv6_only_filter() {
    let server = MockServer::start().await;
    serve(&server, "/v4", 200, IPV4).await;
    serve(&server, "/v6", 200, IPV6).await;

    let v4 = text_endpoint(&server, "/v4");
    let v6 = text_endpoint(&server, "/v6");
    let options = VoteOptions {
        family: FamilyFilter::Ipv6Only,
        ..with_statistics()
    };

    let outcome = detector(vec![Arc::clone(&v4), Arc::clone(&v4), Arc::clone(&v6)])
        .detect(&options)
        .await
        .expect("detect");

    assert_eq!(outcome.ip, IPV6);
    assert_eq!(
        summary(&outcome.statistics),
        vec![(IPV6.to_string(), 1, vec![v6.url.clone()])]
    );
}

#[tokio::test]
async fn test_ipv6_only_without_ipv6_answers_fails() {
    let server = MockServer::start().await;
    serve(&server, "/v4", 200, IPV4).await;

    let result = detector(vec![text_endpoint(&server, "/v4")])
        .detect(&VoteOptions {
            family: FamilyFilter::Ipv6Only,
            ..VoteOptions::default()
        })
        .await;

    assert!(matches!(result, Err(IpDetectionError::NoIpDetected)));
}

#[tokio::test]
async fn test_prefer_ipv4_on_equal_weight() {
    let server = MockServer::start().await;
    serve(&server, "/v4", 200, IPV4).await;
    serve(&server, "/v6", 200, IPV6).await;

    let outcome = detector(vec![
        text_endpoint(&server, "/v4"),
        text_endpoint(&server, "/v6"),
    ])
    .detect(&with_statistics())
    .await
    .expect("detect");

    // IPV6 sorts above IPV4 as a string, so only the family preference decides.
    assert!(IPV6 > IPV4);
    assert_eq!(outcome.ip, IPV4);
    assert_eq!(outcome.statistics.len(), 2);
    assert_eq!(outcome.statistics[1].address.ip, IPV6);
}

#[tokio::test]
async fn test_prefer_ipv6_on_equal_weight() {
    let server = MockServer::start().await;
    serve(&server, "/v4", 200, IPV4).await;
    serve(&server, "/v6", 200, IPV6).await;

    let options = VoteOptions {
        prefer_ipv6: true,
        ..with_statistics()
    };
    let outcome = detector(vec![
        text_endpoint(&server, "/v4"),
        text_endpoint(&server, "/v6"),
    ])
    .detect(&options)
    .await
    .expect("detect");

    assert_eq!(outcome.ip, IPV6);
    assert_eq!(outcome.statistics[1].address.ip, IPV4);
}

#[tokio::test]
async fn test_prefer_ipv6_loses_to_higher_weight() {
    let server = MockServer::start().await;
    serve(&server, "/v4", 200, IPV4).await;
    serve(&server, "/v6", 200, IPV6).await;

    let v4 = text_endpoint(&server, "/v4");
    let options = VoteOptions {
        prefer_ipv6: true,
        ..with_statistics()
    };
    let outcome = detector(vec![
        Arc::clone(&v4),
        Arc::clone(&v4),
        text_endpoint(&server, "/v6"),
    ])
    .detect(&options)
    .await
    .expect("detect");

    assert_eq!(outcome.ip, IPV4);
    assert_eq!(outcome.statistics[0].weight, 2);
    assert_eq!(outcome.statistics[1].weight, 1);
}

#[tokio::test]
async fn test_failed_call_is_ignored() {
    let server = MockServer::start().await;
    // The first request to hit the server gets a 404, the rest succeed.
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(404).set_body_string(IPV4))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    serve(&server, "/ip", 200, IPV4).await;

    let endpoint = text_endpoint(&server, "/ip");
    let outcome = detector(vec![
        Arc::clone(&endpoint),
        Arc::clone(&endpoint),
        Arc::clone(&endpoint),
    ])
    .detect(&with_statistics())
    .await
    .expect("detect");

    assert_eq!(outcome.ip, IPV4);
    assert_eq!(
        summary(&outcome.statistics),
        vec![(IPV4.to_string(), 2, vec![endpoint.url.clone(), endpoint.url.clone()])]
    );
}

#[tokio::test]
async fn test_timeout_does_not_block_other_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(IPV4_OTHER)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    serve(&server, "/fast", 200, IPV4).await;

    let detector = IpDetector::new(
        vec![text_endpoint(&server, "/slow"), text_endpoint(&server, "/fast")],
        Duration::from_millis(300),
    )
    .expect("build detector");

    let results = detector.retrieve_all().await;
    assert_eq!(results.len(), 2);
    assert!(results[0].address.is_none());
    assert_eq!(
        results[1].address.as_ref().map(|a| a.ip.as_str()),
        Some(IPV4)
    );

    let outcome = detector.detect(&VoteOptions::default()).await.expect("detect");
    assert_eq!(outcome.ip, IPV4);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_ignored() {
    let server = MockServer::start().await;
    serve(&server, "/ip", 200, IPV4).await;

    let outcome = detector(vec![
        Arc::new(Endpoint::plain_text("http://127.0.0.1:1/ip")),
        text_endpoint(&server, "/ip"),
    ])
    .detect(&VoteOptions::default())
    .await
    .expect("detect");

    assert_eq!(outcome.ip, IPV4);
}

#[tokio::test]
async fn test_json_endpoints() {
    let server = MockServer::start().await;
    serve(&server, "/httpbin", 200, r#"{"origin": "198.51.100.7"}"#).await;
    serve(&server, "/ipify", 200, r#"{"ip": " 198.51.100.7 "}"#).await;
    serve(&server, "/broken", 200, "<html>oops</html>").await;

    let base = server.uri();
    let broken = Arc::new(Endpoint::json(format!("{}/broken", base), "ip"));
    let detector = detector(vec![
        Arc::new(Endpoint::json(format!("{}/httpbin", base), "origin")),
        Arc::new(Endpoint::json(format!("{}/ipify", base), "ip")),
        Arc::clone(&broken),
    ]);

    let results = detector.retrieve_all().await;
    assert!(results[2].address.is_none());
    assert_eq!(results[2].endpoint.url, broken.url);

    let outcome = detector.detect(&with_statistics()).await.expect("detect");
    assert_eq!(outcome.ip, "198.51.100.7");
    assert_eq!(outcome.statistics[0].weight, 2);
}

#[tokio::test]
async fn test_custom_extractor() {
    let server = MockServer::start().await;
    serve(&server, "/trace", 200, "fl=1\nip=192.0.2.44\nts=0\n").await;

    let endpoint = Endpoint::with_extractor(format!("{}/trace", server.uri()), |body: &str| {
        body.lines()
            .find_map(|line| line.strip_prefix("ip="))
            .map(str::to_string)
    });

    let outcome = detector(vec![Arc::new(endpoint)])
        .detect(&VoteOptions::default())
        .await
        .expect("detect");

    assert_eq!(outcome.ip, "192.0.2.44");
}

#[tokio::test]
async fn test_no_successful_call() {
    let server = MockServer::start().await;
    serve(&server, "/missing", 404, IPV4).await;
    serve(&server, "/error", 500, "").await;

    let result = detector(vec![
        text_endpoint(&server, "/missing"),
        text_endpoint(&server, "/error"),
    ])
    .detect(&VoteOptions::default())
    .await;

    assert!(matches!(result, Err(IpDetectionError::NoIpDetected)));
}
