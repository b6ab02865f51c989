//! `ExplorerClient` requests and envelope handling against a mock explorer

use explorer_query::{
    ExplorerClient, ExplorerConfig, FetchError, QueryFetcher, SharedClient, SortOrder,
    TransactionListQuery,
};
use mockito::{Matcher, Server, ServerGuard};

const ADDRESS: &str = "0x8bea96dbe7c85127a68ad6916949670eb5c45e9c";
const API_KEY: &str = "TESTKEY";

fn client_for(server: &ServerGuard) -> ExplorerClient {
    let config = ExplorerConfig::new(format!("{}/api", server.url()), API_KEY);
    ExplorerClient::new(config, QueryFetcher::new(SharedClient::default()))
}

fn encoded(name: &str, value: &str) -> Matcher {
    Matcher::UrlEncoded(name.to_string(), value.to_string())
}

#[tokio::test]
async fn list_transactions_sends_account_txlist_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api")
        .match_query(Matcher::AllOf(vec![
            encoded("apikey", API_KEY),
            encoded("module", "account"),
            encoded("action", "txlist"),
            encoded("address", ADDRESS),
            encoded("startblock", "1"),
            encoded("endblock", "999999999"),
            encoded("sort", "dsc"),
            encoded("offset", "2"),
            encoded("page", "1"),
        ]))
        .with_body(
            r#"{"status":"1","message":"OK","result":[
                {"blockNumber":"1001","hash":"0xaaa","from":"0x1","to":"0x2"},
                {"blockNumber":"1000","hash":"0xbbb","from":"0x3","to":"0x2"}
            ]}"#,
        )
        .create_async()
        .await;

    let query = TransactionListQuery::new(ADDRESS)
        .sort(SortOrder::Custom("dsc".to_string()))
        .offset(2);
    let response = client_for(&server).list_transactions(query).await.unwrap();

    mock.assert_async().await;
    assert!(response.is_success());
    assert_eq!(response.message, "OK");
    assert_eq!(response.records().len(), 2);
    assert_eq!(response.records()[0]["hash"], "0xaaa");
}

#[tokio::test]
async fn fetch_transactions_raw_returns_body_untouched() {
    let body = r#"{"status":"0","message":"NOTOK","result":"Max rate limit reached"}"#;
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api")
        .match_query(encoded("address", ADDRESS))
        .with_body(body)
        .create_async()
        .await;

    let raw = client_for(&server)
        .fetch_transactions_raw(TransactionListQuery::new(ADDRESS))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(raw, body.as_bytes());
}

#[tokio::test]
async fn has_transactions_true_when_a_record_comes_back() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api")
        .match_query(Matcher::AllOf(vec![
            encoded("sort", "desc"),
            encoded("offset", "1"),
            encoded("page", "1"),
        ]))
        .with_body(r#"{"status":"1","message":"OK","result":[{"hash":"0xaaa"}]}"#)
        .create_async()
        .await;

    let seeded = client_for(&server).has_transactions(ADDRESS).await.unwrap();

    mock.assert_async().await;
    assert!(seeded);
}

#[tokio::test]
async fn has_transactions_false_when_explorer_reports_none() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api")
        .match_query(Matcher::AllOf(vec![
            encoded("address", ADDRESS),
            encoded("sort", "desc"),
        ]))
        .with_body(r#"{"status":"0","message":"No transactions found","result":[]}"#)
        .create_async()
        .await;

    let seeded = client_for(&server).has_transactions(ADDRESS).await.unwrap();

    mock.assert_async().await;
    assert!(!seeded);
}

#[tokio::test]
async fn has_transactions_surfaces_explorer_errors() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api")
        .match_query(Matcher::Any)
        .with_body(r#"{"status":"0","message":"NOTOK","result":"Invalid API Key"}"#)
        .create_async()
        .await;

    let error = client_for(&server)
        .has_transactions(ADDRESS)
        .await
        .unwrap_err();

    mock.assert_async().await;
    match error {
        FetchError::Api { status, message } => {
            assert_eq!(status, "0");
            assert_eq!(message, "NOTOK (Invalid API Key)");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_base_url_is_a_request_construction_error() {
    let config = ExplorerConfig::new("snowtrace", API_KEY);
    let client = ExplorerClient::from_config(config);

    let error = client.has_transactions(ADDRESS).await.unwrap_err();
    assert!(error.is_request_construction());
}
