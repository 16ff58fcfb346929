mod utils;

use tokio;
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};
use wiremock::matchers::{header, method, path, query_param};

use gamehub::rawg::{CatalogQuery, GameCatalogHandling, RawgClient};

/// Matches the raw, still-encoded query string as it went over the wire
struct RawQuery(&'static str);

impl Match for RawQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query() == Some(self.0)
    }
}

fn client_for(server: &MockServer) -> RawgClient {
    RawgClient::new(Some("RAWG_API_KEY"), &server.uri())
}

#[tokio::test]
async fn test_fetch_games() {
    let mock_rawg = MockServer::start().await;
    let response = utils::fixture("games/games-list-1.json");

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("key", "RAWG_API_KEY"))
        .and(header("Content-Type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .expect(1)
        .mount(&mock_rawg)
        .await;

    let actual = client_for(&mock_rawg).fetch_games(&CatalogQuery::default()).await;
    let names: Vec<&str> = actual.iter().map(|g| g.display_name()).collect();

    assert_eq!(names, vec!["Grand Theft Auto V", "God of War", "Paint Drying Tycoon 2"]);
}

#[tokio::test]
async fn test_fetch_games_minimal_record() {
    let mock_rawg = MockServer::start().await;
    let response = r#"{"count":1,"next":null,"previous":null,"results":[{"id":1,"name":"X","rating":4.5}]}"#;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .mount(&mock_rawg)
        .await;

    let actual = client_for(&mock_rawg).fetch_games(&CatalogQuery::default()).await;

    assert_eq!(actual.len(), 1);
    assert_eq!(actual[0].id, Some(1));
    assert_eq!(actual[0].name, Some("X".to_string()));
    assert_eq!(actual[0].rating, 4.5);
    assert_eq!(actual[0].slug, None);
    assert_eq!(actual[0].metacritic, None);
    assert_eq!(actual[0].platforms, None);
}

#[tokio::test]
async fn test_search_spaces_sent_as_plus() {
    let mock_rawg = MockServer::start().await;
    let response = utils::fixture("games/games-list-empty.json");

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(RawQuery("key=RAWG_API_KEY&search=red+dead"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .expect(1)
        .mount(&mock_rawg)
        .await;

    client_for(&mock_rawg).fetch_games(&CatalogQuery::search("red dead")).await;
}

#[tokio::test]
async fn test_search_punctuation_sent_unaltered() {
    let mock_rawg = MockServer::start().await;
    let response = utils::fixture("games/games-list-empty.json");

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(RawQuery("key=RAWG_API_KEY&search=halo:+reach,+odst"))
        .and(query_param("search", "halo: reach, odst"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .expect(1)
        .mount(&mock_rawg)
        .await;

    client_for(&mock_rawg).fetch_games(&CatalogQuery::search("halo: reach, odst")).await;
}

#[tokio::test]
async fn test_filters_sent_in_order() {
    let mock_rawg = MockServer::start().await;
    let response = utils::fixture("games/games-list-empty.json");

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(RawQuery(
            "key=RAWG_API_KEY&dates=2019-09-01,2019-09-30&platforms=18,1&search=god+of+war"
        ))
        .and(query_param("dates", "2019-09-01,2019-09-30"))
        .and(query_param("platforms", "18,1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .expect(1)
        .mount(&mock_rawg)
        .await;

    let query = CatalogQuery::search("god of war")
        .with_release_dates("2019-09-01,2019-09-30")
        .with_platforms("18,1");

    client_for(&mock_rawg).fetch_games(&query).await;
}

#[tokio::test]
async fn test_no_key_makes_no_request() {
    let mock_rawg = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_rawg)
        .await;

    let client = RawgClient::new(None, &mock_rawg.uri());
    let actual = client.fetch_games(&CatalogQuery::search("halo")).await;

    assert!(actual.is_empty());
    assert!(mock_rawg.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_status_gives_empty() {
    let mock_rawg = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\": \"bad key\"}"))
        .mount(&mock_rawg)
        .await;

    let actual = client_for(&mock_rawg).fetch_games(&CatalogQuery::default()).await;

    assert!(actual.is_empty());
}

#[tokio::test]
async fn test_non_200_success_gives_empty() {
    let mock_rawg = MockServer::start().await;
    let response = utils::fixture("games/games-list-1.json");

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(
            ResponseTemplate::new(203).set_body_raw(response.as_bytes(), "application/json")
        )
        .mount(&mock_rawg)
        .await;

    let actual = client_for(&mock_rawg).fetch_games(&CatalogQuery::default()).await;

    assert!(actual.is_empty());
}

#[tokio::test]
async fn test_malformed_json_gives_empty() {
    let mock_rawg = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>rate limited</html>".as_bytes(), "text/html")
        )
        .mount(&mock_rawg)
        .await;

    let actual = client_for(&mock_rawg).fetch_games(&CatalogQuery::default()).await;

    assert!(actual.is_empty());
}

#[tokio::test]
async fn test_unrated_result_gives_empty() {
    let mock_rawg = MockServer::start().await;
    let response = utils::fixture("games/games-list-missing-rating.json");

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .mount(&mock_rawg)
        .await;

    let actual = client_for(&mock_rawg).fetch_games(&CatalogQuery::default()).await;

    assert!(actual.is_empty());
}
