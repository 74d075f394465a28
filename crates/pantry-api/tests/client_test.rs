#![allow(clippy::unwrap_used)]
// Integration tests for `PantryClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pantry_api::{Error, MonthlyIncome, PantryClient, Recipe, User, UserRegistration};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, PantryClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = PantryClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn recipes_page() -> serde_json::Value {
    json!({
        "recipes": [
            {
                "id": 1,
                "name": "Classic Margherita Pizza",
                "prepTimeMinutes": 20,
                "cookTimeMinutes": 15,
                "difficulty": "Easy",
                "cuisine": "Italian",
                "tags": ["Pizza", "Italian"],
                "rating": 4.6
            },
            {
                "id": 2,
                "name": "Vegetarian Stir-Fry",
                "difficulty": "Medium",
                "cuisine": "Asian",
                "tags": ["Vegetarian", "Stir-fry", "Asian"]
            }
        ],
        "total": 50,
        "skip": 0,
        "limit": 30
    })
}

// ── Recipe tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_recipes() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipes_page()))
        .mount(&server)
        .await;

    let page = client.list::<Recipe>().await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 50);
    assert_eq!(page.items[0].name, "Classic Margherita Pizza");
    assert_eq!(page.items[0].total_time_minutes(), 35);
    assert_eq!(page.items[1].tags.len(), 3);
}

#[tokio::test]
async fn test_recipe_tags() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/recipes/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Asian", "Pizza"])))
        .mount(&server)
        .await;

    let tags = client.tags::<Recipe>().await.unwrap();

    assert_eq!(tags, vec!["Asian".to_owned(), "Pizza".to_owned()]);
}

#[tokio::test]
async fn test_list_recipes_by_tag() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/recipes/tag/Pizza"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipes": [{ "id": 1, "name": "Classic Margherita Pizza" }],
            "total": 1,
            "skip": 0,
            "limit": 1
        })))
        .mount(&server)
        .await;

    let page = client.list_by_tag::<Recipe>("Pizza").await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, 1);
}

// ── User tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_users_encodes_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/search"))
        .and(query_param("q", "John Doe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{ "id": 7, "firstName": "John", "lastName": "Doe", "role": "user" }],
            "total": 1,
            "skip": 0,
            "limit": 1
        })))
        .mount(&server)
        .await;

    let page = client.search::<User>("John Doe").await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].full_name(), "John Doe");
}

#[tokio::test]
async fn test_add_registration_echoes_record() {
    let (server, client) = setup().await;

    let payload = UserRegistration {
        full_name: "Ana Souza".into(),
        city: "Recife".into(),
        pet_type: "dog".into(),
        monthly_income: MonthlyIncome::Amount(1234.56),
        ..UserRegistration::default()
    };

    Mock::given(method("POST"))
        .and(path("/users/add"))
        .and(body_json(json!({
            "fullName": "Ana Souza",
            "birthDate": "",
            "cpf": "",
            "cep": "",
            "street": "",
            "neighborhood": "",
            "city": "Recife",
            "state": "",
            "petType": "dog",
            "petBreed": "",
            "monthlyIncome": 1234.56
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 209,
            "fullName": "Ana Souza",
            "city": "Recife",
            "petType": "dog",
            "monthlyIncome": 1234.56
        })))
        .mount(&server)
        .await;

    let created = client.add(&payload).await.unwrap();

    assert_eq!(created.id, Some(209));
    assert_eq!(created.full_name, "Ana Souza");
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_api_error_carries_server_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/recipes/tag/nope"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Tag 'nope' not found" })),
        )
        .mount(&server)
        .await;

    let result = client.list_by_tag::<Recipe>("nope").await;

    match result {
        Err(Error::Api {
            status,
            ref message,
        }) => {
            assert_eq!(status, 404);
            assert!(message.contains("not found"), "got: {message}");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_without_body_uses_reason() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client.list::<User>().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(
        matches!(err, Error::Api { ref message, .. } if message == "Internal Server Error"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.list::<Recipe>().await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}
