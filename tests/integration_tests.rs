use film_list::app::render::OutputFormat;
use film_list::app::shell::{FALLBACK, PLACEHOLDER};
use film_list::app::theme::ColorScheme;
use film_list::core::film_list::ViewState;
use film_list::core::GraphQLRequest;
use film_list::{ClientSettings, DisplayShell, FilmError, FilmListView, HttpQueryChannel};
use httpmock::prelude::*;
use serde_json::json;

fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings {
        base_url: server.base_url(),
        timeout_seconds: 5,
        ..ClientSettings::default()
    }
}

fn data_rows(output: &str) -> Vec<String> {
    // 標題、空行、載入中、表頭、分隔線之後才是資料列
    output
        .lines()
        .skip_while(|line| !line.starts_with("-----"))
        .skip(1)
        .map(str::to_string)
        .collect()
}

async fn render_once(channel: &HttpQueryChannel) -> (film_list::Result<usize>, String) {
    let mut view = FilmListView::new(GraphQLRequest::film_list());
    let mut shell = DisplayShell::new(Vec::new(), ColorScheme::Light, OutputFormat::Table, false);
    let result = shell.show(&mut view, channel).await;
    let output = String::from_utf8(shell.into_inner()).unwrap();
    (result, output)
}

#[tokio::test]
async fn test_single_film_renders_one_row() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .header("Content-Type", "application/json")
            .json_body_partial(r#"{"variables": {}}"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"allFilms": {"films": [
                {"id": "1", "title": "A New Hope", "director": "George Lucas"}
            ]}}));
    });

    let channel = HttpQueryChannel::new(&settings_for(&server)).unwrap();
    let (result, output) = render_once(&channel).await;

    api_mock.assert();
    assert_eq!(result.unwrap(), 1);
    let rows = data_rows(&output);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("A New Hope"));
    assert!(rows[0].ends_with("George Lucas"));
}

#[tokio::test]
async fn test_rows_follow_response_order() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({"data": {"allFilms": {"films": [
            {"id": "3", "title": "Return of the Jedi", "director": "Richard Marquand"},
            {"id": "1", "title": "A New Hope", "director": "George Lucas"},
            {"id": "2", "title": "The Empire Strikes Back", "director": "Irvin Kershner"}
        ]}}}));
    });

    let channel = HttpQueryChannel::new(&settings_for(&server)).unwrap();
    let (result, output) = render_once(&channel).await;

    api_mock.assert();
    assert_eq!(result.unwrap(), 3);
    let rows = data_rows(&output);
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("Return of the Jedi"));
    assert!(rows[1].starts_with("A New Hope"));
    assert!(rows[2].starts_with("The Empire Strikes Back"));
}

#[tokio::test]
async fn test_empty_film_list_renders_zero_rows() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({"allFilms": {"films": []}}));
    });

    let channel = HttpQueryChannel::new(&settings_for(&server)).unwrap();
    let (result, output) = render_once(&channel).await;

    api_mock.assert();
    assert_eq!(result.unwrap(), 0);
    assert!(data_rows(&output).is_empty());
    assert!(!output.contains(FALLBACK));
}

#[tokio::test]
async fn test_server_error_fails_without_rows() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(500).body("Internal Server Error");
    });

    let channel = HttpQueryChannel::new(&settings_for(&server)).unwrap();
    let (result, output) = render_once(&channel).await;

    api_mock.assert();
    assert!(matches!(result, Err(FilmError::RequestFailed { status: 500 })));
    assert!(output.contains(PLACEHOLDER));
    assert!(output.contains(FALLBACK));
    assert!(data_rows(&output).is_empty());
}

#[tokio::test]
async fn test_same_query_twice_renders_identically() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({"allFilms": {"films": [
            {"id": "1", "title": "A New Hope", "director": "George Lucas"},
            {"id": "2", "title": "The Empire Strikes Back", "director": "Irvin Kershner"}
        ]}}));
    });

    let channel = HttpQueryChannel::new(&settings_for(&server)).unwrap();
    let (first_result, first) = render_once(&channel).await;
    let (second_result, second) = render_once(&channel).await;

    api_mock.assert_hits(2);
    assert_eq!(first_result.unwrap(), 2);
    assert_eq!(second_result.unwrap(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_remounting_one_view_reissues_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({"allFilms": {"films": [
            {"id": "1", "title": "A New Hope", "director": "George Lucas"}
        ]}}));
    });

    let channel = HttpQueryChannel::new(&settings_for(&server)).unwrap();
    let mut view = FilmListView::new(GraphQLRequest::film_list());

    view.mount(&channel).await.unwrap();
    view.unmount();
    view.mount(&channel).await.unwrap();

    api_mock.assert_hits(2);
    assert_eq!(view.rows().len(), 1);
}

#[tokio::test]
async fn test_malformed_payload_is_total_failure() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({"allFilms": {"films": [
            {"id": "1", "title": "A New Hope", "director": "George Lucas"},
            {"id": "2", "title": 42}
        ]}}));
    });

    let channel = HttpQueryChannel::new(&settings_for(&server)).unwrap();
    let mut view = FilmListView::new(GraphQLRequest::film_list());
    let result = view.mount(&channel).await;

    api_mock.assert();
    assert!(matches!(result, Err(FilmError::MalformedResponse { .. })));
    assert!(matches!(view.state(), ViewState::Failed(_)));
    assert!(view.rows().is_empty());
}

#[tokio::test]
async fn test_graphql_error_envelope_without_data_fails() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({
            "data": null,
            "errors": [{"message": "Cannot query field \"allFilms\" on type \"Query\"."}]
        }));
    });

    let channel = HttpQueryChannel::new(&settings_for(&server)).unwrap();
    let (result, output) = render_once(&channel).await;

    api_mock.assert();
    match result {
        Err(FilmError::GraphQLError { message }) => {
            assert!(message.contains("Cannot query field"));
        }
        other => panic!("expected GraphQL error, got {:?}", other),
    }
    assert!(output.contains(FALLBACK));
    assert!(data_rows(&output).is_empty());
}

#[tokio::test]
async fn test_null_data_without_errors_renders_nothing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({"data": null}));
    });

    let channel = HttpQueryChannel::new(&settings_for(&server)).unwrap();
    let (result, output) = render_once(&channel).await;

    api_mock.assert();
    assert_eq!(result.unwrap(), 0);
    assert!(!output.contains(FALLBACK));
    assert!(data_rows(&output).is_empty());
}

#[tokio::test]
async fn test_custom_path_and_variables_reach_server() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/graphql")
            .json_body_partial(r#"{"variables": {"first": 2}}"#);
        then.status(200).json_body(json!({"allFilms": {"films": []}}));
    });

    let mut variables = serde_json::Map::new();
    variables.insert("first".to_string(), json!(2));
    let settings = ClientSettings {
        graphql_path: "/api/graphql".to_string(),
        query: Some(
            "query Films($first: Int) { allFilms(first: $first) { films { id title director } } }"
                .to_string(),
        ),
        variables,
        ..settings_for(&server)
    };

    let channel = HttpQueryChannel::new(&settings).unwrap();
    let mut view = FilmListView::new(settings.graphql_request().unwrap());
    view.mount(&channel).await.unwrap();

    api_mock.assert();
}

#[tokio::test]
async fn test_json_output_through_shell() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({"allFilms": {"films": [
            {"id": "1", "title": "A New Hope", "director": "George Lucas"}
        ]}}));
    });

    let channel = HttpQueryChannel::new(&settings_for(&server)).unwrap();
    let mut view = FilmListView::new(GraphQLRequest::film_list());
    let mut shell = DisplayShell::new(Vec::new(), ColorScheme::Dark, OutputFormat::Json, false);

    shell.show(&mut view, &channel).await.unwrap();
    let output: serde_json::Value = serde_json::from_slice(&shell.into_inner()).unwrap();

    assert_eq!(
        output,
        json!([{"id": "1", "title": "A New Hope", "director": "George Lucas"}])
    );
}
