//! 카탈로그 화면 테스트

mod common;

use axum_test::TestServer;
use common::{pattern_file, MockAiClientSuccess, SAMPLE_PATTERNS};
use prompt_lab_server::create_test_router_with_mock;

fn server_for(content: &str) -> (TestServer, tempfile::NamedTempFile) {
    let file = pattern_file(content);
    let app = create_test_router_with_mock(file.path(), MockAiClientSuccess::new("unused"));
    (TestServer::new(app).unwrap(), file)
}

mod index {
    use super::*;

    #[tokio::test]
    async fn should_list_every_pattern_in_load_order() {
        let (server, _file) = server_for(SAMPLE_PATTERNS);

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        let first = html.find("업무 요약").unwrap();
        let second = html.find("번역 검수").unwrap();
        let third = html.find("회의록 정리").unwrap();
        assert!(first < second && second < third);
        assert!(html.contains(r#"href="/detail/5""#));
    }

    #[tokio::test]
    async fn should_render_empty_list_when_key_missing() {
        let (server, _file) = server_for(r#"{ "other": [] }"#);

        let response = server.get("/").await;

        response.assert_status_ok();
        assert!(!response.text().contains("/detail/"));
    }

    #[tokio::test]
    async fn should_return_500_when_pattern_file_is_malformed() {
        let (server, _file) = server_for("{ not json");

        let response = server.get("/").await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "COMMON500");
    }

    #[tokio::test]
    async fn should_escape_html_in_titles() {
        let (server, _file) = server_for(
            r#"{ "prompt_patterns": [ { "id": 1, "title": "<script>alert(1)</script>" } ] }"#,
        );

        let response = server.get("/").await;

        let html = response.text();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

mod detail {
    use super::*;

    #[tokio::test]
    async fn should_return_200_for_every_present_id() {
        let (server, _file) = server_for(SAMPLE_PATTERNS);

        for id in [1, 5, 3] {
            let response = server.get(&format!("/detail/{}", id)).await;

            response.assert_status_ok();
            assert!(response
                .text()
                .contains(&format!(r#"data-pattern-id="{}""#, id)));
        }
    }

    #[tokio::test]
    async fn should_link_positional_successor_not_next_id() {
        let (server, _file) = server_for(SAMPLE_PATTERNS);

        let response = server.get("/detail/1").await;

        let html = response.text();
        assert!(html.contains(r#"class="next" href="/detail/5""#));
        assert!(html.contains("다음: 번역 검수"));
    }

    #[tokio::test]
    async fn last_pattern_should_have_no_successor() {
        let (server, _file) = server_for(
            r#"{ "prompt_patterns": [ { "id": 1, "title": "A" }, { "id": 2, "title": "B" } ] }"#,
        );

        let response = server.get("/detail/2").await;

        response.assert_status_ok();
        assert!(!response.text().contains(r#"class="next""#));
    }

    #[tokio::test]
    async fn should_return_404_for_absent_id() {
        let (server, _file) = server_for(SAMPLE_PATTERNS);

        let response = server.get("/detail/999").await;

        response.assert_status_not_found();
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "COMMON404");
    }

    #[tokio::test]
    async fn should_return_404_for_non_integer_id() {
        let (server, _file) = server_for(SAMPLE_PATTERNS);

        let response = server.get("/detail/abc").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn should_return_404_for_negative_id_even_if_present() {
        let (server, _file) = server_for(
            r#"{ "prompt_patterns": [ { "id": -1, "title": "음수" }, { "id": 1, "title": "A" } ] }"#,
        );

        let response = server.get("/detail/-1").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn lab_pattern_should_render_lab_view() {
        let (server, _file) = server_for(SAMPLE_PATTERNS);

        let response = server.get("/detail/26").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("tactic-form"));
        assert!(!html.contains("data-pattern-id"));
    }

    #[tokio::test]
    async fn lab_id_absent_from_data_should_return_404() {
        let (server, _file) = server_for(
            r#"{ "prompt_patterns": [ { "id": 1, "title": "A" } ] }"#,
        );

        let response = server.get("/detail/26").await;

        response.assert_status_not_found();
    }
}

mod architect {
    use super::*;

    #[tokio::test]
    async fn should_render_lab_view_with_navigation() {
        let (server, _file) = server_for(SAMPLE_PATTERNS);

        let response = server.get("/architect").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Prompt Architect Lab"));
        assert!(html.contains(r#"href="/detail/3""#));
    }
}
