//! Integration tests for the Creator client.
//!
//! These tests verify form and view requests, the unescaped query string,
//! session cookies and binary downloads from the export host.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoho_api::clients::CREATE_PARAMS_REQUIRED;
use zoho_api::{AuthToken, CreatorClient, Host, Protocol, ResponseData, ZohoConfig, ZohoError};

/// Creates a Creator client whose API and export hosts both point at the mock server.
fn create_test_client(server: &MockServer) -> CreatorClient {
    let config = ZohoConfig::builder()
        .auth_token(AuthToken::new("test-token").unwrap())
        .protocol(Protocol::Http)
        .host(Host::new("127.0.0.1").unwrap())
        .export_host(Host::new("127.0.0.1").unwrap())
        .port(server.address().port())
        .build()
        .unwrap();
    CreatorClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_add_records_sends_params_in_query_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/json/order-desk/form/Orders/record/add/"))
        .and(query_param("Item", "Pen"))
        .and(query_param("authtoken", "test-token"))
        .and(query_param("scope", "creatorapi"))
        .and(query_param("raw", "true"))
        .and(body_json(json!({
            "Item": "Pen",
            "Qty": 2,
            "authtoken": "test-token",
            "scope": "creatorapi",
            "raw": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "formname": ["Orders", {"operation": ["add", {"status": "Success"}]}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let creator = create_test_client(&mock_server);
    let response = creator
        .add_records("order-desk", "Orders", json!({"Item": "Pen", "Qty": 2}))
        .await
        .unwrap();

    assert_eq!(response.code, 0);
    assert_eq!(
        response.data,
        ResponseData::Json(json!({
            "formname": ["Orders", {"operation": ["add", {"status": "Success"}]}]
        }))
    );
}

#[tokio::test]
async fn test_write_records_sends_form_xml() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/json/order-desk/form/Orders/record/add/"))
        .and(query_param(
            "xml",
            r#"<Orders><row no="1"><FL val="Item"><![CDATA[Pen]]></FL></row><row no="2"><FL val="Item"><![CDATA[Ink]]></FL></row></Orders>"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"formname": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let creator = create_test_client(&mock_server);
    creator
        .write_records("order-desk", "Orders", json!([{"Item": "Pen"}, {"Item": "Ink"}]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_views_and_fields_share_view_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/json/order-desk/view/All_Orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Orders": []})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let creator = create_test_client(&mock_server);
    creator
        .view_records_in_view("order-desk", "All_Orders", json!({}))
        .await
        .unwrap();
    creator
        .list_form_fields("order-desk", "All_Orders", json!({}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_edit_and_delete_target_their_actions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/json/order-desk/form/Orders/record/update/"))
        .and(query_param("criteria", "ID==5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"formname": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/json/order-desk/form/Orders/record/delete/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"formname": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let creator = create_test_client(&mock_server);
    creator
        .edit_records(
            "order-desk",
            "Orders",
            json!({"criteria": "ID==5", "Qty": 3}),
        )
        .await
        .unwrap();
    creator
        .delete_records("order-desk", "Orders", json!(null))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_hash_in_criteria_keeps_auth_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/json/order-desk/view/All_Orders"))
        .and(query_param("criteria", r#"Ref == "A#1" && Qty+1 = 50%"#))
        .and(query_param("authtoken", "test-token"))
        .and(query_param("scope", "creatorapi"))
        .and(query_param("raw", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Orders": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let creator = create_test_client(&mock_server);
    creator
        .view_records_in_view(
            "order-desk",
            "All_Orders",
            json!({"criteria": r#"Ref == "A#1" && Qty+1 = 50%"#}),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cookie_is_sent_once_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/json/order-desk/view/All_Orders"))
        .and(header("Cookie", "JSESSIONID=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Orders": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut creator = create_test_client(&mock_server);
    creator.set_cookie("JSESSIONID=abc");
    creator
        .view_records_in_view("order-desk", "All_Orders", json!({}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_message_marker_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/json/order-desk/view/All_Orders"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "some auth error"})),
        )
        .mount(&mock_server)
        .await;

    let creator = create_test_client(&mock_server);
    let error = creator
        .view_records_in_view("order-desk", "All_Orders", json!({}))
        .await
        .unwrap_err();

    match error {
        ZohoError::Api { code, message } => {
            assert!(code.is_none());
            assert_eq!(message, "some auth error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_add_records_without_fields_never_reaches_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let creator = create_test_client(&mock_server);
    let error = creator
        .add_records("order-desk", "Orders", json!({}))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), CREATE_PARAMS_REQUIRED);
}

// ============================================================================
// Downloads
// ============================================================================

#[tokio::test]
async fn test_download_image_returns_bytes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/owner/order-desk/image/1.jpg"))
        .and(query_param("filepath", "1.jpg"))
        .and(query_param("download", "true"))
        .and(header("Content-type", "image/jpeg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let creator = create_test_client(&mock_server);
    let response = creator
        .download_image("/owner/order-desk/image/1.jpg", json!({"filepath": "1.jpg"}))
        .await
        .unwrap();

    assert_eq!(response.data.as_bytes(), Some(&[0xFF, 0xD8, 0xFF][..]));
}

#[tokio::test]
async fn test_empty_download_is_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/owner/order-desk/image/missing.jpg"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let creator = create_test_client(&mock_server);
    let error = creator
        .download_image("/owner/order-desk/image/missing.jpg", json!({}))
        .await
        .unwrap_err();

    assert!(matches!(error, ZohoError::NoContent));
}
