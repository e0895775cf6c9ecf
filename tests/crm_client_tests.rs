//! Integration tests for the CRM client.
//!
//! These tests run the client against a local mock server and verify the
//! request paths, query parameters and response normalization.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoho_api::clients::{ErrorCode, DELETE_ID_REQUIRED};
use zoho_api::{AuthToken, CrmClient, Host, Protocol, ResponseData, ZohoConfig, ZohoError};

/// Creates a CRM client pointed at the mock server.
fn create_test_client(server: &MockServer) -> CrmClient {
    let config = ZohoConfig::builder()
        .auth_token(AuthToken::new("test-token").unwrap())
        .protocol(Protocol::Http)
        .host(Host::new("127.0.0.1").unwrap())
        .port(server.address().port())
        .build()
        .unwrap();
    CrmClient::new(&config).unwrap()
}

// ============================================================================
// Record Operations
// ============================================================================

#[tokio::test]
async fn test_get_records_sends_auth_and_returns_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/private/json/Leads/getRecords"))
        .and(query_param("fromIndex", "1"))
        .and(query_param("authtoken", "test-token"))
        .and(query_param("scope", "crmapi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"result": {"Leads": {"row": [{"no": "1"}]}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crm = create_test_client(&mock_server);
    let response = crm.get_records("leads", json!({"fromIndex": 1})).await.unwrap();

    assert_eq!(response.code, 0);
    assert_eq!(
        response.data,
        ResponseData::Json(json!({"Leads": {"row": [{"no": "1"}]}}))
    );
}

#[tokio::test]
async fn test_create_record_sends_xml_data() {
    let mock_server = MockServer::start().await;

    let expected_xml = concat!(
        r#"<Leads><row no="1">"#,
        r#"<FL val="Company"><![CDATA[Acme]]></FL>"#,
        r#"<FL val="Last Name"><![CDATA[Doe]]></FL>"#,
        "</row></Leads>"
    );

    Mock::given(method("GET"))
        .and(path("/crm/private/json/Leads/insertRecords"))
        .and(query_param("wfTrigger", "true"))
        .and(query_param("xmlData", expected_xml))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"result": {"recorddetail": {"FL": [{"val": "Id", "content": "1"}]}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crm = create_test_client(&mock_server);
    let response = crm
        .create_record(
            "leads",
            json!({"Company": "Acme", "Last Name": "Doe"}),
            json!({"wfTrigger": true}),
        )
        .await
        .unwrap();

    assert_eq!(
        response.data.as_json(),
        Some(&json!({"FL": [{"val": "Id", "content": "1"}]}))
    );
}

#[tokio::test]
async fn test_create_record_nests_product_details() {
    let mock_server = MockServer::start().await;

    let expected_xml = concat!(
        r#"<Quotes><row no="1">"#,
        r#"<FL val="Subject"><![CDATA[Q-1]]></FL>"#,
        r#"<FL val="Product Details">"#,
        r#"<product no="1"><FL val="Product Id"><![CDATA[42]]></FL></product>"#,
        r#"<product no="2"><FL val="Product Id"><![CDATA[43]]></FL></product>"#,
        "</FL></row></Quotes>"
    );

    Mock::given(method("GET"))
        .and(path("/crm/private/json/Quotes/insertRecords"))
        .and(query_param("xmlData", expected_xml))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"result": {"code": "2000"}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crm = create_test_client(&mock_server);
    let response = crm
        .create_record(
            "quotes",
            json!({
                "Subject": "Q-1",
                "Product Details": [{"Product Id": "42"}, {"Product Id": 43}]
            }),
            json!({}),
        )
        .await
        .unwrap();

    assert_eq!(response.code, 2000);
}

#[tokio::test]
async fn test_notes_round_trip_through_notes_module() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/private/json/Notes/insertRecords"))
        .and(query_param(
            "xmlData",
            concat!(
                r#"<Notes><row no="1">"#,
                r#"<FL val="entityId"><![CDATA[1001]]></FL>"#,
                r#"<FL val="Note Title"><![CDATA[Call]]></FL>"#,
                r#"<FL val="Note Content"><![CDATA[Left a message]]></FL>"#,
                "</row></Notes>"
            ),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"result": {"recorddetail": {"FL": []}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/crm/private/json/Notes/getSearchRecordsByPDC"))
        .and(query_param("searchColumn", "notesid"))
        .and(query_param("searchValue", "1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"result": {"Notes": {"row": []}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crm = create_test_client(&mock_server);
    crm.create_note("1001", "Call", "Left a message").await.unwrap();
    let notes = crm.get_notes("1001").await.unwrap();

    assert_eq!(notes.data.as_json(), Some(&json!({"Notes": {"row": []}})));
}

#[tokio::test]
async fn test_update_record_posts_id_and_xml() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crm/private/json/Leads/updateRecords"))
        .and(query_param("id", "1001"))
        .and(query_param(
            "xmlData",
            r#"<Leads><row no="1"><FL val="Company"><![CDATA[Acme Inc]]></FL></row></Leads>"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"result": {"code": "2001", "recorddetail": {"FL": []}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crm = create_test_client(&mock_server);
    let response = crm
        .update_record("leads", "1001", json!({"Company": "Acme Inc"}))
        .await
        .unwrap();

    assert_eq!(response.code, 2001);
}

// ============================================================================
// Error Handling
// ============================================================================

#[tokio::test]
async fn test_nodata_response_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/private/json/Leads/getRecordById"))
        .and(query_param("id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"nodata": {"code": "4422", "message": "There is no data to show"}}
        })))
        .mount(&mock_server)
        .await;

    let crm = create_test_client(&mock_server);
    let error = crm
        .get_record_by_id("leads", json!({"id": 7}))
        .await
        .unwrap_err();

    match error {
        ZohoError::Api { code, message } => {
            assert_eq!(code, Some(ErrorCode::Text("4422".to_string())));
            assert_eq!(message, "There is no data to show");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_id_never_reaches_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let crm = create_test_client(&mock_server);
    let error = crm
        .delete_record("leads", json!({"id": 1}))
        .await
        .unwrap_err();

    assert!(matches!(error, ZohoError::Validation { .. }));
    assert_eq!(error.to_string(), DELETE_ID_REQUIRED);
}

#[tokio::test]
async fn test_empty_body_is_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/private/json/Leads/deleteRecords"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let crm = create_test_client(&mock_server);
    let error = crm.delete_record("leads", 1001).await.unwrap_err();

    assert!(matches!(error, ZohoError::NoContent));
    assert_eq!(error.to_string(), "No content data");
}
