//! Integration tests for the Network client using wiremock
//!
//! These tests run the real client against mocked endpoints, verifying
//! status-code registration, error decoding, pagination, and that parameter
//! validation fails before any request is sent.

use aznet::auth::StaticTokenCredential;
use aznet::models::{
    provisioning_state, AddressSpace, SecurityRule, VirtualNetwork, VirtualNetworkProperties,
};
use aznet::{operations, paging, ClientOptions, Error, NetworkClient};
use futures::TryStreamExt;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{bearer_token, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUBSCRIPTION: &str = "00000000-0000-0000-0000-000000000000";

fn test_client(server: &MockServer) -> NetworkClient {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let options = ClientOptions {
        endpoint: server.uri(),
        ..Default::default()
    };
    NetworkClient::with_options(
        SUBSCRIPTION,
        Arc::new(StaticTokenCredential::new("test-token")),
        options,
    )
    .expect("client should build")
}

fn group_path(suffix: &str) -> String {
    format!(
        "/subscriptions/{}/resourceGroups/rg-1/providers/Microsoft.Network/{}",
        SUBSCRIPTION, suffix
    )
}

/// Test successful GET decodes the typed model and sends the expected
/// headers and query parameters
#[tokio::test]
async fn test_get_virtual_network_success() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("virtualNetworks/vnet-1")))
        .and(query_param("api-version", "2016-12-01"))
        .and(bearer_token("test-token"))
        .and(header("accept-language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": format!("/subscriptions/{}/resourceGroups/rg-1/providers/Microsoft.Network/virtualNetworks/vnet-1", SUBSCRIPTION),
            "name": "vnet-1",
            "etag": "W/\"etag-1\"",
            "location": "westus",
            "properties": {
                "addressSpace": {"addressPrefixes": ["10.0.0.0/16"]},
                "provisioningState": "Succeeded"
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let vnet = operations::virtual_networks::get(&client, "rg-1", "vnet-1").await?;

    assert_eq!(vnet.name.as_deref(), Some("vnet-1"));
    assert_eq!(vnet.etag.as_deref(), Some("W/\"etag-1\""));
    assert_eq!(
        vnet.properties.unwrap().provisioning_state.as_deref(),
        Some(provisioning_state::SUCCEEDED)
    );
    Ok(())
}

/// Test PUT sends the wire JSON shape and decodes a 201 response
#[tokio::test]
async fn test_create_or_update_sends_properties_envelope() {
    let server = MockServer::start().await;

    let parameters = VirtualNetwork {
        location: Some("westus".to_string()),
        properties: Some(VirtualNetworkProperties {
            address_space: Some(AddressSpace {
                address_prefixes: vec!["10.0.0.0/16".to_string()],
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    Mock::given(method("PUT"))
        .and(path(group_path("virtualNetworks/vnet-new")))
        .and(body_json(json!({
            "location": "westus",
            "properties": {
                "addressSpace": {"addressPrefixes": ["10.0.0.0/16"]}
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "vnet-new",
            "location": "westus",
            "properties": {
                "addressSpace": {"addressPrefixes": ["10.0.0.0/16"]},
                "provisioningState": "Updating"
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let created =
        operations::virtual_networks::create_or_update(&client, "rg-1", "vnet-new", &parameters)
            .await
            .expect("PUT should succeed");

    assert_eq!(
        created.properties.unwrap().provisioning_state.as_deref(),
        Some("Updating")
    );
}

/// Test DELETE returning 202 surfaces the polling headers
#[tokio::test]
async fn test_begin_delete_accepted_with_polling_headers() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(group_path("loadBalancers/lb-1")))
        .respond_with(
            ResponseTemplate::new(202)
                .insert_header("Azure-AsyncOperation", "https://example/operations/op-1")
                .insert_header("Retry-After", "10"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let accepted = operations::load_balancers::begin_delete(&client, "rg-1", "lb-1")
        .await
        .expect("DELETE should be accepted");

    assert!(!accepted.is_done());
    assert_eq!(
        accepted.async_operation_url.as_deref(),
        Some("https://example/operations/op-1")
    );
    assert_eq!(accepted.retry_after_or(30), 10);
}

/// Test DELETE returning 204 (already gone) is a registered terminal response
#[tokio::test]
async fn test_begin_delete_no_content_is_done() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(group_path("publicIPAddresses/ip-1")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let accepted = operations::public_ip_addresses::begin_delete(&client, "rg-1", "ip-1")
        .await
        .expect("DELETE should succeed");

    assert!(accepted.is_done());
    assert!(accepted.async_operation_url.is_none());
}

/// Test an unregistered status code decodes the vendor error envelope
#[tokio::test]
async fn test_404_decodes_cloud_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("virtualNetworks/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "ResourceNotFound",
                "message": "The Resource 'missing' was not found."
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = operations::virtual_networks::get(&client, "rg-1", "missing")
        .await
        .expect_err("GET should fail");

    assert!(err.is_not_found());
    match err {
        Error::Api { status, error } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(error.unwrap().code(), Some("ResourceNotFound"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Test an unregistered status with a non-JSON body still yields an API error
#[tokio::test]
async fn test_bad_gateway_without_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("networkInterfaces/nic-1")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = operations::network_interfaces::get(&client, "rg-1", "nic-1")
        .await
        .expect_err("GET should fail");

    match err {
        Error::Api { status, error } => {
            assert_eq!(status.as_u16(), 502);
            assert!(error.is_none());
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Test list_all follows the next link across pages
#[tokio::test]
async fn test_list_all_follows_next_link() {
    let server = MockServer::start().await;

    // First page, carrying a next link back to this server
    Mock::given(method("GET"))
        .and(path(group_path("virtualNetworks")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "vnet-1"}, {"name": "vnet-2"}],
            "nextLink": format!("{}/paged/virtualNetworks?page=2", server.uri())
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // Second page
    Mock::given(method("GET"))
        .and(path("/paged/virtualNetworks"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "vnet-3"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let vnets = operations::virtual_networks::list_all(&client, "rg-1")
        .await
        .expect("list should succeed");

    let names: Vec<_> = vnets.iter().filter_map(|v| v.name.as_deref()).collect();
    assert_eq!(names, vec!["vnet-1", "vnet-2", "vnet-3"]);
}

/// Test one-page list exposes the next link without following it
#[tokio::test]
async fn test_list_single_page_reports_more() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("networkSecurityGroups")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "nsg-1"}],
            "nextLink": "https://unfollowed/next"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = operations::network_security_groups::list(&client, "rg-1")
        .await
        .expect("list should succeed");

    assert_eq!(page.value.len(), 1);
    assert!(page.has_more());
    // Only the one request went out
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

/// Test the paging stream yields items lazily across pages
#[tokio::test]
async fn test_paging_stream_crosses_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("publicIPAddresses")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "ip-1"}],
            "nextLink": format!("{}/paged/ips", server.uri())
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/paged/ips"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "ip-2"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let url = client.collection_url("rg-1", "publicIPAddresses");
    let ips: Vec<aznet::models::PublicIpAddress> = paging::stream(&client, url)
        .try_collect()
        .await
        .expect("stream should succeed");

    let names: Vec<_> = ips.iter().filter_map(|ip| ip.name.as_deref()).collect();
    assert_eq!(names, vec!["ip-1", "ip-2"]);
}

/// Test child-resource operations hit the nested URL template
#[tokio::test]
async fn test_security_rule_child_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path(
            "networkSecurityGroups/nsg-1/securityRules/allow-ssh",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "allow-ssh",
            "properties": {"access": "Allow", "priority": 100, "direction": "Inbound"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let rule: SecurityRule =
        operations::security_rules::get(&client, "rg-1", "nsg-1", "allow-ssh")
            .await
            .expect("GET should succeed");

    assert_eq!(
        rule.properties.unwrap().priority,
        Some(100)
    );
}

/// Test subnet create under its parent virtual network
#[tokio::test]
async fn test_subnet_create_under_parent() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(group_path("virtualNetworks/vnet-1/subnets/front")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "front",
            "properties": {"addressPrefix": "10.0.1.0/24", "provisioningState": "Succeeded"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let subnet = aznet::models::Subnet {
        properties: Some(aznet::models::SubnetProperties {
            address_prefix: Some("10.0.1.0/24".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let created =
        operations::subnets::create_or_update(&client, "rg-1", "vnet-1", "front", &subnet)
            .await
            .expect("PUT should succeed");
    assert_eq!(
        created.properties.unwrap().address_prefix.as_deref(),
        Some("10.0.1.0/24")
    );
}

/// Test empty required parameters fail before any request is sent
#[tokio::test]
async fn test_validation_precedes_network_io() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let err = operations::virtual_networks::get(&client, "rg-1", "")
        .await
        .expect_err("empty name should fail");
    assert!(matches!(err, Error::InvalidArgument("virtual_network_name")));

    let err = operations::subnets::get(&client, "", "vnet", "subnet")
        .await
        .expect_err("empty group should fail");
    assert!(matches!(err, Error::InvalidArgument("resource_group")));

    // Nothing reached the server
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// Test subscription-wide listing skips the resource group segment
#[tokio::test]
async fn test_list_all_in_subscription_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/subscriptions/{}/providers/Microsoft.Network/loadBalancers",
            SUBSCRIPTION
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "lb-1"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let lbs = operations::load_balancers::list_all_in_subscription(&client)
        .await
        .expect("list should succeed");
    assert_eq!(lbs[0].name.as_deref(), Some("lb-1"));
}

/// Test a registered status with an undecodable body is a decode error
#[tokio::test]
async fn test_garbage_success_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("virtualNetworks/vnet-1")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = operations::virtual_networks::get(&client, "rg-1", "vnet-1")
        .await
        .expect_err("decode should fail");
    assert!(matches!(err, Error::Deserialize(_)));
}
