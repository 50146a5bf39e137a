//! Public IP address operations.

use crate::client::{require, NetworkClient};
use crate::error::Result;
use crate::models::PublicIpAddress;
use crate::operation::Accepted;
use crate::paging::{self, Page};
use reqwest::StatusCode;

const RESOURCE_TYPE: &str = "publicIPAddresses";

/// Get a public IP address by name.
pub async fn get(
    client: &NetworkClient,
    resource_group: &str,
    name: &str,
) -> Result<PublicIpAddress> {
    require("resource_group", resource_group)?;
    require("public_ip_address_name", name)?;

    let url = client.resource_url(resource_group, RESOURCE_TYPE, name);
    client.get_json(&url, &[StatusCode::OK]).await
}

/// Create or update a public IP address.
pub async fn create_or_update(
    client: &NetworkClient,
    resource_group: &str,
    name: &str,
    parameters: &PublicIpAddress,
) -> Result<PublicIpAddress> {
    require("resource_group", resource_group)?;
    require("public_ip_address_name", name)?;

    let url = client.resource_url(resource_group, RESOURCE_TYPE, name);
    client
        .put_json(&url, parameters, &[StatusCode::OK, StatusCode::CREATED])
        .await
}

/// Start deletion of a public IP address.
pub async fn begin_delete(
    client: &NetworkClient,
    resource_group: &str,
    name: &str,
) -> Result<Accepted> {
    require("resource_group", resource_group)?;
    require("public_ip_address_name", name)?;

    let url = client.resource_url(resource_group, RESOURCE_TYPE, name);
    client
        .delete(
            &url,
            &[
                StatusCode::OK,
                StatusCode::ACCEPTED,
                StatusCode::NO_CONTENT,
            ],
        )
        .await
}

/// List one page of public IP addresses in a resource group.
pub async fn list(client: &NetworkClient, resource_group: &str) -> Result<Page<PublicIpAddress>> {
    require("resource_group", resource_group)?;
    paging::fetch_page(client, &client.collection_url(resource_group, RESOURCE_TYPE)).await
}

/// List all public IP addresses in a resource group (auto-paginate).
pub async fn list_all(
    client: &NetworkClient,
    resource_group: &str,
) -> Result<Vec<PublicIpAddress>> {
    require("resource_group", resource_group)?;
    paging::fetch_all(client, client.collection_url(resource_group, RESOURCE_TYPE)).await
}

/// List all public IP addresses in the subscription.
pub async fn list_all_in_subscription(client: &NetworkClient) -> Result<Vec<PublicIpAddress>> {
    paging::fetch_all(client, client.subscription_collection_url(RESOURCE_TYPE)).await
}
