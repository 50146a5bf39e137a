//! Virtual network operations.

use crate::client::{require, NetworkClient};
use crate::error::Result;
use crate::models::VirtualNetwork;
use crate::operation::Accepted;
use crate::paging::{self, Page};
use reqwest::StatusCode;

const RESOURCE_TYPE: &str = "virtualNetworks";

/// Get a virtual network by name.
pub async fn get(
    client: &NetworkClient,
    resource_group: &str,
    name: &str,
) -> Result<VirtualNetwork> {
    require("resource_group", resource_group)?;
    require("virtual_network_name", name)?;

    let url = client.resource_url(resource_group, RESOURCE_TYPE, name);
    client.get_json(&url, &[StatusCode::OK]).await
}

/// Create or update a virtual network.
///
/// Returns the resource decoded from the initial 200/201 response;
/// provisioning may still be running server-side (see
/// `properties.provisioning_state` on subsequent gets).
pub async fn create_or_update(
    client: &NetworkClient,
    resource_group: &str,
    name: &str,
    parameters: &VirtualNetwork,
) -> Result<VirtualNetwork> {
    require("resource_group", resource_group)?;
    require("virtual_network_name", name)?;

    let url = client.resource_url(resource_group, RESOURCE_TYPE, name);
    client
        .put_json(&url, parameters, &[StatusCode::OK, StatusCode::CREATED])
        .await
}

/// Start deletion of a virtual network.
pub async fn begin_delete(
    client: &NetworkClient,
    resource_group: &str,
    name: &str,
) -> Result<Accepted> {
    require("resource_group", resource_group)?;
    require("virtual_network_name", name)?;

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

/// List one page of virtual networks in a resource group.
pub async fn list(client: &NetworkClient, resource_group: &str) -> Result<Page<VirtualNetwork>> {
    require("resource_group", resource_group)?;
    paging::fetch_page(client, &client.collection_url(resource_group, RESOURCE_TYPE)).await
}

/// List all virtual networks in a resource group (auto-paginate).
pub async fn list_all(client: &NetworkClient, resource_group: &str) -> Result<Vec<VirtualNetwork>> {
    require("resource_group", resource_group)?;
    paging::fetch_all(client, client.collection_url(resource_group, RESOURCE_TYPE)).await
}

/// List all virtual networks in the subscription.
pub async fn list_all_in_subscription(client: &NetworkClient) -> Result<Vec<VirtualNetwork>> {
    paging::fetch_all(client, client.subscription_collection_url(RESOURCE_TYPE)).await
}
