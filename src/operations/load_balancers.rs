//! Load balancer operations.

use crate::client::{require, NetworkClient};
use crate::error::Result;
use crate::models::LoadBalancer;
use crate::operation::Accepted;
use crate::paging::{self, Page};
use reqwest::StatusCode;

const RESOURCE_TYPE: &str = "loadBalancers";

/// Get a load balancer by name.
pub async fn get(client: &NetworkClient, resource_group: &str, name: &str) -> Result<LoadBalancer> {
    require("resource_group", resource_group)?;
    require("load_balancer_name", name)?;

    let url = client.resource_url(resource_group, RESOURCE_TYPE, name);
    client.get_json(&url, &[StatusCode::OK]).await
}

/// Create or update a load balancer.
pub async fn create_or_update(
    client: &NetworkClient,
    resource_group: &str,
    name: &str,
    parameters: &LoadBalancer,
) -> Result<LoadBalancer> {
    require("resource_group", resource_group)?;
    require("load_balancer_name", name)?;

    let url = client.resource_url(resource_group, RESOURCE_TYPE, name);
    client
        .put_json(&url, parameters, &[StatusCode::OK, StatusCode::CREATED])
        .await
}

/// Start deletion of a load balancer.
pub async fn begin_delete(
    client: &NetworkClient,
    resource_group: &str,
    name: &str,
) -> Result<Accepted> {
    require("resource_group", resource_group)?;
    require("load_balancer_name", name)?;

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

/// List one page of load balancers in a resource group.
pub async fn list(client: &NetworkClient, resource_group: &str) -> Result<Page<LoadBalancer>> {
    require("resource_group", resource_group)?;
    paging::fetch_page(client, &client.collection_url(resource_group, RESOURCE_TYPE)).await
}

/// List all load balancers in a resource group (auto-paginate).
pub async fn list_all(client: &NetworkClient, resource_group: &str) -> Result<Vec<LoadBalancer>> {
    require("resource_group", resource_group)?;
    paging::fetch_all(client, client.collection_url(resource_group, RESOURCE_TYPE)).await
}

/// List all load balancers in the subscription.
pub async fn list_all_in_subscription(client: &NetworkClient) -> Result<Vec<LoadBalancer>> {
    paging::fetch_all(client, client.subscription_collection_url(RESOURCE_TYPE)).await
}
