//! Subnet operations (children of a virtual network).

use crate::client::{require, NetworkClient};
use crate::error::Result;
use crate::models::Subnet;
use crate::operation::Accepted;
use crate::paging::{self, Page};
use reqwest::StatusCode;

const PARENT_TYPE: &str = "virtualNetworks";
const CHILD_TYPE: &str = "subnets";

/// Get a subnet by name.
pub async fn get(
    client: &NetworkClient,
    resource_group: &str,
    virtual_network_name: &str,
    name: &str,
) -> Result<Subnet> {
    require("resource_group", resource_group)?;
    require("virtual_network_name", virtual_network_name)?;
    require("subnet_name", name)?;

    let url = client.child_url(
        resource_group,
        PARENT_TYPE,
        virtual_network_name,
        CHILD_TYPE,
        name,
    );
    client.get_json(&url, &[StatusCode::OK]).await
}

/// Create or update a subnet.
pub async fn create_or_update(
    client: &NetworkClient,
    resource_group: &str,
    virtual_network_name: &str,
    name: &str,
    parameters: &Subnet,
) -> Result<Subnet> {
    require("resource_group", resource_group)?;
    require("virtual_network_name", virtual_network_name)?;
    require("subnet_name", name)?;

    let url = client.child_url(
        resource_group,
        PARENT_TYPE,
        virtual_network_name,
        CHILD_TYPE,
        name,
    );
    client
        .put_json(&url, parameters, &[StatusCode::OK, StatusCode::CREATED])
        .await
}

/// Start deletion of a subnet.
pub async fn begin_delete(
    client: &NetworkClient,
    resource_group: &str,
    virtual_network_name: &str,
    name: &str,
) -> Result<Accepted> {
    require("resource_group", resource_group)?;
    require("virtual_network_name", virtual_network_name)?;
    require("subnet_name", name)?;

    let url = client.child_url(
        resource_group,
        PARENT_TYPE,
        virtual_network_name,
        CHILD_TYPE,
        name,
    );
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

/// List one page of subnets of a virtual network.
pub async fn list(
    client: &NetworkClient,
    resource_group: &str,
    virtual_network_name: &str,
) -> Result<Page<Subnet>> {
    require("resource_group", resource_group)?;
    require("virtual_network_name", virtual_network_name)?;

    let url = client.child_collection_url(
        resource_group,
        PARENT_TYPE,
        virtual_network_name,
        CHILD_TYPE,
    );
    paging::fetch_page(client, &url).await
}

/// List all subnets of a virtual network (auto-paginate).
pub async fn list_all(
    client: &NetworkClient,
    resource_group: &str,
    virtual_network_name: &str,
) -> Result<Vec<Subnet>> {
    require("resource_group", resource_group)?;
    require("virtual_network_name", virtual_network_name)?;

    let url = client.child_collection_url(
        resource_group,
        PARENT_TYPE,
        virtual_network_name,
        CHILD_TYPE,
    );
    paging::fetch_all(client, url).await
}
