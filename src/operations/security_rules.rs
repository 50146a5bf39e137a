//! Security rule operations (children of a network security group).

use crate::client::{require, NetworkClient};
use crate::error::Result;
use crate::models::SecurityRule;
use crate::operation::Accepted;
use crate::paging::{self, Page};
use reqwest::StatusCode;

const PARENT_TYPE: &str = "networkSecurityGroups";
const CHILD_TYPE: &str = "securityRules";

/// Get a security rule by name.
pub async fn get(
    client: &NetworkClient,
    resource_group: &str,
    network_security_group_name: &str,
    name: &str,
) -> Result<SecurityRule> {
    require("resource_group", resource_group)?;
    require("network_security_group_name", network_security_group_name)?;
    require("security_rule_name", name)?;

    let url = client.child_url(
        resource_group,
        PARENT_TYPE,
        network_security_group_name,
        CHILD_TYPE,
        name,
    );
    client.get_json(&url, &[StatusCode::OK]).await
}

/// Create or update a security rule.
pub async fn create_or_update(
    client: &NetworkClient,
    resource_group: &str,
    network_security_group_name: &str,
    name: &str,
    parameters: &SecurityRule,
) -> Result<SecurityRule> {
    require("resource_group", resource_group)?;
    require("network_security_group_name", network_security_group_name)?;
    require("security_rule_name", name)?;

    let url = client.child_url(
        resource_group,
        PARENT_TYPE,
        network_security_group_name,
        CHILD_TYPE,
        name,
    );
    client
        .put_json(&url, parameters, &[StatusCode::OK, StatusCode::CREATED])
        .await
}

/// Start deletion of a security rule.
pub async fn begin_delete(
    client: &NetworkClient,
    resource_group: &str,
    network_security_group_name: &str,
    name: &str,
) -> Result<Accepted> {
    require("resource_group", resource_group)?;
    require("network_security_group_name", network_security_group_name)?;
    require("security_rule_name", name)?;

    let url = client.child_url(
        resource_group,
        PARENT_TYPE,
        network_security_group_name,
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

/// List one page of rules of a network security group.
pub async fn list(
    client: &NetworkClient,
    resource_group: &str,
    network_security_group_name: &str,
) -> Result<Page<SecurityRule>> {
    require("resource_group", resource_group)?;
    require("network_security_group_name", network_security_group_name)?;

    let url = client.child_collection_url(
        resource_group,
        PARENT_TYPE,
        network_security_group_name,
        CHILD_TYPE,
    );
    paging::fetch_page(client, &url).await
}

/// List all rules of a network security group (auto-paginate).
pub async fn list_all(
    client: &NetworkClient,
    resource_group: &str,
    network_security_group_name: &str,
) -> Result<Vec<SecurityRule>> {
    require("resource_group", resource_group)?;
    require("network_security_group_name", network_security_group_name)?;

    let url = client.child_collection_url(
        resource_group,
        PARENT_TYPE,
        network_security_group_name,
        CHILD_TYPE,
    );
    paging::fetch_all(client, url).await
}
