//! Virtual network and subnet data models.

use super::common::SubResource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A virtual network in a resource group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetwork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    /// Opaque concurrency token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<VirtualNetworkProperties>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetworkProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_space: Option<AddressSpace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhcp_options: Option<DhcpOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<Subnet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

/// CIDR blocks reserved for a virtual network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSpace {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address_prefixes: Vec<String>,
}

/// DNS servers handed out to the network's DHCP clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DhcpOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_servers: Vec<String>,
}

/// A subnet of a virtual network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<SubnetProperties>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_security_group: Option<SubResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_table: Option<SubResource>,
    /// NIC ip configurations placed in this subnet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_configurations: Vec<SubResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_network_round_trips_properties() {
        let body = r#"{
            "id": "/subscriptions/s/resourceGroups/g/providers/Microsoft.Network/virtualNetworks/vnet-1",
            "name": "vnet-1",
            "type": "Microsoft.Network/virtualNetworks",
            "location": "westus",
            "etag": "W/\"abc\"",
            "properties": {
                "addressSpace": {"addressPrefixes": ["10.0.0.0/16"]},
                "subnets": [
                    {
                        "name": "front",
                        "properties": {
                            "addressPrefix": "10.0.1.0/24",
                            "networkSecurityGroup": {"id": "/subscriptions/s/resourceGroups/g/providers/Microsoft.Network/networkSecurityGroups/nsg"}
                        }
                    }
                ],
                "provisioningState": "Succeeded"
            }
        }"#;

        let vnet: VirtualNetwork = serde_json::from_str(body).unwrap();
        assert_eq!(vnet.name.as_deref(), Some("vnet-1"));
        assert_eq!(vnet.etag.as_deref(), Some("W/\"abc\""));

        let properties = vnet.properties.as_ref().unwrap();
        assert_eq!(
            properties.address_space.as_ref().unwrap().address_prefixes,
            vec!["10.0.0.0/16"]
        );
        assert_eq!(properties.provisioning_state.as_deref(), Some("Succeeded"));

        let subnet = &properties.subnets[0];
        let nsg = subnet
            .properties
            .as_ref()
            .unwrap()
            .network_security_group
            .as_ref()
            .unwrap();
        assert!(nsg.id.as_deref().unwrap().ends_with("/nsg"));

        // Wire names survive re-serialization
        let json = serde_json::to_value(&vnet).unwrap();
        assert_eq!(json["properties"]["addressSpace"]["addressPrefixes"][0], "10.0.0.0/16");
        assert_eq!(json["type"], "Microsoft.Network/virtualNetworks");
    }

    #[test]
    fn absent_fields_are_skipped_on_serialize() {
        let subnet = Subnet {
            name: Some("default".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&subnet).unwrap();
        assert_eq!(json, r#"{"name":"default"}"#);
    }
}
