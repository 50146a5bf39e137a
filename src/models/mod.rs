//! Wire data models for Network provider resources.
//!
//! Every model mirrors the JSON resource schema: flat optional fields,
//! camelCase names, resource-specific fields nested under `properties`, and
//! sibling references expressed as [`common::SubResource`] id pointers.

pub mod application_gateway;
pub mod common;
pub mod load_balancer;
pub mod network_interface;
pub mod network_security_group;
pub mod public_ip;
pub mod virtual_network;

pub use application_gateway::{
    ApplicationGateway, ApplicationGatewayBackendAddress, ApplicationGatewayBackendAddressPool,
    ApplicationGatewayBackendHttpSettings, ApplicationGatewayFrontendIpConfiguration,
    ApplicationGatewayFrontendPort, ApplicationGatewayHttpListener,
    ApplicationGatewayIpConfiguration, ApplicationGatewayProbe, ApplicationGatewayProperties,
    ApplicationGatewayRequestRoutingRule, ApplicationGatewaySku,
};
pub use common::{provisioning_state, SubResource};
pub use load_balancer::{
    BackendAddressPool, FrontendIpConfiguration, InboundNatRule, LoadBalancer,
    LoadBalancerProperties, LoadBalancingRule, Probe,
};
pub use network_interface::{
    NetworkInterface, NetworkInterfaceDnsSettings, NetworkInterfaceIpConfiguration,
    NetworkInterfaceProperties,
};
pub use network_security_group::{
    NetworkSecurityGroup, NetworkSecurityGroupProperties, SecurityRule, SecurityRuleProperties,
};
pub use public_ip::{PublicIpAddress, PublicIpAddressDnsSettings, PublicIpAddressProperties};
pub use virtual_network::{
    AddressSpace, DhcpOptions, Subnet, SubnetProperties, VirtualNetwork, VirtualNetworkProperties,
};
