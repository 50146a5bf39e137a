//! Typed async client for the Azure Network resource provider REST API.
//!
//! This crate is plumbing over the Resource Manager wire protocol: one data
//! model per network resource, one operations module per resource collection,
//! and a client that handles authentication, URL templates, and next-link
//! pagination.
//!
//! # Module Structure
//!
//! - [`auth`] - Azure Active Directory token acquisition
//! - [`client`] - Main client for making Resource Manager requests
//! - [`config`] - Client options and subscription discovery
//! - [`http`] - HTTP utilities for REST API calls
//! - [`models`] - Wire data models for network resources
//! - [`operations`] - Per-collection request functions
//! - [`paging`] - Next-link pagination helpers
//!
//! # Example
//!
//! ```ignore
//! use aznet::auth::ClientSecretCredential;
//! use aznet::{operations, NetworkClient};
//! use std::sync::Arc;
//!
//! async fn example() -> aznet::Result<()> {
//!     let credential = Arc::new(ClientSecretCredential::from_env()?);
//!     let subscription = aznet::config::default_subscription().unwrap_or_default();
//!     let client = NetworkClient::new(&subscription, credential)?;
//!
//!     let vnets = operations::virtual_networks::list_all(&client, "my-group").await?;
//!     for vnet in vnets {
//!         println!("{}", vnet.name.unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod operation;
pub mod operations;
pub mod paging;
pub mod resource_id;

pub use client::NetworkClient;
pub use config::ClientOptions;
pub use error::{CloudError, CloudErrorBody, Error, Result};
pub use operation::Accepted;
pub use paging::Page;
pub use resource_id::ResourceId;

/// Version injected at compile time via AZNET_VERSION env var (set by CI/CD),
/// or the crate version for local builds.
pub const VERSION: &str = match option_env!("AZNET_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};
