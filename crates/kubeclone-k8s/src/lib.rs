// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Cluster handle abstraction for kubeclone.
//!
//! This crate provides:
//! - A trait-based cluster client covering the Service, ReplicationController
//!   and Namespace operations the cloner needs
//! - Production implementation using the kube crate
//! - An in-memory mock cluster for tests

mod client;
mod error;
mod kube_client;
mod mock;
mod selector;
mod types;

pub use client::ClusterClient;
pub use error::{K8sError, K8sResult, ResourceKind};
pub use kube_client::KubeClient;
pub use mock::{Call, MockClusterClient};
pub use selector::Selector;
pub use types::{
	Namespace, ObjectMeta, ReplicationController, ReplicationControllerSpec, Service, ServiceSpec,
};
