// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::error::K8sResult;
use crate::selector::Selector;
use crate::types::{Namespace, ReplicationController, Service};

/// Trait for the cluster operations the cloner needs.
///
/// One implementation is bound to one cluster endpoint. The cloner holds two
/// of them for the lifetime of a run: the source it reads from and the sink
/// it writes to.
#[async_trait]
pub trait ClusterClient: Send + Sync {
	/// List services in a namespace matching the selector, in API order.
	async fn list_services(
		&self,
		namespace: &str,
		selector: &Selector,
	) -> K8sResult<Vec<Service>>;

	/// List replication controllers in a namespace matching the selector, in API order.
	async fn list_replication_controllers(
		&self,
		namespace: &str,
		selector: &Selector,
	) -> K8sResult<Vec<ReplicationController>>;

	/// List namespaces matching both the label and field dimensions of the selector.
	async fn list_namespaces(&self, selector: &Selector) -> K8sResult<Vec<Namespace>>;

	/// Create a service in the specified namespace.
	async fn create_service(&self, namespace: &str, service: Service) -> K8sResult<Service>;

	/// Create a replication controller in the specified namespace.
	async fn create_replication_controller(
		&self,
		namespace: &str,
		rc: ReplicationController,
	) -> K8sResult<ReplicationController>;

	/// Delete a service by name from the specified namespace.
	async fn delete_service(&self, namespace: &str, name: &str) -> K8sResult<()>;

	/// Delete a replication controller by name from the specified namespace.
	async fn delete_replication_controller(
		&self,
		namespace: &str,
		name: &str,
	) -> K8sResult<()>;
}
