// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! In-memory cluster used to exercise the cloner without a real API server.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::client::ClusterClient;
use crate::error::{K8sError, K8sResult, ResourceKind};
use crate::selector::Selector;
use crate::types::{Namespace, ObjectMeta, ReplicationController, Service};

/// A call made against a [`MockClusterClient`], recorded in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	ListNamespaces,
	ListServices { namespace: String },
	ListReplicationControllers { namespace: String },
	CreateService { namespace: String, name: String },
	CreateReplicationController { namespace: String, name: String },
	DeleteService { namespace: String, name: String },
	DeleteReplicationController { namespace: String, name: String },
}

#[derive(Default)]
struct State {
	namespaces: Vec<Namespace>,
	services: Vec<Service>,
	replication_controllers: Vec<ReplicationController>,
	calls: Vec<Call>,
	failing_creates: HashSet<(ResourceKind, String)>,
	failing_deletes: HashSet<(ResourceKind, String)>,
	failing_lists: HashSet<(ResourceKind, String)>,
}

/// A mock cluster that keeps objects in memory.
///
/// Objects are kept in insertion order so listings are deterministic. Creates
/// of an object that already exists fail with [`K8sError::AlreadyExists`],
/// deletes of an absent one with [`K8sError::NotFound`]. Individual creates,
/// deletes and listings can be made to fail with an API error.
#[derive(Clone, Default)]
pub struct MockClusterClient {
	state: Arc<Mutex<State>>,
}

impl MockClusterClient {
	pub fn new() -> Self {
		Self::default()
	}

	fn state(&self) -> MutexGuard<'_, State> {
		self.state.lock().unwrap_or_else(|e| e.into_inner())
	}

	/// Seed a namespace.
	pub fn with_namespace(self, name: &str) -> Self {
		self.state().namespaces.push(Namespace {
			metadata: meta(name, None),
			..Default::default()
		});
		self
	}

	/// Seed a service.
	pub fn with_service(self, service: Service) -> Self {
		self.state().services.push(service);
		self
	}

	/// Seed a replication controller.
	pub fn with_replication_controller(self, rc: ReplicationController) -> Self {
		self.state().replication_controllers.push(rc);
		self
	}

	/// Make the create of the named object fail.
	pub fn fail_create(self, kind: ResourceKind, name: &str) -> Self {
		self.state().failing_creates.insert((kind, name.to_string()));
		self
	}

	/// Make the delete of the named object fail.
	pub fn fail_delete(self, kind: ResourceKind, name: &str) -> Self {
		self.state().failing_deletes.insert((kind, name.to_string()));
		self
	}

	/// Make listing `kind` in `namespace` fail. Use an empty namespace with
	/// [`ResourceKind::Namespace`] to fail the namespace listing.
	pub fn fail_list(self, kind: ResourceKind, namespace: &str) -> Self {
		self
			.state()
			.failing_lists
			.insert((kind, namespace.to_string()));
		self
	}

	/// Every call made so far, in order.
	pub fn calls(&self) -> Vec<Call> {
		self.state().calls.clone()
	}

	/// Only the create and delete calls, in order.
	pub fn mutations(&self) -> Vec<Call> {
		self
			.calls()
			.into_iter()
			.filter(|c| {
				!matches!(
					c,
					Call::ListNamespaces
						| Call::ListServices { .. }
						| Call::ListReplicationControllers { .. }
				)
			})
			.collect()
	}

	/// `namespace/name` of every service currently held, in insertion order.
	pub fn service_names(&self) -> Vec<String> {
		self.state().services.iter().map(|s| qualified(&s.metadata)).collect()
	}

	/// `namespace/name` of every replication controller currently held.
	pub fn replication_controller_names(&self) -> Vec<String> {
		self
			.state()
			.replication_controllers
			.iter()
			.map(|rc| qualified(&rc.metadata))
			.collect()
	}

	/// Look up a held service.
	pub fn service(&self, namespace: &str, name: &str) -> Option<Service> {
		self
			.state()
			.services
			.iter()
			.find(|s| is(&s.metadata, namespace, name))
			.cloned()
	}

	/// Look up a held replication controller.
	pub fn replication_controller(&self, namespace: &str, name: &str) -> Option<ReplicationController> {
		self
			.state()
			.replication_controllers
			.iter()
			.find(|rc| is(&rc.metadata, namespace, name))
			.cloned()
	}
}

fn meta(name: &str, namespace: Option<&str>) -> ObjectMeta {
	ObjectMeta {
		name: Some(name.to_string()),
		namespace: namespace.map(str::to_string),
		..Default::default()
	}
}

fn is(meta: &ObjectMeta, namespace: &str, name: &str) -> bool {
	meta.namespace.as_deref() == Some(namespace) && meta.name.as_deref() == Some(name)
}

fn qualified(meta: &ObjectMeta) -> String {
	format!(
		"{}/{}",
		meta.namespace.as_deref().unwrap_or_default(),
		meta.name.as_deref().unwrap_or_default()
	)
}

fn injected(kind: ResourceKind, op: &str, name: &str) -> K8sError {
	K8sError::ApiError {
		message: format!("injected {op} failure for {kind} {name:?}"),
	}
}

#[async_trait]
impl ClusterClient for MockClusterClient {
	async fn list_services(
		&self,
		namespace: &str,
		_selector: &Selector,
	) -> K8sResult<Vec<Service>> {
		let mut state = self.state();
		state.calls.push(Call::ListServices {
			namespace: namespace.to_string(),
		});
		if state
			.failing_lists
			.contains(&(ResourceKind::Service, namespace.to_string()))
		{
			return Err(injected(ResourceKind::Service, "list", namespace));
		}
		Ok(state
			.services
			.iter()
			.filter(|s| s.metadata.namespace.as_deref() == Some(namespace))
			.cloned()
			.collect())
	}

	async fn list_replication_controllers(
		&self,
		namespace: &str,
		_selector: &Selector,
	) -> K8sResult<Vec<ReplicationController>> {
		let mut state = self.state();
		state.calls.push(Call::ListReplicationControllers {
			namespace: namespace.to_string(),
		});
		if state
			.failing_lists
			.contains(&(ResourceKind::ReplicationController, namespace.to_string()))
		{
			return Err(injected(ResourceKind::ReplicationController, "list", namespace));
		}
		Ok(state
			.replication_controllers
			.iter()
			.filter(|rc| rc.metadata.namespace.as_deref() == Some(namespace))
			.cloned()
			.collect())
	}

	async fn list_namespaces(&self, _selector: &Selector) -> K8sResult<Vec<Namespace>> {
		let mut state = self.state();
		state.calls.push(Call::ListNamespaces);
		if state
			.failing_lists
			.contains(&(ResourceKind::Namespace, String::new()))
		{
			return Err(injected(ResourceKind::Namespace, "list", ""));
		}
		Ok(state.namespaces.clone())
	}

	async fn create_service(&self, namespace: &str, mut service: Service) -> K8sResult<Service> {
		let name = service.metadata.name.clone().unwrap_or_default();
		let mut state = self.state();
		state.calls.push(Call::CreateService {
			namespace: namespace.to_string(),
			name: name.clone(),
		});
		if state
			.failing_creates
			.contains(&(ResourceKind::Service, name.clone()))
		{
			return Err(injected(ResourceKind::Service, "create", &name));
		}
		if state.services.iter().any(|s| is(&s.metadata, namespace, &name)) {
			return Err(K8sError::AlreadyExists {
				kind: ResourceKind::Service,
				name,
			});
		}
		service.metadata.namespace = Some(namespace.to_string());
		state.services.push(service.clone());
		Ok(service)
	}

	async fn create_replication_controller(
		&self,
		namespace: &str,
		mut rc: ReplicationController,
	) -> K8sResult<ReplicationController> {
		let name = rc.metadata.name.clone().unwrap_or_default();
		let mut state = self.state();
		state.calls.push(Call::CreateReplicationController {
			namespace: namespace.to_string(),
			name: name.clone(),
		});
		if state
			.failing_creates
			.contains(&(ResourceKind::ReplicationController, name.clone()))
		{
			return Err(injected(ResourceKind::ReplicationController, "create", &name));
		}
		if state
			.replication_controllers
			.iter()
			.any(|r| is(&r.metadata, namespace, &name))
		{
			return Err(K8sError::AlreadyExists {
				kind: ResourceKind::ReplicationController,
				name,
			});
		}
		rc.metadata.namespace = Some(namespace.to_string());
		state.replication_controllers.push(rc.clone());
		Ok(rc)
	}

	async fn delete_service(&self, namespace: &str, name: &str) -> K8sResult<()> {
		let mut state = self.state();
		state.calls.push(Call::DeleteService {
			namespace: namespace.to_string(),
			name: name.to_string(),
		});
		if state
			.failing_deletes
			.contains(&(ResourceKind::Service, name.to_string()))
		{
			return Err(injected(ResourceKind::Service, "delete", name));
		}
		let before = state.services.len();
		state.services.retain(|s| !is(&s.metadata, namespace, name));
		if state.services.len() == before {
			return Err(K8sError::NotFound {
				kind: ResourceKind::Service,
				name: name.to_string(),
			});
		}
		Ok(())
	}

	async fn delete_replication_controller(
		&self,
		namespace: &str,
		name: &str,
	) -> K8sResult<()> {
		let mut state = self.state();
		state.calls.push(Call::DeleteReplicationController {
			namespace: namespace.to_string(),
			name: name.to_string(),
		});
		if state
			.failing_deletes
			.contains(&(ResourceKind::ReplicationController, name.to_string()))
		{
			return Err(injected(ResourceKind::ReplicationController, "delete", name));
		}
		let before = state.replication_controllers.len();
		state
			.replication_controllers
			.retain(|rc| !is(&rc.metadata, namespace, name));
		if state.replication_controllers.len() == before {
			return Err(K8sError::NotFound {
				kind: ResourceKind::ReplicationController,
				name: name.to_string(),
			});
		}
		Ok(())
	}
}
