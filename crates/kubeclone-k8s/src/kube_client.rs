// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Namespace, ReplicationController, Service};
use kube::{
	api::{Api, DeleteParams, PostParams},
	Client, Config,
};
use tracing::{debug, instrument};

use crate::client::ClusterClient;
use crate::error::{K8sError, K8sResult, ResourceKind};
use crate::selector::Selector;

/// Production cluster client implementation using the kube crate.
#[derive(Clone)]
pub struct KubeClient {
	client: Client,
	endpoint: String,
}

impl KubeClient {
	/// Create a client bound to the API server at `url`.
	///
	/// No kubeconfig is consulted; the endpoint is used as-is, the same way a
	/// bare host URL is handed to the cloner on the command line. A URL
	/// without a scheme (`10.0.0.1:8080`) is taken as plain `http`.
	pub fn from_url(url: &str) -> K8sResult<Self> {
		let endpoint = with_default_scheme(url.trim());
		let uri: http::Uri = endpoint
			.parse()
			.map_err(|e: http::uri::InvalidUri| K8sError::Config {
				message: format!("invalid cluster URL {url:?}: {e}"),
			})?;
		if uri.host().is_none() {
			return Err(K8sError::Config {
				message: format!("cluster URL {url:?} has no host"),
			});
		}

		let config = Config::new(uri);
		let client = Client::try_from(config).map_err(|e| K8sError::Config {
			message: e.to_string(),
		})?;
		debug!(endpoint = %endpoint, "K8s client initialized");
		Ok(Self { client, endpoint })
	}

	/// The API server this client talks to.
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	fn services(&self, namespace: &str) -> Api<Service> {
		Api::namespaced(self.client.clone(), namespace)
	}

	fn replication_controllers(&self, namespace: &str) -> Api<ReplicationController> {
		Api::namespaced(self.client.clone(), namespace)
	}
}

fn with_default_scheme(url: &str) -> String {
	if url.is_empty() || url.starts_with('/') || url.contains("://") {
		url.to_string()
	} else {
		format!("http://{url}")
	}
}

#[async_trait]
impl ClusterClient for KubeClient {
	#[instrument(skip(self), fields(endpoint = %self.endpoint))]
	async fn list_services(
		&self,
		namespace: &str,
		selector: &Selector,
	) -> K8sResult<Vec<Service>> {
		let list = self
			.services(namespace)
			.list(&selector.to_list_params())
			.await?;
		Ok(list.items)
	}

	#[instrument(skip(self), fields(endpoint = %self.endpoint))]
	async fn list_replication_controllers(
		&self,
		namespace: &str,
		selector: &Selector,
	) -> K8sResult<Vec<ReplicationController>> {
		let list = self
			.replication_controllers(namespace)
			.list(&selector.to_list_params())
			.await?;
		Ok(list.items)
	}

	#[instrument(skip(self), fields(endpoint = %self.endpoint))]
	async fn list_namespaces(&self, selector: &Selector) -> K8sResult<Vec<Namespace>> {
		let namespaces: Api<Namespace> = Api::all(self.client.clone());
		let list = namespaces.list(&selector.to_list_params()).await?;
		Ok(list.items)
	}

	async fn create_service(&self, namespace: &str, service: Service) -> K8sResult<Service> {
		let name = service.metadata.name.clone().unwrap_or_default();
		self
			.services(namespace)
			.create(&PostParams::default(), &service)
			.await
			.map_err(|e| K8sError::for_object(e, ResourceKind::Service, &name))
	}

	async fn create_replication_controller(
		&self,
		namespace: &str,
		rc: ReplicationController,
	) -> K8sResult<ReplicationController> {
		let name = rc.metadata.name.clone().unwrap_or_default();
		self
			.replication_controllers(namespace)
			.create(&PostParams::default(), &rc)
			.await
			.map_err(|e| K8sError::for_object(e, ResourceKind::ReplicationController, &name))
	}

	async fn delete_service(&self, namespace: &str, name: &str) -> K8sResult<()> {
		match self
			.services(namespace)
			.delete(name, &DeleteParams::default())
			.await
		{
			Ok(_) => Ok(()),
			Err(e) => Err(K8sError::for_object(e, ResourceKind::Service, name)),
		}
	}

	async fn delete_replication_controller(
		&self,
		namespace: &str,
		name: &str,
	) -> K8sResult<()> {
		match self
			.replication_controllers(namespace)
			.delete(name, &DeleteParams::default())
			.await
		{
			Ok(_) => Ok(()),
			Err(e) => Err(K8sError::for_object(e, ResourceKind::ReplicationController, name)),
		}
	}
}
