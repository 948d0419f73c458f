// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-namespace orchestration.

use kubeclone_k8s::Selector;
use tracing::instrument;

use crate::context::CloneRun;
use crate::error::CloneError;

/// Service every namespace carries implicitly. The sink has its own.
pub const BUILTIN_SERVICE_NAME: &str = "kubernetes";

fn is_builtin_service(name: &str) -> bool {
	name == BUILTIN_SERVICE_NAME
}

impl CloneRun {
	/// Clone one namespace: every service first, then every replication
	/// controller, each in source listing order.
	///
	/// A failed listing ends the run regardless of the failure policy.
	#[instrument(skip(self))]
	pub async fn clone_namespace(&mut self, namespace: &str) -> Result<(), CloneError> {
		tracing::info!("Cloning namespace");
		let everything = Selector::everything();

		let services = self
			.source
			.list_services(namespace, &everything)
			.await
			.map_err(|source| CloneError::ListServices {
				namespace: namespace.to_string(),
				source,
			})?;

		for service in &services {
			let name = service.metadata.name.as_deref().unwrap_or_default();
			if is_builtin_service(name) {
				tracing::info!(service = %name, "Skipping built-in service");
				self.summary.skipped += 1;
				continue;
			}
			tracing::info!(service = %name, "Cloning service");
			self.replicate_service(namespace, service).await?;
		}

		let replication_controllers = self
			.source
			.list_replication_controllers(namespace, &everything)
			.await
			.map_err(|source| CloneError::ListReplicationControllers {
				namespace: namespace.to_string(),
				source,
			})?;

		for rc in &replication_controllers {
			let name = rc.metadata.name.as_deref().unwrap_or_default();
			tracing::info!(replication_controller = %name, "Cloning replication controller");
			self.replicate_replication_controller(namespace, rc).await?;
		}

		self.summary.namespaces += 1;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_the_exact_builtin_name_is_skipped() {
		assert!(is_builtin_service("kubernetes"));
		assert!(!is_builtin_service("kubernetes-dashboard"));
		assert!(!is_builtin_service("Kubernetes"));
		assert!(!is_builtin_service(""));
	}
}
