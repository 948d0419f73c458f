// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Top-level run control.

use std::sync::Arc;

use kubeclone_k8s::{ClusterClient, Selector};

use crate::config::{ClonerConfig, Target};
use crate::context::{CloneRun, RunSummary};
use crate::error::CloneError;

/// Clone from `source` into `sink` as configured.
///
/// Returns the run summary on completion. Any error returned is terminal;
/// by the time it is returned the failure policy has already been applied.
pub async fn run(
	source: Arc<dyn ClusterClient>,
	sink: Arc<dyn ClusterClient>,
	config: &ClonerConfig,
) -> Result<RunSummary, CloneError> {
	let mut run = CloneRun::new(source, sink, config.policy());
	run.execute(&config.target()).await
}

impl CloneRun {
	/// Clone the namespaces named by `target`.
	pub async fn execute(&mut self, target: &Target) -> Result<RunSummary, CloneError> {
		tracing::info!(policy = ?self.policy, target = ?target, "Starting clone");

		match target {
			Target::Namespace(namespace) => self.clone_namespace(namespace).await?,
			Target::All { extra } => {
				for namespace in self.list_namespaces().await? {
					self.clone_namespace(&namespace).await?;
				}
				// Cloned even when the listing already returned them.
				for namespace in extra {
					self.clone_namespace(namespace).await?;
				}
			}
		}

		let summary = self.summary;
		tracing::info!(
			namespaces = summary.namespaces,
			services = summary.services_created,
			replication_controllers = summary.replication_controllers_created,
			skipped = summary.skipped,
			failures = summary.failures,
			"Cloned"
		);
		Ok(summary)
	}

	async fn list_namespaces(&self) -> Result<Vec<String>, CloneError> {
		let namespaces = self
			.source
			.list_namespaces(&Selector::everything())
			.await
			.map_err(|source| CloneError::ListNamespaces { source })?;

		Ok(namespaces
			.into_iter()
			.filter_map(|ns| ns.metadata.name)
			.collect())
	}
}
