// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Run-scoped state shared by the orchestrator, replicators and failure policy.

use std::sync::Arc;

use kubeclone_k8s::ClusterClient;

use crate::ledger::Ledger;
use crate::policy::FailurePolicy;

/// Counters reported when a run completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
	/// Namespaces fully walked
	pub namespaces: usize,
	pub services_created: usize,
	pub replication_controllers_created: usize,
	/// Built-in services passed over
	pub skipped: usize,
	/// Create failures tolerated under the continue policy
	pub failures: usize,
}

/// One clone run: the two cluster handles, the failure policy and
/// everything the run has created so far.
pub struct CloneRun {
	pub(crate) source: Arc<dyn ClusterClient>,
	pub(crate) sink: Arc<dyn ClusterClient>,
	pub(crate) policy: FailurePolicy,
	pub(crate) ledger: Ledger,
	pub(crate) summary: RunSummary,
}

impl CloneRun {
	pub fn new(
		source: Arc<dyn ClusterClient>,
		sink: Arc<dyn ClusterClient>,
		policy: FailurePolicy,
	) -> Self {
		Self {
			source,
			sink,
			policy,
			ledger: Ledger::new(),
			summary: RunSummary::default(),
		}
	}

	pub fn policy(&self) -> FailurePolicy {
		self.policy
	}

	pub fn ledger(&self) -> &Ledger {
		&self.ledger
	}

	pub fn summary(&self) -> RunSummary {
		self.summary
	}
}
