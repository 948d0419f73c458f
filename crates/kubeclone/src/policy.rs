// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! What happens when creating an object in the sink fails.

use kubeclone_k8s::{ClusterClient, K8sError, ResourceKind};

use crate::context::CloneRun;
use crate::error::CloneError;
use crate::ledger::Ledger;
use crate::metadata::IdentityRecord;

/// Reaction to a failed create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
	/// Log the failure and carry on with the next object
	Continue,
	/// Delete everything the run created, then stop
	Rollback,
	/// Stop immediately, leaving the sink as it is
	FailFast,
}

impl FailurePolicy {
	/// Resolve the two configuration flags. `continue_on_error` is checked
	/// first and wins when both are set.
	pub fn from_flags(continue_on_error: bool, rollback_on_error: bool) -> Self {
		if continue_on_error {
			FailurePolicy::Continue
		} else if rollback_on_error {
			FailurePolicy::Rollback
		} else {
			FailurePolicy::FailFast
		}
	}
}

/// Outcome of a rollback sweep.
#[derive(Debug, Default)]
pub struct RollbackReport {
	/// Objects removed from the sink, in deletion order
	pub deleted: Vec<(ResourceKind, IdentityRecord)>,
	/// Deletes that failed; the sweep carried on past each of them
	pub failed: Vec<(ResourceKind, IdentityRecord, K8sError)>,
}

impl RollbackReport {
	pub fn attempted(&self) -> usize {
		self.deleted.len() + self.failed.len()
	}
}

/// Delete every object recorded in `ledger` from `sink`, replication
/// controllers first, then services. The ledger is left empty.
///
/// Individual delete failures are logged and collected; they never stop
/// the sweep.
pub async fn rollback(sink: &dyn ClusterClient, ledger: &mut Ledger) -> RollbackReport {
	let (services, replication_controllers) = ledger.take();
	let mut report = RollbackReport::default();

	tracing::info!(
		replication_controllers = replication_controllers.len(),
		services = services.len(),
		"Performing rollback"
	);

	for rc in replication_controllers {
		let result = sink
			.delete_replication_controller(&rc.namespace, &rc.name)
			.await;
		record(&mut report, ResourceKind::ReplicationController, rc, result);
	}
	for svc in services {
		let result = sink.delete_service(&svc.namespace, &svc.name).await;
		record(&mut report, ResourceKind::Service, svc, result);
	}

	report
}

fn record(
	report: &mut RollbackReport,
	kind: ResourceKind,
	identity: IdentityRecord,
	result: Result<(), K8sError>,
) {
	match result {
		Ok(()) => {
			tracing::info!(kind = %kind, object = %identity, "Rolled back");
			report.deleted.push((kind, identity));
		}
		Err(e) => {
			tracing::warn!(kind = %kind, object = %identity, error = %e, "Rollback delete failed");
			report.failed.push((kind, identity, e));
		}
	}
}

impl CloneRun {
	/// Apply the failure policy to a failed create of `identity`.
	///
	/// Returns `Ok(())` when the run should carry on, otherwise the error
	/// that ends it. Rollback happens before the error is returned.
	pub(crate) async fn handle_failure(
		&mut self,
		kind: ResourceKind,
		identity: IdentityRecord,
		error: K8sError,
	) -> Result<(), CloneError> {
		tracing::error!(kind = %kind, object = %identity, error = %error, "Create failed");

		match self.policy {
			FailurePolicy::Continue => {
				self.summary.failures += 1;
				Ok(())
			}
			FailurePolicy::Rollback => {
				let report = rollback(self.sink.as_ref(), &mut self.ledger).await;
				Err(CloneError::RolledBack {
					kind,
					identity,
					source: error,
					report,
				})
			}
			FailurePolicy::FailFast => Err(CloneError::Aborted {
				kind,
				identity,
				source: error,
			}),
		}
	}
}
