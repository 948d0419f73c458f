// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Clone run error types.

use kubeclone_k8s::{K8sError, ResourceKind};

use crate::metadata::IdentityRecord;
use crate::policy::RollbackReport;

/// Errors that end a clone run.
///
/// Create failures tolerated under the continue policy never surface here.
#[derive(Debug, thiserror::Error)]
pub enum CloneError {
	/// The source namespace listing failed
	#[error("Unable to list namespaces")]
	ListNamespaces {
		#[source]
		source: K8sError,
	},

	/// The source service listing failed
	#[error("Could not list services in namespace {namespace}")]
	ListServices {
		namespace: String,
		#[source]
		source: K8sError,
	},

	/// The source replication controller listing failed
	#[error("Could not list replication controllers in namespace {namespace}")]
	ListReplicationControllers {
		namespace: String,
		#[source]
		source: K8sError,
	},

	/// A create failed and the run stopped without cleaning up
	#[error("Failed to create {kind} {identity}")]
	Aborted {
		kind: ResourceKind,
		identity: IdentityRecord,
		#[source]
		source: K8sError,
	},

	/// A create failed and the run removed what it had created
	#[error(
		"Failed to create {kind} {identity}; rolled back {} object(s), {} delete(s) failed",
		.report.deleted.len(),
		.report.failed.len()
	)]
	RolledBack {
		kind: ResourceKind,
		identity: IdentityRecord,
		#[source]
		source: K8sError,
		report: RollbackReport,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error as _;

	#[test]
	fn rolled_back_message_counts_report() {
		let identity = IdentityRecord {
			name: "api".to_string(),
			namespace: "default".to_string(),
			..Default::default()
		};
		let mut report = RollbackReport::default();
		report.deleted.push((ResourceKind::Service, identity.clone()));
		report.failed.push((
			ResourceKind::Service,
			identity.clone(),
			K8sError::ApiError {
				message: "boom".to_string(),
			},
		));

		let err = CloneError::RolledBack {
			kind: ResourceKind::ReplicationController,
			identity,
			source: K8sError::ApiError {
				message: "quota exceeded".to_string(),
			},
			report,
		};

		assert_eq!(
			err.to_string(),
			"Failed to create ReplicationController default/api; rolled back 1 object(s), 1 delete(s) failed"
		);
		assert_eq!(
			err.source().map(|e| e.to_string()),
			Some("K8s API error: quota exceeded".to_string())
		);
	}
}
