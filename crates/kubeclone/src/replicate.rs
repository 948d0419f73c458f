// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-object replicators.

use kubeclone_k8s::{ReplicationController, ResourceKind, Service};

use crate::context::CloneRun;
use crate::error::CloneError;
use crate::metadata::IdentityRecord;

impl CloneRun {
	/// Create a copy of `service` in the sink.
	///
	/// The copy carries the projected metadata and the source spec verbatim.
	/// On success the identity is recorded in the ledger; on failure the
	/// failure policy decides whether the run goes on.
	pub async fn replicate_service(
		&mut self,
		namespace: &str,
		service: &Service,
	) -> Result<(), CloneError> {
		let identity = IdentityRecord::project_in(&service.metadata, namespace);
		let replica = Service {
			metadata: identity.to_object_meta(),
			spec: service.spec.clone(),
			..Default::default()
		};

		match self.sink.create_service(&identity.namespace, replica).await {
			Ok(_) => {
				tracing::debug!(object = %identity, "Created service");
				self.ledger.record_service(identity);
				self.summary.services_created += 1;
				Ok(())
			}
			Err(e) => self.handle_failure(ResourceKind::Service, identity, e).await,
		}
	}

	/// Create a copy of `rc` in the sink. Same contract as
	/// [`replicate_service`](Self::replicate_service).
	pub async fn replicate_replication_controller(
		&mut self,
		namespace: &str,
		rc: &ReplicationController,
	) -> Result<(), CloneError> {
		let identity = IdentityRecord::project_in(&rc.metadata, namespace);
		let replica = ReplicationController {
			metadata: identity.to_object_meta(),
			spec: rc.spec.clone(),
			..Default::default()
		};

		match self
			.sink
			.create_replication_controller(&identity.namespace, replica)
			.await
		{
			Ok(_) => {
				tracing::debug!(object = %identity, "Created replication controller");
				self.ledger.record_replication_controller(identity);
				self.summary.replication_controllers_created += 1;
				Ok(())
			}
			Err(e) => {
				self
					.handle_failure(ResourceKind::ReplicationController, identity, e)
					.await
			}
		}
	}
}
