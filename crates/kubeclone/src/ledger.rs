// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Record of what a run has created in the sink cluster.

use crate::metadata::IdentityRecord;

/// Ordered record of every sink-side object created by the current run.
///
/// Entries are appended only after a create succeeds, so at any point the
/// ledger is exactly what rollback needs to remove.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
	services: Vec<IdentityRecord>,
	replication_controllers: Vec<IdentityRecord>,
}

impl Ledger {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn record_service(&mut self, identity: IdentityRecord) {
		self.services.push(identity);
	}

	pub fn record_replication_controller(&mut self, identity: IdentityRecord) {
		self.replication_controllers.push(identity);
	}

	/// Services created so far, in creation order.
	pub fn services(&self) -> &[IdentityRecord] {
		&self.services
	}

	/// Replication controllers created so far, in creation order.
	pub fn replication_controllers(&self) -> &[IdentityRecord] {
		&self.replication_controllers
	}

	pub fn len(&self) -> usize {
		self.services.len() + self.replication_controllers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Empty the ledger, handing back `(services, replication_controllers)`.
	pub fn take(&mut self) -> (Vec<IdentityRecord>, Vec<IdentityRecord>) {
		(
			std::mem::take(&mut self.services),
			std::mem::take(&mut self.replication_controllers),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn identity(name: &str) -> IdentityRecord {
		IdentityRecord {
			name: name.to_string(),
			namespace: "default".to_string(),
			..Default::default()
		}
	}

	#[test]
	fn keeps_kinds_separate_and_ordered() {
		let mut ledger = Ledger::new();
		ledger.record_service(identity("web"));
		ledger.record_replication_controller(identity("web-rc"));
		ledger.record_service(identity("api"));

		let services: Vec<_> = ledger.services().iter().map(|r| r.name.as_str()).collect();
		assert_eq!(services, vec!["web", "api"]);
		assert_eq!(ledger.replication_controllers(), &[identity("web-rc")]);
		assert_eq!(ledger.len(), 3);
	}

	#[test]
	fn take_clears() {
		let mut ledger = Ledger::new();
		ledger.record_service(identity("web"));

		let (services, rcs) = ledger.take();
		assert_eq!(services.len(), 1);
		assert!(rcs.is_empty());
		assert!(ledger.is_empty());
	}
}
