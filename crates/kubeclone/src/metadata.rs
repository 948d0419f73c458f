// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Projection of source metadata into a sink-safe identity.

use std::collections::BTreeMap;
use std::fmt;

use kubeclone_k8s::ObjectMeta;

/// The metadata carried across clusters for one object.
///
/// Cluster-assigned fields (resource version, UID, creation timestamp, owner
/// references, status) never appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityRecord {
	pub name: String,
	pub namespace: String,
	pub deletion_grace_period_seconds: Option<i64>,
	pub labels: BTreeMap<String, String>,
	pub annotations: BTreeMap<String, String>,
}

impl IdentityRecord {
	/// Copy name, namespace, deletion grace period, labels and annotations
	/// out of `meta`. Nothing else is read.
	pub fn project(meta: &ObjectMeta) -> Self {
		Self {
			name: meta.name.clone().unwrap_or_default(),
			namespace: meta.namespace.clone().unwrap_or_default(),
			deletion_grace_period_seconds: meta.deletion_grace_period_seconds,
			labels: meta.labels.clone().unwrap_or_default(),
			annotations: meta.annotations.clone().unwrap_or_default(),
		}
	}

	/// Like [`project`](Self::project), filling in `namespace` when the
	/// source object did not carry one.
	pub fn project_in(meta: &ObjectMeta, namespace: &str) -> Self {
		let mut record = Self::project(meta);
		if record.namespace.is_empty() {
			record.namespace = namespace.to_string();
		}
		record
	}

	/// Build fresh object metadata for the sink-side object.
	pub fn to_object_meta(&self) -> ObjectMeta {
		ObjectMeta {
			name: Some(self.name.clone()),
			namespace: Some(self.namespace.clone()),
			deletion_grace_period_seconds: self.deletion_grace_period_seconds,
			labels: non_empty(&self.labels),
			annotations: non_empty(&self.annotations),
			..Default::default()
		}
	}
}

impl fmt::Display for IdentityRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.namespace, self.name)
	}
}

fn non_empty(map: &BTreeMap<String, String>) -> Option<BTreeMap<String, String>> {
	if map.is_empty() {
		None
	} else {
		Some(map.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use kubeclone_k8s::ObjectMeta;
	use proptest::prelude::*;

	fn source_meta() -> ObjectMeta {
		ObjectMeta {
			name: Some("web".to_string()),
			namespace: Some("default".to_string()),
			deletion_grace_period_seconds: Some(30),
			labels: Some(BTreeMap::from([("app".to_string(), "web".to_string())])),
			annotations: Some(BTreeMap::from([(
				"team".to_string(),
				"payments".to_string(),
			)])),
			resource_version: Some("48213".to_string()),
			uid: Some("3b1f7c2e-9d4a-4c1e-8f2b-1a2b3c4d5e6f".to_string()),
			generation: Some(7),
			self_link: Some("/api/v1/namespaces/default/services/web".to_string()),
			finalizers: Some(vec!["kubernetes".to_string()]),
			..Default::default()
		}
	}

	#[test]
	fn copies_identity_fields() {
		let record = IdentityRecord::project(&source_meta());

		assert_eq!(record.name, "web");
		assert_eq!(record.namespace, "default");
		assert_eq!(record.deletion_grace_period_seconds, Some(30));
		assert_eq!(record.labels.get("app"), Some(&"web".to_string()));
		assert_eq!(record.annotations.get("team"), Some(&"payments".to_string()));
	}

	#[test]
	fn sink_meta_drops_cluster_assigned_fields() {
		let meta = IdentityRecord::project(&source_meta()).to_object_meta();

		assert_eq!(meta.name.as_deref(), Some("web"));
		assert_eq!(meta.namespace.as_deref(), Some("default"));
		assert!(meta.resource_version.is_none());
		assert!(meta.uid.is_none());
		assert!(meta.creation_timestamp.is_none());
		assert!(meta.generation.is_none());
		assert!(meta.self_link.is_none());
		assert!(meta.finalizers.is_none());
		assert!(meta.owner_references.is_none());
	}

	#[test]
	fn empty_maps_are_omitted_from_sink_meta() {
		let meta = IdentityRecord::project(&ObjectMeta {
			name: Some("bare".to_string()),
			..Default::default()
		})
		.to_object_meta();

		assert!(meta.labels.is_none());
		assert!(meta.annotations.is_none());
	}

	#[test]
	fn project_in_only_fills_missing_namespace() {
		let unscoped = ObjectMeta {
			name: Some("web".to_string()),
			..Default::default()
		};
		assert_eq!(IdentityRecord::project_in(&unscoped, "staging").namespace, "staging");
		assert_eq!(IdentityRecord::project_in(&source_meta(), "staging").namespace, "default");
	}

	#[test]
	fn displays_as_namespaced_name() {
		assert_eq!(IdentityRecord::project(&source_meta()).to_string(), "default/web");
	}

	fn string_map() -> impl Strategy<Value = BTreeMap<String, String>> {
		prop::collection::btree_map("[a-z][a-z0-9./-]{0,15}", "[a-zA-Z0-9 _-]{0,20}", 0..6)
	}

	proptest! {
		/// Whatever else the source carries, the projection keeps exactly the
		/// identity fields and their values.
		#[test]
		fn projection_keeps_only_identity_fields(
			name in "[a-z][a-z0-9-]{0,30}",
			namespace in "[a-z][a-z0-9-]{0,30}",
			grace in proptest::option::of(0i64..3600),
			labels in string_map(),
			annotations in string_map(),
			resource_version in "[0-9]{1,8}",
			uid in "[a-f0-9-]{36}",
		) {
			let meta = ObjectMeta {
				name: Some(name.clone()),
				namespace: Some(namespace.clone()),
				deletion_grace_period_seconds: grace,
				labels: Some(labels.clone()),
				annotations: Some(annotations.clone()),
				resource_version: Some(resource_version),
				uid: Some(uid),
				..Default::default()
			};

			let record = IdentityRecord::project(&meta);
			prop_assert_eq!(&record.name, &name);
			prop_assert_eq!(&record.namespace, &namespace);
			prop_assert_eq!(record.deletion_grace_period_seconds, grace);
			prop_assert_eq!(&record.labels, &labels);
			prop_assert_eq!(&record.annotations, &annotations);

			let projected = record.to_object_meta();
			prop_assert!(projected.resource_version.is_none());
			prop_assert!(projected.uid.is_none());
			prop_assert!(projected.creation_timestamp.is_none());
			prop_assert_eq!(projected.labels.unwrap_or_default(), labels);
			prop_assert_eq!(projected.annotations.unwrap_or_default(), annotations);
		}
	}
}
