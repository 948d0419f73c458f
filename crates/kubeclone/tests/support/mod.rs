// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use kubeclone::{CloneRun, FailurePolicy};
use kubeclone_k8s::{
	Call, ClusterClient, MockClusterClient, ObjectMeta, ReplicationController,
	ReplicationControllerSpec, Service, ServiceSpec,
};

pub fn meta(namespace: &str, name: &str) -> ObjectMeta {
	ObjectMeta {
		name: Some(name.to_string()),
		namespace: Some(namespace.to_string()),
		labels: Some(BTreeMap::from([("app".to_string(), name.to_string())])),
		resource_version: Some("981".to_string()),
		uid: Some(format!("uid-{namespace}-{name}")),
		..Default::default()
	}
}

pub fn service(namespace: &str, name: &str) -> Service {
	Service {
		metadata: meta(namespace, name),
		spec: Some(ServiceSpec {
			selector: Some(BTreeMap::from([("app".to_string(), name.to_string())])),
			..Default::default()
		}),
		status: None,
	}
}

pub fn rc(namespace: &str, name: &str) -> ReplicationController {
	ReplicationController {
		metadata: meta(namespace, name),
		spec: Some(ReplicationControllerSpec {
			replicas: Some(2),
			..Default::default()
		}),
		status: None,
	}
}

pub fn clone_run(
	source: &MockClusterClient,
	sink: &MockClusterClient,
	policy: FailurePolicy,
) -> CloneRun {
	CloneRun::new(client(source), client(sink), policy)
}

pub fn client(mock: &MockClusterClient) -> Arc<dyn ClusterClient> {
	Arc::new(mock.clone())
}

pub fn create_service(namespace: &str, name: &str) -> Call {
	Call::CreateService {
		namespace: namespace.to_string(),
		name: name.to_string(),
	}
}

pub fn create_rc(namespace: &str, name: &str) -> Call {
	Call::CreateReplicationController {
		namespace: namespace.to_string(),
		name: name.to_string(),
	}
}

pub fn delete_service(namespace: &str, name: &str) -> Call {
	Call::DeleteService {
		namespace: namespace.to_string(),
		name: name.to_string(),
	}
}

pub fn delete_rc(namespace: &str, name: &str) -> Call {
	Call::DeleteReplicationController {
		namespace: namespace.to_string(),
		name: name.to_string(),
	}
}

/// Namespaces the run listed services for, in order.
pub fn visited_namespaces(source: &MockClusterClient) -> Vec<String> {
	source
		.calls()
		.into_iter()
		.filter_map(|c| match c {
			Call::ListServices { namespace } => Some(namespace),
			_ => None,
		})
		.collect()
}
