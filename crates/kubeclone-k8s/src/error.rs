// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt;

use thiserror::Error;

/// Result type alias for cluster operations.
pub type K8sResult<T> = Result<T, K8sError>;

/// The resource kinds the cloner touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
	Service,
	ReplicationController,
	Namespace,
}

impl fmt::Display for ResourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ResourceKind::Service => "Service",
			ResourceKind::ReplicationController => "ReplicationController",
			ResourceKind::Namespace => "Namespace",
		};
		f.write_str(name)
	}
}

/// Errors that can occur during cluster operations.
#[derive(Error, Debug)]
pub enum K8sError {
	#[error("K8s API error: {message}")]
	ApiError { message: String },

	#[error("{kind} not found: {name}")]
	NotFound { kind: ResourceKind, name: String },

	#[error("{kind} already exists: {name}")]
	AlreadyExists { kind: ResourceKind, name: String },

	#[error("Invalid cluster configuration: {message}")]
	Config { message: String },
}

impl K8sError {
	/// Map a kube error for a named object, turning 404/409 into typed variants.
	pub(crate) fn for_object(err: kube::Error, kind: ResourceKind, name: &str) -> Self {
		match err {
			kube::Error::Api(ref resp) if resp.code == 404 => K8sError::NotFound {
				kind,
				name: name.into(),
			},
			kube::Error::Api(ref resp) if resp.code == 409 => K8sError::AlreadyExists {
				kind,
				name: name.into(),
			},
			e => e.into(),
		}
	}
}

impl From<kube::Error> for K8sError {
	fn from(err: kube::Error) -> Self {
		K8sError::ApiError {
			message: err.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_names_the_kind() {
		let err = K8sError::AlreadyExists {
			kind: ResourceKind::ReplicationController,
			name: "web-rc".to_string(),
		};
		assert_eq!(err.to_string(), "ReplicationController already exists: web-rc");

		let err = K8sError::NotFound {
			kind: ResourceKind::Service,
			name: "web".to_string(),
		};
		assert_eq!(err.to_string(), "Service not found: web");
	}
}
