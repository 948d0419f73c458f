// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cloner configuration.

use crate::policy::FailurePolicy;

/// Namespace cloned in addition to the listed ones in all-namespaces mode.
///
/// Older API servers left it out of the namespace listing.
pub const SYSTEM_NAMESPACE: &str = "kube-system";

/// Configuration for one clone run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonerConfig {
	/// Clone only this namespace. `None` or empty clones every namespace.
	pub namespace: Option<String>,
	/// Namespaces cloned after the listed ones in all-namespaces mode, even
	/// when the listing already returned them.
	pub extra_namespaces: Vec<String>,
	/// Log create failures and keep going.
	pub continue_on_error: bool,
	/// Delete everything created so far on the first create failure.
	pub rollback_on_error: bool,
}

impl Default for ClonerConfig {
	fn default() -> Self {
		Self {
			namespace: None,
			extra_namespaces: vec![SYSTEM_NAMESPACE.to_string()],
			continue_on_error: false,
			rollback_on_error: false,
		}
	}
}

/// Which namespaces a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
	/// A single named namespace.
	Namespace(String),
	/// Every namespace the source lists, then each of `extra`.
	All { extra: Vec<String> },
}

impl ClonerConfig {
	pub fn policy(&self) -> FailurePolicy {
		FailurePolicy::from_flags(self.continue_on_error, self.rollback_on_error)
	}

	pub fn target(&self) -> Target {
		match self.namespace.as_deref().map(str::trim) {
			Some(ns) if !ns.is_empty() => Target::Namespace(ns.to_string()),
			_ => Target::All {
				extra: self.extra_namespaces.clone(),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_clones_everything_plus_system_namespace() {
		let config = ClonerConfig::default();
		assert_eq!(
			config.target(),
			Target::All {
				extra: vec!["kube-system".to_string()]
			}
		);
		assert_eq!(config.policy(), FailurePolicy::FailFast);
	}

	#[test]
	fn named_namespace_selects_single_mode() {
		let config = ClonerConfig {
			namespace: Some("default".to_string()),
			..Default::default()
		};
		assert_eq!(config.target(), Target::Namespace("default".to_string()));
	}

	#[test]
	fn blank_namespace_means_all() {
		let config = ClonerConfig {
			namespace: Some(String::new()),
			extra_namespaces: Vec::new(),
			..Default::default()
		};
		assert_eq!(config.target(), Target::All { extra: Vec::new() });
	}
}
