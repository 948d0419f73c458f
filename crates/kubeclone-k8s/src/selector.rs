// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use kube::api::ListParams;

/// Label and field selector used to scope list calls.
///
/// The cloner only ever lists with [`Selector::everything`]; both dimensions
/// are left unset so the API server applies no filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
	labels: Option<String>,
	fields: Option<String>,
}

impl Selector {
	/// A selector that matches every object in both dimensions.
	pub fn everything() -> Self {
		Self::default()
	}

	pub(crate) fn to_list_params(&self) -> ListParams {
		let mut lp = ListParams::default();
		if let Some(labels) = &self.labels {
			lp = lp.labels(labels);
		}
		if let Some(fields) = &self.fields {
			lp = lp.fields(fields);
		}
		lp
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn everything_sets_no_selectors() {
		let lp = Selector::everything().to_list_params();
		assert!(lp.label_selector.is_none());
		assert!(lp.field_selector.is_none());
	}

	#[test]
	fn populated_selector_flows_into_list_params() {
		let selector = Selector {
			labels: Some("app=web".to_string()),
			fields: Some("metadata.name=web".to_string()),
		};

		let lp = selector.to_list_params();
		assert_eq!(lp.label_selector.as_deref(), Some("app=web"));
		assert_eq!(lp.field_selector.as_deref(), Some("metadata.name=web"));
	}
}
