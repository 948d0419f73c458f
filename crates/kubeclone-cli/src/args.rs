// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use clap::Parser;
use kubeclone::{ClonerConfig, SYSTEM_NAMESPACE};

/// kubeclone - copy Services and ReplicationControllers between clusters
#[derive(Parser, Debug)]
#[command(name = "kubeclone", version, about, long_about = None)]
pub struct Args {
	/// Source cluster API server URL
	#[arg(long, env = "KUBECLONE_SOURCE")]
	pub source: String,

	/// Sink cluster API server URL
	#[arg(long, env = "KUBECLONE_SINK")]
	pub sink: String,

	/// Namespace to clone from. If blank all namespaces.
	#[arg(long, env = "KUBECLONE_NAMESPACE", default_value = "")]
	pub namespace: String,

	/// Continue cloning on error. Useful for cloning the system namespace
	#[arg(long, visible_alias = "continue_on_error")]
	pub continue_on_error: bool,

	/// Roll back all changes to the sink on error
	#[arg(long)]
	pub rollback: bool,

	/// Namespace cloned after the listed ones when cloning all namespaces (repeatable)
	#[arg(long = "extra-namespace", value_name = "NAME", default_value = SYSTEM_NAMESPACE)]
	pub extra_namespaces: Vec<String>,

	/// Do not clone any namespace beyond those the source lists
	#[arg(long, conflicts_with = "extra_namespaces")]
	pub no_extra_namespaces: bool,

	/// Log level (RUST_LOG overrides)
	#[arg(short, long, default_value = "info")]
	pub log_level: String,

	/// Output logs as JSON
	#[arg(long)]
	pub json_logs: bool,
}

impl Args {
	pub fn cloner_config(&self) -> ClonerConfig {
		let namespace = self.namespace.trim();
		ClonerConfig {
			namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
			extra_namespaces: if self.no_extra_namespaces {
				Vec::new()
			} else {
				self.extra_namespaces.clone()
			},
			continue_on_error: self.continue_on_error,
			rollback_on_error: self.rollback,
		}
	}
}
