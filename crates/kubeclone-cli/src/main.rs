// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! kubeclone - one-shot copy of Services and ReplicationControllers from a
//! source cluster to a sink cluster.

mod args;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kubeclone::{CloneError, RunSummary};
use kubeclone_k8s::{ClusterClient, KubeClient};

use args::Args;

/// Status used when a run ends on a terminal error.
const FATAL_EXIT: u8 = 255;

fn init_tracing(args: &Args) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(format!(
			"kubeclone={0},kubeclone_k8s={0}",
			args.log_level
		))
	});

	if args.json_logs {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().with_writer(std::io::stderr))
			.init();
	}
}

fn connect(args: &Args) -> Result<(Arc<dyn ClusterClient>, Arc<dyn ClusterClient>)> {
	let source: Arc<dyn ClusterClient> =
		Arc::new(KubeClient::from_url(&args.source).context("failed to create source client")?);
	let sink: Arc<dyn ClusterClient> =
		Arc::new(KubeClient::from_url(&args.sink).context("failed to create sink client")?);
	Ok((source, sink))
}

/// Run a clone as configured by `args` and return the process exit status.
///
/// Client setup failures give up before anything is cloned and exit
/// normally; errors from the run itself are fatal.
async fn execute(args: &Args) -> u8 {
	let config = args.cloner_config();

	// Nothing has been touched yet; give up without cloning.
	let (source, sink) = match connect(args) {
		Ok(clients) => clients,
		Err(e) => {
			warn!(error = format!("{e:#}"), "Could not set up cluster clients, nothing cloned");
			return 0;
		}
	};

	exit_status(kubeclone::run(source, sink, &config).await)
}

fn exit_status(result: Result<RunSummary, CloneError>) -> u8 {
	match result {
		Ok(_) => 0,
		Err(e) => {
			let e = anyhow::Error::new(e);
			error!(error = format!("{e:#}"), "Exiting");
			FATAL_EXIT
		}
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	let args = Args::parse();
	init_tracing(&args);

	info!(source = %args.source, sink = %args.sink, "starting kubeclone");
	ExitCode::from(execute(&args).await)
}
