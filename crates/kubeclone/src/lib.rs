// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Replication engine that copies user-defined Services and
//! ReplicationControllers from a source cluster to a sink cluster.
//!
//! A run walks namespaces one at a time, cloning every service (except the
//! built-in `kubernetes` service) before any replication controller. Each
//! successful create is recorded in a [`Ledger`] so that, under the rollback
//! policy, a failure can remove everything the run put into the sink.

pub mod config;
pub mod context;
pub mod driver;
pub mod error;
pub mod ledger;
pub mod metadata;
pub mod namespace;
pub mod policy;
pub mod replicate;

pub use config::{ClonerConfig, Target, SYSTEM_NAMESPACE};
pub use context::{CloneRun, RunSummary};
pub use driver::run;
pub use error::CloneError;
pub use ledger::Ledger;
pub use metadata::IdentityRecord;
pub use namespace::BUILTIN_SERVICE_NAME;
pub use policy::{rollback, FailurePolicy, RollbackReport};
