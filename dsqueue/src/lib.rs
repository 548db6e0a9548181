#![deny(unused_must_use)]

//! `dsqueue` buffers datastore queries in process memory and runs them
//! against the datastore as one batch.

/// Local error taxonomy.
mod error;
pub use error::Error;

/// Query handles and their refinements.
pub mod query;

/// The datastore seam and the client that owns query identity.
pub mod datastore;

/// Buffer of queries and the runner that executes it.
pub mod query_queue;

/// Process-wide default `QueryQueue`.
mod global;
pub use global::{global, install, install_with_config};

pub use datastore::{Client, Datastore};
pub use query::{ClientId, Direction, FilterOp, Query};
pub use query_queue::{BatchRunner, QueryBuffer, QueryQueue, RunnerConfig};

use anyhow::{bail, ensure, Result};
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;
