use anyhow::Result;
use dsqueue::{Client, Query, QueryQueue, RunnerConfig};
use testapp::StubDatastore;

pub use testapp::Rejected;

pub struct Builder {
    stub: StubDatastore,
    config: RunnerConfig,
}
impl Builder {
    fn new() -> Self {
        Self {
            stub: StubDatastore::new(),
            config: RunnerConfig::default(),
        }
    }

    pub fn with_datastore(self, stub: StubDatastore) -> Self {
        Self { stub, ..self }
    }

    pub fn with_config(self, config: RunnerConfig) -> Self {
        Self { config, ..self }
    }

    pub fn build(self) -> Fixture {
        let client = Client::new(self.stub.clone());
        Fixture {
            queue: QueryQueue::with_config(client, self.config),
            stub: self.stub,
        }
    }
}

/// A queue backed by a `StubDatastore` the test can inspect.
pub struct Fixture {
    pub queue: QueryQueue,
    pub stub: StubDatastore,
}
impl Fixture {
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create one query per kind, in order.
    pub fn queries(&self, kinds: &[&str]) -> Result<Vec<Query>> {
        kinds.iter().map(|k| self.queue.create_query(k)).collect()
    }
}

pub fn kinds(qs: &[Query]) -> Vec<String> {
    qs.iter().map(|q| q.kind().to_string()).collect()
}

pub fn local_error(e: &anyhow::Error) -> Option<dsqueue::Error> {
    e.downcast_ref::<dsqueue::Error>().cloned()
}
