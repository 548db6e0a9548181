use super::*;

use tracing::{debug, warn};

mod buffer;
mod exec;

pub use buffer::QueryBuffer;
pub use exec::{BatchRunner, RunnerConfig};

/// `QueryQueue` bundles a client, a buffer of its queries and a runner.
/// It is the unit a caller usually works with.
#[derive(Clone)]
pub struct QueryQueue {
    client: Client,
    buffer: QueryBuffer,
    runner: BatchRunner,
}

impl QueryQueue {
    pub fn new(client: Client) -> Self {
        Self::with_config(client, RunnerConfig::default())
    }

    pub fn with_config(client: Client, config: RunnerConfig) -> Self {
        let buffer = QueryBuffer::new(client.id());
        let runner = BatchRunner::new(client.clone(), config);
        Self {
            client,
            buffer,
            runner,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn buffer(&self) -> &QueryBuffer {
        &self.buffer
    }

    pub fn create_query(&self, kind: &str) -> Result<Query> {
        self.client.create_query(kind)
    }

    pub fn create_query_in(&self, namespace: &str, kind: &str) -> Result<Query> {
        self.client.create_query_in(namespace, kind)
    }

    pub fn add_one(&self, q: Query) -> Result<usize> {
        self.buffer.add_one(q)
    }

    pub fn add_all(&self, qs: impl IntoIterator<Item = Query>) -> Result<usize> {
        self.buffer.add_all(qs)
    }

    pub fn peek_all(&self) -> Result<Vec<Query>> {
        self.buffer.peek_all()
    }

    pub fn peek_next(&self) -> Result<Query> {
        self.buffer.peek_next()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn drain_all(&self) -> Result<Vec<Query>> {
        self.buffer.drain_all()
    }

    pub fn drain_next(&self) -> Result<Query> {
        self.buffer.drain_next()
    }

    pub async fn run_all(&self) -> Result<Vec<Bytes>> {
        self.runner.run_all(&self.buffer).await
    }

    pub async fn run_next(&self) -> Result<Bytes> {
        self.runner.run_next(&self.buffer).await
    }
}
