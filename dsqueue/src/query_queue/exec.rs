use super::*;

/// Configuration of `BatchRunner`.
#[derive(Clone, Debug, Default)]
pub struct RunnerConfig {
    query_timeout: Option<Duration>,
    clear_on_success: bool,
}

impl RunnerConfig {
    /// Bound every single query. An expired query fails the whole batch.
    pub fn with_query_timeout(self, d: Duration) -> Self {
        Self {
            query_timeout: Some(d),
            ..self
        }
    }

    /// Remove the executed queries from the buffer after a successful `run_all`.
    pub fn with_clear_on_success(self, b: bool) -> Self {
        Self {
            clear_on_success: b,
            ..self
        }
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout
    }

    pub fn clear_on_success(&self) -> bool {
        self.clear_on_success
    }
}

/// `BatchRunner` executes the buffered queries on the client's datastore.
#[derive(Clone)]
pub struct BatchRunner {
    client: Client,
    config: RunnerConfig,
}

impl BatchRunner {
    pub fn new(client: Client, config: RunnerConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    async fn run_one(&self, q: &Query) -> Result<Bytes> {
        match self.config.query_timeout {
            Some(d) => match tokio::time::timeout(d, self.client.run_query(q)).await {
                Ok(res) => res,
                Err(_) => bail!(Error::Timeout(d)),
            },
            None => self.client.run_query(q).await,
        }
    }

    /// Run every query in the buffer and return the results in buffer order.
    ///
    /// The buffer is copied when the call starts and all the queries are in flight at once.
    /// The first failure fails the batch and the other queries are dropped.
    /// An empty buffer yields an empty result.
    pub async fn run_all(&self, buffer: &QueryBuffer) -> Result<Vec<Bytes>> {
        let entries = buffer.snapshot();
        if entries.is_empty() {
            return Ok(vec![]);
        }

        let n = entries.len();
        debug!("run {n} queries");

        let futs = entries.iter().map(|(_, q)| self.run_one(q));
        let out = match futures::future::try_join_all(futs).await {
            Ok(out) => out,
            Err(e) => {
                warn!("batch of {n} queries failed: {e}");
                return Err(e);
            }
        };

        if self.config.clear_on_success {
            let executed: Vec<_> = entries.iter().map(|(seq, _)| *seq).collect();
            let removed = buffer.discard_executed(&executed);
            debug!("removed {removed} executed queries from the queue");
        }

        Ok(out)
    }

    /// Run the first query in the buffer without removing it.
    pub async fn run_next(&self, buffer: &QueryBuffer) -> Result<Bytes> {
        let q = buffer.peek_next()?;
        debug!("run the next query (kind={})", q.kind());
        self.run_one(&q).await
    }
}
