use super::*;

/// `Datastore` is an abstraction of the remote datastore that executes queries.
#[async_trait::async_trait]
pub trait Datastore: Sync + Send + 'static {
    /// Run the query and return the encoded result set.
    /// Errors are opaque to this crate and are handed to the caller as they are.
    async fn run_query(&self, query: &Query) -> Result<Bytes>;
}

/// `Client` creates queries and runs them on its datastore.
/// Cloning a client shares the backend and the identity.
#[derive(Clone)]
pub struct Client {
    id: ClientId,
    backend: Arc<dyn Datastore>,
}

impl Client {
    pub fn new(backend: impl Datastore) -> Self {
        Self {
            id: ClientId::generate(),
            backend: Arc::new(backend),
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Create a query on `kind` in the default namespace.
    pub fn create_query(&self, kind: &str) -> Result<Query> {
        check_name("kind", kind)?;
        Ok(Query::new(self.id, None, kind.to_string()))
    }

    /// Create a query on `kind` in `namespace`.
    pub fn create_query_in(&self, namespace: &str, kind: &str) -> Result<Query> {
        check_name("namespace", namespace)?;
        check_name("kind", kind)?;
        Ok(Query::new(
            self.id,
            Some(namespace.to_string()),
            kind.to_string(),
        ))
    }

    /// Check that `query` was created by this client.
    pub(crate) fn validate(&self, query: &Query) -> Result<()> {
        ensure!(
            query.origin() == self.id,
            Error::Validation(format!(
                "query on {} was created by client {} (expected {})",
                query.kind(),
                query.origin(),
                self.id
            ))
        );
        Ok(())
    }

    pub async fn run_query(&self, query: &Query) -> Result<Bytes> {
        self.validate(query)?;
        self.backend.run_query(query).await
    }
}

fn check_name(what: &str, s: &str) -> Result<()> {
    ensure!(
        !s.trim().is_empty(),
        Error::InvalidArgument(format!("{what} must be a non-empty string"))
    );
    Ok(())
}
