use super::*;

use std::collections::VecDeque;

/// Sequence number given to every query when it enters a buffer.
/// Numbers are never reused within one buffer.
pub(super) type Seq = u64;

struct Entries {
    next_seq: Seq,
    inner: VecDeque<(Seq, Query)>,
}
impl Entries {
    fn push(&mut self, q: Query) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.inner.push_back((seq, q));
    }
}

/// `QueryBuffer` holds the queries waiting to be run, in insertion order.
///
/// A buffer belongs to one client and only accepts queries created by that client.
/// Clones share the same contents. Every read returns copies,
/// so the contents can only be changed through the methods below.
#[derive(Clone)]
pub struct QueryBuffer {
    origin: ClientId,
    entries: Arc<parking_lot::Mutex<Entries>>,
}

impl QueryBuffer {
    pub fn new(origin: ClientId) -> Self {
        Self {
            origin,
            entries: Arc::new(parking_lot::Mutex::new(Entries {
                next_seq: 0,
                inner: VecDeque::new(),
            })),
        }
    }

    /// The client whose queries this buffer accepts.
    pub fn origin(&self) -> ClientId {
        self.origin
    }

    fn check(&self, pos: Option<usize>, q: &Query) -> Result<()> {
        if q.origin() == self.origin {
            return Ok(());
        }
        let at = match pos {
            Some(i) => format!(" at position {i}"),
            None => String::new(),
        };
        bail!(Error::Validation(format!(
            "query on {}{at} was created by client {} but the queue belongs to {}",
            q.kind(),
            q.origin(),
            self.origin
        )))
    }

    /// Append a query and return the new length.
    pub fn add_one(&self, q: Query) -> Result<usize> {
        self.check(None, &q)?;
        let mut entries = self.entries.lock();
        entries.push(q);
        let n = entries.inner.len();
        debug!("queued a query (len={n})");
        Ok(n)
    }

    /// Append all the queries and return the new length.
    /// If any of them is rejected, nothing is appended.
    pub fn add_all(&self, qs: impl IntoIterator<Item = Query>) -> Result<usize> {
        let qs: Vec<Query> = qs.into_iter().collect();
        for (i, q) in qs.iter().enumerate() {
            self.check(Some(i), q)?;
        }
        let added = qs.len();
        let mut entries = self.entries.lock();
        for q in qs {
            entries.push(q);
        }
        let n = entries.inner.len();
        debug!("queued {added} queries (len={n})");
        Ok(n)
    }

    /// Copy of the current contents.
    pub fn peek_all(&self) -> Result<Vec<Query>> {
        let entries = self.entries.lock();
        ensure!(!entries.inner.is_empty(), Error::Empty);
        Ok(entries.inner.iter().map(|(_, q)| q.clone()).collect())
    }

    /// Copy of the first query.
    pub fn peek_next(&self) -> Result<Query> {
        let entries = self.entries.lock();
        match entries.inner.front() {
            Some((_, q)) => Ok(q.clone()),
            None => bail!(Error::Empty),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().inner.is_empty()
    }

    /// Take all the queries out of the buffer.
    pub fn drain_all(&self) -> Result<Vec<Query>> {
        let mut entries = self.entries.lock();
        ensure!(!entries.inner.is_empty(), Error::Empty);
        let out: Vec<Query> = entries.inner.drain(..).map(|(_, q)| q).collect();
        debug!("drained {} queries", out.len());
        Ok(out)
    }

    /// Take the first query out of the buffer.
    pub fn drain_next(&self) -> Result<Query> {
        let mut entries = self.entries.lock();
        match entries.inner.pop_front() {
            Some((_, q)) => {
                debug!("drained a query (len={})", entries.inner.len());
                Ok(q)
            }
            None => bail!(Error::Empty),
        }
    }

    /// Copy of the current contents with their sequence numbers.
    /// Empty is not an error here.
    pub(super) fn snapshot(&self) -> Vec<(Seq, Query)> {
        self.entries.lock().inner.iter().cloned().collect()
    }

    /// Remove the entries whose sequence number is in `executed`.
    /// `executed` is in ascending order, as `snapshot` returns it.
    /// Entries queued after the snapshot are never removed, even if they are equal queries.
    pub(super) fn discard_executed(&self, executed: &[Seq]) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.inner.len();
        entries
            .inner
            .retain(|(seq, _)| executed.binary_search(seq).is_err());
        before - entries.inner.len()
    }
}
