use anyhow::Result;
use bytes::Bytes;
use dsqueue::{Client, Error};
use dsqueue_tests::*;
use test_log::test;
use testapp::StubDatastore;

#[test(tokio::test)]
async fn default_queue_lifecycle() -> Result<()> {
    let e = dsqueue::global().map(|_| ()).unwrap_err();
    assert_eq!(local_error(&e), Some(Error::NotInstalled));

    let client = Client::new(StubDatastore::new());
    let id = client.id();
    let queue = dsqueue::install(client)?;
    assert_eq!(queue.client().id(), id);

    let e = dsqueue::install(Client::new(StubDatastore::new()))
        .map(|_| ())
        .unwrap_err();
    assert_eq!(local_error(&e), Some(Error::AlreadyInstalled));

    // Every accessor sees the same queue.
    let q = dsqueue::global()?.create_query("Book")?;
    assert_eq!(dsqueue::global()?.add_one(q)?, 1);
    assert_eq!(queue.len(), 1);
    assert_eq!(dsqueue::global()?.run_all().await?, vec![Bytes::from("Book-result")]);

    queue.drain_all()?;
    assert!(dsqueue::global()?.is_empty());
    Ok(())
}
