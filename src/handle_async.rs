//! Async wrapper over the shared reader.

use std::io::{self, Read, Seek};
use std::sync::Arc;

use async_trait::async_trait;
use futures::Stream;
use futures::stream;

use crate::error::ReaderError;
use crate::handle::ReaderHandle;
use crate::split::Row;

/// Trait for async row sources.
#[async_trait]
pub trait AsyncRowProvider: Send + Sync {
    async fn next_row(&self, separator: &str) -> Result<Row, ReaderError>;
}

/// Async handle over one shared reader.
///
/// Each call runs on tokio's blocking pool and holds the reader's lock for
/// its whole duration, exactly like the synchronous [`ReaderHandle`].
#[derive(Debug)]
pub struct AsyncReaderHandle<R = std::fs::File> {
    inner: ReaderHandle<R>,
}

impl<R> Clone for AsyncReaderHandle<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R> From<ReaderHandle<R>> for AsyncReaderHandle<R> {
    fn from(inner: ReaderHandle<R>) -> Self {
        Self { inner }
    }
}

impl<R> AsyncReaderHandle<R>
where
    R: Read + Seek + Send + 'static,
{
    pub fn new(inner: ReaderHandle<R>) -> Self {
        Self { inner }
    }

    pub fn handle(&self) -> &ReaderHandle<R> {
        &self.inner
    }

    pub async fn get_line(&self, separator: &str) -> Result<Row, ReaderError> {
        let separator = separator.to_owned();
        self.blocking(move |handle| handle.get_line(&separator)).await
    }

    /// Close the shared reader for every clone of this handle.
    pub async fn close(&self) -> Result<(), ReaderError> {
        self.blocking(|handle| handle.close()).await
    }

    // Runs `f` on tokio's blocking pool, since it may wait on the reader's lock.
    async fn blocking<T, F>(&self, f: F) -> Result<T, ReaderError>
    where
        T: Send + 'static,
        F: FnOnce(&ReaderHandle<R>) -> Result<T, ReaderError> + Send + 'static,
    {
        let handle = self.inner.clone();
        let joined = tokio::task::spawn_blocking(move || f(&handle)).await;

        match joined {
            Ok(result) => result,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => Err(ReaderError::scan(
                self.inner.reader().id(),
                io::Error::new(io::ErrorKind::Interrupted, e.to_string()),
            )),
        }
    }

    /// An endless stream of rows. It ends only after yielding the first error.
    pub fn rows(
        &self,
        separator: &str,
    ) -> impl Stream<Item = Result<Row, ReaderError>> + Send + use<R> {
        let state = (self.clone(), Arc::<str>::from(separator), false);
        stream::unfold(state, |(handle, separator, failed)| async move {
            if failed {
                return None;
            }
            let row = handle.get_line(&separator).await;
            let failed = row.is_err();
            Some((row, (handle, separator, failed)))
        })
    }
}

#[async_trait]
impl<R> AsyncRowProvider for AsyncReaderHandle<R>
where
    R: Read + Seek + Send + 'static,
{
    async fn next_row(&self, separator: &str) -> Result<Row, ReaderError> {
        self.get_line(separator).await
    }
}
