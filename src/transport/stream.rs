use super::TransportError;
use crate::{BoxStream, Error, Result};
use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::AsyncRead;
use tokio_util::io::StreamReader;
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

/// Live response body of a streaming call.
///
/// The connection stays open until the stream is exhausted, [`close`](Self::close)d or
/// dropped. If the call was made with a cancellation token, cancelling it ends the
/// stream with a [`TransportError::Cancelled`] item and releases the connection.
pub struct AudioStream {
    inner: Option<BoxStream<'static, Bytes>>,
    content_type: Option<String>,
    cancelled: Option<Pin<Box<WaitForCancellationFutureOwned>>>,
}

impl AudioStream {
    pub fn new(
        inner: BoxStream<'static, Bytes>,
        content_type: Option<String>,
        cancel: Option<CancellationToken>,
    ) -> Self {
        Self {
            inner: Some(inner),
            content_type,
            cancelled: cancel.map(|t| Box::pin(t.cancelled_owned())),
        }
    }

    /// Stream over an in-memory payload, split into the given chunks.
    pub fn from_chunks<I>(chunks: I, content_type: Option<String>) -> Self
    where
        I: IntoIterator<Item = Bytes>,
        I::IntoIter: Send + 'static,
    {
        let inner = futures::stream::iter(chunks.into_iter().map(Ok::<Bytes, Error>));
        Self::new(Box::pin(inner), content_type, None)
    }

    /// `Content-Type` reported by the server, e.g. `audio/mpeg` or `application/zip`.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Read the remaining body into memory.
    pub async fn collect_bytes(mut self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }

    /// Adapt into an [`AsyncRead`], e.g. for `tokio::io::copy` into a file.
    pub fn into_reader(self) -> impl AsyncRead + Send + Unpin {
        StreamReader::new(self.map(|item| item.map_err(std::io::Error::other)))
    }

    /// Release the connection without reading the rest of the body.
    pub fn close(mut self) {
        self.inner = None;
    }
}

impl Stream for AudioStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        if let Some(cancelled) = this.cancelled.as_mut() {
            if cancelled.as_mut().poll(cx).is_ready() {
                this.cancelled = None;
                if this.inner.take().is_some() {
                    return Poll::Ready(Some(Err(Error::from(TransportError::Cancelled))));
                }
                return Poll::Ready(None);
            }
        }

        let Some(inner) = this.inner.as_mut() else {
            return Poll::Ready(None);
        };

        match inner.as_mut().poll_next(cx) {
            Poll::Ready(None) => {
                this.inner = None;
                Poll::Ready(None)
            }
            other => other,
        }
    }
}

impl std::fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioStream")
            .field("content_type", &self.content_type)
            .field("open", &self.inner.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn yields_chunks_in_order() {
        let stream = AudioStream::from_chunks(
            vec![Bytes::from_static(b"mock "), Bytes::from_static(b"audio")],
            Some("audio/mpeg".into()),
        );
        assert_eq!(stream.content_type(), Some("audio/mpeg"));
        assert_eq!(stream.collect_bytes().await.unwrap(), Bytes::from_static(b"mock audio"));
    }

    #[tokio::test]
    async fn reader_adapter_reads_everything() {
        let stream = AudioStream::from_chunks(vec![Bytes::from_static(b"abc")], None);
        let mut reader = stream.into_reader();
        let mut out = Vec::new();
        reader.read_to_end(&mut out).await.unwrap();
        assert_eq!(out, b"abc");
    }

    #[tokio::test]
    async fn cancellation_ends_the_stream_with_an_error() {
        let token = CancellationToken::new();
        let mut stream = AudioStream::new(
            Box::pin(futures::stream::pending()),
            None,
            Some(token.clone()),
        );
        token.cancel();

        let err = stream.next().await.unwrap().unwrap_err();
        assert!(err.is_cancelled());
        assert!(stream.next().await.is_none());
    }
}
