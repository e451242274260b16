//! Stream business rules.

use chrono::Utc;

use super::Logic;
use crate::mock_server::error::{LogicError, LogicResult};
use crate::Stream;

impl Logic {
    /// Create a stream.
    ///
    /// Assigns an id and creation timestamp when absent. The referenced
    /// index set must exist at validation time.
    pub async fn create_stream(&self, mut stream: Stream) -> LogicResult<Stream> {
        self.validate_stream(&stream).await?;
        if stream.id.is_empty() {
            stream.id = Self::new_object_id();
        } else if self.store().streams.has(&stream.id).await {
            return Err(LogicError::Conflict(format!(
                "stream <{}> already exists",
                stream.id
            )));
        }
        if stream.created_at.is_none() {
            stream.created_at = Some(Utc::now());
        }
        self.store().streams.add(stream.clone()).await?;
        Ok(stream)
    }

    /// A copy of the stream with the given id.
    pub async fn stream(&self, id: &str) -> LogicResult<Stream> {
        if id.is_empty() {
            return Err(LogicError::InvalidArgument("stream id is empty".to_string()));
        }
        self.store()
            .streams
            .get(id)
            .await
            .ok_or_else(|| LogicError::not_found("stream", id))
    }

    /// Replace the stream with the given id.
    ///
    /// The stored id, creation timestamp and disabled flag survive the
    /// replacement; pause/resume are the only mutators of `disabled`.
    pub async fn update_stream(&self, id: &str, mut stream: Stream) -> LogicResult<Stream> {
        let current = self.stream(id).await?;
        self.validate_stream(&stream).await?;
        stream.id = current.id;
        stream.created_at = current.created_at;
        stream.disabled = current.disabled;
        self.store().streams.update(stream.clone()).await?;
        Ok(stream)
    }

    /// Delete the stream with the given id.
    pub async fn delete_stream(&self, id: &str) -> LogicResult<()> {
        if id.is_empty() {
            return Err(LogicError::InvalidArgument("stream id is empty".to_string()));
        }
        self.store()
            .streams
            .delete(id)
            .await
            .map(|_| ())
            .ok_or_else(|| LogicError::not_found("stream", id))
    }

    /// All streams, with a total.
    pub async fn streams(&self) -> LogicResult<(Vec<Stream>, u64)> {
        let streams = self.store().streams.list().await;
        let total = streams.len() as u64;
        Ok((streams, total))
    }

    /// Only the streams that are not paused, with a total.
    pub async fn enabled_streams(&self) -> LogicResult<(Vec<Stream>, u64)> {
        let streams = self.store().streams.list_filtered(|s| !s.disabled).await;
        let total = streams.len() as u64;
        Ok((streams, total))
    }

    /// Pause the stream: the only operation that sets `disabled = true`.
    pub async fn pause_stream(&self, id: &str) -> LogicResult<()> {
        if id.is_empty() {
            return Err(LogicError::InvalidArgument("stream id is empty".to_string()));
        }
        self.store()
            .streams
            .modify(id, |s| s.disabled = true)
            .await
            .map(|_| ())
            .ok_or_else(|| LogicError::not_found("stream", id))
    }

    /// Resume the stream: the only operation that sets `disabled = false`.
    pub async fn resume_stream(&self, id: &str) -> LogicResult<()> {
        if id.is_empty() {
            return Err(LogicError::InvalidArgument("stream id is empty".to_string()));
        }
        self.store()
            .streams
            .modify(id, |s| s.disabled = false)
            .await
            .map(|_| ())
            .ok_or_else(|| LogicError::not_found("stream", id))
    }

    /// Field-level and cross-kind checks shared by create and update.
    async fn validate_stream(&self, stream: &Stream) -> LogicResult<()> {
        if stream.title.is_empty() {
            return Err(LogicError::Validation("title is required".to_string()));
        }
        if stream.index_set_id.is_empty() {
            return Err(LogicError::Validation("index_set_id is required".to_string()));
        }
        // Re-read the index set collection at validation time; there is
        // no cross-kind lock.
        if !self.store().index_sets.has(&stream.index_set_id).await {
            return Err(LogicError::Reference(format!(
                "index set <{}> is not found",
                stream.index_set_id
            )));
        }
        Ok(())
    }
}
