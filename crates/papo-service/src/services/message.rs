//! Message service
//!
//! Posting messages and reading the log through the visibility filter.

use tracing::{info, instrument};

use papo_core::entities::Message;
use papo_core::{visible_messages, DomainError};

use crate::dto::{CreateMessageRequest, MessageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a message from `from`
    ///
    /// The request body is expected to have passed validation; the sender and
    /// message type are still checked here before the store is touched.
    #[instrument(skip(self, request), fields(to = %request.to))]
    pub async fn send_message(
        &self,
        from: &str,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let from = from.trim();
        if from.is_empty() {
            return Err(ServiceError::validation("Sender is required"));
        }

        let kind = request
            .message_type()
            .filter(|kind| kind.is_user_postable())
            .ok_or_else(|| DomainError::InvalidMessageType(request.kind.clone()))?;

        if !self.ctx.participant_repo().exists(from).await? {
            return Err(DomainError::UnknownSender(from.to_string()).into());
        }

        let message = Message::new(
            from.to_string(),
            request.to,
            request.text,
            kind,
            self.ctx.clock().now(),
        );
        self.ctx.message_repo().create(&message).await?;

        info!(from = %from, kind = %kind, "Message posted");

        Ok(MessageResponse::from(message))
    }

    /// Messages `user` may read, optionally only the latest `limit`
    #[instrument(skip(self))]
    pub async fn get_messages(
        &self,
        user: &str,
        limit: Option<usize>,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let log = self.ctx.message_repo().find_all().await?;

        Ok(visible_messages(&log, user, limit)
            .map(MessageResponse::from)
            .collect())
    }
}
