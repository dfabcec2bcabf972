use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    entities::contact_me::ContactMessage,
    errors::AppError,
    repositories::sqlx_repo::SqlxContactMessageRepo,
};

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create_contact_message(
        &self,
        message: &ContactMessage,
    ) -> Result<ContactMessage, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
}

#[async_trait]
impl<R: ContactMessageRepository + ?Sized> ContactMessageRepository for Arc<R> {
    async fn create_contact_message(
        &self,
        message: &ContactMessage,
    ) -> Result<ContactMessage, AppError> {
        (**self).create_contact_message(message).await
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        (**self).list_contact_messages().await
    }
}

impl SqlxContactMessageRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxContactMessageRepo { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqlxContactMessageRepo {
    async fn create_contact_message(
        &self,
        message: &ContactMessage,
    ) -> Result<ContactMessage, AppError> {
        let stored = sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contact_messages (id, name, email, subject, message, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, name, email, subject, message, created_at",
        )
        .bind(&message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT id, name, email, subject, message, created_at \
             FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
