use validator::Validate;

use crate::{
    entities::contact_me::{ContactMessage, NewContactMessage},
    errors::AppError,
    repositories::contact_me::ContactMessageRepository,
};

pub struct ContactHandler<R>
where
    R: ContactMessageRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactMessageRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Validates a submitted form and stores it, returning the stored record.
    pub async fn submit_message(
        &self,
        request: NewContactMessage,
    ) -> Result<ContactMessage, AppError> {
        request.validate()?;

        let message = request.into_message();

        self.contact_repo.create_contact_message(&message).await
    }

    /// Lists all received messages, newest first
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.contact_repo.list_contact_messages().await
    }
}
