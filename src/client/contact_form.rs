use crate::client::api::{ApiError, ContactGateway};
use crate::client::notify::{Toast, ToastTray};
use crate::entities::contact_me::NewContactMessage;

const SENT_TITLE: &str = "Message Sent ✅";
const SENT_DESCRIPTION: &str = "Thank you for your message! I'll get back to you soon.";
const SEND_ERROR_TITLE: &str = "Error ❌";
const SEND_ERROR_DESCRIPTION: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// The previous submission has not settled yet.
    AlreadySubmitting,
    /// At least one of the four fields is still empty.
    MissingFields,
}

/// State machine behind the contact page form.
///
/// While a submission is in flight further submits are rejected, so
/// double-clicking the send button cannot post the message twice.
#[derive(Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        ContactForm::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_subject(&mut self, value: impl Into<String>) {
        self.subject = value.into();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the send button should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Locks the form and hands back the payload to send. The caller
    /// must follow up with [`ContactForm::settle_submit`].
    pub fn begin_submit(&mut self) -> Result<NewContactMessage, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        if !self.is_complete() {
            return Err(SubmitRejected::MissingFields);
        }

        self.submitting = true;
        Ok(NewContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    /// Unlocks the form. Success clears every field; failure keeps what
    /// the visitor typed so they can retry. Either way exactly one
    /// toast comes back.
    pub fn settle_submit(&mut self, outcome: Result<(), ApiError>) -> Toast {
        self.submitting = false;

        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                Toast::success(SENT_TITLE, SENT_DESCRIPTION)
            }
            Err(_) => Toast::error(SEND_ERROR_TITLE, SEND_ERROR_DESCRIPTION),
        }
    }
}

/// Drives [`ContactForm`] against a [`ContactGateway`].
pub struct ContactPage<G: ContactGateway> {
    form: ContactForm,
    gateway: G,
    toasts: ToastTray,
}

impl<G: ContactGateway> ContactPage<G> {
    pub fn new(gateway: G) -> Self {
        ContactPage {
            form: ContactForm::new(),
            gateway,
            toasts: ToastTray::new(),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn toasts(&self) -> &[Toast] {
        self.toasts.as_slice()
    }

    pub fn toasts_mut(&mut self) -> &mut ToastTray {
        &mut self.toasts
    }

    /// Runs one full submission. Returns the rejection reason if the
    /// form refused to start one.
    pub async fn submit(&mut self) -> Result<(), SubmitRejected> {
        let payload = self.form.begin_submit()?;
        let outcome = self.gateway.submit_contact(&payload).await;
        let toast = self.form.settle_submit(outcome);
        self.toasts.push(toast);
        Ok(())
    }
}
