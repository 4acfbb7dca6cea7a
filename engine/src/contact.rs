//! Contact form with a simulated submission.
//!
//! There is no backend: [`submit`] waits a fixed delay and succeeds. The
//! form owns the in-flight submission as a timer task so leaving the form
//! mid-submit cancels it. A success message clears itself after
//! `success_reset`.

use std::time::Duration;

use tokio::{
    sync::oneshot,
    time::{Instant, sleep},
};
use tracing::{debug, info, warn};

use reveal_types::ui::{ContactError, ContactField, ContactFields, ValidContact};

use crate::timer::TimerHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Invalid(ContactError),
    Submitting,
    Submitted(SubmissionReceipt),
}

/// The submission boundary: succeeds after `delay`.
pub async fn submit(contact: ValidContact, delay: Duration) -> SubmissionReceipt {
    sleep(delay).await;
    SubmissionReceipt {
        name: contact.name.into_inner(),
        email: contact.email.into_inner(),
    }
}

#[derive(Debug)]
pub struct ContactForm {
    fields: ContactFields,
    focus: ContactField,
    status: SubmissionStatus,
    delay: Duration,
    success_reset: Duration,
    pending: Option<(oneshot::Receiver<SubmissionReceipt>, TimerHandle)>,
    reset_at: Option<Instant>,
}

impl ContactForm {
    #[must_use]
    pub fn new(delay: Duration, success_reset: Duration) -> Self {
        Self {
            fields: ContactFields::default(),
            focus: ContactField::default(),
            status: SubmissionStatus::Idle,
            delay,
            success_reset,
            pending: None,
            reset_at: None,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    #[must_use]
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    #[must_use]
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_submitting() {
            return;
        }
        self.fields.push(self.focus, c);
        self.clear_settled_status();
    }

    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.fields.backspace(self.focus);
        self.clear_settled_status();
    }

    /// Validate and start a submission. Ignored while one is in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) {
        if self.is_submitting() {
            return;
        }
        let contact = match self.fields.validate() {
            Ok(contact) => contact,
            Err(err) => {
                self.status = SubmissionStatus::Invalid(err);
                return;
            }
        };

        info!(email = contact.email.as_str(), "Submitting contact form");
        let (tx, rx) = oneshot::channel();
        let delay = self.delay;
        let timer = TimerHandle::spawn(move |stop| async move {
            let receipt = submit(contact, delay).await;
            if !stop.is_stopped() {
                let _ = tx.send(receipt);
            }
        });
        self.pending = Some((rx, timer));
        self.status = SubmissionStatus::Submitting;
    }

    /// Collect a finished submission and expire a stale success message.
    /// Call once per frame.
    pub fn poll(&mut self) {
        if let Some(deadline) = self.reset_at
            && Instant::now() >= deadline
        {
            self.reset_at = None;
            if matches!(self.status, SubmissionStatus::Submitted(_)) {
                debug!("Clearing contact success message");
                self.status = SubmissionStatus::Idle;
            }
        }

        let Some((rx, _)) = self.pending.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(receipt) => {
                info!(email = receipt.email.as_str(), "Contact form submitted");
                self.fields.clear();
                self.focus = ContactField::default();
                self.status = SubmissionStatus::Submitted(receipt);
                self.pending = None;
                self.reset_at = Some(Instant::now() + self.success_reset);
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                warn!("Contact submission ended without a result");
                self.status = SubmissionStatus::Idle;
                self.pending = None;
            }
        }
    }

    /// Abandon an in-flight submission.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.status = SubmissionStatus::Idle;
        }
    }

    fn clear_settled_status(&mut self) {
        self.reset_at = None;
        if matches!(
            self.status,
            SubmissionStatus::Invalid(_) | SubmissionStatus::Submitted(_)
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }
}
