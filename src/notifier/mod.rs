// Notifier module: forwards captured leads to the sales team.

pub mod email;
pub mod template;

pub use email::EmailNotifier;

use crate::model::{LeadCapture, NotifyError};

#[async_trait::async_trait]
pub trait LeadChannel: Send + Sync {
    async fn deliver(&self, lead: &LeadCapture) -> Result<(), NotifyError>;
}
