use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::validation::ContactRequest;
use crate::models::contact::ContactMessage;

/// Contact submissions kept in process memory. Cloning shares the same list;
/// everything is lost when the server stops.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, req: ContactRequest) -> ContactMessage {
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            message: req.message.trim().to_string(),
            created_at: Utc::now(),
        };
        self.messages.write().await.push(message.clone());
        message
    }

    /// Oldest first.
    pub async fn list(&self) -> Vec<ContactMessage> {
        self.messages.read().await.clone()
    }
}
