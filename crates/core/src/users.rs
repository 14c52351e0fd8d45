//! Visitor identity records.
//!
//! The only write path the pipeline's store sees: the login callback
//! records the visiting user if unseen. The check-then-insert is not
//! transactional; a concurrent duplicate insert is an accepted race.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns the stored user for `email`, inserting one first if absent.
    async fn ensure_user(&self, email: &str, display_name: &str) -> Result<UserRecord>;
}
