use serde::{Deserialize, Serialize};

/// The code currently printed at the entrance. Only one is live at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct QrCode {
    pub id: u64,
}

impl QrCode {
    pub fn matches(&self, scanned: u64) -> bool {
        self.id == scanned
    }
}
