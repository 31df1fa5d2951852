use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceAccount {
    pub private_key: String,
    pub client_email: String,
}

impl ServiceAccount {
    pub fn new(client_email: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            client_email: client_email.into(),
            private_key: private_key.into(),
        }
    }
}
