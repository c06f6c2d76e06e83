use super::UserError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{info, instrument, warn};

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Payload for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub password: String,
}

struct Account {
    id: UserId,
    info: UserInfo,
}

/// Registration and login. Accounts are private to this service.
pub struct UserService {
    accounts: Vec<Account>,
    next_id: u32,
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}

impl UserService {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            next_id: 1,
        }
    }

    #[instrument(skip(self, user_info), fields(username = %user_info.username))]
    pub fn register_user(&mut self, user_info: UserInfo) -> Result<UserId, UserError> {
        if self
            .accounts
            .iter()
            .any(|a| a.info.username == user_info.username)
        {
            warn!("Username taken");
            return Err(UserError::AlreadyExists(user_info.username));
        }
        let id = UserId::from(self.next_id);
        self.next_id += 1;
        self.accounts.push(Account { id, info: user_info });
        info!(user_id = %id, size = self.accounts.len(), "Registered");
        Ok(id)
    }

    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<UserId, UserError> {
        self.accounts
            .iter()
            .find(|a| a.info.username == username && a.info.password == password)
            .map(|a| a.id)
            .ok_or_else(|| {
                warn!("Login rejected");
                UserError::InvalidCredentials(username.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(username: &str, password: &str) -> UserInfo {
        UserInfo {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_then_login() {
        let mut users = UserService::new();
        let id = users.register_user(info("alice", "pw")).unwrap();

        assert_eq!(id, UserId(1));
        assert_eq!(users.login("alice", "pw"), Ok(id));
    }

    #[test]
    fn test_duplicate_username() {
        let mut users = UserService::new();
        users.register_user(info("alice", "pw")).unwrap();

        let result = users.register_user(info("alice", "other"));
        assert_eq!(result, Err(UserError::AlreadyExists("alice".into())));
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let mut users = UserService::new();
        users.register_user(info("alice", "pw")).unwrap();

        assert_eq!(
            users.login("alice", "wrong"),
            Err(UserError::InvalidCredentials("alice".into()))
        );
        assert!(users.login("bob", "pw").is_err());
    }
}
