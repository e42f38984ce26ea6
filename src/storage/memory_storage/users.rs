//! 用户目录

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::users::entities::{User, UserRole};

impl MemoryStorage {
    pub fn list_users_impl(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    pub fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        Ok(self
            .users
            .binary_search_by_key(&id, |u| u.id)
            .ok()
            .map(|idx| self.users[idx].clone()))
    }

    pub fn list_users_by_role_impl(&self, role: UserRole) -> Result<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }
}
