//! User queries

use chrono::Utc;

use super::Database;
use crate::error::StoreResult;
use crate::models::{CreateUserRequest, User};

impl Database {
    /// Insert a user; the store assigns `id` and `created_at`.
    pub async fn create_user(&self, req: &CreateUserRequest) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (created_at, first_name, last_name)
            VALUES (?, ?, ?)
            RETURNING id, created_at, first_name, last_name
            "#,
        )
        .bind(Utc::now())
        .bind(&req.first_name)
        .bind(&req.last_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// All users in insertion order
    pub async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, created_at, first_name, last_name FROM users ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn get_user(&self, id: i64) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, created_at, first_name, last_name FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Write back the mutable columns of an existing user.
    pub async fn save_user(&self, user: &User) -> StoreResult<()> {
        sqlx::query("UPDATE users SET first_name = ?, last_name = ? WHERE id = ?")
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(first: &str, last: &str) -> CreateUserRequest {
        CreateUserRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let db = Database::open_in_memory().await.unwrap();

        let mut created = Vec::new();
        for (first, last) in [("Ada", "Lovelace"), ("Grace", "Hopper"), ("Alan", "Turing")] {
            created.push(db.create_user(&req(first, last)).await.unwrap().id);
        }

        let listed: Vec<i64> = db.list_users().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn ids_are_assigned_and_increasing() {
        let db = Database::open_in_memory().await.unwrap();

        let first = db.create_user(&req("", "")).await.unwrap();
        let second = db.create_user(&req("", "")).await.unwrap();
        assert!(first.id > 0);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn get_missing_user_is_none() {
        let db = Database::open_in_memory().await.unwrap();
        assert!(db.get_user(99999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn row_with_zero_id_is_still_found() {
        let db = Database::open_in_memory().await.unwrap();
        sqlx::query("INSERT INTO users (id, created_at, first_name, last_name) VALUES (0, ?, 'Zero', 'Row')")
            .bind(Utc::now())
            .execute(&db.pool)
            .await
            .unwrap();

        let user = db.get_user(0).await.unwrap().unwrap();
        assert_eq!(user.first_name, "Zero");
    }

    #[tokio::test]
    async fn save_overwrites_names_only() {
        let db = Database::open_in_memory().await.unwrap();
        let mut user = db.create_user(&req("Ada", "Lovelace")).await.unwrap();
        let created_at = user.created_at;

        user.first_name = "Grace".to_string();
        user.last_name = "Hopper".to_string();
        db.save_user(&user).await.unwrap();

        let stored = db.get_user(user.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Grace");
        assert_eq!(stored.last_name, "Hopper");
        assert_eq!(stored.id, user.id);
        assert_eq!(stored.created_at, created_at);
    }
}
