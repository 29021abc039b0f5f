//! User service: a collision on either username or email blocks creation.

use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{prelude::*, users};
use crate::models::response::Envelope;
use crate::models::user::{CreateUserRequest, UserSummary};

pub async fn create_user(db: &DatabaseConnection, raw: CreateUserRequest) -> Envelope<UserSummary> {
    let existing = Users::find()
        .filter(
            Condition::any()
                .add(users::Column::Username.eq(&raw.username))
                .add(users::Column::Email.eq(&raw.email)),
        )
        .one(db)
        .await;

    match existing {
        Ok(Some(_)) => {
            tracing::warn!(username = %raw.username, "duplicate user rejected");
            Envelope::duplicate()
        }
        Ok(None) => {
            let new_user = users::ActiveModel {
                username: Set(raw.username),
                email: Set(raw.email),
                is_active: Set(true),
                ..Default::default()
            };

            match new_user.insert(db).await {
                Ok(created) => {
                    tracing::info!(username = %created.username, "user created successfully");
                    Envelope::ok(UserSummary {
                        username: created.username,
                        email: created.email,
                    })
                }
                Err(e) => {
                    tracing::error!("failed to create user: {}", e);
                    Envelope::internal()
                }
            }
        }
        Err(e) => {
            tracing::error!("failed to create user: {}", e);
            Envelope::internal()
        }
    }
}

pub async fn get_all(db: &DatabaseConnection) -> Envelope<Vec<users::Model>> {
    let found = Users::find()
        .filter(users::Column::IsActive.eq(true))
        .all(db)
        .await;

    match found {
        Ok(users) => Envelope::ok(users),
        Err(e) => {
            tracing::error!("failed to get all users: {}", e);
            Envelope::internal()
        }
    }
}

pub async fn find_by_email_or_username(
    db: &DatabaseConnection,
    email: &str,
    username: &str,
) -> Envelope<users::Model> {
    let found = Users::find()
        .filter(
            Condition::any()
                .add(users::Column::Username.eq(username))
                .add(users::Column::Email.eq(email)),
        )
        .one(db)
        .await;

    match found {
        Ok(Some(user)) => Envelope::ok(user),
        Ok(None) => {
            tracing::warn!(email = %email, username = %username, "user not found");
            Envelope::not_found()
        }
        Err(e) => {
            tracing::error!("failed to find user: {}", e);
            Envelope::internal()
        }
    }
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Envelope<users::Model> {
    match Users::find_by_id(id).one(db).await {
        Ok(Some(user)) => Envelope::ok(user),
        Ok(None) => {
            tracing::warn!(id, "user not found");
            Envelope::not_found()
        }
        Err(e) => {
            tracing::error!("failed to find user: {}", e);
            Envelope::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::response::ErrorCause;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn user_model() -> users::Model {
        users::Model {
            id: 1,
            username: "imehdi".to_string(),
            email: "user.user@gmail.com".to_string(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn username_or_email_collision_is_duplicate() {
        // Same email, different username still collides.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model()]])
            .into_connection();

        let result = create_user(
            &db,
            CreateUserRequest {
                username: "someone-else".to_string(),
                email: "user.user@gmail.com".to_string(),
            },
        )
        .await;

        assert_eq!(result.status_code, 409);
        assert_eq!(result.error_cause, Some(ErrorCause::Duplicate));
    }

    #[tokio::test]
    async fn created_user_is_returned_as_summary() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new(), vec![user_model()]])
            .into_connection();

        let result = create_user(
            &db,
            CreateUserRequest {
                username: "imehdi".to_string(),
                email: "user.user@gmail.com".to_string(),
            },
        )
        .await;

        assert!(result.is_success);
        let summary = result.data.unwrap();
        assert_eq!(summary.username, "imehdi");
        assert_eq!(summary.email, "user.user@gmail.com");
    }
}
