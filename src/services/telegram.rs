//! Telegram service: one bot binding per user.
//!
//! Resolves the owning user by username/email first; a failed resolution is
//! forwarded to the caller unchanged.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{prelude::*, telegrams};
use crate::models::response::Envelope;
use crate::models::telegram::CreateTelegramRequest;
use crate::services::user;

pub async fn create_telegram(
    db: &DatabaseConnection,
    raw: CreateTelegramRequest,
) -> Envelope<telegrams::Model> {
    let user = user::find_by_email_or_username(db, &raw.email, &raw.username).await;
    let user = match user.data {
        Some(ref found) => found.clone(),
        None => return user.forward(),
    };

    let existing = Telegrams::find()
        .filter(telegrams::Column::UserId.eq(user.id))
        .one(db)
        .await;

    match existing {
        Ok(Some(_)) => {
            tracing::warn!(user_id = user.id, "duplicate telegram rejected");
            Envelope::duplicate()
        }
        Ok(None) => {
            let new_telegram = telegrams::ActiveModel {
                user_id: Set(user.id),
                bot_token: Set(raw.bot_token),
                chat_id: Set(raw.chat_id),
                is_active: Set(true),
                ..Default::default()
            };

            match new_telegram.insert(db).await {
                Ok(created) => {
                    tracing::info!(user_id = created.user_id, "telegram created successfully");
                    Envelope::ok(created)
                }
                Err(e) => {
                    tracing::error!("failed to create telegram: {}", e);
                    Envelope::internal()
                }
            }
        }
        Err(e) => {
            tracing::error!("failed to create telegram: {}", e);
            Envelope::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::users;
    use crate::models::response::ErrorCause;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn request() -> CreateTelegramRequest {
        CreateTelegramRequest {
            bot_token: "bot_token_test".to_string(),
            chat_id: "chat_id_test".to_string(),
            username: "imehdi".to_string(),
            email: "user.user@gmail.com".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_user_envelope_is_forwarded() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();

        let result = create_telegram(&db, request()).await;
        assert!(!result.is_success);
        assert_eq!(result.status_code, 404);
        assert_eq!(result.error_cause, Some(ErrorCause::NotFound));
    }

    #[tokio::test]
    async fn second_binding_for_user_is_duplicate() {
        let user = users::Model {
            id: 1,
            username: "imehdi".to_string(),
            email: "user.user@gmail.com".to_string(),
            is_active: true,
        };
        let telegram = telegrams::Model {
            id: 5,
            user_id: 1,
            bot_token: "bot_token_test".to_string(),
            chat_id: "chat_id_test".to_string(),
            is_active: true,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user]])
            .append_query_results([vec![telegram]])
            .into_connection();

        let result = create_telegram(&db, request()).await;
        assert_eq!(result.status_code, 409);
        assert_eq!(result.error_cause, Some(ErrorCause::Duplicate));
    }
}
