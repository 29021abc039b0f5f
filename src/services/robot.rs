//! Robot service.
//!
//! Resolves the owning user by id first, forwarding a failed resolution
//! unchanged. The duplicate check is keyed on the user's Telegram binding,
//! not the robot's own identity.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{prelude::*, robots, telegrams};
use crate::models::response::Envelope;
use crate::models::robot::CreateRobotRequest;
use crate::services::user;

pub async fn create_robot(
    db: &DatabaseConnection,
    raw: CreateRobotRequest,
) -> Envelope<robots::Model> {
    let user = user::find_by_id(db, raw.user_id).await;
    if user.data.is_none() {
        return user.forward();
    }

    let existing = Telegrams::find()
        .filter(telegrams::Column::UserId.eq(raw.user_id))
        .one(db)
        .await;

    match existing {
        Ok(Some(_)) => {
            tracing::warn!(user_id = raw.user_id, "duplicate robot rejected");
            Envelope::duplicate()
        }
        Ok(None) => {
            let new_robot = robots::ActiveModel {
                user_id: Set(raw.user_id),
                telegram_id: Set(raw.telegram_id),
                name: Set(raw.name),
                strategy: Set(raw.strategy),
                config: Set(raw.config),
                is_active: Set(true),
                ..Default::default()
            };

            match new_robot.insert(db).await {
                Ok(created) => {
                    tracing::info!(name = %created.name, "robot created successfully");
                    Envelope::ok(created)
                }
                Err(e) => {
                    tracing::error!("failed to create robot: {}", e);
                    Envelope::internal()
                }
            }
        }
        Err(e) => {
            tracing::error!("failed to create robot: {}", e);
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

    fn request() -> CreateRobotRequest {
        CreateRobotRequest {
            user_id: 1,
            telegram_id: 5,
            name: "NewsimehdiBot".to_string(),
            strategy: "all".to_string(),
            config: Some(serde_json::json!({ "json": "test" })),
        }
    }

    fn user_model() -> users::Model {
        users::Model {
            id: 1,
            username: "imehdi".to_string(),
            email: "user.user@gmail.com".to_string(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn missing_user_envelope_is_forwarded() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();

        let result = create_robot(&db, request()).await;
        assert_eq!(result.status_code, 404);
        assert_eq!(result.error_cause, Some(ErrorCause::NotFound));
    }

    #[tokio::test]
    async fn existing_telegram_binding_counts_as_duplicate() {
        // The duplicate check looks at the user's Telegram row, so a user
        // with a bot binding cannot receive a robot.
        let telegram = telegrams::Model {
            id: 5,
            user_id: 1,
            bot_token: "bot_token_test".to_string(),
            chat_id: "chat_id_test".to_string(),
            is_active: true,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model()]])
            .append_query_results([vec![telegram]])
            .into_connection();

        let result = create_robot(&db, request()).await;
        assert_eq!(result.status_code, 409);
        assert_eq!(result.error_cause, Some(ErrorCause::Duplicate));
    }

    #[tokio::test]
    async fn robot_is_created_when_user_has_no_telegram() {
        let robot = robots::Model {
            id: 1,
            user_id: 1,
            telegram_id: 5,
            name: "NewsimehdiBot".to_string(),
            strategy: "all".to_string(),
            config: Some(serde_json::json!({ "json": "test" })),
            is_active: true,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model()]])
            .append_query_results([Vec::<telegrams::Model>::new()])
            .append_query_results([vec![robot]])
            .into_connection();

        let result = create_robot(&db, request()).await;
        assert!(result.is_success);
        assert_eq!(result.status_code, 200);
        assert_eq!(result.data.unwrap().strategy, "all");
    }
}
