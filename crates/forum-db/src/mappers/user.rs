//! User entity <-> model mapper

use forum_core::entities::User;
use forum_core::value_objects::Id;

use crate::models::UserModel;

/// Convert UserModel to User entity. The credential hash stays behind.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            username: model.username,
            created_at: model.created_at,
            last_active: model.last_active,
        }
    }
}
