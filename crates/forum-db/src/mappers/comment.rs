//! Comment entity <-> model mapper

use forum_core::entities::Comment;
use forum_core::value_objects::Id;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Id::new(model.id),
            description: model.description,
            likes: model.likes,
            dislikes: model.dislikes,
            is_edited: model.is_edited,
            post_id: Id::new(model.post_id),
            parent_comment_id: model.parent_comment_id.map(Id::new),
            created_by: Id::new(model.created_by),
            created_at: model.created_at,
        }
    }
}
