//! Post entity <-> model mapper

use forum_core::entities::Post;
use forum_core::value_objects::Id;

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Id::new(model.id),
            title: model.title,
            description: model.description,
            topic_id: Id::new(model.topic_id),
            likes: model.likes,
            dislikes: model.dislikes,
            is_edited: model.is_edited,
            views: model.views,
            popularity: model.popularity,
            created_by: Id::new(model.created_by),
            created_at: model.created_at,
        }
    }
}
