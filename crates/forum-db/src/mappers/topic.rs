//! Topic entity <-> model mapper

use forum_core::entities::Topic;
use forum_core::value_objects::Id;

use crate::models::TopicModel;

/// Convert TopicModel to Topic entity
impl From<TopicModel> for Topic {
    fn from(model: TopicModel) -> Self {
        Topic {
            id: Id::new(model.id),
            title: model.title,
            description: model.description,
            created_by: Id::new(model.created_by),
            created_at: model.created_at,
        }
    }
}
