//! User entity <-> model mapper

use eventhub_core::entities::User;
use eventhub_core::value_objects::RecordId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: RecordId::new(model.user_id),
            email: model.email,
            name: model.name,
            registration_date: model.registration_date,
        }
    }
}
