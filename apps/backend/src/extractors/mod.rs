pub mod auth_user;
pub mod validated_json;
