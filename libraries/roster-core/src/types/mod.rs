mod fields;
mod ids;
mod user;

pub use fields::UserFields;
pub use ids::UserId;
pub use user::{NewUser, User, UserChanges, CITY_MAX_LEN};
