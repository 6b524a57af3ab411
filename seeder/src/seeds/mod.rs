pub mod category;
pub mod member;
pub mod membership;
pub mod training_session;
