pub mod attendance_record;
pub mod category;
pub mod member;
pub mod member_category;
pub mod training_session;

pub use attendance_record::Entity as AttendanceRecord;
pub use category::Entity as Category;
pub use member::Entity as Member;
pub use member_category::Entity as MemberCategory;
pub use training_session::Entity as TrainingSession;
