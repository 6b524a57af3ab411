pub mod m202505290001_create_members;
pub mod m202505290002_create_categories;
pub mod m202505290003_create_member_categories;
pub mod m202509080001_create_training_sessions;
pub mod m202509080002_create_attendance_records;
