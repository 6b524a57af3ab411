use std::sync::Arc;

use db::models::member::Model as Member;
use db::repositories::MemberDirectory;
use sea_orm::DbErr;

/// Decides which members may attend sessions of a category.
#[derive(Clone)]
pub struct EligibilityChecker {
    members: Arc<dyn MemberDirectory>,
}

impl EligibilityChecker {
    pub fn new(members: Arc<dyn MemberDirectory>) -> Self {
        Self { members }
    }

    /// Whether `member_id` is enrolled in `category_id`.
    pub async fn is_eligible(&self, member_id: i64, category_id: i64) -> Result<bool, DbErr> {
        let categories = self.members.categories_of(member_id).await?;
        Ok(categories.contains(&category_id))
    }

    /// Members listed on a roster for `category_id`, in enrollment order.
    ///
    /// Staff are enrolled in categories they coach but never appear as attendees.
    pub async fn eligible_roster(&self, category_id: i64) -> Result<Vec<Member>, DbErr> {
        let members = self.members.members_in_category(category_id).await?;
        Ok(members.into_iter().filter(|m| !m.is_staff()).collect())
    }
}
