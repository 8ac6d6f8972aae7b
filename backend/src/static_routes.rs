// Paths served by the site
//

pub const HOME: &str = "/";
pub const HABIT: &str = "/habit";
pub const HABIT_COMPLETE: &str = "/habit/complete/:id";
pub const ADMIN: &str = "/admin";
pub const ADMIN_ADD_ARTICLE: &str = "/admin/add_article";
pub const ADMIN_ADD_HABIT: &str = "/admin/add_habit";
pub const LOGOUT: &str = "/logout";
pub const HEALTH_CHECK: &str = "/health_check";

pub fn habit_complete(id: i64) -> String {
    HABIT_COMPLETE.replace(":id", &id.to_string())
}
