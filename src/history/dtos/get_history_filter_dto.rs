use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_PAGE_LIMIT: u8 = 50;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct GetHistoryFilterDto {
    #[validate(length(min = 1, max = 32, message = "style must be between 1 and 32 characters."))]
    pub style: Option<String>,
    /// `created_at` (ms) of the last item of the previous page.
    pub cursor: Option<i64>,
    /// `id` of the last item of the previous page; breaks ties between items
    /// sharing `cursor`.
    pub cursor_id: Option<String>,
    #[validate(range(min = 1, max = 100, message = "limit must equal or less than 100."))]
    pub limit: Option<u8>,
}

impl GetHistoryFilterDto {
    pub fn to_sql(&self) -> String {
        let mut sql = "SELECT * FROM transformation_history".to_string();
        let mut clauses = vec!["user_id = $1".to_string()];
        let mut index: u8 = 1;

        if self.style.is_some() {
            index += 1;
            clauses.push(["style = $", &index.to_string()].concat());
        }
        match (&self.cursor, &self.cursor_id) {
            (Some(_), Some(_)) => {
                clauses.push(format!("(created_at, id) < (${}, ${})", index + 1, index + 2));
                index += 2;
            }
            (Some(_), None) => {
                index += 1;
                clauses.push(["created_at < $", &index.to_string()].concat());
            }
            _ => {}
        }

        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
        sql.push_str(" ORDER BY created_at DESC, id DESC LIMIT ");
        sql.push_str(&self.limit.unwrap_or(DEFAULT_PAGE_LIMIT).to_string());

        sql
    }

    /// The tiebreaking id, bound only when it comes with a timestamp cursor.
    pub fn bound_cursor_id(&self) -> Option<&str> {
        self.cursor.and(self.cursor_id.as_deref())
    }
}
