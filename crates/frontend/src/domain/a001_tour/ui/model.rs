use contracts::domain::a001_tour::aggregate::Tour;

use crate::shared::api_utils::get_json;

/// Загрузить весь каталог; фильтрация выполняется на клиенте
pub async fn fetch_all() -> Result<Vec<Tour>, String> {
    get_json("/api/tours").await
}

/// Загрузить тур по ID
pub async fn fetch_by_id(id: i64) -> Result<Tour, String> {
    get_json(&format!("/api/tours/{}", id)).await
}
