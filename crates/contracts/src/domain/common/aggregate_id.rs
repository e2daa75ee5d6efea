use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку (для URL и query-параметров)
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s.trim()).map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_round_trip_through_url_segment() {
        let id: i64 = 42;
        assert_eq!(i64::from_string(&id.as_string()), Ok(42));
        assert_eq!(i64::from_string(" 7 "), Ok(7));
    }

    #[test]
    fn test_i64_rejects_garbage() {
        assert!(i64::from_string("tokyo").is_err());
        assert!(i64::from_string("").is_err());
    }
}
