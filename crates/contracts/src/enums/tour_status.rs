use serde::{Deserialize, Serialize};

/// Статус публикации тура в кабинете агентства
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TourStatus {
    #[default]
    Active,
    Draft,
}

impl TourStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TourStatus::Active => "active",
            TourStatus::Draft => "draft",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TourStatus::Active => "Active",
            TourStatus::Draft => "Draft",
        }
    }

    /// Переключение Active <-> Draft в кабинете агентства
    pub fn toggled(&self) -> Self {
        match self {
            TourStatus::Active => TourStatus::Draft,
            TourStatus::Draft => TourStatus::Active,
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            TourStatus::Active => "success",
            TourStatus::Draft => "neutral",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(TourStatus::Active),
            "draft" => Some(TourStatus::Draft),
            _ => None,
        }
    }
}

impl std::fmt::Display for TourStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_round_trips() {
        assert_eq!(TourStatus::Active.toggled(), TourStatus::Draft);
        assert_eq!(TourStatus::Draft.toggled().toggled(), TourStatus::Draft);
        assert_eq!(TourStatus::from_code(TourStatus::default().code()), Some(TourStatus::Active));
    }
}
