use serde::{Deserialize, Serialize};

/// Статус оплаты бронирования (оплата происходит на туре)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "warning",
            PaymentStatus::Paid => "success",
            PaymentStatus::Refunded => "neutral",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
