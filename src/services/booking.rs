use crate::core::appointment::{AppointmentRequest, BookingReceipt};
use std::time::Duration;

/// Заглушка записи на приём: логирует запрос и всегда отвечает успехом
pub struct BookingService {
    delay: Duration,
}

impl BookingService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn book_appointment(&self, request: &AppointmentRequest) -> BookingReceipt {
        match serde_json::to_string(request) {
            Ok(payload) => log::info!("📅 bookAppointment payload {}", payload),
            Err(e) => log::warn!("⚠️ Could not serialise booking {}: {}", request.request_id, e),
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        BookingReceipt { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::appointment::HelpType;

    #[tokio::test]
    async fn test_booking_always_succeeds() {
        let service = BookingService::new(Duration::ZERO);
        let request = AppointmentRequest::from_form(HelpType::Counsellor, "2025-06-01", "exam stress").unwrap();
        assert_eq!(service.book_appointment(&request).await, BookingReceipt { success: true });
    }

    #[tokio::test(start_paused = true)]
    async fn test_booking_delay() {
        let service = BookingService::new(Duration::from_millis(1200));
        let request = AppointmentRequest::from_form(HelpType::Psychiatrist, "2025-06-01", "").unwrap();
        let started = tokio::time::Instant::now();
        service.book_appointment(&request).await;
        assert!(started.elapsed() >= Duration::from_millis(1200));
    }
}
