use chrono::NaiveDate;

use super::aggregate::Review;

fn review(id: i64, name: &str, rating: u8, date: (i32, u32, u32), tour: &str, comment: &str) -> Review {
    Review {
        id,
        name: name.into(),
        avatar: Some(format!("https://i.pravatar.cc/150?img={}", id)),
        rating,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        tour: tour.into(),
        comment: comment.into(),
    }
}

/// Отзывы, которые видны на странице обратной связи до первой отправки
pub fn sample_reviews() -> Vec<Review> {
    vec![
        review(
            1,
            "John Smith",
            5,
            (2025, 4, 15),
            "Paris City Tour",
            "Amazing experience! The Eiffel Tower visit was the highlight of our trip. \
             Our guide was knowledgeable and friendly, making the tour extremely enjoyable.",
        ),
        review(
            2,
            "Sarah Johnson",
            4,
            (2025, 4, 10),
            "Tokyo Adventure",
            "Great tour with lots of interesting cultural insights. I would definitely \
             recommend it to anyone visiting Tokyo for the first time.",
        ),
        review(
            3,
            "Michael Chen",
            5,
            (2025, 4, 5),
            "African Safari",
            "Absolutely stunning! We saw all the Big Five animals and the accommodations \
             were luxurious. The guides were extremely knowledgeable about wildlife.",
        ),
    ]
}
