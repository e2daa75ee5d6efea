//! Демонстрационный каталог из шести туров.

use chrono::NaiveDate;

use super::aggregate::Tour;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const IMG_PARIS: &str =
    "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?q=80&w=1000&auto=format&fit=crop";
const IMG_TOKYO: &str =
    "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?q=80&w=1000&auto=format&fit=crop";
const IMG_SAFARI: &str =
    "https://images.unsplash.com/photo-1516426122078-c23e76319801?q=80&w=1000&auto=format&fit=crop";
const IMG_BALI: &str =
    "https://images.unsplash.com/photo-1537996194471-e657df975ab4?q=80&w=1000&auto=format&fit=crop";
const IMG_MACHU: &str =
    "https://images.unsplash.com/photo-1587595431973-160d0d94add1?q=80&w=1000&auto=format&fit=crop";
const IMG_GREECE: &str =
    "https://images.unsplash.com/photo-1533105079780-92b9be482077?q=80&w=1000&auto=format&fit=crop";

/// Шесть туров демонстрационного каталога
pub fn sample_tours() -> Vec<Tour> {
    let mut paris = Tour::new(
        1,
        "Paris City Tour",
        "Explore the beautiful city of Paris including Eiffel Tower and Louvre Museum.",
        "France",
        "City",
        199.0,
        "3 days",
        4.8,
        vec![
            date(2025, 6, 15),
            date(2025, 7, 10),
            date(2025, 8, 5),
            date(2025, 9, 12),
        ],
    );
    paris.long_description = Some(
        "Experience the magic of Paris with our comprehensive city tour. Walk along the \
         charming streets, visit iconic landmarks such as the Eiffel Tower, Notre-Dame \
         Cathedral, and the Louvre Museum. Enjoy French cuisine at local restaurants and \
         immerse yourself in the rich culture and history of the City of Lights. This tour \
         includes professional guides, accommodation in a central hotel, and all entrance \
         fees to major attractions."
            .into(),
    );
    paris.image = Some(IMG_PARIS.into());
    paris.images = strings(&[
        IMG_PARIS,
        "https://images.unsplash.com/photo-1523496618250-2324a741c1ad?q=80&w=1000&auto=format&fit=crop",
        "https://images.unsplash.com/photo-1551634979-2b11f8c946fe?q=80&w=1000&auto=format&fit=crop",
    ]);
    paris.highlights = strings(&[
        "Visit the iconic Eiffel Tower and enjoy panoramic views of the city",
        "Explore the world-famous Louvre Museum and see the Mona Lisa",
        "Walk along the historic Champs-Elysées and Arc de Triomphe",
        "Enjoy a Seine River cruise to view Paris from the water",
    ]);
    paris.included = strings(&[
        "Professional English-speaking guide",
        "3-star hotel accommodation",
        "Daily breakfast",
        "Skip-the-line entrance tickets to all attractions",
        "Seine River cruise ticket",
    ]);
    paris.group_size = Some(15);
    paris.meeting_point = Some("Paris Charles de Gaulle Airport".into());

    let mut tokyo = Tour::new(
        2,
        "Tokyo Adventure",
        "Discover the vibrant culture and modern attractions of Tokyo.",
        "Japan",
        "City",
        299.0,
        "5 days",
        4.7,
        vec![date(2025, 6, 20), date(2025, 7, 15), date(2025, 8, 10)],
    );
    tokyo.image = Some(IMG_TOKYO.into());
    tokyo.group_size = Some(12);
    tokyo.meeting_point = Some("Narita International Airport".into());

    let mut safari = Tour::new(
        3,
        "African Safari",
        "Experience wildlife up close in the stunning savannahs of Kenya.",
        "Kenya",
        "Adventure",
        499.0,
        "7 days",
        4.9,
        vec![date(2025, 7, 5), date(2025, 8, 15), date(2025, 9, 10)],
    );
    safari.image = Some(IMG_SAFARI.into());
    safari.group_size = Some(8);
    safari.meeting_point = Some("Jomo Kenyatta International Airport".into());

    let mut bali = Tour::new(
        4,
        "Bali Beach Retreat",
        "Relax on beautiful beaches and explore Balinese culture.",
        "Indonesia",
        "Beach",
        349.0,
        "6 days",
        4.6,
        vec![date(2025, 6, 10), date(2025, 7, 20), date(2025, 8, 25)],
    );
    bali.image = Some(IMG_BALI.into());
    bali.group_size = Some(16);

    let mut machu = Tour::new(
        5,
        "Machu Picchu Expedition",
        "Trek the Inca Trail and visit the ancient ruins of Machu Picchu.",
        "Peru",
        "Adventure",
        599.0,
        "8 days",
        4.9,
        vec![date(2025, 7, 10), date(2025, 8, 20), date(2025, 9, 15)],
    );
    machu.image = Some(IMG_MACHU.into());
    machu.group_size = Some(10);

    let mut greece = Tour::new(
        6,
        "Greek Islands Tour",
        "Island hop through the beautiful Greek islands of Santorini and Mykonos.",
        "Greece",
        "Beach",
        449.0,
        "10 days",
        4.8,
        vec![date(2025, 6, 25), date(2025, 7, 30), date(2025, 9, 5)],
    );
    greece.image = Some(IMG_GREECE.into());
    greece.group_size = Some(14);

    vec![paris, tokyo, safari, bali, machu, greece]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_catalog_is_valid() {
        let tours = sample_tours();
        assert_eq!(tours.len(), 6);
        for tour in &tours {
            assert!(tour.validate().is_ok(), "{}", tour.title);
            assert!(!tour.available_dates.is_empty());
            assert!(tour.available_dates.windows(2).all(|w| w[0] < w[1]));
        }
        let ids: HashSet<_> = tours.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), tours.len());
    }
}
