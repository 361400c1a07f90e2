#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub flag: &'static str,
    pub rating: f32,
    pub max_rating: u8,
    pub text: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "John Doe",
        flag: "🇺🇸",
        rating: 5.0,
        max_rating: 5,
        text: "Amazing service and fantastic results! Highly recommend to anyone looking for top-notch AI solutions.",
    },
    Testimonial {
        id: 2,
        name: "Maria Silva",
        flag: "🇧🇷",
        rating: 4.0,
        max_rating: 5,
        text: "Very professional team and the project was delivered on time. The quality of work exceeded my expectations.",
    },
    Testimonial {
        id: 3,
        name: "Kenji Tanaka",
        flag: "🇯🇵",
        rating: 5.0,
        max_rating: 5,
        text: "Eben AI truly understands the nuances of artificial intelligence. Their insights were invaluable to our project.",
    },
    Testimonial {
        id: 4,
        name: "Fatima Al Fassi",
        flag: "🇦🇪",
        rating: 4.5,
        max_rating: 5,
        text: "A great partner to work with. They are responsive, knowledgeable, and dedicated to client success.",
    },
    Testimonial {
        id: 5,
        name: "Chloe Dubois",
        flag: "🇫🇷",
        rating: 5.0,
        max_rating: 5,
        text: "The solutions provided were innovative and perfectly tailored to our needs. Excellent communication throughout the process.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarRow {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRow {
    /// Out-of-range ratings are clamped to `0..=max`.
    pub fn new(rating: f32, max: u8) -> Self {
        let rating = rating.clamp(0.0, max as f32);
        let full = rating.floor() as u8;
        let half = full < max && rating - rating.floor() >= 0.5;
        let empty = max - full - half as u8;
        StarRow { full, half, empty }
    }

    pub fn render(&self) -> String {
        let mut row = "★".repeat(self.full as usize);
        if self.half {
            row.push('⯪');
        }
        row.push_str(&"☆".repeat(self.empty as usize));
        row
    }
}

/// `4.5/5`, `5/5`.
pub fn rating_label(rating: f32, max: u8) -> String {
    if rating.fract() == 0.0 {
        format!("{}/{}", rating as u8, max)
    } else {
        format!("{:.1}/{}", rating, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_ratings() {
        assert_eq!(StarRow::new(5.0, 5), StarRow { full: 5, half: false, empty: 0 });
        assert_eq!(StarRow::new(4.0, 5).render(), "★★★★☆");
        assert_eq!(StarRow::new(0.0, 5).render(), "☆☆☆☆☆");
    }

    #[test]
    fn fractional_ratings() {
        assert_eq!(StarRow::new(4.5, 5), StarRow { full: 4, half: true, empty: 0 });
        assert_eq!(StarRow::new(3.7, 5), StarRow { full: 3, half: true, empty: 1 });
        assert_eq!(StarRow::new(3.2, 5), StarRow { full: 3, half: false, empty: 2 });
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(StarRow::new(7.0, 5), StarRow { full: 5, half: false, empty: 0 });
        assert_eq!(StarRow::new(-1.0, 5), StarRow { full: 0, half: false, empty: 5 });
    }

    #[test]
    fn labels() {
        assert_eq!(rating_label(5.0, 5), "5/5");
        assert_eq!(rating_label(4.5, 5), "4.5/5");
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = TESTIMONIALS.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), TESTIMONIALS.len());
        assert!(TESTIMONIALS.iter().all(|t| t.max_rating == 5 && t.rating <= 5.0));
    }
}
