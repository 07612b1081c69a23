use serde::{Deserialize, Serialize};

pub const MAX_RATING: u8 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub avatar_url: Option<String>,
    pub quote: String,
    pub rating: u8,
}

impl Testimonial {
    /// Fallback avatar text: the first letter of each word of the name.
    pub fn initials(&self) -> String {
        self.name.split_whitespace().filter_map(|part| part.chars().next()).collect()
    }

    /// Five slots, the first `rating` of them filled.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let mut stars = [false; MAX_RATING as usize];
        for slot in stars.iter_mut().take(self.rating.min(MAX_RATING) as usize) {
            *slot = true;
        }
        stars
    }

    pub fn attribution(&self) -> String {
        format!("{}, {}", self.role, self.company)
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}
