pub mod chat;
pub mod feature;
pub mod plan;
pub mod testimonial;
