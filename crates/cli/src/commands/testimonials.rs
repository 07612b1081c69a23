use subscripter_core::catalog::Catalog;
use subscripter_core::domain::testimonial::Testimonial;

use super::CommandResult;

pub fn run() -> CommandResult {
    let catalog = Catalog::standard();
    let cards: Vec<String> = catalog.testimonials().iter().map(render_card).collect();
    CommandResult::text(cards.join("\n\n"))
}

fn render_card(testimonial: &Testimonial) -> String {
    let stars: String =
        testimonial.stars().iter().map(|filled| if *filled { '★' } else { '☆' }).collect();
    let avatar = match testimonial.avatar() {
        Some(url) => url.to_string(),
        None => format!("({})", testimonial.initials()),
    };

    format!(
        "{stars}\n\"{}\"\n{avatar} {} - {}",
        testimonial.quote,
        testimonial.name,
        testimonial.attribution()
    )
}

#[cfg(test)]
mod tests {
    use subscripter_core::catalog::Catalog;

    use super::render_card;

    #[test]
    fn card_uses_initials_without_avatar() {
        let catalog = Catalog::standard();
        let card = render_card(&catalog.testimonials()[0]);

        assert!(card.starts_with("★★★★★"));
        assert!(card.contains("(AM) Alex Morgan - Marketing Director, TechCorp"));
    }

    #[test]
    fn four_star_rating_leaves_one_slot_empty() {
        let catalog = Catalog::standard();
        let card = render_card(&catalog.testimonials()[1]);

        assert!(card.starts_with("★★★★☆"));
    }
}
