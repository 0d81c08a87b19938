use guide_core::{CarouselImage, CategoryHero, Destination};
use guide_service::{CategoryPage, CuisineMenu, CuisineStylePage, DetailPage, HomePage};

use super::{
    category_href, cuisine_href, detail_href, escape, layout, optional_image, optional_paragraph,
};

fn card(destination: &Destination) -> String {
    format!(
        "<article class=\"card\">{image}<h3><a href=\"{href}\">{title}</a></h3><p>{description}</p></article>",
        image = optional_image(destination.image_url.as_deref(), &destination.title),
        href = detail_href(&destination.title),
        title = escape(&destination.title),
        description = escape(&destination.description),
    )
}

fn card_grid(destinations: &[Destination]) -> String {
    if destinations.is_empty() {
        return "<p class=\"empty\">Nothing here yet.</p>".to_owned();
    }
    let cards: String = destinations.iter().map(card).collect();
    format!("<div class=\"card-grid\">{cards}</div>")
}

/// Image strip driven by `slider.js`. Without scripts the track still scrolls.
fn carousel(images: &[CarouselImage]) -> String {
    if images.is_empty() {
        return String::new();
    }
    let slides: String = images
        .iter()
        .map(|image| {
            let caption = image.caption.as_deref().unwrap_or_default();
            format!(
                "<figure class=\"slide card-item\"><img src=\"{}\" alt=\"{}\"><figcaption>{}</figcaption></figure>",
                escape(&image.image_url),
                escape(caption),
                escape(caption),
            )
        })
        .collect();
    format!(
        "<section class=\"card-slider\" aria-roledescription=\"carousel\">\
         <button type=\"button\" class=\"slider-prev\" aria-label=\"Previous image\">&#8249;</button>\
         <div class=\"slider-viewport\"><div class=\"slider-track\">{slides}</div></div>\
         <button type=\"button\" class=\"slider-next\" aria-label=\"Next image\">&#8250;</button>\
         </section>"
    )
}

fn banner(hero: Option<&CategoryHero>, fallback_title: &str) -> String {
    let Some(hero) = hero else {
        return format!("<section class=\"banner\"><h1>{}</h1></section>", escape(fallback_title));
    };
    format!(
        "<section class=\"banner\">{image}<h1>{title}</h1>{subtitle}{body}</section>",
        image = optional_image(hero.image_url.as_deref(), &hero.title),
        title = escape(&hero.title),
        subtitle = optional_paragraph(hero.subtitle.as_deref(), "subtitle"),
        body = optional_paragraph(hero.long_description.as_deref(), "intro"),
    )
}

pub fn home(page: &HomePage) -> String {
    let hero = page
        .hero
        .as_ref()
        .map(|hero| {
            format!(
                "<section class=\"hero\">{}<h1>Discover India</h1><p>{}</p></section>",
                optional_image(hero.image_url.as_deref(), &hero.title),
                escape(&hero.description),
            )
        })
        .unwrap_or_else(|| "<section class=\"hero\"><h1>Discover India</h1></section>".to_owned());
    let body = format!(
        "{hero}<section class=\"featured\"><h2>Highlights</h2>{}</section>{}",
        card_grid(&page.featured),
        carousel(&page.carousel),
    );
    layout("Home", "/", &body)
}

pub fn category(page: &CategoryPage) -> String {
    let name = page.category.as_str();
    let body = format!("{}{}", banner(page.hero.as_ref(), name), card_grid(&page.destinations));
    layout(name, category_href(page.category), &body)
}

pub fn about(page: &CategoryPage) -> String {
    let entries: String = page
        .destinations
        .iter()
        .map(|d| {
            format!(
                "<article><h2>{}</h2>{}<p>{}</p></article>",
                escape(&d.title),
                optional_image(d.image_url.as_deref(), &d.title),
                escape(d.body_text()),
            )
        })
        .collect();
    let body = format!("{}{entries}", banner(page.hero.as_ref(), "About"));
    layout("About", "/about", &body)
}

pub fn cuisine_menu(menu: &CuisineMenu) -> String {
    let styles: String = menu
        .styles
        .iter()
        .map(|style| {
            let dish = &style.representative;
            format!(
                "<article class=\"card\">{image}<h3><a href=\"{href}\">{name}</a></h3>\
                 <p>Try: <a href=\"{dish_href}\">{dish_title}</a></p></article>",
                image = optional_image(dish.image_url.as_deref(), &dish.title),
                href = cuisine_href(&style.slug),
                name = escape(&style.name),
                dish_href = detail_href(&dish.title),
                dish_title = escape(&dish.title),
            )
        })
        .collect();
    let grid = if styles.is_empty() {
        "<p class=\"empty\">Nothing here yet.</p>".to_owned()
    } else {
        format!("<div class=\"card-grid\">{styles}</div>")
    };
    let body = format!("{}{grid}", banner(menu.hero.as_ref(), "Cuisine"));
    layout("Cuisine", "/cuisine", &body)
}

pub fn cuisine_style(page: &CuisineStylePage) -> String {
    let body = format!(
        "<section class=\"banner\"><h1>{}</h1><p><a href=\"/cuisine\">All cuisines</a></p></section>{}{}",
        escape(&page.name),
        carousel(&page.carousel),
        card_grid(&page.dishes),
    );
    layout(&page.name, "/cuisine", &body)
}

pub fn details(page: &DetailPage) -> String {
    let d = &page.destination;
    let group = d.sub_category.as_deref().unwrap_or_else(|| d.category.as_str());
    let related = if page.related.is_empty() {
        String::new()
    } else {
        format!(
            "<section class=\"related\"><h2>More in {}</h2>{}</section>",
            escape(group),
            card_grid(&page.related),
        )
    };
    let body = format!(
        "<article class=\"detail\"><p class=\"breadcrumb\"><a href=\"{back}\">{category}</a></p>\
         <h1>{title}</h1>{image}<p class=\"lead\">{description}</p>{long}</article>{related}",
        back = category_href(d.category),
        category = escape(d.category.as_str()),
        title = escape(&d.title),
        image = optional_image(d.image_url.as_deref(), &d.title),
        description = escape(&d.description),
        long = optional_paragraph(d.long_description.as_deref(), "body"),
    );
    layout(&d.title, category_href(d.category), &body)
}
