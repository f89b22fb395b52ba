//! Card markup
//!
//! ```html
//! <button type="button" class="tool-card" data-id="3" aria-haspopup="dialog" aria-label="Abrir herramienta: ...">
//!   <div class="card-image-container" style="background-color: #..." aria-hidden="true">img | icon</div>
//!   <div class="card-content">
//!     <h3 class="card-title">...</h3>
//!     <p class="card-description">...</p>
//!     <div class="card-badges" aria-hidden="true">badges</div>
//!   </div>
//! </button>
//! ```

use super::image::ImageLoad;
use super::{create, icon};
use caja_common::card::IMAGE_TIMEOUT_MS;
use caja_common::{Badge, CardView, Visual};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

/// A rendered card, plus the pending image load when it has one
pub struct RenderedCard {
    pub element: HtmlElement,
    pub image: Option<ImageLoad>,
}

pub fn render_card(document: &Document, view: &CardView) -> Option<RenderedCard> {
    let card = create(document, "button", "tool-card")?;
    card.set_attribute("type", "button").ok()?;
    card.set_attribute("data-id", &view.id.to_string()).ok()?;
    card.set_attribute("aria-haspopup", "dialog").ok()?;
    card.set_attribute("aria-label", &view.aria_label).ok()?;

    let media = create(document, "div", "card-image-container")?;
    media.set_attribute("aria-hidden", "true").ok()?;
    media.style().set_property("background-color", view.color).ok()?;
    let image = render_visual(document, &media, &view.visual)?;

    let content = create(document, "div", "card-content")?;

    let title = create(document, "h3", "card-title")?;
    title.set_text_content(Some(&view.title));
    content.append_child(&title).ok()?;

    let description = create(document, "p", "card-description")?;
    description.set_text_content(Some(&view.excerpt));
    content.append_child(&description).ok()?;

    let badges = create(document, "div", "card-badges")?;
    badges.set_attribute("aria-hidden", "true").ok()?;
    for badge in &view.badges {
        let badge = render_badge(document, badge)?;
        badges.append_child(&badge).ok()?;
    }
    content.append_child(&badges).ok()?;

    card.append_child(&media).ok()?;
    card.append_child(&content).ok()?;

    Some(RenderedCard {
        element: card,
        image,
    })
}

fn render_badge(document: &Document, badge: &Badge) -> Option<HtmlElement> {
    let span = create(document, "span", &format!("badge badge-{}", badge.class))?;
    let badge_icon = icon(document, badge.icon, "badge-icon")?;
    span.append_child(&badge_icon).ok()?;
    span.append_child(&document.create_text_node(&badge.text)).ok()?;
    Some(span)
}

// Outer Option: DOM failure. Inner: the image load, when there is one.
fn render_visual(
    document: &Document,
    container: &HtmlElement,
    visual: &Visual,
) -> Option<Option<ImageLoad>> {
    match visual {
        Visual::Icon(name) => {
            let card_icon = icon(document, name, "card-icon")?;
            container.append_child(&card_icon).ok()?;
            Some(None)
        }
        Visual::Image { url, fallback } => {
            let img: HtmlImageElement = document.create_element("img").ok()?.dyn_into().ok()?;
            img.set_class_name("card-image");
            img.set_alt("");
            img.set_attribute("aria-hidden", "true").ok()?;
            container.append_child(&img).ok()?;

            let fallback = *fallback;
            let swap_doc = document.clone();
            let swap_container = container.clone();
            let swap_img = img.clone();
            let load = ImageLoad::start(&img, url, IMAGE_TIMEOUT_MS, move |outcome| {
                if outcome.shows_image() {
                    return;
                }
                if let Some(span) = icon(&swap_doc, fallback, "card-icon") {
                    let _ = swap_container.replace_child(&span, &swap_img);
                }
            });
            Some(Some(load))
        }
    }
}
