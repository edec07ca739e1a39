//! One-shot rendering of the catalog into the static page sections.
//!
//! Containers come from index.html; a missing container is logged and
//! skipped so a trimmed-down host page still boots.

use crate::constants::*;
use crate::dom::{self, append, element};
use folio_core::{Catalog, Price, PricingTier, Project};
use web_sys as web;

pub fn render_all(document: &web::Document, catalog: &Catalog) -> anyhow::Result<()> {
    render_marquee(document, catalog)?;
    render_projects(document, &catalog.projects)?;
    render_services(document, catalog)?;
    render_process(document, catalog)?;
    render_pricing(document, &catalog.pricing)?;
    render_testimonials(document, catalog)?;
    render_footer_year(document);
    log::info!(
        "[page] rendered {} projects, {} tiers, {} testimonials",
        catalog.projects.len(),
        catalog.pricing.len(),
        catalog.testimonials.len()
    );
    Ok(())
}

fn container(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    match &el {
        Some(el) => dom::clear(el),
        None => log::warn!("[page] no #{} in host page; section skipped", id),
    }
    el
}

fn render_marquee(document: &web::Document, catalog: &Catalog) -> anyhow::Result<()> {
    let Some(track) = container(document, SKILLS_TRACK_ID) else {
        return Ok(());
    };
    for skill in catalog.marquee_items() {
        append(&track, &element(document, "span", "marquee__item", Some(skill))?)?;
    }
    Ok(())
}

pub fn project_card_id(index: usize) -> String {
    format!("{PROJECT_CARD_PREFIX}{index}")
}

pub fn pricing_cta_id(index: usize) -> String {
    format!("{PRICING_CTA_PREFIX}{index}")
}

/// `<span class="badge badge--live">Live</span>`
pub fn status_badge(document: &web::Document, project: &Project) -> anyhow::Result<web::Element> {
    let class = format!("badge {}", project.status.badge_class());
    element(document, "span", &class, Some(project.status.label()))
}

pub fn tag_list(document: &web::Document, tags: &[String]) -> anyhow::Result<web::Element> {
    let list = element(document, "div", "tags", None)?;
    for tag in tags {
        append(&list, &element(document, "span", "tag", Some(tag))?)?;
    }
    Ok(list)
}

fn render_projects(document: &web::Document, projects: &[Project]) -> anyhow::Result<()> {
    let Some(grid) = container(document, PROJECT_GRID_ID) else {
        return Ok(());
    };
    for (i, project) in projects.iter().enumerate() {
        let card = element(document, "article", "card project-card", None)?;
        card.set_id(&project_card_id(i));

        let img = element(document, "img", "project-card__image", None)?;
        img.set_attribute("src", &project.image).map_err(dom::js_err)?;
        img.set_attribute("alt", &project.title).map_err(dom::js_err)?;
        img.set_attribute("loading", "lazy").map_err(dom::js_err)?;
        append(&card, &img)?;

        let body = element(document, "div", "project-card__body", None)?;
        append(&body, &status_badge(document, project)?)?;
        append(&body, &element(document, "h3", "", Some(&project.title))?)?;
        append(&body, &element(document, "p", "muted", Some(&project.description))?)?;
        append(&body, &tag_list(document, &project.tags)?)?;
        append(&card, &body)?;

        append(&grid, &card)?;
    }
    Ok(())
}

fn render_services(document: &web::Document, catalog: &Catalog) -> anyhow::Result<()> {
    let Some(grid) = container(document, SERVICES_GRID_ID) else {
        return Ok(());
    };
    for service in &catalog.services {
        let card = element(document, "div", "card service", None)?;
        append(&card, &element(document, "div", "service__icon", Some(&service.icon))?)?;
        append(&card, &element(document, "h3", "", Some(&service.title))?)?;
        append(&card, &element(document, "p", "muted", Some(&service.description))?)?;
        append(&grid, &card)?;
    }
    Ok(())
}

fn render_process(document: &web::Document, catalog: &Catalog) -> anyhow::Result<()> {
    let Some(grid) = container(document, PROCESS_GRID_ID) else {
        return Ok(());
    };
    for step in &catalog.process {
        let item = element(document, "div", "process-step", None)?;
        append(&item, &element(document, "span", "process-step__number", Some(&step.step))?)?;
        append(&item, &element(document, "h3", "", Some(&step.title))?)?;
        append(&item, &element(document, "p", "muted", Some(&step.description))?)?;
        append(&grid, &item)?;
    }
    Ok(())
}

fn render_pricing(document: &web::Document, tiers: &[PricingTier]) -> anyhow::Result<()> {
    let Some(grid) = container(document, PRICING_GRID_ID) else {
        return Ok(());
    };
    for (i, tier) in tiers.iter().enumerate() {
        let class = if tier.highlighted {
            "card pricing pricing--highlighted"
        } else {
            "card pricing"
        };
        let card = element(document, "div", class, None)?;
        if tier.highlighted {
            append(&card, &element(document, "span", "pricing__flag", Some("Most Popular"))?)?;
        }
        append(&card, &element(document, "h3", "", Some(&tier.name))?)?;
        let price_class = match tier.price {
            Price::Fixed { .. } => "pricing__price",
            Price::Custom => "pricing__price pricing__price--custom",
        };
        append(&card, &element(document, "p", price_class, Some(&tier.price.label()))?)?;

        let features = element(document, "ul", "pricing__features", None)?;
        for feature in &tier.features {
            append(&features, &element(document, "li", "", Some(feature))?)?;
        }
        append(&card, &features)?;

        let cta = element(document, "button", "button pricing__cta", Some(&tier.cta))?;
        cta.set_id(&pricing_cta_id(i));
        cta.set_attribute("type", "button").map_err(dom::js_err)?;
        append(&card, &cta)?;

        append(&grid, &card)?;
    }
    Ok(())
}

fn render_testimonials(document: &web::Document, catalog: &Catalog) -> anyhow::Result<()> {
    let Some(grid) = container(document, TESTIMONIAL_GRID_ID) else {
        return Ok(());
    };
    for t in &catalog.testimonials {
        let card = element(document, "figure", "card testimonial", None)?;
        append(&card, &element(document, "blockquote", "", Some(&t.quote))?)?;

        let caption = element(document, "figcaption", "testimonial__author", None)?;
        let avatar = element(document, "img", "avatar", None)?;
        avatar.set_attribute("src", &t.image).map_err(dom::js_err)?;
        avatar.set_attribute("alt", &t.author).map_err(dom::js_err)?;
        append(&caption, &avatar)?;
        append(&caption, &element(document, "strong", "", Some(&t.author))?)?;
        append(&caption, &element(document, "span", "muted", Some(&t.role))?)?;
        append(&card, &caption)?;

        append(&grid, &card)?;
    }
    Ok(())
}

fn render_footer_year(document: &web::Document) {
    let year = js_sys::Date::new_0().get_full_year();
    dom::set_text(document, FOOTER_YEAR_ID, &year.to_string());
}
