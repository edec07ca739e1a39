// Host-side tests for the static content catalog.

use folio_core::{Catalog, CatalogError, Price, PricingTier, Project, ProjectStatus, Testimonial};

#[test]
fn portfolio_catalog_is_valid_and_complete() {
    let c = Catalog::portfolio().unwrap();
    assert_eq!(c.skills.len(), 12);
    assert_eq!(c.projects.len(), 3);
    assert_eq!(c.services.len(), 4);
    assert_eq!(c.process.len(), 4);
    assert_eq!(c.pricing.len(), 3);
    assert_eq!(c.testimonials.len(), 3);
    assert!(c.projects.iter().all(|p| !p.tags.is_empty()));
    assert_eq!(c.pricing.iter().filter(|t| t.highlighted).count(), 1);
}

#[test]
fn marquee_repeats_skills_twice() {
    let c = Catalog::portfolio().unwrap();
    let items: Vec<&str> = c.marquee_items().collect();
    assert_eq!(items.len(), c.skills.len() * 2);
    assert_eq!(items[0], items[c.skills.len()]);
}

#[test]
fn project_requires_title_and_absolute_image() {
    let err = Project::new(" ", "https://x.test/a.jpg", "d", "l", &["t"], ProjectStatus::Live);
    assert_eq!(
        err,
        Err(CatalogError::EmptyField {
            record: "project",
            field: "title"
        })
    );
    let err = Project::new("T", "/img/a.jpg", "d", "l", &["t"], ProjectStatus::Live);
    assert!(matches!(err, Err(CatalogError::BadImageUrl { .. })));
    let err = Project::new("T", "https://x.test/a.jpg", "d", "l", &[" "], ProjectStatus::Live);
    assert!(matches!(err, Err(CatalogError::EmptyList { .. })));
}

#[test]
fn pricing_and_testimonials_validate() {
    assert!(PricingTier::new("Tier", Price::Custom, &[], "Go", false).is_err());
    assert_eq!(
        PricingTier::new("Tier", Price::Custom, &["f"], "  ", false),
        Err(CatalogError::EmptyField {
            record: "pricing tier",
            field: "cta"
        })
    );
    assert!(Testimonial::new("q", "", "r", "https://x.test/p.png").is_err());
    assert!(Testimonial::new("q", "a", "r", "https://x.test/p.png").is_ok());
}

#[test]
fn labels_render_for_display() {
    assert_eq!(Price::Fixed { eur: 499 }.label(), "€499");
    assert_eq!(Price::Custom.label(), "Custom");
    assert_eq!(ProjectStatus::InProgress.label(), "In Progress");
    assert_eq!(ProjectStatus::Live.badge_class(), "badge--live");
}

#[test]
fn each_pricing_tier_has_its_own_call_to_action() {
    let c = Catalog::portfolio().unwrap();
    let labels: Vec<&str> = c.pricing.iter().map(|t| t.cta.as_str()).collect();
    assert_eq!(labels, ["Get Started", "Start Building", "Contact Me"]);
    assert!(c.pricing[1].highlighted);
}
