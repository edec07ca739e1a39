//! Static page content: skills, projects, services, process, pricing and
//! testimonials.
//!
//! Every record goes through a validating constructor so the page never has to
//! cope with a missing title or a relative image path at render time.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{record}: required field `{field}` is empty")]
    EmptyField {
        record: &'static str,
        field: &'static str,
    },
    #[error("{record}: `{url}` is not an absolute http(s) URL")]
    BadImageUrl { record: &'static str, url: String },
    #[error("{record}: at least one {what} is required")]
    EmptyList {
        record: &'static str,
        what: &'static str,
    },
}

fn required(record: &'static str, field: &'static str, value: &str) -> Result<String, CatalogError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(CatalogError::EmptyField { record, field });
    }
    Ok(v.to_string())
}

fn image_url(record: &'static str, url: &str) -> Result<String, CatalogError> {
    let u = url.trim();
    if !(u.starts_with("https://") || u.starts_with("http://")) {
        return Err(CatalogError::BadImageUrl {
            record,
            url: u.to_string(),
        });
    }
    Ok(u.to_string())
}

fn non_empty_list(
    record: &'static str,
    what: &'static str,
    items: &[&str],
) -> Result<Vec<String>, CatalogError> {
    let out: Vec<String> = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if out.is_empty() {
        return Err(CatalogError::EmptyList { record, what });
    }
    Ok(out)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// CSS modifier used for the badge colour.
    pub fn badge_class(self) -> &'static str {
        match self {
            ProjectStatus::Live => "badge--live",
            ProjectStatus::InProgress => "badge--progress",
            ProjectStatus::Completed => "badge--done",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub image: String,
    pub description: String,
    pub long_description: String,
    pub tags: Vec<String>,
    pub status: ProjectStatus,
}

impl Project {
    pub fn new(
        title: &str,
        image: &str,
        description: &str,
        long_description: &str,
        tags: &[&str],
        status: ProjectStatus,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            title: required("project", "title", title)?,
            image: image_url("project", image)?,
            description: required("project", "description", description)?,
            long_description: required("project", "long_description", long_description)?,
            tags: non_empty_list("project", "tag", tags)?,
            status,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Price {
    Fixed { eur: u32 },
    Custom,
}

impl Price {
    pub fn label(self) -> String {
        match self {
            Price::Fixed { eur } => format!("€{eur}"),
            Price::Custom => "Custom".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub name: String,
    pub price: Price,
    pub features: Vec<String>,
    /// Label of the button that opens the contact form.
    pub cta: String,
    pub highlighted: bool,
}

impl PricingTier {
    pub fn new(
        name: &str,
        price: Price,
        features: &[&str],
        cta: &str,
        highlighted: bool,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            name: required("pricing tier", "name", name)?,
            price,
            features: non_empty_list("pricing tier", "feature", features)?,
            cta: required("pricing tier", "cta", cta)?,
            highlighted,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub image: String,
}

impl Testimonial {
    pub fn new(quote: &str, author: &str, role: &str, image: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            quote: required("testimonial", "quote", quote)?,
            author: required("testimonial", "author", author)?,
            role: required("testimonial", "role", role)?,
            image: image_url("testimonial", image)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Service {
    pub fn new(icon: &str, title: &str, description: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            icon: required("service", "icon", icon)?,
            title: required("service", "title", title)?,
            description: required("service", "description", description)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessStep {
    pub step: String,
    pub title: String,
    pub description: String,
}

impl ProcessStep {
    pub fn new(step: &str, title: &str, description: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            step: required("process step", "step", step)?,
            title: required("process step", "title", title)?,
            description: required("process step", "description", description)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub process: Vec<ProcessStep>,
    pub pricing: Vec<PricingTier>,
    pub testimonials: Vec<Testimonial>,
}

impl Catalog {
    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    /// Skills repeated twice so the marquee can scroll by half its width and
    /// wrap without a visible seam.
    pub fn marquee_items(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().chain(self.skills.iter()).map(String::as_str)
    }

    /// The content shown on the live site.
    pub fn portfolio() -> Result<Self, CatalogError> {
        let skills = non_empty_list(
            "catalog",
            "skill",
            &[
                "React",
                "Node.js",
                "Tailwind CSS",
                "JavaScript",
                "TypeScript",
                "GitHub",
                "Netlify",
                "Cursor",
                "PostgreSQL",
                "Firebase",
                "Vite",
                "SEO",
            ],
        )?;

        let projects = vec![
            Project::new(
                "The Rustic Bean",
                "https://images.unsplash.com/photo-1554118811-1e0d58224f24?auto=format&fit=crop&q=80&w=500",
                "High-performance landing page for a specialty coffee shop.",
                "Rebuilt a legacy WordPress site into a lightning-fast React application. \
                 Achieved a 100/100 Lighthouse score and improved mobile conversion by 40% \
                 using optimized images and modern CSS.",
                &["React", "Tailwind", "UX Design"],
                ProjectStatus::Completed,
            )?,
            Project::new(
                "Iron Vault Gym",
                "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?auto=format&fit=crop&q=80&w=500",
                "Membership portal with real-time class availability updates.",
                "Integrated a custom API for real-time scheduling. Built with a \
                 high-availability backend to support 500+ active members.",
                &["React", "API Integration", "Node.js"],
                ProjectStatus::Completed,
            )?,
            Project::new(
                "Daugavpils Dine",
                "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?auto=format&fit=crop&q=80&w=500",
                "Mobile-first digital menu and reservation system for a bistro.",
                "Replacing PDF menus with a dynamic web view. Including multi-language \
                 support (LV/RU/EN) and integrated booking widget.",
                &["Local SEO", "UX", "React"],
                ProjectStatus::Completed,
            )?,
        ];

        let services = vec![
            Service::new(
                "🚀",
                "High Performance",
                "Sites that load in under 1 second. Speed is the #1 ranking factor.",
            )?,
            Service::new(
                "📱",
                "Mobile First",
                "Pixel-perfect on every screen. Optimized for modern mobile users.",
            )?,
            Service::new(
                "📈",
                "SEO Optimized",
                "Structured data and clean code to help you climb Google rankings.",
            )?,
            Service::new(
                "🌍",
                "Multi-language",
                "Full LV/RU/EN support to capture the entire Baltic market.",
            )?,
        ];

        let process = vec![
            ProcessStep::new(
                "01",
                "Discovery",
                "We discuss your goals and audience to create a tailored digital strategy.",
            )?,
            ProcessStep::new(
                "02",
                "Design",
                "I create a high-fidelity mockup. No code is written until you love the vision.",
            )?,
            ProcessStep::new(
                "03",
                "Development",
                "Building your solution focusing on speed, SEO, and responsiveness.",
            )?,
            ProcessStep::new(
                "04",
                "Launch",
                "Deployment and 30 days of support to ensure everything runs perfectly.",
            )?,
        ];

        let pricing = vec![
            PricingTier::new(
                "The Landing Page",
                Price::Fixed { eur: 499 },
                &[
                    "Single Page React Site",
                    "Contact Form Integration",
                    "Basic SEO Setup",
                ],
                "Get Started",
                false,
            )?,
            PricingTier::new(
                "Business Growth",
                Price::Fixed { eur: 999 },
                &["Up to 5 Pages", "Custom Animations", "Multi-language (LV/RU/EN)"],
                "Start Building",
                true,
            )?,
            PricingTier::new(
                "Custom App",
                Price::Custom,
                &["User Login/Portals", "Database Integration", "E-commerce Setup"],
                "Contact Me",
                false,
            )?,
        ];

        let testimonials = vec![
            Testimonial::new(
                "Kristians transformed our coffee shop's digital presence. \
                 Our mobile orders increased by 40% in the first month!",
                "Māris Bērziņš",
                "Owner, The Rustic Bean",
                "https://i.pravatar.cc/150?u=maris",
            )?,
            Testimonial::new(
                "The multi-language support was a game changer for our business in the Baltics. \
                 Professional, fast, and high-quality code.",
                "Elena Petrova",
                "Marketing Director, Dine Group",
                "https://i.pravatar.cc/150?u=elena",
            )?,
            Testimonial::new(
                "I've worked with many devs, but Kristians' focus on speed and SEO is what sets \
                 him apart. Our gym site now ranks #1 locally.",
                "Viktors Kalniņš",
                "Founder, Iron Vault",
                "https://i.pravatar.cc/150?u=viktors",
            )?,
        ];

        Ok(Self {
            skills,
            projects,
            services,
            process,
            pricing,
            testimonials,
        })
    }
}
