// Element ids shared with index.html

// Backdrop
pub const FIELD_CANVAS_ID: &str = "field-canvas";

// Hero
pub const LIKE_BUTTON_ID: &str = "like-button";
pub const LIKE_COUNT_ID: &str = "like-count";

// Catalog-driven sections
pub const SKILLS_TRACK_ID: &str = "skills-track";
pub const PROJECT_GRID_ID: &str = "project-grid";
pub const SERVICES_GRID_ID: &str = "services-grid";
pub const PROCESS_GRID_ID: &str = "process-grid";
pub const PRICING_GRID_ID: &str = "pricing-grid";
pub const TESTIMONIAL_GRID_ID: &str = "testimonial-grid";
pub const FOOTER_YEAR_ID: &str = "footer-year";

// Generated per-item ids get the catalog index appended
pub const PROJECT_CARD_PREFIX: &str = "project-card-";
pub const PRICING_CTA_PREFIX: &str = "pricing-cta-";

// Project modal
pub const MODAL_ID: &str = "project-modal";
pub const MODAL_BACKDROP_ID: &str = "modal-backdrop";
pub const MODAL_CLOSE_ID: &str = "modal-close";
pub const MODAL_TITLE_ID: &str = "modal-title";
pub const MODAL_IMAGE_ID: &str = "modal-image";
pub const MODAL_STATUS_ID: &str = "modal-status";
pub const MODAL_BODY_ID: &str = "modal-body";
pub const MODAL_TAGS_ID: &str = "modal-tags";

// Contact section
pub const CONTACT_SECTION_ID: &str = "contact";
pub const CONTACT_INVITE_ID: &str = "contact-invite";
pub const START_CONVERSATION_ID: &str = "start-conversation";
pub const CONTACT_PANEL_ID: &str = "contact-panel";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CLOSE_FORM_ID: &str = "close-form";
pub const CONFIRMATION_ID: &str = "contact-confirmation";
pub const CONFIRMATION_TITLE_ID: &str = "confirmation-title";
pub const CONFIRMATION_BODY_ID: &str = "confirmation-body";
pub const SEND_ANOTHER_ID: &str = "send-another";

// Scroll-to-top control
pub const SCROLL_TOP_ID: &str = "scroll-top";

// Class toggled to hide an element; index.html styles it as display:none
pub const HIDDEN_CLASS: &str = "hidden";

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMIT_PENDING_LABEL: &str = "Sending...";
