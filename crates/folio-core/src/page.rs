//! Page view state and the transitions user actions are allowed to make.
//!
//! The contact section is a single enum so contradictory combinations (form
//! open *and* submitted) cannot be represented. The project modal is an
//! independent `Option` and never interacts with the contact flow.

use crate::catalog::{Catalog, Project};
use crate::constants::SCROLL_TOP_THRESHOLD_PX;
use crate::contact::{ContactError, ContactForm, ContactRequest};

pub const CONFIRMATION_TITLE: &str = "Message Received!";
pub const CONFIRMATION_BODY: &str = "Thank you! I'll get back to you within 24 hours.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactState {
    #[default]
    Idle,
    FormOpen {
        /// A submission is in flight; the submit control is disabled.
        pending: bool,
    },
    Submitted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub likes: u64,
    pub selected_project: Option<usize>,
    pub contact: ContactState,
    pub show_scroll_to_top: bool,
}

/// Which contact sub-view to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactView {
    Invite,
    Form { submitting: bool },
    Confirmation,
}

/// Everything the DOM layer needs to render the interactive parts.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView<'a> {
    pub likes: u64,
    pub contact: ContactView,
    pub modal: Option<&'a Project>,
    pub show_scroll_to_top: bool,
}

impl PageView<'_> {
    pub fn likes_label(&self) -> String {
        self.likes.to_string()
    }
}

pub struct PageController {
    state: PageState,
    catalog: Catalog,
    attempts: u64,
}

impl PageController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: PageState::default(),
            catalog,
            attempts: 0,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of submission attempts started since page load.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn view(&self) -> PageView<'_> {
        let contact = match self.state.contact {
            ContactState::Idle => ContactView::Invite,
            ContactState::FormOpen { pending } => ContactView::Form {
                submitting: pending,
            },
            ContactState::Submitted => ContactView::Confirmation,
        };
        PageView {
            likes: self.state.likes,
            contact,
            modal: self.selected_project(),
            show_scroll_to_top: self.state.show_scroll_to_top,
        }
    }

    // ---------------- Likes ----------------

    pub fn like(&mut self) -> u64 {
        self.state.likes = self.state.likes.saturating_add(1);
        self.state.likes
    }

    // ---------------- Project modal ----------------

    /// Open the modal for catalog entry `index`. Out-of-range indices leave
    /// the current selection alone.
    pub fn select_project(&mut self, index: usize) -> Option<&Project> {
        if index < self.catalog.projects.len() {
            self.state.selected_project = Some(index);
            log::info!("[page] open project {}", index);
        }
        self.selected_project()
    }

    pub fn close_modal(&mut self) -> bool {
        self.state.selected_project.take().is_some()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.state
            .selected_project
            .and_then(|i| self.catalog.project(i))
    }

    // ---------------- Scroll-to-top ----------------

    /// Re-derive the scroll-to-top visibility; returns whether it changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let show = offset_y > SCROLL_TOP_THRESHOLD_PX;
        let changed = show != self.state.show_scroll_to_top;
        self.state.show_scroll_to_top = show;
        changed
    }

    // ---------------- Contact flow ----------------

    /// Idle -> FormOpen.
    pub fn start_conversation(&mut self) -> bool {
        self.transition(ContactState::Idle, ContactState::FormOpen { pending: false })
    }

    /// FormOpen -> Idle, only while nothing is in flight.
    pub fn close_form(&mut self) -> bool {
        self.transition(
            ContactState::FormOpen { pending: false },
            ContactState::Idle,
        )
    }

    /// Submitted -> Idle.
    pub fn send_another(&mut self) -> bool {
        self.transition(ContactState::Submitted, ContactState::Idle)
    }

    /// Validate the form and start an attempt. The state stays FormOpen with
    /// `pending` set until [`finish_submit`](Self::finish_submit) is called.
    pub fn begin_submit(&mut self, form: &ContactForm) -> Result<ContactRequest, ContactError> {
        match self.state.contact {
            ContactState::FormOpen { pending: false } => {}
            ContactState::FormOpen { pending: true } => return Err(ContactError::Pending),
            _ => return Err(ContactError::NotAccepting),
        }
        let submission = form.validate()?;
        let request = ContactRequest::new(self.attempts + 1, &submission)?;
        self.attempts += 1;
        self.state.contact = ContactState::FormOpen { pending: true };
        log::info!("[contact] submitting attempt {}", request.attempt);
        Ok(request)
    }

    /// Resolve the in-flight attempt with an HTTP status or a transport error.
    /// Success moves to Submitted; any failure re-enables the form and the
    /// error is returned for the user notification.
    pub fn finish_submit(&mut self, outcome: Result<u16, String>) -> Result<(), ContactError> {
        if self.state.contact != (ContactState::FormOpen { pending: true }) {
            log::warn!("[contact] result with no submission in flight");
            return Err(ContactError::NotAccepting);
        }
        let result = match outcome {
            Ok(status) => crate::contact::classify_status(status),
            Err(e) => Err(ContactError::Transport(e)),
        };
        match &result {
            Ok(()) => {
                self.state.contact = ContactState::Submitted;
                log::info!("[contact] submitted");
            }
            Err(e) => {
                self.state.contact = ContactState::FormOpen { pending: false };
                log::warn!("[contact] {}", e);
            }
        }
        result
    }

    fn transition(&mut self, from: ContactState, to: ContactState) -> bool {
        if self.state.contact != from {
            return false;
        }
        log::info!("[page] contact {:?} -> {:?}", from, to);
        self.state.contact = to;
        true
    }
}
