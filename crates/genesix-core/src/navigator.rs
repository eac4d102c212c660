use crate::auth::{AuthProvider, RegisterRequest, User};
use crate::error::Result;
use crate::router::{parse_fragment, Router};
use crate::types::{Page, StepId};
use serde::Serialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// What the shell renders for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Loading,
    Login,
    Register,
    ForgotPassword,
    Dashboard,
    Documents,
    DocumentDetail { number: u8 },
    Collaboration,
    Analytics,
    Profile,
    Settings,
    /// The structured step-1 form.
    Step1Form,
    Step { step: StepId },
    Empty,
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Gates pages behind authentication and maps them to views.
pub struct Navigator<A: AuthProvider> {
    router: Router,
    auth: A,
}

impl<A: AuthProvider> Navigator<A> {
    /// Start at `fragment` (or `login` when empty), then apply the same
    /// gating a fragment change gets.
    pub fn new(auth: A, fragment: &str) -> Self {
        let initial = parse_fragment(fragment).unwrap_or(Page::Login);
        let mut nav = Self {
            router: Router::new(initial),
            auth,
        };
        nav.handle_fragment(fragment);
        nav.sync_auth();
        nav
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    /// Mutable access for auth changes made outside the navigator; call
    /// [`Navigator::sync_auth`] afterwards.
    pub fn auth_mut(&mut self) -> &mut A {
        &mut self.auth
    }

    pub fn current(&self) -> Page {
        self.router.current()
    }

    fn home(&self) -> Page {
        if self.auth.is_authenticated() {
            Page::Dashboard
        } else {
            Page::Login
        }
    }

    fn gate(&self, target: Page) -> Page {
        if !self.auth.is_authenticated() && !target.is_public() {
            debug!(page = %target, "not signed in, redirecting to login");
            return Page::Login;
        }
        target
    }

    /// React to a URL fragment change.
    pub fn handle_fragment(&mut self, fragment: &str) -> Page {
        let target = parse_fragment(fragment).unwrap_or_else(|| self.home());
        let page = self.gate(target);
        self.router.set(page.clone());
        page
    }

    pub fn navigate(&mut self, target: Page) -> Page {
        let page = self.gate(target);
        self.router.set(page.clone());
        page
    }

    /// Re-apply auth redirects once the provider has settled: signed-out
    /// users leave private pages, signed-in users leave auth pages.
    pub fn sync_auth(&mut self) -> Page {
        let session = self.auth.session();
        if session.is_loading {
            return self.current();
        }
        let current = self.current();
        if !session.is_authenticated() && !current.is_public() {
            self.router.set(Page::Login);
        } else if session.is_authenticated() && current.is_public() {
            self.router.set(Page::Dashboard);
        }
        self.current()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let user = self.auth.login(email, password)?;
        self.navigate(Page::Dashboard);
        Ok(user)
    }

    pub fn register(&mut self, request: RegisterRequest) -> Result<User> {
        let user = self.auth.register(request)?;
        self.navigate(Page::Dashboard);
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.auth.logout()?;
        self.navigate(Page::Login);
        Ok(())
    }

    /// Handle a step page's "advance" signal.
    pub fn advance_from(&mut self, step: StepId) -> Page {
        let target = Page::Step(step)
            .advance_target()
            .unwrap_or(Page::Dashboard);
        self.navigate(target)
    }

    pub fn view(&self) -> View {
        let session = self.auth.session();
        if session.is_loading {
            return View::Loading;
        }
        let page = self.current();
        if !session.is_authenticated() && !page.is_public() {
            return View::Login;
        }
        view_for(&page)
    }
}

pub fn view_for(page: &Page) -> View {
    match page {
        Page::Login => View::Login,
        Page::Register => View::Register,
        Page::ForgotPassword => View::ForgotPassword,
        Page::Dashboard => View::Dashboard,
        Page::Documents => View::Documents,
        Page::DocumentDetail(number) => View::DocumentDetail { number: *number },
        Page::Collaboration => View::Collaboration,
        Page::Analytics => View::Analytics,
        Page::Profile => View::Profile,
        Page::Settings => View::Settings,
        Page::Step(StepId::ContextoProblema) => View::Step1Form,
        Page::Step(step) => View::Step { step: *step },
        Page::Unknown(_) => View::Empty,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
