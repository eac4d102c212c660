use crate::types::Page;
use tokio::sync::watch;

/// Parse a URL fragment (`"#page"` or `"page"`). `None` when empty.
pub fn parse_fragment(fragment: &str) -> Option<Page> {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    if id.is_empty() {
        None
    } else {
        Some(Page::parse(id))
    }
}

/// Owns the current route and notifies subscribers when it changes.
#[derive(Debug)]
pub struct Router {
    tx: watch::Sender<Page>,
}

impl Router {
    pub fn new(initial: Page) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    pub fn current(&self) -> Page {
        self.tx.borrow().clone()
    }

    /// The fragment for the current page, e.g. `"#dashboard"`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.tx.borrow().as_str())
    }

    pub fn subscribe(&self) -> watch::Receiver<Page> {
        self.tx.subscribe()
    }

    /// Move to `page`. Subscribers are notified only if the page changed.
    pub fn set(&self, page: Page) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == page {
                false
            } else {
                *current = page;
                true
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StepId;

    #[test]
    fn parse_fragment_variants() {
        assert_eq!(parse_fragment("#dashboard"), Some(Page::Dashboard));
        assert_eq!(parse_fragment("personas"), Some(Page::Step(StepId::Personas)));
        assert_eq!(parse_fragment("#"), None);
        assert_eq!(parse_fragment(""), None);
    }

    #[test]
    fn fragment_renders_current_page() {
        let router = Router::new(Page::Step(StepId::SwotCsd));
        assert_eq!(router.fragment(), "#swot-csd");
    }

    #[test]
    fn subscribers_see_changes_only() {
        let router = Router::new(Page::Login);
        let mut rx = router.subscribe();

        assert!(!router.set(Page::Login));
        assert!(!rx.has_changed().unwrap());

        assert!(router.set(Page::Dashboard));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Page::Dashboard);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn set_without_subscribers_still_updates() {
        let router = Router::new(Page::Login);
        router.set(Page::Register);
        assert_eq!(router.current(), Page::Register);
    }
}
