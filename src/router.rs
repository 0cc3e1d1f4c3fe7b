/// A screen that must stop applying results once it leaves the stack.
pub trait Teardown {
    fn teardown(&mut self);
}

/// Navigation stack. The root screen can be replaced, but never popped.
pub struct Router<T> {
    root: T,
    stack: Vec<T>,
}

impl<T: Teardown> Router<T> {
    pub fn new(root: T) -> Self {
        Self {
            root,
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &T {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn current_mut(&mut self) -> &mut T {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    pub fn screens_mut(&mut self) -> impl Iterator<Item = &mut T> {
        std::iter::once(&mut self.root).chain(self.stack.iter_mut())
    }

    pub fn navigate(&mut self, screen: T) {
        self.stack.push(screen);
    }

    pub fn replace(&mut self, screen: T) {
        match self.stack.last_mut() {
            Some(current) => {
                current.teardown();
                *current = screen;
            }
            None => {
                self.root.teardown();
                self.root = screen;
            }
        }
    }

    /// Returns `false` when already at the root.
    pub fn back(&mut self) -> bool {
        let Some(mut screen) = self.stack.pop() else {
            return false;
        };

        screen.teardown();

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    struct Probe {
        name: &'static str,
        log: Log,
    }

    impl Probe {
        fn new(name: &'static str, log: &Log) -> Self {
            Self {
                name,
                log: log.clone(),
            }
        }
    }

    impl Teardown for Probe {
        fn teardown(&mut self) {
            self.log.borrow_mut().push(self.name);
        }
    }

    #[test]
    fn navigate_pushes_without_teardown() {
        let log = Log::default();
        let mut router = Router::new(Probe::new("home", &log));

        router.navigate(Probe::new("detail", &log));

        assert_eq!(router.current().name, "detail");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn replace_tears_down_current_screen() {
        let log = Log::default();
        let mut router = Router::new(Probe::new("home", &log));

        router.navigate(Probe::new("search", &log));
        router.replace(Probe::new("detail", &log));

        assert_eq!(router.current().name, "detail");
        assert_eq!(*log.borrow(), ["search"]);

        assert!(router.back());
        assert_eq!(router.current().name, "home");
        assert_eq!(*log.borrow(), ["search", "detail"]);
    }

    #[test]
    fn root_is_never_popped() {
        let log = Log::default();
        let mut router = Router::new(Probe::new("home", &log));

        assert!(!router.back());
        assert_eq!(router.current().name, "home");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn root_can_be_replaced() {
        let log = Log::default();
        let mut router = Router::new(Probe::new("home", &log));

        router.replace(Probe::new("other", &log));

        assert_eq!(router.current().name, "other");
        assert_eq!(*log.borrow(), ["home"]);
    }

    #[test]
    fn screens_are_visited_from_the_root() {
        let log = Log::default();
        let mut router = Router::new(Probe::new("home", &log));

        router.navigate(Probe::new("detail", &log));

        let names: Vec<_> = router.screens_mut().map(|screen| screen.name).collect();
        assert_eq!(names, ["home", "detail"]);

        router.current_mut().name = "renamed";
        assert_eq!(router.current().name, "renamed");
    }
}
