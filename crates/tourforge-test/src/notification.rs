//! Director wrapper that logs list range notifications.

use tourforge_core::domain::{ElementPosition, ListVariableSolution};
use tourforge_scoring::ScoreDirector;

/// A single range notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Before {
        entity: usize,
        from: usize,
        to: usize,
    },
    After {
        entity: usize,
        from: usize,
        to: usize,
    },
}

/// Forwards to an inner director and records every range notification.
pub struct NotificationLog<'a, S: ListVariableSolution> {
    inner: &'a mut dyn ScoreDirector<S>,
    log: Vec<Notification>,
}

impl<'a, S: ListVariableSolution> NotificationLog<'a, S> {
    pub fn new(inner: &'a mut dyn ScoreDirector<S>) -> Self {
        Self {
            inner,
            log: Vec::new(),
        }
    }

    /// Returns the notifications received so far.
    pub fn notifications(&self) -> &[Notification] {
        &self.log
    }

    /// Returns the `Before` notifications as `(entity, from, to)`.
    pub fn befores(&self) -> Vec<(usize, usize, usize)> {
        self.log
            .iter()
            .filter_map(|n| match *n {
                Notification::Before { entity, from, to } => Some((entity, from, to)),
                Notification::After { .. } => None,
            })
            .collect()
    }

    /// Returns the `After` notifications as `(entity, from, to)`.
    pub fn afters(&self) -> Vec<(usize, usize, usize)> {
        self.log
            .iter()
            .filter_map(|n| match *n {
                Notification::After { entity, from, to } => Some((entity, from, to)),
                Notification::Before { .. } => None,
            })
            .collect()
    }

    /// Clears the log.
    pub fn clear(&mut self) {
        self.log.clear();
    }
}

impl<S: ListVariableSolution> ScoreDirector<S> for NotificationLog<'_, S> {
    fn working_solution(&self) -> &S {
        self.inner.working_solution()
    }

    fn working_solution_mut(&mut self) -> &mut S {
        self.inner.working_solution_mut()
    }

    fn calculate_score(&mut self) -> S::Score {
        self.inner.calculate_score()
    }

    fn before_list_range_changed(&mut self, entity: usize, from: usize, to: usize) {
        self.log.push(Notification::Before { entity, from, to });
        self.inner.before_list_range_changed(entity, from, to);
    }

    fn after_list_range_changed(&mut self, entity: usize, from: usize, to: usize) {
        self.log.push(Notification::After { entity, from, to });
        self.inner.after_list_range_changed(entity, from, to);
    }

    fn element_position(&self, element: &S::Element) -> Option<ElementPosition> {
        self.inner.element_position(element)
    }

    fn lookup_working_element(&self, element: S::Element) -> Option<S::Element> {
        self.inner.lookup_working_element(element)
    }

    fn register_undo(&mut self, undo: Box<dyn FnOnce(&mut S) + Send>) {
        self.inner.register_undo(undo);
    }
}
