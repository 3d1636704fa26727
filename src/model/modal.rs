//! Modal stack for managing overlays
//!
//! A single enum-based stack instead of a boolean flag per dialog; only the
//! top modal receives input events.

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Patent selection dialog
    PatentSelector { selected_index: usize },
    /// Generation output display
    Output,
    /// Generation history list and detail view
    History {
        selected_index: usize,
        detail_scroll: usize,
    },
    /// Configured service endpoints overlay
    ServiceInfo,
    /// Help dialog showing all keyboard shortcuts
    Help { scroll_offset: usize },
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Get a mutable reference to the top modal
    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::Output);

        assert_eq!(stack.pop(), Some(Modal::Output));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_modal_stack_top() {
        let mut stack = ModalStack::new();
        stack.push(Modal::PatentSelector { selected_index: 0 });
        assert_eq!(stack.top(), Some(&Modal::PatentSelector { selected_index: 0 }));
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_modal_stack_top_mut() {
        let mut stack = ModalStack::new();
        stack.push(Modal::PatentSelector { selected_index: 0 });

        if let Some(Modal::PatentSelector { selected_index }) = stack.top_mut() {
            *selected_index = 3;
        }

        assert_eq!(stack.top(), Some(&Modal::PatentSelector { selected_index: 3 }));
    }
}
