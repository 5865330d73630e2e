
use super::error::StackError;

/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop().ok_or(StackError::NotEnoughElements { expected: 1, actual: 0 })
  }

  /// Pops the top element only if it satisfies `predicate`.
  pub fn pop_if<F>(&mut self, predicate: F) -> Option<T>
  where F: FnOnce(&T) -> bool {
    if predicate(self.peek()?) {
      self.elements.pop()
    } else {
      None
    }
  }

  /// The top of the stack, if any.
  pub fn peek(&self) -> Option<&T> {
    self.elements.last()
  }

  /// Pops every element, top of the stack first.
  pub fn drain_top_down(&mut self) -> impl Iterator<Item = T> + '_ {
    self.elements.drain(..).rev()
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

}

impl<T> Default for Stack<T> {

  fn default() -> Self {
    Self {
      elements: Vec::with_capacity(10),
    }
  }

}
