use std::any::Any;

/// A value stored in [`crate::StateCtx`] and mutated by the UI.
///
/// Implementors only forward to `self`; the two methods exist so the context
/// can hold `Box<dyn State>` and still downcast to the concrete type.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
