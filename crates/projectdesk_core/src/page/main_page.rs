//! Page shell that binds an externally constructed page model.

/// Lifecycle events a page forwards to its bound model.
pub trait PageLifecycle {
    fn on_appearing(&mut self);
}

/// Page whose binding context is supplied by the composition root.
pub struct MainPage<M> {
    binding_context: M,
}

impl<M> MainPage<M> {
    pub fn new(model: M) -> Self {
        Self {
            binding_context: model,
        }
    }

    pub fn binding_context(&self) -> &M {
        &self.binding_context
    }
}

impl<M: PageLifecycle> MainPage<M> {
    /// Forwards the host's appearing event to the bound model.
    pub fn appearing(&mut self) {
        self.binding_context.on_appearing();
    }
}
