pub mod console;
pub mod events;
pub mod label;
pub mod mediator;
pub mod presenter;

#[cfg(test)]
pub(crate) mod testing;

pub use console::ConsolePresenter;
pub use events::EventHub;
pub use label::{FadeSteps, LabelTask};
pub use mediator::InteractionMediator;
pub use presenter::{HitTest, PresentationDriver};
