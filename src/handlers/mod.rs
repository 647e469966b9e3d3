pub mod display;
pub mod event_actor;
pub mod events;
pub mod processor;
