pub mod collaborators;
pub mod dialog;
pub mod notifications;
pub mod page;
