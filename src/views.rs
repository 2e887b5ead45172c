mod compare;
mod home;

pub use compare::Compare;
pub use home::Home;
