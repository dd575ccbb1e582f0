mod lists;
mod people;

pub use lists::List;
pub use people::Person;
