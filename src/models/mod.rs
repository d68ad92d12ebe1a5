mod person;

pub use person::{NameId, PersonRecord};
