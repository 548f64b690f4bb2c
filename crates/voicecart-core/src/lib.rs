pub mod catalog;
pub mod command;
pub mod error;
pub mod generator;
pub mod intent;
pub mod recipe;
pub mod test_utils;

pub use catalog::{Catalog, Product, SearchCriteria};
pub use command::Command;
pub use error::{Error, GenerationError};
pub use generator::{ContentGenerator, SchemaDescriptor};
pub use intent::IntentParser;
pub use recipe::{Recipe, RecipeAdvisor};
