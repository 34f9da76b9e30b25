//! Player choices: records, parsing, validation, bot generation.

pub mod record;
pub mod parse;
pub mod validator;
pub mod bot;

pub use record::{Choice, ChoiceIds, ChoiceKey};
pub use parse::parse_choice;
pub use validator::ChoiceValidator;
pub use bot::{random_attack_choice, random_security_choice};
