use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Agent,
    SecretWord,
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => return Config::get(ConfigKey::Username),
            Author::Agent => return String::from("Agent"),
            Author::SecretWord => return String::from("Secret Word"),
        }
    }
}
