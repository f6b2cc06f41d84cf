//! A service for greeting someone.

use crate::core::person::Person;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;
use utoipa::ToSchema;

/// A greeting for someone.
///
/// Renders as the JSON document `{"content":"<name>"}`, both through
/// [`fmt::Display`] and through serde.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    /// The name of the person being greeted.
    #[schema(example = "World")]
    content: String,
}

impl Greeting {
    /// Constructs a new [`Greeting`].
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// Returns the greeting content.
    pub fn content(&self) -> &str {
        self.content.as_ref()
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `Value` escapes quotes, backslashes and control characters.
        fmt::Display::fmt(&serde_json::json!({ "content": self.content }), f)
    }
}

/// Greets people.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GreetingService;

impl GreetingService {
    /// Constructs a new [`GreetingService`].
    pub fn new() -> Self {
        Self
    }

    /// Returns a greeting for a person.
    #[instrument(ret)]
    pub fn greet(&self, person: Person) -> Greeting {
        Greeting::new(person.name().to_string())
    }

    /// Returns a greeting based on someone's name, rendered as JSON.
    #[instrument(ret)]
    pub fn get_hello(&self, name: &str) -> String {
        self.greet(Person::new(name)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Greeting, GreetingService};
    use crate::core::person::Person;

    #[test]
    fn hello_world() {
        let service = GreetingService::new();
        assert_eq!(r#"{"content":"World"}"#, service.get_hello("World"));
    }

    #[test]
    fn hello_empty_name() {
        let service = GreetingService::new();
        assert_eq!(r#"{"content":""}"#, service.get_hello(""));
    }

    #[test]
    fn hello_is_deterministic() {
        let service = GreetingService::new();
        for name in ["World", "", "Ola Nordmann", "åæø 🦀"] {
            assert_eq!(service.get_hello(name), service.get_hello(name));
        }
    }

    #[test]
    fn hello_contains_name_unchanged() {
        let service = GreetingService::new();
        for name in ["World", "Ola Nordmann", "åæø 🦀", "a/b?c=d&e"] {
            assert!(service.get_hello(name).contains(name));
        }
    }

    #[test]
    fn hello_with_quote_is_valid_json() {
        let service = GreetingService::new();
        let hello = service.get_hello(r#"na"me"#);
        assert_eq!(r#"{"content":"na\"me"}"#, hello);
        let greeting: Greeting = serde_json::from_str(&hello).unwrap();
        assert_eq!(r#"na"me"#, greeting.content());
    }

    #[test]
    fn hello_with_backslash_and_newline_is_valid_json() {
        let service = GreetingService::new();
        let name = "back\\slash\nnew line";
        let greeting: Greeting = serde_json::from_str(&service.get_hello(name)).unwrap();
        assert_eq!(name, greeting.content());
    }

    #[test]
    fn display_matches_serde() {
        let greeting = GreetingService::new().greet(Person::new("There"));
        assert_eq!(serde_json::to_string(&greeting).unwrap(), greeting.to_string());
    }
}
