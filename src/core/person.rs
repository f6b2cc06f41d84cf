//! The person model.

/// Someone with a name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    /// Constructs a new [`Person`].
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the person's name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }
}
