//! Person entity - a mutable name/age pair with spoken output

use std::io;

use serde::{Deserialize, Serialize};

/// A person with a name and an age.
///
/// Fields are deliberately unvalidated: empty names and negative ages are
/// accepted verbatim. Default construction uses the sentinels `""` and `-1`
/// to mean "not yet set"; no operation treats them specially afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    /// Species shared by every person.
    ///
    /// Process-wide and read-only; instances cannot override it.
    pub const SPECIES: &'static str = "Human";

    /// Create a person with the given name and age, stored verbatim.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Current name (immutable view).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name unconditionally.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Current age.
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Replace the age unconditionally, negative values included.
    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    /// The shared species, reachable through an instance.
    pub fn species(&self) -> &'static str {
        Self::SPECIES
    }

    /// Print `<name> says: <saying>` on its own line to stdout.
    ///
    /// Each call writes again; nothing else changes.
    pub fn speak(&self, saying: &str) {
        println!("{}", self.spoken_line(saying));
    }

    /// Write the spoken line to an arbitrary writer.
    ///
    /// Same output as [`speak`](Self::speak); callers that need to capture
    /// the line (tests, transcripts) pass a `Vec<u8>` or any other writer.
    pub fn speak_to<W: io::Write>(&self, out: &mut W, saying: &str) -> io::Result<()> {
        writeln!(out, "{}", self.spoken_line(saying))
    }

    /// The age this person will have next year. Does not mutate `age`.
    ///
    /// Arithmetic wraps at `i32::MAX` (two's complement), matching the
    /// fixed-width signed storage of the age itself.
    pub fn age_next_year(&self) -> i32 {
        self.age.wrapping_add(1)
    }

    fn spoken_line(&self, saying: &str) -> String {
        format!("{} says: {}", self.name, saying)
    }
}

impl Default for Person {
    /// Sentinel-valued person: `name = ""`, `age = -1`.
    fn default() -> Self {
        Self {
            name: String::new(),
            age: -1,
        }
    }
}
