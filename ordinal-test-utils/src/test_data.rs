// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Roster fixtures: mixed people and animals, dense or with holes.

use ordinal_core::Sequence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    #[must_use]
    pub const fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
    pub legs: u32,
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
}

impl TestData {
    #[must_use]
    pub const fn is_person(&self) -> bool {
        matches!(self, Self::Person(_))
    }

    #[must_use]
    pub const fn is_animal(&self) -> bool {
        matches!(self, Self::Animal(_))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Person(person) => &person.name,
            Self::Animal(animal) => &animal.name,
        }
    }
}

pub fn person(name: &str, age: u32) -> TestData {
    TestData::Person(Person {
        name: name.to_string(),
        age,
    })
}

fn animal(name: &str, legs: u32) -> TestData {
    TestData::Animal(Animal {
        name: name.to_string(),
        legs,
    })
}

pub fn person_alice() -> TestData {
    person("Alice", 25)
}

pub fn person_bob() -> TestData {
    person("Bob", 30)
}

pub fn person_charlie() -> TestData {
    person("Charlie", 35)
}

pub fn animal_dog() -> TestData {
    animal("Dog", 4)
}

pub fn animal_spider() -> TestData {
    animal("Spider", 8)
}

/// Alice, Dog, Bob, Spider, Charlie.
pub fn mixed_roster() -> Sequence<TestData> {
    Sequence::from(vec![
        person_alice(),
        animal_dog(),
        person_bob(),
        animal_spider(),
        person_charlie(),
    ])
}

/// Alice, hole, Dog, hole, Bob.
pub fn sparse_roster() -> Sequence<TestData> {
    Sequence::from_slots(vec![
        Some(person_alice()),
        None,
        Some(animal_dog()),
        None,
        Some(person_bob()),
    ])
}
