use serde::{Deserialize, Serialize};
use std::iter::Iterator;

/// A game entity, as a list of key/value pairs in file order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity {
    attributes: Vec<(String, String)>,
}

impl Entity {
    pub fn new() -> Entity {
        Entity::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key` to `value`. A key that's already present keeps its position.
    pub fn insert(&mut self, key: String, value: String) {
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn classname(&self) -> Option<&str> {
        self.get("classname")
    }
}

pub trait HasEntities {
    type EntitiesIter<'a>: Iterator<Item = &'a Entity>
    where
        Self: 'a;

    fn entities_iter(&self) -> Self::EntitiesIter<'_>;
}

#[test]
fn insert_replaces_in_place() {
    let mut ent = Entity::new();
    ent.insert("classname".to_string(), "light".to_string());
    ent.insert("origin".to_string(), "0 0 0".to_string());
    ent.insert("classname".to_string(), "light_torch_small_walltorch".to_string());

    let pairs: Vec<_> = ent.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("classname", "light_torch_small_walltorch"),
            ("origin", "0 0 0")
        ]
    );
}
