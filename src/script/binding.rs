use std::collections::HashMap;

/// Modifier flags qualifying a hotkey.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        shift: false,
        ctrl: false,
    };

    pub fn any(&self) -> bool {
        self.alt || self.shift || self.ctrl
    }

    /// Short code in fixed C, S, A order, e.g. `"CA"` for Ctrl+Alt.
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(3);
        if self.ctrl {
            code.push('C');
        }
        if self.shift {
            code.push('S');
        }
        if self.alt {
            code.push('A');
        }
        code
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Lowercase key name as written left of `::`, modifiers removed.
    pub key: String,
    pub modifiers: Modifiers,
    pub description: String,
}

impl Binding {
    pub fn new(key: &str, modifiers: Modifiers, description: &str) -> Self {
        Self {
            key: key.to_lowercase(),
            modifiers,
            description: description.to_string(),
        }
    }
}

/// Normalized key name to its bindings, in file order.
///
/// Keys iterate in order of first appearance. A key is present only once it
/// has at least one binding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindingMap {
    order: Vec<String>,
    entries: HashMap<String, Vec<Binding>>,
}

impl BindingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, binding: Binding) {
        match self.entries.get_mut(&binding.key) {
            Some(list) => list.push(binding),
            None => {
                self.order.push(binding.key.clone());
                self.entries.insert(binding.key.clone(), vec![binding]);
            }
        }
    }

    /// Lookup by key name; the name is lowercased before lookup.
    pub fn get(&self, key: &str) -> Option<&[Binding]> {
        self.entries.get(&key.to_lowercase()).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Binding])> {
        self.order
            .iter()
            .filter_map(|k| self.entries.get(k).map(|v| (k.as_str(), v.as_slice())))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn binding_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
