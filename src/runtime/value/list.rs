use std::{fmt::Display, rc::Rc};

use rustc_hash::FxHashMap;

/// A single named flag belonging to a list.
///
/// Items are identified by their own name together with the name of the
/// definition ("origin") that declared them, so that equally-named items
/// from different lists stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListItem {
    origin: Option<String>,
    name:   String,
}

impl ListItem {
    /// Creates an item tagged with the definition that declared it.
    #[must_use]
    pub fn new(origin: impl Into<String>, name: impl Into<String>) -> Self {
        Self { origin: Some(origin.into()),
               name:   name.into(), }
    }

    /// Creates an item with no known origin.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self { origin: None,
               name:   name.into(), }
    }

    /// The item's own name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the definition the item came from, when known.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// The item's fully qualified `origin.name` spelling, with `?` standing
    /// in for an unknown origin.
    ///
    /// ## Example
    /// ```
    /// use quill::runtime::value::list::ListItem;
    ///
    /// assert_eq!(ListItem::new("moods", "calm").full_name(), "moods.calm");
    /// assert_eq!(ListItem::bare("calm").full_name(), "?.calm");
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.origin.as_deref().unwrap_or("?"), self.name)
    }
}

impl Display for ListItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The full universe of items a named list declares, with their ordinals.
///
/// Definitions are owned by the story (registered with the variable store)
/// and shared by reference into every [`ListValue`] derived from them; they
/// are what makes complement operations (`all`, inversion) possible.
#[derive(Debug, Clone, PartialEq)]
pub struct ListDefinition {
    name:  String,
    items: FxHashMap<String, i32>,
}

impl ListDefinition {
    /// Creates a definition from item names and their ordinals.
    ///
    /// ## Example
    /// ```
    /// use quill::runtime::value::list::ListDefinition;
    ///
    /// let moods = ListDefinition::new("moods", [("calm", 1), ("wary", 2), ("angry", 3)]);
    ///
    /// assert_eq!(moods.ordinal_of("wary"), Some(2));
    /// assert_eq!(moods.ordinal_of("bored"), None);
    /// ```
    pub fn new<N, I>(name: impl Into<String>, items: I) -> Self
        where N: Into<String>,
              I: IntoIterator<Item = (N, i32)>
    {
        Self { name:  name.into(),
               items: items.into_iter()
                           .map(|(item, ordinal)| (item.into(), ordinal))
                           .collect(), }
    }

    /// The definition's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordinal of one of this definition's items, if it declares it.
    #[must_use]
    pub fn ordinal_of(&self, item_name: &str) -> Option<i32> {
        self.items.get(item_name).copied()
    }

    /// Iterates over the declared item names and their ordinals.
    pub fn items(&self) -> impl Iterator<Item = (&str, i32)> {
        self.items.iter().map(|(name, &ordinal)| (name.as_str(), ordinal))
    }
}

/// The runtime representation of a multi-valued list: a set of origin-tagged
/// items, each with an integer ordinal.
///
/// Lists support set algebra (union, difference, intersection), containment,
/// ordinal-range orderings, min/max selection, complement within the origin
/// definitions, cardinality, and inversion. Every operation is pure: it
/// returns a new `ListValue` and never mutates its inputs, so evaluation can
/// freely derive lists from shared story state.
#[derive(Debug, Clone, Default)]
pub struct ListValue {
    items:   FxHashMap<ListItem, i32>,
    origins: Vec<Rc<ListDefinition>>,
}

impl ListValue {
    /// Creates an empty list with no origins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a singleton list holding one item, optionally tagged with the
    /// definition it came from.
    #[must_use]
    pub fn from_item(item: ListItem, ordinal: i32, origin: Option<Rc<ListDefinition>>) -> Self {
        let mut list = Self::new();
        list.items.insert(item, ordinal);
        if let Some(definition) = origin {
            list.origins.push(definition);
        }
        list
    }

    /// Adds an item with its ordinal.
    pub fn insert(&mut self, item: ListItem, ordinal: i32) {
        self.items.insert(item, ordinal);
    }

    /// Attaches an origin definition, ignoring duplicates by name.
    pub fn add_origin(&mut self, definition: Rc<ListDefinition>) {
        if self.origins.iter().all(|known| known.name() != definition.name()) {
            self.origins.push(definition);
        }
    }

    /// Number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the list holds this exact item.
    #[must_use]
    pub fn contains_item(&self, item: &ListItem) -> bool {
        self.items.contains_key(item)
    }

    /// Iterates over the items and their ordinals, in no particular order.
    pub fn items(&self) -> impl Iterator<Item = (&ListItem, i32)> {
        self.items.iter().map(|(item, &ordinal)| (item, ordinal))
    }

    /// The item with the smallest ordinal, or `None` for an empty list.
    ///
    /// Ordinal ties resolve to the lexicographically smaller item name so
    /// the result does not depend on map iteration order.
    #[must_use]
    pub fn min_item(&self) -> Option<(&ListItem, i32)> {
        let mut best: Option<(&ListItem, i32)> = None;
        for (item, &ordinal) in &self.items {
            let replace = match best {
                None => true,
                Some((best_item, best_ordinal)) => {
                    ordinal < best_ordinal
                    || (ordinal == best_ordinal && item.name() < best_item.name())
                },
            };
            if replace {
                best = Some((item, ordinal));
            }
        }
        best
    }

    /// The item with the largest ordinal, or `None` for an empty list.
    ///
    /// Ordinal ties resolve to the lexicographically smaller item name so
    /// the result does not depend on map iteration order.
    #[must_use]
    pub fn max_item(&self) -> Option<(&ListItem, i32)> {
        let mut best: Option<(&ListItem, i32)> = None;
        for (item, &ordinal) in &self.items {
            let replace = match best {
                None => true,
                Some((best_item, best_ordinal)) => {
                    ordinal > best_ordinal
                    || (ordinal == best_ordinal && item.name() < best_item.name())
                },
            };
            if replace {
                best = Some((item, ordinal));
            }
        }
        best
    }

    /// The ordinal of the largest item, or `0` for an empty list.
    #[must_use]
    pub fn max_ordinal(&self) -> i32 {
        self.max_item().map_or(0, |(_, ordinal)| ordinal)
    }

    /// The smallest item as a singleton list, or an empty list.
    #[must_use]
    pub fn min_as_list(&self) -> Self {
        self.min_item().map_or_else(Self::new, |(item, ordinal)| {
                           let mut list = Self { items:   FxHashMap::default(),
                                                 origins: self.origins.clone(), };
                           list.items.insert(item.clone(), ordinal);
                           list
                       })
    }

    /// The largest item as a singleton list, or an empty list.
    #[must_use]
    pub fn max_as_list(&self) -> Self {
        self.max_item().map_or_else(Self::new, |(item, ordinal)| {
                           let mut list = Self { items:   FxHashMap::default(),
                                                 origins: self.origins.clone(), };
                           list.items.insert(item.clone(), ordinal);
                           list
                       })
    }

    /// The union of two lists. Origins of both operands carry over.
    ///
    /// ## Example
    /// ```
    /// use quill::runtime::value::list::{ListItem, ListValue};
    ///
    /// let mut left = ListValue::new();
    /// left.insert(ListItem::new("moods", "calm"), 1);
    ///
    /// let mut right = ListValue::new();
    /// right.insert(ListItem::new("moods", "wary"), 2);
    ///
    /// let both = left.union(&right);
    ///
    /// assert_eq!(both.len(), 2);
    /// assert_eq!(both, right.union(&left));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (item, &ordinal) in &other.items {
            result.items.insert(item.clone(), ordinal);
        }
        for definition in &other.origins {
            result.add_origin(definition.clone());
        }
        result
    }

    /// The difference of two lists: `self` with every item of `other`
    /// removed.
    #[must_use]
    pub fn without(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for item in other.items.keys() {
            result.items.remove(item);
        }
        result
    }

    /// The intersection of two lists: the items present in both.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.items.retain(|item, _| other.items.contains_key(item));
        result
    }

    /// Returns `true` if every item of `other` is in `self`.
    ///
    /// An empty list neither contains nor is contained by anything.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.items.keys().all(|item| self.items.contains_key(item))
    }

    /// Returns `true` if every item of `self` sits above every item of
    /// `other`: min(self) > max(other).
    ///
    /// A non-empty list is greater than an empty one; an empty list is
    /// greater than nothing.
    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        let Some((own_min, _)) = self.ordinal_range() else {
            return false;
        };
        let Some((_, other_max)) = other.ordinal_range() else {
            return true;
        };
        own_min > other_max
    }

    /// The inclusive variant of [`greater_than`](Self::greater_than): both
    /// ends of `self`'s ordinal range are at or above `other`'s.
    #[must_use]
    pub fn greater_than_or_equals(&self, other: &Self) -> bool {
        let Some((own_min, own_max)) = self.ordinal_range() else {
            return false;
        };
        let Some((other_min, other_max)) = other.ordinal_range() else {
            return true;
        };
        own_min >= other_min && own_max >= other_max
    }

    /// Returns `true` if every item of `self` sits below every item of
    /// `other`: max(self) < min(other).
    ///
    /// An empty list is less than any non-empty one; nothing is less than an
    /// empty list.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        let Some((other_min, _)) = other.ordinal_range() else {
            return false;
        };
        let Some((_, own_max)) = self.ordinal_range() else {
            return true;
        };
        own_max < other_min
    }

    /// The inclusive variant of [`less_than`](Self::less_than): both ends of
    /// `self`'s ordinal range are at or below `other`'s.
    #[must_use]
    pub fn less_than_or_equals(&self, other: &Self) -> bool {
        let Some((other_min, other_max)) = other.ordinal_range() else {
            return false;
        };
        let Some((own_min, own_max)) = self.ordinal_range() else {
            return true;
        };
        own_min <= other_min && own_max <= other_max
    }

    /// Every item declared by the list's origin definitions.
    #[must_use]
    pub fn all(&self) -> Self {
        let mut result = Self { items:   FxHashMap::default(),
                                origins: self.origins.clone(), };
        for definition in &self.origins {
            for (name, ordinal) in definition.items() {
                result.items.insert(ListItem::new(definition.name(), name), ordinal);
            }
        }
        result
    }

    /// The complement of the list within its origin definitions: every
    /// declared item that is not in `self`.
    ///
    /// ## Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use quill::runtime::value::list::{ListDefinition, ListItem, ListValue};
    ///
    /// let moods = Rc::new(ListDefinition::new("moods", [("calm", 1), ("wary", 2)]));
    /// let calm = ListValue::from_item(ListItem::new("moods", "calm"), 1, Some(moods));
    ///
    /// let rest = calm.inverse();
    ///
    /// assert_eq!(rest.len(), 1);
    /// assert!(rest.contains_item(&ListItem::new("moods", "wary")));
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut result = self.all();
        for item in self.items.keys() {
            result.items.remove(item);
        }
        result
    }

    fn ordinal_range(&self) -> Option<(i32, i32)> {
        Some((self.min_item()?.1, self.max_item()?.1))
    }
}

impl PartialEq for ListValue {
    /// Two lists are equal when they hold exactly the same items. Ordinals
    /// follow from item identity and origins are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
        && self.items.keys().all(|item| other.items.contains_key(item))
    }
}

impl Display for ListValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<(&ListItem, i32)> =
            self.items.iter().map(|(item, &ordinal)| (item, ordinal)).collect();
        entries.sort_by(|(a, a_ordinal), (b, b_ordinal)| {
                   a_ordinal.cmp(b_ordinal).then_with(|| a.name().cmp(b.name()))
               });

        for (index, (item, _)) in entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
