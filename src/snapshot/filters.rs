use std::{borrow::Cow, collections::HashMap};

use indexmap::IndexMap;

use crate::model::{filter::SvgFilterDefinition, value::AnimValue};

type AttrOverlay = IndexMap<String, AnimValue>;

/// Attribute overrides keyed by filter id, then primitive id.
#[derive(Clone, Debug, Default)]
pub(crate) struct FilterOverlays {
    by_filter: HashMap<String, HashMap<String, AttrOverlay>>,
}

impl FilterOverlays {
    pub(crate) fn is_empty(&self) -> bool {
        self.by_filter.is_empty()
    }

    /// Record one attribute value; a later write to the same attribute wins.
    pub(crate) fn record(&mut self, filter_id: &str, primitive_id: &str, attr: &str, value: AnimValue) {
        self.by_filter
            .entry(filter_id.to_owned())
            .or_default()
            .entry(primitive_id.to_owned())
            .or_default()
            .insert(attr.to_owned(), value);
    }

    /// Overlay recorded attributes onto `defs`.
    ///
    /// Filters without any overlaid primitive come back borrowed.
    pub(crate) fn apply<'a>(&self, defs: &'a [SvgFilterDefinition]) -> Vec<Cow<'a, SvgFilterDefinition>> {
        defs.iter().map(|def| self.apply_one(def)).collect()
    }

    fn apply_one<'a>(&self, def: &'a SvgFilterDefinition) -> Cow<'a, SvgFilterDefinition> {
        let Some(prims) = self.by_filter.get(&def.id) else {
            return Cow::Borrowed(def);
        };
        if !def.primitives.iter().any(|p| prims.contains_key(&p.id)) {
            return Cow::Borrowed(def);
        }

        let mut owned = def.clone();
        for prim in &mut owned.primitives {
            let Some(overlay) = prims.get(&prim.id) else {
                continue;
            };
            let attrs = prim.attrs.get_or_insert_with(IndexMap::new);
            for (name, value) in overlay {
                attrs.insert(name.clone(), value.clone());
            }
        }
        Cow::Owned(owned)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/snapshot/filters.rs"]
mod tests;
