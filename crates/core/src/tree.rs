use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::slot::Slot;

/// One composed render: exactly one fragment per [`Slot`], always in [`Slot::ORDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionTree<F> {
    navigation: F,
    main_content: F,
    logging: F,
}

impl<F> CompositionTree<F> {
    pub(crate) fn new(navigation: F, main_content: F, logging: F) -> Self {
        Self {
            navigation,
            main_content,
            logging,
        }
    }

    pub fn get(&self, slot: Slot) -> &F {
        match slot {
            Slot::Navigation => &self.navigation,
            Slot::MainContent => &self.main_content,
            Slot::Logging => &self.logging,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &F)> + '_ {
        Slot::ORDER.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    pub fn fragments(&self) -> [&F; 3] {
        [&self.navigation, &self.main_content, &self.logging]
    }

    pub fn into_fragments(self) -> [F; 3] {
        [self.navigation, self.main_content, self.logging]
    }

    /// Transform every fragment while keeping the tree shape.
    pub fn map<G>(self, mut f: impl FnMut(Slot, F) -> G) -> CompositionTree<G> {
        CompositionTree {
            navigation: f(Slot::Navigation, self.navigation),
            main_content: f(Slot::MainContent, self.main_content),
            logging: f(Slot::Logging, self.logging),
        }
    }
}

impl<F> IntoIterator for CompositionTree<F> {
    type Item = (Slot, F);
    type IntoIter = std::iter::Zip<std::array::IntoIter<Slot, 3>, std::array::IntoIter<F, 3>>;

    fn into_iter(self) -> Self::IntoIter {
        Slot::ORDER.into_iter().zip(self.into_fragments())
    }
}

impl<F: Serialize> Serialize for CompositionTree<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(Slot::ORDER.len()))?;
        for (slot, fragment) in self.iter() {
            seq.serialize_element(&SlotEntry { slot, fragment })?;
        }
        seq.end()
    }
}

#[derive(serde::Serialize)]
struct SlotEntry<'a, F> {
    slot: Slot,
    fragment: &'a F,
}
