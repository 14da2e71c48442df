use crate::domain::model::MenuCollection;
use crate::utils::error::Result;

/// Something that can hand the controller a seed menu.
pub trait MenuSource {
    fn load(&self) -> Result<MenuCollection>;
}

/// A source backed by items already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    items: MenuCollection,
}

impl InMemorySource {
    pub fn new(items: MenuCollection) -> Self {
        Self { items }
    }
}

impl MenuSource for InMemorySource {
    fn load(&self) -> Result<MenuCollection> {
        Ok(self.items.clone())
    }
}
