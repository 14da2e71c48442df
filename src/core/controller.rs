use crate::core::aggregator::MenuAggregator;
use crate::core::{Course, CourseAverages, MenuCollection, MenuItem, MenuSource, Result};

/// Single owner of the live menu.
///
/// All mutation goes through [`append`](Self::append) and
/// [`remove_at`](Self::remove_at); readers get an immutable snapshot.
/// Averages are recomputed on every call.
#[derive(Debug, Clone, Default)]
pub struct MenuController {
    items: MenuCollection,
    aggregator: MenuAggregator,
}

impl MenuController {
    pub fn new(aggregator: MenuAggregator) -> Self {
        Self {
            items: MenuCollection::new(),
            aggregator,
        }
    }

    pub fn with_items(items: MenuCollection, aggregator: MenuAggregator) -> Self {
        tracing::debug!("Menu seeded with {} items", items.len());
        Self { items, aggregator }
    }

    pub fn from_source<S: MenuSource + ?Sized>(
        source: &S,
        aggregator: MenuAggregator,
    ) -> Result<Self> {
        let items = source.load()?;
        tracing::info!("Loaded {} menu items", items.len());
        Ok(Self::with_items(items, aggregator))
    }

    /// Appends at the end and returns the new item count.
    pub fn append(&mut self, item: MenuItem) -> usize {
        if item.course().is_none() {
            tracing::warn!(
                "'{}' has unrecognised course '{}', it will not count towards averages",
                item.name,
                item.course
            );
        }
        tracing::debug!("Adding menu item: {:?}", item);
        self.items.push(item);
        self.items.len()
    }

    /// Removes by 0-based position. Out of range leaves the menu unchanged.
    pub fn remove_at(&mut self, index: usize) -> Option<MenuItem> {
        let removed = self.items.remove_at(index);
        match &removed {
            Some(item) => tracing::debug!("Removed menu item {}: {}", index, item.name),
            None => tracing::debug!(
                "Remove ignored, index {} out of range ({} items)",
                index,
                self.items.len()
            ),
        }
        removed
    }

    pub fn snapshot(&self) -> &MenuCollection {
        &self.items
    }

    pub fn averages(&self) -> CourseAverages {
        let averages = self.aggregator.compute_averages(&self.items);
        tracing::debug!("Calculated average prices: {:?}", averages.as_array());
        averages
    }

    pub fn filter(&self, course: Course) -> MenuCollection {
        let filtered = self.aggregator.filter_by_course(&self.items, course);
        tracing::debug!("Filter {} matched {} items", course, filtered.len());
        filtered
    }

    pub fn into_items(self) -> MenuCollection {
        self.items
    }
}
