use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Menu category. Ordinals are 1-based in the order listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Starters,
    Main,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starters, Course::Main, Course::Dessert];

    /// Exact, case-sensitive match on the course name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Starters" => Some(Course::Starters),
            "Main" => Some(Course::Main),
            "Dessert" => Some(Course::Dessert),
            _ => None,
        }
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            1 => Some(Course::Starters),
            2 => Some(Course::Main),
            3 => Some(Course::Dessert),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }

    pub fn ordinal(self) -> i64 {
        self.index() as i64 + 1
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Course::Starters => 0,
            Course::Main => 1,
            Course::Dessert => 2,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the name (`Main`) or the ordinal (`2`).
impl FromStr for Course {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseField::parse(s).course().ok_or_else(|| {
            format!(
                "unknown course '{}', expected Starters, Main, Dessert or 1-3",
                s.trim()
            )
        })
    }
}

/// The course value as the host supplied it.
///
/// Hosts may hand over either the course name or its 1-based ordinal, and
/// nothing stops them from handing over something that is neither. The raw
/// value is kept so it can be shown back unchanged; [`CourseField::course`]
/// is the only place that decides which [`Course`] it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseField {
    Ordinal(i64),
    Name(String),
}

impl CourseField {
    /// Reads free text: integers become ordinals, anything else a name.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(ordinal) => CourseField::Ordinal(ordinal),
            Err(_) => CourseField::Name(trimmed.to_string()),
        }
    }

    pub fn course(&self) -> Option<Course> {
        match self {
            CourseField::Name(name) => Course::from_name(name),
            CourseField::Ordinal(ordinal) => Course::from_ordinal(*ordinal),
        }
    }
}

impl From<Course> for CourseField {
    fn from(course: Course) -> Self {
        CourseField::Name(course.name().to_string())
    }
}

impl From<&str> for CourseField {
    fn from(name: &str) -> Self {
        CourseField::Name(name.to_string())
    }
}

impl From<i64> for CourseField {
    fn from(ordinal: i64) -> Self {
        CourseField::Ordinal(ordinal)
    }
}

impl From<i32> for CourseField {
    fn from(ordinal: i32) -> Self {
        CourseField::Ordinal(i64::from(ordinal))
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseField::Name(name) => f.write_str(name),
            CourseField::Ordinal(ordinal) => write!(f, "{}", ordinal),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Kept as entered; parsed only when aggregating.
    pub price: String,
    pub course: CourseField,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        course: impl Into<CourseField>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            course: course.into(),
        }
    }

    pub fn course(&self) -> Option<Course> {
        self.course.course()
    }
}

/// Ordered menu. Display order is insertion order; duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCollection {
    items: Vec<MenuItem>,
}

impl MenuCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Removes the item at `index`. Out of range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<MenuItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }
}

impl From<Vec<MenuItem>> for MenuCollection {
    fn from(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<MenuItem> for MenuCollection {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MenuCollection {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for MenuCollection {
    type Item = MenuItem;
    type IntoIter = std::vec::IntoIter<MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Average price per course; an empty course averages to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CourseAverages {
    pub starters: f64,
    pub main: f64,
    pub dessert: f64,
}

impl CourseAverages {
    pub fn from_array(values: [f64; 3]) -> Self {
        Self {
            starters: values[0],
            main: values[1],
            dessert: values[2],
        }
    }

    pub fn get(&self, course: Course) -> f64 {
        match course {
            Course::Starters => self.starters,
            Course::Main => self.main,
            Course::Dessert => self.dessert,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.starters, self.main, self.dessert]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Course, f64)> + '_ {
        Course::ALL.into_iter().map(move |course| (course, self.get(course)))
    }
}
