use crate::core::price::{price_value, UnparsablePrice};
use crate::core::{Course, CourseAverages, MenuCollection};

/// Per-course averages and course filtering over a menu snapshot.
///
/// Holds nothing but the price policy, so every call is a pure function of
/// the collection it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuAggregator {
    price_policy: UnparsablePrice,
}

impl MenuAggregator {
    pub fn new(price_policy: UnparsablePrice) -> Self {
        Self { price_policy }
    }

    pub fn compute_averages(&self, items: &MenuCollection) -> CourseAverages {
        let mut sums = [0.0_f64; 3];
        let mut counts = [0_usize; 3];

        for item in items {
            // 無法辨識的 course 直接略過
            let Some(course) = item.course() else {
                continue;
            };
            let index = course.index();
            sums[index] += price_value(&item.price, self.price_policy);
            counts[index] += 1;
        }

        let mut averages = [0.0_f64; 3];
        for i in 0..3 {
            if counts[i] > 0 {
                averages[i] = sums[i] / counts[i] as f64;
            }
        }

        CourseAverages::from_array(averages)
    }

    pub fn filter_by_course(&self, items: &MenuCollection, course: Course) -> MenuCollection {
        items
            .iter()
            .filter(|item| item.course() == Some(course))
            .cloned()
            .collect()
    }
}

/// [`MenuAggregator::compute_averages`] with unparsable prices counted as 0.
pub fn compute_averages(items: &MenuCollection) -> CourseAverages {
    MenuAggregator::default().compute_averages(items)
}

pub fn filter_by_course(items: &MenuCollection, course: Course) -> MenuCollection {
    MenuAggregator::default().filter_by_course(items, course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MenuItem;

    fn sample_menu() -> MenuCollection {
        vec![
            MenuItem::new("Soup", "Veg", "50", "Starters"),
            MenuItem::new("Steak", "Beef", "200", "Main"),
            MenuItem::new("Cake", "Choc", "80", "Dessert"),
            MenuItem::new("Salad", "Greens", "40", "Starters"),
        ]
        .into()
    }

    #[test]
    fn test_averages_per_course() {
        let averages = compute_averages(&sample_menu());
        assert_eq!(averages.as_array(), [45.0, 200.0, 80.0]);
    }

    #[test]
    fn test_empty_menu_averages_to_zero() {
        let averages = compute_averages(&MenuCollection::new());
        assert_eq!(averages.as_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_course_averages_to_zero() {
        let menu: MenuCollection = vec![MenuItem::new("Steak", "", "200", "Main")].into();
        let averages = compute_averages(&menu);
        assert_eq!(averages.starters, 0.0);
        assert_eq!(averages.main, 200.0);
        assert_eq!(averages.dessert, 0.0);
    }

    #[test]
    fn test_ordinal_and_name_share_a_bucket() {
        let menu: MenuCollection = vec![
            MenuItem::new("Steak", "", "200", 2),
            MenuItem::new("Pasta", "", "100", "Main"),
        ]
        .into();
        assert_eq!(compute_averages(&menu).main, 150.0);
    }

    #[test]
    fn test_unknown_course_is_ignored() {
        let menu: MenuCollection = vec![
            MenuItem::new("Steak", "", "200", "Main"),
            MenuItem::new("Mystery", "", "1000", "Brunch"),
            MenuItem::new("Unset", "", "1000", ""),
            MenuItem::new("Seventh", "", "1000", 7),
        ]
        .into();
        assert_eq!(compute_averages(&menu).as_array(), [0.0, 200.0, 0.0]);
    }

    #[test]
    fn test_unparsable_price_counts_as_zero_by_default() {
        let menu: MenuCollection = vec![
            MenuItem::new("Cake", "", "80", "Dessert"),
            MenuItem::new("Tart", "", "free", "Dessert"),
        ]
        .into();
        assert_eq!(compute_averages(&menu).dessert, 40.0);
    }

    #[test]
    fn test_poison_policy_only_spoils_its_course() {
        let menu: MenuCollection = vec![
            MenuItem::new("Cake", "", "80", "Dessert"),
            MenuItem::new("Tart", "", "free", "Dessert"),
            MenuItem::new("Steak", "", "200", "Main"),
        ]
        .into();
        let averages = MenuAggregator::new(UnparsablePrice::Poison).compute_averages(&menu);
        assert!(averages.dessert.is_nan());
        assert_eq!(averages.main, 200.0);
        assert_eq!(averages.starters, 0.0);
    }

    #[test]
    fn test_averages_do_not_depend_on_order() {
        let menu = sample_menu();
        let mut reversed: Vec<MenuItem> = menu.iter().cloned().collect();
        reversed.reverse();
        assert_eq!(
            compute_averages(&menu),
            compute_averages(&MenuCollection::from(reversed))
        );
    }

    #[test]
    fn test_averages_do_not_mutate_input() {
        let menu = sample_menu();
        let before = menu.clone();
        let _ = compute_averages(&menu);
        let _ = filter_by_course(&menu, Course::Main);
        assert_eq!(menu, before);
    }

    #[test]
    fn test_filter_keeps_matching_items_in_order() {
        let menu = sample_menu();
        let starters = filter_by_course(&menu, Course::Starters);
        let names: Vec<&str> = starters.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Salad"]);
        assert!(starters
            .iter()
            .all(|item| item.course() == Some(Course::Starters)));
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        let menu: MenuCollection = vec![MenuItem::new("Soup", "Veg", "50", "Starters")].into();
        let mains = filter_by_course(&menu, Course::Main);
        assert!(mains.is_empty());
    }

    #[test]
    fn test_filter_matches_ordinal_items() {
        let menu: MenuCollection = vec![
            MenuItem::new("Steak", "", "200", 2),
            MenuItem::new("Soup", "", "50", 1),
            MenuItem::new("Pasta", "", "100", "Main"),
        ]
        .into();
        let mains = filter_by_course(&menu, Course::Main);
        let names: Vec<&str> = mains.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Steak", "Pasta"]);
    }

    #[test]
    fn test_filter_name_match_is_exact() {
        let menu: MenuCollection = vec![MenuItem::new("Steak", "", "200", "main")].into();
        assert!(filter_by_course(&menu, Course::Main).is_empty());
    }

    #[test]
    fn test_filter_count_matches_bucket_size() {
        let menu = sample_menu();
        for course in Course::ALL {
            let expected = menu.iter().filter(|item| item.course() == Some(course)).count();
            assert_eq!(filter_by_course(&menu, course).len(), expected);
        }
    }
}
