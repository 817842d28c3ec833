//! List helpers shared by every data table: search, sort, pagination
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that can be found by the table search box
pub trait Searchable {
    /// Text of every visible cell, in column order
    fn search_cells(&self) -> Vec<String>;

    /// Case-insensitive substring match over the visible cells
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_cells()
                .iter()
                .any(|cell| cell.to_lowercase().contains(&needle))
    }
}

/// Rows that can be ordered by a column key
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort and direction of a table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<&'static str>,
    pub ascending: bool,
}

impl SortState {
    /// A new column starts ascending; the active column flips direction
    pub fn toggle(&mut self, field: &'static str) {
        if self.field == Some(field) {
            self.ascending = !self.ascending;
        } else {
            self.field = Some(field);
            self.ascending = true;
        }
    }
}

/// Compare two `f64`s, treating NaN as equal
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Case-insensitive text comparison
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Sort in place; stable, so equal rows keep store order
pub fn sort_list<T: Sortable>(items: &mut [T], sort: &SortState) {
    if let Some(field) = sort.field {
        items.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, field);
            if sort.ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
    }
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Number of pages; an empty list still has one page
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Clamp `page` (0-indexed) to the last page
pub fn clamp_page(page: usize, count: usize, page_size: usize) -> usize {
    page.min(total_pages(count, page_size) - 1)
}

/// Rows of one page
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = clamp_page(page, items.len(), page_size);
    items
        .iter()
        .skip(page * page_size)
        .take(page_size.max(1))
        .cloned()
        .collect()
}

/// "Rows 11-20 of 42" footer text for one page
pub fn page_range_text(page: usize, count: usize, page_size: usize) -> String {
    if count == 0 {
        return "No rows".to_string();
    }
    let page = clamp_page(page, count, page_size);
    let first = page * page_size + 1;
    let last = (first + page_size.max(1) - 1).min(count);
    format!("Rows {}-{} of {}", first, last, count)
}

/// Sort indicator for a column header
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.field == Some(field) {
        if sort.ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Search box with a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || (!value.get().is_empty()).then(|| view! {
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        size: f64,
    }

    impl Searchable for Row {
        fn search_cells(&self) -> Vec<String> {
            vec![self.name.to_string(), format!("{} acres", self.size)]
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_text(self.name, other.name),
                "size" => cmp_f64(self.size, other.size),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Green Acres", size: 50.0 },
            Row { name: "river side", size: 100.0 },
            Row { name: "Maple Woods", size: 80.0 },
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_over_cells() {
        let found = filter_list(rows(), "RIVER");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "river side");

        assert_eq!(filter_list(rows(), "80 acres").len(), 1);
        assert_eq!(filter_list(rows(), "  ").len(), 3);
        assert!(filter_list(rows(), "nothing").is_empty());
    }

    #[test]
    fn test_sort_toggle() {
        let mut sort = SortState::default();
        sort.toggle("size");
        assert_eq!(sort, SortState { field: Some("size"), ascending: true });
        sort.toggle("size");
        assert!(!sort.ascending);
        sort.toggle("name");
        assert_eq!(sort, SortState { field: Some("name"), ascending: true });
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        let mut sort = SortState::default();
        sort.toggle("size");
        sort_list(&mut items, &sort);
        assert_eq!(items[0].size, 50.0);
        sort.toggle("size");
        sort_list(&mut items, &sort);
        assert_eq!(items[0].size, 100.0);

        sort.toggle("name");
        sort_list(&mut items, &sort);
        let names: Vec<&str> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Green Acres", "Maple Woods", "river side"]);
    }

    #[test]
    fn test_pagination_math() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(clamp_page(5, 21, 10), 2);

        let items: Vec<usize> = (0..25).collect();
        assert_eq!(paginate(&items, 0, 10), (0..10).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 2, 10), vec![20, 21, 22, 23, 24]);
        assert_eq!(paginate(&items, 9, 20), (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_range_text() {
        assert_eq!(page_range_text(0, 0, 10), "No rows");
        assert_eq!(page_range_text(0, 42, 10), "Rows 1-10 of 42");
        assert_eq!(page_range_text(4, 42, 10), "Rows 41-42 of 42");
        assert_eq!(page_range_text(7, 42, 20), "Rows 41-42 of 42");
    }

    #[test]
    fn test_sort_indicator() {
        let mut sort = SortState::default();
        assert_eq!(get_sort_indicator(&sort, "name"), " ⇅");
        sort.toggle("name");
        assert_eq!(get_sort_indicator(&sort, "name"), " ▲");
        sort.toggle("name");
        assert_eq!(get_sort_indicator(&sort, "name"), " ▼");
    }
}
