//! Course catalog listing: search, ordering, pagination and badges.
//!
//! Pure functions over already loaded rows, so the rules can be tested
//! without touching the CSV store.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::commands::courses::{CatalogEntry, CatalogPage, CourseCatalogQuery, CourseOrder};
use crate::domain::models::Course;

/// Page sizes the catalog offers; anything else falls back to the first
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [6, 9, 12];

/// How many leading entries of a listing carry the "new" badge
pub const NEW_BADGE_COUNT: usize = 3;

/// How many courses the home page features
pub const FEATURED_COUNT: usize = 4;

pub fn effective_page_size(requested: Option<u32>) -> u32 {
    match requested {
        Some(size) if PAGE_SIZE_OPTIONS.contains(&size) => size,
        _ => PAGE_SIZE_OPTIONS[0],
    }
}

/// Case-insensitive substring match on title or instructor
pub fn matches_search(course: &Course, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    course.title.to_lowercase().contains(&needle)
        || course.instructor.to_lowercase().contains(&needle)
}

pub fn sort_courses(courses: &mut [Course], order: CourseOrder) {
    match order {
        CourseOrder::Newest => courses.sort_by(|a, b| b.id.cmp(&a.id)),
        CourseOrder::Title => courses.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
        CourseOrder::Instructor => courses.sort_by(|a, b| compare_instructors(&a.instructor, &b.instructor)),
    }
}

// Blank instructors sort after every named one
fn compare_instructors(a: &str, b: &str) -> Ordering {
    match (a.trim().is_empty(), b.trim().is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Build the requested page of the catalog
pub fn build_page(
    courses: Vec<Course>,
    enrollment_counts: &HashMap<i64, u32>,
    query: &CourseCatalogQuery,
) -> CatalogPage {
    let mut listed: Vec<Course> = match query.search.as_deref() {
        Some(search) => courses.into_iter().filter(|c| matches_search(c, search)).collect(),
        None => courses,
    };
    sort_courses(&mut listed, query.order);

    let page_size = effective_page_size(query.page_size);
    let total_courses = listed.len() as u32;
    let total_pages = total_courses.div_ceil(page_size).max(1);
    let page = query.page.unwrap_or(1).clamp(1, total_pages);

    let start = ((page - 1) * page_size) as usize;
    let entries = listed
        .into_iter()
        .enumerate()
        .skip(start)
        .take(page_size as usize)
        .map(|(position, course)| CatalogEntry {
            enrollment_count: enrollment_counts.get(&course.id).copied().unwrap_or(0),
            is_new: position < NEW_BADGE_COUNT,
            course,
        })
        .collect();

    CatalogPage {
        entries,
        page,
        page_size,
        total_pages,
        total_courses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, title: &str, instructor: &str) -> Course {
        Course {
            id,
            title: title.to_string(),
            description: String::new(),
            instructor: instructor.to_string(),
            thumbnail: String::new(),
            asset_path: String::new(),
        }
    }

    fn many(count: i64) -> Vec<Course> {
        (1..=count).map(|id| course(id, &format!("Course {:02}", id), "Staff")).collect()
    }

    #[test]
    fn test_effective_page_size() {
        assert_eq!(effective_page_size(None), 6);
        assert_eq!(effective_page_size(Some(9)), 9);
        assert_eq!(effective_page_size(Some(12)), 12);
        assert_eq!(effective_page_size(Some(7)), 6);
        assert_eq!(effective_page_size(Some(0)), 6);
    }

    #[test]
    fn test_search_matches_title_or_instructor_case_insensitively() {
        let c = course(1, "Intro to Rust", "Ferris Crab");
        assert!(matches_search(&c, "rust"));
        assert!(matches_search(&c, "FERRIS"));
        assert!(matches_search(&c, "  "));
        assert!(!matches_search(&c, "python"));
    }

    #[test]
    fn test_newest_orders_by_id_descending() {
        let mut courses = vec![course(2, "B", "x"), course(9, "A", "y"), course(4, "C", "z")];
        sort_courses(&mut courses, CourseOrder::Newest);
        let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![9, 4, 2]);
    }

    #[test]
    fn test_title_order() {
        let mut courses = vec![course(1, "beta", "x"), course(2, "Alpha", "y"), course(3, "Gamma", "z")];
        sort_courses(&mut courses, CourseOrder::Title);
        let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_instructor_order_puts_blank_last() {
        let mut courses = vec![course(1, "A", ""), course(2, "B", "Zed"), course(3, "C", "amy")];
        sort_courses(&mut courses, CourseOrder::Instructor);
        let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_pagination_counts_and_clamping() {
        let query = CourseCatalogQuery {
            page: Some(99),
            page_size: Some(6),
            order: CourseOrder::Title,
            ..Default::default()
        };

        let page = build_page(many(14), &HashMap::new(), &query);

        assert_eq!(page.total_courses, 14);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.entries[0].course.id, 13);
    }

    #[test]
    fn test_page_zero_is_clamped_to_first() {
        let query = CourseCatalogQuery {
            page: Some(0),
            ..Default::default()
        };
        let page = build_page(many(3), &HashMap::new(), &query);
        assert_eq!(page.page, 1);
        assert_eq!(page.entries.len(), 3);
    }

    #[test]
    fn test_empty_catalog_has_one_page() {
        let page = build_page(Vec::new(), &HashMap::new(), &CourseCatalogQuery::default());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.entries.is_empty());
    }

    #[test]
    fn test_badges() {
        let counts = HashMap::from([(14, 3), (10, 0)]);
        let query = CourseCatalogQuery {
            page_size: Some(6),
            ..Default::default()
        };

        let first = build_page(many(14), &counts, &query);
        let new_ids: Vec<i64> = first.entries.iter().filter(|e| e.is_new).map(|e| e.course.id).collect();
        assert_eq!(new_ids, vec![14, 13, 12]);
        assert!(first.entries[0].is_popular());
        assert_eq!(first.entries[0].enrollment_count, 3);
        assert!(!first.entries[4].is_popular());

        let second = build_page(many(14), &counts, &CourseCatalogQuery { page: Some(2), ..query });
        assert!(second.entries.iter().all(|e| !e.is_new));
    }

    #[test]
    fn test_search_filters_before_paging() {
        let mut courses = many(8);
        courses.push(course(20, "Advanced Rust", "Ferris"));
        let query = CourseCatalogQuery {
            search: Some("rust".to_string()),
            ..Default::default()
        };

        let page = build_page(courses, &HashMap::new(), &query);

        assert_eq!(page.total_courses, 1);
        assert_eq!(page.entries[0].course.id, 20);
    }
}
