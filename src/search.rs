//! Chapter search.
//!
//! Case-insensitive substring match over chapter titles, subtitles, and
//! keywords. The dataset is a dozen chapters, so every keystroke simply
//! rescans the registry; nothing is indexed or cached.

use crate::book::{Chapter, ChapterRegistry};

/// Chapters matching `query`, in registry order.
///
/// A blank (empty or whitespace-only) query matches nothing.
pub fn filter<'a, I>(query: &str, chapters: I) -> Vec<&'a Chapter>
where
    I: IntoIterator<Item = &'a Chapter>,
{
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    chapters
        .into_iter()
        .filter(|chapter| matches(chapter, &needle))
        .collect()
}

/// `needle` must already be lowercase.
fn matches(chapter: &Chapter, needle: &str) -> bool {
    chapter.title.to_lowercase().contains(needle)
        || chapter
            .subtitle
            .as_ref()
            .is_some_and(|s| s.to_lowercase().contains(needle))
        || chapter
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(needle))
}

/// What the search overlay should show for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Nothing typed yet.
    Hint,
    Results(Vec<&'a Chapter>),
    NoResults,
}

/// Search over a borrowed registry.
pub struct ChapterSearch<'a> {
    registry: &'a ChapterRegistry,
}

impl<'a> ChapterSearch<'a> {
    pub fn new(registry: &'a ChapterRegistry) -> Self {
        Self { registry }
    }

    pub fn matches(&self, query: &str) -> Vec<&'a Chapter> {
        filter(query, self.registry)
    }

    pub fn count(&self, query: &str) -> usize {
        self.matches(query).len()
    }

    /// Classify `query` for display.
    ///
    /// Only a truly empty query shows the hint; whitespace counts as typed
    /// text that matched nothing.
    pub fn outcome(&self, query: &str) -> SearchOutcome<'a> {
        if query.is_empty() {
            return SearchOutcome::Hint;
        }
        let results = self.matches(query);
        if results.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Results(results)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChapterRegistry {
        ChapterRegistry::new(vec![
            Chapter::new("ch1", "사주란 무엇일까요?").with_keywords(["사주", "팔자"]),
            Chapter::new("ch3", "오행").with_keywords(["목", "화", "토", "금", "수"]),
        ])
        .unwrap()
    }

    fn ids<'a>(chapters: &[&'a Chapter]) -> Vec<&'a str> {
        chapters.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn concrete_scenario() {
        let reg = sample();
        assert_eq!(ids(&filter("오행", &reg)), ["ch3"]);
        assert_eq!(ids(&filter("사주", &reg)), ["ch1"]);
        assert!(filter("", &reg).is_empty());
        assert!(filter("없음", &reg).is_empty());
    }

    #[test]
    fn whitespace_query_matches_nothing() {
        let reg = sample();
        assert!(filter("   ", &reg).is_empty());
        assert!(filter("\t\n", &reg).is_empty());
    }

    #[test]
    fn case_insensitive_over_all_fields() {
        let reg = ChapterRegistry::new(vec![
            Chapter::new("a", "Alpha"),
            Chapter::new("b", "Beta").with_subtitle("The SECOND one"),
            Chapter::new("c", "Gamma").with_keywords(["Third", "Last"]),
        ])
        .unwrap();
        assert_eq!(ids(&filter("ALPH", &reg)), ["a"]);
        assert_eq!(ids(&filter("second", &reg)), ["b"]);
        assert_eq!(ids(&filter("tHiR", &reg)), ["c"]);
        // substring, not word match
        assert_eq!(ids(&filter("a", &reg)), ["a", "b", "c"]);
    }

    #[test]
    fn missing_subtitle_does_not_match() {
        let reg = ChapterRegistry::new(vec![Chapter::new("x", "Title")]).unwrap();
        assert!(filter("sub", &reg).is_empty());
    }

    #[test]
    fn results_follow_registry_order() {
        let reg = ChapterRegistry::builtin().unwrap();
        let found = filter("살", &reg);
        let positions: Vec<usize> = found
            .iter()
            .map(|c| reg.position(&c.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn filter_is_exact_over_builtin() {
        let reg = ChapterRegistry::builtin().unwrap();
        for query in ["오행", "도화", "운", "STEP", "장", "ch"] {
            let found = filter(query, &reg);
            let q = query.to_lowercase();
            for chapter in reg.iter() {
                let expected = chapter.title.to_lowercase().contains(&q)
                    || chapter
                        .subtitle
                        .as_ref()
                        .is_some_and(|s| s.to_lowercase().contains(&q))
                    || chapter.keywords.iter().any(|k| k.to_lowercase().contains(&q));
                let got = found.iter().any(|c| c.id == chapter.id);
                assert_eq!(expected, got, "query {:?}, chapter {}", query, chapter.id);
            }
        }
    }

    #[test]
    fn outcome_states() {
        let reg = sample();
        let search = ChapterSearch::new(&reg);
        assert_eq!(search.outcome(""), SearchOutcome::Hint);
        assert_eq!(search.outcome("  "), SearchOutcome::NoResults);
        assert_eq!(search.outcome("없음"), SearchOutcome::NoResults);
        match search.outcome("목") {
            SearchOutcome::Results(found) => assert_eq!(ids(&found), ["ch3"]),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(search.count("팔자"), 1);
    }

    #[test]
    fn builtin_finds_dohwa() {
        let reg = ChapterRegistry::builtin().unwrap();
        assert_eq!(ids(&filter("도화살", &reg)), ["ch8"]);
        assert_eq!(ids(&filter("만세력", &reg)), ["ch2"]);
    }
}
