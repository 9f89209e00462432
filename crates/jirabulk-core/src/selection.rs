//! Resolve a user selection string to a subset of tasks

use crate::models::Task;

/// Parsed form of a selection string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    /// Zero-based indices, in the order given, already bounds-checked
    Indices(Vec<usize>),
}

impl Selection {
    /// Parse `input` against a list of `len` tasks.
    ///
    /// `all` (any case) selects everything. Otherwise the input is a
    /// comma-separated list of 1-based numbers; tokens that are not numbers
    /// or fall outside `1..=len` are dropped.
    pub fn parse(input: &str, len: usize) -> Self {
        if input.trim().eq_ignore_ascii_case("all") {
            return Selection::All;
        }

        let indices = input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
            .filter_map(|token| token.parse::<usize>().ok())
            .filter(|n| (1..=len).contains(n))
            .map(|n| n - 1)
            .collect();

        Selection::Indices(indices)
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        match self {
            Selection::All => tasks.iter().collect(),
            Selection::Indices(indices) => indices.iter().filter_map(|&i| tasks.get(i)).collect(),
        }
    }
}

/// Tasks matching `input`, in selection order
pub fn select_tasks<'a>(tasks: &'a [Task], input: &str) -> Vec<&'a Task> {
    Selection::parse(input, tasks.len()).apply(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> Vec<Task> {
        ["one", "two", "three"]
            .iter()
            .map(|s| Task::new(*s, format!("{} description", s)))
            .collect()
    }

    fn summaries(selected: &[&Task]) -> Vec<String> {
        selected.iter().map(|t| t.summary.clone()).collect()
    }

    #[test]
    fn test_all_any_case() {
        let tasks = tasks();
        for input in ["all", "ALL", "  All  ", "aLl\n"] {
            let selected = select_tasks(&tasks, input);
            assert_eq!(summaries(&selected), ["one", "two", "three"], "input {:?}", input);
        }
    }

    #[test]
    fn test_indices_in_given_order() {
        let tasks = tasks();
        assert_eq!(summaries(&select_tasks(&tasks, "3, 1")), ["three", "one"]);
    }

    #[test]
    fn test_invalid_tokens_are_dropped() {
        let tasks = tasks();
        let selected = select_tasks(&tasks, "0, 2, x, 4, -1, 1.5, +3, , 3");
        assert_eq!(summaries(&selected), ["two", "three"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let tasks = tasks();
        assert_eq!(summaries(&select_tasks(&tasks, "2,2")), ["two", "two"]);
    }

    #[test]
    fn test_empty_and_malformed_yield_nothing() {
        let tasks = tasks();
        assert!(select_tasks(&tasks, "").is_empty());
        assert!(select_tasks(&tasks, "none").is_empty());
        assert!(select_tasks(&tasks, ",,,").is_empty());
        assert!(select_tasks(&[], "1").is_empty());
    }

    #[test]
    fn test_huge_number_is_dropped() {
        let tasks = tasks();
        assert_eq!(
            Selection::parse("99999999999999999999999, 1", tasks.len()),
            Selection::Indices(vec![0])
        );
    }

    #[test]
    fn test_all_on_empty_list() {
        assert_eq!(Selection::parse("all", 0), Selection::All);
        assert!(select_tasks(&[], "all").is_empty());
    }
}
