//! The list of walkthroughs and their static metadata.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Every walkthrough, in display order.
pub const ALL: [AlgorithmId; 9] = [
    AlgorithmId::LinearSearch,
    AlgorithmId::BinarySearch,
    AlgorithmId::BubbleSort,
    AlgorithmId::MergeSort,
    AlgorithmId::QuickSort,
    AlgorithmId::HeapSort,
    AlgorithmId::ShortestPath,
    AlgorithmId::Stack,
    AlgorithmId::Queue,
];

/// Identifies a walkthrough by its URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmId {
    LinearSearch,
    BinarySearch,
    BubbleSort,
    MergeSort,
    QuickSort,
    HeapSort,
    ShortestPath,
    Stack,
    Queue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Searching,
    Sorting,
    Graphs,
    DataStructures,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Searching => "Searching",
            Category::Sorting => "Sorting",
            Category::Graphs => "Graphs",
            Category::DataStructures => "Data Structures",
        };
        f.write_str(name)
    }
}

/// Card text shown for a walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub id: AlgorithmId,
    pub title: &'static str,
    pub tagline: &'static str,
    pub story: &'static str,
    pub difficulty: Difficulty,
    pub category: Category,
}

impl AlgorithmId {
    pub fn slug(&self) -> &'static str {
        match self {
            AlgorithmId::LinearSearch => "linear-search",
            AlgorithmId::BinarySearch => "binary-search",
            AlgorithmId::BubbleSort => "bubble-sort",
            AlgorithmId::MergeSort => "merge-sort",
            AlgorithmId::QuickSort => "quick-sort",
            AlgorithmId::HeapSort => "heap-sort",
            AlgorithmId::ShortestPath => "shortest-path",
            AlgorithmId::Stack => "stack",
            AlgorithmId::Queue => "queue",
        }
    }

    pub fn metadata(&self) -> Metadata {
        let (title, tagline, story, difficulty, category) = match self {
            AlgorithmId::LinearSearch => (
                "Linear Search",
                "The detective's methodical investigation",
                "A detective examines every piece of evidence in order until the murder weapon turns up.",
                Difficulty::Beginner,
                Category::Searching,
            ),
            AlgorithmId::BinarySearch => (
                "Binary Search",
                "The librarian's clever book hunt",
                "A librarian halves an alphabetized shelf again and again to find a single title.",
                Difficulty::Beginner,
                Category::Searching,
            ),
            AlgorithmId::BubbleSort => (
                "Bubble Sort",
                "Watch bubbles rise to find their perfect place",
                "Neighbouring bubbles trade places until the largest float to the surface.",
                Difficulty::Beginner,
                Category::Sorting,
            ),
            AlgorithmId::MergeSort => (
                "Merge Sort",
                "The art of organizing chaos through unity",
                "A clerk splits a pile of papers down to single sheets, then merges them back in order.",
                Difficulty::Intermediate,
                Category::Sorting,
            ),
            AlgorithmId::QuickSort => (
                "Quick Sort",
                "The swift warrior's battlefield strategy",
                "A commander picks a pivot troop and sends the smaller troops to one flank.",
                Difficulty::Intermediate,
                Category::Sorting,
            ),
            AlgorithmId::HeapSort => (
                "Heap Sort",
                "The mountain climber's peak conquest",
                "Stones are piled into a mountain with the largest on the peak, then taken off one by one.",
                Difficulty::Advanced,
                Category::Sorting,
            ),
            AlgorithmId::ShortestPath => (
                "Shortest Path",
                "The messenger's quickest route through town",
                "A messenger works out the cheapest road from the market square to the castle.",
                Difficulty::Intermediate,
                Category::Graphs,
            ),
            AlgorithmId::Stack => (
                "Stack",
                "The tower of plates in a busy kitchen",
                "Plates go on top of the tower and come off the top again: last in, first out.",
                Difficulty::Beginner,
                Category::DataStructures,
            ),
            AlgorithmId::Queue => (
                "Queue",
                "The fair line at the village bakery",
                "Customers join the back of the line and are served from the front: first in, first out.",
                Difficulty::Beginner,
                Category::DataStructures,
            ),
        };
        Metadata {
            id: *self,
            title,
            tagline,
            story,
            difficulty,
            category,
        }
    }

    pub fn category(&self) -> Category {
        self.metadata().category
    }

    /// Stack and queue are driven by the user rather than by a trace.
    pub fn is_interactive(&self) -> bool {
        matches!(self, AlgorithmId::Stack | AlgorithmId::Queue)
    }

    /// Tick interval at normal speed, or `None` for interactive demos.
    pub fn base_interval(&self) -> Option<Duration> {
        let millis = match self {
            AlgorithmId::BubbleSort => 1000,
            AlgorithmId::LinearSearch
            | AlgorithmId::MergeSort
            | AlgorithmId::QuickSort
            | AlgorithmId::ShortestPath => 1500,
            AlgorithmId::BinarySearch | AlgorithmId::HeapSort => 2000,
            AlgorithmId::Stack | AlgorithmId::Queue => return None,
        };
        Some(Duration::from_millis(millis))
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .copied()
            .find(|id| id.slug() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Walkthroughs in display order, optionally limited to one category.
pub fn filter(category: Option<Category>) -> Vec<Metadata> {
    ALL.iter()
        .filter(|id| category.map_or(true, |c| id.category() == c))
        .map(AlgorithmId::metadata)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for id in ALL {
            assert_eq!(id.slug().parse::<AlgorithmId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_slug() {
        assert_eq!(
            "bogo-sort".parse::<AlgorithmId>(),
            Err(Error::UnknownAlgorithm("bogo-sort".into()))
        );
    }

    #[test]
    fn serde_uses_slugs() {
        let json = serde_json::to_string(&AlgorithmId::ShortestPath).unwrap();
        assert_eq!(json, "\"shortest-path\"");
        let category = serde_json::to_string(&Category::DataStructures).unwrap();
        assert_eq!(category, "\"data-structures\"");
    }

    #[test]
    fn filter_by_category() {
        let sorting: Vec<AlgorithmId> = filter(Some(Category::Sorting)).iter().map(|m| m.id).collect();
        assert_eq!(
            sorting,
            vec![
                AlgorithmId::BubbleSort,
                AlgorithmId::MergeSort,
                AlgorithmId::QuickSort,
                AlgorithmId::HeapSort
            ]
        );
        assert_eq!(filter(None).len(), ALL.len());
        assert_eq!(filter(Some(Category::Graphs)).len(), 1);
    }

    #[test]
    fn intervals() {
        assert_eq!(AlgorithmId::BubbleSort.base_interval(), Some(Duration::from_millis(1000)));
        assert_eq!(AlgorithmId::HeapSort.base_interval(), Some(Duration::from_millis(2000)));
        assert_eq!(AlgorithmId::Stack.base_interval(), None);
        for id in ALL {
            assert_eq!(id.base_interval().is_none(), id.is_interactive());
        }
    }

    #[test]
    fn categories() {
        assert_eq!(AlgorithmId::LinearSearch.category(), Category::Searching);
        assert_eq!(AlgorithmId::ShortestPath.category(), Category::Graphs);
        assert_eq!(AlgorithmId::Stack.category(), Category::DataStructures);
        for id in ALL {
            assert_eq!(id.category(), id.metadata().category);
        }
    }

    #[test]
    fn difficulty_levels() {
        assert_eq!(AlgorithmId::HeapSort.metadata().difficulty, Difficulty::Advanced);
        assert_eq!(AlgorithmId::Queue.metadata().category.to_string(), "Data Structures");
        assert!(Difficulty::Beginner < Difficulty::Advanced);
    }
}
