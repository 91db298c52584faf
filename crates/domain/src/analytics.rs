pub mod aggregate;
pub mod sort;

pub use aggregate::{
    EMPTY_AVERAGE, LastNameTally, average_age, average_age_or, count_by_last_name, most_frequent_last_name,
    most_frequent_last_name_with,
};
pub use sort::{SortOrder, SortSpec, SortStrategy, sort_by_age_desc_then_name_asc};
