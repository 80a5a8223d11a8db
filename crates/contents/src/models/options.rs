//! Listing options consumed by the contents filter box.
//!
//! These mirror the query string of the admin contents list. Each enum
//! renders to its variant name, which is also the `value` posted back by
//! the filter box drop-downs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which versions of content items the list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentsStatus {
    #[default]
    Latest,
    Owner,
    Published,
    Draft,
    AllVersions,
}

impl ContentsStatus {
    /// All statuses in display order.
    pub const ALL: [ContentsStatus; 5] = [
        ContentsStatus::Latest,
        ContentsStatus::Owner,
        ContentsStatus::Published,
        ContentsStatus::Draft,
        ContentsStatus::AllVersions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentsStatus::Latest => "Latest",
            ContentsStatus::Owner => "Owner",
            ContentsStatus::Published => "Published",
            ContentsStatus::Draft => "Draft",
            ContentsStatus::AllVersions => "AllVersions",
        }
    }
}

/// Timestamp the list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentsOrder {
    Created,
    #[default]
    Modified,
    Published,
}

impl ContentsOrder {
    /// All sort fields in display order.
    pub const ALL: [ContentsOrder; 3] = [
        ContentsOrder::Created,
        ContentsOrder::Modified,
        ContentsOrder::Published,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentsOrder::Created => "Created",
            ContentsOrder::Modified => "Modified",
            ContentsOrder::Published => "Published",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// Both directions in display order (descending first).
    pub const ALL: [SortDirection; 2] = [SortDirection::Descending, SortDirection::Ascending];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(ContentsStatus, ContentsOrder, SortDirection);

/// Filter and sort options of the admin contents list.
///
/// Missing query parameters fall back to the defaults: latest versions,
/// most recently modified first, all content types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentOptions {
    #[serde(rename = "status")]
    pub contents_status: ContentsStatus,
    #[serde(rename = "order")]
    pub order_by: ContentsOrder,
    #[serde(rename = "direction")]
    pub sort_direction: SortDirection,
    /// Selected content type machine name, if any.
    #[serde(rename = "type", deserialize_with = "empty_as_none")]
    pub type_name: Option<String>,
}

impl ContentOptions {
    /// Selected type name, treating an empty string as "no type".
    pub fn selected_type(&self) -> Option<&str> {
        self.type_name.as_deref().filter(|t| !t.is_empty())
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
