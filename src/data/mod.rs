/// Data layer: filter criteria, row matching, and file I/O.
///
/// Architecture:
/// ```text
///   timetable .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read lines, write selection
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  department prefix + year digit → matching rows
///   └──────────┘
///        │
///        ▼
///   Vec<String>  rows shown verbatim in the course list
/// ```

pub mod loader;
pub mod model;
pub mod filter;
