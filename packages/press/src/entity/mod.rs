//! Tables of the legacy content schema touched by a module publish.

pub mod abstracts;
pub mod files;
pub mod keywords;
pub mod latest_modules;
pub mod licenses;
pub mod module_files;
pub mod modulekeywords;
pub mod modules;
pub mod moduletags;
pub mod tags;
