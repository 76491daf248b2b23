pub mod supported_groups;
