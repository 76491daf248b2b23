pub mod named_group;
